use skyframe_time::Epoch;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FrameKind {
    ICRF,
    FK5,
    FK4,
}

impl FrameKind {
    pub fn name(&self) -> &'static str {
        match self {
            FrameKind::ICRF => "ICRF",
            FrameKind::FK5 => "FK5",
            FrameKind::FK4 => "FK4",
        }
    }
}

/// A celestial reference system and its defining equinox.
///
/// A frame is an identity tag only. Positions in any frame enter the
/// pipeline as ICRS-aligned catalog places.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Frame {
    kind: FrameKind,
    equinox: Epoch,
}

impl Frame {
    pub fn icrf() -> Self {
        Self {
            kind: FrameKind::ICRF,
            equinox: Epoch::j2000(),
        }
    }

    pub fn fk5(equinox: Option<Epoch>) -> Self {
        Self {
            kind: FrameKind::FK5,
            equinox: equinox.unwrap_or_else(Epoch::j2000),
        }
    }

    pub fn fk4(equinox: Option<Epoch>) -> Self {
        Self {
            kind: FrameKind::FK4,
            equinox: equinox.unwrap_or_else(Epoch::b1950),
        }
    }

    pub fn kind(&self) -> FrameKind {
        self.kind
    }

    pub fn equinox(&self) -> Epoch {
        self.equinox
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::icrf()
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.kind {
            FrameKind::FK4 => self.equinox.besselian_label(),
            _ => self.equinox.julian_label(),
        };
        write!(f, "{}({})", self.kind.name(), label)
    }
}
