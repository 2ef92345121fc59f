//! Stability tiers and channel stream kinds.
//!
//! Both enums are declared in priority-ascending order so the derived `Ord`
//! *is* the priority order used for synthesis and linking. Never reorder
//! variants without auditing every sort that depends on them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stability tier of a bundle list (channel archetype).
///
/// Fixed by policy, not configuration. Stable is the most preferred tier for
/// default-channel selection, candidate the least.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Pre-release candidates, lowest preference.
    Candidate,
    /// Early adopter stream.
    Fast,
    /// Production stream, highest preference.
    Stable,
}

impl Tier {
    /// All tiers in priority-ascending order.
    pub const ALL: [Tier; 3] = [Tier::Candidate, Tier::Fast, Tier::Stable];

    /// Numeric priority (higher = more preferred).
    pub fn priority(&self) -> u8 {
        *self as u8
    }

    /// Parse a tier from its channel-name prefix.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "candidate" => Some(Self::Candidate),
            "fast" => Some(Self::Fast),
            "stable" => Some(Self::Stable),
            _ => None,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Candidate => write!(f, "candidate"),
            Self::Fast => write!(f, "fast"),
            Self::Stable => write!(f, "stable"),
        }
    }
}

/// Partitioning granularity for generated channels.
///
/// Major and minor streams are independent: with both enabled, every bundle
/// lands in one channel per stream kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamKind {
    /// One channel per major version (`<tier>-vX`).
    Major,
    /// One channel per minor version (`<tier>-vX.Y`).
    Minor,
}

impl StreamKind {
    /// Numeric priority used by the linker's global sort.
    pub fn priority(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for StreamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Major => write!(f, "major"),
            Self::Minor => write!(f, "minor"),
        }
    }
}
