//! Ephemeral placement tuples and the highwater-channel comparator.
//!
//! Both types exist so their ordering rules are explicit, small, and
//! independently testable rather than inlined where they are consumed.

use semver::Version;

use super::tier::{StreamKind, Tier};

/// One bundle's position in one channel, as produced by the synthesizer.
///
/// Placements are consumed exactly once by the linker, which sorts the flat
/// list globally and assigns edges back into the channels by `index`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundlePlacement {
    /// Source tier of the bundle.
    pub tier: Tier,
    /// Stream kind of the containing channel.
    pub kind: StreamKind,
    /// Name of the containing channel.
    pub channel: String,
    /// Bundle name.
    pub bundle: String,
    /// Parsed bundle version.
    pub version: Version,
    /// Position of the entry within the channel's entry sequence.
    pub index: usize,
}

// The linker's global sort key: tier priority, then stream-kind priority,
// then version. Bundle name is a tie-break fallback only; real inputs cannot
// reach it because versions within one (tier, kind) are distinct
// post-validation.
impl PartialOrd for BundlePlacement {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BundlePlacement {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.tier
            .cmp(&other.tier)
            .then_with(|| self.kind.cmp(&other.kind))
            .then_with(|| self.version.cmp(&other.version))
            .then_with(|| self.bundle.cmp(&other.bundle))
    }
}

/// The most-preferred channel head seen so far during synthesis.
///
/// Comparison is lexicographic on (tier priority, version): a higher tier
/// always wins regardless of version. The channel name never participates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighwaterChannel {
    /// Tier of the channel head.
    pub tier: Tier,
    /// Version of the channel head.
    pub version: Version,
    /// Channel name; the final marker's name becomes the default channel.
    pub name: String,
}

impl HighwaterChannel {
    /// Sentinel marker lower than any real channel head.
    pub fn floor() -> Self {
        Self {
            tier: Tier::ALL[0],
            version: Version::new(0, 0, 0),
            name: String::new(),
        }
    }
}

impl PartialOrd for HighwaterChannel {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HighwaterChannel {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.tier
            .cmp(&other.tier)
            .then_with(|| self.version.cmp(&other.version))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    fn placement(tier: Tier, kind: StreamKind, version: &str, bundle: &str) -> BundlePlacement {
        BundlePlacement {
            tier,
            kind,
            channel: String::new(),
            bundle: bundle.to_string(),
            version: v(version),
            index: 0,
        }
    }

    #[test]
    fn test_placement_sort_key() {
        let a = placement(Tier::Candidate, StreamKind::Minor, "9.0.0", "a");
        let b = placement(Tier::Stable, StreamKind::Major, "1.0.0", "b");
        // Tier dominates version.
        assert!(a < b);

        let c = placement(Tier::Stable, StreamKind::Major, "2.0.0", "c");
        let d = placement(Tier::Stable, StreamKind::Minor, "1.0.0", "d");
        // Stream kind dominates version within a tier.
        assert!(c < d);

        let e = placement(Tier::Stable, StreamKind::Minor, "1.0.1", "e");
        assert!(d < e);
    }

    #[test]
    fn test_highwater_tier_dominates_version() {
        let stable = HighwaterChannel {
            tier: Tier::Stable,
            version: v("1.0.0"),
            name: "stable-v1.0".to_string(),
        };
        let fast = HighwaterChannel {
            tier: Tier::Fast,
            version: v("9.9.9"),
            name: "fast-v9.9".to_string(),
        };
        assert!(fast < stable);
    }

    #[test]
    fn test_highwater_version_breaks_tier_tie() {
        let low = HighwaterChannel {
            tier: Tier::Stable,
            version: v("1.1.0"),
            name: "stable-v1.1".to_string(),
        };
        let high = HighwaterChannel {
            tier: Tier::Stable,
            version: v("1.2.0"),
            name: "stable-v1.2".to_string(),
        };
        assert!(low < high);
    }

    #[test]
    fn test_highwater_floor_below_everything() {
        let floor = HighwaterChannel::floor();
        let head = HighwaterChannel {
            tier: Tier::Candidate,
            version: v("0.0.1"),
            name: "candidate-v0.0".to_string(),
        };
        assert!(floor < head);
    }

    #[test]
    fn test_highwater_floor_ties_zero_version_head() {
        // The sentinel equals a real 0.0.0 candidate head; callers resolve
        // ties by keeping the incumbent, so such a head never wins.
        let floor = HighwaterChannel::floor();
        let head = HighwaterChannel {
            tier: Tier::Candidate,
            version: v("0.0.0"),
            name: "candidate-v0.0".to_string(),
        };
        assert_eq!(floor.cmp(&head), std::cmp::Ordering::Equal);
        assert!(!(head > floor));
    }

    #[test]
    fn test_highwater_name_does_not_participate() {
        let a = HighwaterChannel {
            tier: Tier::Stable,
            version: v("1.0.0"),
            name: "stable-v1".to_string(),
        };
        let b = HighwaterChannel {
            tier: Tier::Stable,
            version: v("1.0.0"),
            name: "stable-v1.0".to_string(),
        };
        assert_eq!(a.cmp(&b), std::cmp::Ordering::Equal);
    }
}
