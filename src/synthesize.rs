//! Channel synthesis: place every bundle into its channels, unlinked.

use std::collections::BTreeMap;

use crate::extract::VersionMap;
use crate::types::{
    channel_name, BundlePlacement, Channel, ChannelEntry, HighwaterChannel, StreamKind, Tier,
};

/// Which stream kinds to generate channels for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamFlags {
    /// Generate one channel family per major version.
    pub major: bool,
    /// Generate one channel family per minor version.
    pub minor: bool,
}

impl StreamFlags {
    fn enabled(&self) -> impl Iterator<Item = StreamKind> + '_ {
        [
            (self.major, StreamKind::Major),
            (self.minor, StreamKind::Minor),
        ]
        .into_iter()
        .filter_map(|(on, kind)| on.then_some(kind))
    }
}

impl Default for StreamFlags {
    fn default() -> Self {
        Self {
            major: false,
            minor: true,
        }
    }
}

/// Output of one synthesis pass: unlinked channels, the flat placement list,
/// and the computed default channel.
#[derive(Debug, Clone)]
pub struct Synthesis {
    /// Channels by name, entries unlinked (no edges yet).
    pub channels: BTreeMap<String, Channel>,
    /// Every (tier, stream, channel, bundle, version, index) placement made.
    pub placements: Vec<BundlePlacement>,
    /// Name of the channel holding the most-preferred head. Empty when no
    /// bundle was placed.
    pub default_channel: String,
}

/// Walk every tier in priority order and assign each bundle to one channel
/// per enabled stream kind, creating channels lazily.
///
/// Bundles are walked in ascending version order (ties are impossible after
/// validation), so channel entries are born sorted and the linker never
/// re-sorts a channel. A brand-new channel's head competes for the highwater
/// marker; the comparison is strictly-greater, so the incumbent wins ties and
/// the marker's final name is the package's default channel.
pub fn synthesize(
    versions: &BTreeMap<Tier, VersionMap>,
    package: &str,
    streams: StreamFlags,
) -> Synthesis {
    let mut channels: BTreeMap<String, Channel> = BTreeMap::new();
    let mut placements: Vec<BundlePlacement> = Vec::new();

    // Sentinel below any real channel head.
    let mut highwater = HighwaterChannel::floor();

    for tier in Tier::ALL {
        let Some(bundles) = versions.get(&tier) else {
            continue;
        };
        if bundles.is_empty() {
            continue;
        }

        // Ascending version order; never the map's name order.
        let mut names: Vec<&String> = bundles.keys().collect();
        names.sort_by(|a, b| bundles[*a].cmp(&bundles[*b]));

        for bundle in names {
            let version = &bundles[bundle];

            for kind in streams.enabled() {
                let name = channel_name(tier, kind, version);

                let channel = channels.entry(name.clone()).or_insert_with(|| {
                    let candidate = HighwaterChannel {
                        tier,
                        version: version.clone(),
                        name: name.clone(),
                    };
                    if candidate > highwater {
                        highwater = candidate;
                    }
                    Channel::new(package, name.clone())
                });

                channel.entries.push(ChannelEntry::new(bundle.clone()));

                placements.push(BundlePlacement {
                    tier,
                    kind,
                    channel: name,
                    bundle: bundle.clone(),
                    version: version.clone(),
                    index: channel.entries.len() - 1,
                });
            }
        }
    }

    tracing::debug!(
        channels = channels.len(),
        placements = placements.len(),
        default_channel = %highwater.name,
        "synthesized unlinked channels"
    );

    Synthesis {
        channels,
        placements,
        default_channel: highwater.name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use semver::Version;

    fn tier_versions(entries: &[(Tier, &[(&str, &str)])]) -> BTreeMap<Tier, VersionMap> {
        entries
            .iter()
            .map(|(tier, bundles)| {
                (
                    *tier,
                    bundles
                        .iter()
                        .map(|(n, v)| (n.to_string(), Version::parse(v).unwrap()))
                        .collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_minor_channels_partition_by_minor() {
        let versions = tier_versions(&[(
            Tier::Stable,
            &[("a", "1.0.0"), ("b", "1.0.1"), ("c", "1.1.0")],
        )]);
        let out = synthesize(&versions, "pkg", StreamFlags::default());

        assert_eq!(out.channels.len(), 2);
        let v10 = &out.channels["stable-v1.0"];
        assert_eq!(
            v10.entries.iter().map(|e| e.name.as_str()).collect::<Vec<_>>(),
            ["a", "b"]
        );
        let v11 = &out.channels["stable-v1.1"];
        assert_eq!(v11.entries[0].name, "c");
        assert_eq!(out.default_channel, "stable-v1.1");
    }

    #[test]
    fn test_entries_sorted_by_version_not_name() {
        // Names sort opposite to versions.
        let versions = tier_versions(&[(Tier::Stable, &[("z", "1.0.0"), ("a", "1.0.1")])]);
        let out = synthesize(&versions, "pkg", StreamFlags::default());
        let entries: Vec<_> = out.channels["stable-v1.0"]
            .entries
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(entries, ["z", "a"]);
    }

    #[test]
    fn test_both_streams_place_each_bundle_twice() {
        let versions = tier_versions(&[(Tier::Fast, &[("a", "1.0.0"), ("b", "2.0.0")])]);
        let out = synthesize(
            &versions,
            "pkg",
            StreamFlags {
                major: true,
                minor: true,
            },
        );

        assert_eq!(out.placements.len(), 4);
        assert!(out.channels.contains_key("fast-v1"));
        assert!(out.channels.contains_key("fast-v2"));
        assert!(out.channels.contains_key("fast-v1.0"));
        assert!(out.channels.contains_key("fast-v2.0"));
    }

    #[test]
    fn test_major_channel_wins_highwater_tie() {
        // Both stream heads share (tier, version); the first-created channel
        // keeps the marker, and major streams are walked first.
        let versions = tier_versions(&[(Tier::Stable, &[("a", "1.0.0")])]);
        let out = synthesize(
            &versions,
            "pkg",
            StreamFlags {
                major: true,
                minor: true,
            },
        );
        assert_eq!(out.default_channel, "stable-v1");
    }

    #[test]
    fn test_higher_tier_wins_default_over_higher_version() {
        let versions = tier_versions(&[
            (Tier::Fast, &[("f", "9.0.0")]),
            (Tier::Stable, &[("s", "1.2.0")]),
        ]);
        let out = synthesize(&versions, "pkg", StreamFlags::default());
        assert_eq!(out.default_channel, "stable-v1.2");
    }

    #[test]
    fn test_empty_tiers_skipped() {
        let versions = tier_versions(&[(Tier::Candidate, &[("a", "0.1.0")]), (Tier::Stable, &[])]);
        let out = synthesize(&versions, "pkg", StreamFlags::default());
        assert_eq!(out.channels.len(), 1);
        assert_eq!(out.default_channel, "candidate-v0.1");
    }

    #[test]
    fn test_no_bundles_no_default() {
        let out = synthesize(&BTreeMap::new(), "pkg", StreamFlags::default());
        assert!(out.channels.is_empty());
        assert!(out.placements.is_empty());
        assert!(out.default_channel.is_empty());
    }

    #[test]
    fn test_placement_indices_match_entry_positions() {
        let versions = tier_versions(&[(
            Tier::Stable,
            &[("a", "1.0.0"), ("b", "1.0.1"), ("c", "1.0.2")],
        )]);
        let out = synthesize(&versions, "pkg", StreamFlags::default());

        for p in &out.placements {
            assert_eq!(out.channels[&p.channel].entries[p.index].name, p.bundle);
        }
    }
}
