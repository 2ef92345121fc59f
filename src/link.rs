//! Edge linking: assign `replaces`/`skips` to every channel entry.
//!
//! One global sort of the flat placement list, one adjacent-pair scan.
//! Within a Y-stream (fixed tier + stream kind + major.minor), the highest-Z
//! entry accumulates skips over every lower-Z sibling and replaces the prior
//! Y-stream's highest-Z entry. Crossing a tier, stream-kind, or major
//! boundary starts a fresh chain with no carried state.

use std::collections::{BTreeMap, BTreeSet};

use crate::types::{BundlePlacement, Channel};

/// Link all placements into their channels, in place, by index.
///
/// The placements may arrive in any order; they are sorted here by
/// (tier priority, stream-kind priority, version) and never per channel;
/// entries within a channel are already in ascending-version order.
pub fn link_channels(channels: &mut BTreeMap<String, Channel>, mut placements: Vec<BundlePlacement>) {
    if placements.is_empty() {
        return;
    }

    placements.sort();

    // Name of the highest-Z entry of the last-closed Y-stream, and the
    // accumulated skippable names for the next closing entry.
    let mut prev_z_max: Option<String> = None;
    let mut skip_set: BTreeSet<String> = BTreeSet::new();

    for i in 1..placements.len() {
        let prev = &placements[i - 1];
        let cur = &placements[i];

        let tier_change = cur.tier != prev.tier;
        let kind_change = cur.kind != prev.kind;
        let x_change = cur.version.major != prev.version.major;
        let y_change = cur.version.minor != prev.version.minor;

        if tier_change || kind_change || x_change || y_change {
            // Any transition coarser than Z closes the previous Y-stream:
            // its final entry gets the accumulated edges.
            finalize(channels, prev, prev_z_max.as_deref(), &skip_set);
        }

        if tier_change || kind_change || x_change {
            // No chain continuity across these boundaries.
            skip_set.clear();
            prev_z_max = None;
        } else {
            if y_change {
                // The closed Y-stream's max becomes the next anchor.
                prev_z_max = Some(prev.bundle.clone());
            }
            skip_set.insert(prev.bundle.clone());
        }
    }

    // The last placement in sorted order always closes its Y-stream.
    let last = &placements[placements.len() - 1];
    finalize(channels, last, prev_z_max.as_deref(), &skip_set);
}

/// Write the accumulated edges onto a closing entry.
///
/// The replaces target is removed from the skips; skips were accumulated
/// across discrete Y-stream cycles and may still be useful to later closing
/// entries, so the set itself is left intact.
fn finalize(
    channels: &mut BTreeMap<String, Channel>,
    placement: &BundlePlacement,
    replaces: Option<&str>,
    skip_set: &BTreeSet<String>,
) {
    let channel = channels
        .get_mut(&placement.channel)
        .expect("placement refers to a synthesized channel");
    let entry = &mut channel.entries[placement.index];

    entry.replaces = replaces.map(str::to_string);
    entry.skips = skip_set
        .iter()
        .filter(|name| Some(name.as_str()) != replaces)
        .cloned()
        .collect();
}
