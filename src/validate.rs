//! Pre-synthesis validation of per-tier version sets.

use std::collections::BTreeMap;

use semver::{BuildMetadata, Version};

use crate::error::{RenderError, VersionConflict};
use crate::extract::VersionMap;
use crate::types::Tier;

/// Reject version sets that cannot be totally ordered.
///
/// Build metadata does not participate in semver precedence, so two versions
/// that differ only by build metadata are unorderable. Every version is
/// stripped of metadata and stringified; a collision on the stripped string
/// between distinct bundles is fatal. All collisions are collected into one
/// error, in bundle-name order. An empty map is valid.
pub fn validate_versions(tier: Tier, versions: &VersionMap) -> Result<(), RenderError> {
    if versions.is_empty() {
        return Ok(());
    }

    // stripped string -> raw string of the first bundle that produced it
    let mut seen: BTreeMap<String, String> = BTreeMap::new();
    let mut conflicts = Vec::new();

    for version in versions.values() {
        let stripped = strip_build_metadata(version);
        match seen.get(&stripped) {
            None => {
                seen.insert(stripped, version.to_string());
            }
            Some(first) => conflicts.push(VersionConflict {
                left: first.clone(),
                right: version.to_string(),
            }),
        }
    }

    if conflicts.is_empty() {
        Ok(())
    } else {
        Err(RenderError::AmbiguousVersion { tier, conflicts })
    }
}

/// Strip build metadata and stringify, for collision detection.
///
/// The stringified form is used because `Version` contains heap fields that
/// make it awkward as a map key, and the semver crate's formatting is
/// deterministic.
fn strip_build_metadata(version: &Version) -> String {
    let mut v = version.clone();
    v.build = BuildMetadata::EMPTY;
    v.to_string()
}
