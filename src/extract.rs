//! Version extraction: from rendered bundles to per-tier version maps.

use std::collections::BTreeMap;

use semver::Version;

use crate::error::{PropertyReason, RenderError};
use crate::properties::package_property;
use crate::render::RenderedBundle;
use crate::types::Tier;
use crate::validate::validate_versions;

/// Bundle name → parsed version, for one tier. BTreeMap keeps bundle-name
/// iteration deterministic; version order is established by explicit sorts.
pub type VersionMap = BTreeMap<String, Version>;

/// Extract the bundle-name → version map for one tier.
///
/// Walks the tier's image references in template order, resolves each against
/// the pre-rendered bundle set, and parses its package-identity property.
/// `package` is the run-wide established package name: the first successful
/// parse records it, every later bundle must match it case-exactly.
///
/// An empty reference list yields an empty map; the tier is simply absent
/// from the graph. The ambiguity validator runs before the map is returned.
pub fn extract_tier(
    tier: Tier,
    refs: &[String],
    rendered: &BTreeMap<String, RenderedBundle>,
    package: &mut Option<String>,
) -> Result<VersionMap, RenderError> {
    let mut entries = VersionMap::new();

    for image in refs {
        let bundle = rendered.get(image).ok_or_else(|| RenderError::NotFound {
            image: image.clone(),
        })?;

        let prop = package_property(bundle)?;

        let version =
            Version::parse(&prop.version).map_err(|e| RenderError::Property {
                bundle: bundle.name.clone(),
                reason: PropertyReason::InvalidVersion {
                    raw: prop.version.clone(),
                    message: e.to_string(),
                },
            })?;

        match package {
            Some(established) => {
                if prop.package_name != *established {
                    return Err(RenderError::PackageMismatch {
                        bundle: bundle.name.clone(),
                        declared: prop.package_name,
                        established: established.clone(),
                    });
                }
            }
            None => *package = Some(prop.package_name),
        }

        if entries.contains_key(&bundle.name) {
            return Err(RenderError::DuplicateBundle {
                tier,
                bundle: bundle.name.clone(),
            });
        }

        tracing::trace!(tier = %tier, bundle = %bundle.name, version = %version, "extracted bundle");
        entries.insert(bundle.name.clone(), version);
    }

    validate_versions(tier, &entries)?;

    Ok(entries)
}
