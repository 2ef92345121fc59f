//! The semver template: input document and render orchestration.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::RenderError;
use crate::extract::{extract_tier, VersionMap};
use crate::link::link_channels;
use crate::render::{BundleRenderer, RenderedBundle};
use crate::synthesize::{synthesize, StreamFlags};
use crate::types::{CatalogFragment, PackageRecord, Tier};

/// Schema identifier for semver template documents.
pub const SCHEMA_SEMVER_TEMPLATE: &str = "olm.semver";

/// One bundle reference in a tier's list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BundleRef {
    /// Image reference to resolve through the renderer.
    pub image: String,
}

impl BundleRef {
    /// Create a bundle reference.
    pub fn new(image: impl Into<String>) -> Self {
        Self {
            image: image.into(),
        }
    }
}

/// The bundle list of one tier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TierBundles {
    /// Bundle references, in template order.
    #[serde(default)]
    pub bundles: Vec<BundleRef>,
}

impl TierBundles {
    fn images(&self) -> Vec<String> {
        self.bundles.iter().map(|b| b.image.clone()).collect()
    }
}

/// Declarative input for one render: three tier bundle lists plus the
/// stream-generation knobs.
///
/// This is a plain input struct; loading and validating it from a serialized
/// document is the caller's concern. Field names and defaults (minor
/// channels on, major channels off) are part of the document contract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SemverTemplate {
    /// Candidate-tier bundles.
    #[serde(default)]
    pub candidate: TierBundles,
    /// Fast-tier bundles.
    #[serde(default)]
    pub fast: TierBundles,
    /// Stable-tier bundles.
    #[serde(default)]
    pub stable: TierBundles,
    /// Generate one channel family per major version.
    #[serde(default)]
    pub generate_major_channels: bool,
    /// Generate one channel family per minor version.
    #[serde(default = "default_true")]
    pub generate_minor_channels: bool,
}

fn default_true() -> bool {
    true
}

impl SemverTemplate {
    /// The tier lists in priority-ascending order.
    fn tiers(&self) -> [(Tier, &TierBundles); 3] {
        [
            (Tier::Candidate, &self.candidate),
            (Tier::Fast, &self.fast),
            (Tier::Stable, &self.stable),
        ]
    }

    fn stream_flags(&self) -> StreamFlags {
        StreamFlags {
            major: self.generate_major_channels,
            minor: self.generate_minor_channels,
        }
    }

    /// Render the template into a catalog fragment.
    ///
    /// Resolves every distinct image reference through the renderer, then
    /// runs the synchronous extraction → synthesis → linking pipeline. Any
    /// error aborts the whole render; no partial output is returned.
    pub async fn render<R: BundleRenderer>(
        &self,
        renderer: &R,
    ) -> Result<CatalogFragment, RenderError> {
        // De-duplicate image references across all tiers; BTreeSet gives a
        // deterministic rendering order.
        let mut images: BTreeSet<String> = BTreeSet::new();
        for (_, tier_bundles) in self.tiers() {
            images.extend(tier_bundles.images());
        }

        let mut rendered: BTreeMap<String, RenderedBundle> = BTreeMap::new();
        for image in &images {
            match renderer.render(image).await {
                Ok(Some(bundle)) => {
                    rendered.insert(image.clone(), bundle);
                }
                Ok(None) => {
                    return Err(RenderError::NotFound {
                        image: image.clone(),
                    })
                }
                Err(e) => {
                    return Err(RenderError::Renderer {
                        image: image.clone(),
                        message: e.to_string(),
                    })
                }
            }
        }

        if rendered.is_empty() {
            return Err(RenderError::EmptyResult);
        }

        let mut package: Option<String> = None;
        let mut versions: BTreeMap<Tier, VersionMap> = BTreeMap::new();
        for (tier, tier_bundles) in self.tiers() {
            let map = extract_tier(tier, &tier_bundles.images(), &rendered, &mut package)?;
            versions.insert(tier, map);
        }

        // rendered is non-empty, so at least one tier extracted a bundle and
        // the package name is established.
        let package = package.ok_or(RenderError::EmptyResult)?;

        let mut synthesis = synthesize(&versions, &package, self.stream_flags());
        if synthesis.placements.is_empty() {
            return Err(RenderError::EmptyResult);
        }

        let placements = std::mem::take(&mut synthesis.placements);
        link_channels(&mut synthesis.channels, placements);

        let mut record = PackageRecord::new(package);
        record.default_channel = synthesis.default_channel;

        // BTreeMap iteration yields channels in name order.
        let channels: Vec<_> = synthesis.channels.into_values().collect();

        tracing::debug!(
            package = %record.name,
            default_channel = %record.default_channel,
            channels = channels.len(),
            "rendered catalog fragment"
        );

        Ok(CatalogFragment {
            package: record,
            channels,
        })
    }
}
