//! In-memory renderer for testing and pre-rendered inputs.

use std::collections::BTreeMap;
use std::convert::Infallible;

use async_trait::async_trait;

use super::{BundleRenderer, RenderedBundle};
use crate::properties::Property;

/// In-memory renderer backed by a map of pre-rendered bundles.
///
/// Uses BTreeMap for deterministic iteration order. Suitable for tests and
/// for callers that have already materialized their bundle metadata.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRenderer {
    /// Rendered bundles keyed by image reference.
    bundles: BTreeMap<String, RenderedBundle>,
}

impl InMemoryRenderer {
    /// Create a new empty renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a rendered bundle under an image reference.
    pub fn add_bundle(&mut self, image: impl Into<String>, bundle: RenderedBundle) {
        self.bundles.insert(image.into(), bundle);
    }

    /// Register a bundle carrying a single package-identity property.
    pub fn add_package_bundle(
        &mut self,
        image: impl Into<String>,
        bundle_name: impl Into<String>,
        package: impl Into<String>,
        version: impl Into<String>,
    ) {
        self.add_bundle(
            image,
            RenderedBundle {
                name: bundle_name.into(),
                properties: vec![Property::package(package, version)],
            },
        );
    }

    /// Number of registered bundles.
    pub fn num_bundles(&self) -> usize {
        self.bundles.len()
    }
}

#[async_trait]
impl BundleRenderer for InMemoryRenderer {
    type Error = Infallible;

    async fn render(&self, image: &str) -> Result<Option<RenderedBundle>, Self::Error> {
        Ok(self.bundles.get(image).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_render_known_image() {
        let mut renderer = InMemoryRenderer::new();
        renderer.add_package_bundle("reg.io/pkg:v1.0.0", "pkg.v1.0.0", "pkg", "1.0.0");

        let bundle = renderer.render("reg.io/pkg:v1.0.0").await.unwrap();
        assert_eq!(bundle.unwrap().name, "pkg.v1.0.0");
    }

    #[tokio::test]
    async fn test_render_unknown_image() {
        let renderer = InMemoryRenderer::new();
        assert!(renderer.render("reg.io/missing:v0").await.unwrap().is_none());
    }
}
