//! Bundle rendering collaborators.
//!
//! The kernel never fetches or inspects images itself; it consumes a
//! [`BundleRenderer`] that resolves an image reference into a rendered
//! bundle's name and property blob. Rendering is the pipeline's only
//! suspension point; everything downstream is synchronous.

pub mod memory;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::properties::Property;

/// A bundle as resolved by a renderer: its name plus declared properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedBundle {
    /// Bundle name (unique within a tier).
    pub name: String,
    /// Declared properties, including exactly one package identity.
    pub properties: Vec<Property>,
}

/// Trait for bundle-rendering backends.
///
/// `Ok(None)` means the reference is unknown to the backend; the kernel turns
/// that into a `NotFound` error naming the reference. Backend failures are
/// propagated as `Renderer` errors.
#[async_trait]
pub trait BundleRenderer: Send + Sync {
    /// Error type for renderer operations.
    type Error: std::error::Error + Send + Sync;

    /// Resolve an image reference into a rendered bundle.
    async fn render(&self, image: &str) -> Result<Option<RenderedBundle>, Self::Error>;
}

pub use memory::InMemoryRenderer;
