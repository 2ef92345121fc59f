//! # upgrade-graph-kernel
//!
//! Deterministic upgrade-graph synthesis for semver-tiered release bundles.
//!
//! The kernel answers one question:
//!
//! > Given versioned release bundles grouped into stability tiers, which
//! > named channels exist, what order do their entries take, and which
//! > entries may be **replaced or skipped** on upgrade?
//!
//! ## Core Contract
//!
//! 1. Given a [`SemverTemplate`] and a [`BundleRenderer`], extract one
//!    semantic version per bundle per tier
//! 2. Place every bundle into its major/minor-stream channels, in ascending
//!    version order
//! 3. Link `replaces`/`skips` edges in one global sorted pass and pick the
//!    default channel from the most-preferred channel head
//!
//! ## Architecture
//!
//! ```text
//! SemverTemplate → Extractor → Synthesizer → Linker → CatalogFragment
//!                      ↓
//!               BundleRenderer (external collaborator)
//! ```
//!
//! ## Determinism Guarantees
//!
//! - Same template + same rendered bundles → byte-identical output
//! - Bundles are walked in ascending semver order; tiers and stream kinds in
//!   fixed priority order; no map enumeration order is ever load-bearing
//! - All errors are fatal: the pipeline is pure, so a retry without changed
//!   input is pointless

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod extract;
pub mod link;
pub mod properties;
pub mod render;
pub mod synthesize;
pub mod template;
pub mod types;
pub mod validate;

// Re-exports
pub use error::{PropertyReason, RenderError, VersionConflict};
pub use properties::{PackageProperty, Property, TYPE_PACKAGE};
pub use render::{BundleRenderer, InMemoryRenderer, RenderedBundle};
pub use synthesize::{synthesize, StreamFlags, Synthesis};
pub use template::{BundleRef, SemverTemplate, TierBundles, SCHEMA_SEMVER_TEMPLATE};
pub use types::{
    channel_name, BundlePlacement, CatalogFragment, Channel, ChannelEntry, HighwaterChannel,
    PackageRecord, StreamKind, Tier, SCHEMA_CHANNEL, SCHEMA_PACKAGE,
};
pub use extract::{extract_tier, VersionMap};
pub use link::link_channels;
pub use validate::validate_versions;
