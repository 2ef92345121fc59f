//! Core types for the upgrade-graph kernel.

pub mod catalog;
pub mod channel;
pub mod placement;
pub mod tier;

pub use catalog::{CatalogFragment, PackageRecord, SCHEMA_PACKAGE};
pub use channel::{channel_name, Channel, ChannelEntry, SCHEMA_CHANNEL};
pub use placement::{BundlePlacement, HighwaterChannel};
pub use tier::{StreamKind, Tier};
