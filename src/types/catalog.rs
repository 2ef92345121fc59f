//! Output catalog fragment: one package record plus its channels.

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh64::xxh64;

use super::channel::Channel;

/// Schema identifier for package records.
pub const SCHEMA_PACKAGE: &str = "olm.package";

/// Package record carried in the output fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageRecord {
    /// Record schema identifier.
    pub schema: String,
    /// Package name, established from the first extracted bundle.
    pub name: String,
    /// Name of the channel holding the most-preferred head.
    pub default_channel: String,
}

impl PackageRecord {
    /// Create a package record with no default channel yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            schema: SCHEMA_PACKAGE.to_string(),
            name: name.into(),
            default_channel: String::new(),
        }
    }
}

/// A rendered catalog fragment: the complete output of one render call.
///
/// Channels are sorted by name; entry order within a channel is the
/// synthesizer's ascending-version insertion order. Serialization of this
/// type is the stable contract consumers depend on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFragment {
    /// The package record.
    pub package: PackageRecord,
    /// All generated channels, sorted by name.
    pub channels: Vec<Channel>,
}

impl CatalogFragment {
    /// Hex-encoded xxh64 over the fragment's serialized bytes.
    ///
    /// The pipeline is deterministic and field order is fixed, so two renders
    /// over the same extracted versions fingerprint identically; equal
    /// fingerprints mean byte-identical output. Struct fields serialize in
    /// declaration order and all maps were resolved to sorted vectors before
    /// this point, so the bytes themselves are canonical.
    pub fn fingerprint(&self) -> Result<String, serde_json::Error> {
        let bytes = serde_json::to_vec(self)?;
        Ok(format!("{:016x}", xxh64(&bytes, 0)))
    }

    /// Total number of entries across all channels.
    pub fn num_entries(&self) -> usize {
        self.channels.iter().map(|c| c.entries.len()).sum()
    }
}
