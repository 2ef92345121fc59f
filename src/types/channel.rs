//! Channel records and deterministic channel naming.

use semver::Version;
use serde::{Deserialize, Serialize};

use super::tier::{StreamKind, Tier};

/// Schema identifier for channel records.
pub const SCHEMA_CHANNEL: &str = "olm.channel";

/// One entry in a channel's upgrade sequence.
///
/// Entries are appended in ascending-version order by the synthesizer and
/// never reordered; the linker sets `replaces`/`skips` in place by index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelEntry {
    /// Bundle name.
    pub name: String,
    /// Bundle this entry directly supersedes, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replaces: Option<String>,
    /// Bundles that may be skipped when upgrading directly to this entry.
    /// Always sorted.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skips: Vec<String>,
}

impl ChannelEntry {
    /// Create an unlinked entry (no edges yet).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            replaces: None,
            skips: Vec::new(),
        }
    }

    /// Whether this entry carries any edge.
    pub fn has_edges(&self) -> bool {
        self.replaces.is_some() || !self.skips.is_empty()
    }
}

/// A named, linearly-ordered upgrade path for one package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    /// Record schema identifier.
    pub schema: String,
    /// Channel name, derived from tier and version (see [`channel_name`]).
    pub name: String,
    /// Owning package name.
    pub package: String,
    /// Entries in ascending-version insertion order.
    pub entries: Vec<ChannelEntry>,
}

impl Channel {
    /// Create an empty channel bound to a package.
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            schema: SCHEMA_CHANNEL.to_string(),
            name: name.into(),
            package: package.into(),
            entries: Vec::new(),
        }
    }
}

/// Derive the channel name for a bundle version under a stream kind.
///
/// Major stream: `<tier>-v<major>`. Minor stream: `<tier>-v<major>.<minor>`.
/// This naming is a stable wire contract.
pub fn channel_name(tier: Tier, kind: StreamKind, version: &Version) -> String {
    match kind {
        StreamKind::Major => format!("{}-v{}", tier, version.major),
        StreamKind::Minor => format!("{}-v{}.{}", tier, version.major, version.minor),
    }
}
