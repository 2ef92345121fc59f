//! Error taxonomy for the render pipeline.
//!
//! Every error is fatal to the render call: the algorithm is pure and
//! deterministic, so there is nothing to retry and no partial output to
//! salvage. Messages carry the tier, bundle name, and raw version strings the
//! caller needs to fix the input document. The kernel never logs errors.

use std::fmt;

use crate::types::Tier;

/// Detail for a malformed package-identity property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyReason {
    /// The bundle declares no package property.
    Missing,
    /// The bundle declares more than one package property.
    Multiple(usize),
    /// The property value is not a well-formed package identity.
    InvalidValue(String),
    /// The declared version string does not parse as a semantic version.
    InvalidVersion {
        /// The raw version string as declared by the bundle.
        raw: String,
        /// Parser diagnostic.
        message: String,
    },
}

impl fmt::Display for PropertyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "no package property found"),
            Self::Multiple(n) => write!(f, "{} package properties found, expected exactly 1", n),
            Self::InvalidValue(msg) => write!(f, "malformed package property value: {}", msg),
            Self::InvalidVersion { raw, message } => {
                write!(f, "invalid version {:?}: {}", raw, message)
            }
        }
    }
}

/// A pair of versions in one tier that collide once build metadata is
/// stripped, and therefore cannot be totally ordered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionConflict {
    /// The raw version string seen first (in bundle-name order).
    pub left: String,
    /// The raw version string that collided with it.
    pub right: String,
}

impl fmt::Display for VersionConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} cannot be compared to {:?}", self.right, self.left)
    }
}

/// Fatal error aborting a render call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// A referenced image is absent from the rendered bundle set.
    #[error("image reference {image:?} not found in rendered bundles")]
    NotFound {
        /// The unresolvable image reference.
        image: String,
    },

    /// The renderer collaborator itself failed for an image reference.
    #[error("rendering image reference {image:?}: {message}")]
    Renderer {
        /// The image reference being rendered.
        image: String,
        /// Collaborator diagnostic.
        message: String,
    },

    /// Missing, duplicated, or malformed package/version property.
    #[error("bundle {bundle:?}: {reason}")]
    Property {
        /// The offending bundle name.
        bundle: String,
        /// What was wrong with the property blob.
        reason: PropertyReason,
    },

    /// A bundle declares a different package than previously established.
    #[error("bundle {bundle:?} belongs to package {declared:?}, expected {established:?}")]
    PackageMismatch {
        /// The offending bundle name.
        bundle: String,
        /// The package name the bundle declares.
        declared: String,
        /// The package name established earlier in this run.
        established: String,
    },

    /// The same bundle name appears twice within one tier.
    #[error("duplicate bundle name {bundle:?} in {tier} tier")]
    DuplicateBundle {
        /// The tier containing the duplicate.
        tier: Tier,
        /// The duplicated bundle name.
        bundle: String,
    },

    /// Two bundles in one tier have versions equal after stripping build
    /// metadata; no total order exists.
    #[error("{tier} tier has bundle versions which differ only by build metadata \
             and cannot be ordered: {}", format_conflicts(.conflicts))]
    AmbiguousVersion {
        /// The tier containing the collision(s).
        tier: Tier,
        /// Every colliding version pair, in bundle-name order.
        conflicts: Vec<VersionConflict>,
    },

    /// No bundle could be placed into any channel.
    #[error("no bundles specified or no bundles could be rendered into a channel")]
    EmptyResult,
}

fn format_conflicts(conflicts: &[VersionConflict]) -> String {
    conflicts
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
