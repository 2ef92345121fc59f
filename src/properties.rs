//! Bundle property parsing.
//!
//! A rendered bundle carries an opaque list of typed properties. The kernel
//! only cares about the package-identity property (`olm.package`), of which
//! every bundle must declare exactly one.

use serde::{Deserialize, Serialize};

use crate::error::{PropertyReason, RenderError};
use crate::render::RenderedBundle;

/// Property type for package identity.
pub const TYPE_PACKAGE: &str = "olm.package";

/// One typed property in a bundle's property blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    /// Property type discriminator.
    #[serde(rename = "type")]
    pub type_: String,
    /// Opaque property value; interpreted per type.
    pub value: serde_json::Value,
}

impl Property {
    /// Build a package-identity property.
    pub fn package(package_name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            type_: TYPE_PACKAGE.to_string(),
            value: serde_json::json!({
                "packageName": package_name.into(),
                "version": version.into(),
            }),
        }
    }
}

/// Declared package identity of a bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageProperty {
    /// The package this bundle belongs to.
    pub package_name: String,
    /// The declared version string, unparsed.
    pub version: String,
}

/// Extract the single package-identity property of a rendered bundle.
///
/// Fails if the bundle declares zero or more than one package property, or if
/// the property value is not a well-formed package identity. The version
/// string is returned unparsed; the extractor parses it so the error can name
/// the bundle and the raw text.
pub fn package_property(bundle: &RenderedBundle) -> Result<PackageProperty, RenderError> {
    let mut packages = bundle
        .properties
        .iter()
        .filter(|p| p.type_ == TYPE_PACKAGE)
        .map(|p| {
            serde_json::from_value::<PackageProperty>(p.value.clone()).map_err(|e| {
                RenderError::Property {
                    bundle: bundle.name.clone(),
                    reason: PropertyReason::InvalidValue(e.to_string()),
                }
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    match packages.len() {
        0 => Err(RenderError::Property {
            bundle: bundle.name.clone(),
            reason: PropertyReason::Missing,
        }),
        1 => Ok(packages.remove(0)),
        n => Err(RenderError::Property {
            bundle: bundle.name.clone(),
            reason: PropertyReason::Multiple(n),
        }),
    }
}
