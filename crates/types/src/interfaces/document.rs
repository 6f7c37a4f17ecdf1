//! Raw shape of an ABI document, before any type expression is parsed.
//!
//! Defaults for optional keys:
//!
//! | object    | key               | default |
//! |-----------|-------------------|---------|
//! | registry  | `name`            | `""`    |
//! | registry  | `constructor`     | absent  |
//! | registry  | `endpoints`       | `[]`    |
//! | registry  | `types`           | `[]`    |
//! | endpoint  | `name`            | `"?"`   |
//! | endpoint  | `description`     | `"N/A"` |
//! | endpoint  | `inputs`          | `[]`    |
//! | endpoint  | `outputs`         | `[]`    |
//! | endpoint  | `mutability`      | `""`    |
//! | endpoint  | `payableInTokens` | `[]`    |
//! | parameter | `name`            | `"?"`   |
//! | parameter | `description`     | `"N/A"` |
//! | parameter | `type`            | required |

use serde::Deserialize;

/// Placeholder used when an endpoint or parameter has no `name`.
pub const NAME_PLACEHOLDER: &str = "?";
/// Placeholder used when an endpoint or parameter has no `description`.
pub const DESCRIPTION_PLACEHOLDER: &str = "N/A";

pub(crate) fn default_name() -> String {
    NAME_PLACEHOLDER.to_string()
}

pub(crate) fn default_description() -> String {
    DESCRIPTION_PLACEHOLDER.to_string()
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawParameter {
    #[serde(default = "default_name")]
    pub(crate) name: String,
    #[serde(default = "default_description")]
    pub(crate) description: String,
    #[serde(rename = "type")]
    pub(crate) type_expression: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawEndpoint {
    #[serde(default = "default_name")]
    pub(crate) name: String,
    #[serde(default = "default_description")]
    pub(crate) description: String,
    #[serde(default)]
    pub(crate) inputs: Vec<RawParameter>,
    #[serde(default)]
    pub(crate) outputs: Vec<RawParameter>,
    #[serde(default)]
    pub(crate) mutability: String,
    #[serde(default)]
    pub(crate) payable_in_tokens: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawAbi {
    #[serde(default)]
    pub(crate) name: String,
    /// `None` for both a missing key and an explicit `null`.
    #[serde(default)]
    pub(crate) constructor: Option<RawEndpoint>,
    #[serde(default)]
    pub(crate) endpoints: Vec<RawEndpoint>,
    #[serde(default)]
    pub(crate) types: Vec<String>,
}
