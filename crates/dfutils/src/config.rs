//! Generator defaults, optionally loaded from a TOML file.
//!
//! ```toml
//! [surrogate_key]
//! null_value = "_qbi_dataform_utils_surrogate_key_null"
//!
//! [union_relations]
//! fields = ["*"]
//! key_column_name = "_dataform_source_key"
//! value_column_name = "_dataform_source_relation"
//! ```
//!
//! Every table and key is optional; missing ones take the built-in values.

use crate::error::{DfError, DfResult};
use crate::ident::{ColumnName, check_literal};
use crate::surrogate_key::SURROGATE_KEY_NULL;
use crate::union_all::{DEFAULT_KEY_COLUMN, DEFAULT_VALUE_COLUMN};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FragmentDefaults {
    #[serde(default)]
    pub surrogate_key: SurrogateKeyDefaults,

    #[serde(default)]
    pub union_relations: UnionDefaults,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SurrogateKeyDefaults {
    #[serde(default = "default_null_value")]
    pub null_value: String,
}

impl Default for SurrogateKeyDefaults {
    fn default() -> Self {
        Self {
            null_value: default_null_value(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UnionDefaults {
    #[serde(default = "default_fields")]
    pub fields: Vec<String>,

    #[serde(default = "default_key_column")]
    pub key_column_name: String,

    /// Older configs call this `source_column_name`.
    #[serde(default = "default_value_column", alias = "source_column_name")]
    pub value_column_name: String,
}

impl Default for UnionDefaults {
    fn default() -> Self {
        Self {
            fields: default_fields(),
            key_column_name: default_key_column(),
            value_column_name: default_value_column(),
        }
    }
}

fn default_null_value() -> String {
    SURROGATE_KEY_NULL.to_string()
}

fn default_fields() -> Vec<String> {
    vec!["*".to_string()]
}

fn default_key_column() -> String {
    DEFAULT_KEY_COLUMN.to_string()
}

fn default_value_column() -> String {
    DEFAULT_VALUE_COLUMN.to_string()
}

impl FragmentDefaults {
    /// Parse and validate defaults from TOML text.
    pub fn from_toml_str(raw: &str) -> DfResult<Self> {
        let defaults: Self = toml::from_str(raw)?;
        defaults.validate()?;
        Ok(defaults)
    }

    /// Read, parse and validate a defaults file.
    pub fn load(path: impl AsRef<Path>) -> DfResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw).map_err(|e| match e {
            DfError::Config(msg) => {
                DfError::config(format!("failed to parse {}: {msg}", path.display()))
            }
            other => other,
        })
    }

    /// Check that the configured names can be rendered as-is.
    pub fn validate(&self) -> DfResult<()> {
        check_literal("surrogate_key.null_value", &self.surrogate_key.null_value)
            .map_err(|e| DfError::config(e.to_string()))?;

        let u = &self.union_relations;
        if u.fields.is_empty() {
            return Err(DfError::config("union_relations.fields cannot be empty"));
        }
        let key = ColumnName::parse(&u.key_column_name)
            .map_err(|e| DfError::config(format!("union_relations.key_column_name: {e}")))?;
        let value = ColumnName::parse(&u.value_column_name)
            .map_err(|e| DfError::config(format!("union_relations.value_column_name: {e}")))?;
        if key.name().eq_ignore_ascii_case(value.name()) {
            return Err(DfError::config(
                "union_relations.key_column_name and value_column_name must differ",
            ));
        }
        Ok(())
    }
}
