//! `UNION ALL` over several relations, tagging each row with its origin.
//!
//! Two calling conventions produce the same SQL:
//!
//! - [`UnionRelations`], a config struct with named, defaulted fields
//!   (preferred).
//! - [`union_relations`], the positional form kept for older callers. Its
//!   last argument, `source_column_name`, is the column the struct calls
//!   `value_column_name`.
//!
//! # Example
//! ```ignore
//! use dfutils::{SqlFragment, UnionRelations};
//!
//! let sql = UnionRelations::new([("eu", "raw.orders_eu"), ("us", "raw.orders_us")])
//!     .fields(["order_id", "amount"])
//!     .to_sql();
//! // SELECT order_id, amount, 'eu' AS _dataform_source_key, 'raw.orders_eu' AS _dataform_source_relation FROM raw.orders_eu
//! // UNION ALL
//! // SELECT order_id, amount, 'us' AS _dataform_source_key, 'raw.orders_us' AS _dataform_source_relation FROM raw.orders_us
//! ```

use crate::config::FragmentDefaults;
use crate::error::{DfError, DfResult};
use crate::fragment::SqlFragment;
use crate::ident::{ColumnName, check_literal};
use crate::relations::Relations;
use serde::{Deserialize, Serialize};

/// Default name of the column holding each row's relation alias.
pub const DEFAULT_KEY_COLUMN: &str = "_dataform_source_key";

/// Default name of the column holding each row's relation reference.
pub const DEFAULT_VALUE_COLUMN: &str = "_dataform_source_relation";

const BRANCH_SEPARATOR: &str = "\nUNION ALL\n";

/// Options for a tagged `UNION ALL`.
///
/// Every field has a default, so a config only needs `relations`. Branches
/// follow the order of `relations`. Column sets are not checked across
/// branches; a mismatch surfaces when the engine runs the query.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
#[must_use]
pub struct UnionRelations {
    pub relations: Relations,
    /// Selected columns. Defaults to `["*"]`.
    pub fields: Vec<String>,
    pub key_column_name: String,
    /// Called `source_column_name` by the positional form.
    #[serde(alias = "source_column_name")]
    pub value_column_name: String,
}

impl Default for UnionRelations {
    fn default() -> Self {
        Self {
            relations: Relations::new(),
            fields: vec!["*".to_string()],
            key_column_name: DEFAULT_KEY_COLUMN.to_string(),
            value_column_name: DEFAULT_VALUE_COLUMN.to_string(),
        }
    }
}

impl UnionRelations {
    /// Union `relations` with every other option at its default.
    pub fn new(relations: impl Into<Relations>) -> Self {
        Self {
            relations: relations.into(),
            ..Self::default()
        }
    }

    /// Start from the column names and fields configured in `defaults`.
    pub fn from_defaults(defaults: &FragmentDefaults) -> Self {
        let d = &defaults.union_relations;
        Self {
            relations: Relations::new(),
            fields: d.fields.clone(),
            key_column_name: d.key_column_name.clone(),
            value_column_name: d.value_column_name.clone(),
        }
    }

    /// Append one relation under `alias`.
    pub fn relation(mut self, alias: impl Into<String>, relation: impl Into<String>) -> Self {
        self.relations.insert(alias, relation);
        self
    }

    /// Replace the selected columns.
    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.fields = fields.into_iter().map(|f| f.as_ref().to_string()).collect();
        self
    }

    pub fn key_column_name(mut self, name: impl Into<String>) -> Self {
        self.key_column_name = name.into();
        self
    }

    pub fn value_column_name(mut self, name: impl Into<String>) -> Self {
        self.value_column_name = name.into();
        self
    }

    fn branch(&self, select_list: &str, alias: &str, relation: &str) -> String {
        format!(
            "SELECT {select_list}, '{alias}' AS {}, '{relation}' AS {} FROM {relation}",
            self.key_column_name, self.value_column_name,
        )
    }
}

impl SqlFragment for UnionRelations {
    const NAME: &'static str = "union_relations";

    fn build_sql(&self) -> String {
        let select_list = self.fields.join(", ");
        self.relations
            .iter()
            .map(|(alias, relation)| self.branch(&select_list, alias, relation))
            .collect::<Vec<_>>()
            .join(BRANCH_SEPARATOR)
    }

    fn validate(&self) -> DfResult<()> {
        if self.relations.is_empty() {
            return Err(DfError::validation(
                "union_relations: at least one relation is required",
            ));
        }
        if self.fields.is_empty() {
            return Err(DfError::validation(
                "union_relations: fields cannot be empty (use \"*\" for all columns)",
            ));
        }
        if let Some(pos) = self.fields.iter().position(|f| f.trim().is_empty()) {
            return Err(DfError::validation(format!(
                "union_relations: field #{pos} is empty"
            )));
        }

        for (alias, relation) in &self.relations {
            if alias.trim().is_empty() {
                return Err(DfError::validation("union_relations: empty relation alias"));
            }
            if relation.trim().is_empty() {
                return Err(DfError::validation(format!(
                    "union_relations: relation for alias '{alias}' is empty"
                )));
            }
            check_literal("relation alias", alias)?;
            check_literal("relation", relation)?;
        }

        let key = ColumnName::parse(&self.key_column_name)?;
        let value = ColumnName::parse(&self.value_column_name)?;
        if key.name().eq_ignore_ascii_case(value.name()) {
            return Err(DfError::validation(format!(
                "union_relations: key and value columns are both '{}'",
                key.name()
            )));
        }
        Ok(())
    }
}

/// Positional form of [`UnionRelations`].
///
/// `source_column_name` is the column [`UnionRelations::value_column_name`]
/// names. Pass `&["*"]` for all columns. An empty `relations` yields an empty
/// string.
pub fn union_relations<I, S>(
    relations: impl Into<Relations>,
    fields: I,
    key_column_name: &str,
    source_column_name: &str,
) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    UnionRelations::new(relations)
        .fields(fields)
        .key_column_name(key_column_name)
        .value_column_name(source_column_name)
        .to_sql()
}
