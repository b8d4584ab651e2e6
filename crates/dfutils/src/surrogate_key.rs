//! Surrogate keys hashed from column values.

use crate::config::FragmentDefaults;
use crate::error::{DfError, DfResult};
use crate::fragment::SqlFragment;
use crate::ident::check_literal;

/// Placeholder substituted for NULL column values before hashing.
pub const SURROGATE_KEY_NULL: &str = "_qbi_dataform_utils_surrogate_key_null";

/// Delimiter placed between the coalesced values.
const SEPARATOR: &str = " || '-' || ";

/// Builder for a `to_hex(md5(...))` surrogate key expression.
///
/// Each field becomes `coalesce(cast(<field> as string), '<null>')`. The
/// result depends on field order, so keep the list stable between runs.
///
/// # Example
/// ```ignore
/// use dfutils::{SqlFragment, SurrogateKey};
///
/// let key = SurrogateKey::new(["order_id", "line_no"])
///     .null_value("~")
///     .to_sql();
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct SurrogateKey {
    fields: Vec<String>,
    null_value: String,
}

impl Default for SurrogateKey {
    fn default() -> Self {
        Self {
            fields: Vec::new(),
            null_value: SURROGATE_KEY_NULL.to_string(),
        }
    }
}

impl SurrogateKey {
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            fields: fields.into_iter().map(|f| f.as_ref().to_string()).collect(),
            ..Self::default()
        }
    }

    /// Start from the null sentinel configured in `defaults`.
    pub fn from_defaults(defaults: &FragmentDefaults) -> Self {
        Self {
            fields: Vec::new(),
            null_value: defaults.surrogate_key.null_value.clone(),
        }
    }

    /// Append one field.
    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.fields.push(field.into());
        self
    }

    /// Append several fields.
    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.fields
            .extend(fields.into_iter().map(|f| f.as_ref().to_string()));
        self
    }

    /// Override the NULL sentinel.
    pub fn null_value(mut self, value: impl Into<String>) -> Self {
        self.null_value = value.into();
        self
    }

    pub fn field_names(&self) -> &[String] {
        &self.fields
    }
}

impl SqlFragment for SurrogateKey {
    const NAME: &'static str = "surrogate_key";

    fn build_sql(&self) -> String {
        let concat = self
            .fields
            .iter()
            .map(|f| format!("coalesce(cast({f} as string), '{}')", self.null_value))
            .collect::<Vec<_>>()
            .join(SEPARATOR);
        format!("to_hex(md5({concat}))")
    }

    fn validate(&self) -> DfResult<()> {
        if self.fields.is_empty() {
            return Err(DfError::validation(
                "surrogate key: at least one field is required",
            ));
        }
        if let Some(pos) = self.fields.iter().position(|f| f.trim().is_empty()) {
            return Err(DfError::validation(format!(
                "surrogate key: field #{pos} is empty"
            )));
        }
        check_literal("surrogate key null value", &self.null_value)
    }
}

/// Surrogate key over `fields`, using [`SURROGATE_KEY_NULL`] for NULLs.
pub fn generate_surrogate_key<I, S>(fields: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    SurrogateKey::new(fields).to_sql()
}

/// Surrogate key over `fields`, using `default_null_value` for NULLs.
pub fn generate_surrogate_key_with_null<I, S>(fields: I, default_null_value: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    SurrogateKey::new(fields)
        .null_value(default_null_value)
        .to_sql()
}
