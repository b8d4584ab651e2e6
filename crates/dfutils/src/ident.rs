//! Column-name and string-literal checks for the strict generator paths.
//!
//! The synthetic columns appended by [`crate::UnionRelations`] are emitted as
//! bare `AS <name>` aliases, so in strict mode they must be a single column
//! name:
//!
//! - Unquoted names are validated against: `[A-Za-z_][A-Za-z0-9_]*`
//! - Backtick-quoted names allow any characters except NUL, newline and `` ` ``
//!
//! Values rendered inside single quotes (aliases, relation names, the null
//! sentinel) are not escaped, so strict mode rejects any that would end the
//! literal early.
//!
//! # Example
//! ```ignore
//! use dfutils::ident::ColumnName;
//!
//! let c = ColumnName::parse("_dataform_source_key")?;
//! let q = ColumnName::parse("`source key`")?;
//! # Ok::<(), dfutils::DfError>(())
//! ```

use crate::error::{DfError, DfResult};

/// A validated column name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnName {
    /// Unquoted name: must match `[A-Za-z_][A-Za-z0-9_]*`.
    Unquoted(String),
    /// Backtick-quoted name, stored without the backticks.
    Quoted(String),
}

impl ColumnName {
    /// Parse a column name as it would appear after `AS`.
    pub fn parse(s: &str) -> DfResult<Self> {
        if s.is_empty() {
            return Err(DfError::validation("Column name cannot be empty"));
        }
        if s.contains('\0') {
            return Err(DfError::validation(
                "Column name cannot contain NUL character",
            ));
        }

        if let Some(rest) = s.strip_prefix('`') {
            let Some(inner) = rest.strip_suffix('`') else {
                return Err(DfError::validation(format!(
                    "Unclosed quoted column name: {s}"
                )));
            };
            if inner.is_empty() {
                return Err(DfError::validation("Empty quoted column name"));
            }
            if let Some(c) = inner.chars().find(|&c| c == '`' || c == '\n') {
                return Err(DfError::validation(format!(
                    "Invalid character in quoted column name: {c:?}"
                )));
            }
            return Ok(Self::Quoted(inner.to_string()));
        }

        let mut chars = s.chars();
        // Non-empty checked above.
        if let Some(first) = chars.next() {
            if first != '_' && !first.is_ascii_alphabetic() {
                return Err(DfError::validation(format!(
                    "Invalid column name start character: '{first}'"
                )));
            }
        }
        if let Some(c) = chars.find(|&c| c != '_' && !c.is_ascii_alphanumeric()) {
            return Err(DfError::validation(format!(
                "Invalid character in column name '{s}': '{c}'"
            )));
        }

        Ok(Self::Unquoted(s.to_string()))
    }

    /// The bare name, without quoting.
    pub fn name(&self) -> &str {
        match self {
            Self::Unquoted(s) | Self::Quoted(s) => s,
        }
    }
}

/// Check that `value` can be placed between single quotes verbatim.
///
/// `what` names the value in the error message (e.g. `"relation alias"`).
pub fn check_literal(what: &str, value: &str) -> DfResult<()> {
    if value.contains('\'') {
        return Err(DfError::validation(format!(
            "{what} cannot contain a single quote: {value}"
        )));
    }
    if value.contains('\\') {
        return Err(DfError::validation(format!(
            "{what} cannot contain a backslash: {value}"
        )));
    }
    if value.contains('\0') || value.contains('\n') {
        return Err(DfError::validation(format!(
            "{what} cannot contain NUL or newline characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_simple() {
        let c = ColumnName::parse("_dataform_source_key").unwrap();
        assert_eq!(c.name(), "_dataform_source_key");
    }

    #[test]
    fn column_quoted() {
        let c = ColumnName::parse("`source key`").unwrap();
        assert_eq!(c, ColumnName::Quoted("source key".to_string()));
    }

    #[test]
    fn column_rejects_empty() {
        assert!(ColumnName::parse("").is_err());
        assert!(ColumnName::parse("``").is_err());
    }

    #[test]
    fn column_rejects_start_digit() {
        assert!(ColumnName::parse("1col").is_err());
    }

    #[test]
    fn column_rejects_space() {
        assert!(ColumnName::parse("my col").is_err());
    }

    #[test]
    fn column_rejects_dotted() {
        assert!(ColumnName::parse("t.col").is_err());
    }

    #[test]
    fn column_rejects_unclosed_quote() {
        assert!(ColumnName::parse("`unclosed").is_err());
        assert!(ColumnName::parse("`a`b`").is_err());
    }

    #[test]
    fn literal_accepts_dotted_relation() {
        assert!(check_literal("relation", "project.dataset.table").is_ok());
        assert!(check_literal("relation", "`project.dataset.table`").is_ok());
    }

    #[test]
    fn literal_rejects_quote_and_backslash() {
        assert!(check_literal("alias", "o'brien").is_err());
        assert!(check_literal("alias", "a\\b").is_err());
        assert!(check_literal("alias", "a\nb").is_err());
    }
}
