//! Trait shared by the fragment builders.

use crate::error::DfResult;
use crate::trace;

/// Base trait for all SQL fragment builders.
///
/// `to_sql()` never fails: inputs are rendered verbatim and malformed SQL is
/// left for the engine to reject. `try_to_sql()` runs [`SqlFragment::validate`]
/// first.
pub trait SqlFragment {
    /// Short name used in log events (e.g. `"deduplicate"`).
    const NAME: &'static str;

    /// Build the SQL string.
    fn build_sql(&self) -> String;

    /// Check inputs for the strict path.
    fn validate(&self) -> DfResult<()> {
        Ok(())
    }

    /// Render the fragment without validation.
    fn to_sql(&self) -> String {
        let sql = self.build_sql();
        trace::generated(Self::NAME, &sql);
        sql
    }

    /// Validate, then render.
    fn try_to_sql(&self) -> DfResult<String> {
        if let Err(err) = self.validate() {
            trace::rejected(Self::NAME, &err);
            return Err(err);
        }
        Ok(self.to_sql())
    }
}
