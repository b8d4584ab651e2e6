//! Row deduplication via `QUALIFY ROW_NUMBER()`.

use crate::error::{DfError, DfResult};
use crate::fragment::SqlFragment;

/// Builder for a statement that keeps one row per partition.
///
/// The kept row is the first one under `ORDER BY`. Partition and order
/// expressions are appended in call order and joined with `", "`.
///
/// # Example
/// ```ignore
/// use dfutils::{Deduplicate, SqlFragment};
///
/// let sql = Deduplicate::new("events")
///     .partition_by("user_id")
///     .partition_by("session_id")
///     .order_by("event_ts DESC")
///     .to_sql();
/// assert_eq!(
///     sql,
///     "SELECT * FROM events QUALIFY ROW_NUMBER() OVER \
///      (PARTITION BY user_id, session_id ORDER BY event_ts DESC ) = 1"
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[must_use]
pub struct Deduplicate {
    relation: String,
    partition_by: Vec<String>,
    order_by: Vec<String>,
}

impl Deduplicate {
    /// Start a deduplication over `relation`.
    pub fn new(relation: impl Into<String>) -> Self {
        Self {
            relation: relation.into(),
            partition_by: Vec::new(),
            order_by: Vec::new(),
        }
    }

    /// Append a PARTITION BY expression.
    pub fn partition_by(mut self, expr: impl Into<String>) -> Self {
        self.partition_by.push(expr.into());
        self
    }

    /// Append an ORDER BY expression (direction keywords included).
    pub fn order_by(mut self, expr: impl Into<String>) -> Self {
        self.order_by.push(expr.into());
        self
    }

    pub fn relation(&self) -> &str {
        &self.relation
    }
}

impl SqlFragment for Deduplicate {
    const NAME: &'static str = "deduplicate";

    fn build_sql(&self) -> String {
        format!(
            "SELECT * FROM {} QUALIFY ROW_NUMBER() OVER (PARTITION BY {} ORDER BY {} ) = 1",
            self.relation,
            self.partition_by.join(", "),
            self.order_by.join(", "),
        )
    }

    fn validate(&self) -> DfResult<()> {
        if self.relation.trim().is_empty() {
            return Err(DfError::validation("deduplicate: relation is empty"));
        }
        check_exprs("PARTITION BY", &self.partition_by)?;
        check_exprs("ORDER BY", &self.order_by)
    }
}

fn check_exprs(clause: &str, exprs: &[String]) -> DfResult<()> {
    if exprs.is_empty() {
        return Err(DfError::validation(format!(
            "deduplicate: at least one {clause} expression is required"
        )));
    }
    if let Some(pos) = exprs.iter().position(|e| e.trim().is_empty()) {
        return Err(DfError::validation(format!(
            "deduplicate: {clause} expression #{pos} is empty"
        )));
    }
    Ok(())
}

/// Keep exactly one row of `relation` per `partition_by`, the first by `order_by`.
///
/// `partition_by` and `order_by` may already be comma-joined lists. Nothing
/// is validated.
pub fn deduplicate(relation: &str, partition_by: &str, order_by: &str) -> String {
    Deduplicate::new(relation)
        .partition_by(partition_by)
        .order_by(order_by)
        .to_sql()
}
