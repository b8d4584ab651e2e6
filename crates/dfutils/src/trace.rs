//! `tracing` events for generated fragments.
//!
//! Enable via the crate feature `tracing` (on by default). Without it every
//! function here compiles to nothing.

/// Maximum SQL length (in bytes) written into an event.
pub const MAX_SQL_LENGTH: usize = 200;

/// Truncate `sql` to at most `max_bytes` without splitting a UTF-8 char.
#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
pub(crate) fn truncate_sql_bytes(sql: &str, max_bytes: usize) -> &str {
    if sql.len() <= max_bytes {
        return sql;
    }
    let mut end = max_bytes;
    while end > 0 && !sql.is_char_boundary(end) {
        end -= 1;
    }
    &sql[..end]
}

#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
pub(crate) fn display_sql(sql: &str) -> String {
    if sql.len() > MAX_SQL_LENGTH {
        format!("{}...", truncate_sql_bytes(sql, MAX_SQL_LENGTH))
    } else {
        sql.to_string()
    }
}

/// Emit the rendered SQL of `fragment` at DEBUG.
#[cfg(feature = "tracing")]
pub(crate) fn generated(fragment: &'static str, sql: &str) {
    tracing::debug!(
        target: "dfutils.sql",
        fragment,
        sql = %display_sql(sql),
        "generated sql fragment"
    );
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn generated(_fragment: &'static str, _sql: &str) {}

/// Emit a rejected strict-mode input at WARN.
#[cfg(feature = "tracing")]
pub(crate) fn rejected(fragment: &'static str, err: &crate::DfError) {
    tracing::warn!(
        target: "dfutils.sql",
        fragment,
        error = %err,
        "sql fragment rejected"
    );
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn rejected(_fragment: &'static str, _err: &crate::DfError) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_sql() {
        assert_eq!(truncate_sql_bytes("SELECT 1", 200), "SELECT 1");
    }

    #[test]
    fn truncate_respects_char_boundary() {
        // 'é' is two bytes; cutting at 2 would split it.
        assert_eq!(truncate_sql_bytes("aé", 2), "a");
    }

    #[test]
    fn display_appends_ellipsis() {
        let long = "x".repeat(MAX_SQL_LENGTH + 10);
        let shown = display_sql(&long);
        assert_eq!(shown.len(), MAX_SQL_LENGTH + 3);
        assert!(shown.ends_with("..."));
    }
}
