//! Per-session visit bookkeeping

/// Session attribute holding the visit counter
pub const COUNT_ATTRIBUTE: &str = "count";
/// Session attribute holding the formatted last-visit date
pub const DATE_ATTRIBUTE: &str = "date";

/// Visit information shown on a listing page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitState {
    /// Visits recorded before the current one
    pub count: i64,
    /// Last visit, formatted as `dd/M/yyyy hh:mm:ss`
    pub date: String,
}
