//! Ranking of analysis records by jump ratio.

use crate::model::AnalysisRecord;

/// First `n` records by increasing jump ratio, for spotting markets that
/// held close to their window average. Stable: ties keep their original
/// collection order. `n == 0` clamps to an empty list.
pub fn top_ascending(records: &[AnalysisRecord], n: usize) -> Vec<AnalysisRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| a.jump_ratio.total_cmp(&b.jump_ratio));
    sorted.truncate(n);
    sorted
}

/// First `n` records by decreasing jump ratio, for spotting markets that
/// spiked hardest above their window average. Stable: ties keep their
/// original collection order. `n == 0` clamps to an empty list.
pub fn top_descending(records: &[AnalysisRecord], n: usize) -> Vec<AnalysisRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.jump_ratio.total_cmp(&a.jump_ratio));
    sorted.truncate(n);
    sorted
}
