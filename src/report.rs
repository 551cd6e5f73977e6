//! Rendering of analysis results for the terminal.

use crate::analysis::{GroupResult, IntersectionAnalysis, MovementGroup};
use anyhow::Result;
use std::collections::BTreeMap;

/// Four-line report: capacity, mean delay, queue length and level of service per group.
pub fn render_text(analysis: &IntersectionAnalysis) -> String {
    let [major_right, minor, major_left] = &analysis.groups;

    format!(
        "Capacity 2-3: {}, 4-6: {}, 7-8: {}\n\
         Mean delay 2-3: {:.2} s, 4-6: {:.2} s, 7-8: {:.2} s\n\
         Queue length 2-3: {:.2} m, 4-6: {:.2} m, 7-8: {:.2} m\n\
         Level of service 2-3: {}, 4-6: {}, 7-8: {}\n",
        major_right.capacity, minor.capacity, major_left.capacity,
        major_right.delay, minor.delay, major_left.delay,
        major_right.queue_length, minor.queue_length, major_left.queue_length,
        major_right.level_of_service, minor.level_of_service, major_left.level_of_service,
    )
}

/// Pretty-printed JSON object keyed by group label.
pub fn render_json(analysis: &IntersectionAnalysis) -> Result<String> {
    let by_label: BTreeMap<&'static str, &GroupResult> = MovementGroup::ALL
        .iter()
        .map(|group| (group.label(), analysis.group(*group)))
        .collect();

    Ok(serde_json::to_string_pretty(&by_label)?)
}
