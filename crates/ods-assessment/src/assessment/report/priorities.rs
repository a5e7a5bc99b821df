use super::views::{DimensionReportEntry, PriorityArea};

pub(crate) const PRIORITY_AREA_COUNT: usize = 3;

/// Lowest scores first; the sort is stable so ties keep catalog order.
pub(crate) fn select_priority_areas(entries: &[DimensionReportEntry]) -> Vec<PriorityArea> {
    let mut ranked: Vec<&DimensionReportEntry> = entries.iter().collect();
    ranked.sort_by_key(|entry| entry.score);

    ranked
        .into_iter()
        .take(PRIORITY_AREA_COUNT)
        .map(|entry| PriorityArea {
            dimension_id: entry.dimension_id,
            name: entry.name.clone(),
            hex_color: entry.hex_color,
            score: entry.score,
            message: format!(
                "Con un nivel del {}%, se recomienda establecer un plan de acción inmediato en esta dimensión.",
                entry.score
            ),
        })
        .collect()
}
