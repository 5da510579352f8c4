/// Headline numbers shown next to the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SummaryMetrics {
    pub current_production: u32,
    pub efficiency: u32,
    pub remaining_parts: u32,
}

pub fn calculate_summary(target_parts: u32, event_count: usize) -> SummaryMetrics {
    let current_production = event_count as u32;

    let efficiency = if target_parts == 0 {
        0
    } else {
        (current_production as f64 / target_parts as f64 * 100.0).round() as u32
    };

    SummaryMetrics {
        current_production,
        efficiency,
        remaining_parts: target_parts.saturating_sub(current_production),
    }
}
