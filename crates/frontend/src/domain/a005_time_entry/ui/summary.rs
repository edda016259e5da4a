use contracts::domain::a005_time_entry::{format_hours, TimesheetSummary};
use leptos::prelude::*;
use thaw::*;

/// Top entries of a breakdown, largest first
fn leaders(breakdown: &[(String, f64)], limit: usize) -> Vec<(String, f64)> {
    let mut items = breakdown.to_vec();
    items.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    items.truncate(limit);
    items
}

#[component]
fn Breakdown(title: &'static str, #[prop(into)] items: Signal<Vec<(String, f64)>>) -> impl IntoView {
    view! {
        <div class="timesheet-summary__group">
            <div class="timesheet-summary__title">{title}</div>
            {move || {
                items
                    .get()
                    .into_iter()
                    .map(|(name, hours)| view! {
                        <div class="timesheet-summary__line">
                            <span class="timesheet-summary__name">{name}</span>
                            <span class="timesheet-summary__hours">{format_hours(hours)}</span>
                        </div>
                    })
                    .collect_view()
            }}
        </div>
    }
}

/// Итоги табеля по отфильтрованным записям (все страницы)
#[component]
pub fn TimesheetSummaryPanel(#[prop(into)] summary: Signal<TimesheetSummary>) -> impl IntoView {
    const SHOWN: usize = 5;

    view! {
        <Card class="timesheet-summary">
            <Flex gap=FlexGap::Large align=FlexAlign::Start>
                <div class="timesheet-summary__total">
                    <div class="timesheet-summary__value">
                        {move || summary.with(|s| format_hours(s.total_hours))}
                        " h"
                    </div>
                    <div class="timesheet-summary__caption">
                        {move || summary.with(|s| format!("{} entries", s.entry_count))}
                    </div>
                </div>
                <Breakdown
                    title="By organization"
                    items=Signal::derive(move || summary.with(|s| leaders(&s.by_organization, SHOWN)))
                />
                <Breakdown
                    title="By process"
                    items=Signal::derive(move || summary.with(|s| leaders(&s.by_process, SHOWN)))
                />
            </Flex>
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaders_order_by_hours_then_name() {
        let breakdown = vec![
            ("Beta".to_string(), 2.0),
            ("Alpha".to_string(), 8.0),
            ("Gamma".to_string(), 2.0),
        ];
        let top = leaders(&breakdown, 2);
        assert_eq!(top, vec![("Alpha".to_string(), 8.0), ("Beta".to_string(), 2.0)]);
    }
}
