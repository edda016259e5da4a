use chrono::NaiveDate;
use leptos::prelude::*;
use thaw::*;

use crate::shared::date_utils::{
    from_input_value, month_of, previous_month_of, to_input_value, today, week_of,
};

/// DateRangePicker - два поля дат и быстрый выбор периода
///
/// Пустое поле означает открытую границу.
#[component]
pub fn DateRangePicker(
    #[prop(into)] date_from: Signal<Option<NaiveDate>>,

    #[prop(into)] date_to: Signal<Option<NaiveDate>>,

    /// Callback при изменении диапазона дат (from, to)
    on_change: Callback<(Option<NaiveDate>, Option<NaiveDate>)>,

    #[prop(optional)] label: Option<String>,
) -> impl IntoView {
    let apply = move |range: Option<(NaiveDate, NaiveDate)>| {
        if let Some((from, to)) = range {
            on_change.run((Some(from), Some(to)));
        }
    };

    // -1M считается от текущей левой границы, как листание назад
    let on_previous_month = move |_| {
        let anchor = date_from.get_untracked().unwrap_or_else(today);
        apply(previous_month_of(anchor));
    };

    view! {
        <Flex vertical=true gap=FlexGap::Small>
            {label.map(|l| view! { <Label>{l}</Label> })}

            <Flex class="date-range-picker" align=FlexAlign::Center gap=FlexGap::Small>
                <input
                    type="date"
                    class="date-range-picker__input"
                    prop:value=move || to_input_value(date_from.get())
                    on:change=move |ev| {
                        on_change.run((from_input_value(&event_target_value(&ev)), date_to.get_untracked()));
                    }
                />

                <div>"—"</div>

                <input
                    type="date"
                    class="date-range-picker__input"
                    prop:value=move || to_input_value(date_to.get())
                    on:change=move |ev| {
                        on_change.run((date_from.get_untracked(), from_input_value(&event_target_value(&ev))));
                    }
                />

                <ButtonGroup>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=on_previous_month
                        attr:title="Previous month"
                    >
                        "-1M"
                    </Button>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| apply(month_of(today()))
                        attr:title="This month"
                    >
                        "0M"
                    </Button>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| apply(Some(week_of(today())))
                        attr:title="This week"
                    >
                        "W"
                    </Button>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| on_change.run((None, None))
                        attr:title="Any date"
                    >
                        "∞"
                    </Button>
                </ButtonGroup>
            </Flex>
        </Flex>
    }
}
