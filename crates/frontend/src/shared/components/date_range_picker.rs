use leptos::prelude::*;
use thaw::*;

use crate::shared::date_utils::{parse_iso, range_ending_at, to_iso};

/// Two native date inputs plus quick-range buttons.
///
/// Dates travel as "YYYY-MM-DD" strings. Quick ranges end at `max` and never
/// start before `min`.
#[component]
pub fn DateRangePicker(
    #[prop(into)] date_from: Signal<String>,
    #[prop(into)] date_to: Signal<String>,
    /// First selectable day
    #[prop(into)]
    min: Signal<String>,
    /// Last selectable day
    #[prop(into)]
    max: Signal<String>,
    /// Called with the new (from, to) pair
    on_change: Callback<(String, String)>,
    #[prop(optional)] label: Option<String>,
) -> impl IntoView {
    let on_from_change = move |new_from: String| {
        on_change.run((new_from, date_to.get_untracked()));
    };

    let on_to_change = move |new_to: String| {
        on_change.run((date_from.get_untracked(), new_to));
    };

    let select_last_days = move |days: i64| {
        let (Some(min_date), Some(max_date)) = (
            parse_iso(&min.get_untracked()),
            parse_iso(&max.get_untracked()),
        ) else {
            return;
        };
        let (from, to) = range_ending_at(max_date, days, min_date);
        on_change.run((to_iso(from), to_iso(to)));
    };

    let select_everything = move |_| {
        on_change.run((min.get_untracked(), max.get_untracked()));
    };

    view! {
        <Flex vertical=true gap=FlexGap::Small>
            {label.map(|l| view! { <Label>{l}</Label> })}

            <Flex class="date-range-picker" align=FlexAlign::Center gap=FlexGap::Small>
                <input
                    type="date"
                    class="date-range-picker__input"
                    prop:value=date_from
                    min=min
                    max=max
                    on:input=move |ev| on_from_change(event_target_value(&ev))
                />

                <span>"até"</span>

                <input
                    type="date"
                    class="date-range-picker__input"
                    prop:value=date_to
                    min=min
                    max=max
                    on:input=move |ev| on_to_change(event_target_value(&ev))
                />

                <ButtonGroup>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| select_last_days(30)
                    >
                        "30d"
                    </Button>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| select_last_days(90)
                    >
                        "90d"
                    </Button>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=select_everything
                    >
                        "Tudo"
                    </Button>
                </ButtonGroup>
            </Flex>
        </Flex>
    }
}
