//! Card grid under the field, one card per configured field position.

use leptos::prelude::*;

use field::panels::{PositionCard, position_cards};
use field::scene::FieldProps;

#[component]
pub fn PositionCards(
    #[prop(into)] props: Signal<FieldProps>,
    #[prop(optional)] on_position_click: Option<Callback<String>>,
) -> impl IntoView {
    view! {
        <div class="position-cards">
            {move || {
                props
                    .with(position_cards)
                    .into_iter()
                    .map(|card| view! { <PositionCardView card=card on_position_click=on_position_click/> })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
fn PositionCardView(card: PositionCard, on_position_click: Option<Callback<String>>) -> impl IntoView {
    let code = card.code.clone();
    let badge = card.count_badge();
    let body = card.body().to_owned();
    let is_open = card.primary.is_none();
    let swatch = format!("background-color: {}", card.color);

    view! {
        <button
            class="position-card"
            class:position-card--selected=card.selected
            class:position-card--open=is_open
            on:click=move |_| {
                if let Some(cb) = on_position_click {
                    cb.run(code.clone());
                }
            }
        >
            <span class="position-card__swatch" style=swatch></span>
            <span class="position-card__code">{card.code}</span>
            {badge.map(|count| view! { <span class="position-card__count">{count}</span> })}
            <span class="position-card__label">{card.label}</span>
            <span class="position-card__body">{body}</span>
        </button>
    }
}
