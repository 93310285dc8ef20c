//! Non-field positions (bench, injured list, ...) as titled player lists.

use leptos::prelude::*;

use field::panels::{EMPTY_SECTION_TEXT, SectionEntry, SectionPlayer, section_entries};
use field::scene::FieldProps;

#[component]
pub fn SectionList(
    #[prop(into)] props: Signal<FieldProps>,
    #[prop(optional)] on_position_click: Option<Callback<String>>,
) -> impl IntoView {
    view! {
        <div class="section-list">
            {move || {
                props
                    .with(section_entries)
                    .into_iter()
                    .map(|entry| view! { <SectionView entry=entry on_position_click=on_position_click/> })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
fn SectionView(entry: SectionEntry, on_position_click: Option<Callback<String>>) -> impl IntoView {
    let code = entry.code.clone();
    let swatch = format!("background-color: {}", entry.color);
    let body = if entry.is_empty() {
        view! { <p class="section__empty">{EMPTY_SECTION_TEXT}</p> }.into_any()
    } else {
        let rows = entry.players.into_iter().map(player_row).collect_view();
        view! { <ol class="section__players">{rows}</ol> }.into_any()
    };

    view! {
        <section class="section" class:section--selected=entry.selected>
            <button
                class="section__header"
                on:click=move |_| {
                    if let Some(cb) = on_position_click {
                        cb.run(code.clone());
                    }
                }
            >
                <span class="section__swatch" style=swatch></span>
                <span class="section__label">{entry.label}</span>
                <span class="section__code">{entry.code}</span>
            </button>
            {body}
        </section>
    }
}

fn player_row(player: SectionPlayer) -> impl IntoView {
    view! {
        <li class="section__player">
            <span class="section__player-name">{player.name}</span>
            {player.jersey.map(|jersey| view! { <span class="section__player-jersey">{jersey}</span> })}
        </li>
    }
}
