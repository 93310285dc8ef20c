//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use field::config::FieldConfig;

use crate::components::depth_chart_field::DepthChartField;
use crate::components::position_cards::PositionCards;
use crate::components::section_list::SectionList;
use crate::state::depth_chart::DepthChartState;
use crate::util::roster_data::RosterData;

/// Root application component.
///
/// Provides the depth-chart state as context and lays out the field, the
/// card grid and the sections list around it.
#[component]
pub fn App(#[prop(optional)] roster: RosterData) -> impl IntoView {
    provide_meta_context();

    let config = match roster.field_config() {
        Ok(config) => config,
        Err(err) => {
            log::warn!("depth chart: invalid field config, using defaults: {err}");
            FieldConfig::default()
        }
    };
    let state = RwSignal::new(roster.into_state());
    provide_context(state);

    view! {
        <Title text="Depth Chart"/>
        <DepthChartPage config=config/>
    }
}

/// Field plus panels, wired to the `DepthChartState` context.
#[component]
pub fn DepthChartPage(#[prop(optional)] config: Option<FieldConfig>) -> impl IntoView {
    let state = expect_context::<RwSignal<DepthChartState>>();

    let positions = Signal::derive(move || state.with(|s| s.positions.clone()));
    let assigned_players = Signal::derive(move || state.with(|s| s.assigned_players.clone()));
    let selected_position = Signal::derive(move || state.with(DepthChartState::selected_code));
    let field_props = Signal::derive(move || state.with(DepthChartState::field_props));
    let on_position_click = Callback::new(move |code: String| {
        state.update(|s| s.click(&code));
    });

    view! {
        <main class="depth-chart">
            <DepthChartField
                positions=positions
                assigned_players=assigned_players
                selected_position=selected_position
                config=config.unwrap_or_default()
                on_position_click=on_position_click
            />
            <PositionCards props=field_props on_position_click=on_position_click/>
            <SectionList props=field_props on_position_click=on_position_click/>
        </main>
    }
}
