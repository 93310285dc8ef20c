//! Canvas host for the depth-chart field.
//!
//! DESIGN
//! ======
//! The component owns one `field::engine::Engine` bound to its canvas. Any
//! change to positions, assignments or selection hands the engine a fresh
//! `FieldProps` and redraws from scratch. A window resize re-fits the field
//! to the container and redraws. The resize listener guard lives in the
//! component's reactive owner and is dropped in `on_cleanup`, which removes
//! the listener.

use leptos::prelude::*;

use field::config::FieldConfig;
use field::position::PositionDef;
use field::roster::Assignment;

#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::Rc;

#[cfg(feature = "csr")]
use field::engine::{Action, Button, Engine};
#[cfg(feature = "csr")]
use field::resize::ResizeListener;
#[cfg(feature = "csr")]
use field::scene::FieldProps;
#[cfg(feature = "csr")]
use field::viewport::Point;

#[cfg(feature = "csr")]
fn render(engine: &Engine) {
    if let Err(err) = engine.render() {
        log::warn!("depth chart: render failed: {err:?}");
    }
}

/// Re-fit the engine to the container width and redraw.
#[cfg(feature = "csr")]
fn fit_and_render(engine: &mut Engine, container_ref: &NodeRef<leptos::html::Div>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(container) = container_ref.get() else {
        return;
    };
    let width = f64::from(container.client_width());
    let dpr = window.device_pixel_ratio().max(1.0);
    if let Err(err) = engine.resize(width, dpr) {
        log::warn!("depth chart: resize failed: {err:?}");
    }
    render(engine);
}

#[cfg(feature = "csr")]
fn process_actions(
    actions: Vec<Action>,
    canvas_ref: &NodeRef<leptos::html::Canvas>,
    on_position_click: Option<Callback<String>>,
) {
    for action in actions {
        match action {
            Action::PositionClicked(code) => {
                log::debug!("depth chart: position clicked: {code}");
                if let Some(cb) = on_position_click {
                    cb.run(code);
                }
            }
            Action::SetCursor(cursor) => {
                if let Some(canvas) = canvas_ref.get() {
                    if let Err(err) = web_sys::HtmlElement::style(&canvas).set_property("cursor", &cursor) {
                        log::warn!("depth chart: cursor update failed: {err:?}");
                    }
                }
            }
        }
    }
}

#[cfg(feature = "csr")]
fn pointer_point(ev: &leptos::ev::PointerEvent) -> Point {
    Point::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()))
}

/// Baseball field with one bubble per configured field position.
///
/// Clicks are reported through `on_position_click`; highlighting follows
/// `selected_position` and nothing else.
#[component]
pub fn DepthChartField(
    #[prop(into)] positions: Signal<Vec<PositionDef>>,
    #[prop(into)] assigned_players: Signal<Vec<Assignment>>,
    #[prop(into)] selected_position: Signal<Option<String>>,
    #[prop(optional)] config: Option<FieldConfig>,
    #[prop(optional)] on_position_click: Option<Callback<String>>,
) -> impl IntoView {
    let container_ref = NodeRef::<leptos::html::Div>::new();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let config = config.unwrap_or_default();
    let max_width = format!("max-width: {}px", config.max_width);

    #[cfg(feature = "csr")]
    let engine = Rc::new(RefCell::new(None::<Engine>));
    #[cfg(feature = "csr")]
    let resize_guard = StoredValue::new_local(None::<ResizeListener>);

    #[cfg(feature = "csr")]
    {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if engine.borrow().is_some() {
                return;
            }

            let mut instance = Engine::new(canvas, config.clone());
            instance.set_props(FieldProps {
                positions: positions.get_untracked(),
                assigned_players: assigned_players.get_untracked(),
                selected_position: selected_position.get_untracked(),
            });
            fit_and_render(&mut instance, &container_ref);
            *engine.borrow_mut() = Some(instance);

            let engine_for_resize = Rc::clone(&engine);
            match ResizeListener::attach(move || {
                if let Some(engine) = engine_for_resize.borrow_mut().as_mut() {
                    fit_and_render(engine, &container_ref);
                }
            }) {
                Ok(listener) => resize_guard.set_value(Some(listener)),
                Err(err) => log::warn!("depth chart: resize listener unavailable: {err:?}"),
            }
        });
    }

    #[cfg(feature = "csr")]
    {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            let props = FieldProps {
                positions: positions.get(),
                assigned_players: assigned_players.get(),
                selected_position: selected_position.get(),
            };
            if let Some(engine) = engine.borrow_mut().as_mut() {
                engine.set_props(props);
                render(engine);
            }
        });
    }

    #[cfg(feature = "csr")]
    on_cleanup(move || {
        drop(resize_guard.try_update_value(Option::take));
    });

    #[cfg(not(feature = "csr"))]
    {
        let _ = (positions, assigned_players, selected_position);
        let _ = on_position_click;
    }

    let on_pointer_down = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                let actions = match engine.borrow_mut().as_mut() {
                    Some(engine) => engine.on_pointer_down(pointer_point(&ev), Button::from_dom(ev.button())),
                    None => return,
                };
                // The callback may update signals that re-enter the engine.
                process_actions(actions, &canvas_ref, on_position_click);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_move = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                let actions = match engine.borrow_mut().as_mut() {
                    Some(engine) => engine.on_pointer_move(pointer_point(&ev)),
                    None => return,
                };
                process_actions(actions, &canvas_ref, on_position_click);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_leave = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |_ev: leptos::ev::PointerEvent| {
                let actions = match engine.borrow_mut().as_mut() {
                    Some(engine) => engine.on_pointer_leave(),
                    None => return,
                };
                process_actions(actions, &canvas_ref, on_position_click);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    view! {
        <div class="depth-chart-field" node_ref=container_ref style=max_width>
            <canvas
                class="depth-chart-field__canvas"
                node_ref=canvas_ref
                on:pointerdown=on_pointer_down
                on:pointermove=on_pointer_move
                on:pointerleave=on_pointer_leave
            >
                "Your browser does not support canvas."
            </canvas>
        </div>
    }
}
