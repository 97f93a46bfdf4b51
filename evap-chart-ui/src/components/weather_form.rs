//! Weather observation form with Calculate / Reset actions.

use crate::state::AppState;
use dioxus::prelude::*;
use evap_core::weather::WeatherForm;

#[derive(Props, Clone, PartialEq)]
struct FieldProps {
    label: &'static str,
    hint: &'static str,
    value: String,
    #[props(default = "number")]
    input_type: &'static str,
    disabled: bool,
    on_input: EventHandler<String>,
}

#[component]
fn Field(props: FieldProps) -> Element {
    let on_input = props.on_input;
    rsx! {
        label {
            style: "display: flex; flex-direction: column; gap: 4px; font-size: 13px; font-weight: bold;",
            "{props.label}"
            input {
                r#type: "{props.input_type}",
                step: "any",
                value: "{props.value}",
                placeholder: "{props.hint}",
                disabled: props.disabled,
                style: "padding: 6px 8px; font-weight: normal;",
                oninput: move |evt: Event<FormData>| on_input.call(evt.value()),
            }
        }
    }
}

fn edit_form(mut state: AppState, apply: fn(&mut WeatherForm, String), value: String) {
    apply(&mut state.session.write().form, value);
}

#[derive(Props, Clone, PartialEq)]
pub struct WeatherFormPanelProps {
    /// Fired by the Calculate button; the app runs the submission pipeline.
    pub on_submit: EventHandler<()>,
}

/// Inputs for the four weather readings, location and reservoir surface area.
///
/// Both buttons are disabled while a calculation is in flight.
#[component]
pub fn WeatherFormPanel(props: WeatherFormPanelProps) -> Element {
    let mut state = use_context::<AppState>();
    let (form, surface_area, loading) = {
        let session = state.session.read();
        (session.form.clone(), session.surface_area.clone(), session.loading)
    };

    let on_submit = props.on_submit;

    rsx! {
        form {
            style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(180px, 1fr)); gap: 12px; margin: 12px 0;",
            onsubmit: move |evt: Event<FormData>| {
                evt.prevent_default();
                on_submit.call(());
            },
            Field {
                label: "Temperature (°C)",
                hint: "-50 to 60",
                value: form.temperature,
                disabled: loading,
                on_input: move |v: String| edit_form(state, |f, v| f.temperature = v, v),
            }
            Field {
                label: "Humidity (%)",
                hint: "0 to 100",
                value: form.humidity,
                disabled: loading,
                on_input: move |v: String| edit_form(state, |f, v| f.humidity = v, v),
            }
            Field {
                label: "Wind speed (m/s)",
                hint: "0 to 50",
                value: form.wind_speed,
                disabled: loading,
                on_input: move |v: String| edit_form(state, |f, v| f.wind_speed = v, v),
            }
            Field {
                label: "Solar radiation (MJ/m²/day)",
                hint: "0 to 40",
                value: form.solar_radiation,
                disabled: loading,
                on_input: move |v: String| edit_form(state, |f, v| f.solar_radiation = v, v),
            }
            Field {
                label: "Location (optional)",
                hint: "Unknown Location",
                value: form.location,
                input_type: "text",
                disabled: loading,
                on_input: move |v: String| edit_form(state, |f, v| f.location = v, v),
            }
            Field {
                label: "Reservoir surface area (m²)",
                hint: "1000",
                value: surface_area,
                disabled: loading,
                on_input: move |v: String| state.session.write().surface_area = v,
            }
            div {
                style: "display: flex; gap: 8px; align-items: flex-end;",
                button {
                    r#type: "submit",
                    disabled: loading,
                    style: "padding: 8px 16px; background: #0088FE; color: #fff; border: none; border-radius: 4px;",
                    if loading { "Calculating..." } else { "Calculate" }
                }
                button {
                    r#type: "button",
                    disabled: loading,
                    style: "padding: 8px 16px; background: #fff; border: 1px solid #ccc; border-radius: 4px;",
                    onclick: move |_| state.reset(),
                    "Reset"
                }
            }
        }
    }
}
