//! Error banner bound to the session's error slot.

use crate::state::AppState;
use dioxus::prelude::*;

/// Shows the current session error, or nothing when there is none.
#[component]
pub fn ErrorDisplay() -> Element {
    let state = use_context::<AppState>();
    let error = state.session.read().error.clone();

    match error {
        Some(message) => rsx! {
            div {
                role: "alert",
                style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
                strong { "Error: " }
                "{message}"
            }
        },
        None => rsx! {},
    }
}
