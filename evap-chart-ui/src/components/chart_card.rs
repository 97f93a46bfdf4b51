//! Titled card holding a D3.js chart container.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartCardProps {
    /// The DOM id for the chart container (D3 will render into this)
    pub id: String,
    pub title: String,
    /// Unit explanation under the title (e.g., "m³ per season")
    #[props(default = String::new())]
    pub unit_description: String,
    /// When false the placeholder is shown instead of the chart
    pub has_data: bool,
    #[props(default = "No data yet.".to_string())]
    pub empty_message: String,
    #[props(default = 320)]
    pub min_height: u32,
}

/// The chart div is always mounted so D3 can find it; the placeholder sits
/// on top of it while there is nothing to draw.
#[component]
pub fn ChartCard(props: ChartCardProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; width: 100%;",
        props.min_height
    );

    rsx! {
        section {
            style: "margin: 16px 0; padding: 12px; border: 1px solid #e0e0e0; border-radius: 6px;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 16px;",
                "{props.title}"
            }
            if !props.unit_description.is_empty() {
                p {
                    style: "margin: 0 0 8px 0; font-size: 12px; color: #666;",
                    "{props.unit_description}"
                }
            }
            div {
                style: "{style}",
                if !props.has_data {
                    div {
                        style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); color: #999;",
                        "{props.empty_message}"
                    }
                }
                div {
                    id: "{props.id}",
                    style: "width: 100%;",
                }
            }
        }
    }
}
