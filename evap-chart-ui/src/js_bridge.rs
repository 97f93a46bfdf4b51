//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart functions live in `assets/js/*.js`, are embedded at compile
//! time and evaluated as globals (no ES modules) exposed via `window.*`.
//! This module serializes view models and calls those globals.

use serde::Serialize;

static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static SEASONAL_CHART_JS: &str = include_str!("../assets/js/seasonal-chart.js");
static COMPONENT_CHART_JS: &str = include_str!("../assets/js/component-chart.js");
static TREND_CHART_JS: &str = include_str!("../assets/js/trend-chart.js");

/// 100 ms polls before giving up on D3 or a chart container (10 s).
const MAX_POLLS: u32 = 100;

/// Global JS render functions, one per chart kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Seasonal evaporation loss bars
    Seasonal,
    /// Radiation vs aerodynamic donut
    Components,
    /// Evaporation rate / temperature / humidity over recent calculations
    Trend,
}

impl ChartKind {
    fn render_fn(self) -> &'static str {
        match self {
            ChartKind::Seasonal => "renderSeasonalChart",
            ChartKind::Components => "renderComponentChart",
            ChartKind::Trend => "renderTrendChart",
        }
    }
}

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Evap JS call failed:', e); }}",
        code
    );
    if let Err(e) = js_sys::eval(&wrapped) {
        log::warn!("JS eval failed: {:?}", e);
    }
}

/// Initialize chart scripts once D3 has loaded.
///
/// The chart files declare plain `function`s. They are evaluated at global
/// scope via indirect eval once `d3` exists and then promoted to `window.*`
/// explicitly. Safe to call more than once.
pub fn init_charts() {
    let all_js = [
        TOOLTIP_JS,
        SEASONAL_CHART_JS,
        COMPONENT_CHART_JS,
        TREND_CHART_JS,
    ]
    .join("\n");

    let store_js = match serde_json::to_string(&all_js) {
        Ok(encoded) => format!("window.__evapChartScripts = {};", encoded),
        Err(e) => {
            log::error!("Failed to encode chart scripts: {}", e);
            return;
        }
    };
    call_js(&store_js);

    let init_js = r#"
        (function() {
            if (window.__evapChartsReady || window.__evapChartsPending) return;
            window.__evapChartsPending = true;
            var tries = 0;
            var waitForD3 = setInterval(function() {
                if (++tries > __MAX_POLLS__) {
                    clearInterval(waitForD3);
                    window.__evapChartsPending = false;
                    console.error('[Evap] D3 did not load; charts disabled');
                    return;
                }
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__evapChartScripts);
                    delete window.__evapChartScripts;
                    if (typeof renderSeasonalChart !== 'undefined') window.renderSeasonalChart = renderSeasonalChart;
                    if (typeof renderComponentChart !== 'undefined') window.renderComponentChart = renderComponentChart;
                    if (typeof renderTrendChart !== 'undefined') window.renderTrendChart = renderTrendChart;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__evapChartsReady = true;
                    console.log('Evaporation charts initialized');
                }
            }, 100);
        })();
    "#
    .replace("__MAX_POLLS__", &MAX_POLLS.to_string());
    call_js(&init_js);
}

/// Escape a JSON document for embedding in a single-quoted JS string literal.
fn escape_for_js(json: &str) -> String {
    json.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "")
}

/// Build the polling snippet that renders once scripts and container exist.
///
/// A newer render for the same container cancels the pending one, and the
/// poll stops after `MAX_POLLS` attempts.
fn render_script(kind: ChartKind, container_id: &str, data_json: &str, config_json: &str) -> String {
    let render_fn = kind.render_fn();
    let data = escape_for_js(data_json);
    let config = escape_for_js(config_json);
    format!(
        r#"
        (function() {{
            var polls = window.__evapChartPolls = window.__evapChartPolls || {{}};
            if (polls['{container_id}']) clearInterval(polls['{container_id}']);
            var tries = 0;
            var poll = polls['{container_id}'] = setInterval(function() {{
                if (++tries > {MAX_POLLS}) {{
                    clearInterval(poll);
                    delete polls['{container_id}'];
                    console.warn('[Evap] gave up rendering {container_id}');
                    return;
                }}
                if (window.__evapChartsReady &&
                    typeof window.{render_fn} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    delete polls['{container_id}'];
                    try {{
                        window.{render_fn}('{container_id}', '{data}', '{config}');
                    }} catch(e) {{ console.error('[Evap] {render_fn} error:', e); }}
                }}
            }}, 100);
        }})();
        "#
    )
}

/// Render `data` into the chart container, or clear it when there is nothing
/// to show.
pub fn render_chart<T: Serialize>(
    kind: ChartKind,
    container_id: &str,
    data: &[T],
    config: &serde_json::Value,
) {
    if data.is_empty() {
        destroy_chart(container_id);
        return;
    }
    let data_json = match serde_json::to_string(data) {
        Ok(json) => json,
        Err(e) => {
            log::error!("Failed to serialize {:?} chart data: {}", kind, e);
            return;
        }
    };
    call_js(&render_script(kind, container_id, &data_json, &config.to_string()));
}

/// Destroy/clean up a chart in the given container, cancelling any pending render.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var p = window.__evapChartPolls; \
         if (p && p['{id}']) {{ clearInterval(p['{id}']); delete p['{id}']; }} \
         var el = document.getElementById('{id}'); if (el) el.innerHTML = '';",
        id = container_id
    ));
}
