// Template helper binding for the pool's web front-end
use wasm_bindgen::prelude::*;

/// Registered with the template host as `formatHashrate`.
#[wasm_bindgen(js_name = formatHashrate)]
pub fn format_hashrate(hashrate: f64) -> String {
    crate::format_hashrate(hashrate)
}
