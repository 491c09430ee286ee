// Console helpers and small formatting utilities

use wasm_bindgen::JsValue;

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

pub fn cerror(msg: &str) {
    web_sys::console::error_1(&JsValue::from_str(msg));
}

/// Formats a playback position for log lines, e.g. `42.5s`, `01:05.0`, `1:00:00.0`.
pub fn format_position(secs: f64) -> String {
    let secs = if secs.is_finite() { secs.max(0.0) } else { 0.0 };
    // Round to tenths before splitting so 59.96 carries into the next minute.
    let tenths = (secs * 10.0).round() as u64;
    let whole = tenths / 10;
    let t = tenths % 10;
    let h = whole / 3600;
    let m = (whole % 3600) / 60;
    let s = whole % 60;
    if h > 0 {
        format!("{}:{:02}:{:02}.{}", h, m, s, t)
    } else if m > 0 {
        format!("{:02}:{:02}.{}", m, s, t)
    } else {
        format!("{}.{}s", s, t)
    }
}
