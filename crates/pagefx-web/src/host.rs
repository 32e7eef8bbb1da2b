#![forbid(unsafe_code)]

//! Host-side conversions shared by the wasm bindings and native tests.
//!
//! No JS/WASM types here.

use pagefx_core::ConfigError;

/// CSS `display` value for a shown element.
pub const DISPLAY_SHOWN: &str = "block";
/// CSS `display` value for a hidden element.
pub const DISPLAY_HIDDEN: &str = "none";

/// Failure while installing the page interactions.
#[derive(Debug, thiserror::Error)]
pub enum InstallError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("no global `window` object")]
    NoWindow,

    #[error("window has no `document`")]
    NoDocument,

    #[error("failed to register `{event}` listener: {detail}")]
    Listener { event: &'static str, detail: String },

    #[error("failed to publish `{hook}` on window: {detail}")]
    Hook { hook: String, detail: String },
}

/// `style.display` value for the requested visibility.
#[must_use]
pub const fn display_value(visible: bool) -> &'static str {
    if visible { DISPLAY_SHOWN } else { DISPLAY_HIDDEN }
}

/// Convert a JS number passed as a slide delta.
///
/// Fractions are truncated toward zero; NaN and infinities are rejected.
#[must_use]
pub fn delta_from_js(n: f64) -> Option<i64> {
    if !n.is_finite() {
        return None;
    }
    // Float-to-int `as` saturates at the i64 bounds.
    Some(n.trunc() as i64)
}

/// Convert a JS number passed as a slideshow index.
///
/// Only non-negative whole numbers name an instance.
#[must_use]
pub fn instance_from_js(n: f64) -> Option<usize> {
    if !n.is_finite() || n < 0.0 || n.fract() != 0.0 || n > u32::MAX as f64 {
        return None;
    }
    usize::try_from(n as u64).ok()
}

/// Convert a position/count for return to JS.
#[must_use]
pub fn to_js_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

/// Parse the optional JSON config handed to `installPageInteractions`.
///
/// `None`, an empty string, or whitespace selects the defaults.
pub fn config_from_js(json: Option<&str>) -> Result<pagefx_core::PageConfig, InstallError> {
    match json.map(str::trim) {
        None | Some("") => Ok(pagefx_core::PageConfig::default()),
        Some(json) => Ok(pagefx_core::PageConfig::from_json(json)?),
    }
}
