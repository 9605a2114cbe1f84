//! WASM-facing entry points for the gnoweb theme token resolver.
//!
//! This crate is compiled to a `cdylib` and consumed from the frontend build
//! via `wasm-bindgen`. Native tests use the `*_internal` helpers, which
//! expose Rust error types instead of `JsValue`.
//!
//! ```
//! let json = gnoweb_tokens_wasm::tailwind_config_json_internal(None).unwrap();
//! assert!(json.contains("\"screens\""));
//! ```

use config::constants::{ResolverConfig, BASE_FONT_SIZE_PX};
use gnoweb_tokens::{TokenError, TokenResolver};
use wasm_bindgen::prelude::*;

/// Installs a panic hook that forwards Rust panics to the console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "gnoweb-tokens-wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Returns the root font size the theme is converted against.
///
/// # Examples
/// ```
/// assert_eq!(gnoweb_tokens_wasm::base_font_size(), 16.0);
/// ```
#[wasm_bindgen]
pub fn base_font_size() -> f64 {
    BASE_FONT_SIZE_PX
}

/// Converts a pixel magnitude to a rem string with the default root.
///
/// # Examples
/// ```
/// assert_eq!(gnoweb_tokens_wasm::px_to_rem(360.0), "22.5rem");
/// ```
#[wasm_bindgen]
pub fn px_to_rem(px: f64) -> String {
    gnoweb_tokens::convert(px).to_string()
}

/// Returns the engine configuration as a JSON string.
///
/// `base_font_size` overrides the 16px root when given.
///
/// # Errors
/// Returns a JavaScript error value with a readable message when the root
/// font size is unusable or the configuration fails validation.
///
/// # Examples
/// ```no_run
/// // In JavaScript: const json = tailwind_config_json();
/// ```
#[wasm_bindgen]
pub fn tailwind_config_json(base_font_size: Option<f64>) -> Result<String, JsValue> {
    tailwind_config_json_internal(base_font_size).map_err(to_js_error)
}

/// Returns the engine configuration as a plain JavaScript object, ready to
/// be the default export of `tx.config.js`.
///
/// # Errors
/// Same as [`tailwind_config_json`], plus a JSON parse failure on the JS side.
///
/// # Examples
/// ```no_run
/// // In JavaScript (tx.config.js):
/// // import { tailwind_config } from "gnoweb-tokens-wasm";
/// // export default tailwind_config();
/// ```
#[wasm_bindgen]
pub fn tailwind_config(base_font_size: Option<f64>) -> Result<JsValue, JsValue> {
    let json = tailwind_config_json(base_font_size)?;
    js_sys::JSON::parse(&json)
}

/// Host-only helper that resolves, validates and renders the configuration.
///
/// # Examples
/// ```
/// let json = gnoweb_tokens_wasm::tailwind_config_json_internal(Some(10.0)).unwrap();
/// assert!(json.contains("\"md\": \"64rem\""));
/// assert!(gnoweb_tokens_wasm::tailwind_config_json_internal(Some(0.0)).is_err());
/// ```
pub fn tailwind_config_json_internal(base_font_size: Option<f64>) -> Result<String, TokenError> {
    let config = match base_font_size {
        Some(size) => ResolverConfig::new(size)?,
        None => ResolverConfig::default(),
    };
    let root = TokenResolver::new(&config).assemble_configuration();
    root.validate()?;
    root.to_json()
}

fn to_js_error(err: TokenError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
