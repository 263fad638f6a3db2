//! Payform WASM
//!
//! WebAssembly bindings for the payment form.
//! Mounts the form into `#app` on load and re-validates it on every input
//! event; the formatting and validation functions are also exported to
//! JavaScript.

use payform_core as core;
use serde::Serialize;
use wasm_bindgen::prelude::*;

pub mod dom;
pub mod log;
pub mod mount;

pub use dom::FormElements;
pub use mount::{container_copy, mount, mount_into, FormController};

/// Set panic hook for better error messages in the browser, then mount the
/// form if the page has an app container
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    mount::mount_if_present(core::APP_CONTAINER_ID)
}

/// Mount the form into the element with the given id (default `app`),
/// using the copy embedded in the container if there is one
///
/// # Example (JavaScript)
/// ```javascript
/// mountPaymentForm('checkout');
/// ```
#[wasm_bindgen(js_name = mountPaymentForm)]
pub fn mount_payment_form(container_id: Option<String>) -> Result<(), JsValue> {
    let id = container_id.unwrap_or_else(|| core::APP_CONTAINER_ID.to_string());
    mount::mount_by_id(&id).map(|_| ())
}

#[wasm_bindgen(js_name = formatCardNumber)]
pub fn format_card_number_js(raw: &str) -> String {
    core::format_card_number(raw)
}

#[wasm_bindgen(js_name = formatExpiryDate)]
pub fn format_expiry_date_js(raw: &str) -> String {
    core::format_expiry_date(raw)
}

/// Quick email validation
#[wasm_bindgen(js_name = isValidEmail)]
pub fn is_valid_email_js(email: &str) -> bool {
    core::is_valid_email(email)
}

/// Validate a whole snapshot
///
/// # Returns
/// `{ valid, errors }` where `errors` has one key per field id, holding the
/// message or an empty string
///
/// # Example (JavaScript)
/// ```javascript
/// const { valid, errors } = validateSnapshot({
///     cardNumber: '4111 1111 1111 1111',
///     expiryDate: '12/99',
///     cvc: '123',
///     email: 'user@example.com',
/// });
/// ```
#[wasm_bindgen(js_name = validateSnapshot)]
pub fn validate_snapshot(snapshot: JsValue) -> Result<JsValue, JsValue> {
    let snapshot: core::Snapshot = serde_wasm_bindgen::from_value(snapshot)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse snapshot: {}", e)))?;

    let result = core::validate(&snapshot);
    Ok(result.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?)
}
