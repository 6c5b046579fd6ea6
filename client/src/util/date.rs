//! Locale-formatted current date for the header slot.

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

#[cfg(feature = "csr")]
const FALLBACK_LOCALE: &str = "en-US";

/// Today's date formatted with the browser's preferred locale.
///
/// Returns an empty string outside a browser.
pub fn today_label() -> String {
    #[cfg(feature = "csr")]
    {
        let locale = web_sys::window()
            .and_then(|w| w.navigator().language())
            .unwrap_or_else(|| FALLBACK_LOCALE.to_owned());
        let today = js_sys::Date::new_0();
        String::from(today.to_locale_date_string(&locale, &wasm_bindgen::JsValue::UNDEFINED))
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}
