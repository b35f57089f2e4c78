//! Host page access: application base URL, feature identity, navigation.
//!
//! The annotation view is mounted into a server-rendered host page that
//! exposes its context through hidden form fields: `#home_url` carries the
//! application base URL and `#feature_id` the numeric id of the displayed
//! feature. Both are read fresh on every call instead of being cached so a
//! page that rewrites them stays authoritative.
//!
//! TRADE-OFFS
//! ==========
//! DOM reads are browser-only behavior; non-browser builds fall back to a
//! root-relative base and no feature so tests stay deterministic.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

/// Application base URL with a guaranteed trailing slash.
///
/// Prefers the `#home_url` hidden field, then the window origin.
#[must_use]
pub fn base_url() -> String {
    #[cfg(feature = "csr")]
    {
        if let Some(value) = input_value("home_url") {
            return ensure_trailing_slash(&value);
        }
        let origin = web_sys::window().and_then(|w| w.location().origin().ok());
        match origin {
            Some(origin) => ensure_trailing_slash(&origin),
            None => "/".to_owned(),
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        "/".to_owned()
    }
}

/// Feature id published by the host page, if present and valid.
#[must_use]
pub fn hidden_feature_id() -> Option<i64> {
    #[cfg(feature = "csr")]
    {
        input_value("feature_id").as_deref().and_then(parse_feature_id)
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Navigate the browser to `url`. No-op outside the browser.
pub fn navigate(url: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(url);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = url;
    }
}

/// Parse a feature id from a raw field value. Feature ids are positive.
#[must_use]
pub fn parse_feature_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|id| *id > 0)
}

fn ensure_trailing_slash(base: &str) -> String {
    if base.is_empty() {
        return "/".to_owned();
    }
    if base.ends_with('/') {
        base.to_owned()
    } else {
        format!("{base}/")
    }
}

/// Value of a hidden `<input>` by element id, trimmed, if non-empty.
#[cfg(feature = "csr")]
fn input_value(id: &str) -> Option<String> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()?.document()?;
    let input = document.get_element_by_id(id)?.dyn_into::<web_sys::HtmlInputElement>().ok()?;
    let value = input.value().trim().to_owned();
    if value.is_empty() { None } else { Some(value) }
}
