use leptos::logging::warn;
use wasm_bindgen::JsValue;
use web_sys::UrlSearchParams;

const URL_PARAM: &str = "url";

/// The product URL shared via `?url=`, if any.
pub fn query_url() -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    let params = UrlSearchParams::new_with_str(&search).ok()?;
    params.get(URL_PARAM).filter(|url| !url.is_empty())
}

/// Sets `?url=` in place, keeping other parameters and without navigating.
pub fn set_query_url(url: &str) {
    let Some(window) = web_sys::window() else { return };
    let location = window.location();
    let (Ok(search), Ok(pathname)) = (location.search(), location.pathname()) else {
        return;
    };
    let Ok(params) = UrlSearchParams::new_with_str(&search) else { return };
    params.set(URL_PARAM, url);

    let next = format!("{}?{}", pathname, String::from(params.to_string()));
    let Ok(history) = window.history() else { return };
    if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(&next)) {
        warn!("Failed to update query string: {:?}", e);
    }
}

pub fn set_document_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}

pub fn open_in_new_tab(url: &str) {
    if url.is_empty() {
        return;
    }
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.open_with_url_and_target(url, "_blank") {
            warn!("Failed to open {}: {:?}", url, e);
        }
    }
}
