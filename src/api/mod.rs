//! Recipe API Client
//!
//! Thin wrappers over the browser Fetch API, organized by domain.

mod recipes;

pub use recipes::*;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// Base URL of the recipe server.
pub const API_URL: &str = "http://127.0.0.1:8000";

/// Build the URL for the recipe collection, or for one recipe when `id` is given.
fn endpoint(base: &str, id: Option<u32>) -> String {
    match id {
        Some(id) => format!("{}/recipes/{}", base, id),
        None => format!("{}/recipes", base),
    }
}

fn recipes_url(id: Option<u32>) -> String {
    endpoint(API_URL, id)
}

/// Issue a request and JSON-decode the response body.
///
/// A transport failure and a non-success status both collapse into `Err`
/// with a printable message; the caller decides what to do with it.
async fn fetch_json(method: &str, url: &str, body: Option<String>) -> Result<JsValue, String> {
    let init = RequestInit::new();
    init.set_method(method);
    init.set_mode(RequestMode::Cors);
    let has_body = body.is_some();
    if let Some(body) = body {
        init.set_body(&JsValue::from_str(&body));
    }

    let request = Request::new_with_str_and_init(url, &init)
        .map_err(|e| format!("invalid request: {:?}", e))?;
    if has_body {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(|e| format!("invalid header: {:?}", e))?;
    }

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("network error: {:?}", e))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| "fetch did not return a Response".to_string())?;

    if !response.ok() {
        return Err(format!("server returned status {}", response.status()));
    }

    let body = response.json().map_err(|e| format!("{:?}", e))?;
    JsFuture::from(body)
        .await
        .map_err(|e| format!("invalid JSON body: {:?}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_endpoint_has_no_id_segment() {
        assert_eq!(
            endpoint("http://127.0.0.1:8000", None),
            "http://127.0.0.1:8000/recipes"
        );
    }

    #[test]
    fn test_item_endpoint_appends_id() {
        assert_eq!(
            endpoint("http://127.0.0.1:8000", Some(42)),
            "http://127.0.0.1:8000/recipes/42"
        );
    }
}
