//! Config store operations for the WASM API
//!
//! Parsing for display, plus the four HTTP calls. The HTTP functions return
//! promises resolving to the response body text.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{js_error, serialize};
use crate::transport::{self, ConfigClient};
use crate::{wasm_error, wasm_log};

/// Parse a config for display: `{ id, name, formatted }`
#[wasm_bindgen(js_name = parseConfig)]
pub fn parse_config(data: &str) -> Result<JsValue, JsValue> {
    let config = transport::parse_config(data).map_err(|e| js_error("parseConfig", e))?;
    serialize(&config, "parseConfig")
}

/// Parse a list of configs for display
#[wasm_bindgen(js_name = parseConfigList)]
pub fn parse_config_list(data: &str) -> Result<JsValue, JsValue> {
    let configs = transport::parse_config_list(data).map_err(|e| js_error("parseConfigList", e))?;
    wasm_log!("parseConfigList: {} configs", configs.len());
    serialize(&configs, "parseConfigList")
}

#[wasm_bindgen(js_name = fetchConfig)]
pub async fn fetch_config(uri: String) -> Result<String, JsValue> {
    let response = ConfigClient::new()
        .fetch_config(&uri)
        .await
        .map_err(|e| js_error("fetchConfig", e))?;
    body_text(response, "fetchConfig").await
}

#[wasm_bindgen(js_name = createConfig)]
pub async fn create_config(uri: String, body: String) -> Result<String, JsValue> {
    let response = ConfigClient::new()
        .create_config(&uri, body)
        .await
        .map_err(|e| js_error("createConfig", e))?;
    body_text(response, "createConfig").await
}

#[wasm_bindgen(js_name = replaceConfig)]
pub async fn replace_config(uri: String, body: String) -> Result<String, JsValue> {
    let response = ConfigClient::new()
        .replace_config(&uri, body)
        .await
        .map_err(|e| js_error("replaceConfig", e))?;
    body_text(response, "replaceConfig").await
}

#[wasm_bindgen(js_name = deleteConfig)]
pub async fn delete_config(uri: String) -> Result<String, JsValue> {
    let response = ConfigClient::new()
        .delete_config(&uri)
        .await
        .map_err(|e| js_error("deleteConfig", e))?;
    body_text(response, "deleteConfig").await
}

async fn body_text(response: reqwest::Response, context: &str) -> Result<String, JsValue> {
    let status = response.status();
    if !status.is_success() {
        wasm_error!("{}: server responded {}", context, status);
    }
    response.text().await.map_err(|e| js_error(context, e))
}
