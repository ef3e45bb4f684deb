use thiserror::Error;

#[derive(Error, Debug)]
pub enum NavError {
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),
    #[error("No window available")]
    MissingWindow,
    #[error("No document available")]
    MissingDocument,
    #[error("JavaScript error: {0}")]
    Js(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for NavError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        NavError::Js(format!("{:?}", value))
    }
}
