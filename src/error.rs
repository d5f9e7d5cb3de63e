use thiserror::Error;
use wasm_bindgen::JsValue;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

#[derive(Debug, Error, PartialEq)]
pub enum UiError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("element not found: {0}")]
    MissingElement(String),
    #[error("storage unavailable")]
    StorageUnavailable,
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for UiError {
    fn from(value: JsValue) -> Self {
        UiError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub fn window() -> Result<Window, UiError> {
    web_sys::window().ok_or(UiError::NoWindow)
}

pub fn document() -> Result<Document, UiError> {
    window()?.document().ok_or(UiError::NoDocument)
}

pub fn html_element_by_id(id: &str) -> Result<HtmlElement, UiError> {
    document()?
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| UiError::MissingElement(id.to_string()))
}

pub fn body() -> Result<HtmlElement, UiError> {
    document()?
        .body()
        .ok_or_else(|| UiError::MissingElement("body".to_string()))
}
