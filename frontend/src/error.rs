#[derive(thiserror::Error, Debug)]
pub enum FrontendError {
    #[error("Table #{id} not found")]
    TableNotFound { id: String },

    #[error(transparent)]
    Theme(#[from] ThemeError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Scheme(#[from] SchemeParseError),
}

pub type FrontendResult<T> = Result<T, FrontendError>;

impl FrontendError {
    pub fn message(&self) -> String {
        match self.source() {
            Some(source) => format!("{}: {}", self, source),
            None => self.to_string(),
        }
    }
}

impl From<FrontendError> for JsValue {
    fn from(error: FrontendError) -> Self {
        let message = error.message();
        console::error!(message.clone());
        js_sys::Error::new(&message).into()
    }
}

use gloo_console as console;
use std::error::Error;
use ui_core::{ConfigError, SchemeParseError, ThemeError};
use wasm_bindgen::JsValue;
