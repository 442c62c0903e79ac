use wasm_bindgen::prelude::*;

use crate::error::{ConfigError, LineError, SurfaceError};

pub mod logging;
pub mod shell;
mod webgl;

pub use shell::Chart;

/// Id of the element the shell mounts into.
pub const APP_ID: &str = "app";

impl From<SurfaceError> for JsValue {
    fn from(err: SurfaceError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

impl From<ConfigError> for JsValue {
    fn from(err: ConfigError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

impl From<LineError> for JsValue {
    fn from(err: LineError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let Some(container) = document.get_element_by_id(APP_ID) else {
        // Embedded use: the page drives `Chart` itself.
        return Ok(());
    };

    logging::init_logging(logging::LoggingConfig::from_attributes(|name| {
        container.get_attribute(name)
    })?);
    shell::mount(&document, &container)?;
    Ok(())
}
