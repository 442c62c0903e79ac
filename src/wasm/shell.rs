//! DOM shell: the canvas, the action buttons and the JS-facing chart handle.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlCanvasElement, WebGl2RenderingContext as GL};

use crate::config::{MountConfig, SurfaceConfig};
use crate::error::SurfaceError;
use crate::line::{random_line, Line};
use crate::surface::SurfaceController;
use crate::wasm::logging::{init_logging, LoggingConfig};

pub const CANVAS_ID: &str = "glCanvas";
pub const CANVAS_WIDTH: u32 = 1366;
pub const CANVAS_HEIGHT: u32 = 768;

fn js_random() -> f64 {
    js_sys::Math::random()
}

/// A time-series chart bound to one canvas.
#[wasm_bindgen]
pub struct Chart {
    surface: SurfaceController<GL>,
}

#[wasm_bindgen]
impl Chart {
    /// Builds a chart configured from the canvas' `data-*` attributes.
    ///
    /// Installs the console logger first when the page has not done so.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Chart, JsValue> {
        let attr = |name: &str| canvas.get_attribute(name);
        init_logging(LoggingConfig::from_attributes(attr)?);
        let config = SurfaceConfig::from_attributes(attr)?;
        Ok(Chart::with_config(canvas, config)?)
    }

    #[wasm_bindgen(js_name = addRandomLine)]
    pub fn add_random_line(&mut self) {
        self.surface.add_line(random_line(&mut js_random));
    }

    /// Adds a line from an RGBA color and flat `[x0, y0, x1, y1, ...]` points.
    #[wasm_bindgen(js_name = addLine)]
    pub fn add_line(&mut self, color: Vec<f32>, points: Vec<f32>) -> Result<(), JsValue> {
        let color: [f32; 4] = color
            .as_slice()
            .try_into()
            .map_err(|_| JsValue::from_str("color must have exactly 4 channels"))?;
        self.surface.add_line(Line::new(color, points)?);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.surface.clear();
    }

    pub fn draw(&mut self) {
        self.surface.draw();
    }

    #[wasm_bindgen(getter, js_name = lineCount)]
    pub fn line_count(&self) -> usize {
        self.surface.lines().len()
    }

    /// Releases the program and buffers. The handle is unusable afterwards.
    pub fn dispose(self) {
        self.surface.dispose();
    }
}

impl Chart {
    pub fn with_config(
        canvas: &HtmlCanvasElement,
        config: SurfaceConfig,
    ) -> Result<Chart, SurfaceError> {
        let surface = SurfaceController::new(canvas, config, &mut js_random)?;
        Ok(Chart { surface })
    }

    pub fn surface(&self) -> &SurfaceController<GL> {
        &self.surface
    }
}

/// Mounts the canvas and the "Add Line", "Clear" and "Draw" buttons into
/// `container`, configured from the container's `data-*` attributes.
///
/// Unless `data-add-on-mount="false"`, one random line is appended after the
/// surface is built. It shows up on the next draw.
pub fn mount(document: &Document, container: &Element) -> Result<Rc<RefCell<Chart>>, JsValue> {
    let config = MountConfig::from_attributes(|name| container.get_attribute(name))?;

    let canvas_box = document.create_element("div")?;
    canvas_box.set_class_name("glCanvasContainer");
    let canvas = document
        .create_element("canvas")?
        .dyn_into::<HtmlCanvasElement>()?;
    canvas.set_id(CANVAS_ID);
    canvas.set_width(CANVAS_WIDTH);
    canvas.set_height(CANVAS_HEIGHT);
    canvas_box.append_child(&canvas)?;
    container.append_child(&canvas_box)?;

    let mut chart = Chart::with_config(&canvas, config.surface)?;
    if config.add_line_on_mount {
        chart.add_random_line();
    }
    let chart = Rc::new(RefCell::new(chart));

    let actions = document.create_element("div")?;
    actions.set_class_name("actions");
    add_button(document, &actions, "Add Line", {
        let chart = chart.clone();
        move || chart.borrow_mut().add_random_line()
    })?;
    add_button(document, &actions, "Clear", {
        let chart = chart.clone();
        move || chart.borrow_mut().clear()
    })?;
    add_button(document, &actions, "Draw", {
        let chart = chart.clone();
        move || chart.borrow_mut().draw()
    })?;
    container.append_child(&actions)?;

    log::info!("chart mounted on #{CANVAS_ID}");
    Ok(chart)
}

fn add_button(
    document: &Document,
    parent: &Element,
    label: &str,
    mut on_click: impl FnMut() + 'static,
) -> Result<(), JsValue> {
    let button = document.create_element("button")?;
    button.set_text_content(Some(label));
    let closure = Closure::wrap(Box::new(move || on_click()) as Box<dyn FnMut()>);
    button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    // The page owns the buttons for its whole lifetime.
    closure.forget();
    parent.append_child(&button)?;
    Ok(())
}
