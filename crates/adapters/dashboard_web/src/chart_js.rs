//! Chart.js rendering. The page must load Chart.js so that `Chart` is a
//! global constructor.

use piplant_app::ports::ChartSurface;
use piplant_domain::chart::CanvasSpec;
use piplant_domain::error::{DashboardError, HostError};
use serde_json::Value;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlCanvasElement};

use crate::dom::{host_error, require_element};

#[wasm_bindgen]
extern "C" {
    type Chart;

    #[wasm_bindgen(constructor, catch)]
    fn new(canvas: &HtmlCanvasElement, config: &JsValue) -> Result<Chart, JsValue>;
}

/// [`ChartSurface`] that appends canvases to the DOM and hands them to
/// Chart.js.
pub struct ChartJsSurface {
    document: Document,
}

impl ChartJsSurface {
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn create_canvas(&self, spec: &CanvasSpec) -> Result<HtmlCanvasElement, JsValue> {
        let canvas: HtmlCanvasElement = self.document.create_element("canvas")?.dyn_into()?;
        canvas.set_id(&spec.id);
        canvas.set_width(spec.width);
        canvas.set_height(spec.height);
        Ok(canvas)
    }
}

impl ChartSurface for ChartJsSurface {
    fn render(
        &self,
        container_id: &str,
        canvas: &CanvasSpec,
        config: &Value,
    ) -> Result<(), DashboardError> {
        let container = require_element(&self.document, container_id)?;
        let element = self.create_canvas(canvas).map_err(|err| host_error(&err))?;
        container
            .append_child(&element)
            .map_err(|err| host_error(&err))?;

        // Chart.js wants a plain JS object; a JSON round trip keeps key order.
        let json = serde_json::to_string(config)
            .map_err(|err| HostError::new(format!("cannot encode chart config: {err}")))?;
        let config = js_sys::JSON::parse(&json).map_err(|err| host_error(&err))?;
        Chart::new(&element, &config).map_err(|err| host_error(&err))?;
        Ok(())
    }
}
