//! Form container backed by the live DOM.

use piplant_app::ports::FieldContainer;
use piplant_domain::error::{DashboardError, HostError, MissingElementError};
use piplant_domain::form::FieldSpec;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlInputElement};

/// Flatten a thrown JS value into a [`HostError`].
pub(crate) fn host_error(value: &JsValue) -> HostError {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|err| String::from(err.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{value:?}"));
    HostError::new(message)
}

/// Look up `id`, failing with [`MissingElementError`] when absent.
pub(crate) fn require_element(document: &Document, id: &str) -> Result<Element, DashboardError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| MissingElementError::new(id).into())
}

/// The descendant of `container` whose id is `id`. Elements with the same id
/// elsewhere in the document are not considered.
fn find_inside(container: &Element, id: &str) -> Option<Element> {
    let descendants = container.get_elements_by_tag_name("*");
    (0..descendants.length())
        .filter_map(|index| descendants.item(index))
        .find(|el| el.id() == id)
}

/// [`FieldContainer`] over `document`.
pub struct DomFieldContainer {
    document: Document,
}

impl DomFieldContainer {
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn create_input(&self, field: &FieldSpec) -> Result<HtmlInputElement, JsValue> {
        let input: HtmlInputElement = self.document.create_element("input")?.dyn_into()?;
        input.set_type(&field.input_type);
        input.set_id(&field.id);
        input.set_name(&field.name);
        input.set_placeholder(&field.placeholder);
        input.set_class_name(&field.class);
        input.set_required(field.required);
        Ok(input)
    }
}

impl FieldContainer for DomFieldContainer {
    fn present_ids(
        &self,
        container_id: &str,
        candidates: &[&str],
    ) -> Result<Vec<String>, DashboardError> {
        let container = require_element(&self.document, container_id)?;
        Ok(candidates
            .iter()
            .filter(|id| find_inside(&container, id).is_some())
            .map(|id| (*id).to_owned())
            .collect())
    }

    fn append_field(&self, container_id: &str, field: &FieldSpec) -> Result<(), DashboardError> {
        let container = require_element(&self.document, container_id)?;
        let input = self.create_input(field).map_err(|err| host_error(&err))?;
        container
            .append_child(&input)
            .map_err(|err| host_error(&err))?;
        Ok(())
    }

    fn remove_field(&self, container_id: &str, field_id: &str) -> Result<(), DashboardError> {
        let container = require_element(&self.document, container_id)?;
        if let Some(el) = find_inside(&container, field_id) {
            el.remove();
        }
        Ok(())
    }
}
