//! Entry points called from the dashboard templates.

use std::cell::RefCell;
use std::error::Error as StdError;

use piplant_adapter_http_reqwest::ReqwestApiClient;
use piplant_app::services::chart_service::{ChartReport, ChartService};
use piplant_app::services::deletion_service::{DeleteResult, DeletionService};
use piplant_app::services::form_toggler::FormToggler;
use piplant_domain::form::FieldRules;
use piplant_domain::id::{DeviceId, ScheduleId, UserId};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

use crate::chart_js::ChartJsSurface;
use crate::config::DashboardConfig;
use crate::dialogs::BrowserDialogs;
use crate::dom::{DomFieldContainer, host_error};
use crate::navigation::BrowserNavigator;

thread_local! {
    static CONFIG: RefCell<DashboardConfig> = RefCell::new(DashboardConfig::default());
}

fn current_config() -> DashboardConfig {
    CONFIG.with(|cell| cell.borrow().clone())
}

/// A JS error carrying the whole source chain, e.g.
/// `missing element: element #additional-inputs not found`.
fn js_error(err: &(dyn StdError + 'static)) -> JsError {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    JsError::new(&message)
}

fn window() -> Result<Window, JsError> {
    web_sys::window().ok_or_else(|| JsError::new("no global window"))
}

fn document(window: &Window) -> Result<Document, JsError> {
    window
        .document()
        .ok_or_else(|| JsError::new("window has no document"))
}

fn api_client(window: &Window, config: &DashboardConfig) -> Result<ReqwestApiClient, JsError> {
    let origin = match &config.api.origin {
        Some(origin) => origin.clone(),
        None => window
            .location()
            .origin()
            .map_err(|err| js_error(&host_error(&err)))?,
    };
    let client = ReqwestApiClient::new(&origin).map_err(|err| js_error(&err))?;
    Ok(client.with_prefix(&config.api.prefix))
}

type BrowserDeletion = DeletionService<ReqwestApiClient, BrowserDialogs, BrowserNavigator>;

fn deletion_service() -> Result<BrowserDeletion, JsError> {
    let config = current_config();
    let window = window()?;
    let api = api_client(&window, &config)?;
    Ok(DeletionService::new(
        api,
        BrowserDialogs::new(window.clone()),
        BrowserNavigator::new(window),
    )
    .with_messages(config.delete_messages()))
}

/// Replace the dashboard configuration with the given TOML.
///
/// Sections left out keep their defaults.
#[wasm_bindgen]
pub fn configure(toml: &str) -> Result<(), JsError> {
    let config = DashboardConfig::load(Some(toml)).map_err(|err| js_error(&err))?;
    CONFIG.with(|cell| *cell.borrow_mut() = config);
    Ok(())
}

fn synchronize(selected: &str, rules: FieldRules) -> Result<(), JsError> {
    let config = current_config();
    let window = window()?;
    let toggler = FormToggler::new(DomFieldContainer::new(document(&window)?), rules)
        .with_container_id(config.elements.additional_inputs);
    toggler
        .synchronize_fields(selected)
        .map_err(|err| js_error(&err))?;
    Ok(())
}

/// `onchange` handler of the device type selector.
#[wasm_bindgen(js_name = updateForm)]
pub fn update_form(selected: &str) -> Result<(), JsError> {
    let rules = current_config()
        .field_rules()
        .map_err(|err| js_error(&err))?;
    synchronize(selected, rules)
}

/// Selector handler of the older form that only knows the smart plug.
#[wasm_bindgen(js_name = updateFormLegacy)]
pub fn update_form_legacy(selected: &str) -> Result<(), JsError> {
    synchronize(selected, FieldRules::legacy())
}

/// Templates pass ids as numbers or strings.
fn id_string(id: &JsValue) -> Result<String, JsError> {
    id.as_string()
        .or_else(|| id.as_f64().map(|n| n.to_string()))
        .ok_or_else(|| JsError::new("id must be a string or a number"))
}

fn result_name(result: &DeleteResult) -> &'static str {
    match result {
        DeleteResult::Cancelled => "cancelled",
        DeleteResult::Deleted => "deleted",
        DeleteResult::Redirected(_) => "redirected",
        DeleteResult::Reloaded => "reloaded",
        DeleteResult::Failed => "failed",
    }
}

/// Confirm and delete a device. Resolves to what happened next.
#[wasm_bindgen(js_name = deleteDevice)]
pub async fn delete_device(id: JsValue) -> Result<String, JsError> {
    let id = DeviceId::new(id_string(&id)?);
    let result = deletion_service()?
        .delete_device(&id)
        .await
        .map_err(|err| js_error(&err))?;
    Ok(result_name(&result).to_owned())
}

/// Confirm and delete a schedule, then reload the page.
#[wasm_bindgen(js_name = deleteSchedule)]
pub async fn delete_schedule(id: JsValue) -> Result<String, JsError> {
    let id = ScheduleId::new(id_string(&id)?);
    let result = deletion_service()?
        .delete_schedule(&id)
        .await
        .map_err(|err| js_error(&err))?;
    Ok(result_name(&result).to_owned())
}

/// Confirm and delete a user account.
#[wasm_bindgen(js_name = deleteUser)]
pub async fn delete_user(id: JsValue) -> Result<String, JsError> {
    let id = UserId::new(id_string(&id)?);
    let result = deletion_service()?
        .delete_user(&id)
        .await
        .map_err(|err| js_error(&err))?;
    Ok(result_name(&result).to_owned())
}

/// Fetch the chart series at `url` and draw one canvas per series.
///
/// Resolves to the number of charts drawn.
#[wasm_bindgen(js_name = fetchAndRenderCharts)]
pub async fn fetch_and_render_charts(url: String) -> Result<u32, JsError> {
    let config = current_config();
    let window = window()?;
    let service = ChartService::new(
        api_client(&window, &config)?,
        ChartJsSurface::new(document(&window)?),
        BrowserDialogs::new(window),
    )
    .with_settings(config.chart_settings());

    let report = service
        .fetch_and_render(&url)
        .await
        .map_err(|err| js_error(&err))?;
    Ok(match report {
        ChartReport::Rendered { rendered, .. } => u32::try_from(rendered).unwrap_or(u32::MAX),
        ChartReport::Failed => 0,
    })
}
