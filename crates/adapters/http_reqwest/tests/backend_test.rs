//! End-to-end tests against a stub piplant backend.
//!
//! Each test binds an axum router on `127.0.0.1:0` and drives the real
//! reqwest client through the application services. Dialogs, navigation and
//! charts use the in-memory fakes.

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get};
use piplant_adapter_http_reqwest::{ApiInfo, ReqwestApiClient};
use piplant_app::ports::ApiClient;
use piplant_app::services::chart_service::{ChartReport, ChartService};
use piplant_app::services::deletion_service::{DeleteResult, DeletionService};
use piplant_app::testing::{RecordingNavigator, RecordingSurface, ScriptedDialogs};
use piplant_domain::error::DashboardError;
use piplant_domain::id::{DeviceId, ScheduleId, UserId};
use piplant_domain::resource::ResourceKind;
use serde_json::json;

type Hits = Arc<Mutex<Vec<String>>>;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn record(hits: &Hits, line: String) {
    hits.lock().unwrap().push(line);
}

async fn delete_device(State(hits): State<Hits>, Path(id): Path<String>) -> Response {
    record(&hits, format!("DELETE devices/{id}"));
    match id.as_str() {
        "404" => StatusCode::NOT_FOUND.into_response(),
        "quiet" => StatusCode::OK.into_response(),
        "garbled" => "{redirect".into_response(),
        "numeric" => axum::Json(json!({"redirect": 1, "redirect_url": "/x"})).into_response(),
        _ => axum::Json(json!({"redirect": true, "redirect_url": "/devices"})).into_response(),
    }
}

async fn delete_schedule(State(hits): State<Hits>, Path(id): Path<String>) -> Response {
    record(&hits, format!("DELETE schedules/{id}"));
    if id == "500" {
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    } else {
        "deleted".into_response()
    }
}

async fn delete_user(State(hits): State<Hits>, Path(id): Path<String>) -> Response {
    record(&hits, format!("DELETE users/{id}"));
    axum::Json(json!({"redirect": false})).into_response()
}

async fn charts(State(hits): State<Hits>) -> Response {
    record(&hits, "GET charts".to_string());
    axum::Json(json!({
        "b": {"title": "T2", "type": "line", "data": {"labels": [], "datasets": []}},
        "a": {"title": "T1", "type": "bar", "data": {"labels": [], "datasets": []}},
    }))
    .into_response()
}

async fn broken_charts() -> Response {
    "<html>oops</html>".into_response()
}

async fn info() -> Response {
    axum::Json(json!({"version": "1"})).into_response()
}

/// Start the stub backend and return its origin and request log.
async fn backend() -> (String, Hits) {
    init_tracing();
    let hits: Hits = Arc::default();
    let app = Router::new()
        .route("/api/v1/", get(info))
        .route("/api/v1/devices/{id}", delete(delete_device))
        .route("/api/v1/schedules/{id}", delete(delete_schedule))
        .route("/api/v1/users/{id}", delete(delete_user))
        .route("/api/v1/charts", get(charts))
        .route("/api/v1/broken", get(broken_charts))
        .with_state(Arc::clone(&hits));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}"), hits)
}

struct Page {
    dialogs: Arc<ScriptedDialogs>,
    navigator: Arc<RecordingNavigator>,
}

impl Page {
    fn new(dialogs: ScriptedDialogs) -> Self {
        Self {
            dialogs: Arc::new(dialogs),
            navigator: Arc::new(RecordingNavigator::default()),
        }
    }

    fn deletion(
        &self,
        origin: &str,
    ) -> DeletionService<ReqwestApiClient, Arc<ScriptedDialogs>, Arc<RecordingNavigator>> {
        DeletionService::new(
            ReqwestApiClient::new(origin).unwrap(),
            Arc::clone(&self.dialogs),
            Arc::clone(&self.navigator),
        )
    }
}

// ---------------------------------------------------------------------------
// Deletion
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_not_call_backend_when_user_declines() {
    let (origin, hits) = backend().await;
    let page = Page::new(ScriptedDialogs::declining());

    let result = page
        .deletion(&origin)
        .delete_device(&DeviceId::from(7))
        .await
        .unwrap();

    assert_eq!(result, DeleteResult::Cancelled);
    assert!(hits.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_follow_redirect_after_device_delete() {
    let (origin, hits) = backend().await;
    let page = Page::new(ScriptedDialogs::accepting());

    let result = page
        .deletion(&origin)
        .delete_device(&DeviceId::from(7))
        .await
        .unwrap();

    assert_eq!(result, DeleteResult::Redirected("/devices".to_string()));
    assert_eq!(page.navigator.navigations(), vec!["/devices"]);
    assert_eq!(*hits.lock().unwrap(), vec!["DELETE devices/7"]);
}

#[tokio::test]
async fn should_stay_when_device_delete_returns_empty_body() {
    let (origin, _) = backend().await;
    let page = Page::new(ScriptedDialogs::accepting());

    let result = page
        .deletion(&origin)
        .delete_device(&DeviceId::new("quiet"))
        .await
        .unwrap();

    assert_eq!(result, DeleteResult::Deleted);
    assert!(page.navigator.navigations().is_empty());
    assert!(page.dialogs.alerts().is_empty());
}

#[tokio::test]
async fn should_alert_when_device_delete_returns_not_found() {
    let (origin, _) = backend().await;
    let page = Page::new(ScriptedDialogs::accepting());

    let result = page
        .deletion(&origin)
        .delete_device(&DeviceId::from(404))
        .await
        .unwrap();

    assert_eq!(result, DeleteResult::Failed);
    assert_eq!(page.dialogs.alerts(), vec!["Could not delete device"]);
    assert!(page.navigator.navigations().is_empty());
    assert_eq!(page.navigator.reloads(), 0);
}

#[tokio::test]
async fn should_stay_without_alert_when_device_delete_body_is_garbled() {
    let (origin, hits) = backend().await;
    let page = Page::new(ScriptedDialogs::accepting());

    let result = page
        .deletion(&origin)
        .delete_device(&DeviceId::new("garbled"))
        .await
        .unwrap();

    assert_eq!(result, DeleteResult::Deleted);
    assert!(page.dialogs.alerts().is_empty());
    assert!(page.navigator.navigations().is_empty());
    assert_eq!(*hits.lock().unwrap(), vec!["DELETE devices/garbled"]);
}

#[tokio::test]
async fn should_follow_truthy_numeric_redirect_flag() {
    let (origin, _) = backend().await;
    let page = Page::new(ScriptedDialogs::accepting());

    let result = page
        .deletion(&origin)
        .delete_device(&DeviceId::new("numeric"))
        .await
        .unwrap();

    assert_eq!(result, DeleteResult::Redirected("/x".to_string()));
    assert_eq!(page.navigator.navigations(), vec!["/x"]);
    assert!(page.dialogs.alerts().is_empty());
}

#[tokio::test]
async fn should_reload_once_after_schedule_delete() {
    let (origin, hits) = backend().await;
    let page = Page::new(ScriptedDialogs::accepting());

    let result = page
        .deletion(&origin)
        .delete_schedule(&ScheduleId::from(12))
        .await
        .unwrap();

    assert_eq!(result, DeleteResult::Reloaded);
    assert_eq!(page.navigator.reloads(), 1);
    assert_eq!(*hits.lock().unwrap(), vec!["DELETE schedules/12"]);
}

#[tokio::test]
async fn should_alert_and_not_reload_when_schedule_delete_fails() {
    let (origin, _) = backend().await;
    let page = Page::new(ScriptedDialogs::accepting());

    let result = page
        .deletion(&origin)
        .delete_schedule(&ScheduleId::from(500))
        .await
        .unwrap();

    assert_eq!(result, DeleteResult::Failed);
    assert_eq!(page.dialogs.alerts(), vec!["Could not delete schedule"]);
    assert_eq!(page.navigator.reloads(), 0);
}

#[tokio::test]
async fn should_stay_when_user_delete_declines_redirect() {
    let (origin, hits) = backend().await;
    let page = Page::new(ScriptedDialogs::accepting());

    let result = page
        .deletion(&origin)
        .delete_user(&UserId::from(3))
        .await
        .unwrap();

    assert_eq!(result, DeleteResult::Deleted);
    assert_eq!(*hits.lock().unwrap(), vec!["DELETE users/3"]);
}

#[tokio::test]
async fn should_alert_when_backend_is_unreachable() {
    let page = Page::new(ScriptedDialogs::accepting());

    let result = page
        .deletion("http://127.0.0.1:9")
        .delete_user(&UserId::from(3))
        .await
        .unwrap();

    assert_eq!(result, DeleteResult::Failed);
    assert_eq!(page.dialogs.alerts(), vec!["Could not delete user"]);
}

#[tokio::test]
async fn should_send_encoded_id_as_single_segment() {
    let (origin, hits) = backend().await;
    let client = ReqwestApiClient::new(&origin).unwrap();

    client.delete(ResourceKind::Device, "a/b").await.unwrap();

    assert_eq!(*hits.lock().unwrap(), vec!["DELETE devices/a/b"]);
}

// ---------------------------------------------------------------------------
// Charts
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_render_charts_in_response_order() {
    let (origin, hits) = backend().await;
    let surface = Arc::new(RecordingSurface::default());
    let dialogs = Arc::new(ScriptedDialogs::accepting());
    let service = ChartService::new(
        ReqwestApiClient::new(&origin).unwrap(),
        Arc::clone(&surface),
        Arc::clone(&dialogs),
    );

    let report = service.fetch_and_render("/api/v1/charts").await.unwrap();

    assert_eq!(
        report,
        ChartReport::Rendered {
            rendered: 2,
            skipped: 0,
            failed: 0
        }
    );
    let ids: Vec<String> = surface.rendered().into_iter().map(|c| c.canvas.id).collect();
    assert_eq!(ids, vec!["T2", "T1"]);
    assert_eq!(surface.rendered()[0].canvas.width, 1000);
    assert_eq!(surface.rendered()[0].canvas.height, 600);
    assert_eq!(*hits.lock().unwrap(), vec!["GET charts"]);
}

#[tokio::test]
async fn should_alert_when_chart_endpoint_returns_html() {
    let (origin, _) = backend().await;
    let surface = Arc::new(RecordingSurface::default());
    let dialogs = Arc::new(ScriptedDialogs::accepting());
    let service = ChartService::new(
        ReqwestApiClient::new(&origin).unwrap(),
        Arc::clone(&surface),
        Arc::clone(&dialogs),
    );

    let report = service.fetch_and_render("/api/v1/broken").await.unwrap();

    assert_eq!(report, ChartReport::Failed);
    assert_eq!(dialogs.alerts(), vec!["Could not load charts"]);
    assert!(surface.rendered().is_empty());
}

#[tokio::test]
async fn should_alert_when_chart_endpoint_is_missing() {
    let (origin, _) = backend().await;
    let surface = Arc::new(RecordingSurface::default());
    let dialogs = Arc::new(ScriptedDialogs::accepting());
    let service = ChartService::new(
        ReqwestApiClient::new(&origin).unwrap(),
        Arc::clone(&surface),
        Arc::clone(&dialogs),
    );

    let report = service.fetch_and_render("/api/v1/nothing").await.unwrap();

    assert_eq!(report, ChartReport::Failed);
    assert_eq!(dialogs.alerts(), vec!["Could not load charts"]);
}

// ---------------------------------------------------------------------------
// API info
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_read_api_version() {
    let (origin, _) = backend().await;
    let client = ReqwestApiClient::new(&origin)
        .unwrap()
        .with_client(reqwest::Client::new());
    assert_eq!(client.origin().as_str(), format!("{origin}/"));

    let info = client.api_info().await.unwrap();

    assert_eq!(
        info,
        ApiInfo {
            version: "1".to_string()
        }
    );
}

#[tokio::test]
async fn should_report_request_error_for_unknown_prefix() {
    let (origin, _) = backend().await;
    let client = ReqwestApiClient::new(&origin).unwrap().with_prefix("/api/v9");

    let err = client.api_info().await.unwrap_err();

    assert!(matches!(err, DashboardError::Request(_)));
}
