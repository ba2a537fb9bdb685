//! In-memory port implementations for tests.
//!
//! Every fake records what it was asked to do behind a `Mutex`, so a test can
//! hand an `Arc` of it to a service and inspect it afterwards.

use std::collections::VecDeque;
use std::sync::Mutex;

use piplant_domain::chart::CanvasSpec;
use piplant_domain::error::{DashboardError, HostError, MissingElementError};
use piplant_domain::form::FieldSpec;
use piplant_domain::resource::ResourceKind;
use serde_json::Value;

use crate::ports::{ApiClient, ChartSurface, Dialogs, FieldContainer, Navigator};

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// A single form container holding the inputs appended to it.
pub struct InMemoryContainer {
    id: String,
    exists: bool,
    fields: Mutex<Vec<FieldSpec>>,
    outside: Vec<FieldSpec>,
}

impl InMemoryContainer {
    /// An existing, empty container with the given element id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            exists: true,
            fields: Mutex::new(Vec::new()),
            outside: Vec::new(),
        }
    }

    /// A page where the container element is missing.
    #[must_use]
    pub fn missing(id: impl Into<String>) -> Self {
        Self {
            exists: false,
            ..Self::new(id)
        }
    }

    /// Pre-populate with inputs, as if a previous selection added them.
    #[must_use]
    pub fn with_fields(self, fields: Vec<FieldSpec>) -> Self {
        *lock(&self.fields) = fields;
        self
    }

    /// Inputs elsewhere on the page, outside the container. They may share
    /// ids with managed fields and must never be touched.
    #[must_use]
    pub fn with_outside_fields(mut self, fields: Vec<FieldSpec>) -> Self {
        self.outside = fields;
        self
    }

    #[must_use]
    pub fn outside_ids(&self) -> Vec<String> {
        self.outside.iter().map(|f| f.id.clone()).collect()
    }

    /// Ids of the inputs currently in the container, in DOM order.
    #[must_use]
    pub fn field_ids(&self) -> Vec<String> {
        lock(&self.fields).iter().map(|f| f.id.clone()).collect()
    }

    /// Snapshot of the inputs currently in the container.
    #[must_use]
    pub fn fields(&self) -> Vec<FieldSpec> {
        lock(&self.fields).clone()
    }

    fn check(&self, container_id: &str) -> Result<(), DashboardError> {
        if self.exists && container_id == self.id {
            Ok(())
        } else {
            Err(MissingElementError::new(container_id).into())
        }
    }
}

impl FieldContainer for InMemoryContainer {
    fn present_ids(
        &self,
        container_id: &str,
        candidates: &[&str],
    ) -> Result<Vec<String>, DashboardError> {
        self.check(container_id)?;
        Ok(lock(&self.fields)
            .iter()
            .filter(|f| candidates.contains(&f.id.as_str()))
            .map(|f| f.id.clone())
            .collect())
    }

    fn append_field(&self, container_id: &str, field: &FieldSpec) -> Result<(), DashboardError> {
        self.check(container_id)?;
        lock(&self.fields).push(field.clone());
        Ok(())
    }

    fn remove_field(&self, container_id: &str, field_id: &str) -> Result<(), DashboardError> {
        self.check(container_id)?;
        lock(&self.fields).retain(|f| f.id != field_id);
        Ok(())
    }
}

/// Dialogs that answer every confirmation the same way and record prompts.
pub struct ScriptedDialogs {
    answer: bool,
    confirms: Mutex<Vec<String>>,
    alerts: Mutex<Vec<String>>,
}

impl ScriptedDialogs {
    /// The user clicks "OK" on every confirmation.
    #[must_use]
    pub fn accepting() -> Self {
        Self::answering(true)
    }

    /// The user clicks "Cancel" on every confirmation.
    #[must_use]
    pub fn declining() -> Self {
        Self::answering(false)
    }

    fn answering(answer: bool) -> Self {
        Self {
            answer,
            confirms: Mutex::new(Vec::new()),
            alerts: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn confirms(&self) -> Vec<String> {
        lock(&self.confirms).clone()
    }

    #[must_use]
    pub fn alerts(&self) -> Vec<String> {
        lock(&self.alerts).clone()
    }
}

impl Dialogs for ScriptedDialogs {
    async fn confirm(&self, message: &str) -> Result<bool, DashboardError> {
        lock(&self.confirms).push(message.to_owned());
        Ok(self.answer)
    }

    async fn alert(&self, message: &str) -> Result<(), DashboardError> {
        lock(&self.alerts).push(message.to_owned());
        Ok(())
    }
}

/// Navigator that records every navigation and reload.
#[derive(Default)]
pub struct RecordingNavigator {
    navigations: Mutex<Vec<String>>,
    reloads: Mutex<usize>,
}

impl RecordingNavigator {
    #[must_use]
    pub fn navigations(&self) -> Vec<String> {
        lock(&self.navigations).clone()
    }

    #[must_use]
    pub fn reloads(&self) -> usize {
        *lock(&self.reloads)
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, url: &str) -> Result<(), DashboardError> {
        lock(&self.navigations).push(url.to_owned());
        Ok(())
    }

    fn reload(&self) -> Result<(), DashboardError> {
        *lock(&self.reloads) += 1;
        Ok(())
    }
}

/// A canned backend reply: a body, or a failed request.
#[derive(Debug, Clone)]
pub enum Reply<T> {
    Ok(T),
    Fail(String),
}

impl<T> Reply<T> {
    fn into_result(self) -> Result<T, DashboardError> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Fail(reason) => Err(DashboardError::Request(Box::new(HostError::new(reason)))),
        }
    }
}

/// API client answering from queues of canned replies.
///
/// An exhausted queue answers with a failure.
#[derive(Default)]
pub struct CannedApiClient {
    deletes: Mutex<VecDeque<Reply<String>>>,
    gets: Mutex<VecDeque<Reply<Value>>>,
    delete_calls: Mutex<Vec<(ResourceKind, String)>>,
    get_calls: Mutex<Vec<String>>,
}

impl CannedApiClient {
    #[must_use]
    pub fn with_delete_reply(self, reply: Reply<String>) -> Self {
        lock(&self.deletes).push_back(reply);
        self
    }

    #[must_use]
    pub fn with_get_reply(self, reply: Reply<Value>) -> Self {
        lock(&self.gets).push_back(reply);
        self
    }

    /// Every delete request sent, as `(kind, id)`.
    #[must_use]
    pub fn delete_calls(&self) -> Vec<(ResourceKind, String)> {
        lock(&self.delete_calls).clone()
    }

    /// Every URL fetched.
    #[must_use]
    pub fn get_calls(&self) -> Vec<String> {
        lock(&self.get_calls).clone()
    }
}

impl ApiClient for CannedApiClient {
    async fn delete(&self, kind: ResourceKind, id: &str) -> Result<String, DashboardError> {
        lock(&self.delete_calls).push((kind, id.to_owned()));
        let reply = lock(&self.deletes).pop_front();
        reply
            .unwrap_or_else(|| Reply::Fail("no canned delete reply".to_owned()))
            .into_result()
    }

    async fn get_json(&self, url: &str) -> Result<Value, DashboardError> {
        lock(&self.get_calls).push(url.to_owned());
        let reply = lock(&self.gets).pop_front();
        reply
            .unwrap_or_else(|| Reply::Fail("no canned get reply".to_owned()))
            .into_result()
    }
}

/// A canvas created on the [`RecordingSurface`], with its chart config.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedChart {
    pub container_id: String,
    pub canvas: CanvasSpec,
    pub config: Value,
}

/// Chart surface that records every canvas instead of drawing it.
#[derive(Default)]
pub struct RecordingSurface {
    rendered: Mutex<Vec<RenderedChart>>,
    fail_titles: Vec<String>,
}

impl RecordingSurface {
    /// Make the charting library throw for canvases with this id.
    #[must_use]
    pub fn failing_on(mut self, title: impl Into<String>) -> Self {
        self.fail_titles.push(title.into());
        self
    }

    #[must_use]
    pub fn rendered(&self) -> Vec<RenderedChart> {
        lock(&self.rendered).clone()
    }
}

impl ChartSurface for RecordingSurface {
    fn render(
        &self,
        container_id: &str,
        canvas: &CanvasSpec,
        config: &Value,
    ) -> Result<(), DashboardError> {
        if self.fail_titles.contains(&canvas.id) {
            return Err(HostError::new(format!("cannot draw {}", canvas.id)).into());
        }
        lock(&self.rendered).push(RenderedChart {
            container_id: container_id.to_owned(),
            canvas: canvas.clone(),
            config: config.clone(),
        });
        Ok(())
    }
}
