//! Dashboard configuration: TOML with a default for every field.
//!
//! The defaults live in `dashboard.toml`, embedded at build time. A page can
//! hand its own TOML to `configure()`; sections it leaves out keep their
//! defaults.

use piplant_app::services::chart_service::ChartSettings;
use piplant_app::services::deletion_service::{DeleteMessages, DeletePrompts};
use piplant_domain::chart::CanvasSize;
use piplant_domain::error::DashboardError;
use piplant_domain::form::{FieldRule, FieldRules};
use serde::Deserialize;

/// The configuration shipped with the crate.
pub const DEFAULT_CONFIG: &str = include_str!("../dashboard.toml");

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub api: ApiConfig,
    pub elements: ElementsConfig,
    pub charts: CanvasSize,
    pub form: FormConfig,
    pub messages: MessagesConfig,
}

/// Where the REST API lives.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Backend origin. The page origin when unset.
    pub origin: Option<String>,
    /// Path prefix of the versioned API.
    pub prefix: String,
}

/// Ids of the page elements the dashboard writes into.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ElementsConfig {
    pub additional_inputs: String,
    pub charts: String,
}

/// Which device types get an extra input on the "add device" form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Use the older rule set without the temperature probe.
    pub legacy: bool,
    /// Explicit rules. Takes precedence over `legacy` when set.
    pub rules: Option<Vec<FieldRule>>,
}

/// Dialog and alert texts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MessagesConfig {
    pub confirm_delete_device: String,
    pub delete_device_failed: String,
    pub confirm_delete_schedule: String,
    pub delete_schedule_failed: String,
    pub confirm_delete_user: String,
    pub delete_user_failed: String,
    pub charts_failed: String,
}

impl DashboardConfig {
    /// Parse `source`, or the embedded defaults when `None`, and validate.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed TOML and
    /// [`ConfigError::Validation`] when a value is unusable.
    pub fn load(source: Option<&str>) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source.unwrap_or(DEFAULT_CONFIG))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.api.prefix.starts_with('/') {
            return Err(ConfigError::Validation(format!(
                "api prefix {:?} must start with '/'",
                self.api.prefix
            )));
        }
        for (name, id) in [
            ("additional_inputs", &self.elements.additional_inputs),
            ("charts", &self.elements.charts),
        ] {
            if id.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "element id {name} must not be empty"
                )));
            }
        }
        if self.charts.width == 0 || self.charts.height == 0 {
            return Err(ConfigError::Validation(
                "chart size must be non-zero".to_string(),
            ));
        }
        self.field_rules()?;
        Ok(())
    }

    /// The rule set the form toggler should use.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] when explicit rules are invalid.
    pub fn field_rules(&self) -> Result<FieldRules, ConfigError> {
        match &self.form.rules {
            Some(rules) => FieldRules::new(rules.clone()).map_err(|err| match err {
                DashboardError::Validation(inner) => ConfigError::Validation(inner.to_string()),
                other => ConfigError::Validation(other.to_string()),
            }),
            None if self.form.legacy => Ok(FieldRules::legacy()),
            None => Ok(FieldRules::standard()),
        }
    }

    #[must_use]
    pub fn delete_messages(&self) -> DeleteMessages {
        let m = &self.messages;
        let prompts = |confirm: &str, failure: &str| DeletePrompts {
            confirm: confirm.to_owned(),
            failure: failure.to_owned(),
        };
        DeleteMessages {
            device: prompts(&m.confirm_delete_device, &m.delete_device_failed),
            schedule: prompts(&m.confirm_delete_schedule, &m.delete_schedule_failed),
            user: prompts(&m.confirm_delete_user, &m.delete_user_failed),
        }
    }

    #[must_use]
    pub fn chart_settings(&self) -> ChartSettings {
        ChartSettings {
            container_id: self.elements.charts.clone(),
            canvas: self.charts,
            failure_message: self.messages.charts_failed.clone(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            origin: None,
            prefix: "/api/v1".to_string(),
        }
    }
}

impl Default for ElementsConfig {
    fn default() -> Self {
        Self {
            additional_inputs: "additional-inputs".to_string(),
            charts: "charts".to_string(),
        }
    }
}

impl Default for MessagesConfig {
    fn default() -> Self {
        let deletes = DeleteMessages::default();
        Self {
            confirm_delete_device: deletes.device.confirm,
            delete_device_failed: deletes.device.failure,
            confirm_delete_schedule: deletes.schedule.confirm,
            delete_schedule_failed: deletes.schedule.failure,
            confirm_delete_user: deletes.user.confirm,
            delete_user_failed: deletes.user.failure,
            charts_failed: ChartSettings::default().failure_message,
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse dashboard config")]
    Parse(#[from] toml::de::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
