//! Dynamic form fields: which extra inputs a device type needs, and how to
//! bring a form container in line with the current selection.
//!
//! The container holds at most one managed field at a time. Reconciliation is
//! a pure function of the selection and the ids currently present, so
//! repeated selections never duplicate an input.

use serde::{Deserialize, Serialize};

use crate::device_type::DeviceType;
use crate::error::{DashboardError, ValidationError};

const DEFAULT_CLASS: &str = "form-control";
const DEFAULT_INPUT_TYPE: &str = "text";

/// Description of one dynamically inserted `<input>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Element id, also used to find the input again for removal.
    pub id: String,
    /// Form field name submitted with the form.
    pub name: String,
    pub placeholder: String,
    #[serde(default = "default_class")]
    pub class: String,
    #[serde(default = "default_input_type")]
    pub input_type: String,
    #[serde(default = "default_required")]
    pub required: bool,
}

fn default_class() -> String {
    DEFAULT_CLASS.to_owned()
}

fn default_input_type() -> String {
    DEFAULT_INPUT_TYPE.to_owned()
}

fn default_required() -> bool {
    true
}

impl FieldSpec {
    /// Create a builder for constructing a [`FieldSpec`].
    #[must_use]
    pub fn builder() -> FieldSpecBuilder {
        FieldSpecBuilder::default()
    }

    /// The smart plug's IP address input.
    #[must_use]
    pub fn ip_address() -> Self {
        Self::text("ip_address", "IP Address")
    }

    /// The temperature probe's serial number input.
    #[must_use]
    pub fn serial_number() -> Self {
        Self::text("serial_number", "Serial Number")
    }

    fn text(id: &str, placeholder: &str) -> Self {
        Self {
            id: id.to_owned(),
            name: id.to_owned(),
            placeholder: placeholder.to_owned(),
            class: default_class(),
            input_type: default_input_type(),
            required: true,
        }
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Validation`] when `id` is empty.
    pub fn validate(&self) -> Result<(), DashboardError> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::EmptyFieldId.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`FieldSpec`].
#[derive(Debug, Default)]
pub struct FieldSpecBuilder {
    id: Option<String>,
    name: Option<String>,
    placeholder: Option<String>,
    class: Option<String>,
    input_type: Option<String>,
    required: Option<bool>,
}

impl FieldSpecBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    #[must_use]
    pub fn input_type(mut self, input_type: impl Into<String>) -> Self {
        self.input_type = Some(input_type.into());
        self
    }

    #[must_use]
    pub fn required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    /// Consume the builder, validate, and return a [`FieldSpec`].
    ///
    /// `name` defaults to the id.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Validation`] if `id` is missing or empty.
    pub fn build(self) -> Result<FieldSpec, DashboardError> {
        let id = self.id.unwrap_or_default();
        let spec = FieldSpec {
            name: self.name.unwrap_or_else(|| id.clone()),
            id,
            placeholder: self.placeholder.unwrap_or_default(),
            class: self.class.unwrap_or_else(default_class),
            input_type: self.input_type.unwrap_or_else(default_input_type),
            required: self.required.unwrap_or(true),
        };
        spec.validate()?;
        Ok(spec)
    }
}

/// One device type and the field it requires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRule {
    pub device_type: DeviceType,
    pub field: FieldSpec,
}

/// The configured mapping from device type to its extra input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRules {
    rules: Vec<FieldRule>,
}

impl FieldRules {
    /// Build a rule set, checking every field and rejecting duplicate types.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Validation`] on an empty field id or when a
    /// device type appears twice.
    pub fn new(rules: Vec<FieldRule>) -> Result<Self, DashboardError> {
        for (idx, rule) in rules.iter().enumerate() {
            rule.field.validate()?;
            if rules[..idx]
                .iter()
                .any(|earlier| earlier.device_type == rule.device_type)
            {
                return Err(ValidationError::DuplicateRule(rule.device_type.to_string()).into());
            }
        }
        Ok(Self { rules })
    }

    /// Smart plug and temperature probe.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            rules: vec![
                FieldRule {
                    device_type: DeviceType::TpLinkSmartPlug,
                    field: FieldSpec::ip_address(),
                },
                FieldRule {
                    device_type: DeviceType::Ds18b20,
                    field: FieldSpec::serial_number(),
                },
            ],
        }
    }

    /// Smart plug only, as on the older single-field form.
    #[must_use]
    pub fn legacy() -> Self {
        Self {
            rules: vec![FieldRule {
                device_type: DeviceType::TpLinkSmartPlug,
                field: FieldSpec::ip_address(),
            }],
        }
    }

    /// The field a device type needs, if any.
    #[must_use]
    pub fn field_for(&self, device_type: &DeviceType) -> Option<&FieldSpec> {
        self.rules
            .iter()
            .find(|rule| &rule.device_type == device_type)
            .map(|rule| &rule.field)
    }

    /// Every element id this rule set may insert, without duplicates.
    #[must_use]
    pub fn managed_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = Vec::with_capacity(self.rules.len());
        for rule in &self.rules {
            if !ids.contains(&rule.field.id.as_str()) {
                ids.push(&rule.field.id);
            }
        }
        ids
    }

    /// Plan the container changes for `selected`, given the ids present now.
    #[must_use]
    pub fn plan(&self, selected: &DeviceType, present: &[String]) -> FieldPlan {
        let desired: Vec<&FieldSpec> = self.field_for(selected).into_iter().collect();
        FieldPlan::reconcile(&desired, present, &self.managed_ids())
    }
}

impl Default for FieldRules {
    fn default() -> Self {
        Self::standard()
    }
}

/// Changes needed to make a container match the desired fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPlan {
    /// Ids of managed inputs to remove, applied first.
    pub remove: Vec<String>,
    /// Inputs to append after removal.
    pub append: Vec<FieldSpec>,
}

impl FieldPlan {
    /// Diff the desired fields against the present ids.
    ///
    /// Only ids listed in `managed` are ever removed; anything else in the
    /// container belongs to the page. A desired field that is already present
    /// is left alone.
    #[must_use]
    pub fn reconcile(desired: &[&FieldSpec], present: &[String], managed: &[&str]) -> Self {
        let is_desired = |id: &str| desired.iter().any(|spec| spec.id == id);
        let is_present = |id: &str| present.iter().any(|p| p == id);

        let remove = managed
            .iter()
            .filter(|id| is_present(id) && !is_desired(id))
            .map(|id| (*id).to_owned())
            .collect();

        let mut append: Vec<FieldSpec> = Vec::new();
        for spec in desired {
            if !is_present(&spec.id) && !append.iter().any(|s| s.id == spec.id) {
                append.push((*spec).clone());
            }
        }

        Self { remove, append }
    }

    /// `true` when the container already matches.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.remove.is_empty() && self.append.is_empty()
    }
}
