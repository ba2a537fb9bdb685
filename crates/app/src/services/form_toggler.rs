//! Form toggler: keeps the "add device" form in step with the type selector.

use piplant_domain::device_type::DeviceType;
use piplant_domain::error::DashboardError;
use piplant_domain::form::{FieldPlan, FieldRules};

use crate::ports::FieldContainer;

/// Element id of the container the dynamic inputs live in.
pub const DEFAULT_CONTAINER_ID: &str = "additional-inputs";

/// Adds and removes the type-specific inputs of the device form.
pub struct FormToggler<C> {
    container: C,
    rules: FieldRules,
    container_id: String,
}

impl<C: FieldContainer> FormToggler<C> {
    /// Create a toggler over `container` using `rules`.
    pub fn new(container: C, rules: FieldRules) -> Self {
        Self {
            container,
            rules,
            container_id: DEFAULT_CONTAINER_ID.to_owned(),
        }
    }

    /// Use a container element other than `additional-inputs`.
    #[must_use]
    pub fn with_container_id(mut self, container_id: impl Into<String>) -> Self {
        self.container_id = container_id.into();
        self
    }

    /// Reconcile the container with the newly selected device type.
    ///
    /// Removals run before appends, and a field already present is kept, so
    /// selecting the same type again changes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::MissingElement`] when the container element
    /// does not exist, or a host error from the DOM.
    #[tracing::instrument(skip(self), fields(container = %self.container_id))]
    pub fn synchronize_fields(&self, selected: &str) -> Result<FieldPlan, DashboardError> {
        let device_type = DeviceType::parse(selected);
        let managed = self.rules.managed_ids();
        let present = self.container.present_ids(&self.container_id, &managed)?;
        let plan = self.rules.plan(&device_type, &present);

        for id in &plan.remove {
            self.container.remove_field(&self.container_id, id)?;
        }
        for field in &plan.append {
            self.container.append_field(&self.container_id, field)?;
        }

        if !plan.is_noop() {
            tracing::debug!(
                removed = ?plan.remove,
                appended = plan.append.len(),
                "form fields synchronized"
            );
        }
        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use piplant_domain::form::FieldSpec;

    use super::*;
    use crate::testing::InMemoryContainer;

    fn toggler(rules: FieldRules) -> (FormToggler<Arc<InMemoryContainer>>, Arc<InMemoryContainer>) {
        let container = Arc::new(InMemoryContainer::new(DEFAULT_CONTAINER_ID));
        (FormToggler::new(Arc::clone(&container), rules), container)
    }

    #[test]
    fn should_add_ip_address_when_smart_plug_selected() {
        let (toggler, container) = toggler(FieldRules::standard());

        let plan = toggler.synchronize_fields("tp_link_smart_plug").unwrap();

        assert_eq!(container.field_ids(), vec!["ip_address"]);
        assert_eq!(plan.append, vec![FieldSpec::ip_address()]);
        let field = &container.fields()[0];
        assert_eq!(field.placeholder, "IP Address");
        assert_eq!(field.class, "form-control");
        assert!(field.required);
    }

    #[test]
    fn should_add_serial_number_when_probe_selected() {
        let (toggler, container) = toggler(FieldRules::standard());

        toggler.synchronize_fields("ds18b20").unwrap();

        assert_eq!(container.field_ids(), vec!["serial_number"]);
    }

    #[test]
    fn should_swap_fields_when_switching_from_plug_to_probe() {
        let (toggler, container) = toggler(FieldRules::standard());

        toggler.synchronize_fields("tp_link_smart_plug").unwrap();
        let plan = toggler.synchronize_fields("ds18b20").unwrap();

        assert_eq!(plan.remove, vec!["ip_address".to_string()]);
        assert_eq!(container.field_ids(), vec!["serial_number"]);
    }

    #[test]
    fn should_remove_every_managed_field_when_other_type_selected() {
        let (toggler, container) = toggler(FieldRules::standard());
        toggler.synchronize_fields("tp_link_smart_plug").unwrap();

        toggler.synchronize_fields("device").unwrap();

        assert!(container.field_ids().is_empty());
    }

    #[test]
    fn should_not_duplicate_field_when_same_type_selected_twice() {
        let (toggler, container) = toggler(FieldRules::standard());

        toggler.synchronize_fields("tp_link_smart_plug").unwrap();
        let second = toggler.synchronize_fields("tp_link_smart_plug").unwrap();

        assert!(second.is_noop());
        assert_eq!(container.field_ids(), vec!["ip_address"]);
    }

    #[test]
    fn should_do_nothing_when_other_selected_on_clean_form() {
        let (toggler, container) = toggler(FieldRules::standard());

        let plan = toggler.synchronize_fields("device").unwrap();

        assert!(plan.is_noop());
        assert!(container.field_ids().is_empty());
    }

    #[test]
    fn should_leave_page_owned_inputs_untouched() {
        let name = FieldSpec::builder().id("name").build().unwrap();
        let container = Arc::new(
            InMemoryContainer::new(DEFAULT_CONTAINER_ID)
                .with_fields(vec![name, FieldSpec::ip_address()]),
        );
        let toggler = FormToggler::new(Arc::clone(&container), FieldRules::standard());

        toggler.synchronize_fields("ds18b20").unwrap();

        assert_eq!(container.field_ids(), vec!["name", "serial_number"]);
    }

    #[test]
    fn should_not_remove_same_id_outside_container() {
        let container = Arc::new(
            InMemoryContainer::new(DEFAULT_CONTAINER_ID)
                .with_fields(vec![FieldSpec::ip_address()])
                .with_outside_fields(vec![FieldSpec::ip_address()]),
        );
        let toggler = FormToggler::new(Arc::clone(&container), FieldRules::standard());

        let plan = toggler.synchronize_fields("device").unwrap();

        assert_eq!(plan.remove, vec!["ip_address".to_string()]);
        assert!(container.field_ids().is_empty());
        assert_eq!(container.outside_ids(), vec!["ip_address"]);
    }

    #[test]
    fn should_treat_probe_as_other_when_legacy_rules_used() {
        let (toggler, container) = toggler(FieldRules::legacy());
        toggler.synchronize_fields("tp_link_smart_plug").unwrap();

        let plan = toggler.synchronize_fields("ds18b20").unwrap();

        assert_eq!(plan.remove, vec!["ip_address".to_string()]);
        assert!(plan.append.is_empty());
        assert!(container.field_ids().is_empty());
    }

    #[test]
    fn should_fail_when_container_missing() {
        let toggler = FormToggler::new(
            InMemoryContainer::missing(DEFAULT_CONTAINER_ID),
            FieldRules::standard(),
        );

        let err = toggler.synchronize_fields("device").unwrap_err();

        assert!(matches!(err, DashboardError::MissingElement(ref e) if e.id == DEFAULT_CONTAINER_ID));
    }

    #[test]
    fn should_use_configured_container_id() {
        let container = Arc::new(InMemoryContainer::new("plug-extras"));
        let toggler = FormToggler::new(Arc::clone(&container), FieldRules::standard())
            .with_container_id("plug-extras");

        toggler.synchronize_fields("tp_link_smart_plug").unwrap();

        assert_eq!(container.field_ids(), vec!["ip_address"]);
    }
}
