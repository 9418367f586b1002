//! Quote-request handling.
//!
//! Submissions are not sent anywhere: the values are logged, the visitor gets
//! a confirmation toast and the form is cleared. Lead delivery belongs to
//! whatever eventually consumes these logs.

use log::{info, warn};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::config::FormField;

/// Fields every variant's quote form must mark `required`.
pub const REQUIRED_QUOTE_FIELDS: &[&str] =
    &["firstName", "lastName", "phone", "email", "service", "location"];

pub const CONFIRMATION_TITLE: &str = "Quote Request Submitted!";
pub const CONFIRMATION_BODY: &str =
    "Thank you for your quote request! We will contact you within 24 hours.";

/// Field name to value, in the order the fields were declared.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormValues(Vec<(String, String)>);

impl FormValues {
    /// Reads each declared field through `read`; fields it can't find
    /// are recorded as empty.
    pub fn collect<F>(fields: &[FormField], mut read: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        Self(
            fields
                .iter()
                .map(|field| {
                    let value = read(&field.name).unwrap_or_default();
                    (field.name.clone(), value)
                })
                .collect(),
        )
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl Serialize for FormValues {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in &self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Receives user-facing messages; the toast host implements this.
pub trait Notifier {
    fn notify(&self, title: &str, body: &str);
}

/// An event whose default browser action can be cancelled.
pub trait Cancelable {
    fn cancel(&self);
}

/// A mounted quote form whose fields can be read and cleared.
pub trait QuoteForm {
    fn read(&self, name: &str) -> Option<String>;
    fn reset(&self);
}

/// Logs the submission and emits the fixed confirmation once.
pub fn submit_quote(values: &FormValues, notifier: &dyn Notifier) {
    match serde_json::to_string(values) {
        Ok(json) => info!("Quote request submitted ({} fields): {}", values.len(), json),
        Err(e) => {
            let names: Vec<&str> = values.iter().map(|(name, _)| name).collect();
            info!("Quote request submitted with fields {:?} ({})", names, e)
        }
    }
    notifier.notify(CONFIRMATION_TITLE, CONFIRMATION_BODY);
}

/// Runs a quote form submission end to end.
///
/// The default navigation is always cancelled. When the form can be read its
/// values are collected, the confirmation goes to `notifier` if one is
/// mounted, and the form is reset either way.
pub fn handle_quote_submit(
    event: &dyn Cancelable,
    form: Option<&dyn QuoteForm>,
    fields: &[FormField],
    notifier: Option<&dyn Notifier>,
) -> Option<FormValues> {
    event.cancel();

    let form = match form {
        Some(form) => form,
        None => {
            warn!("Quote form could not be read, submission dropped");
            return None;
        }
    };

    let values = FormValues::collect(fields, |name| form.read(name));
    match notifier {
        Some(notifier) => submit_quote(&values, notifier),
        None => warn!("No toast host mounted, quote confirmation not shown"),
    }
    form.reset();
    Some(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FieldKind, Variant};
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    #[derive(Default)]
    struct FakeSubmit {
        cancelled: Cell<u32>,
    }

    impl Cancelable for FakeSubmit {
        fn cancel(&self) {
            self.cancelled.set(self.cancelled.get() + 1);
        }
    }

    /// Form whose fields hold the given answers until reset.
    struct FakeForm {
        fields: RefCell<HashMap<String, String>>,
        resets: Cell<u32>,
    }

    impl FakeForm {
        fn filled(answers: &[(&str, &str)]) -> Self {
            Self {
                fields: RefCell::new(
                    answers
                        .iter()
                        .map(|(k, v)| (k.to_string(), v.to_string()))
                        .collect(),
                ),
                resets: Cell::new(0),
            }
        }
    }

    impl QuoteForm for FakeForm {
        fn read(&self, name: &str) -> Option<String> {
            self.fields.borrow().get(name).cloned()
        }

        fn reset(&self) {
            self.fields.borrow_mut().clear();
            self.resets.set(self.resets.get() + 1);
        }
    }

    const ANSWERS: [(&str, &str); 6] = [
        ("firstName", "Dana"),
        ("lastName", "Reyes"),
        ("phone", "312-555-0199"),
        ("email", "dana@example.com"),
        ("service", "full"),
        ("location", "Office downtown"),
    ];

    #[derive(Default)]
    struct RecordingNotifier(RefCell<Vec<(String, String)>>);

    impl Notifier for RecordingNotifier {
        fn notify(&self, title: &str, body: &str) {
            self.0.borrow_mut().push((title.to_string(), body.to_string()));
        }
    }

    fn field(name: &str) -> FormField {
        FormField {
            name: name.to_string(),
            label: name.to_string(),
            kind: FieldKind::Text,
            required: false,
            placeholder: None,
            options: Vec::new(),
            half_width: false,
        }
    }

    fn filled_classic() -> FormValues {
        let config = Variant::Classic.load().unwrap();
        let answers: HashMap<&str, &str> = ANSWERS.into_iter().collect();
        FormValues::collect(&config.quote_form, |name| answers.get(name).map(|v| v.to_string()))
    }

    #[test]
    fn values_follow_declaration_order() {
        let fields = [field("zeta"), field("alpha"), field("mid")];
        let values = FormValues::collect(&fields, |name| Some(name.to_uppercase()));
        let names: Vec<&str> = values.iter().map(|(k, _)| k).collect();
        assert_eq!(names, ["zeta", "alpha", "mid"]);
        assert_eq!(values.get("alpha"), Some("ALPHA"));
        assert_eq!(values.get("missing"), None);
    }

    #[test]
    fn unreadable_fields_become_empty() {
        let fields = [field("firstName"), field("message")];
        let values =
            FormValues::collect(&fields, |name| (name == "firstName").then(|| "Ana".to_string()));
        assert_eq!(values.get("firstName"), Some("Ana"));
        assert_eq!(values.get("message"), Some(""));
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn serializes_as_ordered_object() {
        let fields = [field("lastName"), field("firstName")];
        let values = FormValues::collect(&fields, |name| Some(format!("{}!", name)));
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(json, r#"{"lastName":"lastName!","firstName":"firstName!"}"#);
    }

    #[test]
    fn submission_notifies_exactly_once_with_fixed_text() {
        let notifier = RecordingNotifier::default();
        let values = filled_classic();
        for name in REQUIRED_QUOTE_FIELDS {
            assert!(!values.get(name).unwrap_or_default().is_empty(), "{} empty", name);
        }

        submit_quote(&values, &notifier);

        let sent = notifier.0.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "Quote Request Submitted!");
        assert_eq!(
            sent[0].1,
            "Thank you for your quote request! We will contact you within 24 hours."
        );
    }

    #[test]
    fn optional_fields_are_still_captured() {
        let values = filled_classic();
        assert_eq!(values.get("vehicleInfo"), Some(""));
        assert_eq!(values.get("message"), Some(""));
    }

    #[test]
    fn submit_cancels_navigation_notifies_once_and_resets() {
        let config = Variant::Classic.load().unwrap();
        let event = FakeSubmit::default();
        let form = FakeForm::filled(&ANSWERS);
        let notifier = RecordingNotifier::default();

        let values =
            handle_quote_submit(&event, Some(&form), &config.quote_form, Some(&notifier)).unwrap();

        assert_eq!(event.cancelled.get(), 1);
        assert_eq!(notifier.0.borrow().len(), 1);
        assert_eq!(notifier.0.borrow()[0].0, CONFIRMATION_TITLE);
        assert_eq!(form.resets.get(), 1);
        assert!(config.quote_form.iter().all(|f| form.read(&f.name).is_none()));
        assert_eq!(values.get("email"), Some("dana@example.com"));
        assert_eq!(values.len(), config.quote_form.len());
    }

    #[test]
    fn submit_without_toast_host_still_resets() {
        let config = Variant::Classic.load().unwrap();
        let event = FakeSubmit::default();
        let form = FakeForm::filled(&ANSWERS);

        let values = handle_quote_submit(&event, Some(&form), &config.quote_form, None);

        assert!(values.is_some());
        assert_eq!(event.cancelled.get(), 1);
        assert_eq!(form.resets.get(), 1);
    }

    #[test]
    fn unreadable_form_still_cancels_navigation() {
        let config = Variant::Classic.load().unwrap();
        let event = FakeSubmit::default();
        let notifier = RecordingNotifier::default();

        let values = handle_quote_submit(&event, None, &config.quote_form, Some(&notifier));

        assert!(values.is_none());
        assert_eq!(event.cancelled.get(), 1);
        assert!(notifier.0.borrow().is_empty());
    }
}
