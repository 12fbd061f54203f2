//! Per-component form errors and the backend error router.
//!
//! A backend rejection is either a field-level validation map, which is
//! stored under the submitting component's identifier for inline display,
//! or a general failure, which goes to the notification banner.

use super::notification::NotificationStore;
use crate::error::ApiError;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::watch;
use uuid::Uuid;

/// Backend validation payload, stored verbatim.
pub type FormErrors = Value;

pub type FormErrorMap = HashMap<String, FormErrors>;

const FALLBACK_MESSAGE: &str = "Error";

/// Where a backend error ends up.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorRoute {
    /// Field-level errors for the submitting component. Never shown as a
    /// banner.
    Fields(FormErrors),
    /// Banner text; `None` when no source produced a message.
    General(Option<String>),
}

/// Classify a backend error.
///
/// A structured body with a numeric `status` or a string `detail` is a
/// general error whose message is `detail` (possibly absent). Any other
/// structured body is a field-level map. Without a structured body the
/// message is the body string, else `general_message`, else the error's
/// own text, else `"Error"`.
///
/// A structured body that carries `status` next to field keys is routed as
/// a general error and its field keys are dropped.
pub fn classify_error(error: Option<&ApiError>, general_message: Option<&str>) -> ErrorRoute {
    let data = error.and_then(ApiError::response_data);

    if let Some(body @ (Value::Object(_) | Value::Array(_))) = data {
        let has_status = body.get("status").is_some_and(Value::is_number);
        let detail = body.get("detail").and_then(Value::as_str);
        if has_status || detail.is_some() {
            return ErrorRoute::General(detail.filter(|d| !d.is_empty()).map(str::to_string));
        }
        return ErrorRoute::Fields(body.clone());
    }

    let body_text = data.and_then(Value::as_str).filter(|s| !s.is_empty());
    let message = body_text
        .or(general_message.filter(|m| !m.is_empty()))
        .map(str::to_string)
        .or_else(|| {
            error.map(|e| {
                let raw = e.to_string();
                if raw.is_empty() {
                    FALLBACK_MESSAGE.to_string()
                } else {
                    raw
                }
            })
        });
    ErrorRoute::General(message)
}

/// Component identifier → field errors. Presence of a key means the
/// component has errors; clearing removes the key.
#[derive(Clone)]
pub struct FormErrorStore {
    errors: Arc<watch::Sender<FormErrorMap>>,
    notifications: NotificationStore,
}

impl FormErrorStore {
    pub fn new(notifications: NotificationStore) -> Self {
        let (errors, _) = watch::channel(FormErrorMap::new());
        Self {
            errors: Arc::new(errors),
            notifications,
        }
    }

    /// Fresh identifier for a form that has none of its own.
    pub fn new_component_id() -> String {
        Uuid::new_v4().to_string()
    }

    pub fn get_error_by_component_id(&self, component_id: &str) -> Option<FormErrors> {
        self.errors.borrow().get(component_id).cloned()
    }

    pub fn set_form_errors(&self, component_id: impl Into<String>, errors: FormErrors) {
        let component_id = component_id.into();
        self.errors.send_modify(|map| {
            map.insert(component_id, errors);
        });
    }

    pub fn reset_form_errors(&self, component_id: &str) {
        self.errors.send_if_modified(|map| map.remove(component_id).is_some());
    }

    /// Reset the component's errors and, unless `keep_notification` is set,
    /// dismiss the active banner too.
    pub fn clear_errors(&self, component_id: &str, keep_notification: bool) {
        self.reset_form_errors(component_id);
        if !keep_notification {
            self.notifications.close_notification();
        }
    }

    /// Route a failed submission to field errors or to the banner. Never
    /// fails.
    pub fn handle_error(
        &self,
        component_id: &str,
        error: Option<&ApiError>,
        general_message: Option<&str>,
    ) {
        match classify_error(error, general_message) {
            ErrorRoute::Fields(errors) => {
                tracing::debug!(component_id, "form_error.fields");
                self.set_form_errors(component_id, errors);
            }
            ErrorRoute::General(Some(message)) => {
                tracing::debug!(component_id, message = %message, "form_error.general");
                self.notifications.error(message);
            }
            ErrorRoute::General(None) => {
                tracing::debug!(component_id, "form_error.no_message");
            }
        }
    }

    pub fn len(&self) -> usize {
        self.errors.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.borrow().is_empty()
    }

    pub fn subscribe(&self) -> watch::Receiver<FormErrorMap> {
        self.errors.subscribe()
    }
}
