//! Resolved per-form configuration.

use std::sync::Arc;

use log::{info, warn};

use crate::aggregate::FormData;
use crate::error::FileError;
use crate::file::DeliveredFile;
use crate::validation::ErrorSummary;

/// Invoked with the collected form data when submission is suppressed and
/// every field is valid.
pub type SuccessCallback = Arc<dyn Fn(&FormData) + Send + Sync>;

/// Invoked with the rebuilt summary whenever a validation pass finds
/// invalid fields.
pub type ErrorCallback = Arc<dyn Fn(&ErrorSummary) + Send + Sync>;

/// Invoked once per file selection with the delivered payload or the
/// pipeline failure. Required if the form has file fields.
pub type FileCallback = Arc<dyn Fn(Result<DeliveredFile, FileError>) + Send + Sync>;

/// Options for one form attachment. Immutable after the controller takes
/// ownership; clones share the callback slots.
#[derive(Clone)]
pub struct FormConfig {
    /// Label projected onto invalid fields.
    pub error_class: String,
    /// Label projected onto valid fields.
    pub success_class: String,
    /// When true, a fully valid form invokes the success callback instead
    /// of requesting host submission.
    pub prevent_submit: bool,
    /// When true, the host viewport is scrolled to the first errored field.
    pub scroll_to_error: bool,
    /// Restrict submit handling to one control id. `None` means every
    /// submit-kind control triggers validation.
    pub submit_trigger: Option<String>,
    pub(crate) on_success: SuccessCallback,
    pub(crate) on_error: ErrorCallback,
    pub(crate) on_select_file: Option<FileCallback>,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            error_class: "input-error".to_string(),
            success_class: "input-success".to_string(),
            prevent_submit: false,
            scroll_to_error: false,
            submit_trigger: None,
            on_success: Arc::new(|data| match serde_json::to_string(data) {
                Ok(json) => info!("form data: {json}"),
                Err(err) => warn!("form data could not be serialized: {err}"),
            }),
            on_error: Arc::new(|summary| {
                warn!("{} invalid field(s): {summary}", summary.count());
            }),
            on_select_file: None,
        }
    }
}

impl FormConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the error label.
    pub fn error_class(mut self, class: impl Into<String>) -> Self {
        self.error_class = class.into();
        self
    }

    /// Set the success label.
    pub fn success_class(mut self, class: impl Into<String>) -> Self {
        self.success_class = class.into();
        self
    }

    /// Suppress native submission on success.
    pub fn prevent_submit(mut self, prevent: bool) -> Self {
        self.prevent_submit = prevent;
        self
    }

    /// Scroll the host viewport to the first errored field.
    pub fn scroll_to_error(mut self, scroll: bool) -> Self {
        self.scroll_to_error = scroll;
        self
    }

    /// Restrict submit handling to the control with this id.
    pub fn submit_trigger(mut self, id: impl Into<String>) -> Self {
        self.submit_trigger = Some(id.into());
        self
    }

    /// Replace the success callback.
    pub fn on_success(mut self, f: impl Fn(&FormData) + Send + Sync + 'static) -> Self {
        self.on_success = Arc::new(f);
        self
    }

    /// Replace the error callback.
    pub fn on_error(mut self, f: impl Fn(&ErrorSummary) + Send + Sync + 'static) -> Self {
        self.on_error = Arc::new(f);
        self
    }

    /// Set the file-selection callback.
    pub fn on_select_file(
        mut self,
        f: impl Fn(Result<DeliveredFile, FileError>) + Send + Sync + 'static,
    ) -> Self {
        self.on_select_file = Some(Arc::new(f));
        self
    }
}

impl std::fmt::Debug for FormConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormConfig")
            .field("error_class", &self.error_class)
            .field("success_class", &self.success_class)
            .field("prevent_submit", &self.prevent_submit)
            .field("scroll_to_error", &self.scroll_to_error)
            .field("submit_trigger", &self.submit_trigger)
            .field("on_select_file", &self.on_select_file.is_some())
            .finish()
    }
}
