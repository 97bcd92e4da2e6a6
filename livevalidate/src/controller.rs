//! Controller glue: owns the form, its configuration, and the host seam,
//! and routes events to the engine.

use std::sync::Arc;

use formdom::{FieldEvent, FieldKind, Form};
use tokio::task::JoinHandle;

use crate::aggregate;
use crate::config::FormConfig;
use crate::file;
use crate::host::{Host, LogHost};
use crate::validation;

/// One form attachment. The tracked-field set is fixed at attachment; the
/// configuration is immutable afterwards.
pub struct FormController {
    form: Form,
    config: FormConfig,
    host: Arc<dyn Host>,
}

impl FormController {
    /// Attach with the default (logging) host.
    pub fn attach(form: Form, config: FormConfig) -> Self {
        Self::with_host(form, config, Arc::new(LogHost))
    }

    /// Attach with an embedding-provided host.
    pub fn with_host(form: Form, config: FormConfig, host: Arc<dyn Host>) -> Self {
        Self { form, config, host }
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Route one host event. Edits and focus loss validate the targeted
    /// field; a file selection enters the intake pipeline (the spawned
    /// task's handle is returned); submit activation re-validates the
    /// whole form, suppressing default navigation.
    pub fn dispatch(&self, event: &FieldEvent) -> Option<JoinHandle<()>> {
        match event {
            FieldEvent::Edited { target } | FieldEvent::FocusLost { target } => {
                if let Some(field) = self.form.field(target) {
                    validation::validate_field(field, &self.form, &self.config);
                }
                None
            }
            FieldEvent::FileSelected { target } => {
                let field = self.form.field(target)?;
                if field.kind() != FieldKind::File {
                    return None;
                }
                file::handle_file_selected(field, &self.config)
            }
            FieldEvent::SubmitActivated { target } => {
                if let Some(trigger) = &self.config.submit_trigger
                    && target.as_deref() != Some(trigger.as_str())
                {
                    return None;
                }
                aggregate::validate_all(&self.form, &self.config, self.host.as_ref());
                None
            }
        }
    }

    /// Re-validate everything and dispatch callbacks/submission. Same as a
    /// submit activation, available to embeddings directly.
    pub fn validate_all(&self) -> validation::ErrorSummary {
        aggregate::validate_all(&self.form, &self.config, self.host.as_ref())
    }
}

impl std::fmt::Debug for FormController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormController")
            .field("form", &self.form)
            .field("config", &self.config)
            .finish()
    }
}
