//! Live form validation over a [`formdom`] document model.
//!
//! The engine classifies each tracked field as valid or invalid against a
//! type-driven rule set, projects the verdict onto the field's state labels,
//! aggregates whole-form error state, and gates submission on it. File
//! controls run through an asynchronous intake pipeline that reads the
//! selection, detects its content type, downsizes images when a maximum
//! dimension is configured, and hands the payload to the embedding.
//!
//! # Example
//!
//! ```ignore
//! use formdom::{Field, FieldEvent, Form};
//! use livevalidate::{FormConfig, FormController};
//!
//! let form = Form::new()
//!     .with(Field::email().id("mail").name("mail").required(true))
//!     .with(Field::submit().id("go"));
//!
//! let config = FormConfig::new()
//!     .prevent_submit(true)
//!     .on_success(|data| println!("ok: {data:?}"))
//!     .on_error(|summary| println!("{} invalid", summary.count()));
//!
//! let controller = FormController::attach(form, config);
//! controller.dispatch(&FieldEvent::SubmitActivated { target: None });
//! ```

pub mod aggregate;
pub mod config;
pub mod controller;
pub mod error;
pub mod file;
pub mod host;
pub mod validation;

pub use aggregate::{FormData, collect_form_data, validate_all};
pub use config::FormConfig;
pub use controller::FormController;
pub use error::FileError;
pub use file::DeliveredFile;
pub use host::{Host, LogHost};
pub use validation::{ErrorSummary, Pattern, resolve, validate_field};

pub mod prelude {
    pub use crate::aggregate::{FormData, collect_form_data, validate_all};
    pub use crate::config::FormConfig;
    pub use crate::controller::FormController;
    pub use crate::error::FileError;
    pub use crate::file::DeliveredFile;
    pub use crate::host::{Host, LogHost};
    pub use crate::validation::{ErrorSummary, Pattern, resolve, validate_field};

    pub use formdom::{Field, FieldEvent, FieldKind, Form, Verdict};
}
