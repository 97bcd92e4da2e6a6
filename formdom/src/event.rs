/// Events the host document layer feeds into the engine.
///
/// Targets are field ids. `SubmitActivated` carries the id of the control
/// that fired, or `None` when the host requests submission directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEvent {
    /// A field's value changed (keystroke or programmatic edit).
    Edited { target: String },
    /// A field lost focus.
    FocusLost { target: String },
    /// A file control received a new selection.
    FileSelected { target: String },
    /// A submit control was activated.
    SubmitActivated { target: Option<String> },
}

impl FieldEvent {
    /// The id of the field this event targets, if any.
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Edited { target }
            | Self::FocusLost { target }
            | Self::FileSelected { target } => Some(target),
            Self::SubmitActivated { target } => target.as_deref(),
        }
    }
}
