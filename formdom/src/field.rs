//! Field node: one user-editable control plus its declared constraints.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use regex::Regex;

use crate::classes::ClassList;
use crate::kind::FieldKind;
use crate::verdict::Verdict;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// Mutable state behind the shared handle.
#[derive(Debug, Default)]
struct FieldInner {
    /// Submitted-under name. Groups (radio/checkbox) share one name.
    name: Option<String>,
    required: bool,
    /// Pre-compiled explicit pattern override. Wins over any rule pattern.
    pattern: Option<Regex>,
    /// Format hint for date/time kinds (e.g. "dd/mm/yyyy", "hh:mm").
    format: Option<String>,
    /// Comma-separated allowed extensions for file kinds.
    accept: Option<String>,
    /// Maximum image dimension for file kinds.
    max_size: Option<u32>,
    /// Current raw value. For file kinds this is the selected path.
    value: String,
    /// Checked state for checkbox/radio kinds.
    checked: bool,
    /// Visual class tokens. Projection target for state labels.
    classes: ClassList,
    /// Last validation verdict, if any.
    verdict: Option<Verdict>,
    /// Processed payload cached by the file pipeline.
    cached_value: Option<String>,
}

/// A form field with shared interior state.
///
/// Clones share the same underlying state, so an asynchronous file task can
/// hold one handle while the aggregator reads through another. The
/// generation counter tags in-flight file tasks so completions of a
/// superseded selection can be discarded.
#[derive(Debug, Clone)]
pub struct Field {
    id: String,
    kind: FieldKind,
    inner: Arc<RwLock<FieldInner>>,
    generation: Arc<AtomicU64>,
}

impl Field {
    pub fn new(kind: FieldKind) -> Self {
        Self {
            id: generate_id("field"),
            kind,
            inner: Arc::new(RwLock::new(FieldInner::default())),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    // Convenience constructors, one per declared kind.

    pub fn text() -> Self {
        Self::new(FieldKind::Text)
    }

    pub fn email() -> Self {
        Self::new(FieldKind::Email)
    }

    pub fn url() -> Self {
        Self::new(FieldKind::Url)
    }

    pub fn date() -> Self {
        Self::new(FieldKind::Date)
    }

    pub fn time() -> Self {
        Self::new(FieldKind::Time)
    }

    pub fn password() -> Self {
        Self::new(FieldKind::Password)
    }

    pub fn checkbox() -> Self {
        Self::new(FieldKind::Checkbox)
    }

    pub fn radio(group: impl Into<String>) -> Self {
        Self::new(FieldKind::Radio).name(group)
    }

    pub fn select() -> Self {
        Self::new(FieldKind::Select)
    }

    pub fn file() -> Self {
        Self::new(FieldKind::File)
    }

    pub fn submit() -> Self {
        Self::new(FieldKind::Submit)
    }

    // -------------------------------------------------------------------------
    // Builder methods (used while assembling a form)
    // -------------------------------------------------------------------------

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn name(self, name: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.name = Some(name.into());
        }
        self
    }

    pub fn required(self, required: bool) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.required = required;
        }
        self
    }

    /// Explicit pattern override. Compiled by the caller; trusted
    /// configuration, not user input.
    pub fn pattern(self, pattern: Regex) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.pattern = Some(pattern);
        }
        self
    }

    pub fn format(self, format: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.format = Some(format.into());
        }
        self
    }

    pub fn accept(self, accept: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.accept = Some(accept.into());
        }
        self
    }

    pub fn max_size(self, max_size: u32) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.max_size = Some(max_size);
        }
        self
    }

    pub fn value(self, value: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.value = value.into();
        }
        self
    }

    pub fn checked(self, checked: bool) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.checked = checked;
        }
        self
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    pub fn field_id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn field_name(&self) -> Option<String> {
        self.inner.read().ok().and_then(|g| g.name.clone())
    }

    pub fn is_required(&self) -> bool {
        self.inner.read().map(|g| g.required).unwrap_or(false)
    }

    pub fn pattern_override(&self) -> Option<Regex> {
        self.inner.read().ok().and_then(|g| g.pattern.clone())
    }

    pub fn format_hint(&self) -> Option<String> {
        self.inner.read().ok().and_then(|g| g.format.clone())
    }

    pub fn accept_list(&self) -> Option<String> {
        self.inner.read().ok().and_then(|g| g.accept.clone())
    }

    pub fn max_dimension(&self) -> Option<u32> {
        self.inner.read().ok().and_then(|g| g.max_size)
    }

    pub fn current_value(&self) -> String {
        self.inner
            .read()
            .map(|g| g.value.clone())
            .unwrap_or_default()
    }

    pub fn is_checked(&self) -> bool {
        self.inner.read().map(|g| g.checked).unwrap_or(false)
    }

    pub fn verdict(&self) -> Option<Verdict> {
        self.inner.read().ok().and_then(|g| g.verdict)
    }

    pub fn cached_value(&self) -> Option<String> {
        self.inner.read().ok().and_then(|g| g.cached_value.clone())
    }

    pub fn has_class(&self, token: &str) -> bool {
        self.inner
            .read()
            .map(|g| g.classes.contains(token))
            .unwrap_or(false)
    }

    /// Snapshot of the class list (for rendering).
    pub fn classes(&self) -> ClassList {
        self.inner
            .read()
            .map(|g| g.classes.clone())
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    pub fn set_value(&self, value: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.value = value.into();
        }
    }

    pub fn set_checked(&self, checked: bool) {
        if let Ok(mut guard) = self.inner.write() {
            guard.checked = checked;
        }
    }

    pub fn set_verdict(&self, verdict: Option<Verdict>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.verdict = verdict;
        }
    }

    pub fn set_cached_value(&self, value: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.cached_value = Some(value.into());
        }
    }

    pub fn clear_cached_value(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.cached_value = None;
        }
    }

    pub fn add_class(&self, token: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.classes.add(token);
        }
    }

    pub fn remove_class(&self, token: &str) {
        if let Ok(mut guard) = self.inner.write() {
            guard.classes.remove(token);
        }
    }

    // -------------------------------------------------------------------------
    // File-task generation tracking
    // -------------------------------------------------------------------------

    /// Start a new file task: supersedes any in-flight task on this field.
    pub fn next_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Generation of the most recently started task.
    pub fn current_generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_declared_attributes() {
        let field = Field::email()
            .id("mail")
            .name("mail")
            .required(true)
            .format("whatever");
        assert_eq!(field.field_id(), "mail");
        assert_eq!(field.kind(), FieldKind::Email);
        assert!(field.is_required());
        assert_eq!(field.format_hint().as_deref(), Some("whatever"));
    }

    #[test]
    fn clones_share_state() {
        let field = Field::file().accept("jpg,png");
        let other = field.clone();
        other.set_cached_value("data:image/png;base64,xyz");
        assert_eq!(
            field.cached_value().as_deref(),
            Some("data:image/png;base64,xyz")
        );
    }

    #[test]
    fn generation_counter_is_monotonic() {
        let field = Field::file();
        let first = field.next_generation();
        let second = field.next_generation();
        assert!(second > first);
        assert_eq!(field.current_generation(), second);
    }

    #[test]
    fn generated_ids_are_unique() {
        let a = Field::text();
        let b = Field::text();
        assert_ne!(a.field_id(), b.field_id());
    }
}
