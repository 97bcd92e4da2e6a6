use serde::Serialize;

/// Aggregated whole-form error state: the identifiers of every field that
/// is currently invalid.
///
/// Identifiers are unique; equality is order-insensitive. A summary is
/// rebuilt in full on every validation pass, never patched incrementally.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ErrorSummary {
    fields: Vec<String>,
}

impl ErrorSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an invalid field. Duplicates are ignored.
    pub fn push(&mut self, field_id: impl Into<String>) {
        let field_id = field_id.into();
        if !self.fields.iter().any(|f| *f == field_id) {
            self.fields.push(field_id);
        }
    }

    /// Number of invalid fields.
    pub fn count(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Invalid field identifiers, in the order they were recorded.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// The first invalid field, if any (scroll target).
    pub fn first(&self) -> Option<&str> {
        self.fields.first().map(String::as_str)
    }
}

impl PartialEq for ErrorSummary {
    fn eq(&self, other: &Self) -> bool {
        self.fields.len() == other.fields.len()
            && self.fields.iter().all(|f| other.fields.contains(f))
    }
}

impl Eq for ErrorSummary {}

impl std::fmt::Display for ErrorSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.fields.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_deduplicates() {
        let mut summary = ErrorSummary::new();
        summary.push("a");
        summary.push("b");
        summary.push("a");
        assert_eq!(summary.count(), 2);
        assert_eq!(summary.to_string(), "a, b");
    }

    #[test]
    fn equality_ignores_order() {
        let mut left = ErrorSummary::new();
        left.push("a");
        left.push("b");
        let mut right = ErrorSummary::new();
        right.push("b");
        right.push("a");
        assert_eq!(left, right);

        let mut other = ErrorSummary::new();
        other.push("a");
        assert_ne!(left, other);
    }
}
