//! Form: a document-ordered collection of tracked fields.

use log::warn;

use crate::field::Field;
use crate::kind::FieldKind;

/// The set of fields the engine tracks for one form, in document order.
#[derive(Debug, Clone, Default)]
pub struct Form {
    fields: Vec<Field>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field. Order of insertion is document order.
    pub fn push(&mut self, field: Field) {
        if self.field(field.field_id()).is_some() {
            warn!("duplicate field id '{}' in form", field.field_id());
        }
        self.fields.push(field);
    }

    /// Builder-style append.
    pub fn with(mut self, field: Field) -> Self {
        self.push(field);
        self
    }

    /// Look up a field by id.
    pub fn field(&self, id: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.field_id() == id)
    }

    /// All tracked fields in document order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// All fields sharing a submitted-under name (radio/checkbox groups).
    pub fn group<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Field> {
        self.fields
            .iter()
            .filter(move |f| f.field_name().as_deref() == Some(name))
    }

    /// Whether any member of the named group is currently checked.
    pub fn group_checked(&self, name: &str) -> bool {
        self.group(name).any(|f| f.is_checked())
    }

    /// Submit controls, in document order.
    pub fn submit_controls(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| f.kind() == FieldKind::Submit)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Find a field by id in a form. Mirrors lookup on a host document.
pub fn find_field<'a>(form: &'a Form, id: &str) -> Option<&'a Field> {
    form.field(id)
}
