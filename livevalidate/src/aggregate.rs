//! Whole-form aggregation: full re-validation, error summary dispatch, and
//! form-data collection.

use formdom::{FieldKind, Form, Verdict};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::config::FormConfig;
use crate::host::Host;
use crate::validation::{ErrorSummary, validate_field};

/// Collected form data: field identifiers mapped to values, in document
/// order. Serializes as a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    entries: Vec<(String, String)>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key. An existing key is overwritten in place, keeping its
    /// document-order position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::ops::Index<&str> for FormData {
    type Output = str;

    fn index(&self, key: &str) -> &str {
        self.get(key)
            .unwrap_or_else(|| panic!("no field named '{key}' in form data"))
    }
}

impl Serialize for FormData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Re-validate every tracked field, rebuild the error summary from the
/// stored verdicts, and dispatch: error callback (plus optional scroll)
/// when anything is invalid, host submission or success callback when the
/// whole form is valid.
pub fn validate_all(form: &Form, config: &FormConfig, host: &dyn Host) -> ErrorSummary {
    for field in form.fields() {
        validate_field(field, form, config);
    }

    let mut summary = ErrorSummary::new();
    for field in form.fields() {
        if field.verdict() == Some(Verdict::Invalid) {
            summary.push(field.field_id());
        }
    }

    if summary.is_empty() {
        let data = collect_form_data(form);
        if config.prevent_submit {
            (config.on_success)(&data);
        } else {
            host.submit(&data);
        }
    } else {
        (config.on_error)(&summary);
        if config.scroll_to_error
            && let Some(first) = summary.first()
        {
            host.scroll_to(first);
        }
    }

    summary
}

/// Build the field-identifier to value mapping in document order.
///
/// Plain fields prefer the cached processed payload over the raw value;
/// radio groups yield the checked member's value; checkbox groups yield a
/// comma-joined list of checked members' values. Fields without a name get
/// a positional `element_<index>` key. Submit controls are skipped.
pub fn collect_form_data(form: &Form) -> FormData {
    let mut data = FormData::new();

    for (index, field) in form.fields().iter().enumerate() {
        if field.kind().is_submit() {
            continue;
        }

        let name = field.field_name();
        match (field.kind(), &name) {
            (FieldKind::Radio, Some(name)) => {
                if !data.contains_key(name) {
                    let value = form
                        .group(name)
                        .find(|f| f.is_checked())
                        .map(|f| f.current_value())
                        .unwrap_or_default();
                    data.insert(name.clone(), value);
                }
            }
            (FieldKind::Checkbox, Some(name)) => {
                if !data.contains_key(name) {
                    let values: Vec<String> = form
                        .group(name)
                        .filter(|f| f.is_checked())
                        .map(|f| f.current_value())
                        .collect();
                    data.insert(name.clone(), values.join(", "));
                }
            }
            _ => {
                let key = name.unwrap_or_else(|| format!("element_{index}"));
                let value = field
                    .cached_value()
                    .unwrap_or_else(|| field.current_value());
                data.insert(key, value);
            }
        }
    }

    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_overwrites_in_place() {
        let mut data = FormData::new();
        data.insert("a", "1");
        data.insert("b", "2");
        data.insert("a", "3");
        let pairs: Vec<(&str, &str)> = data.iter().collect();
        assert_eq!(pairs, vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn serializes_as_ordered_object() {
        let mut data = FormData::new();
        data.insert("name", "ada");
        data.insert("mail", "a@b.co");
        let json = serde_json::to_string(&data).unwrap();
        assert_eq!(json, r#"{"name":"ada","mail":"a@b.co"}"#);
    }

    #[test]
    #[should_panic(expected = "no field named")]
    fn index_panics_on_missing_key() {
        let data = FormData::new();
        let _ = &data["missing"];
    }
}
