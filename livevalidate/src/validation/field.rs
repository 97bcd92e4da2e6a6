//! Per-field verdict computation and label projection.

use formdom::{Field, FieldKind, Form, Verdict};

use super::pattern;
use crate::config::FormConfig;

/// Validate one field, store the verdict on it, and project the state
/// labels. Returns `None` for submit controls, which are never validated.
///
/// Priority order: submit short-circuit, radio groups (the group's checked
/// state decides every member), checkboxes, then the required-empty
/// shortcut and the resolved pattern for everything else.
pub fn validate_field(field: &Field, form: &Form, config: &FormConfig) -> Option<Verdict> {
    if field.kind().is_submit() {
        return None;
    }

    let verdict = classify(field, form);
    field.set_verdict(Some(verdict));
    apply_verdict(field, verdict, config);
    Some(verdict)
}

fn classify(field: &Field, form: &Form) -> Verdict {
    match field.kind() {
        FieldKind::Radio => classify_radio(field, form),
        FieldKind::Checkbox => {
            if !field.is_required() || field.is_checked() {
                Verdict::Valid
            } else {
                Verdict::Invalid
            }
        }
        _ => {
            let value = field.current_value();
            if !field.is_required() && value.is_empty() {
                return Verdict::Valid;
            }
            if pattern::resolve(field).matches(&value) {
                Verdict::Valid
            } else {
                Verdict::Invalid
            }
        }
    }
}

/// The check applies to the named group, not the individual element: the
/// group is required if any member is, and satisfied if any member is
/// checked. Every member gets the same verdict.
fn classify_radio(field: &Field, form: &Form) -> Verdict {
    let (required, checked) = match field.field_name() {
        Some(name) => (
            form.group(&name).any(|f| f.is_required()),
            form.group_checked(&name),
        ),
        None => (field.is_required(), field.is_checked()),
    };

    if !required || checked {
        Verdict::Valid
    } else {
        Verdict::Invalid
    }
}

/// Project a verdict onto the field's class list: the success label
/// replaces the error label or the reverse. Rendering only; the verdict
/// slot stays the source of truth.
pub fn apply_verdict(field: &Field, verdict: Verdict, config: &FormConfig) {
    match verdict {
        Verdict::Valid => {
            field.remove_class(&config.error_class);
            field.add_class(&config.success_class);
        }
        Verdict::Invalid => {
            field.remove_class(&config.success_class);
            field.add_class(&config.error_class);
        }
    }
}
