use formdom::{find_field, Field, FieldKind, Form, Verdict};

fn sample_form() -> Form {
    Form::new()
        .with(Field::text().id("username").name("username").required(true))
        .with(Field::email().id("mail").name("mail"))
        .with(Field::radio("color").id("color-red").value("red"))
        .with(Field::radio("color").id("color-blue").value("blue"))
        .with(Field::checkbox().id("terms").name("terms").required(true))
        .with(Field::submit().id("go"))
}

// ============================================================================
// Lookup
// ============================================================================

#[test]
fn test_field_lookup_by_id() {
    let form = sample_form();
    assert!(form.field("username").is_some());
    assert!(form.field("missing").is_none());
    assert_eq!(
        find_field(&form, "mail").map(|f| f.kind()),
        Some(FieldKind::Email)
    );
}

#[test]
fn test_document_order_is_insertion_order() {
    let form = sample_form();
    let ids: Vec<&str> = form.fields().iter().map(|f| f.field_id()).collect();
    assert_eq!(
        ids,
        vec!["username", "mail", "color-red", "color-blue", "terms", "go"]
    );
}

// ============================================================================
// Groups
// ============================================================================

#[test]
fn test_group_membership_by_name() {
    let form = sample_form();
    let members: Vec<&str> = form.group("color").map(|f| f.field_id()).collect();
    assert_eq!(members, vec!["color-red", "color-blue"]);
}

#[test]
fn test_group_checked_tracks_any_member() {
    let form = sample_form();
    assert!(!form.group_checked("color"));
    form.field("color-blue").unwrap().set_checked(true);
    assert!(form.group_checked("color"));
}

// ============================================================================
// Shared state
// ============================================================================

#[test]
fn test_verdict_slot_roundtrip() {
    let form = sample_form();
    let field = form.field("username").unwrap();
    assert_eq!(field.verdict(), None);
    field.set_verdict(Some(Verdict::Invalid));
    assert_eq!(field.verdict(), Some(Verdict::Invalid));
    field.set_verdict(Some(Verdict::Valid));
    assert!(field.verdict().unwrap().is_valid());
}

#[test]
fn test_submit_controls_iterator() {
    let form = sample_form();
    let submits: Vec<&str> = form.submit_controls().map(|f| f.field_id()).collect();
    assert_eq!(submits, vec!["go"]);
}
