pub mod classes;
pub mod event;
pub mod field;
pub mod form;
pub mod kind;
pub mod verdict;

pub use classes::ClassList;
pub use event::FieldEvent;
pub use field::Field;
pub use form::{find_field, Form};
pub use kind::FieldKind;
pub use verdict::Verdict;
