/// Classification of a field's current value.
///
/// A field that has not been validated yet carries no verdict at all
/// (`Option<Verdict>` on the field), so "unchecked" and "checked valid"
/// stay distinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    Invalid,
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }
}
