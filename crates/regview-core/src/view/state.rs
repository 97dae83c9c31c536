use std::convert::Infallible;

/// A state value that can produce its successor from one field assignment.
pub trait Patch: Sized {
    /// One assignable field together with its new value
    type Field;

    fn apply(self, field: Self::Field) -> Self;
}

/// Description of a pending state change
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateDelta<F> {
    Single(F),
    Multi(Vec<F>),
}

impl<F> StateDelta<F> {
    pub fn apply_to<S>(self, state: S) -> S
    where
        S: Patch<Field = F>,
    {
        match self {
            StateDelta::Single(field) => state.apply(field),
            StateDelta::Multi(fields) => fields
                .into_iter()
                .fold(state, |state, field| state.apply(field)),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, StateDelta::Multi(fields) if fields.is_empty())
    }
}

/// State of elements that keep nothing of their own
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmptyState;

impl EmptyState {
    /// Initializer for stateless components
    pub fn init<P>(_props: &P) -> Self {
        EmptyState
    }
}

impl Patch for EmptyState {
    type Field = Infallible;

    fn apply(self, field: Infallible) -> Self {
        match field {}
    }
}
