//! Action classification.
//!
//! Maps a change's action onto the create/update/delete counters. The action
//! set is owned by the plan format; any value outside it is an error.

use crate::error::ClassifyError;

/// Known plan actions, with their wire values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Nothing to do.
    NoOp,
    /// Create a new resource.
    Create,
    /// Update a resource in place.
    Update,
    /// Destroy a resource.
    Delete,
    /// Destroy, then create a replacement.
    DeleteThenCreate,
    /// Create a replacement, then destroy the original.
    CreateThenDelete,
}

/// Effect of an action on a tally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Counters are untouched.
    None,
    /// Increments `create`.
    Create,
    /// Increments `update`.
    Update,
    /// Increments `delete`.
    Delete,
}

impl Action {
    /// Converts a raw wire value into an action.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifyError::UnrecognizedAction`] for values outside the
    /// known set.
    pub const fn from_raw(value: i32) -> Result<Self, ClassifyError> {
        match value {
            0 => Ok(Self::NoOp),
            1 => Ok(Self::Create),
            3 => Ok(Self::Update),
            5 => Ok(Self::Delete),
            6 => Ok(Self::DeleteThenCreate),
            7 => Ok(Self::CreateThenDelete),
            _ => Err(ClassifyError::UnrecognizedAction { value }),
        }
    }

    /// Returns the wire value of the action.
    #[must_use]
    pub const fn raw(self) -> i32 {
        match self {
            Self::NoOp => 0,
            Self::Create => 1,
            Self::Update => 3,
            Self::Delete => 5,
            Self::DeleteThenCreate => 6,
            Self::CreateThenDelete => 7,
        }
    }

    /// Returns true if the summary cannot fully represent this action.
    ///
    /// Create-then-delete is counted as a delete only; the create half is lost.
    #[must_use]
    pub const fn is_partially_represented(self) -> bool {
        matches!(self, Self::CreateThenDelete)
    }
}

impl TryFrom<i32> for Action {
    type Error = ClassifyError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::from_raw(value)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::NoOp => "NOOP",
            Self::Create => "CREATE",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
            Self::DeleteThenCreate => "DELETE_THEN_CREATE",
            Self::CreateThenDelete => "CREATE_THEN_DELETE",
        };
        write!(f, "{s}")
    }
}

/// Classifies an action into its effect on a tally.
#[must_use]
pub const fn classify(action: Action) -> Effect {
    match action {
        Action::NoOp => Effect::None,
        Action::Create => Effect::Create,
        Action::Update => Effect::Update,
        Action::Delete | Action::DeleteThenCreate | Action::CreateThenDelete => Effect::Delete,
    }
}

/// Classifies a raw wire value.
///
/// # Errors
///
/// Returns [`ClassifyError::UnrecognizedAction`] for unknown values.
pub const fn classify_raw(value: i32) -> Result<(Action, Effect), ClassifyError> {
    match Action::from_raw(value) {
        Ok(action) => Ok((action, classify(action))),
        Err(e) => Err(e),
    }
}
