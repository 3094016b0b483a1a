//! Accept/reject results for editing operations.
//!
//! An edit that is refused hands the caller's value back untouched together
//! with the reason, so the caller can keep using it and surface a message.

/// Result of applying an edit to a caller-owned value
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub enum EditOutcome<T, E> {
    /// The edit was applied, carrying the new value
    Applied(T),
    /// The edit was refused; `unchanged` is the input value as it was
    Rejected { unchanged: T, reason: E },
}

impl<T, E> EditOutcome<T, E> {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }

    pub fn is_rejected(&self) -> bool {
        !self.is_applied()
    }

    /// Value after the edit, or the untouched input if it was rejected
    pub fn value(&self) -> &T {
        match self {
            Self::Applied(value) | Self::Rejected { unchanged: value, .. } => value,
        }
    }

    pub fn reason(&self) -> Option<&E> {
        match self {
            Self::Applied(_) => None,
            Self::Rejected { reason, .. } => Some(reason),
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Self::Applied(value) | Self::Rejected { unchanged: value, .. } => value,
        }
    }

    /// Split into the value and the rejection reason, if any
    pub fn into_parts(self) -> (T, Option<E>) {
        match self {
            Self::Applied(value) => (value, None),
            Self::Rejected { unchanged, reason } => (unchanged, Some(reason)),
        }
    }

    /// Convert into a `Result`, dropping the untouched value on rejection
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Applied(value) => Ok(value),
            Self::Rejected { reason, .. } => Err(reason),
        }
    }

    /// Transform the carried value on both branches
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> EditOutcome<U, E> {
        match self {
            Self::Applied(value) => EditOutcome::Applied(f(value)),
            Self::Rejected { unchanged, reason } => EditOutcome::Rejected {
                unchanged: f(unchanged),
                reason,
            },
        }
    }

    pub fn map_reason<F>(self, f: impl FnOnce(E) -> F) -> EditOutcome<T, F> {
        match self {
            Self::Applied(value) => EditOutcome::Applied(value),
            Self::Rejected { unchanged, reason } => EditOutcome::Rejected {
                unchanged,
                reason: f(reason),
            },
        }
    }
}
