//! Status returned by behavior nodes.

/// Result of ticking a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Conditions: the predicate held. Actions: the context was updated.
    Success,

    /// Conditions: the predicate did not hold. Actions: nothing applicable.
    Failure,
}

impl Status {
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }
}

impl From<bool> for Status {
    #[inline]
    fn from(holds: bool) -> Self {
        if holds {
            Status::Success
        } else {
            Status::Failure
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_from_bool() {
        assert_eq!(Status::from(true), Status::Success);
        assert!(Status::from(false).is_failure());
    }
}
