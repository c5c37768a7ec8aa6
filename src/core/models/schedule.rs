//! `Schedule`: a chosen set of Groups for a single term, as returned by
//! [`crate::core::optimizer::Optimizer::optimize_term`] (§6, §7).

use super::GroupId;
use crate::core::error::Warning;
use serde::{Deserialize, Serialize};

/// A list of Group ids chosen for a term, plus a non-fatal warning when the
/// GA could not fill it. Invariants (no pairwise meeting overlap, credit
/// cap, course-count cap, residency exclusivity) are enforced by the fitness
/// function of the optimizer, not by this type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Chosen group ids.
    pub group_ids: Vec<GroupId>,
    /// Set when `group_ids` is empty (or degenerate) because of
    /// [`Warning::EmptyEligibility`] or [`Warning::NoFeasibleIndividual`].
    pub warning: Option<Warning>,
}

impl Schedule {
    /// Create a new schedule from a list of group ids, with no warning.
    #[must_use]
    pub const fn new(group_ids: Vec<GroupId>) -> Self {
        Self { group_ids, warning: None }
    }

    /// An empty schedule carrying a warning explaining why nothing was
    /// chosen.
    #[must_use]
    pub const fn empty_with_warning(warning: Warning) -> Self {
        Self { group_ids: Vec::new(), warning: Some(warning) }
    }

    /// An empty schedule with no warning attached.
    #[must_use]
    pub const fn empty() -> Self {
        Self { group_ids: Vec::new(), warning: None }
    }

    /// Number of groups chosen.
    #[must_use]
    pub fn len(&self) -> usize {
        self.group_ids.len()
    }

    /// Whether no groups were chosen.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.group_ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_schedule() {
        let s = Schedule::empty();
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
        assert!(s.warning.is_none());
    }

    #[test]
    fn test_schedule_from_ids() {
        let s = Schedule::new(vec![1, 2, 3]);
        assert_eq!(s.len(), 3);
        assert!(!s.is_empty());
    }

    #[test]
    fn test_empty_schedule_with_warning() {
        let s = Schedule::empty_with_warning(Warning::NoFeasibleIndividual);
        assert!(s.is_empty());
        assert_eq!(s.warning, Some(Warning::NoFeasibleIndividual));
    }
}
