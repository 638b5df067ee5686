//! Advisory lock per ranking scope.
//!
//! Only one computation may run for a given (division, month, year) at a time.
//! Different scopes never block each other.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use crate::errors::{KepswellError, Result};
use crate::models::rankings::entities::RankingScope;

#[derive(Debug, Default)]
pub struct ScopeLocks {
    active: DashMap<RankingScope, ()>,
}

/// Held for the duration of one run; releases the scope on drop
#[derive(Debug)]
pub struct ScopeGuard<'a> {
    locks: &'a ScopeLocks,
    scope: RankingScope,
}

impl ScopeLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails with `RankingInProgress` if the scope is already held
    pub fn try_acquire(&self, scope: RankingScope) -> Result<ScopeGuard<'_>> {
        match self.active.entry(scope) {
            Entry::Occupied(_) => Err(KepswellError::ranking_in_progress(format!(
                "Ranking for {scope} is already being computed"
            ))),
            Entry::Vacant(slot) => {
                slot.insert(());
                Ok(ScopeGuard { locks: self, scope })
            }
        }
    }

    pub fn is_locked(&self, scope: &RankingScope) -> bool {
        self.active.contains_key(scope)
    }
}

impl Drop for ScopeGuard<'_> {
    fn drop(&mut self) {
        self.locks.active.remove(&self.scope);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Division, Period};

    fn scope(division: Division, month: i32) -> RankingScope {
        RankingScope {
            division,
            period: Period::new(month, 2026).unwrap(),
        }
    }

    #[test]
    fn test_second_acquire_is_rejected_until_release() {
        let locks = ScopeLocks::new();
        let target = scope(Division::Marketing, 0);

        let guard = locks.try_acquire(target).unwrap();
        assert!(locks.is_locked(&target));
        let err = locks.try_acquire(target).unwrap_err();
        assert!(matches!(err, KepswellError::RankingInProgress(_)));

        drop(guard);
        assert!(!locks.is_locked(&target));
        assert!(locks.try_acquire(target).is_ok());
    }

    #[test]
    fn test_scopes_are_independent() {
        let locks = ScopeLocks::new();
        let _marketing = locks.try_acquire(scope(Division::Marketing, 0)).unwrap();

        assert!(locks.try_acquire(scope(Division::Admin, 0)).is_ok());
        assert!(locks.try_acquire(scope(Division::Marketing, 1)).is_ok());
    }
}
