//! Fault-injecting repository for testing error paths.

use roster_core::error::{Result, RosterError};
use roster_core::model::Student;
use roster_core::traits::StudentRepository;

use crate::memory::InMemoryStudentRepository;

/// Which operations a [`FailingRepository`] should fail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FailureMode {
    pub on_add: bool,
    pub on_find_all: bool,
    pub on_remove: bool,
}

/// A repository that simulates a broken storage backend.
///
/// Operations not selected in its [`FailureMode`] are delegated to an
/// in-memory repository, so partially broken backends can be modelled.
#[derive(Debug, Default)]
pub struct FailingRepository {
    inner: InMemoryStudentRepository,
    mode: FailureMode,
    failures: u32,
}

impl FailingRepository {
    pub fn new(mode: FailureMode) -> Self {
        Self {
            inner: InMemoryStudentRepository::new(),
            mode,
            failures: 0,
        }
    }

    /// Fail every `add` call.
    pub fn failing_add() -> Self {
        Self::new(FailureMode {
            on_add: true,
            ..Default::default()
        })
    }

    /// Fail every `find_all` call.
    pub fn failing_find_all() -> Self {
        Self::new(FailureMode {
            on_find_all: true,
            ..Default::default()
        })
    }

    /// Fail every `remove` call.
    pub fn failing_remove() -> Self {
        Self::new(FailureMode {
            on_remove: true,
            ..Default::default()
        })
    }

    /// Number of injected failures so far. Only mutating calls are counted.
    pub fn failure_count(&self) -> u32 {
        self.failures
    }
}

impl StudentRepository for FailingRepository {
    fn add(&mut self, student: Student) -> Result<()> {
        if self.mode.on_add {
            self.failures += 1;
            return Err(RosterError::Storage("Database connection lost".into()));
        }
        self.inner.add(student)
    }

    fn find_all(&self) -> Result<Vec<Student>> {
        if self.mode.on_find_all {
            return Err(RosterError::Storage("Database query failed".into()));
        }
        self.inner.find_all()
    }

    fn find_by_name(&self, name: &str) -> Result<Option<Student>> {
        self.inner.find_by_name(name)
    }

    fn count(&self) -> Result<usize> {
        self.inner.count()
    }

    fn remove(&mut self, name: &str, grade: f64) -> Result<bool> {
        if self.mode.on_remove {
            self.failures += 1;
            return Err(RosterError::Storage("Database write failed".into()));
        }
        self.inner.remove(name, grade)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failing_add() {
        let mut repo = FailingRepository::failing_add();
        let err = repo.add(Student::new("A", 1.0).unwrap()).unwrap_err();
        assert!(matches!(err, RosterError::Storage(_)));
        assert_eq!(repo.count().unwrap(), 0);
        assert_eq!(repo.failure_count(), 1);
    }

    #[test]
    fn failing_find_all_still_adds() {
        let mut repo = FailingRepository::failing_find_all();
        repo.add(Student::new("A", 1.0).unwrap()).unwrap();
        assert_eq!(repo.count().unwrap(), 1);
        assert!(repo.find_all().is_err());
    }

    #[test]
    fn failing_remove() {
        let mut repo = FailingRepository::failing_remove();
        repo.add(Student::new("A", 1.0).unwrap()).unwrap();
        assert!(repo.remove("A", 1.0).is_err());
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn default_mode_delegates() {
        let mut repo = FailingRepository::default();
        repo.add(Student::new("A", 1.0).unwrap()).unwrap();
        assert!(repo.find_by_name("A").unwrap().is_some());
        assert!(repo.remove("a", 1.0).unwrap());
        assert_eq!(repo.failure_count(), 0);
    }
}
