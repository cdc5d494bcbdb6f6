//! In-memory student repository.

use roster_core::error::Result;
use roster_core::model::Student;
use roster_core::traits::StudentRepository;

/// A `Vec`-backed repository. Every lookup is a linear scan.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStudentRepository {
    students: Vec<Student>,
}

impl InMemoryStudentRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StudentRepository for InMemoryStudentRepository {
    fn add(&mut self, student: Student) -> Result<()> {
        tracing::debug!(%student, "storing student");
        self.students.push(student);
        Ok(())
    }

    fn find_all(&self) -> Result<Vec<Student>> {
        Ok(self.students.clone())
    }

    fn find_by_name(&self, name: &str) -> Result<Option<Student>> {
        Ok(self.students.iter().find(|s| s.name() == name).cloned())
    }

    fn count(&self) -> Result<usize> {
        Ok(self.students.len())
    }

    fn remove(&mut self, name: &str, grade: f64) -> Result<bool> {
        if name.trim().is_empty() {
            return Ok(false);
        }

        let before = self.students.len();
        // Exact float equality: 0.1 + 0.2 will not match a stored 0.3.
        self.students
            .retain(|s| !(eq_ignore_case(s.name(), name) && s.grade() == grade));
        let removed = before - self.students.len();

        tracing::debug!(name, grade, removed, "removed matching students");
        Ok(removed > 0)
    }
}

/// Char-by-char case-insensitive equality.
///
/// Two chars match when they are equal, or their simple uppercase forms
/// match, or their simple lowercase forms match. Final sigma and `İ` fold
/// like any other char.
pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    let mut a = a.chars();
    let mut b = b.chars();
    loop {
        match (a.next(), b.next()) {
            (None, None) => return true,
            (Some(x), Some(y)) if chars_eq_ignore_case(x, y) => {}
            _ => return false,
        }
    }
}

fn chars_eq_ignore_case(x: char, y: char) -> bool {
    x == y || simple_upper(x) == simple_upper(y) || simple_lower(x) == simple_lower(y)
}

/// Single-char uppercase mapping; chars that expand (`ß` -> `SS`) map to
/// themselves.
fn simple_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Single-char lowercase mapping.
///
/// `İ` (U+0130) is the only char whose full lowercase mapping expands; its
/// simple mapping is the leading `i`.
fn simple_lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}
