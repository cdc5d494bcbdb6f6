//! Capability traits for storage and reporting.
//!
//! Implemented by the `roster-storage` and `roster-report` crates
//! respectively. The manager only ever sees these traits.

use crate::error::Result;
use crate::model::Student;

// ---------------------------------------------------------------------------
// Repository trait
// ---------------------------------------------------------------------------

/// Owns an ordered collection of students.
///
/// Insertion order is preserved and duplicates are allowed. Mutating calls
/// take `&mut self`; a shared repository needs one external lock around
/// each call.
pub trait StudentRepository: Send {
    /// Append a student to the end of the collection.
    fn add(&mut self, student: Student) -> Result<()>;

    /// A copy of every stored student, in insertion order.
    fn find_all(&self) -> Result<Vec<Student>>;

    /// The first student whose name equals `name` exactly (case-sensitive).
    ///
    /// Later students with the same name are not reachable through this
    /// lookup.
    fn find_by_name(&self, name: &str) -> Result<Option<Student>>;

    /// Number of stored students.
    fn count(&self) -> Result<usize>;

    /// Remove every student whose name matches case-insensitively and whose
    /// grade is exactly equal to `grade`.
    ///
    /// Returns `Ok(false)` without touching the collection when `name` is
    /// empty or all whitespace, and `Ok(true)` iff at least one student was
    /// removed. Grades are compared with `==`, so a value produced by
    /// arithmetic may not match the stored one.
    fn remove(&mut self, name: &str, grade: f64) -> Result<bool>;
}

// ---------------------------------------------------------------------------
// Report generator trait
// ---------------------------------------------------------------------------

/// Heading written before the per-student lines.
pub const REPORT_HEADER: &str = "=== Student Report ===";

/// Notice written instead of a report when there is nothing to list.
pub const EMPTY_REPORT_NOTICE: &str = "No students to display.";

/// Renders a collection of students as text.
pub trait ReportGenerator: Send + Sync {
    /// Render `students` in the given order.
    ///
    /// An empty slice produces [`EMPTY_REPORT_NOTICE`] and no per-student
    /// lines. Otherwise one line per student is followed by a total count.
    fn generate(&self, students: &[Student]) -> Result<()>;
}
