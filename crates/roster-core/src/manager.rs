//! Coordination facade over a repository and a report generator.
//!
//! The manager is the only API the console menu talks to. It validates
//! nothing itself: entity construction raises `InvalidArgument`, and any
//! repository failure is handed back to the caller unchanged.

use std::sync::Arc;

use crate::error::Result;
use crate::model::Student;
use crate::sink::OutputSink;
use crate::traits::{ReportGenerator, StudentRepository};

/// Confirmation written after a successful add.
pub const STUDENT_ADDED_NOTICE: &str = "Student added.";

/// Fixed composition of one repository and one report generator.
pub struct StudentManager {
    repository: Box<dyn StudentRepository>,
    reporter: Box<dyn ReportGenerator>,
    sink: Arc<dyn OutputSink>,
}

impl StudentManager {
    pub fn new(
        repository: Box<dyn StudentRepository>,
        reporter: Box<dyn ReportGenerator>,
        sink: Arc<dyn OutputSink>,
    ) -> Self {
        Self {
            repository,
            reporter,
            sink,
        }
    }

    /// Build a student, store it, and confirm through the sink.
    pub fn add_student(&mut self, name: &str, grade: f64) -> Result<()> {
        let student = Student::new(name, grade)?;
        tracing::debug!(%student, "adding student");
        self.repository.add(student)?;
        self.sink.write_line(STUDENT_ADDED_NOTICE)?;
        Ok(())
    }

    /// Render every stored student through the report generator.
    pub fn list_students(&self) -> Result<()> {
        let students = self.repository.find_all()?;
        tracing::debug!(count = students.len(), "listing students");
        self.reporter.generate(&students)
    }

    /// Remove all students matching `name` (case-insensitive) and `grade`.
    pub fn remove_student(&mut self, name: &str, grade: f64) -> Result<bool> {
        let removed = self.repository.remove(name, grade)?;
        tracing::debug!(name, grade, removed, "remove requested");
        Ok(removed)
    }
}
