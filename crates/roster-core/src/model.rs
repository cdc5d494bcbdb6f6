//! Core data model types for roster.

use std::fmt;

use crate::error::{Result, RosterError};

/// A student record: a fixed name and a mutable, non-negative grade.
///
/// There is no upper bound on the grade here. Range policies such as 0–100
/// belong to the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    name: String,
    grade: f64,
}

impl Student {
    /// Create a new student.
    ///
    /// Fails with [`RosterError::InvalidArgument`] when `name` is empty or
    /// all whitespace, or when `grade` is negative or NaN. The name is kept
    /// exactly as given.
    pub fn new(name: impl Into<String>, grade: f64) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(RosterError::InvalidArgument(
                "Name cannot be null or empty".into(),
            ));
        }
        check_grade(grade)?;
        Ok(Self { name, grade })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grade(&self) -> f64 {
        self.grade
    }

    /// Replace the grade. On failure the previous grade is kept.
    pub fn set_grade(&mut self, grade: f64) -> Result<()> {
        check_grade(grade)?;
        self.grade = grade;
        Ok(())
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (grade {})", self.name, format_grade(self.grade))
    }
}

fn check_grade(grade: f64) -> Result<()> {
    if grade.is_nan() {
        return Err(RosterError::InvalidArgument(
            "Grade must be a number".into(),
        ));
    }
    if grade < 0.0 {
        return Err(RosterError::InvalidArgument(
            "Grade cannot be negative".into(),
        ));
    }
    Ok(())
}

/// Render a grade for display.
///
/// Whole numbers keep one decimal (`90.0`), everything else uses the
/// shortest representation that round-trips (`85.5`, `72.25`).
pub fn format_grade(grade: f64) -> String {
    if grade.is_finite() && grade.fract() == 0.0 {
        format!("{grade:.1}")
    } else {
        format!("{grade}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn student_creation() {
        let student = Student::new("John Doe", 85.5).unwrap();
        assert_eq!(student.name(), "John Doe");
        assert_eq!(student.grade(), 85.5);
    }

    #[test]
    fn zero_grade_is_valid() {
        let student = Student::new("Ana", 0.0).unwrap();
        assert_eq!(student.grade(), 0.0);
    }

    #[test]
    fn no_upper_bound_on_grade() {
        assert!(Student::new("Ana", 250.0).is_ok());
    }

    #[test]
    fn name_is_not_trimmed() {
        let student = Student::new("  Ana  ", 70.0).unwrap();
        assert_eq!(student.name(), "  Ana  ");
    }

    #[test]
    fn invalid_name() {
        for name in ["", "   ", "\t\n"] {
            let err = Student::new(name, 85.5).unwrap_err();
            assert!(err.is_invalid_argument(), "{name:?} should be rejected");
        }
    }

    #[test]
    fn invalid_grade() {
        let err = Student::new("John", -1.0).unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(err.to_string(), "Grade cannot be negative");
    }

    #[test]
    fn nan_grade_rejected() {
        assert!(Student::new("John", f64::NAN).is_err());
    }

    #[test]
    fn set_grade() {
        let mut student = Student::new("John Doe", 85.5).unwrap();
        student.set_grade(90.0).unwrap();
        assert_eq!(student.grade(), 90.0);
    }

    #[test]
    fn set_invalid_grade_keeps_previous() {
        let mut student = Student::new("John Doe", 85.5).unwrap();
        for bad in [-10.0, f64::NAN] {
            let err = student.set_grade(bad).unwrap_err();
            assert!(err.is_invalid_argument(), "{bad} should be rejected");
            assert_eq!(student.grade(), 85.5);
        }
    }

    #[test]
    fn debug_contains_name_and_grade() {
        let student = Student::new("John Doe", 85.5).unwrap();
        let debug = format!("{student:?}");
        assert!(debug.contains("John Doe"));
        assert!(debug.contains("85.5"));
    }

    #[test]
    fn display_format() {
        let student = Student::new("John Doe", 90.0).unwrap();
        assert_eq!(student.to_string(), "John Doe (grade 90.0)");
    }

    #[test]
    fn grade_formatting() {
        assert_eq!(format_grade(85.5), "85.5");
        assert_eq!(format_grade(90.0), "90.0");
        assert_eq!(format_grade(0.0), "0.0");
        assert_eq!(format_grade(72.25), "72.25");
    }
}
