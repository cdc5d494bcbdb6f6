//! Plain text report generator.
//!
//! Writes one line per student followed by a total, through whatever sink
//! it was constructed with.

use std::sync::Arc;

use roster_core::error::Result;
use roster_core::model::{format_grade, Student};
use roster_core::sink::OutputSink;
use roster_core::traits::{ReportGenerator, EMPTY_REPORT_NOTICE, REPORT_HEADER};

/// Line-per-student text report.
pub struct TextReportGenerator {
    sink: Arc<dyn OutputSink>,
}

impl TextReportGenerator {
    pub fn new(sink: Arc<dyn OutputSink>) -> Self {
        Self { sink }
    }
}

/// Format a single report line for a student.
pub fn student_line(student: &Student) -> String {
    format!(
        "Student: {}, Grade: {}",
        student.name(),
        format_grade(student.grade())
    )
}

impl ReportGenerator for TextReportGenerator {
    fn generate(&self, students: &[Student]) -> Result<()> {
        if students.is_empty() {
            self.sink.write_line(EMPTY_REPORT_NOTICE)?;
            return Ok(());
        }

        self.sink.write_line(REPORT_HEADER)?;
        for student in students {
            self.sink.write_line(&student_line(student))?;
        }
        self.sink
            .write_line(&format!("Total students: {}", students.len()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::sink::BufferSink;

    fn generator() -> (TextReportGenerator, BufferSink) {
        let sink = BufferSink::new();
        (TextReportGenerator::new(Arc::new(sink.clone())), sink)
    }

    #[test]
    fn empty_collection_prints_notice_only() {
        let (report, sink) = generator();
        report.generate(&[]).unwrap();
        assert_eq!(sink.lines(), vec![EMPTY_REPORT_NOTICE]);
    }

    #[test]
    fn two_students() {
        let (report, sink) = generator();
        let students = vec![
            Student::new("John Doe", 85.5).unwrap(),
            Student::new("Jane Smith", 90.0).unwrap(),
        ];
        report.generate(&students).unwrap();

        let lines = sink.lines();
        assert_eq!(
            lines,
            vec![
                REPORT_HEADER,
                "Student: John Doe, Grade: 85.5",
                "Student: Jane Smith, Grade: 90.0",
                "Total students: 2",
            ]
        );
        let per_item = lines.iter().filter(|l| l.starts_with("Student: ")).count();
        assert_eq!(per_item, 2);
    }

    #[test]
    fn keeps_given_order() {
        let (report, sink) = generator();
        let students = vec![
            Student::new("Zed", 1.0).unwrap(),
            Student::new("Amy", 2.0).unwrap(),
        ];
        report.generate(&students).unwrap();
        let lines = sink.lines();
        assert!(lines[1].contains("Zed"));
        assert!(lines[2].contains("Amy"));
    }

    #[test]
    fn input_is_untouched() {
        let (report, _) = generator();
        let students = vec![Student::new("John Doe", 85.5).unwrap()];
        let before = students.clone();
        report.generate(&students).unwrap();
        assert_eq!(students, before);
    }
}
