pub mod demo;
pub mod init;
pub mod menu;

use std::sync::Arc;

use roster_core::manager::StudentManager;
use roster_core::sink::OutputSink;
use roster_report::TextReportGenerator;
use roster_storage::InMemoryStudentRepository;

/// Wire the default in-memory repository and text report to `sink`.
fn default_manager(sink: Arc<dyn OutputSink>) -> StudentManager {
    StudentManager::new(
        Box::new(InMemoryStudentRepository::new()),
        Box::new(TextReportGenerator::new(sink.clone())),
        sink,
    )
}
