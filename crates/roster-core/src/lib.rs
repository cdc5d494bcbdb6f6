//! roster-core: Student entity, capability traits, and the manager facade.
//!
//! This crate defines the data model, the repository and report traits,
//! and the `StudentManager` that coordinates them. Concrete implementations
//! live in `roster-storage` and `roster-report`.

pub mod error;
pub mod manager;
pub mod model;
pub mod sink;
pub mod traits;

pub use error::{Result, RosterError};
pub use manager::StudentManager;
pub use model::{format_grade, Student};
pub use sink::{BufferSink, OutputSink, StdoutSink};
pub use traits::{ReportGenerator, StudentRepository};
