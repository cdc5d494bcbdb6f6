//! roster-storage: Student repository implementations.
//!
//! Implements the `StudentRepository` trait with an in-memory list, plus a
//! fault-injecting wrapper for exercising error paths.

pub mod memory;
pub mod mock;

pub use memory::InMemoryStudentRepository;
pub use mock::{FailingRepository, FailureMode};
