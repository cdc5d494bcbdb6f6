//! The `roster demo` command.

use std::sync::Arc;

use anyhow::Result;

use roster_core::sink::{OutputSink, StdoutSink};

pub fn execute() -> Result<()> {
    let sink: Arc<dyn OutputSink> = Arc::new(StdoutSink);
    let mut manager = super::default_manager(sink);

    manager.add_student("John Doe", 85.5)?;
    manager.list_students()?;
    Ok(())
}
