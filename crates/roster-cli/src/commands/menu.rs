//! The `roster menu` command (also the default).

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use roster_core::sink::{OutputSink, StdoutSink};

use crate::config::load_config_from;
use crate::menu::ConsoleMenu;

pub fn execute(config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    config.validate()?;
    tracing::info!(?config, "starting console menu");

    let sink: Arc<dyn OutputSink> = Arc::new(StdoutSink);
    let manager = super::default_manager(sink.clone());
    let stdin = std::io::stdin().lock();

    ConsoleMenu::new(manager, stdin, sink, config).run()
}
