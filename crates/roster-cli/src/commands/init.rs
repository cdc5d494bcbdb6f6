//! The `roster init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("roster.toml").exists() {
        println!("roster.toml already exists, skipping.");
    } else {
        std::fs::write("roster.toml", SAMPLE_CONFIG)?;
        println!("Created roster.toml");
    }

    println!("\nNext steps:");
    println!("  1. Adjust the grade range in roster.toml if needed");
    println!("  2. Run: roster");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# roster configuration
#
# Input rules applied by the console menu. Override the range with
# ROSTER_MIN_GRADE / ROSTER_MAX_GRADE.

min_grade = 0.0
max_grade = 100.0
letters_only_names = true
"#;
