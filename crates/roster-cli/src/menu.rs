//! Interactive console menu.
//!
//! Reads commands line by line from any `BufRead` and writes everything
//! through the shared output sink, so a whole session can be scripted.

use std::io::BufRead;
use std::sync::Arc;

use anyhow::Result;
use comfy_table::Table;

use roster_core::manager::StudentManager;
use roster_core::model::format_grade;
use roster_core::sink::OutputSink;

use crate::config::RosterConfig;

/// Outcome of reading one field from the user.
enum Field<T> {
    Value(T),
    /// Input was rejected and an error was already shown.
    Rejected,
    /// Input ended.
    Eof,
}

/// Whether the main loop should keep going.
#[derive(PartialEq)]
enum Flow {
    Continue,
    Quit,
}

pub struct ConsoleMenu<I> {
    manager: StudentManager,
    input: I,
    sink: Arc<dyn OutputSink>,
    config: RosterConfig,
}

impl<I: BufRead> ConsoleMenu<I> {
    pub fn new(
        manager: StudentManager,
        input: I,
        sink: Arc<dyn OutputSink>,
        config: RosterConfig,
    ) -> Self {
        Self {
            manager,
            input,
            sink,
            config,
        }
    }

    /// Run the menu until the user picks "Exit" or input ends.
    pub fn run(&mut self) -> Result<()> {
        self.say(&banner("Student Management System"))?;

        loop {
            self.say(&main_menu())?;
            self.say("Select an option:")?;

            let Some(line) = self.read_line()? else {
                break;
            };
            let flow = match line.trim().parse::<u32>() {
                Ok(1) => self.register_student()?,
                Ok(2) => self.list_students()?,
                Ok(3) => self.remove_student()?,
                Ok(4) => Flow::Quit,
                _ => {
                    self.error("Invalid option. Please choose 1, 2, 3 or 4.")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Quit {
                break;
            }
        }

        self.say(&banner("Thanks for using the system! Goodbye."))
    }

    fn register_student(&mut self) -> Result<Flow> {
        self.say("")?;
        self.say("=== Register Student ===")?;
        self.say(&validation_rules(&self.config))?;

        let name = match self.read_name()? {
            Field::Value(name) => name,
            Field::Rejected => return Ok(Flow::Continue),
            Field::Eof => return Ok(Flow::Quit),
        };
        let grade = match self.read_grade("Enter the grade:")? {
            Field::Value(grade) => grade,
            Field::Rejected => return Ok(Flow::Continue),
            Field::Eof => return Ok(Flow::Quit),
        };

        match self.manager.add_student(&name, grade) {
            Ok(()) => self.success(&format!(
                "✓ Student registered: {name} (Grade: {})",
                format_grade(grade)
            ))?,
            Err(e) if e.is_invalid_argument() => self.error(&e.to_string())?,
            Err(e) => {
                tracing::warn!(error = %e, "failed to register student");
                self.error(&format!("Unexpected error: {e}"))?
            }
        }
        Ok(Flow::Continue)
    }

    fn list_students(&mut self) -> Result<Flow> {
        self.say("")?;
        self.say("=== Student List ===")?;
        if let Err(e) = self.manager.list_students() {
            tracing::warn!(error = %e, "failed to list students");
            self.error(&format!("Failed to list students: {e}"))?;
        }
        Ok(Flow::Continue)
    }

    fn remove_student(&mut self) -> Result<Flow> {
        self.say("")?;
        self.say("=== Remove Student ===")?;
        self.say("ℹ  If several students share a name,")?;
        self.say("   give the grade as well to pick the right one.")?;

        let name = match self.read_name()? {
            Field::Value(name) => name,
            Field::Rejected => return Ok(Flow::Continue),
            Field::Eof => return Ok(Flow::Quit),
        };
        let grade = match self.read_grade("Enter the student's grade:")? {
            Field::Value(grade) => grade,
            Field::Rejected => return Ok(Flow::Continue),
            Field::Eof => return Ok(Flow::Quit),
        };

        let shown = format_grade(grade);
        match self.manager.remove_student(&name, grade) {
            Ok(true) => self.success(&format!("✓ Student removed: {name} (Grade: {shown})"))?,
            Ok(false) => self.error(&format!(
                "⚠ No student found with name '{name}' and grade {shown}"
            ))?,
            Err(e) => {
                tracing::warn!(error = %e, "failed to remove student");
                self.error(&format!("Failed to remove student: {e}"))?
            }
        }
        Ok(Flow::Continue)
    }

    fn read_name(&mut self) -> Result<Field<String>> {
        self.say("Enter the student's name:")?;
        let Some(line) = self.read_line()? else {
            return Ok(Field::Eof);
        };

        let name = line.trim();
        if name.is_empty() {
            self.error("Name cannot be empty.")?;
            return Ok(Field::Rejected);
        }
        if self.config.letters_only_names && !is_letters_and_spaces(name) {
            self.error("Name may only contain letters and spaces.")?;
            return Ok(Field::Rejected);
        }
        Ok(Field::Value(name.to_string()))
    }

    fn read_grade(&mut self, prompt: &str) -> Result<Field<f64>> {
        self.say(prompt)?;
        let Some(line) = self.read_line()? else {
            return Ok(Field::Eof);
        };

        let grade = match line.trim().parse::<f64>() {
            Ok(g) if g.is_finite() => g,
            _ => {
                self.error("Grade must be a valid number.")?;
                return Ok(Field::Rejected);
            }
        };
        if grade < self.config.min_grade || grade > self.config.max_grade {
            self.error(&format!(
                "Grade must be between {} and {}. Value entered: {}",
                self.config.min_grade,
                self.config.max_grade,
                format_grade(grade)
            ))?;
            return Ok(Field::Rejected);
        }
        Ok(Field::Value(grade))
    }

    /// Next input line without its terminator, or `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            tracing::debug!("input closed");
            return Ok(None);
        }
        let trimmed = buf.trim_end_matches(['\n', '\r']).len();
        buf.truncate(trimmed);
        Ok(Some(buf))
    }

    fn say(&self, line: &str) -> Result<()> {
        self.sink.write_line(line)?;
        Ok(())
    }

    fn success(&self, message: &str) -> Result<()> {
        self.say("")?;
        self.say(message)
    }

    fn error(&self, message: &str) -> Result<()> {
        self.say("")?;
        self.say(&format!("✗ ERROR: {message}"))
    }
}

fn is_letters_and_spaces(name: &str) -> bool {
    name.chars().all(|c| c.is_alphabetic() || c == ' ')
}

fn banner(text: &str) -> String {
    let mut table = Table::new();
    table.add_row(vec![text]);
    table.to_string()
}

fn main_menu() -> String {
    let mut table = Table::new();
    table.set_header(vec!["MAIN MENU"]);
    for item in [
        "1. Register student",
        "2. List students",
        "3. Remove student",
        "4. Exit",
    ] {
        table.add_row(vec![item]);
    }
    table.to_string()
}

fn validation_rules(config: &RosterConfig) -> String {
    let mut table = Table::new();
    table.set_header(vec!["Field", "Rules"]);
    let name_rules = if config.letters_only_names {
        "✓ Letters and spaces only\n✗ No digits (e.g. John123)\n✗ No symbols (@, #, ...)\n✓ Duplicate names allowed"
    } else {
        "✓ Any non-empty text\n✓ Duplicate names allowed"
    };
    table.add_row(vec!["Name".to_string(), name_rules.to_string()]);
    table.add_row(vec![
        "Grade".to_string(),
        format!(
            "✓ Number between {} and {}\n✗ Values outside that range",
            config.min_grade, config.max_grade
        ),
    ]);
    table.to_string()
}
