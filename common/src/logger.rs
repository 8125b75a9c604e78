use crate::constants::LOG_LEVEL_ENV;
use chrono::Local;
use colored::*;

/// Line logger shared by every actor. Each actor owns a named instance so
/// interleaved output from the tracker, the view and the dialog stays readable.
#[derive(Debug, Clone)]
pub struct Logger {
    pub name: String,
    pub info_color: Color,
    pub debug_enabled: bool,
}

impl Logger {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_color(name, Color::Green)
    }

    pub fn with_color(name: impl Into<String>, info_color: Color) -> Self {
        let debug_enabled = std::env::var(LOG_LEVEL_ENV)
            .map(|level| level.eq_ignore_ascii_case("debug"))
            .unwrap_or(false);
        Self {
            name: name.into().to_uppercase(),
            info_color,
            debug_enabled,
        }
    }

    fn timestamp() -> String {
        Local::now().format("%H:%M:%S").to_string()
    }

    fn header(&self, level: &str) -> String {
        format!("[{}][{}][{}]", Self::timestamp(), level, self.name)
    }

    pub fn debug(&self, msg: impl AsRef<str>) {
        if !self.debug_enabled {
            return;
        }
        println!(
            "{} {} {}",
            self.header("DEBUG").dimmed(),
            "→".dimmed(),
            msg.as_ref().dimmed()
        );
    }

    pub fn info(&self, msg: impl AsRef<str>) {
        println!(
            "{} {} {}",
            self.header("INFO").bold().color(self.info_color),
            "→".dimmed(),
            msg.as_ref()
        );
    }

    pub fn warn(&self, msg: impl AsRef<str>) {
        println!(
            "{} {} {}",
            self.header("WARN").bold().yellow(),
            "→".dimmed(),
            msg.as_ref()
        );
    }

    pub fn error(&self, msg: impl AsRef<str>) {
        eprintln!(
            "{} {} {}",
            self.header("ERROR").bold().bright_red(),
            "→".dimmed(),
            msg.as_ref()
        );
    }
}
