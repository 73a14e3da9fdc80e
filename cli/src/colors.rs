use colored::*;

pub struct ColorScheme;

impl ColorScheme {
    pub fn new(use_colors: bool) -> Self {
        if !use_colors {
            colored::control::set_override(false);
        }
        Self
    }

    pub fn wall(&self, text: &str) -> ColoredString {
        text.bright_black()
    }

    pub fn open(&self, text: &str) -> ColoredString {
        text.normal()
    }

    pub fn endpoint(&self, text: &str) -> ColoredString {
        text.yellow().bold()
    }

    pub fn path(&self, text: &str) -> ColoredString {
        text.green().bold()
    }

    pub fn explored(&self, text: &str) -> ColoredString {
        text.cyan()
    }

    pub fn cell(&self, text: &str) -> ColoredString {
        text.yellow()
    }

    pub fn success(&self, text: &str) -> ColoredString {
        text.green()
    }

    pub fn error(&self, text: &str) -> ColoredString {
        text.red()
    }

    pub fn number(&self, text: &str) -> ColoredString {
        text.green()
    }

    pub fn stats(&self, text: &str) -> ColoredString {
        text.blue()
    }
}
