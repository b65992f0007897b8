//! Terminal output: coloured status lines, plain text or JSON.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::{AnsiColors, OwoColorize, Style};
use serde::Serialize;

use dtgen_core::domain::{DerivedFact, GenerationResult};

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Fact labels rendered as warnings rather than plain information.
const WARNING_LABELS: [&str; 2] = ["Warning", "Conflict"];

/// Writes command results to stdout in the resolved format.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// An explicit `--output-format` wins over `output.format` from config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let requested = if args.output_format == OutputFormat::Auto {
            config.output.format
        } else {
            args.output_format
        };

        let resolved_format = match requested {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            explicit => explicit,
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    /// Unadorned line; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// `✓ <msg>` in green.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.marked('\u{2713}', AnsiColors::Green, msg)
    }

    /// `⚠ <msg>` in yellow.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.marked('\u{26a0}', AnsiColors::Yellow, msg)
    }

    /// `ℹ <msg>` in blue.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.marked('\u{2139}', AnsiColors::Blue, msg)
    }

    fn marked(&self, symbol: char, color: AnsiColors, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("{symbol} {msg}")
        } else {
            let style = Style::new().color(color);
            format!("{} {}", symbol.style(style.bold()), msg.style(style))
        };
        self.term.write_line(&line)
    }

    /// Section title, bold cyan when colours are on.
    pub fn header(&self, text: &str) -> io::Result<()> {
        match (self.quiet, self.no_color) {
            (true, _) => Ok(()),
            (false, true) => self.term.write_line(text),
            (false, false) => self.term.write_line(&text.cyan().bold().to_string()),
        }
    }

    /// Pretty-printed JSON document. Printed even in quiet mode since it is
    /// the command's result rather than commentary.
    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> io::Result<()> {
        let doc = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&doc)
    }

    /// Report a generation: JSON document, or a summary line plus facts.
    pub fn generation(&self, result: &GenerationResult) -> io::Result<()> {
        if self.is_json() {
            return self.json(result);
        }

        let path = result.relative_path.display();
        if result.written {
            self.success(&format!("Created {} {path}", result.kind.display_name()))?;
        } else {
            self.info(&format!(
                "Dry run: would create {} {path} ({} bytes)",
                result.kind.display_name(),
                result.bytes
            ))?;
            self.print("")?;
            self.print(&result.content)?;
        }

        for fact in &result.facts {
            self.fact(fact)?;
        }
        Ok(())
    }

    fn fact(&self, fact: &DerivedFact) -> io::Result<()> {
        let line = format!("{}: {}", fact.label, fact.value);
        if WARNING_LABELS.contains(&fact.label.as_str()) {
            self.warning(&line)
        } else {
            self.print(&format!("  {line}"))
        }
    }

    /// Format after resolving `auto` against the terminal.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }

    pub fn is_json(&self) -> bool {
        self.format() == OutputFormat::Json
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn args(quiet: bool, no_color: bool, output_format: OutputFormat) -> GlobalArgs {
        GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
            output_format,
            project_dir: None,
        }
    }

    fn make_manager(quiet: bool, no_color: bool) -> OutputManager {
        // Human avoids TTY detection in tests.
        OutputManager::new(&args(quiet, no_color, OutputFormat::Human), &AppConfig::default())
    }

    #[test]
    fn quiet_print_is_ok() {
        let out = make_manager(true, true);
        assert!(out.print("hello").is_ok());
    }

    #[test]
    fn no_color_flag_reported() {
        assert!(!make_manager(false, false).no_color);
        assert!(make_manager(false, true).no_color);
    }

    #[test]
    fn plain_format_never_colors() {
        let out = OutputManager::new(
            &args(false, false, OutputFormat::Plain),
            &AppConfig::default(),
        );
        assert!(out.no_color);
        assert_eq!(out.format(), OutputFormat::Plain);
    }

    #[test]
    fn config_format_applies_when_flag_is_auto() {
        let mut config = AppConfig::default();
        config.output.format = OutputFormat::Json;
        let out = OutputManager::new(&args(false, false, OutputFormat::Auto), &config);
        assert!(out.is_json());
    }

    #[test]
    fn flag_format_beats_config() {
        let mut config = AppConfig::default();
        config.output.format = OutputFormat::Json;
        let out = OutputManager::new(&args(false, false, OutputFormat::Plain), &config);
        assert_eq!(out.format(), OutputFormat::Plain);
    }
}
