//! Console reporting.
//!
//! All output goes through a [`Reporter`] carrying an explicit
//! [`Verbosity`], so library callers and tests decide what gets printed.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;

use crate::annotation::strip_terminator;
use crate::transform::Toggle;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// How much the tool prints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// Nothing on stdout.
    Silent,
    /// One line per switched line plus a summary.
    #[default]
    Default,
    /// Also the new line content and every file opened or written.
    Verbose,
}

impl Verbosity {
    /// `silent` wins over `verbose` when both are given.
    pub fn from_flags(silent: bool, verbose: bool) -> Self {
        match (silent, verbose) {
            (true, _) => Verbosity::Silent,
            (false, true) => Verbosity::Verbose,
            (false, false) => Verbosity::Default,
        }
    }
}

/// Totals printed at the end of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub files_scanned: usize,
    pub files_changed: usize,
    pub activated: usize,
    pub deactivated: usize,
}

/// Writes progress and results to `W` according to the verbosity.
pub struct Reporter<W: Write> {
    verbosity: Verbosity,
    writer: W,
}

impl Reporter<io::Stdout> {
    pub fn stdout(verbosity: Verbosity) -> Self {
        Self::new(verbosity, io::stdout())
    }
}

impl Reporter<io::Sink> {
    /// A reporter that prints nothing.
    pub fn silent() -> Self {
        Self::new(Verbosity::Silent, io::sink())
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(verbosity: Verbosity, writer: W) -> Self {
        Self { verbosity, writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Reports a switched line: `<path>:L<n> activated`, and in verbose mode
    /// the resulting line below it.
    pub fn line_switched(&mut self, path: &Path, line_no: usize, toggle: Toggle, new_line: &str) {
        let label = match toggle {
            Toggle::Activated => toggle.to_string().green(),
            Toggle::Deactivated => toggle.to_string().yellow(),
        };
        self.info(format_args!("{}:L{} {}", path.display(), line_no, label));
        self.debug(format_args!("    {}", strip_terminator(new_line)));
    }

    pub fn config_loaded(&mut self, path: &Path) {
        self.debug(format_args!("{} {}", "Using config".dimmed(), path.display()));
    }

    pub fn opening_file(&mut self, path: &Path) {
        self.debug(format_args!("{} {}", "Opening file".dimmed(), path.display()));
    }

    pub fn writing_file(&mut self, path: &Path) {
        self.debug(format_args!("{} {}", "Writing file".dimmed(), path.display()));
    }

    /// Prints the closing summary. `dry_run` switches the wording to "Would ...".
    pub fn summary(&mut self, env: &str, summary: &Summary, dry_run: bool) {
        if summary.activated == 0 && summary.deactivated == 0 {
            self.info(format_args!(
                "{} No lines to switch for environment '{}' ({} file(s) scanned).",
                SUCCESS_MARK.green(),
                env,
                summary.files_scanned
            ));
            return;
        }

        if dry_run {
            self.info(format_args!(
                "{} activate {} line(s) and deactivate {} line(s) in {} file(s).",
                "Would".yellow().bold(),
                summary.activated,
                summary.deactivated,
                summary.files_changed
            ));
            self.info(format_args!(
                "Run without {} to write these changes.",
                "--dry-run".cyan()
            ));
        } else {
            self.info(format_args!(
                "{} Activated {} line(s) and deactivated {} line(s) in {} file(s).",
                SUCCESS_MARK.green(),
                summary.activated,
                summary.deactivated,
                summary.files_changed
            ));
        }
    }

    fn info(&mut self, args: std::fmt::Arguments<'_>) {
        if self.verbosity >= Verbosity::Default {
            self.emit(args);
        }
    }

    fn debug(&mut self, args: std::fmt::Arguments<'_>) {
        if self.verbosity == Verbosity::Verbose {
            self.emit(args);
        }
    }

    fn emit(&mut self, args: std::fmt::Arguments<'_>) {
        // Console output is best effort; a closed stdout must not abort a rewrite.
        let _ = writeln!(self.writer, "{}", args);
    }
}
