//! Command-line interface module

use clap::Parser;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::error::{ScanError, ScanErrorKind, ScanResult};
use crate::formatter::{save_tree, OutputConfig};
use crate::scanner::filter::DEFAULT_EXCLUSION_MARKER;
use crate::scanner::{ScanConfig, ScanStats, Scanner};

pub mod path_mapping;

pub const EXTENSIONS_PROMPT: &str = "Enter file extensions (comma-separated, e.g.: .py, .txt)";
pub const FILENAME_PROMPT: &str = "Enter the output filename (without extension)";
pub const NO_EXTENSIONS_MESSAGE: &str = "No valid extensions entered. Exiting.";
pub const NO_FILENAME_MESSAGE: &str = "No output filename provided. Exiting.";

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "treedump")]
#[command(about = "Dump the current directory tree, with matching file contents, to a JSON text file")]
#[command(version)]
#[command(long_about = None)]
pub struct Args {
    /// Comma-separated file extensions to include (prompted for if omitted)
    #[arg(short, long)]
    pub extensions: Option<String>,

    /// Output file name without extension; `.txt` is appended (prompted for if omitted)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Skip every directory whose path contains this text
    #[arg(long, default_value = DEFAULT_EXCLUSION_MARKER)]
    pub exclude: String,

    /// Keep raw filesystem order instead of sorting entries by name
    #[arg(long)]
    pub unsorted: bool,

    /// Output scan statistics
    #[arg(long)]
    pub stats: bool,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(long)]
    pub quiet: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            extensions: None,
            output: None,
            exclude: DEFAULT_EXCLUSION_MARKER.to_string(),
            unsorted: false,
            stats: false,
            verbose: false,
            quiet: false,
        }
    }
}

/// Source of interactive answers
pub trait Prompter {
    /// Ask `message` and return the raw answer (possibly empty)
    fn prompt(&mut self, message: &str) -> ScanResult<String>;
}

/// How prompts are answered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptMode {
    /// dialoguer line editor; it draws on stderr and reads keys from the terminal
    Interactive,
    /// Plain line reads from stdin, so piped answers are honoured
    Lines,
}

impl PromptMode {
    /// Interactive only when answers come from a terminal and there is a
    /// terminal to draw on. Piped stdin always reads lines.
    pub fn select(stdin_is_term: bool, stderr_is_term: bool) -> Self {
        if stdin_is_term && stderr_is_term {
            PromptMode::Interactive
        } else {
            PromptMode::Lines
        }
    }

    pub fn detect() -> Self {
        Self::select(
            std::io::IsTerminal::is_terminal(&std::io::stdin()),
            console::Term::stderr().is_term(),
        )
    }
}

/// Prompts through dialoguer on a terminal, or with plain line reads from
/// stdin otherwise.
#[derive(Debug)]
pub struct TerminalPrompter {
    mode: PromptMode,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self::with_mode(PromptMode::detect())
    }

    pub fn with_mode(mode: PromptMode) -> Self {
        Self { mode }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn prompt(&mut self, message: &str) -> ScanResult<String> {
        if self.mode == PromptMode::Interactive {
            return dialoguer::Input::<String>::new()
                .with_prompt(message)
                .allow_empty(true)
                .interact_text()
                .map_err(|e| ScanError::new(ScanErrorKind::prompt(e.to_string())));
        }

        let mut stdout = std::io::stdout();
        write!(stdout, "{}: ", message)
            .and_then(|_| stdout.flush())
            .map_err(|e| ScanError::new(ScanErrorKind::prompt(e.to_string())))?;

        let mut line = String::new();
        std::io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| ScanError::new(ScanErrorKind::prompt(e.to_string())))?;
        Ok(line)
    }
}

/// What a run ended with
#[derive(Debug, Clone)]
pub enum RunOutcome {
    /// The tree was written to `path`
    Saved { path: PathBuf, stats: ScanStats },
    /// No usable extension was supplied; nothing written
    NoExtensions,
    /// No output name was supplied; nothing written
    NoFilename,
}

/// Resolved configuration for one run
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub scan: ScanConfig,
    pub output: OutputConfig,
}

impl CliConfig {
    /// Build the run configuration from arguments and the answers for
    /// extensions and output name. Returns the early-exit outcome when
    /// either answer is unusable.
    pub fn resolve(
        args: &Args,
        extensions_input: &str,
        output_name: &str,
        working_dir: &Path,
    ) -> Result<Self, RunOutcome> {
        let scan = ScanConfig::from_extension_list(extensions_input)
            .with_exclusion_marker(args.exclude.clone())
            .with_sorting(!args.unsorted);
        if let Err(reason) = scan.validate() {
            tracing::info!(%reason, "extension list rejected");
            return Err(RunOutcome::NoExtensions);
        }

        let output = OutputConfig::new(output_name.trim(), working_dir);
        if let Err(reason) = output.validate() {
            tracing::info!(%reason, "output name rejected");
            return Err(RunOutcome::NoFilename);
        }

        Ok(Self { scan, output })
    }
}

/// Gather answers (from flags or prompts), scan `working_dir` and save the
/// tree into it.
pub fn run(args: &Args, working_dir: &Path, prompter: &mut dyn Prompter) -> ScanResult<RunOutcome> {
    let extensions_input = match &args.extensions {
        Some(list) => list.clone(),
        None => prompter.prompt(EXTENSIONS_PROMPT)?,
    };
    // Checked before the filename prompt so a bad list never asks for a name
    if let Err(reason) = ScanConfig::from_extension_list(&extensions_input).validate() {
        tracing::info!(%reason, "extension list rejected");
        return Ok(RunOutcome::NoExtensions);
    }

    let output_name = match &args.output {
        Some(name) => name.clone(),
        None => prompter.prompt(FILENAME_PROMPT)?,
    };

    let config = match CliConfig::resolve(args, &extensions_input, &output_name, working_dir) {
        Ok(config) => config,
        Err(outcome) => return Ok(outcome),
    };
    tracing::debug!(extensions = ?config.scan.extensions, "resolved configuration");

    let outcome = Scanner::new(config.scan).scan(working_dir)?;
    let path = save_tree(&outcome.nodes, &config.output)?;

    Ok(RunOutcome::Saved {
        path,
        stats: outcome.stats,
    })
}

/// CLI utilities and helpers
pub struct CliUtils;

impl CliUtils {
    /// Show a success message (if not in quiet mode)
    pub fn show_success(message: &str, quiet: bool) {
        if !quiet {
            println!("{} {}", console::style("✓").green(), message);
        }
    }

    /// Show an error message
    pub fn show_error(message: &str) {
        eprintln!("{} {}", console::style("✗").red(), message);
    }

    /// Show a warning message (if not in quiet mode)
    pub fn show_warning(message: &str, quiet: bool) {
        if !quiet {
            eprintln!("{} {}", console::style("⚠").yellow(), message);
        }
    }
}

/// Handle CLI errors with user-friendly messages
pub fn handle_error(error: &ScanError) {
    CliUtils::show_error(&error.user_message());

    if let ScanErrorKind::ListDirectory { .. } = error.kind() {
        eprintln!("\nTip: Use --exclude to skip directories you cannot read");
    }
}
