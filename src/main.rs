use anyhow::Result;
use clap::Parser;

use treedump::cli::{self, Args, CliUtils, RunOutcome, TerminalPrompter};

fn main() -> Result<()> {
    let args = Args::parse();

    treedump::logging::init_logging(args.verbose, args.quiet);

    // The scan always starts from the current working directory
    let working_dir = std::env::current_dir()?;

    match cli::run(&args, &working_dir, &mut TerminalPrompter::new()) {
        Ok(RunOutcome::Saved { path, stats }) => {
            if stats.read_failures > 0 {
                CliUtils::show_warning(
                    &format!("{} file(s) could not be read; see their content in the output", stats.read_failures),
                    args.quiet,
                );
            }
            CliUtils::show_success(&format!("Hierarchy JSON saved to: {}", path.display()), args.quiet);
            if args.stats && !args.quiet {
                println!("\n{}", stats.summary());
            }
            Ok(())
        }
        Ok(RunOutcome::NoExtensions) => {
            println!("{}", cli::NO_EXTENSIONS_MESSAGE);
            Ok(())
        }
        Ok(RunOutcome::NoFilename) => {
            println!("{}", cli::NO_FILENAME_MESSAGE);
            Ok(())
        }
        Err(e) => {
            cli::handle_error(&e);
            std::process::exit(1);
        }
    }
}
