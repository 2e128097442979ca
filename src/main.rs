use std::path::Path;
use std::process::ExitCode;

use clap::Parser;

use asterion_relabel::log_status;
use asterion_relabel::relabel::{self, GRAPHICS_PRIMITIVE_RENAMES, TARGET_FILE};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "asterion-relabel")]
#[command(version = VERSION)]
#[command(about = "Rename placeholder graphics primitive labels in the Asterion listing")]
struct Cli {}

fn main() -> ExitCode {
    let _cli = Cli::parse();

    log_status!(
        "relabel",
        "Applying {} label renames to {}",
        GRAPHICS_PRIMITIVE_RENAMES.len(),
        TARGET_FILE
    );

    match relabel::relabel_file(Path::new(TARGET_FILE), GRAPHICS_PRIMITIVE_RENAMES) {
        Ok(outcome) => {
            log_status!(
                "relabel",
                "{} occurrences rewritten across {} labels",
                outcome.replacements,
                outcome.labels_renamed
            );
            println!("Updated graphics primitive names in asterion_func_low.asm");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}: {}", err.code(), err);
            ExitCode::FAILURE
        }
    }
}
