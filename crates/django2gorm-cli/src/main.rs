//! `django2gorm` binary: thin wrapper over [`django2gorm::convert`].

use clap::Parser;
use django2gorm::{ConvertOptions, Input, convert};
use std::{path::PathBuf, process};

///
/// Cli
///

#[derive(Parser)]
#[command(
    name = "django2gorm",
    about = "Build a .go file containing GORM model definitions from a Django models.py"
)]
struct Cli {
    /// Full path to a Django models.py file, or the literal DEMO for the
    /// built-in demo model
    input: String,

    /// Full path to write the .go file to (must not already exist)
    #[arg(default_value = django2gorm::DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Skip the import block and the example main() helper
    #[arg(long)]
    no_helpers: bool,

    /// Do not auto-generate a User model when none is defined
    #[arg(long)]
    skip_user_model: bool,

    /// Do not auto-generate a Group model when none is defined
    #[arg(long)]
    skip_group_model: bool,
}

fn main() {
    let cli = Cli::parse();

    let input = if cli.input == "DEMO" {
        Input::Demo
    } else {
        Input::Path(PathBuf::from(cli.input))
    };

    let opts = ConvertOptions {
        input,
        output: cli.output,
        include_helpers: !cli.no_helpers,
        add_user_model: !cli.skip_user_model,
        add_group_model: !cli.skip_group_model,
    };

    match convert(&opts) {
        Ok(summary) => {
            println!(
                "Output file {} written ({} models)",
                summary.output.display(),
                summary.models
            );
            if let Some(log) = summary.error_log {
                println!(
                    "!! {} construct(s) need manual review, see {}",
                    summary.records,
                    log.display()
                );
            }
        }
        Err(err) => {
            eprintln!("!! {err}");
            process::exit(1);
        }
    }
}
