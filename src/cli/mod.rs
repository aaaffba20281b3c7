mod handlers;
pub mod parse;

use clap::Parser;
pub use parse::Cli;

use crate::core::error::AxisError;

/// # Errors
///
/// Propagates whatever the selected subcommand fails with.
pub fn run() -> Result<(), AxisError> {
    let cli = parse::Cli::parse();
    match cli.cmd {
        parse::Command::Range(a) => handlers::range(&a),
        parse::Command::Scan(a) => handlers::scan(&a),
        parse::Command::Examples => {
            handlers::examples();
            Ok(())
        }
    }
}
