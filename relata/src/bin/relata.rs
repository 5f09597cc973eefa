//! relata - character relation-bag extraction CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();
    relata::cli::run()
}
