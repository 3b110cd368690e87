use clap::Parser;
use momrot::cli::{Cli, run};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
