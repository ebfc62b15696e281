use clap::Parser;
use user_management::cli::{self, Cli, Command};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Validate(args) => cli::validate::run(args),
    }
}
