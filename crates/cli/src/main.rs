use std::process::ExitCode;

use clap::Parser;

mod commands;
mod printer;

use commands::ListArgs;
use myls_runtime::logging;

#[derive(Debug, Parser)]
#[command(
    name = "myls",
    version,
    about = "Describe files in detail: owner, group, type, permissions, size, inode, device and times"
)]
pub struct Cli {
    #[command(flatten)]
    pub args: ListArgs,
}

fn main() -> ExitCode {
    logging::init().ok();

    let cli = Cli::parse();
    commands::list::run(cli.args)
}
