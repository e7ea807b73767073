use clap::Parser;

/// Takes no arguments: the directory holding the executable is scanned and the summary
/// is written next to it. Only `--help` and `--version` are accepted.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Flatten a project's relevant source files into a single summary text file"
)]
pub struct Cli {}
