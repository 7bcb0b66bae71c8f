use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "kardex",
    bin_name = "kardex",
    version,
    about = "Interactive library catalog for the terminal",
    long_about = None
)]
pub struct Cli {
    /// Disable colors in all output
    #[arg(long)]
    pub plain: bool,

    /// Suppress informational messages (warnings and errors still print)
    #[arg(short, long)]
    pub quiet: bool,
}
