use clap::{ArgAction, Parser};

use crate::pass::CharClass;
use crate::terminal::Theme;

/// Password generator with a length-based strength rating.
///
/// Run without arguments on a terminal to open the interactive screen.
#[derive(Debug, Parser)]
#[command(name = "strongpass", version)]
pub struct Args {
    /// Characters per password (1-50; defaults to the saved length)
    #[arg(short, long)]
    pub length: Option<usize>,

    /// How many passwords to generate
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..=10_000))]
    pub number: u16,

    /// Leave out uppercase letters
    #[arg(long)]
    pub no_upper: bool,

    /// Leave out lowercase letters
    #[arg(long)]
    pub no_lower: bool,

    /// Leave out digits
    #[arg(long)]
    pub no_numbers: bool,

    /// Leave out symbols
    #[arg(long)]
    pub no_symbols: bool,

    /// Use exactly these classes
    #[arg(short, long, value_enum, num_args = 1.., value_delimiter = ',')]
    pub only: Vec<CharClass>,

    /// Copy to the clipboard
    #[arg(short = 'b', long = "board")]
    pub clipboard: bool,

    /// Never truncate the displayed password
    #[arg(short, long)]
    pub full: bool,

    /// Print passwords only
    #[arg(short, long)]
    pub quiet: bool,

    /// Colour theme for this run
    #[arg(short, long, value_enum)]
    pub theme: Option<Theme>,

    /// Save the resulting length, classes and theme as defaults
    #[arg(short, long)]
    pub save: bool,

    /// Open the interactive screen
    #[arg(short, long)]
    pub interactive: bool,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
