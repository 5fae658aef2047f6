use std::env;
use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;

use strongpass::cli::{self, Args, quiet};
use strongpass::{exits, tui};

fn main() -> ExitCode {
    exits::reset_terminal();
    exits::install_handlers();
    exits::disable_core_dumps();

    let bare = env::args_os().len() == 1;
    let args = Args::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or(args.log_filter()))
        .format_timestamp(None)
        .init();

    if args.interactive || (bare && quiet::stdin_is_tty() && quiet::stdout_is_tty()) {
        tui::run()
    } else {
        cli::run(args)
    }
}
