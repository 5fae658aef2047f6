//! One-shot command line mode.

mod args;
mod context;
pub mod prompts;
pub mod quiet;

use std::process::ExitCode;

pub use args::Args;
pub use context::Context;

pub fn run(args: Args) -> ExitCode {
    let mut ctx = Context::new(args);
    match ctx.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("cli run failed: {e:?}");
            prompts::error(&e);
            ExitCode::from(e.exit_code())
        }
    }
}
