//! System clipboard access. Always receives the full password.

use copypasta::{ClipboardContext, ClipboardProvider};

use crate::error::{Error, Result};

pub struct Clipboard {
    ctx: ClipboardContext,
}

impl Clipboard {
    pub fn open() -> Result<Self> {
        let ctx = ClipboardContext::new().map_err(|e| Error::Clipboard(e.to_string()))?;
        Ok(Self { ctx })
    }

    pub fn copy(&mut self, text: &str) -> Result<()> {
        self.ctx
            .set_contents(text.to_owned())
            .map_err(|e| Error::Clipboard(e.to_string()))?;
        log::info!("copied {} chars to clipboard", text.chars().count());
        Ok(())
    }
}
