//! Clipboard access behind a small service trait.
//!
//! [`MemoryClipboard`] keeps the content in process and is what tests use.
//! [`SystemClipboard`] talks to the desktop clipboard and is only built
//! with the `system-clipboard` feature.

use crate::error::Result;
use crate::event::{LogLevel, emit_log};

/// Something text can be put into and read back from.
pub trait ClipboardService {
    fn put(&mut self, content: String) -> Result<()>;
    fn get(&mut self) -> Result<String>;
}

/// In-process clipboard.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryClipboard {
    pub content: String,
}

impl ClipboardService for MemoryClipboard {
    fn put(&mut self, content: String) -> Result<()> {
        self.content = content;
        Ok(())
    }

    fn get(&mut self) -> Result<String> {
        Ok(self.content.clone())
    }
}

#[cfg(feature = "system-clipboard")]
pub use system::SystemClipboard;

#[cfg(feature = "system-clipboard")]
mod system {
    use copypasta_ext::{copypasta::ClipboardProvider, x11_fork::ClipboardContext};

    use super::ClipboardService;
    use crate::error::{Error, Result};

    /// The desktop clipboard (X11 fork context, so content outlives the
    /// process).
    #[derive(Debug, Default)]
    pub struct SystemClipboard;

    impl ClipboardService for SystemClipboard {
        fn put(&mut self, content: String) -> Result<()> {
            let mut ctx = ClipboardContext::new().map_err(|e| Error::Clipboard(e.to_string()))?;
            ctx.set_contents(content)
                .map_err(|e| Error::Clipboard(e.to_string()))
        }

        fn get(&mut self) -> Result<String> {
            let mut ctx = ClipboardContext::new().map_err(|e| Error::Clipboard(e.to_string()))?;
            ctx.get_contents()
                .map_err(|e| Error::Clipboard(e.to_string()))
        }
    }
}

/// Put `text` on `service`, reporting the outcome through the log callback.
pub fn copy_to_clipboard<S: ClipboardService + ?Sized>(service: &mut S, text: &str) -> Result<()> {
    match service.put(text.to_string()) {
        Ok(()) => {
            emit_log(
                LogLevel::Debug,
                &format!("copied {} bytes to clipboard", text.len()),
            );
            Ok(())
        }
        Err(e) => {
            emit_log(LogLevel::Warn, &format!("clipboard write failed: {e}"));
            Err(e)
        }
    }
}
