//! Clipboard Integration
//!
//! Small seam over the system clipboard so the App can copy result text and
//! tests can substitute a recording fake.

use anyhow::Context;

/// Sink for copy-to-clipboard actions
pub trait ClipboardSink {
    /// Place `text` on the clipboard
    ///
    /// # Errors
    ///
    /// Propagates platform clipboard failures.
    fn set_text(&mut self, text: &str) -> anyhow::Result<()>;
}

/// The real system clipboard (arboard)
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    /// Open the system clipboard
    ///
    /// # Errors
    ///
    /// Fails on headless systems without a clipboard service.
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            inner: arboard::Clipboard::new().context("open system clipboard")?,
        })
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> anyhow::Result<()> {
        self.inner
            .set_text(text.to_string())
            .context("write to clipboard")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Clipboard fake that records every copied string
    #[derive(Default)]
    struct RecordingClipboard {
        copied: Vec<String>,
    }

    impl ClipboardSink for RecordingClipboard {
        fn set_text(&mut self, text: &str) -> anyhow::Result<()> {
            self.copied.push(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn sink_is_object_safe_and_records() {
        // The App holds the clipboard as a trait object; keep that working
        fn copy_both(clipboard: &mut dyn ClipboardSink) {
            clipboard.set_text("Title One").unwrap();
            clipboard.set_text("rust, async").unwrap();
        }

        let mut clipboard = RecordingClipboard::default();
        copy_both(&mut clipboard);
        assert_eq!(clipboard.copied, vec!["Title One", "rust, async"]);
    }
}
