use crate::utils::error::Result;

/// Write-only destination for the rendered document.
pub trait ClipboardSink {
    /// Short name used in log lines.
    fn name(&self) -> &str;
    fn write_text(&mut self, text: &str) -> Result<()>;
}
