//! One editing session: the record store, the editing mode, the rendered
//! output and the transient copy indicator.

use crate::core::projector;
use crate::core::store::{Applied, Mutation, RecordStore};
use crate::domain::fields::EditorMode;
use crate::domain::model::Record;
use crate::domain::ports::ClipboardSink;
use crate::utils::error::Result;
use std::time::{Duration, Instant};

/// How long a copy result stays visible before the indicator reverts.
pub const COPY_STATUS_REVERT: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyStatus {
    #[default]
    Idle,
    Copied,
    Failed,
}

impl CopyStatus {
    pub fn label(self) -> &'static str {
        match self {
            CopyStatus::Idle => "Copy",
            CopyStatus::Copied => "Copied!",
            CopyStatus::Failed => "Failed",
        }
    }
}

/// Copy result that reads as [`CopyStatus::Idle`] once
/// [`COPY_STATUS_REVERT`] has passed.
#[derive(Debug, Clone, Copy, Default)]
pub struct CopyIndicator {
    status: CopyStatus,
    set_at: Option<Instant>,
}

impl CopyIndicator {
    pub fn show(&mut self, status: CopyStatus, now: Instant) {
        self.status = status;
        self.set_at = Some(now);
    }

    pub fn current(&self, now: Instant) -> CopyStatus {
        match self.set_at {
            Some(set_at) if now.saturating_duration_since(set_at) < COPY_STATUS_REVERT => {
                self.status
            }
            _ => CopyStatus::Idle,
        }
    }
}

/// Tries `primary`, then `fallback`. No further retries.
pub fn copy_with_fallback(
    text: &str,
    primary: &mut dyn ClipboardSink,
    fallback: &mut dyn ClipboardSink,
) -> CopyStatus {
    match primary.write_text(text) {
        Ok(()) => {
            tracing::debug!("Copied {} bytes via {}", text.len(), primary.name());
            return CopyStatus::Copied;
        }
        Err(e) => tracing::debug!("{} copy failed: {}", primary.name(), e),
    }

    match fallback.write_text(text) {
        Ok(()) => {
            tracing::debug!("Copied {} bytes via {}", text.len(), fallback.name());
            CopyStatus::Copied
        }
        Err(e) => {
            tracing::warn!("{} copy failed: {}", fallback.name(), e);
            CopyStatus::Failed
        }
    }
}

#[derive(Debug, Clone)]
pub struct EditorSession {
    store: RecordStore,
    mode: EditorMode,
    output: String,
    copy: CopyIndicator,
}

impl EditorSession {
    /// Starts a session on the built-in profile.
    pub fn new() -> Result<Self> {
        Self::with_record(Record::default(), EditorMode::default())
    }

    pub fn with_record(record: Record, mode: EditorMode) -> Result<Self> {
        let output = projector::render(&record)?;
        Ok(Self {
            store: RecordStore::with_record(record),
            mode,
            output,
            copy: CopyIndicator::default(),
        })
    }

    pub fn record(&self) -> &Record {
        self.store.record()
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    /// The rendered document for the current record.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Applies one edit and re-renders the whole document.
    pub fn apply(&mut self, mutation: Mutation) -> Result<Applied> {
        let applied = self.store.apply(mutation);
        if applied == Applied::Changed {
            self.refresh()?;
        }
        Ok(applied)
    }

    /// Switching to another mode starts over from the built-in profile.
    /// Re-selecting the current mode keeps the record.
    pub fn set_mode(&mut self, mode: EditorMode) -> Result<()> {
        if mode == self.mode {
            tracing::debug!("Already in {:?} mode", mode);
            return Ok(());
        }
        tracing::info!("Switching to {:?} mode, record reset", mode);
        self.mode = mode;
        self.store.reset();
        self.refresh()
    }

    pub fn reset(&mut self) -> Result<()> {
        self.apply(Mutation::Reset).map(|_| ())
    }

    pub fn copy_output(
        &mut self,
        primary: &mut dyn ClipboardSink,
        fallback: &mut dyn ClipboardSink,
        now: Instant,
    ) -> CopyStatus {
        let status = copy_with_fallback(&self.output, primary, fallback);
        self.copy.show(status, now);
        status
    }

    /// Label of the copy button at `now`.
    pub fn copy_label(&self, now: Instant) -> &'static str {
        self.copy.current(now).label()
    }

    fn refresh(&mut self) -> Result<()> {
        self.output = projector::render(self.store.record())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fields::{ListField, ScalarField};
    use crate::utils::error::EditorError;

    struct FakeSink {
        name: &'static str,
        fail: bool,
        written: Vec<String>,
    }

    impl FakeSink {
        fn new(name: &'static str, fail: bool) -> Self {
            Self {
                name,
                fail,
                written: Vec::new(),
            }
        }
    }

    impl ClipboardSink for FakeSink {
        fn name(&self) -> &str {
            self.name
        }

        fn write_text(&mut self, text: &str) -> Result<()> {
            if self.fail {
                return Err(EditorError::ClipboardError {
                    message: "unavailable".to_string(),
                });
            }
            self.written.push(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_primary_success_skips_fallback() {
        let mut primary = FakeSink::new("primary", false);
        let mut fallback = FakeSink::new("fallback", false);

        let status = copy_with_fallback("doc", &mut primary, &mut fallback);

        assert_eq!(status, CopyStatus::Copied);
        assert_eq!(primary.written, vec!["doc"]);
        assert!(fallback.written.is_empty());
    }

    #[test]
    fn test_fallback_used_when_primary_fails() {
        let mut primary = FakeSink::new("primary", true);
        let mut fallback = FakeSink::new("fallback", false);

        let status = copy_with_fallback("doc", &mut primary, &mut fallback);

        assert_eq!(status, CopyStatus::Copied);
        assert_eq!(fallback.written, vec!["doc"]);
    }

    #[test]
    fn test_both_failing_reports_failed() {
        let mut primary = FakeSink::new("primary", true);
        let mut fallback = FakeSink::new("fallback", true);

        assert_eq!(
            copy_with_fallback("doc", &mut primary, &mut fallback),
            CopyStatus::Failed
        );
    }

    #[test]
    fn test_copy_indicator_reverts_after_delay() {
        let start = Instant::now();
        let mut indicator = CopyIndicator::default();
        assert_eq!(indicator.current(start), CopyStatus::Idle);

        indicator.show(CopyStatus::Failed, start);
        assert_eq!(indicator.current(start), CopyStatus::Failed);
        assert_eq!(
            indicator.current(start + Duration::from_millis(1499)),
            CopyStatus::Failed
        );
        assert_eq!(
            indicator.current(start + COPY_STATUS_REVERT),
            CopyStatus::Idle
        );
    }

    #[test]
    fn test_copy_does_not_touch_record() {
        let mut session = EditorSession::new().unwrap();
        let before = session.record().clone();
        let mut primary = FakeSink::new("primary", false);
        let mut fallback = FakeSink::new("fallback", false);
        let now = Instant::now();

        session.copy_output(&mut primary, &mut fallback, now);

        assert_eq!(session.record(), &before);
        assert_eq!(primary.written[0], session.output());
        assert_eq!(session.copy_label(now), "Copied!");
    }

    #[test]
    fn test_apply_rerenders_output() {
        let mut session = EditorSession::new().unwrap();
        session
            .apply(Mutation::SetScalar {
                field: ScalarField::PostalCode,
                value: "99999".to_string(),
            })
            .unwrap();

        assert!(session.output().contains("\"postalCode\": \"99999\""));
        assert!(!session.output().contains("06483"));
    }

    #[test]
    fn test_mode_change_resets_record() {
        let mut session = EditorSession::new().unwrap();
        session
            .apply(Mutation::AddListItem {
                field: ListField::Images,
            })
            .unwrap();

        session.set_mode(EditorMode::AllFields).unwrap();

        assert_eq!(session.mode(), EditorMode::AllFields);
        assert_eq!(session.record(), &Record::default());
        assert_eq!(
            session.output(),
            projector::render(&Record::default()).unwrap()
        );
    }

    #[test]
    fn test_reselecting_current_mode_keeps_edits() {
        let mut session = EditorSession::new().unwrap();
        session
            .apply(Mutation::SetScalar {
                field: ScalarField::Name,
                value: "Edited".to_string(),
            })
            .unwrap();

        session.set_mode(EditorMode::Standard).unwrap();

        assert_eq!(session.mode(), EditorMode::Standard);
        assert_eq!(session.record().name, "Edited");
        assert!(session.output().contains("\"name\": \"Edited\""));
    }
}
