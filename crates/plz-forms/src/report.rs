//! Diagnostic events emitted while a search is submitted

use crate::rules::PlzRule;

/// What happened during a submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitEvent {
    /// A submit action arrived
    Started,
    /// The PLZ broke `rule`; the field was cleared
    Rejected { rule: PlzRule },
    /// The PLZ passed every rule; the field was cleared
    Accepted,
}

/// Receives submit diagnostics.
///
/// The server uses [`TracingReporter`]; tests plug in a
/// [`RecordingReporter`] and assert on what was emitted.
pub trait SubmitReporter {
    fn report(&mut self, event: SubmitEvent);
}

impl<R: SubmitReporter + ?Sized> SubmitReporter for &mut R {
    fn report(&mut self, event: SubmitEvent) {
        (**self).report(event);
    }
}

impl<R: SubmitReporter + ?Sized> SubmitReporter for Box<R> {
    fn report(&mut self, event: SubmitEvent) {
        (**self).report(event);
    }
}

/// Forwards events to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl SubmitReporter for TracingReporter {
    fn report(&mut self, event: SubmitEvent) {
        match event {
            SubmitEvent::Started => tracing::debug!("search submit started"),
            SubmitEvent::Rejected { rule } => {
                tracing::info!(rule = %rule, "search submit rejected, plz invalid")
            }
            SubmitEvent::Accepted => tracing::info!("search submit accepted"),
        }
    }
}

/// Keeps every event in memory
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    events: Vec<SubmitEvent>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[SubmitEvent] {
        &self.events
    }

    /// Drain the recorded events
    pub fn take(&mut self) -> Vec<SubmitEvent> {
        std::mem::take(&mut self.events)
    }
}

impl SubmitReporter for RecordingReporter {
    fn report(&mut self, event: SubmitEvent) {
        self.events.push(event);
    }
}
