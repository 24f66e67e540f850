use super::audit_event::AuditEvent;

/// What the history tab shows for one candidate.
///
/// `Empty` is an explicit "no history" answer from the store and must not be
/// confused with `Loading`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum HistoryView {
    #[default]
    Loading,
    Empty,
    /// Newest first
    Entries(Vec<AuditEvent>),
    /// The load failed; an error notification has been raised.
    Unavailable,
}

impl HistoryView {
    pub fn from_events(events: Vec<AuditEvent>) -> Self {
        if events.is_empty() {
            HistoryView::Empty
        } else {
            HistoryView::Entries(events)
        }
    }

    pub fn events(&self) -> &[AuditEvent] {
        match self {
            HistoryView::Entries(events) => events,
            _ => &[],
        }
    }

    /// Lines to render, or the placeholder for an empty trail.
    pub fn lines(&self) -> Vec<String> {
        match self {
            HistoryView::Loading => vec!["Loading history…".to_string()],
            HistoryView::Empty => vec!["No history".to_string()],
            HistoryView::Entries(events) => events.iter().map(AuditEvent::summary).collect(),
            HistoryView::Unavailable => vec!["History unavailable".to_string()],
        }
    }
}
