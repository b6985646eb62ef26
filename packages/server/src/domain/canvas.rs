//! Canvas log: the stroke history replayed to late joiners.

use super::{event::ServerEvent, value_object::StrokeRecord};

/// What [`CanvasLog::append`] did with a stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasChange {
    Appended,
    Cleared,
}

/// Ordered stroke history since the last clear.
///
/// Replaying `records()` in order onto a blank canvas reproduces what every
/// connected player currently sees.
#[derive(Debug, Clone, Default)]
pub struct CanvasLog {
    records: Vec<StrokeRecord>,
}

impl CanvasLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clear marker truncates the log; any other stroke is appended.
    pub fn append(&mut self, stroke: StrokeRecord) -> CanvasChange {
        if stroke.is_clear() {
            self.records.clear();
            CanvasChange::Cleared
        } else {
            self.records.push(stroke);
            CanvasChange::Appended
        }
    }

    /// One `paint` event per logged stroke, oldest first.
    ///
    /// The events are meant for a single newly opened connection.
    pub fn replay(&self) -> Vec<ServerEvent> {
        self.records
            .iter()
            .map(|stroke| ServerEvent::Paint(stroke.clone()))
            .collect()
    }

    pub fn records(&self) -> &[StrokeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
