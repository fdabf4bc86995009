//! Input events, already translated from whatever the platform produces.

use chessboard_core::Coord;
use thiserror::Error;

/// Errors an event source can report.
#[derive(Debug, Error)]
pub enum EventError {
    /// Reading input failed.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// An abstract input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The user asked to close the board.
    Quit,
    /// The user picked a square. The coordinate may lie off the board.
    SquareActivated(Coord),
    /// A key was released. Has no effect on the game.
    KeyUp,
}

/// What the driver loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Producer of input events.
pub trait EventSource {
    /// Returns the next batch of events, blocking until at least one is
    /// available. An empty batch means nothing happened this round.
    fn poll_events(&mut self) -> Result<Vec<InputEvent>, EventError>;
}

/// Event source that replays a fixed script, then quits.
#[derive(Debug, Clone, Default)]
pub struct ScriptedEvents {
    batches: std::collections::VecDeque<Vec<InputEvent>>,
}

impl ScriptedEvents {
    /// Creates a source that yields each event in its own batch.
    pub fn new(events: impl IntoIterator<Item = InputEvent>) -> Self {
        ScriptedEvents {
            batches: events.into_iter().map(|e| vec![e]).collect(),
        }
    }

    /// Creates a source that yields the given batches in order.
    pub fn batched(batches: impl IntoIterator<Item = Vec<InputEvent>>) -> Self {
        ScriptedEvents {
            batches: batches.into_iter().collect(),
        }
    }
}

impl EventSource for ScriptedEvents {
    fn poll_events(&mut self) -> Result<Vec<InputEvent>, EventError> {
        Ok(self
            .batches
            .pop_front()
            .unwrap_or_else(|| vec![InputEvent::Quit]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_ends_with_quit() {
        let mut events = ScriptedEvents::new([InputEvent::KeyUp]);
        assert_eq!(events.poll_events().unwrap(), vec![InputEvent::KeyUp]);
        assert_eq!(events.poll_events().unwrap(), vec![InputEvent::Quit]);
        assert_eq!(events.poll_events().unwrap(), vec![InputEvent::Quit]);
    }

    #[test]
    fn batches_are_kept_together() {
        let click = InputEvent::SquareActivated(Coord::new(1, 0));
        let mut events = ScriptedEvents::batched([vec![click, InputEvent::KeyUp], vec![]]);
        assert_eq!(events.poll_events().unwrap().len(), 2);
        assert!(events.poll_events().unwrap().is_empty());
    }
}
