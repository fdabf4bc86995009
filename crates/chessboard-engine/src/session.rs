//! Driver loop tying a game to a renderer and an event source.

use thiserror::Error;
use tracing::{info, warn};

use crate::event::{EventError, EventSource, Flow};
use crate::render::{RenderError, Renderer};
use crate::Game;

/// Errors that end a session early.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The renderer could not start; nothing was drawn.
    #[error("renderer setup failed: {0}")]
    Setup(#[source] RenderError),

    /// Events could not be read.
    #[error("event source failed: {0}")]
    Events(#[source] EventError),

    /// A frame could not be shown.
    #[error("presenting frame failed: {0}")]
    Present(#[source] RenderError),
}

/// Summary of a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionStats {
    /// Events handed to the game, quit included.
    pub events: usize,
}

/// One game session: sets up the renderer, starts a fresh game, and feeds it
/// events until a quit event arrives.
pub struct Session<'a, R: Renderer + ?Sized, E: EventSource + ?Sized> {
    game: &'a mut Game,
    renderer: &'a mut R,
    events: &'a mut E,
}

impl<'a, R: Renderer + ?Sized, E: EventSource + ?Sized> Session<'a, R, E> {
    pub fn new(game: &'a mut Game, renderer: &'a mut R, events: &'a mut E) -> Self {
        Session {
            game,
            renderer,
            events,
        }
    }

    /// Runs the session, starting from the standard layout.
    pub fn run(self) -> Result<SessionStats, SessionError> {
        let mut session = self.start()?;
        session.game.reset(&mut *session.renderer);
        session.run_loaded()
    }

    /// Runs the session on whatever position the game already holds.
    pub fn resume(self) -> Result<SessionStats, SessionError> {
        let mut session = self.start()?;
        session.game.draw_board(&mut *session.renderer);
        session.run_loaded()
    }

    /// Sets up the renderer. On failure the game and renderer are closed
    /// before the error is returned.
    fn start(mut self) -> Result<Self, SessionError> {
        if let Err(e) = self.renderer.setup() {
            warn!(error = %e, "renderer setup failed");
            self.game.close();
            self.renderer.close();
            return Err(SessionError::Setup(e));
        }
        Ok(self)
    }

    fn run_loaded(mut self) -> Result<SessionStats, SessionError> {
        let mut stats = SessionStats::default();
        let result = self.pump(&mut stats);

        self.game.close();
        self.renderer.close();
        info!(events = stats.events, "session closed");
        result.map(|()| stats)
    }

    fn pump(&mut self, stats: &mut SessionStats) -> Result<(), SessionError> {
        if let Err(e) = self.renderer.present() {
            return Err(SessionError::Present(e));
        }
        loop {
            let batch = self.events.poll_events().map_err(SessionError::Events)?;
            for event in batch {
                stats.events += 1;
                if self.game.handle_event(event, &mut *self.renderer) == Flow::Quit {
                    return Ok(());
                }
            }
            if let Err(e) = self.renderer.present() {
                warn!(error = %e, "failed to present frame");
                return Err(SessionError::Present(e));
            }
        }
    }
}
