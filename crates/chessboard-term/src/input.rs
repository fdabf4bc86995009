//! Line-based input: each line of text becomes one batch of events.

use std::io::BufRead;

use chessboard_core::Coord;
use chessboard_engine::{EventError, EventSource, InputEvent};
use tracing::{debug, warn};

/// Reads square names and commands from a line reader.
///
/// Tokens are separated by whitespace. A square is a file letter followed by
/// a rank number, e.g. `e2`; letters past `h` and ranks past 8 name squares
/// off the board. `q`, `quit` and `exit` quit. An empty line is a key-up.
pub struct LineEvents<R: BufRead> {
    reader: R,
    finished: bool,
}

impl<R: BufRead> LineEvents<R> {
    pub fn new(reader: R) -> Self {
        LineEvents {
            reader,
            finished: false,
        }
    }
}

impl<R: BufRead> EventSource for LineEvents<R> {
    fn poll_events(&mut self) -> Result<Vec<InputEvent>, EventError> {
        if self.finished {
            return Ok(vec![InputEvent::Quit]);
        }

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            debug!("input closed");
            self.finished = true;
            return Ok(vec![InputEvent::Quit]);
        }
        Ok(parse_line(&line))
    }
}

/// Turns one line of input into events. Unknown tokens are skipped.
pub fn parse_line(line: &str) -> Vec<InputEvent> {
    let mut events = Vec::new();
    for token in line.split_whitespace() {
        match parse_token(token) {
            Some(event) => events.push(event),
            None => warn!(token, "ignoring unrecognized input"),
        }
    }
    if events.is_empty() && line.trim().is_empty() {
        events.push(InputEvent::KeyUp);
    }
    events
}

fn parse_token(token: &str) -> Option<InputEvent> {
    let lower = token.to_ascii_lowercase();
    match lower.as_str() {
        "q" | "quit" | "exit" => return Some(InputEvent::Quit),
        _ => {}
    }

    let mut chars = lower.chars();
    let letter = chars.next().filter(char::is_ascii_lowercase)?;
    let digits = chars.as_str();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let rank: i8 = digits.parse().ok()?;
    let file = (letter as u8 - b'a') as i8;
    Some(InputEvent::SquareActivated(Coord::new(file, rank - 1)))
}
