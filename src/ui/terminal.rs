//! Line-based terminal front end
//!
//! Reads one command per line, forwards clicks and actions to a
//! [`GameSession`], and redraws the board after every change:
//!
//! ```text
//! 8  r  n  b  q  k  b  n  r
//! ...
//!    a  b  c  d  e  f  g  h
//! Status: White to move    Undo: unavailable
//! >
//! ```
//!
//! Generic over the reader and writer so tests can drive it with in-memory
//! buffers.

use std::io::{self, BufRead, Write};

use chess_rules::RulesEngine;
use tracing::debug;

use crate::game::{ClickOutcome, GameSession};
use crate::input::{parse_command, InputError, SessionCommand};
use crate::rendering::BoardRenderer;

const PROMPT: &str = "> ";

const HELP: &str = "\
Commands:
  e2          click a square (select a piece, or move the selected piece there)
  e2 e4       click several squares in order (also e2e4)
  new         start a new game
  undo        take back the last move
  moves       list the moves played so far
  board       redraw the board
  help        show this help
  quit        leave
";

/// Whether the loop keeps reading after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct TerminalUi<R, W> {
    input: R,
    output: W,
    renderer: BoardRenderer,
}

impl<R: BufRead, W: Write> TerminalUi<R, W> {
    pub fn new(input: R, output: W, renderer: BoardRenderer) -> Self {
        TerminalUi {
            input,
            output,
            renderer,
        }
    }

    /// Consume the front end and return its writer
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until `quit` or end of input
    pub fn run<E: RulesEngine>(&mut self, session: &mut GameSession<E>) -> io::Result<()> {
        self.draw(session)?;

        let mut line = String::new();
        loop {
            write!(self.output, "{PROMPT}")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Ok(());
            }

            match parse_command(&line) {
                Ok(command) => {
                    if self.execute(session, command)? == Flow::Quit {
                        return Ok(());
                    }
                }
                Err(InputError::Empty) => {}
                Err(e) => {
                    debug!("[INPUT] {}", e);
                    writeln!(self.output, "{e}. Type 'help' for commands.")?;
                }
            }
        }
    }

    fn execute<E: RulesEngine>(
        &mut self,
        session: &mut GameSession<E>,
        command: SessionCommand,
    ) -> io::Result<Flow> {
        match command {
            SessionCommand::Click(squares) => {
                for square in squares {
                    match session.handle_square_click(square) {
                        ClickOutcome::Moved(played) => {
                            writeln!(self.output, "Played {}", played.san)?
                        }
                        ClickOutcome::Ignored => {
                            writeln!(self.output, "Nothing to select on {square}.")?
                        }
                        ClickOutcome::Selected { .. } | ClickOutcome::Deselected => {}
                    }
                }
                self.draw(session)?;
            }
            SessionCommand::NewGame => {
                session.new_game();
                writeln!(self.output, "New game.")?;
                self.draw(session)?;
            }
            SessionCommand::Undo => {
                match session.undo() {
                    Some(undone) => writeln!(self.output, "Took back {}", undone.san)?,
                    None => writeln!(self.output, "Nothing to undo.")?,
                }
                self.draw(session)?;
            }
            SessionCommand::Moves => {
                let lines = session.history().numbered_lines();
                if lines.is_empty() {
                    writeln!(self.output, "No moves yet.")?;
                }
                for line in lines {
                    writeln!(self.output, "{line}")?;
                }
            }
            SessionCommand::Board => self.draw(session)?,
            SessionCommand::Help => write!(self.output, "{HELP}")?,
            SessionCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn draw<E: RulesEngine>(&mut self, session: &GameSession<E>) -> io::Result<()> {
        write!(self.output, "{}", self.renderer.render_session(session))?;
        writeln!(
            self.output,
            "Status: {}    Undo: {}",
            session.status(),
            if session.can_undo() { "available" } else { "unavailable" }
        )?;

        if let Some(selected) = session.selected_square() {
            let mut targets: Vec<String> = session
                .candidates()
                .iter()
                .map(|m| m.to.to_algebraic())
                .collect();
            targets.dedup();
            if targets.is_empty() {
                writeln!(self.output, "Selected {selected}: no legal moves")?;
            } else {
                writeln!(self.output, "Selected {selected}: {}", targets.join(" "))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use crate::core::GlyphStyle;

    fn run_script(script: &str) -> (String, GameSession) {
        let mut session: GameSession = GameSession::new();
        let renderer = BoardRenderer::new(GlyphStyle::Ascii, true, false);
        let mut ui = TerminalUi::new(Cursor::new(script.to_string()), Vec::new(), renderer);
        ui.run(&mut session).unwrap();
        let output = String::from_utf8(ui.into_output()).unwrap();
        (output, session)
    }

    #[test]
    fn test_initial_draw_and_eof() {
        let (output, session) = run_script("");

        assert!(output.starts_with("8  r  n  b  q  k  b  n  r\n"));
        assert!(output.contains("Status: White to move    Undo: unavailable"));
        assert_eq!(session.engine().history_len(), 0);
    }

    #[test]
    fn test_move_and_undo() {
        let (output, session) = run_script("e2 e4\nundo\nundo\nquit\n");

        assert!(output.contains("Played e4"));
        assert!(output.contains("Status: Black to move    Undo: available"));
        assert!(output.contains("Took back e4"));
        assert!(output.contains("Nothing to undo."));
        assert_eq!(session.status_text(), "White to move");
    }

    #[test]
    fn test_undo_without_moves_drops_selection() {
        let (output, session) = run_script("e2\nundo\n");

        assert!(output.contains("Nothing to undo."));
        assert_eq!(session.selected_square(), None, "undo always clears the selection");
        let last_status = output.lines().filter(|l| l.contains("Status: ")).last();
        assert_eq!(
            last_status.map(|l| l.trim_start_matches(PROMPT)),
            Some("Status: White to move    Undo: unavailable"),
            "board is redrawn without the selection"
        );
        let after_undo = output.split("Nothing to undo.").nth(1).unwrap_or("");
        assert!(!after_undo.contains("Selected e2"), "selection must not be redrawn");
        assert_eq!(session.status_text(), "White to move");
    }

    #[test]
    fn test_selection_lists_targets() {
        let (output, session) = run_script("g1\n");

        let line = output
            .lines()
            .find(|l| l.starts_with("Selected g1: "))
            .expect("selection line");
        assert!(line.contains("f3") && line.contains("h3"), "unexpected {line:?}");
        assert_eq!(session.selected_square(), Some("g1".parse().unwrap()));
    }

    #[test]
    fn test_bad_input_keeps_running() {
        let (output, session) = run_script("castle\ne2e4\n");

        assert!(output.contains("Type 'help' for commands."));
        assert_eq!(session.status_text(), "Black to move");
    }

    #[test]
    fn test_moves_listing() {
        let (output, _) = run_script("moves\ne2e4\ne7e5\nmoves\n");

        assert!(output.contains("No moves yet."));
        assert!(output.contains("1. e4 e5\n"));
    }

    #[test]
    fn test_quit_stops_reading() {
        let (output, session) = run_script("quit\ne2e4\n");

        assert!(!output.contains("Played"));
        assert_eq!(session.engine().history_len(), 0);
    }
}
