//! Stdio front-end and command loop for playing against the engine.
//!
//! Parses line commands, maintains the current session, routes `go` requests
//! to the engine, and prints the board, status, and diagnostic position key.

use std::io::{self, BufRead, Write};

use oxo_engine::game_state::board::GameStatus;
use oxo_engine::game_state::oxo_types::Cell;
use oxo_engine::session::game_session::{GameSession, MoveOutcome, SessionError};
use oxo_engine::utils::grid_notation::{format_cell, parse_cell};
use oxo_engine::utils::render_board::render_board;

fn main() -> io::Result<()> {
    env_logger::init();
    run_stdio_loop()
}

fn run_stdio_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut cli = CliState::new();

    writeln!(stdout, "oxo engine ({}), type 'help' for commands", cli.session.engine_name())?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = cli.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

struct CliState {
    session: GameSession,
}

impl CliState {
    fn new() -> Self {
        Self {
            session: GameSession::new(),
        }
    }

    fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();

        match cmd {
            "help" => {
                writeln!(out, "new            start a new game (X opens)")?;
                writeln!(out, "move <cell>    play a cell, e.g. 'move b2' or 'move 4'")?;
                writeln!(out, "go             let the engine play the side to move")?;
                writeln!(out, "board          print the board")?;
                writeln!(out, "key            print the position key (hex)")?;
                writeln!(out, "status         print whose turn it is / the result")?;
                writeln!(out, "quit           exit")?;
            }
            "new" => {
                self.session.new_game();
                self.print_board(out)?;
            }
            "move" => match parts.next() {
                Some(arg) => match parse_cell_argument(arg) {
                    Ok(cell) => {
                        let outcome = self.session.player_move(cell);
                        self.report_outcome(outcome, out)?;
                    }
                    Err(msg) => writeln!(out, "error: {msg}")?,
                },
                None => writeln!(out, "error: 'move' needs a cell argument")?,
            },
            "go" => match self.session.engine_move() {
                Ok(cell) => {
                    let coord = format_cell(cell).unwrap_or_else(|_| cell.to_string());
                    writeln!(out, "engine plays {coord}")?;
                    self.print_board(out)?;
                    self.print_status(out)?;
                }
                Err(SessionError::NoLegalMove) => {
                    writeln!(out, "game is over, start a 'new' one")?;
                }
                Err(err) => writeln!(out, "error: {err}")?,
            },
            "board" => self.print_board(out)?,
            "key" => {
                writeln!(out, "{:016x}", self.session.snapshot().position_key)?;
            }
            "status" => self.print_status(out)?,
            "quit" => return Ok(true),
            other => {
                writeln!(out, "unknown command '{other}', type 'help'")?;
            }
        }

        Ok(false)
    }

    fn report_outcome(&self, outcome: MoveOutcome, out: &mut impl Write) -> io::Result<()> {
        match outcome {
            MoveOutcome::Accepted => {
                self.print_board(out)?;
                self.print_status(out)?;
            }
            MoveOutcome::Rejected(err) => {
                writeln!(out, "rejected: {err}")?;
            }
            MoveOutcome::GameOver(_) => {
                self.print_board(out)?;
                self.print_status(out)?;
            }
        }
        Ok(())
    }

    fn print_board(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{}", render_board(self.session.board()))
    }

    fn print_status(&self, out: &mut impl Write) -> io::Result<()> {
        let snap = self.session.snapshot();
        match snap.status {
            GameStatus::InProgress => {
                writeln!(out, "{} to move", snap.side_to_move.glyph())
            }
            GameStatus::WonBy(mark) => writeln!(out, "{} wins the match", mark.glyph()),
            GameStatus::Drawn => writeln!(out, "match drawn"),
        }
    }
}

/// Accept both `b2`-style coordinates and raw cell indices `0..=8`.
fn parse_cell_argument(arg: &str) -> Result<Cell, String> {
    if let Ok(cell) = arg.parse::<Cell>() {
        return Ok(cell);
    }
    parse_cell(arg).map_err(|e| e.to_string())
}
