#![cfg(feature = "std")]

//! Text front end: draws what the player is allowed to see and turns typed
//! commands into session calls.

use std::fmt::Write as _;
use std::io::{BufRead, Write};

use crate::core::{Cell, GameStatus, RayOutcome, SessionState, Shot, BOARD_SIZE};
use crate::protocol::GameApi;

/// A typed player command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Shoot(i8, i8),
    Guess(i8, i8),
    Board,
    Help,
    Quit,
}

const HELP: &str = "Commands: shoot R C | guess R C | board | help | quit";

fn parse_pair<'a>(mut parts: impl Iterator<Item = &'a str>) -> Option<(i8, i8)> {
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((row, col))
}

/// Parse one input line. Commands may be abbreviated to their first letter.
pub fn parse_command(line: &str) -> Option<Command> {
    let mut parts = line.split_whitespace();
    let word = parts.next()?.to_ascii_lowercase();
    match word.as_str() {
        "shoot" | "s" => parse_pair(parts).map(|(r, c)| Command::Shoot(r, c)),
        "guess" | "g" => parse_pair(parts).map(|(r, c)| Command::Guess(r, c)),
        "board" | "b" => Some(Command::Board),
        "help" | "h" | "?" => Some(Command::Help),
        "quit" | "q" | "exit" => Some(Command::Quit),
        _ => None,
    }
}

/// Parse an atom layout written as `row,col;row,col;...`.
pub fn parse_layout(input: &str) -> anyhow::Result<Vec<Cell>> {
    input
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|pair| -> anyhow::Result<Cell> {
            let (r, c) = pair
                .split_once(',')
                .ok_or_else(|| anyhow::anyhow!("expected row,col but got {:?}", pair))?;
            Ok(Cell::new(r.trim().parse()?, c.trim().parse()?))
        })
        .collect()
}

/// Border marker for a cell: `H` absorbed entry, `R` reflection, a letter
/// shared by both ends of a deflected ray, `b` unused.
fn border_mark(state: &SessionState, cell: Cell) -> char {
    if state.hits.contains(&cell) {
        return 'H';
    }
    if state.reflections.contains(&cell) {
        return 'R';
    }
    state
        .deflections
        .iter()
        .position(|&(entry, exit)| entry == cell || exit == cell)
        .map(|i| (b'a' + (i % 26) as u8) as char)
        .unwrap_or('b')
}

/// Interior marker: guesses only, until the game ends and atoms are revealed.
fn interior_mark(state: &SessionState, cell: Cell) -> char {
    let guessed = state.guesses.contains(&cell);
    if state.status.is_terminal() {
        match (state.atoms.contains(&cell), guessed) {
            (true, true) => '*',
            (true, false) => 'x',
            (false, true) => '!',
            (false, false) => '.',
        }
    } else if guessed {
        'g'
    } else {
        '.'
    }
}

/// Draw the board and counters as the player sees them.
pub fn render_player_view(state: &SessionState) -> String {
    let mut out = String::new();
    out.push_str("  ");
    for c in 0..BOARD_SIZE {
        let _ = write!(out, " {}", c);
    }
    out.push('\n');
    for r in 0..BOARD_SIZE as i8 {
        let _ = write!(out, "{:2}", r);
        for c in 0..BOARD_SIZE as i8 {
            let cell = Cell::new(r, c);
            let ch = if cell.is_corner() {
                ' '
            } else if cell.is_border() {
                border_mark(state, cell)
            } else {
                interior_mark(state, cell)
            };
            let _ = write!(out, " {}", ch);
        }
        out.push('\n');
    }
    let _ = write!(
        out,
        "Score: {}  Atoms left: {}  Status: {:?}",
        state.score, state.atoms_left, state.status
    );
    out
}

fn describe_shot(shot: &Shot) -> String {
    match shot.outcome {
        RayOutcome::Absorbed => format!("Ray from {} was absorbed", shot.entry),
        RayOutcome::Reflected => format!("Ray from {} was reflected", shot.entry),
        RayOutcome::Exited(exit) => format!("Ray from {} exited at {}", shot.entry, exit),
    }
}

/// Play a session from line-oriented input until it ends or the player quits.
pub async fn run_terminal<A, R, W>(api: &mut A, input: R, out: &mut W) -> anyhow::Result<GameStatus>
where
    A: GameApi,
    R: BufRead,
    W: Write,
{
    writeln!(out, "{}", render_player_view(&api.snapshot().await?))?;
    writeln!(out, "{}", HELP)?;
    for line in input.lines() {
        let line = line?;
        match parse_command(&line) {
            Some(Command::Shoot(r, c)) => match api.shoot(r, c).await? {
                Ok(shot) => writeln!(out, "{}", describe_shot(&shot))?,
                Err(e) => writeln!(out, "Invalid shot: {}", e)?,
            },
            Some(Command::Guess(r, c)) => match api.guess(r, c).await? {
                Ok(true) => writeln!(out, "({}, {}) holds an atom", r, c)?,
                Ok(false) => writeln!(out, "({}, {}) is empty", r, c)?,
                Err(e) => writeln!(out, "Invalid guess: {}", e)?,
            },
            Some(Command::Board) => writeln!(out, "{}", render_player_view(&api.snapshot().await?))?,
            Some(Command::Help) => writeln!(out, "{}", HELP)?,
            Some(Command::Quit) => break,
            None => writeln!(out, "Unrecognised command; type `help`")?,
        }
        let status = api.status().await?;
        if status.is_terminal() {
            writeln!(out, "{}", render_player_view(&api.snapshot().await?))?;
            match status {
                GameStatus::Won => writeln!(out, "You found every atom!")?,
                _ => writeln!(out, "Not quite. Better luck next time.")?,
            }
            return Ok(status);
        }
    }
    api.status().await
}
