//! Reference text-console driver.
//!
//! Thin glue over [`Match`]: it prints the grid, parses `row,col`
//! input, and re-prompts on rejected moves. All rule decisions live in
//! the core; this layer only translates errors into messages.

use crate::board::Board;
use crate::error::MoveError;
use crate::game::{Match, Status};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Moves played by the scripted demo: X claims the top row.
const DEMO_MOVES: [(i32, i32); 5] = [(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)];

/// Prints the grid with row and column indices.
fn print_board(out: &mut impl Write, board: &Board) -> Result<()> {
    writeln!(out, "\n  0   1   2")?;
    writeln!(out, " ---+---+---")?;
    for (row, line) in board.render().iter().enumerate() {
        writeln!(out, "{row}| {line} ")?;
        writeln!(out, " ---+---+---")?;
    }
    Ok(())
}

/// Parses `"row,col"` into two integers.
///
/// Whitespace around either number is tolerated. Returns `None` for
/// anything that is not two comma-separated integers; the caller
/// re-prompts without consuming a turn.
fn parse_move(input: &str) -> Option<(i32, i32)> {
    let (row, col) = input.split_once(',')?;
    let row = row.trim().parse().ok()?;
    let col = col.trim().parse().ok()?;
    Some((row, col))
}

/// Runs the interactive session until the player declines a rematch or
/// input ends.
pub fn run_interactive(input: impl BufRead, mut out: impl Write) -> Result<()> {
    let mut game = Match::new();
    let mut lines = input.lines();

    writeln!(out, "--- Welcome to Console Tic Tac Toe! ---")?;

    loop {
        print_board(&mut out, game.board())?;
        write!(
            out,
            "Player '{}', enter your move (row,col): ",
            game.current_player()
        )?;
        out.flush()?;

        let Some(line) = lines.next() else {
            // Input stream closed mid-game; end the session quietly.
            writeln!(out)?;
            return Ok(());
        };
        let line = line.context("failed to read move input")?;

        let Some((row, col)) = parse_move(&line) else {
            writeln!(
                out,
                "Invalid input. Please use the format 'row,col' (e.g., '1,2')."
            )?;
            continue;
        };

        let mover = game.current_player();
        match game.attempt_move(row, col) {
            Ok(()) => debug!(row, col, player = %mover, "move accepted"),
            Err(err @ MoveError::InvalidCoordinate { .. }) => {
                writeln!(out, "Invalid move: {err}. Rows and columns run 0-2.")?;
                continue;
            }
            Err(MoveError::CellOccupied { .. }) => {
                writeln!(out, "That spot is already taken! Try another one.")?;
                continue;
            }
            Err(MoveError::MatchOver) => {
                // Unreachable while this loop resets on every finished
                // game, but the core rejects it regardless.
                continue;
            }
        }

        match game.status() {
            Status::InProgress => {}
            Status::Won(winner) => {
                print_board(&mut out, game.board())?;
                writeln!(out, "\nCongratulations! Player '{winner}' wins!")?;
                if !prompt_rematch(&mut lines, &mut out)? {
                    break;
                }
                game.reset();
                writeln!(out, "\n--- New Game Started! ---")?;
            }
            Status::Drawn => {
                print_board(&mut out, game.board())?;
                writeln!(out, "\nIt's a draw! Good game.")?;
                if !prompt_rematch(&mut lines, &mut out)? {
                    break;
                }
                game.reset();
                writeln!(out, "\n--- New Game Started! ---")?;
            }
        }
    }

    writeln!(out, "Thanks for playing!")?;
    Ok(())
}

/// Asks for a rematch; only an explicit "yes" continues.
fn prompt_rematch(
    lines: &mut std::io::Lines<impl BufRead>,
    out: &mut impl Write,
) -> Result<bool> {
    write!(out, "Play again? (yes/no): ")?;
    out.flush()?;
    let Some(answer) = lines.next() else {
        return Ok(false);
    };
    let answer = answer.context("failed to read rematch answer")?;
    Ok(answer.trim().eq_ignore_ascii_case("yes"))
}

/// Plays the fixed scripted game for environments without an
/// interactive input stream.
pub fn run_demo(mut out: impl Write) -> Result<()> {
    let mut game = Match::new();

    info!("no interactive input stream, running scripted demo");
    writeln!(out, "--- Running a Non-Interactive Demo ---")?;
    print_board(&mut out, game.board())?;

    for (row, col) in DEMO_MOVES {
        writeln!(
            out,
            "\nPlayer '{}' moves to {row},{col}",
            game.current_player()
        )?;
        game.attempt_move(row, col)
            .context("scripted demo move was rejected")?;
        print_board(&mut out, game.board())?;

        match game.status() {
            Status::InProgress => {}
            Status::Won(winner) => {
                writeln!(out, "\nPlayer '{winner}' wins!")?;
                return Ok(());
            }
            Status::Drawn => {
                writeln!(out, "\nIt's a draw!")?;
                return Ok(());
            }
        }
    }

    Ok(())
}
