//! Interactive corner selection.
//!
//! On a terminal the corners are shown as a list driven by the arrow keys
//! (or `j`/`k`), digits pick directly, Enter confirms and Esc/`q` cancels.
//! Without a terminal a single line holding `1`-`4` or a corner name is read
//! from stdin; an empty line takes the first entry and end of input cancels.

use console::{style, Key, Term};
use photo_watermarker::core::Corner;
use photo_watermarker::error::{Result, WatermarkerError};
use std::io::{self, BufRead, IsTerminal};

const QUESTION: &str = "Select watermark location:";

/// What a key press does to the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    Highlight(usize),
    Choose(usize),
    Cancel,
    Ignore,
}

/// Ask for the watermark corner
pub fn select_corner(term: &Term) -> Result<Corner> {
    if term.is_term() && io::stdin().is_terminal() {
        select_interactive(term)
    } else {
        select_from_line(term)
    }
}

fn select_interactive(term: &Term) -> Result<Corner> {
    let choices = Corner::ALL.len();
    let mut selected = 0;

    term.write_line(&format!("{} {}", style("?").green().bold(), style(QUESTION).bold()))
        .map_err(selection_error)?;
    term.hide_cursor().map_err(selection_error)?;

    let outcome = loop {
        render(term, selected)?;
        let key = term.read_key();
        term.clear_last_lines(choices).map_err(selection_error)?;

        match handle_key(selected, key.map_err(selection_error)?) {
            MenuAction::Highlight(index) => selected = index,
            MenuAction::Choose(index) => break Ok(Corner::ALL[index]),
            MenuAction::Cancel => {
                break Err(WatermarkerError::Selection("cancelled".to_string()))
            }
            MenuAction::Ignore => {}
        }
    };

    term.show_cursor().map_err(selection_error)?;
    term.clear_last_lines(1).map_err(selection_error)?;

    let corner = outcome?;
    term.write_line(&format!(
        "{} {} {}",
        style("✔").green().bold(),
        style(QUESTION).bold(),
        style(corner).cyan()
    ))
    .map_err(selection_error)?;

    Ok(corner)
}

fn render(term: &Term, selected: usize) -> Result<()> {
    for (index, corner) in Corner::ALL.iter().enumerate() {
        let line = if index == selected {
            format!("{} {}", style("❯").cyan(), style(corner).cyan())
        } else {
            format!("  {}", corner)
        };
        term.write_line(&line).map_err(selection_error)?;
    }
    Ok(())
}

fn handle_key(selected: usize, key: Key) -> MenuAction {
    let choices = Corner::ALL.len();

    match key {
        Key::ArrowUp | Key::Char('k') => MenuAction::Highlight((selected + choices - 1) % choices),
        Key::ArrowDown | Key::Char('j') | Key::Tab => MenuAction::Highlight((selected + 1) % choices),
        Key::Enter => MenuAction::Choose(selected),
        Key::Char(c) => match c.to_digit(10) {
            Some(digit @ 1..=4) => MenuAction::Choose(digit as usize - 1),
            _ if c == 'q' || c == '\u{3}' => MenuAction::Cancel,
            _ => MenuAction::Ignore,
        },
        Key::Escape => MenuAction::Cancel,
        _ => MenuAction::Ignore,
    }
}

fn select_from_line(term: &Term) -> Result<Corner> {
    term.write_line(QUESTION).map_err(selection_error)?;
    for (index, corner) in Corner::ALL.iter().enumerate() {
        term.write_line(&format!("  {}) {}", index + 1, corner))
            .map_err(selection_error)?;
    }

    read_answer(&mut io::stdin().lock())
}

/// Read one answer line. End of input is not an answer.
fn read_answer(input: &mut impl BufRead) -> Result<Corner> {
    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(selection_error)?;
    if read == 0 {
        return Err(WatermarkerError::Selection("no answer".to_string()));
    }

    parse_choice(&line).ok_or_else(|| {
        WatermarkerError::Selection(format!("`{}` is not one of 1-4", line.trim()))
    })
}

/// Parse a typed answer: a menu number, a corner name, or nothing for the first entry
fn parse_choice(input: &str) -> Option<Corner> {
    let answer = input.trim().to_lowercase().replace(['-', '_'], " ");
    if answer.is_empty() {
        return Some(Corner::ALL[0]);
    }

    if let Ok(number) = answer.parse::<usize>() {
        return number
            .checked_sub(1)
            .and_then(|index| Corner::ALL.get(index).copied());
    }

    Corner::ALL
        .into_iter()
        .find(|corner| corner.label().to_lowercase() == answer)
}

fn selection_error(error: io::Error) -> WatermarkerError {
    WatermarkerError::Selection(error.to_string())
}
