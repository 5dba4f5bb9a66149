//! Console board drawing.
//!
//! Rank 8 (Black's home row) is printed first. Cells are three characters
//! wide; with color on, the cell color is the background and the piece glyph
//! is drawn in the piece's own color so it stays visible on a matching cell.

use kamisado_core::{color_at, Color, Coord, Player, State};

const RESET: &str = "\x1b[0m";

/// xterm 256-color index for a board color.
fn ansi_index(color: Color) -> u8 {
    match color {
        Color::Orange => 208,
        Color::Blue => 27,
        Color::Purple => 93,
        Color::Pink => 213,
        Color::Yellow => 226,
        Color::Red => 196,
        Color::Green => 34,
        Color::Brown => 94,
    }
}

fn background(color: Color) -> String {
    format!("\x1b[48;5;{}m", ansi_index(color))
}

fn foreground(color: Color) -> String {
    format!("\x1b[1;38;5;{}m", ansi_index(color))
}

/// `X` for the human's pieces, `O` for the engine's.
pub fn glyph(player: Player, human: Player) -> char {
    if player == human {
        'X'
    } else {
        'O'
    }
}

fn draw_cell(out: &mut String, state: &State, cell: Coord, human: Player, use_color: bool) {
    let under = color_at(cell);
    let piece = state.piece_at(cell);
    match (use_color, piece) {
        (true, None) => {
            out.push_str(&format!("{}   {RESET}", background(under)));
        }
        (true, Some(p)) => {
            let bg = background(under);
            let fg = foreground(p.color);
            let mark = glyph(p.player, human);
            out.push_str(&format!("{bg} {RESET}{fg}{mark}{RESET}{bg} {RESET}"));
        }
        (false, None) => {
            out.push_str(&format!(" {} ", under.letter()));
        }
        (false, Some(p)) => {
            out.push_str(&format!("{}{} ", glyph(p.player, human), p.color.letter()));
        }
    }
}

fn file_header() -> String {
    let mut line = String::from("   ");
    for file in 'a'..='h' {
        line.push_str(&format!(" {file} "));
    }
    line
}

/// Draws the whole board with file letters above and below and rank numbers
/// on both sides.
pub fn render_board(state: &State, human: Player, use_color: bool) -> String {
    let mut out = String::new();
    out.push_str(&file_header());
    out.push('\n');
    for cell in Coord::all() {
        let rank = 8 - cell.row();
        if cell.col() == 0 {
            out.push_str(&format!(" {rank} "));
        }
        draw_cell(&mut out, state, cell, human, use_color);
        if cell.col() == 7 {
            out.push_str(&format!(" {rank}\n"));
        }
    }
    out.push_str(&file_header());
    out.push('\n');
    if !use_color {
        out.push_str(&legend());
    }
    out
}

/// Key for the letters used when drawing without color.
fn legend() -> String {
    let colors: Vec<String> = Color::ALL
        .iter()
        .map(|c| format!("{}={}", c.letter(), c.name()))
        .collect();
    format!("X=you O=engine  {}\n", colors.join(" "))
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
