//! Terminal board renderer.
//!
//! Produces the header with turn and resource counters followed by a grid
//! with lettered columns and numbered rows, top row first.

use std::fmt::Write;

use crate::game_state::rudder_types::*;

pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();
    let width = game_state.width();
    let rule = "---+".repeat(width + 1);

    // Writing into a String cannot fail.
    let _ = writeln!(out, "=========================== X-RUDDER ===========================");
    let _ = writeln!(
        out,
        " - Turn: {} ({})",
        game_state.get_turn(),
        game_state.side_to_move().symbol()
    );
    let _ = writeln!(out, " - Pieces left for X: {}", game_state.pieces_left(Side::X));
    let _ = writeln!(out, " - Pieces left for O: {}", game_state.pieces_left(Side::O));
    let _ = writeln!(out, " - Shifts left: {}", game_state.shifts_left());
    let _ = writeln!(out, "================================================================");

    out.push_str("   |");
    for x in 0..width {
        let _ = write!(out, " {} |", char::from(b'A' + (x % 26) as u8));
    }
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');

    for y in (0..game_state.height() as i32).rev() {
        let _ = write!(out, " {:>2}|", y + 1);
        for x in 0..width as i32 {
            let _ = write!(out, " {} |", cell_symbol(game_state.get_space(x, y)));
        }
        out.push('\n');
        out.push_str(&rule);
        out.push('\n');
    }

    out
}

fn cell_symbol(cell: Cell) -> char {
    match cell {
        Cell::Empty => ' ',
        Cell::Occupied(side) => side.symbol(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_header_and_pieces() {
        let mut state = GameState::new(3, 2, 4, 5);
        state.make_move(&Move::place(0, 0)).expect("x");
        state.make_move(&Move::place(2, 1)).expect("o");
        let text = render_game_state(&state);

        assert!(text.contains(" - Turn: 2 (X)"));
        assert!(text.contains(" - Pieces left for X: 3"));
        assert!(text.contains(" - Shifts left: 5"));
        assert!(text.contains("   | A | B | C |"));

        let rows: Vec<&str> = text.lines().filter(|l| l.ends_with('|') && !l.starts_with("   ")).collect();
        assert_eq!(rows, vec!["  2|   |   | O |", "  1| X |   |   |"]);
    }
}
