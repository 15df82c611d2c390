//! Text coordinates for board cells and moves.
//!
//! Columns are letters (`a` is `x == 0`) and rows are 1-based numbers
//! (`1` is `y == 0`). A placement is written `c 4` or `c4`; a shift names the
//! source first: `c 4 d 5`, `c4 d5` or `c4-d5`. `format_move` emits `c4` / `c4-d5`.

use crate::errors::MoveParseError;
use crate::game_state::rudder_types::Move;

pub fn parse_column(token: &str) -> Result<i32, MoveParseError> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Ok(i32::from(c.to_ascii_lowercase() as u8 - b'a')),
        _ => Err(MoveParseError::InvalidColumn(token.to_owned())),
    }
}

pub fn parse_row(token: &str) -> Result<i32, MoveParseError> {
    token
        .parse::<i32>()
        .map(|row| row - 1)
        .map_err(|_| MoveParseError::InvalidRow(token.to_owned()))
}

/// Parse a compact square such as `c4` or `B10`.
pub fn parse_square(token: &str) -> Result<(i32, i32), MoveParseError> {
    let mut chars = token.chars();
    let column = chars
        .next()
        .ok_or_else(|| MoveParseError::InvalidColumn(String::new()))?;
    Ok((parse_column(&column.to_string())?, parse_row(chars.as_str())?))
}

pub fn parse_move_text(text: &str) -> Result<Move, MoveParseError> {
    let mut tokens: Vec<&str> = text.split_whitespace().collect();
    // `c4-d5` is the only form where '-' separates; elsewhere it signs a row.
    let compact_shift = match tokens.as_slice() {
        [token] => {
            let token: &str = token;
            token
                .split_once('-')
                .filter(|(from, to)| from.len() > 1 && !to.is_empty())
        }
        _ => None,
    };
    if let Some((from, to)) = compact_shift {
        tokens = vec![from, to];
    }
    match tokens.as_slice() {
        [square] => {
            let (x, y) = parse_square(square)?;
            Ok(Move::place(x, y))
        }
        [column, row] if parse_column(column).is_ok() => Ok(Move::place(parse_column(column)?, parse_row(row)?)),
        [from, to] => {
            let (px, py) = parse_square(from)?;
            let (x, y) = parse_square(to)?;
            Ok(Move::shift(px, py, x, y))
        }
        [from_column, from_row, to_column, to_row] => Ok(Move::shift(
            parse_column(from_column)?,
            parse_row(from_row)?,
            parse_column(to_column)?,
            parse_row(to_row)?,
        )),
        other => Err(MoveParseError::WrongArity(other.len())),
    }
}

pub fn format_square(x: i32, y: i32) -> String {
    let column = u8::try_from(x)
        .ok()
        .filter(|x| *x < 26)
        .map(|x| char::from(b'a' + x))
        .unwrap_or('?');
    format!("{column}{}", y + 1)
}

pub fn format_move(mv: &Move) -> String {
    match mv.source() {
        Some((px, py)) => format!("{}-{}", format_square(px, py), format_square(mv.x(), mv.y())),
        None => format_square(mv.x(), mv.y()),
    }
}
