//! Paren-aware splitting of container table rows
//!
//! Local names may contain commas inside parentheses
//! (`a_abs_profile(1,4)`), so the name column cannot be split on a plain
//! comma. The name ends at the first comma outside any parenthesis; the
//! remaining columns contain no nested commas and split normally.

use crate::constants::TABLE_COLUMN_COUNT;

/// One table row split into its local name and the five data columns,
/// short rows padded with empty cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub name: String,
    pub fields: Vec<String>,
}

/// Split a table row, or `None` when no column separator follows the name
pub fn parse_row(line: &str) -> Option<RawRow> {
    let (name, rest) = split_name(line)?;
    if name.is_empty() {
        return None;
    }

    let mut fields: Vec<String> = rest
        .splitn(TABLE_COLUMN_COUNT - 1, ',')
        .map(|f| f.trim().to_string())
        .collect();
    fields.resize(TABLE_COLUMN_COUNT - 1, String::new());

    Some(RawRow {
        name: name.to_string(),
        fields,
    })
}

/// Find the first comma outside parentheses and split there
fn split_name(line: &str) -> Option<(&str, &str)> {
    let mut depth = 0usize;
    for (idx, ch) in line.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                return Some((line[..idx].trim(), &line[idx + 1..]));
            }
            _ => {}
        }
    }
    None
}
