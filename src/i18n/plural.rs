//! Pipe-separated plural choices (`"no apples | one apple | {count} apples"`).

/// Separates the choices of a plural message.
pub const CHOICE_SEPARATOR: char = '|';

/// Index of the choice to use for `count` among `choice_count` choices.
///
/// - two choices: singular for `1`, plural otherwise
/// - three or more: zero, one, many (extra choices are never selected)
#[must_use]
pub const fn choice_index(count: usize, choice_count: usize) -> usize {
    match choice_count {
        0 | 1 => 0,
        2 => {
            if count == 1 {
                0
            } else {
                1
            }
        }
        _ => {
            if count < 2 {
                count
            } else {
                2
            }
        }
    }
}

/// Selects the trimmed choice of `message` for `count`.
#[must_use]
pub fn select_choice(message: &str, count: usize) -> &str {
    let choices: Vec<&str> = message.split(CHOICE_SEPARATOR).map(str::trim).collect();
    choices.get(choice_index(count, choices.len())).copied().unwrap_or(message)
}
