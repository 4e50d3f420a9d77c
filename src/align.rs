//! Text alignment

use std::iter;

/// Horizontal placement of a value inside a fixed-width cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    /// Value first, padding after.
    Left,

    /// Padding split around the value, the odd space going after it.
    Center,

    /// Padding first, value after.
    Right,
}

/// Pads or truncates `value` to exactly `width` characters and appends one separator space.
///
/// Values longer than `width` are cut to the first `width` characters.
pub fn align(value: &str, alignment: Alignment, width: usize) -> String {
    let mut out = String::with_capacity(width + 1);

    push_aligned(&mut out, value, alignment, width);

    out
}

/// Same as [`align`], but appends to an existing buffer.
pub fn push_aligned(out: &mut String, value: &str, alignment: Alignment, width: usize) {
    let length = value.chars().count().min(width);
    let padding = width - length;

    let (before, after) = match alignment {
        Alignment::Left => (0, padding),
        Alignment::Right => (padding, 0),
        Alignment::Center => (padding / 2, padding - padding / 2),
    };

    out.extend(iter::repeat_n(' ', before));
    out.extend(value.chars().take(length));
    out.extend(iter::repeat_n(' ', after));
    out.push(' ');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_splits_even_padding() {
        assert_eq!(align("SomeLine", Alignment::Center, 14), "   SomeLine    ");
    }

    #[test]
    fn center_puts_odd_space_after() {
        assert_eq!(align("SomeLine", Alignment::Center, 15), "   SomeLine     ");
    }

    #[test]
    fn center_truncates_long_value() {
        assert_eq!(align("SomeLine", Alignment::Center, 5), "SomeL ");
    }

    #[test]
    fn right_pads_before() {
        assert_eq!(align("SomeLine", Alignment::Right, 15), "       SomeLine ");
    }

    #[test]
    fn left_pads_after() {
        assert_eq!(align("SomeLine", Alignment::Left, 15), "SomeLine        ");
    }

    #[test]
    fn exact_width_only_gets_separator() {
        assert_eq!(align("SomeLine", Alignment::Right, 8), "SomeLine ");
    }

    #[test]
    fn zero_width_leaves_separator() {
        assert_eq!(align("SomeLine", Alignment::Left, 0), " ");
        assert_eq!(align("", Alignment::Center, 0), " ");
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        assert_eq!(align("Crème brûlée", Alignment::Left, 5), "Crème ");
    }

    #[test]
    fn push_aligned_appends_to_buffer() {
        let mut out = String::from("|");

        push_aligned(&mut out, "ab", Alignment::Right, 4);
        push_aligned(&mut out, "cd", Alignment::Left, 3);

        assert_eq!(out, "|  ab cd  ");
    }
}
