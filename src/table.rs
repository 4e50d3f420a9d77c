//! Table formatting
//!
//! Renders rows of string cells as a fixed-width text table. Every cell is
//! passed through [`push_aligned`], so each column is followed by a single
//! separator space. Layout:
//!
//! ```text
//! <header>
//! <rule>
//! <row>...
//! <rule>      (only when there is at least one row)
//! <footer>    (no trailing newline)
//! ```

use std::iter;

use crate::align::{Alignment, push_aligned};

/// Character used to draw horizontal rules.
pub const RULE_CHAR: char = '-';

/// Column-aligned table formatter for `N` columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableFormatter<const N: usize> {
    alignments: [Alignment; N],
}

impl<const N: usize> TableFormatter<N> {
    /// Create a formatter with the given per-column alignment.
    pub fn new(alignments: [Alignment; N]) -> Self {
        Self { alignments }
    }

    /// Per-column alignment.
    pub fn alignments(&self) -> &[Alignment; N] {
        &self.alignments
    }

    /// Render `rows` between `header` and `footer`.
    ///
    /// Column widths are negotiated across header, rows and footer; values
    /// never exceed their column, so no cell is truncated here.
    pub fn format_table<H, R, F>(
        &self,
        rows: &[[R; N]],
        header: &[H; N],
        footer: &[F; N],
    ) -> String
    where
        H: AsRef<str>,
        R: AsRef<str>,
        F: AsRef<str>,
    {
        let mut widths = [0; N];

        widen(&mut widths, header);
        widen(&mut widths, footer);
        for row in rows {
            widen(&mut widths, row);
        }

        let rule_length = rule_length(&widths);
        let mut out = String::new();

        self.push_row(&mut out, header, &widths);
        out.push('\n');
        push_rule(&mut out, rule_length);

        for row in rows {
            self.push_row(&mut out, row, &widths);
            out.push('\n');
        }

        if !rows.is_empty() {
            push_rule(&mut out, rule_length);
        }

        self.push_row(&mut out, footer, &widths);

        out
    }

    fn push_row<S: AsRef<str>>(&self, out: &mut String, row: &[S; N], widths: &[usize; N]) {
        for ((cell, alignment), width) in row.iter().zip(&self.alignments).zip(widths) {
            push_aligned(out, cell.as_ref(), *alignment, *width);
        }
    }
}

/// Grow each column width to fit the cells of `row`.
fn widen<S: AsRef<str>, const N: usize>(widths: &mut [usize; N], row: &[S; N]) {
    for (width, cell) in widths.iter_mut().zip(row) {
        *width = (*width).max(cell.as_ref().chars().count());
    }
}

/// Sum of column widths plus one separator between each pair of columns.
fn rule_length<const N: usize>(widths: &[usize; N]) -> usize {
    widths.iter().sum::<usize>() + N.saturating_sub(1)
}

fn push_rule(out: &mut String, length: usize) {
    out.extend(iter::repeat_n(RULE_CHAR, length));
    out.push('\n');
}
