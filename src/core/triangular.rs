//! Triangular index arithmetic.
//!
//! Positions on the board are numbered row by row starting at 1:
//!
//! ```text
//!         1
//!       2   3
//!     4   5   6
//!   7   8   9  10
//! 11  12  13  14  15
//! ```
//!
//! Row `r` ends at the `r`-th triangular number, so every relationship
//! between a position and its row is closed-form. Nothing here allocates.
//!
//! ```
//! use peg_solitaire::core::triangular::{is_triangular, row_end, row_of, triangular};
//!
//! assert_eq!(triangular(5), 15);
//! assert!(is_triangular(10));
//! assert_eq!(row_of(8), 4);
//! assert_eq!(row_end(0), 0);
//! ```

/// The `n`-th triangular number, `n * (n + 1) / 2`.
///
/// `triangular(0)` is 0. Saturates at `u64::MAX` once the true value no
/// longer fits (`n > 6_074_000_999`).
#[must_use]
pub const fn triangular(n: u64) -> u64 {
    let wide = triangular_wide(n);
    if wide > u64::MAX as u128 {
        u64::MAX
    } else {
        wide as u64
    }
}

/// Exact triangular number; never overflows for any `u64` input.
const fn triangular_wide(n: u64) -> u128 {
    let n = n as u128;
    n * (n + 1) / 2
}

/// True iff `x == triangular(n)` for some `n >= 1`.
#[must_use]
pub fn is_triangular(x: u64) -> bool {
    x != 0 && triangular_wide(row_of(x)) == u128::from(x)
}

/// The 1-based row holding `position`.
///
/// Returns the `r` with `triangular(r - 1) < position <= triangular(r)`.
/// Position 0 maps to the sentinel row 0. Defined for every `u64`.
#[must_use]
pub fn row_of(position: u64) -> u64 {
    if position == 0 {
        return 0;
    }

    // Solve r * (r + 1) / 2 >= position, then correct float error.
    let target = u128::from(position);
    let discriminant = (8 * target + 1) as f64;
    let estimate = ((discriminant.sqrt() - 1.0) / 2.0).ceil() as u64;
    let mut row = estimate.max(1);
    while triangular_wide(row) < target {
        row += 1;
    }
    while row > 1 && triangular_wide(row - 1) >= target {
        row -= 1;
    }
    row
}

/// The last position of `row`, or 0 for row 0 ("no previous row").
#[must_use]
pub const fn row_end(row: u64) -> u64 {
    triangular(row)
}

/// The first position of `row` (1-based). Row 0 has none and yields 0.
#[must_use]
pub const fn row_start(row: u64) -> u64 {
    if row == 0 {
        0
    } else {
        row_end(row - 1).saturating_add(1)
    }
}
