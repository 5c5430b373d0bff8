//! Source-location ordering.
//!
//! Lines and columns are 1-indexed as reported by rules; ordering is
//! line-major with the column as tie-break.

use std::cmp::Ordering;

/// Anything that sits at a (line, column) position in a source file.
pub trait Located {
    /// Line number (1-indexed).
    fn line(&self) -> u32;
    /// Column number (1-indexed).
    fn column(&self) -> u32;
}

/// Compares the locations of two items in a source file.
///
/// Returns `Less` if `a` appears before `b`, `Greater` if `a` appears
/// after `b`, and `Equal` if they share a location.
pub fn compare_locations<A: Located + ?Sized, B: Located + ?Sized>(a: &A, b: &B) -> Ordering {
    a.line()
        .cmp(&b.line())
        .then_with(|| a.column().cmp(&b.column()))
}
