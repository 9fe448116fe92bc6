//! String-level path helpers.
//!
//! Compiler paths may be written for another host (a Windows path read on
//! Linux), so these split on both separators instead of using `std::path`.

const SEPARATORS: [char; 2] = ['/', '\\'];

/// Final component of `path`
pub fn basename(path: &str) -> &str {
    let trimmed = path.trim_end_matches(SEPARATORS);
    match trimmed.rfind(SEPARATORS) {
        Some(idx) => &trimmed[idx + 1..],
        None => trimmed,
    }
}

/// Everything before the final component; `.` when there is no separator
pub fn dirname(path: &str) -> &str {
    let trimmed = path.trim_end_matches(SEPARATORS);
    match trimmed.rfind(SEPARATORS) {
        Some(0) => &trimmed[..1],
        Some(idx) => &trimmed[..idx],
        None => ".",
    }
}
