//! Bounded search: the only form of retrying the generators perform.
//!
//! Every search draws at most `max_attempts` candidates and stops at the first
//! valid one. There is no open-ended or recursive retry anywhere else.

/// Draw up to `max_attempts` candidates, returning the first one `valid` accepts.
pub fn search<T>(
    max_attempts: usize,
    mut draw: impl FnMut() -> T,
    valid: impl Fn(&T) -> bool,
) -> Option<T> {
    (0..max_attempts).map(|_| draw()).find(|candidate| valid(candidate))
}

/// Like [`search`], for draws that can fail outright.
///
/// A draw error aborts the search immediately; it is not counted as an
/// invalid candidate.
pub fn try_search<T, E>(
    max_attempts: usize,
    mut draw: impl FnMut() -> Result<T, E>,
    valid: impl Fn(&T) -> bool,
) -> Result<Option<T>, E> {
    for _ in 0..max_attempts {
        let candidate = draw()?;
        if valid(&candidate) {
            return Ok(Some(candidate));
        }
    }
    Ok(None)
}
