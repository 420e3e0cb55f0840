use crate::error::{HammingError, Result};

// Allocates a `rows x cols` buffer filled with `value`, reporting overflow or
// allocator refusal as an error instead of aborting the process
pub(crate) fn try_filled<T: Clone>(
    rows: usize,
    cols: usize,
    value: T,
    what: &'static str,
) -> Result<Vec<T>> {
    let elements = rows
        .checked_mul(cols)
        .ok_or_else(|| HammingError::allocation(what, usize::MAX))?;
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(elements)
        .map_err(|_| HammingError::allocation(what, elements))?;
    buffer.resize(elements, value);
    Ok(buffer)
}
