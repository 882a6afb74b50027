use crate::Result;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Replace every literal occurrence of `old` with `new` in the file at `path`
///
/// The whole file is read as UTF-8, rewritten in memory, and written back over
/// the original. Nothing is backed up and the write is not atomic.
///
/// # Returns
///
/// * `Ok(n)` - The number of non-overlapping occurrences that were replaced
/// * `Err(error)` - Read, decode or write failure; the file may be left truncated
///   if the write itself failed
pub fn replace_in_file<P: AsRef<Path>>(path: P, old: &str, new: &str) -> Result<usize> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let replacements = content.matches(old).count();
    let rewritten = content.replace(old, new);

    fs::write(path, rewritten)?;
    debug!(path = %path.display(), replacements, "rewrote file");

    Ok(replacements)
}
