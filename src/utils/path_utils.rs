use log::warn;
use std::path::{Path, PathBuf};

/// Expands ~ and env vars if possible (only for UTF-8 paths). A path with nothing to expand comes back unchanged.
/// Logs a warning if the path is not valid UTF-8 or expansion fails, and then returns the original path.
/// Does NOT check that the file exists.
pub fn expand_path<P: AsRef<Path>>(input: P) -> PathBuf {
    let input = input.as_ref();
    match input.to_str() {
        Some(s) => match shellexpand::full(s) {
            Ok(expanded) => PathBuf::from(expanded.into_owned()),
            Err(e) => {
                warn!("Failed to expand path {:?} ({}). Using original path.", input, e);
                input.to_path_buf()
            }
        },
        None => {
            warn!("Path {:?} is not valid UTF-8. Skipping path expansion.", input);
            input.to_path_buf()
        }
    }
}
