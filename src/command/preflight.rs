use std::io::ErrorKind;
use std::path::Path;

use log::debug;

use crate::fileformat::RunConfig;
use crate::runtime::Error;

/// Only a definite "not found" counts as missing; other stat errors surface later, when the file is used
pub fn file_exists(path: &Path) -> bool {
    match std::fs::metadata(path) {
        Ok(_) => true,
        Err(e) => e.kind() != ErrorKind::NotFound,
    }
}

/// Check that every input of the run is present: reads in order, then MiXCR, then the reference library.
/// Stops at the first missing file
pub fn check_inputs(config: &RunConfig) -> Result<(), Error> {
    let mut to_check = Vec::new();
    for read in config.read_paths() {
        to_check.push(("Reads", read));
    }
    to_check.push(("MiXCR", config.mixcr_path()));
    to_check.push(("MiXCR reference", config.reference_path()));

    for (what, path) in to_check {
        debug!("Checking {} input {:?}", what, path);
        if !file_exists(&path) {
            return Err(Error::file_not_found(what, path));
        }
    }
    Ok(())
}
