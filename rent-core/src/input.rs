// rent-core/src/input.rs
//! Loads the file under analysis fully into memory.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use log::debug;

use crate::errors::RentError;

/// Reads every byte of `path`.
///
/// A missing file is reported as [`RentError::InputNotFound`] so callers can
/// tell it apart from permission or device errors.
pub fn read_input<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, RentError> {
    let path = path.as_ref();
    match fs::read(path) {
        Ok(data) => {
            debug!("Read {} bytes from {}", data.len(), path.display());
            Ok(data)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Err(RentError::InputNotFound(path.to_path_buf())),
        Err(e) => Err(RentError::IoError(e)),
    }
}
