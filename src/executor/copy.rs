//! Streaming file copy

use crate::types::FreshError;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

const BUFFER_SIZE: usize = 128 * 1024;

/// Stream the bytes of `src` into a newly created (or truncated) `dest`.
///
/// Both handles are closed when this returns, on success and on error.
/// No temporary file is used, so a failed copy can leave a partial `dest`.
///
/// # Returns
/// * `Ok(u64)` - Number of bytes copied
///
/// # Errors
/// * `FreshError::SourceOpen` - `src` cannot be opened
/// * `FreshError::DestinationCreate` - `dest` cannot be created
/// * `FreshError::Io` - reading or writing failed mid-stream
///
/// # Example
/// ```no_run
/// use freshcp::executor::copy_file;
/// use std::path::Path;
///
/// let bytes = copy_file(Path::new("in/b.txt"), Path::new("out/out.dat"))?;
/// # Ok::<(), freshcp::FreshError>(())
/// ```
pub fn copy_file(src: &Path, dest: &Path) -> Result<u64, FreshError> {
    tracing::debug!(src = %src.display(), dest = %dest.display(), "Copying");

    let mut src_file = File::open(src).map_err(|source| FreshError::SourceOpen {
        path: src.to_path_buf(),
        source,
    })?;
    let mut dest_file = File::create(dest).map_err(|source| FreshError::DestinationCreate {
        path: dest.to_path_buf(),
        source,
    })?;

    let mut buffer = vec![0u8; BUFFER_SIZE];
    let mut total_bytes = 0u64;

    loop {
        let bytes_read = src_file.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        dest_file.write_all(&buffer[..bytes_read])?;
        total_bytes += bytes_read as u64;
    }
    dest_file.flush()?;

    Ok(total_bytes)
}
