//! Temporary file naming.
//!
//! Intermediate files live next to the final output so the trim tool writes
//! to the same volume the mux tool reads from. Only paths are produced here;
//! the files themselves are created by the external tools and removed by the
//! pipeline's cleanup pass.

use std::path::{Path, PathBuf};

use uuid::Uuid;

/// Returns a unique `<uuid>.<extension>` path inside `dir`. Does not create the file.
pub fn create_temp_file_path(dir: &Path, extension: &str) -> PathBuf {
    dir.join(format!("{}.{extension}", Uuid::new_v4()))
}
