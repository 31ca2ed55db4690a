//! Snapshot persistence.
//!
//! The snapshot is the single durable artifact of a run. Each write replaces
//! the previous file in full: the JSON is written to a temp file in the same
//! directory and renamed over the destination.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use tempfile::{Builder, NamedTempFile};

use crate::error_handling::SnapshotError;
use crate::models::{MapListing, Snapshot};

/// Writes the final listings for `query` to `path`, overwriting any prior snapshot.
///
/// Missing parent directories are created. Returns the snapshot as written.
///
/// # Errors
///
/// Returns a `SnapshotError` if the directory, temp file or rename fails, or
/// if serialization fails. The previous snapshot is left untouched then.
pub fn write_snapshot(
    path: &Path,
    query: &str,
    maps: Vec<MapListing>,
) -> Result<Snapshot, SnapshotError> {
    let snapshot = Snapshot::new(query, maps);

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut tmp = snapshot_temp_file(dir)?;
    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        serde_json::to_writer_pretty(&mut writer, &snapshot)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
    }
    tmp.persist(path)?;

    log::info!(
        "Saved {} map(s) for '{}' to {}",
        snapshot.map_count(),
        snapshot.query(),
        path.display()
    );
    Ok(snapshot)
}

/// Temp file in `dir` created with the mode a plain `fs::write` would get
/// (0666 filtered by the umask), so the persisted snapshot stays readable by
/// other users.
fn snapshot_temp_file(dir: &Path) -> std::io::Result<NamedTempFile> {
    let mut builder = Builder::new();
    builder.prefix(".maps-data").suffix(".tmp");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    builder.tempfile_in(dir)
}

/// Loads a snapshot previously written by [`write_snapshot`].
pub fn read_snapshot(path: &Path) -> Result<Snapshot, SnapshotError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
