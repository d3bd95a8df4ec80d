//! Line-oriented output of file listings.

use std::io::{self, Write};
use std::path::Path;

/// Write each path on its own line, with no other formatting.
///
/// On Unix the raw bytes of the path are written, so names that are not
/// valid UTF-8 come out exactly as stored on disk.
pub fn write_paths<W, P>(out: &mut W, paths: &[P]) -> io::Result<()>
where
    W: Write + ?Sized,
    P: AsRef<Path>,
{
    for path in paths {
        write_path(out, path.as_ref())?;
        out.write_all(b"\n")?;
    }
    out.flush()
}

#[cfg(unix)]
fn write_path<W: Write + ?Sized>(out: &mut W, path: &Path) -> io::Result<()> {
    use std::os::unix::ffi::OsStrExt;
    out.write_all(path.as_os_str().as_bytes())
}

#[cfg(not(unix))]
fn write_path<W: Write + ?Sized>(out: &mut W, path: &Path) -> io::Result<()> {
    write!(out, "{}", path.display())
}
