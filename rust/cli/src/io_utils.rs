//! File helpers shared by the commands that read and write game logs.
//!
//! Paths ending in `.zst` are Zstandard-compressed transparently in both
//! directions; everything else is plain UTF-8 text.

use std::path::Path;

/// Read text file with automatic .zst decompression detection.
///
/// UTF-8 BOM is stripped if present.
///
/// ```rust,no_run
/// # use sequence_cli::io_utils::read_text_auto;
/// let plain = read_text_auto("games.jsonl").unwrap();
/// let packed = read_text_auto("games.jsonl.zst").unwrap();
/// ```
pub fn read_text_auto(path: &str) -> Result<String, String> {
    let mut content = if path.ends_with(".zst") {
        let comp = std::fs::read(path).map_err(|e| format!("{}: {}", path, e))?;
        let dec = zstd::bulk::decompress(&comp, 8 * 1024 * 1024).map_err(|e| e.to_string())?;
        String::from_utf8(dec).map_err(|e| e.to_string())?
    } else {
        std::fs::read_to_string(path).map_err(|e| format!("{}: {}", path, e))?
    };
    strip_utf8_bom(&mut content);
    Ok(content)
}

/// Write `content` to `path`, compressing when the path ends in `.zst`.
/// Missing parent directories are created and the file is replaced
/// atomically (see [`replace_file`]).
pub fn write_text_auto(path: &str, content: &str) -> Result<(), String> {
    replace_file(path, |tmp| {
        if path.ends_with(".zst") {
            let comp = zstd::bulk::compress(content.as_bytes(), 0).map_err(|e| e.to_string())?;
            std::fs::write(tmp, comp).map_err(|e| format!("{}: {}", tmp, e))
        } else {
            std::fs::write(tmp, content).map_err(|e| format!("{}: {}", tmp, e))
        }
    })
}

/// Replace `path` with whatever `write` puts into the sibling `<path>.tmp`.
///
/// The temporary file is renamed over `path` only after `write` succeeds;
/// on failure it is removed and `path` is left untouched.
pub fn replace_file<F>(path: &str, write: F) -> Result<(), String>
where
    F: FnOnce(&str) -> Result<(), String>,
{
    ensure_parent_dir(Path::new(path))?;
    let tmp = format!("{}.tmp", path);
    if let Err(e) = write(&tmp) {
        let _ = std::fs::remove_file(&tmp);
        return Err(e);
    }
    std::fs::rename(&tmp, path).map_err(|e| format!("{}: {}", path, e))
}

/// Ensure parent directory exists for given path, creating if needed.
pub fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create directory {}: {}", parent.display(), e))?;
    }
    Ok(())
}

fn strip_utf8_bom(s: &mut String) {
    const UTF8_BOM: &str = "\u{feff}";
    if s.starts_with(UTF8_BOM) {
        s.drain(..UTF8_BOM.len());
    }
}
