use crate::error::ConvertError;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// One fully encoded output file
#[derive(Debug)]
pub struct PendingOutput {
    pub path: PathBuf,
    pub bytes: Vec<u8>,
}

impl PendingOutput {
    pub fn new(path: PathBuf, bytes: Vec<u8>) -> Self {
        Self { path, bytes }
    }
}

/// `path` with `.ext` appended to the full file name (`a.jpg` -> `a.jpg.epa`)
pub fn with_appended_extension(path: &Path, ext: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".");
    name.push(ext);
    PathBuf::from(name)
}

fn temp_path_for(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let temp_name = format!(".{}.{}.tmp", file_name, std::process::id());
    match path.parent() {
        Some(parent) => parent.join(temp_name),
        None => PathBuf::from(temp_name),
    }
}

fn remove_files(paths: &[PathBuf]) {
    for path in paths {
        if let Err(e) = fs::remove_file(path) {
            tracing::warn!(path = %path.display(), %e, "Failed to clean up after write error");
        }
    }
}

/// Write all outputs or none of them.
///
/// Targets that are existing directories are refused before anything is
/// written. Every output is then written to a hidden sibling temporary
/// file, and only when all temporaries exist are they renamed into place.
/// On failure the remaining temporaries and any outputs already renamed
/// are removed.
pub fn write_outputs(outputs: &[PendingOutput]) -> Result<(), ConvertError> {
    if let Some(output) = outputs.iter().find(|o| o.path.is_dir()) {
        return Err(ConvertError::Io {
            path: output.path.clone(),
            source: io::Error::other("target is a directory"),
        });
    }

    let mut temps: Vec<PathBuf> = Vec::with_capacity(outputs.len());

    for output in outputs {
        let temp = temp_path_for(&output.path);
        if let Err(source) = fs::write(&temp, &output.bytes) {
            // A partially written temp may exist
            if temp.exists() {
                temps.push(temp);
            }
            remove_files(&temps);
            return Err(ConvertError::Io {
                path: output.path.clone(),
                source,
            });
        }
        tracing::trace!(path = %temp.display(), bytes = output.bytes.len(), "Wrote temporary file");
        temps.push(temp);
    }

    for (i, (output, temp)) in outputs.iter().zip(&temps).enumerate() {
        if let Err(source) = fs::rename(temp, &output.path) {
            remove_files(&temps[i..]);
            let renamed: Vec<PathBuf> = outputs[..i].iter().map(|o| o.path.clone()).collect();
            remove_files(&renamed);
            return Err(ConvertError::Io {
                path: output.path.clone(),
                source,
            });
        }
        tracing::debug!(path = %output.path.display(), bytes = output.bytes.len(), "Wrote output");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn dir_entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_appended_extension() {
        assert_eq!(
            with_appended_extension(Path::new("pics/cat.jpg"), "epa"),
            PathBuf::from("pics/cat.jpg.epa")
        );
        assert_eq!(
            with_appended_extension(Path::new("raw"), "bmp"),
            PathBuf::from("raw.bmp")
        );
    }

    #[test]
    fn test_writes_all_outputs() {
        let dir = TempDir::new().unwrap();
        let outputs = vec![
            PendingOutput::new(dir.path().join("a.bmp"), vec![1, 2, 3]),
            PendingOutput::new(dir.path().join("a.epa"), vec![4; 10]),
        ];
        write_outputs(&outputs).unwrap();

        assert_eq!(dir_entries(dir.path()), vec!["a.bmp", "a.epa"]);
        assert_eq!(fs::read(dir.path().join("a.bmp")).unwrap(), vec![1, 2, 3]);
        assert_eq!(fs::read(dir.path().join("a.epa")).unwrap(), vec![4; 10]);
    }

    #[test]
    fn test_failed_write_leaves_nothing_behind() {
        let dir = TempDir::new().unwrap();
        let outputs = vec![
            PendingOutput::new(dir.path().join("ok.bmp"), vec![1]),
            PendingOutput::new(dir.path().join("missing/sub/ok.epa"), vec![2]),
        ];
        let err = write_outputs(&outputs).unwrap_err();

        assert!(matches!(err, ConvertError::Io { .. }));
        assert!(dir_entries(dir.path()).is_empty());
    }

    #[test]
    fn test_overwrites_existing_output() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("x.epa");
        fs::write(&path, b"old").unwrap();

        write_outputs(&[PendingOutput::new(path.clone(), b"new".to_vec())]).unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"new");
        assert_eq!(dir_entries(dir.path()), vec!["x.epa"]);
    }

    #[test]
    fn test_directory_target_writes_nothing() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("p.png.epa")).unwrap();
        fs::write(dir.path().join("p.png.epa/keep"), b"x").unwrap();

        let outputs = vec![
            PendingOutput::new(dir.path().join("p.png.bmp"), vec![1]),
            PendingOutput::new(dir.path().join("p.png.epa"), vec![2]),
        ];
        let err = write_outputs(&outputs).unwrap_err();

        assert!(matches!(err, ConvertError::Io { ref path, .. } if path.ends_with("p.png.epa")));
        assert_eq!(dir_entries(dir.path()), vec!["p.png.epa"]);
        assert_eq!(dir_entries(&dir.path().join("p.png.epa")), vec!["keep"]);
    }
}
