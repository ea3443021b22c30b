use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::utils::error::BoxResult;

/// Extensions treated as presentation documents
const HTML_EXTENSIONS: [&str; 2] = ["html", "htm"];

/// Create a directory and any parent directories if they don't exist
pub fn create_directory<P: AsRef<Path>>(path: P) -> BoxResult<()> {
    fs::create_dir_all(path.as_ref())?;
    Ok(())
}

/// Read a file to string
pub fn read_file<P: AsRef<Path>>(path: P) -> BoxResult<String> {
    Ok(fs::read_to_string(path.as_ref())?)
}

/// Write a string to a file, creating parent directories as needed
pub fn write_file<P: AsRef<Path>>(path: P, contents: &str) -> BoxResult<()> {
    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            create_directory(parent)?;
        }
    }

    fs::write(path.as_ref(), contents)?;
    Ok(())
}

/// Check whether a path looks like an HTML document
pub fn is_html_file<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .map_or(false, |ext| HTML_EXTENSIONS.contains(&ext.as_str()))
}

/// List the HTML documents under `input`.
///
/// A file is returned as-is; a directory is walked recursively and the
/// results are sorted so batch runs are deterministic.
pub fn list_html_files<P: AsRef<Path>>(input: P) -> BoxResult<Vec<PathBuf>> {
    let input = input.as_ref();

    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(input).follow_links(true) {
        let entry = entry?;
        if entry.file_type().is_file() && is_html_file(entry.path()) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("revealtoc-fs-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        create_directory(&dir).unwrap();
        dir
    }

    #[test]
    fn test_is_html_file() {
        assert!(is_html_file("deck.html"));
        assert!(is_html_file("talks/DECK.HTM"));
        assert!(!is_html_file("notes.md"));
        assert!(!is_html_file("README"));
    }

    #[test]
    fn test_list_html_files_walks_directories() {
        let dir = scratch_dir("walk");
        write_file(dir.join("b.html"), "<html></html>").unwrap();
        write_file(dir.join("nested/a.html"), "<html></html>").unwrap();
        write_file(dir.join("nested/style.css"), "body {}").unwrap();

        let files = list_html_files(&dir).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| is_html_file(f)));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_list_html_files_single_file() {
        let dir = scratch_dir("single");
        let file = dir.join("deck.html");
        write_file(&file, "<html></html>").unwrap();

        assert_eq!(list_html_files(&file).unwrap(), vec![file.clone()]);
        assert_eq!(read_file(&file).unwrap(), "<html></html>");

        fs::remove_dir_all(&dir).unwrap();
    }
}
