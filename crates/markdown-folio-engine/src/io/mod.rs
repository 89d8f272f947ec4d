use relative_path::RelativePath;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid content directory: {0}")]
    InvalidContentDir(String),
}

/// Read a markdown file and return its content
pub fn read_file(relative_path: &RelativePath, content_root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(content_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Write content to a file, creating parent directories as needed
pub fn write_file(
    relative_path: &RelativePath,
    root: &Path,
    content: &str,
) -> Result<(), IoError> {
    let absolute_path = relative_path.to_path(root);

    if let Some(parent) = absolute_path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(&absolute_path, content).map_err(IoError::Io)
}

/// Scan for markdown files under the content directory, sorted by path
pub fn scan_markdown_files(content_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    validate_content_dir(content_root)?;

    let mut files = Vec::new();
    scan_directory_recursive(content_root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_content_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidContentDir(format!(
            "{} does not exist or is not a directory",
            path.display()
        )));
    }

    Ok(())
}
