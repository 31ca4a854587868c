use std::{
    fs::{self, File},
    path::Path,
};

pub fn file_exists(file_name: &str) -> bool {
    File::open(file_name).is_ok()
}

/* Create the parent directories of a file path, if any */
pub fn create_directories_if_needed(file_path: &str) -> std::io::Result<()> {
    if let Some(parent) = Path::new(file_path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/* Name of the file without its directories, used to recognize the kind of export */
pub fn file_name(file_path: &str) -> &str {
    Path::new(file_path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(file_path)
}
