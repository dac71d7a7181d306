use std::{fs, path::PathBuf};

/// Gets PathBuf depending on given callback, then creates a new directory within that with the crate's name
/// Takes a function that returns a directory, for example, `dirs::cache_dir()`
pub fn get_and_create_dir<F>(callback: F) -> Result<PathBuf, Box<dyn std::error::Error>>
where
    F: Fn() -> Option<PathBuf>,
{
    let directory = callback()
        .ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "could not get directory")
        })?
        .join("line-clamp");

    let _ = fs::create_dir_all(&directory);

    Ok(directory)
}
