// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Make sure `path` can be written.
///
/// A missing parent directory is an error. An existing file is replaced
/// when `force` is set, otherwise the user is asked on stdin.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    let missing_parent = path
        .parent()
        .is_some_and(|p| !p.as_os_str().is_empty() && !p.is_dir());
    if missing_parent {
        let parent = path.parent().unwrap_or(path);
        return Err(AppError::Export(format!(
            "output directory does not exist: {}",
            parent.display()
        )));
    }

    if path.is_dir() {
        return Err(AppError::Export(format!(
            "output path is a directory: {}",
            path.display()
        )));
    }

    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));
    if confirm("Overwrite? [y/N]: ", io::stdin().lock())? {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(
            "export cancelled: existing file not overwritten".to_string(),
        ))
    }
}

fn confirm<R: BufRead>(prompt: &str, mut input: R) -> AppResult<bool> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
