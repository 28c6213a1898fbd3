//! User input utilities for interactive CLI prompts
//!
//! When organize/reconstruct are invoked without paths, these functions
//! ask for them on the terminal, offering a default derived from the
//! input location.

use crate::{Error, Result};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Prompt for a path, falling back to `default` on empty input
pub fn prompt_path(message: &str, default: Option<&Path>) -> Result<PathBuf> {
    match default {
        Some(default) => print!("{} [{}]: ", message, default.display()),
        None => print!("{}: ", message),
    }
    io::stdout()
        .flush()
        .map_err(|e| Error::io("Failed to flush stdout".to_string(), e))?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| Error::io("Failed to read user input".to_string(), e))?;

    let input = input.trim();
    if input.is_empty() {
        match default {
            Some(default) => Ok(default.to_path_buf()),
            None => Err(Error::configuration(
                "A path is required but none was given".to_string(),
            )),
        }
    } else {
        Ok(PathBuf::from(input))
    }
}

/// Prompt for an existing file, re-asking until the path exists
pub fn prompt_existing_file(message: &str) -> Result<PathBuf> {
    loop {
        let path = prompt_path(message, None)?;
        if path.is_file() {
            return Ok(path);
        }
        println!("File not found: {}", path.display());
    }
}

/// Prompt for an existing directory, re-asking until the path exists
pub fn prompt_existing_dir(message: &str) -> Result<PathBuf> {
    loop {
        let path = prompt_path(message, None)?;
        if path.is_dir() {
            return Ok(path);
        }
        println!("Directory not found: {}", path.display());
    }
}

/// Get user confirmation for an action
pub fn prompt_confirmation(message: &str, default_yes: bool) -> Result<bool> {
    let default_text = if default_yes { "Y/n" } else { "y/N" };
    print!("{} [{}]: ", message, default_text);

    io::stdout()
        .flush()
        .map_err(|e| Error::io("Failed to flush stdout".to_string(), e))?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| Error::io("Failed to read user input".to_string(), e))?;

    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return Ok(default_yes);
    }

    match input.as_str() {
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        _ => {
            println!("Please enter 'y' for yes or 'n' for no.");
            prompt_confirmation(message, default_yes)
        }
    }
}
