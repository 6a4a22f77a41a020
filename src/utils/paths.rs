use crate::summary::credential::KEY_FILE_NAME;
use anyhow::{Context, Result, anyhow};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn get_app_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| anyhow!("Could not find home directory"))?;
    Ok(home.join(".gemini-memo"))
}

pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_app_dir()?.join("config.toml"))
}

pub fn get_log_path() -> Result<PathBuf> {
    Ok(get_app_dir()?.join("gmemo.log"))
}

/// Directory holding the running executable.
pub fn get_executable_dir() -> Result<PathBuf> {
    let exe = env::current_exe().context("Could not locate the running executable")?;
    exe.parent()
        .map(|dir| dir.to_path_buf())
        .ok_or_else(|| anyhow!("Executable path has no parent: {}", exe.display()))
}

/// `GEMINI_API_KEY.txt` next to the executable.
pub fn get_default_key_path() -> Result<PathBuf> {
    Ok(get_executable_dir()?.join(KEY_FILE_NAME))
}

pub fn ensure_app_dir_exists() -> Result<()> {
    let app_dir = get_app_dir()?;

    if !app_dir.exists() {
        fs::create_dir_all(&app_dir)
            .with_context(|| format!("Failed to create {}", app_dir.display()))?;
    }

    Ok(())
}
