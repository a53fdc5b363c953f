use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Resolve the application home directory.
///
/// Precedence:
/// 1. An explicit path, with a leading `~` expanded against `$HOME`.
/// 2. The platform default: `%APPDATA%\<subdir>` on Windows,
///    `$HOME/<subdir>` elsewhere.
///
/// The result is always absolute. When `create` is set the directory is
/// created if missing.
pub fn resolve_home_dir(
    explicit: Option<String>,
    default_subdir: &str,
    create: bool,
) -> Result<PathBuf> {
    let resolved = match explicit {
        Some(raw) => expand_tilde(&raw)?,
        None => platform_base_dir()?.join(default_subdir),
    };

    let resolved = absolutize(&resolved)?;

    if create {
        std::fs::create_dir_all(&resolved)
            .with_context(|| format!("Failed to create home dir {}", resolved.display()))?;
    }

    Ok(resolved)
}

fn platform_base_dir() -> Result<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var_os("APPDATA")
            .map(PathBuf::from)
            .context("APPDATA is not set")
    }
    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("HOME")
            .map(PathBuf::from)
            .context("HOME is not set")
    }
}

fn expand_tilde(raw: &str) -> Result<PathBuf> {
    if raw == "~" {
        return platform_base_dir();
    }
    if let Some(rest) = raw.strip_prefix("~/").or_else(|| raw.strip_prefix("~\\")) {
        return Ok(platform_base_dir()?.join(rest));
    }
    Ok(PathBuf::from(raw))
}

fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        let cwd = env::current_dir().context("Failed to read current dir")?;
        Ok(cwd.join(path))
    }
}
