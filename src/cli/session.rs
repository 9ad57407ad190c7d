/// Session-token persistence between CLI invocations.
///
/// Each command runs in a fresh process, so the token from `bpdb login` is
/// kept in an explicit external store: a plain file under the user's config
/// directory. The library client itself never touches the filesystem.
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use bpdb::SessionToken;

const APP_DIR: &str = "bpdb";
const SESSION_FILE: &str = "session";

/// Path of the session-token file (`<config_dir>/bpdb/session`).
pub fn session_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir().context("could not determine the user config directory")?;
    Ok(config_dir.join(APP_DIR).join(SESSION_FILE))
}

/// Persist the token from a successful login.
pub fn store(token: &SessionToken) -> Result<()> {
    store_at(&session_path()?, token)
}

/// Load the stored token, if any. A missing file means "not logged in".
pub fn load() -> Result<Option<SessionToken>> {
    load_at(&session_path()?)
}

fn store_at(path: &Path, token: &SessionToken) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(path, token.as_str())
        .with_context(|| format!("failed to write session file {}", path.display()))
}

fn load_at(path: &Path) -> Result<Option<SessionToken>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read session file {}", path.display()));
        }
    };

    let token = SessionToken::new(contents)
        .with_context(|| format!("session file {} holds an empty token", path.display()))?;
    Ok(Some(token))
}
