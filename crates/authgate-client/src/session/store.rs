/*
[INPUT]:  Session directory plus token and user values
[OUTPUT]: Session state surviving process restarts
[POS]:    Session layer - file-backed token and user record storage
[UPDATE]: When storage format or file naming conventions change
*/

use std::fs;
use std::io;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::http::Result;

const TOKEN_FILE: &str = "auth_token";
const USER_FILE: &str = "user.json";

/// Locally cached proof of authentication: an opaque token plus the user
/// record the server returned at login. Two files in one directory; absence
/// of the token file means "no session". Writes are last-write-wins, no
/// locking.
#[derive(Debug, Clone)]
pub struct SessionStore {
    dir: PathBuf,
}

impl SessionStore {
    /// Create a store backed by the given directory
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Default session directory relative to the current working directory.
    ///
    /// Default: `./.authgate-config/session`.
    pub fn default_dir() -> PathBuf {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(".authgate-config")
            .join("session")
    }

    /// Stored token, if a session exists.
    ///
    /// Only an absent token file means "no session"; any other read error
    /// surfaces as a storage error.
    pub fn token(&self) -> Result<Option<String>> {
        let content = match fs::read_to_string(self.token_path()) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let token = content.trim();
        if token.is_empty() {
            return Ok(None);
        }
        Ok(Some(token.to_string()))
    }

    /// Persist a session: the token and the user record returned at login
    pub fn store(&self, token: &str, user: &Value) -> io::Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }

        let token_path = self.token_path();
        fs::write(&token_path, token)?;

        let mut perms = fs::metadata(&token_path)?.permissions();
        perms.set_mode(0o600);
        fs::set_permissions(&token_path, perms)?;

        fs::write(self.user_path(), user.to_string())
    }

    /// Remove both session files. Missing files are not an error.
    pub fn clear(&self) -> io::Result<()> {
        remove_if_exists(self.token_path())?;
        remove_if_exists(self.user_path())
    }

    /// True iff a readable token is stored
    pub fn is_authenticated(&self) -> bool {
        matches!(self.token(), Ok(Some(_)))
    }

    /// Stored user record, or `None` when no session exists.
    ///
    /// A stored record that no longer parses as JSON is an error, not an
    /// absent session; so is a user file that exists but cannot be read.
    pub fn user(&self) -> Result<Option<Value>> {
        let content = match fs::read_to_string(self.user_path()) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        Ok(Some(serde_json::from_str(&content)?))
    }

    fn token_path(&self) -> PathBuf {
        self.dir.join(TOKEN_FILE)
    }

    fn user_path(&self) -> PathBuf {
        self.dir.join(USER_FILE)
    }
}

fn remove_if_exists(path: PathBuf) -> io::Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err),
    }
}
