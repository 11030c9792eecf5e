//! Persisted session token.
//!
//! On disk the token is a JSON object:
//!
//! ```text
//! {"userId": "U-…", "expire": "2030-01-01T00:00:00Z", "token": "…", "secretMachineId": "…"}
//! ```

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AuthError, SdkError};
use crate::shared::serde_util::iso8601;

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenFile {
    pub user_id: String,
    #[serde(with = "iso8601")]
    pub expire: DateTime<Utc>,
    pub token: String,
    pub secret_machine_id: String,
}

impl TokenFile {
    /// Read a token file, rejecting it unless `expire` is after `now`.
    ///
    /// A missing file or an expired token is [`AuthError::NoToken`].
    pub fn load(path: impl AsRef<Path>, now: DateTime<Utc>) -> Result<Self, SdkError> {
        let raw = match fs::read_to_string(path.as_ref()) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(AuthError::NoToken.into()),
            Err(e) => return Err(e.into()),
        };

        let file: TokenFile = serde_json::from_str(&raw)?;
        if now < file.expire {
            Ok(file)
        } else {
            tracing::debug!(expire = %file.expire, "Persisted token has expired");
            Err(AuthError::NoToken.into())
        }
    }

    /// Write the token file. On unix it is created readable by the owner only.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SdkError> {
        let raw = serde_json::to_string(self)?;
        let mut file = owner_only().open(path.as_ref())?;
        file.write_all(raw.as_bytes())?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.set_permissions(fs::Permissions::from_mode(0o600))?;
        }
        Ok(())
    }
}

fn owner_only() -> fs::OpenOptions {
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    options
}

impl std::fmt::Debug for TokenFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenFile")
            .field("user_id", &self.user_id)
            .field("expire", &self.expire)
            .field("token", &"<redacted>")
            .field("secret_machine_id", &self.secret_machine_id)
            .finish()
    }
}
