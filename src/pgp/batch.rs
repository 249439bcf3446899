//! Batch-mode input for unattended gpg key generation.
//!
//! gpg's batch mode is driven by a small configuration document written to
//! disk and passed to `--generate-key`. The document is transient: it must
//! be gone from the key directory once the flow finishes.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::KeyRequest;
use crate::constants;

/// Render the batch-generation document for a request.
///
/// Both the primary key and the subkey are RSA at the requested length.
/// `%no-protection` skips passphrase protection and `%commit` finalises
/// generation without further prompting from gpg itself.
pub fn render(req: &KeyRequest) -> String {
    format!(
        "Key-Type: RSA\n\
         Key-Length: {length}\n\
         Subkey-Type: RSA\n\
         Subkey-Length: {length}\n\
         Name-Real: {name}\n\
         Name-Email: {email}\n\
         Expire-Date: {expire}\n\
         %no-protection\n\
         %commit\n",
        length = req.key_length,
        name = req.real_name,
        email = req.email,
        expire = req.expire_date,
    )
}

/// The temporary batch-input file consumed by `gpg --batch --generate-key`.
///
/// Removed when the guard is dropped, so cleanup holds on failure paths as
/// well as on success.
pub struct BatchFile {
    path: PathBuf,
}

impl BatchFile {
    /// Write `contents` to `<key_dir>/<key_name>_keygen_input`.
    pub fn write(key_dir: &Path, key_name: &str, contents: &str) -> io::Result<Self> {
        let path = key_dir.join(format!("{key_name}{}", constants::BATCH_FILE_SUFFIX));
        fs::write(&path, contents)?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for BatchFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}
