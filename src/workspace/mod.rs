//! Output locations for generated key pairs.
//!
//! Each key pair lives in its own folder named after the key, under a
//! single output root. The root is explicit rather than derived from the
//! executable's location, so runs are reproducible from any directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::constants;
use crate::env::Env;

/// Resolve the root directory under which per-key folders are created.
///
/// Priority (highest to lowest): `--output-dir` flag, `KEYFORGE_OUTPUT_DIR`,
/// the current working directory.
pub fn resolve_output_root(flag: Option<PathBuf>, env: &Env) -> io::Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    if let Ok(dir) = env.var(constants::ENV_OUTPUT_DIR) {
        return Ok(PathBuf::from(dir));
    }
    std::env::current_dir()
}

/// Create (idempotently) and return the folder for `key_name`.
///
/// Re-running with the same name reuses the existing folder; artifacts
/// inside it are overwritten by later steps, not guarded against.
pub fn key_dir(root: &Path, key_name: &str) -> io::Result<PathBuf> {
    let dir = root.join(key_name);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}
