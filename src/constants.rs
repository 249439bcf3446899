//! App-wide constants.
//!
//! Centralises the tool name, wrapped-binary names, environment variable
//! names, and artifact naming so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "keyforge";

/// Default key-management binary, resolved on PATH.
pub const GPG_PROGRAM: &str = "gpg";

/// Default SSH key generator binary, resolved on PATH.
pub const SSH_KEYGEN_PROGRAM: &str = "ssh-keygen";

/// Key length used when the user leaves the prompt blank.
pub const DEFAULT_KEY_LENGTH: &str = "2048";

/// Suffix appended to the key name for the temporary batch-input file.
pub const BATCH_FILE_SUFFIX: &str = "_keygen_input";

/// Suffix for the exported PGP private key file.
pub const PRIVATE_KEY_SUFFIX: &str = "_Private.key";

/// Suffix for the exported PGP public key file.
pub const PUBLIC_KEY_SUFFIX: &str = ".pub";


// ── Environment variable names ──────────────────────────────────────

pub const ENV_OUTPUT_DIR: &str = "KEYFORGE_OUTPUT_DIR";
pub const ENV_GPG: &str = "KEYFORGE_GPG";
pub const ENV_SSH_KEYGEN: &str = "KEYFORGE_SSH_KEYGEN";
