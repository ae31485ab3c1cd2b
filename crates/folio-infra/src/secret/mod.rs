//! API credential lookup.
//!
//! Credentials are looked up on every generation request, never cached, so
//! a key added to (or removed from) the environment takes effect on the next
//! chat turn without restarting the server.

pub mod env;

use secrecy::SecretString;

pub use env::EnvCredentialSource;

/// Somewhere an API credential can be read from.
pub trait CredentialSource: Send + Sync {
    /// Where the credential is expected, for log and error messages.
    /// Never the credential itself.
    fn location(&self) -> &str;

    /// The credential, or `None` when it is absent or blank.
    fn resolve(&self) -> Option<SecretString>;
}

/// A credential fixed at construction time. Used by tests and by callers
/// that already hold the key.
pub struct StaticCredential {
    value: Option<SecretString>,
}

impl StaticCredential {
    pub fn new(value: Option<SecretString>) -> Self {
        Self { value }
    }
}

impl CredentialSource for StaticCredential {
    fn location(&self) -> &str {
        "static"
    }

    fn resolve(&self) -> Option<SecretString> {
        self.value.clone()
    }
}
