//! Environment variable credential source.

use secrecy::SecretString;

use super::CredentialSource;

/// Reads the API credential from one environment variable.
///
/// A variable that is unset, blank, or not valid Unicode counts as missing.
pub struct EnvCredentialSource {
    variable: String,
}

impl EnvCredentialSource {
    pub fn new(variable: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
        }
    }

    /// Whether the variable currently holds a usable value.
    pub fn is_present(&self) -> bool {
        self.resolve().is_some()
    }
}

impl CredentialSource for EnvCredentialSource {
    fn location(&self) -> &str {
        &self.variable
    }

    fn resolve(&self) -> Option<SecretString> {
        match std::env::var(&self.variable) {
            Ok(val) if !val.trim().is_empty() => Some(SecretString::from(val)),
            Ok(_) => None,
            Err(std::env::VarError::NotPresent) => None,
            // Secrets must be valid strings; treat as not found.
            Err(std::env::VarError::NotUnicode(_)) => None,
        }
    }
}
