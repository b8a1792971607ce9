//! Per-process session state.

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;

/// Mutable context threaded through every operation.
///
/// Holds the active organization scope and the cached access secret. An
/// unset organization means repository operations target the authenticated
/// user's personal namespace. Neither field is persisted here; the secret is
/// cached on disk separately by [`crate::secret::SecretStore`].
#[derive(Debug, Default, Clone)]
pub struct Session {
    organization: Option<String>,
    secret: String,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the organization scope, or `None` for the personal namespace.
    pub fn organization(&self) -> Option<&str> {
        self.organization.as_deref()
    }

    /// Sets the organization scope. An empty or all-whitespace name clears
    /// the scope back to the personal namespace.
    pub fn set_organization(&mut self, name: &str) {
        let name = name.trim();
        self.organization = if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        };
    }

    /// Returns the cached secret; empty until one has been set.
    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn set_secret(&mut self, secret: String) {
        self.secret = secret;
    }

    pub fn has_secret(&self) -> bool {
        !self.secret.is_empty()
    }
}
