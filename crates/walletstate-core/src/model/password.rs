// ── Vault password (singleton slot) ──
//
// The slot holds the derived unlock digest, not the passphrase itself.
// Wrapped in `SecretString` so it never appears in Debug output or logs;
// serialization exposes the digest deliberately, since external loaders
// round-trip the whole snapshot.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The vault unlock digest. Empty until the user sets a password.
#[derive(Clone)]
pub struct Password(SecretString);

impl Password {
    pub fn new(digest: impl Into<String>) -> Self {
        Self(SecretString::from(digest.into()))
    }

    pub fn is_set(&self) -> bool {
        !self.0.expose_secret().is_empty()
    }

    /// The stored digest. Callers take on the handling responsibility.
    pub fn expose_digest(&self) -> &str {
        self.0.expose_secret()
    }
}

impl Default for Password {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // SecretString already redacts; keep the type name recognizable.
        f.debug_tuple("Password").field(&self.0).finish()
    }
}

impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl Eq for Password {}

impl Serialize for Password {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0.expose_secret())
    }
}

impl<'de> Deserialize<'de> for Password {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::new)
    }
}
