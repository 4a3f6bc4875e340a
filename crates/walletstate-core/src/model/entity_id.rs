// ── Core identity types ──
//
// EntityId and Address form the foundation of every domain type.
// User-created records (accounts, custom assets, contacts) carry random
// UUIDs; built-in records shipped with the app (default networks and
// their base assets) are keyed by well-known name. Identity comparison
// is always by id, never by any other field.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

// ── EntityId ────────────────────────────────────────────────────────

/// Canonical identifier for any wallet entity.
///
/// Transparently wraps either a random UUID (user-created records) or a
/// well-known name (built-in records). Consumers never care which.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Uuid(Uuid),
    Named(String),
}

impl EntityId {
    /// Mint a fresh random id for a user-created record.
    pub fn random() -> Self {
        Self::Uuid(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Option<&Uuid> {
        match self {
            Self::Uuid(u) => Some(u),
            Self::Named(_) => None,
        }
    }

    pub fn as_name(&self) -> Option<&str> {
        match self {
            Self::Named(s) => Some(s),
            Self::Uuid(_) => None,
        }
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uuid(u) => write!(f, "{u}"),
            Self::Named(s) => write!(f, "{s}"),
        }
    }
}

impl FromStr for EntityId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.to_owned()))
    }
}

impl From<Uuid> for EntityId {
    fn from(u: Uuid) -> Self {
        Self::Uuid(u)
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        match Uuid::parse_str(&s) {
            Ok(u) => Self::Uuid(u),
            Err(_) => Self::Named(s),
        }
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self::from(s.to_owned())
    }
}

// ── Address ─────────────────────────────────────────────────────────

/// Account address, normalized to lowercase hex with a `0x` prefix.
///
/// Checksum casing is a display concern; storing lowercase keeps
/// address comparison a plain string equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address(String);

impl Address {
    /// Create a normalized address from any common casing, with or
    /// without the `0x` prefix.
    pub fn new(raw: impl AsRef<str>) -> Self {
        let lower = raw.as_ref().to_lowercase();
        if lower.starts_with("0x") {
            Self(lower)
        } else {
            Self(format!("0x{lower}"))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Address {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn entity_id_from_uuid_string() {
        let id = EntityId::from("550e8400-e29b-41d4-a716-446655440000".to_owned());
        assert!(id.as_uuid().is_some());
    }

    #[test]
    fn entity_id_from_well_known_name() {
        let id = EntityId::from("ethereum");
        assert_eq!(id.as_name(), Some("ethereum"));
    }

    #[test]
    fn entity_id_display() {
        let uuid = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap();
        let id = EntityId::Uuid(uuid);
        assert_eq!(id.to_string(), "550e8400-e29b-41d4-a716-446655440000");
    }

    #[test]
    fn random_ids_differ() {
        assert_ne!(EntityId::random(), EntityId::random());
    }

    #[test]
    fn address_normalizes_case() {
        let addr = Address::new("0xDE0B295669a9FD93d5F28D9Ec85E40f4cb697BAe");
        assert_eq!(addr.as_str(), "0xde0b295669a9fd93d5f28d9ec85e40f4cb697bae");
    }

    #[test]
    fn address_adds_missing_prefix() {
        let addr = Address::new("de0b295669a9fd93d5f28d9ec85e40f4cb697bae");
        assert_eq!(addr.as_str(), "0xde0b295669a9fd93d5f28d9ec85e40f4cb697bae");
    }

    #[test]
    fn address_from_str() {
        let addr: Address = "0xDE0B295669A9FD93D5F28D9EC85E40F4CB697BAE".parse().unwrap();
        assert_eq!(addr.to_string(), "0xde0b295669a9fd93d5f28d9ec85e40f4cb697bae");
    }
}
