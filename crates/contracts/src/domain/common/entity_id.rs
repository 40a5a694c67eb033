use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Backend record identifier.
///
/// The API is not consistent about id types: institutes and tests come back
/// with numeric ids, blog posts and some admissions with string ids. Both are
/// kept as their decimal/string form so routes can embed them verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct EntityId(pub String);

impl EntityId {
    pub fn new(s: &str) -> Self {
        Self(s.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for EntityId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct IdVisitor;

        impl<'de> de::Visitor<'de> for IdVisitor {
            type Value = EntityId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string or integer id")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<EntityId, E> {
                Ok(EntityId(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<EntityId, E> {
                Ok(EntityId(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<EntityId, E> {
                Ok(EntityId(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<EntityId, E> {
                Ok(EntityId(v.to_string()))
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}
