use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn is_empty(&self) -> bool {
                self.0.trim().is_empty()
            }

            /// Read an id out of a JSON value. Numbers and strings are accepted.
            pub fn from_json(value: &Value) -> Option<Self> {
                match value {
                    Value::String(s) if !s.is_empty() => Some(Self(s.clone())),
                    Value::Number(n) => Some(Self(n.to_string())),
                    _ => None,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id.to_string())
            }
        }
    };
}

string_id!(
    /// Identifier of an event on danceconvention.net
    EventId
);
string_id!(
    /// Identifier of a contest (division) within an event
    ContestId
);
string_id!(
    /// Identifier of a participant in the signups list
    ParticipantId
);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_accepts_numbers_and_strings() {
        assert_eq!(ContestId::from_json(&json!(42)), Some(ContestId::from(42)));
        assert_eq!(ContestId::from_json(&json!("42")), Some(ContestId::from("42")));
        assert_eq!(ContestId::from(42), ContestId::from("42"));
    }

    #[test]
    fn test_from_json_rejects_other_values() {
        assert_eq!(ParticipantId::from_json(&json!(null)), None);
        assert_eq!(ParticipantId::from_json(&json!("")), None);
        assert_eq!(ParticipantId::from_json(&json!({"id": 1})), None);
    }

    #[test]
    fn test_display_and_serialize() {
        let id = EventId::new("1234");
        assert_eq!(id.to_string(), "1234");
        assert_eq!(serde_json::to_value(&id).unwrap(), json!("1234"));
    }

    #[test]
    fn test_blank_id_is_empty() {
        assert!(EventId::new("").is_empty());
        assert!(EventId::new("  ").is_empty());
        assert!(!EventId::new("1234").is_empty());
    }
}
