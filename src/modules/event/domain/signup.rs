use super::ids::ParticipantId;
use serde::Serialize;
use serde_json::{Map, Value};

/// One participant's signup, kept as the service returned it
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Signup {
    #[serde(skip)]
    participant_id: ParticipantId,
    fields: Map<String, Value>,
}

impl Signup {
    /// Build a signup from a raw record. Records without `participantId` are rejected.
    pub fn from_record(fields: Map<String, Value>) -> Option<Self> {
        let participant_id = fields
            .get("participantId")
            .and_then(ParticipantId::from_json)?;

        Some(Self {
            participant_id,
            fields,
        })
    }

    pub fn participant_id(&self) -> &ParticipantId {
        &self.participant_id
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_signup_from_record() {
        let record = json!({"participantId": 501, "firstName": "Ana"});
        let signup = Signup::from_record(record.as_object().cloned().unwrap()).unwrap();

        assert_eq!(signup.participant_id(), &ParticipantId::from(501));
        assert_eq!(signup.get("firstName"), Some(&json!("Ana")));
        assert_eq!(serde_json::to_value(&signup).unwrap(), record);
    }

    #[test]
    fn test_signup_without_participant_id() {
        let record = json!({"firstName": "Ana"});
        assert!(Signup::from_record(record.as_object().cloned().unwrap()).is_none());
    }
}
