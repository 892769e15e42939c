use super::ids::ContestId;
use crate::modules::dcnet::domain::DcnetResource;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};
use std::fmt;

/// How partners are formed in a contest, read from its `divisionType` field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DivisionType {
    /// Jack & Jill style: leaders and followers sign up separately
    RandomPartner,
    /// Couples sign up together
    OpenCouple,
    /// Anything else, upper-cased. Empty when the field is missing.
    Other(String),
}

impl DivisionType {
    /// Case-insensitive parse
    pub fn parse(raw: &str) -> Self {
        let upper = raw.to_uppercase();
        match upper.as_str() {
            "RANDOM_PARTNER" => DivisionType::RandomPartner,
            "OPEN_COUPLE" => DivisionType::OpenCouple,
            _ => DivisionType::Other(upper),
        }
    }

    /// Division type of a raw contest record, `divisionType` defaulting to ""
    pub fn from_record(record: &Map<String, Value>) -> Self {
        let raw = record
            .get("divisionType")
            .and_then(Value::as_str)
            .unwrap_or_default();
        Self::parse(raw)
    }

    /// Sub-resources worth fetching for this kind of contest
    pub fn sections(&self) -> &'static [ContestSection] {
        match self {
            DivisionType::RandomPartner => &[
                ContestSection::Leaders,
                ContestSection::Followers,
                ContestSection::SeekingLeaders,
                ContestSection::SeekingFollowers,
            ],
            DivisionType::OpenCouple => &[ContestSection::Couples],
            DivisionType::Other(_) => &[],
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            DivisionType::RandomPartner => "RANDOM_PARTNER",
            DivisionType::OpenCouple => "OPEN_COUPLE",
            DivisionType::Other(raw) => raw,
        }
    }
}

impl fmt::Display for DivisionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Division-specific collections that can be attached to a contest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContestSection {
    Leaders,
    Followers,
    Couples,
    SeekingLeaders,
    SeekingFollowers,
}

impl ContestSection {
    pub const ALL: [ContestSection; 5] = [
        ContestSection::Leaders,
        ContestSection::Followers,
        ContestSection::Couples,
        ContestSection::SeekingLeaders,
        ContestSection::SeekingFollowers,
    ];

    /// REST resource the section is loaded from
    pub fn resource(&self) -> DcnetResource {
        match self {
            ContestSection::Leaders => DcnetResource::Leaders,
            ContestSection::Followers => DcnetResource::Followers,
            ContestSection::Couples => DcnetResource::Couples,
            ContestSection::SeekingLeaders => DcnetResource::SeekingLeaders,
            ContestSection::SeekingFollowers => DcnetResource::SeekingFollowers,
        }
    }

    /// Key the section appears under in a serialized contest
    pub fn key(&self) -> &'static str {
        self.resource().name()
    }
}

impl fmt::Display for ContestSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A contest as returned by the service, plus whatever division-specific
/// collections have been loaded for it.
///
/// The service record is kept verbatim in `fields`; sections are only ever
/// added, never cleared.
#[derive(Debug, Clone, PartialEq)]
pub struct Contest {
    id: ContestId,
    division_type: DivisionType,
    fields: Map<String, Value>,
    leaders: Option<Value>,
    followers: Option<Value>,
    couples: Option<Value>,
    seeking_leaders: Option<Value>,
    seeking_followers: Option<Value>,
}

impl Contest {
    /// Build a contest from a raw record. Records without an `id` are rejected.
    pub fn from_record(fields: Map<String, Value>) -> Option<Self> {
        let id = fields.get("id").and_then(ContestId::from_json)?;
        let division_type = DivisionType::from_record(&fields);

        Some(Self {
            id,
            division_type,
            fields,
            leaders: None,
            followers: None,
            couples: None,
            seeking_leaders: None,
            seeking_followers: None,
        })
    }

    pub fn id(&self) -> &ContestId {
        &self.id
    }

    pub fn division_type(&self) -> &DivisionType {
        &self.division_type
    }

    /// Raw service record
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn name(&self) -> Option<&str> {
        self.fields.get("name").and_then(Value::as_str)
    }

    pub fn section(&self, section: ContestSection) -> Option<&Value> {
        self.slot(section).as_ref()
    }

    pub fn leaders(&self) -> Option<&Value> {
        self.leaders.as_ref()
    }

    pub fn followers(&self) -> Option<&Value> {
        self.followers.as_ref()
    }

    pub fn couples(&self) -> Option<&Value> {
        self.couples.as_ref()
    }

    pub fn seeking_leaders(&self) -> Option<&Value> {
        self.seeking_leaders.as_ref()
    }

    pub fn seeking_followers(&self) -> Option<&Value> {
        self.seeking_followers.as_ref()
    }

    /// Set a section in place
    pub fn attach(&mut self, section: ContestSection, value: Value) {
        *self.slot_mut(section) = Some(value);
    }

    /// Builder form of [`Contest::attach`]
    pub fn with_section(mut self, section: ContestSection, value: Value) -> Self {
        self.attach(section, value);
        self
    }

    /// Sections that currently hold data, in declaration order
    pub fn populated_sections(&self) -> Vec<ContestSection> {
        ContestSection::ALL
            .into_iter()
            .filter(|s| self.slot(*s).is_some())
            .collect()
    }

    /// Number of entries in a section, if it is loaded and is a list
    pub fn section_len(&self, section: ContestSection) -> Option<usize> {
        self.section(section)
            .and_then(Value::as_array)
            .map(Vec::len)
    }

    fn slot(&self, section: ContestSection) -> &Option<Value> {
        match section {
            ContestSection::Leaders => &self.leaders,
            ContestSection::Followers => &self.followers,
            ContestSection::Couples => &self.couples,
            ContestSection::SeekingLeaders => &self.seeking_leaders,
            ContestSection::SeekingFollowers => &self.seeking_followers,
        }
    }

    fn slot_mut(&mut self, section: ContestSection) -> &mut Option<Value> {
        match section {
            ContestSection::Leaders => &mut self.leaders,
            ContestSection::Followers => &mut self.followers,
            ContestSection::Couples => &mut self.couples,
            ContestSection::SeekingLeaders => &mut self.seeking_leaders,
            ContestSection::SeekingFollowers => &mut self.seeking_followers,
        }
    }
}

// Serializes as the service record with loaded sections added under their keys
impl Serialize for Contest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let populated = self.populated_sections();
        let shadowed = |key: &str| populated.iter().any(|s| s.key() == key);

        let mut map = serializer.serialize_map(None)?;
        for (key, value) in self.fields.iter().filter(|(k, _)| !shadowed(k.as_str())) {
            map.serialize_entry(key, value)?;
        }
        for section in &populated {
            if let Some(value) = self.section(*section) {
                map.serialize_entry(section.key(), value)?;
            }
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_division_type_is_case_insensitive() {
        assert_eq!(DivisionType::parse("random_partner"), DivisionType::RandomPartner);
        assert_eq!(DivisionType::parse("Random_Partner"), DivisionType::RandomPartner);
        assert_eq!(DivisionType::parse("open_couple"), DivisionType::OpenCouple);
        assert_eq!(
            DivisionType::parse("strictly"),
            DivisionType::Other("STRICTLY".to_string())
        );
    }

    #[test]
    fn test_missing_division_type_defaults_to_empty() {
        let division = DivisionType::from_record(&record(json!({"id": 1})));
        assert_eq!(division, DivisionType::Other(String::new()));
        assert!(division.sections().is_empty());

        let non_string = DivisionType::from_record(&record(json!({"divisionType": 3})));
        assert_eq!(non_string, DivisionType::Other(String::new()));
    }

    #[test]
    fn test_sections_per_division() {
        assert_eq!(
            DivisionType::RandomPartner.sections(),
            &[
                ContestSection::Leaders,
                ContestSection::Followers,
                ContestSection::SeekingLeaders,
                ContestSection::SeekingFollowers,
            ]
        );
        assert_eq!(DivisionType::OpenCouple.sections(), &[ContestSection::Couples]);
    }

    #[test]
    fn test_section_keys() {
        assert_eq!(ContestSection::Followers.key(), "followers");
        assert_eq!(ContestSection::SeekingLeaders.key(), "seeking leaders");
        assert_eq!(
            ContestSection::SeekingFollowers.resource(),
            DcnetResource::SeekingFollowers
        );
    }

    #[test]
    fn test_from_record_requires_id() {
        assert!(Contest::from_record(record(json!({"name": "Newcomer J&J"}))).is_none());

        let contest =
            Contest::from_record(record(json!({"id": 7, "name": "Newcomer J&J"}))).unwrap();
        assert_eq!(contest.id(), &ContestId::from(7));
        assert_eq!(contest.name(), Some("Newcomer J&J"));
        assert!(contest.populated_sections().is_empty());
    }

    #[test]
    fn test_attach_and_serialize() {
        let contest = Contest::from_record(record(json!({
            "id": 7,
            "divisionType": "OPEN_COUPLE",
        })))
        .unwrap()
        .with_section(ContestSection::Couples, json!([{"number": 101}, {"number": 102}]));

        assert_eq!(contest.populated_sections(), vec![ContestSection::Couples]);
        assert_eq!(contest.section_len(ContestSection::Couples), Some(2));
        assert_eq!(contest.section_len(ContestSection::Leaders), None);

        let json = serde_json::to_value(&contest).unwrap();
        assert_eq!(
            json,
            json!({
                "id": 7,
                "divisionType": "OPEN_COUPLE",
                "couples": [{"number": 101}, {"number": 102}],
            })
        );
    }
}
