use super::contest::{Contest, ContestSection};
use super::ids::{ContestId, EventId, ParticipantId};
use super::signup::Signup;
use crate::modules::dcnet::domain::DcnetResource;
use crate::modules::dcnet::infrastructure::extract_title;
use crate::modules::dcnet::traits::DcnetSource;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::{LogContext, TimedOperation};
use log::{debug, info, warn};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Load stage of an [`Event`]. Stages only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "stage", rename_all = "snake_case")]
pub enum EventState {
    /// Nothing fetched yet, validity unknown
    Unloaded,
    /// Contests fetched; the event is valid iff it has at least one contest
    ContestsLoaded { valid: bool },
    /// Contests, signups, description and per-contest sections fetched
    FullyLoaded { valid: bool },
}

impl EventState {
    pub fn validity(&self) -> Option<bool> {
        match self {
            EventState::Unloaded => None,
            EventState::ContestsLoaded { valid } | EventState::FullyLoaded { valid } => {
                Some(*valid)
            }
        }
    }
}

/// A danceconvention.net event assembled from its REST collections
///
/// Every `load_*` method is best-effort: a collection the service does not
/// return leaves the corresponding field at its default, and operations on an
/// unknown contest id do nothing. Errors only surface for payloads that were
/// delivered but could not be parsed.
#[derive(Serialize)]
pub struct Event {
    id: EventId,
    #[serde(skip)]
    source: Arc<dyn DcnetSource>,
    state: EventState,
    description: Option<String>,
    contests: BTreeMap<ContestId, Contest>,
    signups: BTreeMap<ParticipantId, Signup>,
}

impl Event {
    pub fn new(id: impl Into<EventId>, source: Arc<dyn DcnetSource>) -> Self {
        Self {
            id: id.into(),
            source,
            state: EventState::Unloaded,
            description: None,
            contests: BTreeMap::new(),
            signups: BTreeMap::new(),
        }
    }

    pub fn id(&self) -> &EventId {
        &self.id
    }

    pub fn state(&self) -> EventState {
        self.state
    }

    /// Validity without side effects; `None` until contests have been loaded
    pub fn validity(&self) -> Option<bool> {
        self.state.validity()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn contests(&self) -> &BTreeMap<ContestId, Contest> {
        &self.contests
    }

    pub fn contest(&self, contest_id: &ContestId) -> Option<&Contest> {
        self.contests.get(contest_id)
    }

    pub fn signups(&self) -> &BTreeMap<ParticipantId, Signup> {
        &self.signups
    }

    pub fn signup(&self, participant_id: &ParticipantId) -> Option<&Signup> {
        self.signups.get(participant_id)
    }

    /// Load contests unless that already happened, then report validity
    pub async fn ensure_contests_loaded(&mut self) -> AppResult<bool> {
        if self.state == EventState::Unloaded {
            self.load_contests().await?;
        }
        Ok(!self.contests.is_empty())
    }

    /// Fetch the contest list, replacing any contests held so far
    pub async fn load_contests(&mut self) -> AppResult<()> {
        let records = self.fetch_records(DcnetResource::Contests).await?;

        let contests: BTreeMap<ContestId, Contest> = records
            .into_iter()
            .filter_map(|record| match Contest::from_record(record) {
                Some(contest) => Some((contest.id().clone(), contest)),
                None => {
                    warn!("Event {}: skipping contest without id", self.id);
                    None
                }
            })
            .collect();

        let valid = !contests.is_empty();
        self.contests = contests;
        self.state = match self.state {
            EventState::FullyLoaded { .. } => EventState::FullyLoaded { valid },
            _ => EventState::ContestsLoaded { valid },
        };

        info!("Event {}: loaded {} contests", self.id, self.contests.len());
        Ok(())
    }

    pub async fn load_signups(&mut self) -> AppResult<()> {
        let records = self.fetch_records(DcnetResource::Signups).await?;

        self.signups = records
            .into_iter()
            .filter_map(|record| match Signup::from_record(record) {
                Some(signup) => Some((signup.participant_id().clone(), signup)),
                None => {
                    warn!("Event {}: skipping signup without participantId", self.id);
                    None
                }
            })
            .collect();

        info!("Event {}: loaded {} signups", self.id, self.signups.len());
        Ok(())
    }

    pub async fn load_leaders(&mut self, contest_id: &ContestId) -> AppResult<()> {
        self.load_section(contest_id, ContestSection::Leaders).await
    }

    pub async fn load_followers(&mut self, contest_id: &ContestId) -> AppResult<()> {
        self.load_section(contest_id, ContestSection::Followers).await
    }

    pub async fn load_couples(&mut self, contest_id: &ContestId) -> AppResult<()> {
        self.load_section(contest_id, ContestSection::Couples).await
    }

    pub async fn load_seeking_leaders(&mut self, contest_id: &ContestId) -> AppResult<()> {
        self.load_section(contest_id, ContestSection::SeekingLeaders)
            .await
    }

    pub async fn load_seeking_followers(&mut self, contest_id: &ContestId) -> AppResult<()> {
        self.load_section(contest_id, ContestSection::SeekingFollowers)
            .await
    }

    /// Load the sections the contest's division type calls for
    pub async fn load_contest(&mut self, contest_id: &ContestId) -> AppResult<()> {
        let Some(contest) = self.contests.get(contest_id) else {
            debug!("Event {}: unknown contest {}", self.id, contest_id);
            return Ok(());
        };

        let sections = contest.division_type().sections();
        if sections.is_empty() {
            debug!(
                "Event {}: contest {} has division type '{}', nothing to load",
                self.id,
                contest_id,
                contest.division_type()
            );
        }

        for section in sections {
            self.load_section(contest_id, *section).await?;
        }
        Ok(())
    }

    /// Fetch the event page and keep its title as the description
    pub async fn load_description(&mut self) -> AppResult<()> {
        if self.id.is_empty() {
            debug!("Event has no id, skipping event page");
            return Ok(());
        }

        let Some(html) = self.source.fetch_event_page(self.id.as_str()).await? else {
            debug!("Event {}: event page unavailable", self.id);
            return Ok(());
        };

        match extract_title(&html) {
            Some(title) => self.description = Some(title),
            None => debug!("Event {}: event page has no title", self.id),
        }
        Ok(())
    }

    /// Contests, signups, description, then the sections of every contest
    pub async fn load(&mut self) -> AppResult<()> {
        let timer = TimedOperation::new(&format!("load event {}", self.id));

        self.load_contests().await?;
        self.load_signups().await?;
        self.load_description().await?;

        let contest_ids: Vec<ContestId> = self.contests.keys().cloned().collect();
        let total = contest_ids.len();
        for (index, contest_id) in contest_ids.iter().enumerate() {
            let label = self
                .contests
                .get(contest_id)
                .and_then(Contest::name)
                .unwrap_or(contest_id.as_str())
                .to_string();
            LogContext::load_progress(self.id.as_str(), index + 1, total, &label);
            self.load_contest(contest_id).await?;
        }

        self.state = EventState::FullyLoaded {
            valid: !self.contests.is_empty(),
        };
        timer.finish_with_info(&format!(
            "{} contests, {} signups",
            self.contests.len(),
            self.signups.len()
        ));
        Ok(())
    }

    async fn load_section(&mut self, contest_id: &ContestId, section: ContestSection) -> AppResult<()> {
        if !self.contests.contains_key(contest_id) {
            debug!("Event {}: unknown contest {}, skipping {}", self.id, contest_id, section);
            return Ok(());
        }

        let fetched = self
            .source
            .fetch_collection(section.resource(), contest_id.as_str())
            .await?;

        match (fetched, self.contests.get_mut(contest_id)) {
            (Some(value), Some(contest)) => contest.attach(section, value),
            _ => debug!("Event {}: no {} for contest {}", self.id, section, contest_id),
        }
        Ok(())
    }

    /// Fetch an event-scoped collection as a list of records; absence is an empty list
    async fn fetch_records(&self, resource: DcnetResource) -> AppResult<Vec<Map<String, Value>>> {
        if self.id.is_empty() {
            debug!("Event has no id, skipping {}", resource);
            return Ok(Vec::new());
        }

        let Some(value) = self
            .source
            .fetch_collection(resource, self.id.as_str())
            .await?
        else {
            debug!("Event {}: no {} returned", self.id, resource);
            return Ok(Vec::new());
        };

        serde_json::from_value::<Vec<Map<String, Value>>>(value).map_err(|e| {
            AppError::SerializationError(format!(
                "Unexpected {} payload for event {}: {}",
                resource, self.id, e
            ))
        })
    }
}

impl fmt::Debug for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("id", &self.id)
            .field("state", &self.state)
            .field("description", &self.description)
            .field("contests", &self.contests.len())
            .field("signups", &self.signups.len())
            .finish_non_exhaustive()
    }
}
