use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

/// Entry of `GET /users/{username}/events`, reduced to what the summary reads.
///
/// The upstream payload is loosely shaped, so the raw record is normalized once at
/// deserialization: a push without a usable commit list counts zero commits and an
/// unparseable timestamp becomes `None`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawEvent")]
pub struct Event {
    pub kind: EventKind,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    Push { commits: u32 },
    PullRequest,
    Other(String),
}

impl Event {
    pub fn new(kind: EventKind, created_at: DateTime<Utc>) -> Self {
        Self {
            kind,
            created_at: Some(created_at),
        }
    }

    pub fn commit_count(&self) -> u32 {
        match self.kind {
            EventKind::Push { commits } => commits,
            _ => 0,
        }
    }

    pub fn is_pull_request(&self) -> bool {
        matches!(self.kind, EventKind::PullRequest)
    }
}

#[derive(Deserialize)]
struct RawEvent {
    #[serde(rename = "type", default)]
    event_type: Value,
    #[serde(default)]
    created_at: Option<Value>,
    #[serde(default)]
    payload: Value,
}

impl From<RawEvent> for Event {
    fn from(raw: RawEvent) -> Self {
        let kind = match raw.event_type.as_str() {
            Some("PushEvent") => EventKind::Push {
                commits: raw
                    .payload
                    .get("commits")
                    .and_then(Value::as_array)
                    .map(|commits| commits.len() as u32)
                    .unwrap_or(0),
            },
            Some("PullRequestEvent") => EventKind::PullRequest,
            other => EventKind::Other(other.unwrap_or_default().to_string()),
        };

        let created_at = raw
            .created_at
            .as_ref()
            .and_then(Value::as_str)
            .and_then(|ts| DateTime::parse_from_rfc3339(ts).ok())
            .map(|ts| ts.with_timezone(&Utc));

        Self { kind, created_at }
    }
}
