use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Stored in `assignments.file_path` until real file uploads land.
pub const PLACEHOLDER_FILE_PATH: &str = "N/A";

/// Accepted range for the assignment year input.
pub const MIN_YEAR: i32 = 2000;
pub const MAX_YEAR: i32 = 2100;

/// One row of the `assignments` table. Rows are insert-only from the client's
/// point of view; `id` and `created_at` are assigned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub code: String,
    pub year: i32,
    pub semester: Semester,
    pub questions: String,
    pub answers: String,
    pub file_path: String,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for `assignments`: everything the server does not assign.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewAssignment {
    pub user_id: Uuid,
    pub title: String,
    pub code: String,
    pub year: i32,
    pub semester: Semester,
    pub questions: String,
    pub answers: String,
    pub file_path: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Semester {
    #[serde(rename = "evensem")]
    EvenSem,
    #[serde(rename = "oddsem")]
    OddSem,
    #[serde(rename = "summerterm")]
    SummerTerm,
}

impl Semester {
    pub const ALL: [Semester; 3] = [Semester::EvenSem, Semester::OddSem, Semester::SummerTerm];

    /// Wire value, as stored in the `semester` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Semester::EvenSem => "evensem",
            Semester::OddSem => "oddsem",
            Semester::SummerTerm => "summerterm",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Semester::EvenSem => "Even Semester",
            Semester::OddSem => "Odd Semester",
            Semester::SummerTerm => "Summer Term",
        }
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown semester value: {0}")]
pub struct ParseSemesterError(String);

impl FromStr for Semester {
    type Err = ParseSemesterError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "evensem" => Ok(Semester::EvenSem),
            "oddsem" => Ok(Semester::OddSem),
            "summerterm" => Ok(Semester::SummerTerm),
            other => Err(ParseSemesterError(other.to_string())),
        }
    }
}

/// One row of the `profiles` table, keyed by the auth user id. The backend
/// creates the row at signup; the client backfills `username` once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_anonymous: bool,
}

/// An authenticated session as handed out by the backend. Persisted verbatim
/// in browser storage between page loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
    /// Unix seconds after which `access_token` is no longer usable.
    pub expires_at: i64,
    pub user: AuthUser,
}

impl AuthSession {
    pub fn is_expired(&self, now_unix: i64) -> bool {
        self.expires_at <= now_unix
    }
}

/// Dashboard counters. Purely in-memory view state: reset on reload, bumped
/// optimistically after each successful upload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UploadStats {
    pub assignments: u32,
    pub answers: u32,
}

impl UploadStats {
    /// Every upload carries an answers text, so both counters move together.
    pub fn record_upload(&mut self) {
        self.assignments += 1;
        self.answers += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn semester_wire_values_round_trip() {
        for semester in Semester::ALL {
            assert_eq!(semester.as_str().parse::<Semester>(), Ok(semester));
        }
    }

    #[test]
    fn semester_rejects_unknown_values() {
        assert!("wintersem".parse::<Semester>().is_err());
        assert!("".parse::<Semester>().is_err());
        assert!("Even Semester".parse::<Semester>().is_err());
    }

    #[test]
    fn semester_serializes_to_wire_value() {
        let json = serde_json::to_string(&Semester::SummerTerm).unwrap();
        assert_eq!(json, "\"summerterm\"");
    }

    #[test]
    fn session_expiry_is_inclusive_at_the_boundary() {
        let session = AuthSession {
            access_token: "token".to_string(),
            refresh_token: String::new(),
            expires_at: 1_000,
            user: AuthUser {
                id: Uuid::new_v4(),
                email: None,
                created_at: None,
                is_anonymous: false,
            },
        };
        assert!(!session.is_expired(999));
        assert!(session.is_expired(1_000));
        assert!(session.is_expired(1_001));
    }

    #[test]
    fn upload_stats_move_both_counters() {
        let mut stats = UploadStats::default();
        stats.record_upload();
        stats.record_upload();
        assert_eq!(stats.assignments, 2);
        assert_eq!(stats.answers, 2);
    }
}
