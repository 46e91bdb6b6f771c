use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Proficiency tier attached to a certificate. Ordered: `Beginner` is the
/// lowest, `Expert` the highest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Level {
    /// Proficiency percentage used when aggregating skill coverage.
    pub fn percent(self) -> u8 {
        match self {
            Self::Beginner => 25,
            Self::Intermediate => 50,
            Self::Advanced => 75,
            Self::Expert => 100,
        }
    }
}

/// A tracked credential record, linked to one user and one or more skills.
///
/// Field names serialize in camelCase so exported files stay compatible with
/// the JSON the dashboard has always produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    pub id: String,
    pub name: String,
    pub provider: String,
    pub issue_date: NaiveDate,
    pub expiry_date: Option<NaiveDate>,
    pub skills: Vec<String>,
    pub level: Level,
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// A team member. The `certificates` list is a denormalized snapshot derived
/// from the certificate table when the store is built, never hand-maintained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default)]
    pub certificates: Vec<Certificate>,
}

/// A catalog entry describing a skill and its display color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub category: String,
    pub color: String,
}

/// One row of the team skill coverage table. Always derived on demand from
/// the certificate table (see `views::skill_coverage`), never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillCoverage {
    pub skill: String,
    pub category: String,
    pub count: usize,
    /// Aggregate proficiency, 0-100.
    pub percent: u8,
    pub user_ids: Vec<String>,
}

/// A time-sensitive view of one certificate nearing or past its expiry date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpiryAlert {
    pub certificate_id: String,
    pub certificate_name: String,
    pub user_id: String,
    pub user_name: String,
    pub expiry_date: NaiveDate,
    /// Whole days until expiry; negative when already expired.
    pub days_remaining: i64,
}
