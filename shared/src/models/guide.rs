//! Guide directory models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Admin review state of a guide profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum VerificationStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl VerificationStatus {
    pub fn is_approved(&self) -> bool {
        matches!(self, Self::Approved)
    }
}

/// Guide-specific part of a user record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuideProfile {
    pub location: String,
    pub rate_per_hour: Decimal,
    pub verification_status: VerificationStatus,
    pub languages: Vec<String>,
    pub bio: Option<String>,
}

/// Guide as listed to admins
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuideSummary {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub rate_per_hour: Decimal,
    pub verification_status: VerificationStatus,
    pub languages: Vec<String>,
    pub bio: Option<String>,
}

/// Guide search hit, joined with the open start times of the searched date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuideSearchResult {
    pub id: i64,
    pub name: String,
    pub bio: Option<String>,
    pub languages: Vec<String>,
    pub location: String,
    pub rate_per_hour: Decimal,
    pub verification_status: VerificationStatus,
    pub available_slots: Vec<String>,
}

/// Admin verification decision
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GuideVerification {
    pub approve: bool,
}

impl GuideVerification {
    pub fn status(&self) -> VerificationStatus {
        if self.approve {
            VerificationStatus::Approved
        } else {
            VerificationStatus::Rejected
        }
    }
}
