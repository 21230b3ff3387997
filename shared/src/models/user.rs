//! User model
//!
//! One record per account; role-specific data lives in [`UserProfile`].

use serde::{Deserialize, Serialize};

use super::guide::GuideProfile;

/// Principal role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Role {
    Traveler,
    Guide,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Traveler => "TRAVELER",
            Self::Guide => "GUIDE",
            Self::Admin => "ADMIN",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TRAVELER" => Ok(Self::Traveler),
            "GUIDE" => Ok(Self::Guide),
            "ADMIN" => Ok(Self::Admin),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// Role-tagged user data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserProfile {
    Traveler,
    Guide(GuideProfile),
    Admin {
        employee_id: String,
        department: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub is_enabled: bool,
    pub created_at: i64,
    #[serde(flatten)]
    pub profile: UserProfile,
}

impl User {
    pub fn role(&self) -> Role {
        match self.profile {
            UserProfile::Traveler => Role::Traveler,
            UserProfile::Guide(_) => Role::Guide,
            UserProfile::Admin { .. } => Role::Admin,
        }
    }

    pub fn as_guide(&self) -> Option<&GuideProfile> {
        match &self.profile {
            UserProfile::Guide(profile) => Some(profile),
            _ => None,
        }
    }
}
