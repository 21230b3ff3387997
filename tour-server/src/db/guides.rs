//! Guide directory lookups

use rust_decimal::Decimal;
use shared::models::VerificationStatus;
use shared::util::match_key;
use sqlx::SqlitePool;

use super::decode_error;
use crate::money::from_minor_units;

/// A guide as the booking core sees it
#[derive(Debug, Clone, PartialEq)]
pub struct Guide {
    pub id: i64,
    pub name: String,
    pub location: String,
    /// Normalized location used for matching
    pub location_key: String,
    pub rate_per_hour: Decimal,
    pub verification_status: VerificationStatus,
    pub languages: Vec<String>,
    pub bio: Option<String>,
}

impl Guide {
    pub fn is_approved(&self) -> bool {
        self.verification_status.is_approved()
    }

    /// Case-insensitive language membership
    pub fn speaks(&self, language: &str) -> bool {
        let wanted = match_key(language);
        self.languages.iter().any(|l| match_key(l) == wanted)
    }
}

#[derive(sqlx::FromRow)]
struct GuideRow {
    id: i64,
    name: String,
    location: String,
    location_key: String,
    rate_per_hour_minor: i64,
    verification_status: VerificationStatus,
    languages: String,
    bio: Option<String>,
}

impl TryFrom<GuideRow> for Guide {
    type Error = sqlx::Error;

    fn try_from(row: GuideRow) -> Result<Self, Self::Error> {
        let languages =
            serde_json::from_str(&row.languages).map_err(|e| decode_error("languages", e))?;
        Ok(Guide {
            id: row.id,
            name: row.name,
            location: row.location,
            location_key: row.location_key,
            rate_per_hour: from_minor_units(row.rate_per_hour_minor),
            verification_status: row.verification_status,
            languages,
            bio: row.bio,
        })
    }
}

const GUIDE_SELECT: &str = "SELECT u.id, u.name, g.location, g.location_key, \
    g.rate_per_hour_minor, g.verification_status, g.languages, g.bio \
    FROM guide_profiles g JOIN users u ON u.id = g.user_id";

fn into_guides(rows: Vec<GuideRow>) -> Result<Vec<Guide>, sqlx::Error> {
    rows.into_iter().map(Guide::try_from).collect()
}

pub async fn find_guide(pool: &SqlitePool, id: i64) -> Result<Option<Guide>, sqlx::Error> {
    let sql = format!("{GUIDE_SELECT} WHERE g.user_id = ?");
    let row = sqlx::query_as::<_, GuideRow>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    row.map(Guide::try_from).transpose()
}

/// APPROVED guides whose normalized location equals `location_key`
pub async fn list_approved_by_location(
    pool: &SqlitePool,
    location_key: &str,
) -> Result<Vec<Guide>, sqlx::Error> {
    let sql = format!(
        "{GUIDE_SELECT} WHERE g.location_key = ? AND g.verification_status = ? ORDER BY u.id"
    );
    let rows = sqlx::query_as::<_, GuideRow>(&sql)
        .bind(location_key)
        .bind(VerificationStatus::Approved)
        .fetch_all(pool)
        .await?;
    into_guides(rows)
}

pub async fn list_by_status(
    pool: &SqlitePool,
    status: VerificationStatus,
) -> Result<Vec<Guide>, sqlx::Error> {
    let sql = format!("{GUIDE_SELECT} WHERE g.verification_status = ? ORDER BY u.created_at");
    let rows = sqlx::query_as::<_, GuideRow>(&sql)
        .bind(status)
        .fetch_all(pool)
        .await?;
    into_guides(rows)
}

/// Returns `false` when no guide has this id
pub async fn set_verification_status(
    pool: &SqlitePool,
    id: i64,
    status: VerificationStatus,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("UPDATE guide_profiles SET verification_status = ? WHERE user_id = ?")
        .bind(status)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() == 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use crate::db::users::{NewGuide, insert_guide};

    async fn add_guide(pool: &SqlitePool, email: &str, location: &str, status: VerificationStatus) -> i64 {
        insert_guide(
            pool,
            &NewGuide {
                name: "Guide",
                email,
                location,
                rate_per_hour: Decimal::new(10000, 2),
                languages: &["Hindi".to_string()],
                bio: None,
                verification_status: status,
            },
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_list_approved_matches_normalized_location() {
        let db = DbService::in_memory().await.unwrap();
        let a = add_guide(&db.pool, "a@x.io", "Pune", VerificationStatus::Approved).await;
        let b = add_guide(&db.pool, "b@x.io", "  PUNE", VerificationStatus::Approved).await;
        add_guide(&db.pool, "c@x.io", "Pune", VerificationStatus::Pending).await;
        add_guide(&db.pool, "d@x.io", "Goa", VerificationStatus::Approved).await;

        let guides = list_approved_by_location(&db.pool, &match_key("pune"))
            .await
            .unwrap();
        let mut ids: Vec<i64> = guides.iter().map(|g| g.id).collect();
        ids.sort();
        let mut expected = vec![a, b];
        expected.sort();
        assert_eq!(ids, expected);
    }

    #[tokio::test]
    async fn test_set_verification_status() {
        let db = DbService::in_memory().await.unwrap();
        let id = add_guide(&db.pool, "a@x.io", "Pune", VerificationStatus::Pending).await;

        assert!(set_verification_status(&db.pool, id, VerificationStatus::Approved).await.unwrap());
        assert!(!set_verification_status(&db.pool, 1, VerificationStatus::Approved).await.unwrap());

        let guide = find_guide(&db.pool, id).await.unwrap().unwrap();
        assert!(guide.is_approved());
        assert!(guide.speaks("hindi"));
        assert!(!guide.speaks("French"));
    }
}
