//! Guide directory services: search, availability, verification

pub mod availability;
pub mod search;

use shared::error::{AppError, ErrorCode};
use shared::models::{GuideSummary, VerificationStatus};
use sqlx::SqlitePool;

use crate::db::guides::{self, Guide};
use crate::error::ServiceResult;

impl From<Guide> for GuideSummary {
    fn from(g: Guide) -> Self {
        GuideSummary {
            id: g.id,
            name: g.name,
            location: g.location,
            rate_per_hour: g.rate_per_hour,
            verification_status: g.verification_status,
            languages: g.languages,
            bio: g.bio,
        }
    }
}

pub(crate) fn guide_not_found(guide_id: i64) -> AppError {
    AppError::new(ErrorCode::GuideNotFound).with_detail("guide_id", guide_id)
}

#[derive(Clone)]
pub struct GuideService {
    pool: SqlitePool,
}

impl GuideService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub(crate) fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Guides waiting for an admin decision, oldest first
    pub async fn list_pending(&self) -> ServiceResult<Vec<GuideSummary>> {
        let pending = guides::list_by_status(&self.pool, VerificationStatus::Pending).await?;
        Ok(pending.into_iter().map(GuideSummary::from).collect())
    }

    /// Approve or reject a guide
    pub async fn verify(&self, guide_id: i64, status: VerificationStatus) -> ServiceResult<GuideSummary> {
        if !guides::set_verification_status(&self.pool, guide_id, status).await? {
            return Err(guide_not_found(guide_id).into());
        }
        tracing::info!(guide_id, status = ?status, "Guide verification updated");

        let guide = guides::find_guide(&self.pool, guide_id)
            .await?
            .ok_or_else(|| guide_not_found(guide_id))?;
        Ok(guide.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use crate::db::users::{NewGuide, insert_guide};
    use rust_decimal::Decimal;

    async fn add_guide(pool: &SqlitePool, email: &str, status: VerificationStatus) -> i64 {
        insert_guide(
            pool,
            &NewGuide {
                name: "Guide",
                email,
                location: "Hampi",
                rate_per_hour: Decimal::from(400),
                languages: &["Kannada".to_string()],
                bio: Some("Ruins and boulders"),
                verification_status: status,
            },
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_verify_moves_guide_out_of_pending() {
        let db = DbService::in_memory().await.unwrap();
        let service = GuideService::new(db.pool.clone());
        let a = add_guide(&db.pool, "a@x.io", VerificationStatus::Pending).await;
        let b = add_guide(&db.pool, "b@x.io", VerificationStatus::Pending).await;
        add_guide(&db.pool, "c@x.io", VerificationStatus::Approved).await;

        let pending: Vec<i64> = service.list_pending().await.unwrap().iter().map(|g| g.id).collect();
        assert_eq!(pending.len(), 2);
        assert!(pending.contains(&a) && pending.contains(&b));

        let approved = service.verify(a, VerificationStatus::Approved).await.unwrap();
        assert_eq!(approved.verification_status, VerificationStatus::Approved);
        let rejected = service.verify(b, VerificationStatus::Rejected).await.unwrap();
        assert_eq!(rejected.verification_status, VerificationStatus::Rejected);

        assert!(service.list_pending().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_verify_unknown_guide() {
        let db = DbService::in_memory().await.unwrap();
        let service = GuideService::new(db.pool.clone());

        let err: AppError = service
            .verify(31337, VerificationStatus::Approved)
            .await
            .unwrap_err()
            .into();
        assert_eq!(err.code, ErrorCode::GuideNotFound);
    }
}
