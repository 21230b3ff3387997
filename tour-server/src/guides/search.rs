//! Guide search
//!
//! Composes the availability store with the guide directory: guides that
//! declared the date available, in the searched location (same normalized
//! key as booking acceptance), APPROVED, and speaking the language.

use std::collections::HashMap;

use chrono::NaiveDate;
use shared::error::AppError;
use shared::models::GuideSearchResult;
use shared::util::match_key;

use super::GuideService;
use crate::db::{availability, guides};
use crate::error::ServiceResult;

impl GuideService {
    pub async fn search(
        &self,
        date: NaiveDate,
        location: &str,
        language: &str,
    ) -> ServiceResult<Vec<GuideSearchResult>> {
        let location_key = match_key(location);
        if location_key.is_empty() {
            return Err(AppError::validation("location is required")
                .with_detail("field", "location")
                .into());
        }

        let mut slots_by_guide: HashMap<i64, Vec<String>> =
            availability::list_available_on(self.pool(), date)
                .await?
                .into_iter()
                .map(|a| (a.guide_id, a.slots))
                .collect();
        if slots_by_guide.is_empty() {
            return Ok(Vec::new());
        }

        let results: Vec<GuideSearchResult> =
            guides::list_approved_by_location(self.pool(), &location_key)
                .await?
                .into_iter()
                .filter(|g| language.trim().is_empty() || g.speaks(language))
                .filter_map(|g| {
                    let available_slots = slots_by_guide.remove(&g.id)?;
                    Some(GuideSearchResult {
                        id: g.id,
                        name: g.name,
                        bio: g.bio,
                        languages: g.languages,
                        location: g.location,
                        rate_per_hour: g.rate_per_hour,
                        verification_status: g.verification_status,
                        available_slots,
                    })
                })
                .collect();

        tracing::debug!(%date, location = %location_key, language, hits = results.len(), "Guide search");
        Ok(results)
    }
}
