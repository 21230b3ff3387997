//! Guide availability: per-date open/closed flag plus start times

use chrono::{NaiveDate, NaiveTime};
use shared::error::{AppError, ErrorCode};
use shared::models::{Availability, AvailabilityUpsert};
use shared::util::now_millis;

use super::{GuideService, guide_not_found};
use crate::db::{availability, guides};
use crate::error::ServiceResult;

/// Parse, sort and de-duplicate `HH:MM` start times
pub fn normalize_slots(slots: &[String]) -> Result<Vec<String>, AppError> {
    let mut times = slots
        .iter()
        .map(|s| {
            let trimmed = s.trim();
            NaiveTime::parse_from_str(trimmed, "%H:%M")
                .ok()
                .filter(|_| trimmed.len() == 5)
                .ok_or_else(|| AppError::new(ErrorCode::InvalidTimeSlot).with_detail("slot", s.as_str()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    times.sort();
    times.dedup();
    Ok(times.iter().map(|t| t.format("%H:%M").to_string()).collect())
}

impl GuideService {
    /// Upsert the guide's record for one date.
    ///
    /// An unavailable day is stored with no slots.
    pub async fn set_availability(
        &self,
        guide_id: i64,
        input: &AvailabilityUpsert,
    ) -> ServiceResult<Availability> {
        guides::find_guide(self.pool(), guide_id)
            .await?
            .ok_or_else(|| guide_not_found(guide_id))?;

        let slots = if input.is_available {
            normalize_slots(&input.slots)?
        } else {
            Vec::new()
        };
        let record = Availability {
            guide_id,
            date: input.date,
            is_available: input.is_available,
            slots,
        };
        availability::upsert(self.pool(), &record, now_millis()).await?;

        tracing::info!(
            guide_id,
            date = %record.date,
            is_available = record.is_available,
            slots = record.slots.len(),
            "Availability updated"
        );
        Ok(record)
    }

    /// Inclusive date range, ordered by date
    pub async fn availability_range(
        &self,
        guide_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> ServiceResult<Vec<Availability>> {
        if start > end {
            return Err(AppError::new(ErrorCode::InvalidDateRange)
                .with_detail("start_date", start.to_string())
                .with_detail("end_date", end.to_string())
                .into());
        }
        Ok(availability::find_range(self.pool(), guide_id, start, end).await?)
    }
}
