//! Availability store

use chrono::NaiveDate;
use shared::models::Availability;
use sqlx::SqlitePool;

use super::decode_error;

#[derive(sqlx::FromRow)]
struct AvailabilityRow {
    guide_id: i64,
    date: NaiveDate,
    is_available: bool,
    slots: String,
}

impl TryFrom<AvailabilityRow> for Availability {
    type Error = sqlx::Error;

    fn try_from(row: AvailabilityRow) -> Result<Self, Self::Error> {
        let slots = serde_json::from_str(&row.slots).map_err(|e| decode_error("slots", e))?;
        Ok(Availability {
            guide_id: row.guide_id,
            date: row.date,
            is_available: row.is_available,
            slots,
        })
    }
}

fn into_availability(rows: Vec<AvailabilityRow>) -> Result<Vec<Availability>, sqlx::Error> {
    rows.into_iter().map(Availability::try_from).collect()
}

/// Insert or replace the record for `(guide_id, date)`
pub async fn upsert(
    pool: &SqlitePool,
    availability: &Availability,
    now: i64,
) -> Result<(), sqlx::Error> {
    let slots =
        serde_json::to_string(&availability.slots).map_err(|e| decode_error("slots", e))?;
    sqlx::query(
        "INSERT INTO availability_slots (guide_id, date, is_available, slots, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5)
         ON CONFLICT (guide_id, date) DO UPDATE SET
            is_available = ?3, slots = ?4, updated_at = ?5",
    )
    .bind(availability.guide_id)
    .bind(availability.date)
    .bind(availability.is_available)
    .bind(slots)
    .bind(now)
    .execute(pool)
    .await?;
    Ok(())
}

/// Inclusive date range for one guide, ordered by date
pub async fn find_range(
    pool: &SqlitePool,
    guide_id: i64,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<Availability>, sqlx::Error> {
    let rows = sqlx::query_as::<_, AvailabilityRow>(
        "SELECT guide_id, date, is_available, slots FROM availability_slots
         WHERE guide_id = ? AND date BETWEEN ? AND ? ORDER BY date",
    )
    .bind(guide_id)
    .bind(start)
    .bind(end)
    .fetch_all(pool)
    .await?;
    into_availability(rows)
}

/// Every explicit "available" record on `date`
pub async fn list_available_on(
    pool: &SqlitePool,
    date: NaiveDate,
) -> Result<Vec<Availability>, sqlx::Error> {
    let rows = sqlx::query_as::<_, AvailabilityRow>(
        "SELECT guide_id, date, is_available, slots FROM availability_slots
         WHERE date = ? AND is_available = 1 ORDER BY guide_id",
    )
    .bind(date)
    .fetch_all(pool)
    .await?;
    into_availability(rows)
}
