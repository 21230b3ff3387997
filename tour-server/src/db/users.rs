//! User directory
//!
//! Accounts are created by the registration service; the insert functions
//! here are its write interface into the shared store.

use rust_decimal::Decimal;
use shared::models::{GuideProfile, Role, User, UserProfile, VerificationStatus};
use shared::util::{match_key, now_millis, snowflake_id};
use sqlx::SqlitePool;

use super::decode_error;
use crate::money::{from_minor_units, to_minor_units};

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
    role: Role,
    is_enabled: bool,
    created_at: i64,
    location: Option<String>,
    rate_per_hour_minor: Option<i64>,
    verification_status: Option<VerificationStatus>,
    languages: Option<String>,
    bio: Option<String>,
    employee_id: Option<String>,
    department: Option<String>,
}

impl TryFrom<UserRow> for User {
    type Error = sqlx::Error;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let profile = match row.role {
            Role::Traveler => UserProfile::Traveler,
            Role::Guide => {
                let (Some(location), Some(rate), Some(status)) = (
                    row.location,
                    row.rate_per_hour_minor,
                    row.verification_status,
                ) else {
                    return Err(decode_error("guide_profiles", "guide without profile row"));
                };
                let languages = match row.languages {
                    Some(raw) => serde_json::from_str(&raw)
                        .map_err(|e| decode_error("languages", e))?,
                    None => Vec::new(),
                };
                UserProfile::Guide(GuideProfile {
                    location,
                    rate_per_hour: from_minor_units(rate),
                    verification_status: status,
                    languages,
                    bio: row.bio,
                })
            }
            Role::Admin => {
                let (Some(employee_id), Some(department)) = (row.employee_id, row.department)
                else {
                    return Err(decode_error("admin_profiles", "admin without profile row"));
                };
                UserProfile::Admin {
                    employee_id,
                    department,
                }
            }
        };

        Ok(User {
            id: row.id,
            name: row.name,
            email: row.email,
            is_enabled: row.is_enabled,
            created_at: row.created_at,
            profile,
        })
    }
}

const USER_SELECT: &str = "SELECT u.id, u.name, u.email, u.role, u.is_enabled, u.created_at, \
    g.location, g.rate_per_hour_minor, g.verification_status, g.languages, g.bio, \
    a.employee_id, a.department \
    FROM users u \
    LEFT JOIN guide_profiles g ON g.user_id = u.id \
    LEFT JOIN admin_profiles a ON a.user_id = u.id";

pub async fn find_user(pool: &SqlitePool, id: i64) -> Result<Option<User>, sqlx::Error> {
    let sql = format!("{USER_SELECT} WHERE u.id = ?");
    let row = sqlx::query_as::<_, UserRow>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    row.map(User::try_from).transpose()
}

/// Traveler existence check; `None` for unknown ids and non-traveler accounts
pub async fn find_traveler(pool: &SqlitePool, id: i64) -> Result<Option<User>, sqlx::Error> {
    Ok(find_user(pool, id)
        .await?
        .filter(|user| user.role() == Role::Traveler))
}

pub struct NewGuide<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub location: &'a str,
    pub rate_per_hour: Decimal,
    pub languages: &'a [String],
    pub bio: Option<&'a str>,
    pub verification_status: VerificationStatus,
}

pub async fn insert_traveler(
    pool: &SqlitePool,
    name: &str,
    email: &str,
) -> Result<i64, sqlx::Error> {
    let id = snowflake_id();
    sqlx::query(
        "INSERT INTO users (id, name, email, role, is_enabled, created_at) VALUES (?, ?, ?, ?, 1, ?)",
    )
    .bind(id)
    .bind(name)
    .bind(email)
    .bind(Role::Traveler)
    .bind(now_millis())
    .execute(pool)
    .await?;
    Ok(id)
}

pub async fn insert_guide(pool: &SqlitePool, guide: &NewGuide<'_>) -> Result<i64, sqlx::Error> {
    let id = snowflake_id();
    let rate_minor = to_minor_units(guide.rate_per_hour)
        .ok_or_else(|| decode_error("rate_per_hour_minor", "rate out of range"))?;
    let languages =
        serde_json::to_string(guide.languages).map_err(|e| decode_error("languages", e))?;

    let mut tx = pool.begin().await?;
    sqlx::query(
        "INSERT INTO users (id, name, email, role, is_enabled, created_at) VALUES (?, ?, ?, ?, 1, ?)",
    )
    .bind(id)
    .bind(guide.name)
    .bind(guide.email)
    .bind(Role::Guide)
    .bind(now_millis())
    .execute(&mut *tx)
    .await?;
    sqlx::query(
        "INSERT INTO guide_profiles (user_id, location, location_key, rate_per_hour_minor, verification_status, languages, bio) VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(id)
    .bind(guide.location.trim())
    .bind(match_key(guide.location))
    .bind(rate_minor)
    .bind(guide.verification_status)
    .bind(languages)
    .bind(guide.bio)
    .execute(&mut *tx)
    .await?;
    tx.commit().await?;
    Ok(id)
}

pub async fn insert_admin(
    pool: &SqlitePool,
    name: &str,
    email: &str,
    employee_id: &str,
    department: &str,
) -> Result<i64, sqlx::Error> {
    let id = snowflake_id();
    let mut tx = pool.begin().await?;
    sqlx::query(
        "INSERT INTO users (id, name, email, role, is_enabled, created_at) VALUES (?, ?, ?, ?, 1, ?)",
    )
    .bind(id)
    .bind(name)
    .bind(email)
    .bind(Role::Admin)
    .bind(now_millis())
    .execute(&mut *tx)
    .await?;
    sqlx::query("INSERT INTO admin_profiles (user_id, employee_id, department) VALUES (?, ?, ?)")
        .bind(id)
        .bind(employee_id)
        .bind(department)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;

    #[tokio::test]
    async fn test_user_profiles_are_role_tagged() {
        let db = DbService::in_memory().await.unwrap();
        let traveler = insert_traveler(&db.pool, "Ravi", "ravi@example.com")
            .await
            .unwrap();
        let guide = insert_guide(
            &db.pool,
            &NewGuide {
                name: "Meera",
                email: "meera@example.com",
                location: " Pune ",
                rate_per_hour: Decimal::new(30000, 2),
                languages: &["English".to_string(), "Marathi".to_string()],
                bio: Some("Old city walks"),
                verification_status: VerificationStatus::Approved,
            },
        )
        .await
        .unwrap();
        let admin = insert_admin(&db.pool, "Ops", "ops@example.com", "EMP-1", "Trust")
            .await
            .unwrap();

        let user = find_user(&db.pool, traveler).await.unwrap().unwrap();
        assert_eq!(user.profile, UserProfile::Traveler);

        let user = find_user(&db.pool, guide).await.unwrap().unwrap();
        let profile = user.as_guide().unwrap();
        assert_eq!(profile.location, "Pune");
        assert_eq!(profile.rate_per_hour, Decimal::new(30000, 2));
        assert_eq!(profile.languages, vec!["English", "Marathi"]);

        let user = find_user(&db.pool, admin).await.unwrap().unwrap();
        assert_eq!(user.role(), Role::Admin);
    }

    #[tokio::test]
    async fn test_find_traveler_ignores_other_roles() {
        let db = DbService::in_memory().await.unwrap();
        let admin = insert_admin(&db.pool, "Ops", "ops@example.com", "EMP-1", "Trust")
            .await
            .unwrap();

        assert!(find_traveler(&db.pool, admin).await.unwrap().is_none());
        assert!(find_traveler(&db.pool, 404).await.unwrap().is_none());
    }
}
