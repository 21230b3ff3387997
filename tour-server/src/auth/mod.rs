//! Request principal
//!
//! Every booking route runs on behalf of a [`Principal`] resolved from a
//! bearer token. Authentication itself (passwords, OTP) lives in the
//! identity service.

mod extractor;
pub mod jwt;

pub use jwt::{Claims, JwtError, JwtService};

use shared::error::AppError;
use shared::models::Role;

/// Authenticated caller: user id plus role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Principal {
    pub user_id: i64,
    pub role: Role,
}

impl Principal {
    /// Fail with RoleRequired unless the caller has `role`
    pub fn require(&self, role: Role) -> Result<i64, AppError> {
        if self.role != role {
            tracing::warn!(
                user_id = self.user_id,
                role = %self.role,
                required = %role,
                "Role check failed"
            );
            return Err(AppError::role_required(role.as_str()));
        }
        Ok(self.user_id)
    }
}

impl TryFrom<Claims> for Principal {
    type Error = std::num::ParseIntError;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        Ok(Self {
            user_id: claims.sub.parse()?,
            role: claims.role,
        })
    }
}
