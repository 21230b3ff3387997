//! Grouping of codes by their thousands digit

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    General,
    Auth,
    Permission,
    Booking,
    Payment,
    /// Guides, travelers, packages and availability
    Directory,
    /// 9xxx, plus any range nothing is assigned to
    System,
}

impl ErrorCategory {
    pub fn from_code(code: u16) -> Self {
        match code / 1000 {
            0 => Self::General,
            1 => Self::Auth,
            2 => Self::Permission,
            4 => Self::Booking,
            5 => Self::Payment,
            6 => Self::Directory,
            _ => Self::System,
        }
    }

    /// Lowercase label used as a log field
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Auth => "auth",
            Self::Permission => "permission",
            Self::Booking => "booking",
            Self::Payment => "payment",
            Self::Directory => "directory",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranges() {
        let cases = [
            (0, ErrorCategory::General),
            (999, ErrorCategory::General),
            (1001, ErrorCategory::Auth),
            (2002, ErrorCategory::Permission),
            (3001, ErrorCategory::System),
            (4101, ErrorCategory::Booking),
            (5001, ErrorCategory::Payment),
            (6202, ErrorCategory::Directory),
            (9001, ErrorCategory::System),
        ];
        for (code, category) in cases {
            assert_eq!(ErrorCategory::from_code(code), category, "{code}");
        }
    }

    #[test]
    fn test_code_category_and_name() {
        assert_eq!(ErrorCode::BookingNotPending.category(), ErrorCategory::Booking);
        assert_eq!(ErrorCode::PaymentProviderError.category(), ErrorCategory::Payment);
        assert_eq!(ErrorCode::InvalidTimeSlot.category(), ErrorCategory::Directory);
        assert_eq!(ErrorCode::DatabaseError.category(), ErrorCategory::System);
        assert_eq!(ErrorCategory::Directory.name(), "directory");
        assert_eq!(ErrorCode::DatabaseError.category().name(), "system");
    }
}
