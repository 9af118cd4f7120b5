use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What an alert warns the account owner about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertKind {
    FundsLow,
    ApproachingPayInLimit,
}

impl AsRef<str> for AlertKind {
    fn as_ref(&self) -> &str {
        match self {
            Self::FundsLow => "FUNDS_LOW",
            Self::ApproachingPayInLimit => "APPROACHING_PAY_IN_LIMIT",
        }
    }
}

impl std::fmt::Display for AlertKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: Uuid,
    pub kind: AlertKind,
    pub address: String,
    pub raised_at: DateTime<Utc>,
}

impl Alert {
    pub fn new(kind: AlertKind, address: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            address: address.into(),
            raised_at: Utc::now(),
        }
    }
}
