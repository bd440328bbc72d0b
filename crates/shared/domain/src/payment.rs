//! Payment types accepted at registration.

use crate::error::PersonError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, IntoStaticStr};

/// How an attendee pays for a ticket.
///
/// [`PaymentType::None`] is the "absent" sentinel: it is a legal value of the type so that
/// callers can carry "not chosen yet", but attendee construction refuses it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PaymentType {
    Cash,
    Check,
    Credit,
    Debit,
    Invoice,
    None,
}

impl PaymentType {
    /// Returns `true` for the absent sentinel.
    #[must_use]
    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }

    /// All payment types that attendee construction accepts.
    pub fn accepted() -> impl Iterator<Item = Self> {
        Self::iter().filter(|p| !p.is_none())
    }
}

impl FromStr for PaymentType {
    type Err = PersonError;

    /// Case-insensitive lookup by snake_case name (`"credit"`, `"CASH"`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::iter().find(|p| <&'static str>::from(*p).eq_ignore_ascii_case(needle)).ok_or_else(
            || PersonError::InvalidArgument {
                message: format!("Unknown payment type '{needle}'").into(),
                context: None,
            },
        )
    }
}

impl TryFrom<&str> for PaymentType {
    type Error = PersonError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}
