use core::str::FromStr;
use serde::{Deserialize, Serialize};

use cinema_core::DomainError;

/// Ticket category. Determines price and whether a seat is consumed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TicketCategory {
    Adult,
    Child,
    Infant,
}

impl TicketCategory {
    pub const ALL: [TicketCategory; 3] = [Self::Adult, Self::Child, Self::Infant];

    pub fn as_str(self) -> &'static str {
        match self {
            TicketCategory::Adult => "ADULT",
            TicketCategory::Child => "CHILD",
            TicketCategory::Infant => "INFANT",
        }
    }
}

impl core::fmt::Display for TicketCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ADULT" => Ok(TicketCategory::Adult),
            "CHILD" => Ok(TicketCategory::Child),
            "INFANT" => Ok(TicketCategory::Infant),
            other => Err(DomainError::validation(format!(
                "unknown ticket category '{other}' (expected ADULT, CHILD or INFANT)"
            ))),
        }
    }
}
