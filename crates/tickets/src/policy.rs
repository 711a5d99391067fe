//! Purchase rules and prices.
//!
//! All per-category behaviour lives in [`TicketPolicy::rule`]; adding a
//! category means adding one arm there and one price field here.

use serde::{Deserialize, Serialize};

use cinema_core::{DomainError, DomainResult, Money};

use crate::category::TicketCategory;
use crate::error::InvalidPurchaseRequest;
use crate::summary::PurchaseSummary;

pub const DEFAULT_MAX_TICKETS: u32 = 25;
pub const DEFAULT_ADULT_PRICE: Money = Money::new(25);
pub const DEFAULT_CHILD_PRICE: Money = Money::new(15);
pub const DEFAULT_INFANT_PRICE: Money = Money::ZERO;

pub const ENV_MAX_TICKETS: &str = "CINEMA_MAX_TICKETS";
pub const ENV_ADULT_PRICE: &str = "CINEMA_ADULT_PRICE";
pub const ENV_CHILD_PRICE: &str = "CINEMA_CHILD_PRICE";
pub const ENV_INFANT_PRICE: &str = "CINEMA_INFANT_PRICE";

/// Price and seat consumption of one category.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CategoryRule {
    pub price: Money,
    pub consumes_seat: bool,
}

/// Limits and prices applied to every purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TicketPolicy {
    pub max_tickets: u32,
    pub adult_price: Money,
    pub child_price: Money,
    pub infant_price: Money,
}

impl Default for TicketPolicy {
    fn default() -> Self {
        Self {
            max_tickets: DEFAULT_MAX_TICKETS,
            adult_price: DEFAULT_ADULT_PRICE,
            child_price: DEFAULT_CHILD_PRICE,
            infant_price: DEFAULT_INFANT_PRICE,
        }
    }
}

impl TicketPolicy {
    /// Load the policy from `CINEMA_*` environment variables.
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> DomainResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`TicketPolicy::from_env`] with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> DomainResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let policy = Self {
            max_tickets: parse_var(&lookup, ENV_MAX_TICKETS)?.unwrap_or(defaults.max_tickets),
            adult_price: parse_var(&lookup, ENV_ADULT_PRICE)?
                .map(Money::new)
                .unwrap_or(defaults.adult_price),
            child_price: parse_var(&lookup, ENV_CHILD_PRICE)?
                .map(Money::new)
                .unwrap_or(defaults.child_price),
            infant_price: parse_var(&lookup, ENV_INFANT_PRICE)?
                .map(Money::new)
                .unwrap_or(defaults.infant_price),
        };
        policy.validate()?;
        Ok(policy)
    }

    /// Rejects policies that could never accept a purchase, or whose largest
    /// acceptable order would not fit in a `u64` amount.
    pub fn validate(&self) -> DomainResult<()> {
        if self.max_tickets == 0 {
            return Err(DomainError::validation("max_tickets must be at least 1"));
        }

        let dearest = TicketCategory::ALL
            .iter()
            .map(|c| self.rule(*c).price)
            .max()
            .unwrap_or(Money::ZERO);
        if dearest.checked_mul(u64::from(self.max_tickets)).is_none() {
            return Err(DomainError::validation(format!(
                "{} tickets at {} overflows the payment amount",
                self.max_tickets, dearest
            )));
        }
        Ok(())
    }

    pub fn rule(&self, category: TicketCategory) -> CategoryRule {
        match category {
            TicketCategory::Adult => CategoryRule {
                price: self.adult_price,
                consumes_seat: true,
            },
            TicketCategory::Child => CategoryRule {
                price: self.child_price,
                consumes_seat: true,
            },
            TicketCategory::Infant => CategoryRule {
                price: self.infant_price,
                consumes_seat: false,
            },
        }
    }

    /// Apply the acceptance rules to aggregated totals.
    ///
    /// Checked in order: ticket limit, empty purchase, adult present.
    pub fn check(&self, summary: &PurchaseSummary) -> Result<(), InvalidPurchaseRequest> {
        if summary.total_tickets > u64::from(self.max_tickets) {
            return Err(InvalidPurchaseRequest::ExceedsMaxTickets {
                requested: summary.total_tickets,
                max: self.max_tickets,
            });
        }

        if summary.total_tickets == 0 {
            return Err(InvalidPurchaseRequest::EmptyPurchase);
        }

        if !summary.has_adult() {
            return Err(InvalidPurchaseRequest::MissingAdult);
        }

        Ok(())
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> DomainResult<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: core::str::FromStr,
    T::Err: core::fmt::Display,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| DomainError::validation(format!("{key}={raw:?}: {e}"))),
    }
}
