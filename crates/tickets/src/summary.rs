use serde::{Deserialize, Serialize};

use cinema_core::Money;

use crate::category::TicketCategory;
use crate::policy::TicketPolicy;
use crate::request::TicketRequest;

/// Totals of one purchase, aggregated over all of its requests.
///
/// Derived on every call and never stored.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseSummary {
    pub adult_tickets: u64,
    pub child_tickets: u64,
    pub infant_tickets: u64,
    pub total_tickets: u64,
    pub total_seats: u64,
    pub total_cost: Money,
}

impl PurchaseSummary {
    /// Aggregate `requests` in a single pass using the policy's category table.
    ///
    /// Request order does not affect the result. Returns `None` if any total
    /// overflows.
    pub fn from_requests<'a, I>(policy: &TicketPolicy, requests: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a TicketRequest>,
    {
        let mut summary = Self::default();

        for request in requests {
            let count = u64::from(request.count());
            let rule = policy.rule(request.category());

            let per_category = match request.category() {
                TicketCategory::Adult => &mut summary.adult_tickets,
                TicketCategory::Child => &mut summary.child_tickets,
                TicketCategory::Infant => &mut summary.infant_tickets,
            };
            *per_category = per_category.checked_add(count)?;

            summary.total_tickets = summary.total_tickets.checked_add(count)?;
            if rule.consumes_seat {
                summary.total_seats = summary.total_seats.checked_add(count)?;
            }
            summary.total_cost = summary
                .total_cost
                .checked_add(rule.price.checked_mul(count)?)?;
        }

        Some(summary)
    }

    /// At least one adult ticket with a non-zero count was requested.
    pub fn has_adult(&self) -> bool {
        self.adult_tickets > 0
    }

    pub fn count_of(&self, category: TicketCategory) -> u64 {
        match category {
            TicketCategory::Adult => self.adult_tickets,
            TicketCategory::Child => self.child_tickets,
            TicketCategory::Infant => self.infant_tickets,
        }
    }
}
