//! Purchase error model.

use thiserror::Error;

use cinema_core::AccountId;

/// A purchase was rejected before any collaborator was called.
///
/// Every variant is a caller-input problem; none of them is worth retrying.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidPurchaseRequest {
    #[error("invalid account id {account_id}: must be a positive integer")]
    InvalidAccount { account_id: i64 },

    #[error("cannot purchase more than {max} tickets (requested {requested})")]
    ExceedsMaxTickets { requested: u64, max: u32 },

    #[error("child or infant tickets cannot be purchased without at least one adult ticket")]
    MissingAdult,

    #[error("a purchase must contain at least one ticket")]
    EmptyPurchase,
}

impl InvalidPurchaseRequest {
    /// Stable machine-readable reason code.
    pub fn code(&self) -> &'static str {
        match self {
            InvalidPurchaseRequest::InvalidAccount { .. } => "invalid_account",
            InvalidPurchaseRequest::ExceedsMaxTickets { .. } => "exceeds_max_tickets",
            InvalidPurchaseRequest::MissingAdult => "missing_adult",
            InvalidPurchaseRequest::EmptyPurchase => "empty_purchase",
        }
    }
}

/// Which collaborator call failed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FulfillmentStage {
    SeatReservation,
    Payment,
}

impl core::fmt::Display for FulfillmentStage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FulfillmentStage::SeatReservation => f.write_str("seat reservation"),
            FulfillmentStage::Payment => f.write_str("payment"),
        }
    }
}

/// Error returned by [`crate::TicketService::purchase_tickets`].
#[derive(Debug, Error)]
pub enum PurchaseError {
    #[error("invalid purchase request: {0}")]
    Invalid(#[from] InvalidPurchaseRequest),

    /// A collaborator failed after validation passed.
    ///
    /// If `stage` is `SeatReservation`, payment was never attempted. If it is
    /// `Payment`, the seats reserved for this purchase are still held.
    #[error("{stage} failed for account {account_id}")]
    FulfillmentFailed {
        stage: FulfillmentStage,
        account_id: AccountId,
        #[source]
        source: anyhow::Error,
    },
}

impl PurchaseError {
    /// The rejection reason, if validation failed.
    pub fn as_invalid(&self) -> Option<&InvalidPurchaseRequest> {
        match self {
            PurchaseError::Invalid(reason) => Some(reason),
            PurchaseError::FulfillmentFailed { .. } => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            PurchaseError::Invalid(reason) => reason.code(),
            PurchaseError::FulfillmentFailed {
                stage: FulfillmentStage::SeatReservation,
                ..
            } => "seat_reservation_failed",
            PurchaseError::FulfillmentFailed {
                stage: FulfillmentStage::Payment,
                ..
            } => "payment_failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn messages_are_user_facing() {
        let err = InvalidPurchaseRequest::ExceedsMaxTickets { requested: 26, max: 25 };
        assert_eq!(err.to_string(), "cannot purchase more than 25 tickets (requested 26)");
        assert_eq!(err.code(), "exceeds_max_tickets");

        let err = PurchaseError::from(InvalidPurchaseRequest::MissingAdult);
        assert!(err.to_string().starts_with("invalid purchase request: child or infant"));
        assert_eq!(err.code(), "missing_adult");
        assert_eq!(err.as_invalid(), Some(&InvalidPurchaseRequest::MissingAdult));
    }

    #[test]
    fn fulfillment_failure_keeps_collaborator_error_as_source() {
        let err = PurchaseError::FulfillmentFailed {
            stage: FulfillmentStage::Payment,
            account_id: AccountId::new(4).unwrap(),
            source: anyhow::anyhow!("card declined"),
        };
        assert_eq!(err.to_string(), "payment failed for account 4");
        assert_eq!(err.code(), "payment_failed");
        assert!(err.as_invalid().is_none());
        assert_eq!(err.source().unwrap().to_string(), "card declined");
    }
}
