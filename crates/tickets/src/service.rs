//! The purchase operation: validate, price, reserve, pay.

use tracing::{debug, info, warn};

use cinema_core::{AccountId, DomainResult};

use crate::collaborators::{SeatReservationService, TicketPaymentService};
use crate::error::{FulfillmentStage, InvalidPurchaseRequest, PurchaseError};
use crate::policy::TicketPolicy;
use crate::request::{PurchaseOrder, TicketRequest};
use crate::summary::PurchaseSummary;

/// Entry point used by callers (UI, API layer).
pub trait TicketService {
    /// Purchase tickets for `account_id`.
    ///
    /// On `Err(PurchaseError::Invalid(_))` no collaborator was called.
    fn purchase_tickets(
        &self,
        account_id: i64,
        requests: &[TicketRequest],
    ) -> Result<(), PurchaseError>;
}

/// Default [`TicketService`] backed by a seat-reservation and a payment
/// collaborator.
///
/// Holds no mutable state; concurrent purchases are independent and any
/// per-account ordering is up to the collaborators.
#[derive(Debug, Clone)]
pub struct TicketServiceImpl<P, S> {
    payment_service: P,
    seat_reservation_service: S,
    policy: TicketPolicy,
}

impl<P, S> TicketServiceImpl<P, S>
where
    P: TicketPaymentService,
    S: SeatReservationService,
{
    pub fn new(payment_service: P, seat_reservation_service: S) -> Self {
        Self {
            payment_service,
            seat_reservation_service,
            policy: TicketPolicy::default(),
        }
    }

    /// Replace the default policy. Fails if `policy` does not pass
    /// [`TicketPolicy::validate`].
    pub fn with_policy(mut self, policy: TicketPolicy) -> DomainResult<Self> {
        policy.validate()?;
        self.policy = policy;
        Ok(self)
    }

    pub fn policy(&self) -> &TicketPolicy {
        &self.policy
    }

    /// Aggregate and validate `order` without calling any collaborator.
    pub fn quote(&self, order: &PurchaseOrder) -> Result<PurchaseSummary, InvalidPurchaseRequest> {
        let summary = PurchaseSummary::from_requests(&self.policy, order.requests())
            .ok_or_else(|| InvalidPurchaseRequest::ExceedsMaxTickets {
                requested: order
                    .requests()
                    .iter()
                    .fold(0u64, |acc, r| acc.saturating_add(u64::from(r.count()))),
                max: self.policy.max_tickets,
            })?;
        debug!(
            account_id = %order.account_id(),
            total_tickets = summary.total_tickets,
            total_seats = summary.total_seats,
            total_cost = %summary.total_cost,
            "purchase summarized"
        );
        self.policy.check(&summary)?;
        Ok(summary)
    }

    /// Validate `order` and, if it is acceptable, reserve seats then take
    /// payment. Returns the summary that was fulfilled.
    pub fn purchase(&self, order: &PurchaseOrder) -> Result<PurchaseSummary, PurchaseError> {
        let summary = self.quote(order).inspect_err(|reason| {
            warn!(
                account_id = %order.account_id(),
                code = reason.code(),
                %reason,
                "purchase rejected"
            );
        })?;

        self.fulfil(order.account_id(), &summary)?;

        info!(
            account_id = %order.account_id(),
            total_seats = summary.total_seats,
            total_cost = %summary.total_cost,
            "tickets purchased"
        );
        Ok(summary)
    }

    fn fulfil(&self, account_id: AccountId, summary: &PurchaseSummary) -> Result<(), PurchaseError> {
        self.seat_reservation_service
            .reserve_seat(account_id, summary.total_seats)
            .map_err(|source| {
                warn!(%account_id, error = %source, "seat reservation failed; payment not attempted");
                PurchaseError::FulfillmentFailed {
                    stage: FulfillmentStage::SeatReservation,
                    account_id,
                    source,
                }
            })?;

        // No compensation: seats reserved above stay held if payment fails.
        self.payment_service
            .make_payment(account_id, summary.total_cost)
            .map_err(|source| {
                warn!(
                    %account_id,
                    reserved_seats = summary.total_seats,
                    error = %source,
                    "payment failed after seats were reserved"
                );
                PurchaseError::FulfillmentFailed {
                    stage: FulfillmentStage::Payment,
                    account_id,
                    source,
                }
            })
    }
}

impl<P, S> TicketService for TicketServiceImpl<P, S>
where
    P: TicketPaymentService,
    S: SeatReservationService,
{
    #[tracing::instrument(skip(self, requests), fields(requests = requests.len()))]
    fn purchase_tickets(
        &self,
        account_id: i64,
        requests: &[TicketRequest],
    ) -> Result<(), PurchaseError> {
        let order = PurchaseOrder::new(account_id, requests.iter().copied()).inspect_err(|reason| {
            warn!(code = reason.code(), %reason, "purchase rejected");
        })?;
        self.purchase(&order).map(|_| ())
    }
}
