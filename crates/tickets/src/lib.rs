//! Cinema ticket purchasing.
//!
//! Validates a purchase (account, ticket-count limit, adult accompaniment),
//! prices it, and hands the result to two external collaborators in a fixed
//! order: seats are reserved first, payment is taken second.
//!
//! The crate performs no IO of its own; seat reservation and payment live
//! behind [`SeatReservationService`] and [`TicketPaymentService`].

pub mod category;
pub mod collaborators;
pub mod error;
pub mod policy;
pub mod request;
pub mod service;
pub mod summary;

pub use category::TicketCategory;
pub use collaborators::{SeatReservationService, TicketPaymentService};
pub use error::{FulfillmentStage, InvalidPurchaseRequest, PurchaseError};
pub use policy::{CategoryRule, TicketPolicy};
pub use request::{PurchaseOrder, TicketRequest};
pub use service::{TicketService, TicketServiceImpl};
pub use summary::PurchaseSummary;

pub use cinema_core::{AccountId, Money};
