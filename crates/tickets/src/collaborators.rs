//! Contracts for the external services a purchase is handed to.
//!
//! Implementations live outside this crate. Failures are reported as
//! `anyhow::Error`; the ticket service wraps them without inspecting them.

use std::sync::Arc;

use cinema_core::{AccountId, Money};

/// Reserves physical seats for an account.
pub trait SeatReservationService {
    fn reserve_seat(&self, account_id: AccountId, total_seats: u64) -> anyhow::Result<()>;
}

/// Takes payment from an account.
pub trait TicketPaymentService {
    fn make_payment(&self, account_id: AccountId, amount: Money) -> anyhow::Result<()>;
}

macro_rules! forward_collaborator {
    ($($ptr:ty),* $(,)?) => {
        $(
            impl<T: SeatReservationService + ?Sized> SeatReservationService for $ptr {
                fn reserve_seat(&self, account_id: AccountId, total_seats: u64) -> anyhow::Result<()> {
                    (**self).reserve_seat(account_id, total_seats)
                }
            }

            impl<T: TicketPaymentService + ?Sized> TicketPaymentService for $ptr {
                fn make_payment(&self, account_id: AccountId, amount: Money) -> anyhow::Result<()> {
                    (**self).make_payment(account_id, amount)
                }
            }
        )*
    };
}

forward_collaborator!(&T, Box<T>, Arc<T>);
