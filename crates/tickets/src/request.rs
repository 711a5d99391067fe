use serde::{Deserialize, Serialize};

use cinema_core::{AccountId, ValueObject};

use crate::category::TicketCategory;
use crate::error::InvalidPurchaseRequest;

/// A request for `count` tickets of one category.
///
/// Immutable. Several requests for the same category may appear in one
/// purchase; their counts are summed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicketRequest {
    category: TicketCategory,
    count: u32,
}

impl TicketRequest {
    pub fn new(category: TicketCategory, count: u32) -> Self {
        Self { category, count }
    }

    pub fn adults(count: u32) -> Self {
        Self::new(TicketCategory::Adult, count)
    }

    pub fn children(count: u32) -> Self {
        Self::new(TicketCategory::Child, count)
    }

    pub fn infants(count: u32) -> Self {
        Self::new(TicketCategory::Infant, count)
    }

    pub fn category(&self) -> TicketCategory {
        self.category
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}

impl ValueObject for TicketRequest {}

/// One purchase: a validated account plus its ticket requests.
///
/// Built per call and discarded afterwards; it has no identity of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    account_id: AccountId,
    requests: Vec<TicketRequest>,
}

impl PurchaseOrder {
    /// Fails with [`InvalidPurchaseRequest::InvalidAccount`] for a zero or
    /// negative account id, before looking at the requests.
    pub fn new(
        account_id: i64,
        requests: impl IntoIterator<Item = TicketRequest>,
    ) -> Result<Self, InvalidPurchaseRequest> {
        let account_id = AccountId::new(account_id)
            .map_err(|_| InvalidPurchaseRequest::InvalidAccount { account_id })?;
        Ok(Self::for_account(account_id, requests))
    }

    pub fn for_account(
        account_id: AccountId,
        requests: impl IntoIterator<Item = TicketRequest>,
    ) -> Self {
        Self {
            account_id,
            requests: requests.into_iter().collect(),
        }
    }

    pub fn account_id(&self) -> AccountId {
        self.account_id
    }

    pub fn requests(&self) -> &[TicketRequest] {
        &self.requests
    }
}
