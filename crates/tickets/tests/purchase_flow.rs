//! End-to-end purchase flow through trait objects, as an API layer would wire
//! the service.

use std::sync::{Arc, Mutex};

use cinema_tickets::{
    AccountId, FulfillmentStage, InvalidPurchaseRequest, Money, PurchaseError, PurchaseOrder,
    SeatReservationService, TicketPaymentService, TicketPolicy, TicketRequest, TicketService,
    TicketServiceImpl,
};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    Reserve(i64, u64),
    Pay(i64, u64),
}

#[derive(Debug, Default)]
struct BoxOffice {
    calls: Mutex<Vec<Call>>,
    sold_out: bool,
}

impl BoxOffice {
    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

impl SeatReservationService for BoxOffice {
    fn reserve_seat(&self, account_id: AccountId, total_seats: u64) -> anyhow::Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::Reserve(account_id.get(), total_seats));
        if self.sold_out {
            anyhow::bail!("sold out");
        }
        Ok(())
    }
}

impl TicketPaymentService for BoxOffice {
    fn make_payment(&self, account_id: AccountId, amount: Money) -> anyhow::Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::Pay(account_id.get(), amount.amount()));
        Ok(())
    }
}

type SharedService =
    TicketServiceImpl<Arc<dyn TicketPaymentService>, Arc<dyn SeatReservationService>>;

fn wire(office: Arc<BoxOffice>) -> SharedService {
    TicketServiceImpl::new(
        office.clone() as Arc<dyn TicketPaymentService>,
        office as Arc<dyn SeatReservationService>,
    )
}

#[test]
fn purchase_decoded_from_json_reserves_then_pays() {
    cinema_observability::init_test();

    let office = Arc::new(BoxOffice::default());
    let service = wire(office.clone());

    let requests: Vec<TicketRequest> = serde_json::from_str(
        r#"[
            { "category": "ADULT", "count": 2 },
            { "category": "CHILD", "count": 1 }
        ]"#,
    )
    .unwrap();

    service.purchase_tickets(1, &requests).unwrap();

    assert_eq!(office.calls(), vec![Call::Reserve(1, 3), Call::Pay(1, 65)]);
}

#[test]
fn rejected_purchases_leave_box_office_untouched() {
    cinema_observability::init_test();

    let office = Arc::new(BoxOffice::default());
    let service: &dyn TicketService = &wire(office.clone());

    let cases: Vec<(i64, Vec<TicketRequest>, &str)> = vec![
        (1, vec![TicketRequest::children(1)], "missing_adult"),
        (1, vec![TicketRequest::adults(26)], "exceeds_max_tickets"),
        (0, vec![TicketRequest::adults(26)], "invalid_account"),
        (-1, vec![TicketRequest::adults(1)], "invalid_account"),
        (1, vec![], "empty_purchase"),
    ];

    for (account_id, requests, code) in cases {
        let err = service.purchase_tickets(account_id, &requests).unwrap_err();
        assert_eq!(err.code(), code, "account {account_id}, requests {requests:?}");
        assert!(err.as_invalid().is_some());
    }

    assert!(office.calls().is_empty());
}

#[test]
fn sold_out_reservation_stops_before_payment() {
    let office = Arc::new(BoxOffice {
        sold_out: true,
        ..BoxOffice::default()
    });
    let service = wire(office.clone());

    let err = service
        .purchase_tickets(5, &[TicketRequest::adults(1), TicketRequest::infants(1)])
        .unwrap_err();

    assert!(matches!(
        err,
        PurchaseError::FulfillmentFailed {
            stage: FulfillmentStage::SeatReservation,
            ..
        }
    ));
    assert_eq!(office.calls(), vec![Call::Reserve(5, 1)]);
}

#[test]
fn unvalidated_json_policy_is_refused_by_the_service() {
    let policy: TicketPolicy =
        serde_json::from_str(r#"{ "adult_price": 9223372036854775807 }"#).unwrap();

    let office = Arc::new(BoxOffice::default());
    assert!(wire(office.clone()).with_policy(policy).is_err());
    assert!(office.calls().is_empty());
}

#[test]
fn policy_loaded_from_environment_lookup_is_enforced() {
    let policy = TicketPolicy::from_lookup(|key| match key {
        "CINEMA_MAX_TICKETS" => Some("3".to_string()),
        "CINEMA_CHILD_PRICE" => Some("10".to_string()),
        _ => None,
    })
    .unwrap();

    let office = Arc::new(BoxOffice::default());
    let service = wire(office.clone()).with_policy(policy).unwrap();

    let order = PurchaseOrder::new(8, [TicketRequest::adults(1), TicketRequest::children(2)])
        .unwrap();
    let summary = service.purchase(&order).unwrap();
    assert_eq!(summary.total_cost, Money::new(45));

    let err = service
        .purchase_tickets(8, &[TicketRequest::adults(4)])
        .unwrap_err();
    assert_eq!(
        err.as_invalid(),
        Some(&InvalidPurchaseRequest::ExceedsMaxTickets {
            requested: 4,
            max: 3
        })
    );

    assert_eq!(office.calls(), vec![Call::Reserve(8, 3), Call::Pay(8, 45)]);
}
