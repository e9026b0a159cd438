//! End-to-end contract flow: cancellation credit → new contract entrada →
//! schedule → receipts → balance summary.

use chrono::NaiveDate;
use payment_engine::credit::{CreditStore, MemoryCreditLedger, issue_credit_on_cancellation};
use payment_engine::reconcile::build_balance_summary;
use payment_engine::schedule::allocate_down_payment;
use shared::models::{
    ClientPaymentConfig, CreditStatus, DiscountKind, DownPayment, InstallmentStatus,
    PaymentMethod, ReceiptRecord, ReceiptRole,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn receipt(amount: f64, parcela_id: Option<u32>, role: Option<ReceiptRole>) -> ReceiptRecord {
    ReceiptRecord {
        amount,
        payment_date: date(2026, 3, 10),
        parcela_id,
        client_id: Some("client-1".to_string()),
        role,
        cancelled: false,
    }
}

#[test]
fn cash_contract_reconciles_over_its_lifetime() {
    let config = ClientPaymentConfig {
        travel_price: 2500.0,
        discount_type: DiscountKind::Tier5Pct,
        down_payment_amount: 500.0,
        down_payment_method: PaymentMethod::Cash,
        installments_count: 4,
        first_due_date: Some(date(2026, 4, 1)),
        ..Default::default()
    };

    // Contract just signed, nothing received yet
    let summary = build_balance_summary(&config, &[], date(2026, 3, 1)).unwrap();
    assert_eq!(summary.total_travel_amount, 2375.0);
    assert_eq!(summary.installment_amount, 468.75);
    assert!(!summary.entrada_paid);

    // Entrada captured, first two parcelas paid, third now overdue
    let receipts = vec![
        receipt(500.0, None, Some(ReceiptRole::DownPayment)),
        receipt(468.75, Some(1), Some(ReceiptRole::Installment)),
        receipt(468.75, Some(2), Some(ReceiptRole::Installment)),
    ];

    let summary = build_balance_summary(&config, &receipts, date(2026, 6, 15)).unwrap();
    assert!(summary.entrada_paid);
    assert_eq!(summary.total_paid, 1437.50);
    assert_eq!(summary.outstanding_balance, 937.50);
    assert_eq!(summary.remaining_installments, 2);

    let statuses: Vec<InstallmentStatus> =
        summary.parcelas.iter().map(|p| p.status).collect();
    assert_eq!(
        statuses,
        vec![
            InstallmentStatus::Paid,
            InstallmentStatus::Paid,
            InstallmentStatus::Overdue,
            InstallmentStatus::Pending,
        ]
    );
}

#[test]
fn cancellation_credit_funds_a_later_contract() {
    let ledger = MemoryCreditLedger::new();

    // Trip cancelled 10 days before departure: 20% penalty on R$1000 paid
    let credit = issue_credit_on_cancellation(
        1000.0,
        10,
        "Ana",
        Some("Salvador".to_string()),
        date(2026, 1, 5),
    );
    assert_eq!(credit.amount, 800.0);
    let credit_id = credit.id.clone();
    ledger.insert(credit);

    // The credit funds the entrada of a new contract
    let config = ClientPaymentConfig {
        travel_price: 2000.0,
        down_payment_amount: 800.0,
        down_payment_method: PaymentMethod::PriorTripCredit,
        used_credit_id: Some(credit_id.clone()),
        installments_count: 3,
        ..Default::default()
    };
    let entrada: DownPayment = config.to_down_payment();

    let allocation = allocate_down_payment(&entrada, &ledger, date(2026, 2, 1)).unwrap();
    assert!(allocation.excluded_from_owed);
    assert_eq!(
        ledger.get(&credit_id, date(2026, 2, 1)).unwrap().status,
        CreditStatus::Redeemed
    );

    // A second booking racing for the same credit is refused
    let second = allocate_down_payment(&entrada, &ledger, date(2026, 2, 1));
    assert!(second.is_err());

    // The summary for the new contract never counts the credit as cash
    let summary = build_balance_summary(&config, &[], date(2026, 2, 15)).unwrap();
    assert_eq!(summary.total_paid, 0.0);
    assert!(summary.entrada_paid);
    assert_eq!(summary.outstanding_balance, 1200.0);
    assert_eq!(summary.parcelas.len(), 3);
    assert_eq!(summary.parcelas[0].amount, 400.0);
}

#[test]
fn summary_serializes_to_the_downstream_shape() {
    let config = ClientPaymentConfig {
        travel_price: 1000.0,
        down_payment_amount: 100.0,
        installments_count: 3,
        ..Default::default()
    };

    let summary = build_balance_summary(&config, &[], date(2026, 3, 1)).unwrap();
    let json = serde_json::to_value(&summary).unwrap();

    for key in [
        "totalTravelAmount",
        "totalPaid",
        "outstandingBalance",
        "downPaymentAmount",
        "entradaPaid",
        "remainingInstallments",
        "installmentAmount",
        "parcelas",
    ] {
        assert!(json.get(key).is_some(), "missing key {}", key);
    }

    let parcelas = json.get("parcelas").unwrap().as_array().unwrap();
    assert_eq!(parcelas.len(), 3);
    assert_eq!(parcelas[0].get("index").unwrap().as_u64(), Some(1));
}
