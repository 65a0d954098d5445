use ledgerdesk_core::{DataProvider, FilterState, ReceivableStatus, derive};
use ledgerdesk_store::{InMemoryProvider, seed};

fn invoice_numbers(records: &[ledgerdesk_core::CustomerReceivable]) -> Vec<&str> {
    records
        .iter()
        .map(|record| record.invoice_number.as_str())
        .collect()
}

#[test]
fn overdue_status_selects_ayse_kaya() {
    let records = seed::customer_receivables();
    let filters = FilterState::new().with_statuses([ReceivableStatus::Overdue]);

    let out = derive(&records, &filters);
    assert_eq!(invoice_numbers(&out), vec!["FAT-2024-002"]);
    assert_eq!(out[0].customer_name, "Ayşe Kaya");
}

#[test]
fn search_ahmet_selects_first_invoice() {
    let records = seed::customer_receivables();
    let filters = FilterState::new().with_search("ahmet");

    assert_eq!(
        invoice_numbers(&derive(&records, &filters)),
        vec!["FAT-2024-001"]
    );
}

#[test]
fn empty_status_set_returns_all_four_in_order() {
    let records = seed::customer_receivables();
    let filters = FilterState::new().with_statuses(Vec::<ReceivableStatus>::new());

    let out = derive(&records, &filters);
    assert_eq!(out, records);
    assert_eq!(
        invoice_numbers(&out),
        vec!["FAT-2024-001", "FAT-2024-002", "FAT-2024-003", "FAT-2024-004"]
    );
}

#[tokio::test]
async fn provider_keeps_insertion_order_across_save_and_delete() {
    let provider = InMemoryProvider::seeded(seed::customer_receivables());
    let mut extra = seed::customer_receivables()[0].clone();
    extra.id = uuid::Uuid::from_u128(0xa5);
    extra.invoice_number = "FAT-2024-005".to_string();

    provider.save(extra.clone()).await.unwrap();
    assert_eq!(provider.len().await, 5);

    let mut edited = seed::customer_receivables()[1].clone();
    edited.status = ReceivableStatus::Paid;
    provider.save(edited.clone()).await.unwrap();

    let listed = provider.list().await.unwrap();
    assert_eq!(
        invoice_numbers(&listed),
        vec![
            "FAT-2024-001",
            "FAT-2024-002",
            "FAT-2024-003",
            "FAT-2024-004",
            "FAT-2024-005"
        ]
    );
    assert_eq!(listed[1].status, ReceivableStatus::Paid);
    assert_eq!(provider.get(edited.id).await.unwrap(), Some(edited));

    assert!(provider.delete(extra.id).await.unwrap());
    assert!(!provider.delete(extra.id).await.unwrap());
    assert_eq!(provider.get(extra.id).await.unwrap(), None);
    assert_eq!(provider.len().await, 4);
}

#[tokio::test]
async fn batch_save_updates_and_appends_in_one_write() {
    let provider = InMemoryProvider::seeded(seed::customer_receivables());

    let mut paid = seed::customer_receivables()[2].clone();
    paid.status = ReceivableStatus::Paid;
    let mut extra = seed::customer_receivables()[3].clone();
    extra.id = uuid::Uuid::from_u128(0xb6);
    extra.invoice_number = "FAT-2024-006".to_string();

    let saved = provider
        .save_all(vec![paid.clone(), extra.clone()])
        .await
        .unwrap();
    assert_eq!(saved, vec![paid.clone(), extra]);

    let listed = provider.list().await.unwrap();
    assert_eq!(listed.len(), 5);
    assert_eq!(listed[2], paid);
    assert_eq!(listed[4].invoice_number, "FAT-2024-006");
}
