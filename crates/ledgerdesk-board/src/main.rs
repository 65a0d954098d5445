use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use ledgerdesk_core::{
    CustomerReceivable, FilterState, NotificationLevel, Page, ReceivableStatus, Record,
};
use ledgerdesk_finance::{
    CurrencyTotals, ExpensesSummary, IncomingPaymentsSummary, PurchaseInvoicesSummary,
    ReceivablesSummary, SalarySummary, safes, table_view,
};
use ledgerdesk_platform::{DeskConfig, NotificationBus};
use ledgerdesk_store::{InMemoryProvider, LoadState, Loader, seed};
use serde::Serialize;
use tracing::{info, warn};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DeskPack {
    generated_at: DateTime<Utc>,
    base_currency: String,
    receivables: ReceivablesSummary,
    open_receivables: Page<CustomerReceivable>,
    salaries: SalarySummary,
    expenses: ExpensesSummary,
    purchase_invoices: PurchaseInvoicesSummary,
    incoming_payments: IncomingPaymentsSummary,
    safe_balances: CurrencyTotals,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "ledgerdesk_board=info".to_string()),
        )
        .init();

    let config = DeskConfig::from_env()?;
    let bus = NotificationBus::default();
    info!(
        latency = ?config.mock_latency,
        page_size = config.page_size,
        "ledgerdesk board starting"
    );

    let (receivables, salaries, expenses, invoices, payments, safe_list) = tokio::try_join!(
        load(seed::customer_receivables(), &config),
        load(seed::employee_salaries(), &config),
        load(seed::expense_receipts(), &config),
        load(seed::purchase_invoices(), &config),
        load(seed::incoming_payments(), &config),
        load(seed::safes(), &config),
    )?;

    let open =
        FilterState::new().with_statuses([ReceivableStatus::NotDue, ReceivableStatus::Overdue]);

    let pack = DeskPack {
        generated_at: Utc::now(),
        base_currency: config.base_currency.clone(),
        receivables: ReceivablesSummary::from_records(&receivables),
        open_receivables: table_view(&receivables, &open, 1, config.page_size),
        salaries: SalarySummary::from_records(&salaries),
        expenses: ExpensesSummary::from_records(&expenses),
        purchase_invoices: PurchaseInvoicesSummary::from_records(&invoices),
        incoming_payments: IncomingPaymentsSummary::from_records(&payments),
        safe_balances: safes::balances(&safe_list),
    };

    if pack.receivables.overdue_count > 0 {
        bus.publish_json(
            "receivables.overdue",
            NotificationLevel::Warning,
            format!("{} receivable(s) overdue", pack.receivables.overdue_count),
            &pack.receivables,
        )?;
    }

    let rendered = serde_json::to_string_pretty(&pack).context("failed to render desk pack")?;
    println!("{rendered}");

    Ok(())
}

async fn load<T: Record>(records: Vec<T>, config: &DeskConfig) -> Result<Vec<T>> {
    let loader = Loader::new(Arc::new(InMemoryProvider::seeded(records)), config.mock_latency);
    let LoadState { data, error, .. } = loader.load().await;

    if let Some(error) = error {
        warn!(kind = T::KIND, "load failed: {error}");
        anyhow::bail!("failed to load {}: {error}", T::KIND);
    }
    Ok(data)
}
