pub mod expenses;
pub mod payroll;
pub mod purchasing;
pub mod receivables;
pub mod safes;

use std::collections::BTreeMap;

use ledgerdesk_core::{FilterState, Filterable, Page, derive, paginate};
use rust_decimal::Decimal;

pub use expenses::{ExpenseForm, ExpenseFormAction, ExpenseItemDraft, ExpensesSummary};
pub use payroll::SalarySummary;
pub use purchasing::{IncomingPaymentsSummary, PurchaseInvoicesSummary};
pub use receivables::{ReceivableForm, ReceivableFormAction, ReceivablesSummary};
pub use safes::{JournalLine, SafeListFilter, TransferDesk, TransferReceipt, TransferRequest};

/// Totals keyed by currency code, iterated in code order.
pub type CurrencyTotals = BTreeMap<String, Decimal>;

pub(crate) fn add_to(totals: &mut CurrencyTotals, currency: &str, amount: Decimal) {
    *totals.entry(currency.to_ascii_uppercase()).or_default() += amount;
}

/// Derives the filtered rows and cuts out the requested page of the table.
pub fn table_view<R>(
    records: &[R],
    filters: &FilterState<R::Status>,
    page: usize,
    per_page: usize,
) -> Page<R>
where
    R: Filterable + Clone,
{
    paginate(&derive(records, filters), page, per_page)
}
