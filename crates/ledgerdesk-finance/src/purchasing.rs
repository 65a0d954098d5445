//! Payables (purchase invoices) and incoming customer payments. Neither record
//! carries a currency; both are booked in the desk's base currency.

use ledgerdesk_core::{IncomingPayment, InvoiceStatus, PaymentStatus, PurchaseInvoice};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseInvoicesSummary {
    pub net_total: Decimal,
    pub vat_total: Decimal,
    pub gross_total: Decimal,
    /// Gross amount not yet paid, overdue included.
    pub payable: Decimal,
    pub overdue_count: usize,
}

impl PurchaseInvoicesSummary {
    pub fn from_records(records: &[PurchaseInvoice]) -> Self {
        let mut summary = Self::default();
        for invoice in records {
            summary.net_total += invoice.amount;
            summary.vat_total += invoice.vat;
            summary.gross_total += invoice.total();
            match invoice.status {
                InvoiceStatus::Paid => {}
                InvoiceStatus::Pending => summary.payable += invoice.total(),
                InvoiceStatus::Overdue => {
                    summary.payable += invoice.total();
                    summary.overdue_count += 1;
                }
            }
        }
        summary
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomingPaymentsSummary {
    pub completed: Decimal,
    pub pending: Decimal,
    pub cancelled_count: usize,
}

impl IncomingPaymentsSummary {
    pub fn from_records(records: &[IncomingPayment]) -> Self {
        let mut summary = Self::default();
        for payment in records {
            match payment.status {
                PaymentStatus::Completed => summary.completed += payment.amount,
                PaymentStatus::Pending => summary.pending += payment.amount,
                PaymentStatus::Cancelled => summary.cancelled_count += 1,
            }
        }
        summary
    }
}
