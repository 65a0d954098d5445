use chrono::NaiveDate;
use ledgerdesk_core::filter::{parse_amount, parse_date};
use ledgerdesk_core::{CustomerReceivable, DataProvider, DeskError, ReceivableStatus, Result};
use ledgerdesk_platform::NotificationBus;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::{CurrencyTotals, add_to};

pub const SAVED_TOPIC: &str = "receivables.saved";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceivablesSummary {
    pub outstanding: CurrencyTotals,
    pub collected: CurrencyTotals,
    pub overdue_count: usize,
    pub not_due_count: usize,
    pub paid_count: usize,
}

impl ReceivablesSummary {
    pub fn from_records(records: &[CustomerReceivable]) -> Self {
        let mut summary = Self::default();
        for record in records {
            match record.status {
                ReceivableStatus::Paid => {
                    summary.paid_count += 1;
                    add_to(&mut summary.collected, &record.currency, record.amount);
                }
                ReceivableStatus::NotDue => {
                    summary.not_due_count += 1;
                    add_to(&mut summary.outstanding, &record.currency, record.amount);
                }
                ReceivableStatus::Overdue => {
                    summary.overdue_count += 1;
                    add_to(&mut summary.outstanding, &record.currency, record.amount);
                }
            }
        }
        summary
    }
}

/// The "new receivable" dialog, held as plain input strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceivableForm {
    pub invoice_number: String,
    pub customer_name: String,
    pub invoice_date: String,
    pub due_date: String,
    pub amount: String,
    pub currency: String,
    pub paid: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReceivableFormAction {
    SetInvoiceNumber(String),
    SetCustomerName(String),
    SetInvoiceDate(String),
    SetDueDate(String),
    SetAmount(String),
    SetCurrency(String),
    SetPaid(bool),
    Reset,
}

impl ReceivableForm {
    pub fn reduce(self, action: ReceivableFormAction) -> Self {
        match action {
            ReceivableFormAction::SetInvoiceNumber(value) => Self {
                invoice_number: value,
                ..self
            },
            ReceivableFormAction::SetCustomerName(value) => Self {
                customer_name: value,
                ..self
            },
            ReceivableFormAction::SetInvoiceDate(value) => Self {
                invoice_date: value,
                ..self
            },
            ReceivableFormAction::SetDueDate(value) => Self {
                due_date: value,
                ..self
            },
            ReceivableFormAction::SetAmount(value) => Self {
                amount: value,
                ..self
            },
            ReceivableFormAction::SetCurrency(value) => Self {
                currency: value,
                ..self
            },
            ReceivableFormAction::SetPaid(paid) => Self { paid, ..self },
            ReceivableFormAction::Reset => Self::default(),
        }
    }

    /// Turns the form into a record. Amounts that do not parse become zero and
    /// missing dates fall back to `today` (due date to the invoice date).
    pub fn submit(&self, today: NaiveDate, base_currency: &str) -> Result<CustomerReceivable> {
        let mut missing = Vec::new();
        if self.invoice_number.trim().is_empty() {
            missing.push("invoiceNumber");
        }
        if self.customer_name.trim().is_empty() {
            missing.push("customerName");
        }
        if !missing.is_empty() {
            return Err(DeskError::Validation(missing));
        }

        let invoice_date = parse_date(&self.invoice_date).unwrap_or(today);
        let due_date = parse_date(&self.due_date).unwrap_or(invoice_date);
        let amount = parse_amount(&self.amount).unwrap_or(Decimal::ZERO);
        let currency = match self.currency.trim() {
            "" => base_currency.to_ascii_uppercase(),
            code => code.to_ascii_uppercase(),
        };

        let status = if self.paid {
            ReceivableStatus::Paid
        } else if due_date < today {
            ReceivableStatus::Overdue
        } else {
            ReceivableStatus::NotDue
        };

        Ok(CustomerReceivable {
            id: Uuid::new_v4(),
            invoice_number: self.invoice_number.trim().to_string(),
            customer_name: self.customer_name.trim().to_string(),
            invoice_date,
            due_date,
            amount,
            currency,
            status,
        })
    }
}

/// Submits the form into the provider and tells listeners about the outcome.
pub async fn save_receivable(
    provider: &dyn DataProvider<CustomerReceivable>,
    bus: &NotificationBus,
    form: &ReceivableForm,
    today: NaiveDate,
    base_currency: &str,
) -> Result<CustomerReceivable> {
    let record = match form.submit(today, base_currency) {
        Ok(record) => record,
        Err(err) => {
            bus.failure(SAVED_TOPIC, err.to_string());
            return Err(err);
        }
    };

    let saved = provider.save(record).await?;
    info!(invoice = %saved.invoice_number, "receivable saved");
    bus.success(
        SAVED_TOPIC,
        format!("Receivable {} saved", saved.invoice_number),
    );
    Ok(saved)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(month: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, month, d).unwrap()
    }

    fn filled() -> ReceivableForm {
        [
            ReceivableFormAction::SetInvoiceNumber(" FAT-2024-010 ".to_string()),
            ReceivableFormAction::SetCustomerName("Selin Koç".to_string()),
            ReceivableFormAction::SetInvoiceDate("2024-02-01".to_string()),
            ReceivableFormAction::SetDueDate("2024-03-01".to_string()),
            ReceivableFormAction::SetAmount("1250,75".to_string()),
        ]
        .into_iter()
        .fold(ReceivableForm::default(), ReceivableForm::reduce)
    }

    #[test]
    fn reducer_updates_one_field_at_a_time() {
        let form = ReceivableForm::default()
            .reduce(ReceivableFormAction::SetCustomerName("Selin".to_string()));
        assert_eq!(form.customer_name, "Selin");
        assert_eq!(form.invoice_number, "");

        let form = form.reduce(ReceivableFormAction::Reset);
        assert_eq!(form, ReceivableForm::default());
    }

    #[test]
    fn submit_builds_not_due_record() {
        let record = filled().submit(day(2, 15), "try").unwrap();

        assert_eq!(record.invoice_number, "FAT-2024-010");
        assert_eq!(record.amount, Decimal::new(125075, 2));
        assert_eq!(record.currency, "TRY");
        assert_eq!(record.status, ReceivableStatus::NotDue);
    }

    #[test]
    fn past_due_date_makes_it_overdue_unless_paid() {
        let form = filled();
        assert_eq!(
            form.submit(day(3, 2), "TRY").unwrap().status,
            ReceivableStatus::Overdue
        );
        assert_eq!(
            form.reduce(ReceivableFormAction::SetPaid(true))
                .submit(day(3, 2), "TRY")
                .unwrap()
                .status,
            ReceivableStatus::Paid
        );
    }

    #[test]
    fn garbage_amount_and_dates_are_coerced() {
        let form = filled()
            .reduce(ReceivableFormAction::SetAmount("lots".to_string()))
            .reduce(ReceivableFormAction::SetInvoiceDate("yesterday".to_string()))
            .reduce(ReceivableFormAction::SetDueDate(String::new()));

        let record = form.submit(day(2, 20), "TRY").unwrap();
        assert_eq!(record.amount, Decimal::ZERO);
        assert_eq!(record.invoice_date, day(2, 20));
        assert_eq!(record.due_date, day(2, 20));
        assert_eq!(record.status, ReceivableStatus::NotDue);
    }

    #[test]
    fn blank_required_fields_are_reported() {
        let err = ReceivableForm::default()
            .submit(day(1, 1), "TRY")
            .unwrap_err();
        assert_eq!(
            err,
            DeskError::Validation(vec!["invoiceNumber", "customerName"])
        );
    }
}
