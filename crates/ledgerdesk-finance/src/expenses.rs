use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use ledgerdesk_core::filter::{parse_amount, parse_date};
use ledgerdesk_core::{
    DataProvider, DeskError, ExpenseItem, ExpenseReceipt, ReceiptHistoryEntry, ReceiptStatus,
    Record, Result,
};
use ledgerdesk_platform::NotificationBus;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::{CurrencyTotals, add_to};

pub const SAVED_TOPIC: &str = "expenses.saved";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpensesSummary {
    /// Everything that was not cancelled.
    pub spent: CurrencyTotals,
    pub pending: CurrencyTotals,
    /// Receipt count per category.
    pub by_category: BTreeMap<String, usize>,
    pub cancelled_count: usize,
}

impl ExpensesSummary {
    pub fn from_records(records: &[ExpenseReceipt]) -> Self {
        let mut summary = Self::default();
        for receipt in records {
            if receipt.status == ReceiptStatus::Cancelled {
                summary.cancelled_count += 1;
                continue;
            }
            add_to(&mut summary.spent, &receipt.currency, receipt.amount);
            if receipt.status == ReceiptStatus::Pending {
                add_to(&mut summary.pending, &receipt.currency, receipt.amount);
            }
            *summary
                .by_category
                .entry(receipt.category.clone())
                .or_default() += 1;
        }
        summary
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseItemDraft {
    pub description: String,
    pub quantity: String,
    pub unit_price: String,
}

impl ExpenseItemDraft {
    fn to_item(&self) -> Option<ExpenseItem> {
        let description = self.description.trim();
        if description.is_empty() {
            return None;
        }
        Some(ExpenseItem {
            description: description.to_string(),
            quantity: parse_amount(&self.quantity).unwrap_or(Decimal::ONE),
            unit_price: parse_amount(&self.unit_price).unwrap_or(Decimal::ZERO),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseForm {
    pub receipt_number: String,
    pub date: String,
    pub category: String,
    pub description: String,
    pub amount: String,
    pub currency: String,
    pub items: Vec<ExpenseItemDraft>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseFormAction {
    SetReceiptNumber(String),
    SetDate(String),
    SetCategory(String),
    SetDescription(String),
    SetAmount(String),
    SetCurrency(String),
    AddItem,
    UpdateItem(usize, ExpenseItemDraft),
    RemoveItem(usize),
    Reset,
}

impl ExpenseForm {
    pub fn reduce(mut self, action: ExpenseFormAction) -> Self {
        match action {
            ExpenseFormAction::SetReceiptNumber(value) => self.receipt_number = value,
            ExpenseFormAction::SetDate(value) => self.date = value,
            ExpenseFormAction::SetCategory(value) => self.category = value,
            ExpenseFormAction::SetDescription(value) => self.description = value,
            ExpenseFormAction::SetAmount(value) => self.amount = value,
            ExpenseFormAction::SetCurrency(value) => self.currency = value,
            ExpenseFormAction::AddItem => self.items.push(ExpenseItemDraft::default()),
            ExpenseFormAction::UpdateItem(index, draft) => {
                if let Some(slot) = self.items.get_mut(index) {
                    *slot = draft;
                }
            }
            ExpenseFormAction::RemoveItem(index) => {
                if index < self.items.len() {
                    self.items.remove(index);
                }
            }
            ExpenseFormAction::Reset => return Self::default(),
        }
        self
    }

    /// Builds a pending receipt. With line items the amount is their total;
    /// without, the typed amount is used (zero when it does not parse).
    pub fn submit(
        &self,
        submitted_at: DateTime<Utc>,
        base_currency: &str,
        actor: &str,
    ) -> Result<ExpenseReceipt> {
        let mut missing = Vec::new();
        if self.receipt_number.trim().is_empty() {
            missing.push("receiptNumber");
        }
        if self.category.trim().is_empty() {
            missing.push("category");
        }
        if !missing.is_empty() {
            return Err(DeskError::Validation(missing));
        }

        let items: Vec<ExpenseItem> = self
            .items
            .iter()
            .filter_map(ExpenseItemDraft::to_item)
            .collect();
        let amount = if items.is_empty() {
            parse_amount(&self.amount).unwrap_or(Decimal::ZERO)
        } else {
            items.iter().map(ExpenseItem::line_total).sum()
        };
        let currency = match self.currency.trim() {
            "" => base_currency.to_ascii_uppercase(),
            code => code.to_ascii_uppercase(),
        };

        Ok(ExpenseReceipt {
            id: Uuid::new_v4(),
            receipt_number: self.receipt_number.trim().to_string(),
            date: parse_date(&self.date).unwrap_or(submitted_at.date_naive()),
            category: self.category.trim().to_string(),
            description: self.description.trim().to_string(),
            amount,
            currency,
            status: ReceiptStatus::Pending,
            items,
            history: vec![ReceiptHistoryEntry {
                at: submitted_at,
                action: "created".to_string(),
                actor: actor.to_string(),
                note: None,
            }],
            documents: Vec::new(),
        })
    }
}

/// Moves a receipt to a new status and records who did it.
pub async fn change_status(
    provider: &dyn DataProvider<ExpenseReceipt>,
    bus: &NotificationBus,
    id: Uuid,
    status: ReceiptStatus,
    actor: &str,
    note: Option<String>,
) -> Result<ExpenseReceipt> {
    match record_status(provider, id, status, actor, note).await {
        Ok(saved) => {
            info!(
                receipt = %saved.receipt_number,
                action = status_action(status),
                "receipt status changed"
            );
            bus.success(
                SAVED_TOPIC,
                format!("Receipt {} marked {}", saved.receipt_number, status_action(status)),
            );
            Ok(saved)
        }
        Err(err) => {
            bus.failure(SAVED_TOPIC, err.to_string());
            Err(err)
        }
    }
}

async fn record_status(
    provider: &dyn DataProvider<ExpenseReceipt>,
    id: Uuid,
    status: ReceiptStatus,
    actor: &str,
    note: Option<String>,
) -> Result<ExpenseReceipt> {
    let mut receipt = provider.get(id).await?.ok_or(DeskError::NotFound {
        kind: ExpenseReceipt::KIND,
        id,
    })?;

    receipt.status = status;
    receipt.history.push(ReceiptHistoryEntry {
        at: Utc::now(),
        action: status_action(status).to_string(),
        actor: actor.to_string(),
        note,
    });

    provider.save(receipt).await
}

fn status_action(status: ReceiptStatus) -> &'static str {
    match status {
        ReceiptStatus::Paid => "paid",
        ReceiptStatus::Pending => "pending",
        ReceiptStatus::Cancelled => "cancelled",
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone};

    use super::*;

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 4, 12, 0, 0).unwrap()
    }

    #[test]
    fn items_drive_the_amount() {
        let form = ExpenseForm::default()
            .reduce(ExpenseFormAction::SetReceiptNumber("MF-2024-010".to_string()))
            .reduce(ExpenseFormAction::SetCategory("Office Supplies".to_string()))
            .reduce(ExpenseFormAction::SetAmount("999".to_string()))
            .reduce(ExpenseFormAction::AddItem)
            .reduce(ExpenseFormAction::AddItem)
            .reduce(ExpenseFormAction::AddItem)
            .reduce(ExpenseFormAction::UpdateItem(
                0,
                ExpenseItemDraft {
                    description: "Stapler".to_string(),
                    quantity: "2".to_string(),
                    unit_price: "45,50".to_string(),
                },
            ))
            .reduce(ExpenseFormAction::UpdateItem(
                1,
                ExpenseItemDraft {
                    description: "Folder".to_string(),
                    quantity: String::new(),
                    unit_price: "10".to_string(),
                },
            ));

        let receipt = form.submit(noon(), "TRY", "Elif Arslan").unwrap();

        assert_eq!(receipt.items.len(), 2);
        assert_eq!(receipt.amount, Decimal::new(10100, 2));
        assert_eq!(receipt.amount, receipt.items_total());
        assert_eq!(receipt.status, ReceiptStatus::Pending);
        assert_eq!(receipt.date, NaiveDate::from_ymd_opt(2024, 3, 4).unwrap());
        assert_eq!(receipt.history.len(), 1);
        assert_eq!(receipt.history[0].actor, "Elif Arslan");
    }

    #[test]
    fn typed_amount_used_without_items() {
        let form = ExpenseForm {
            receipt_number: "MF-2024-011".to_string(),
            category: "Travel".to_string(),
            amount: "n/a".to_string(),
            currency: "usd".to_string(),
            ..ExpenseForm::default()
        };
        let receipt = form.submit(noon(), "TRY", "Can Öztürk").unwrap();
        assert_eq!(receipt.amount, Decimal::ZERO);
        assert_eq!(receipt.currency, "USD");
    }

    #[test]
    fn out_of_range_item_actions_are_ignored() {
        let form = ExpenseForm::default()
            .reduce(ExpenseFormAction::AddItem)
            .reduce(ExpenseFormAction::RemoveItem(5))
            .reduce(ExpenseFormAction::UpdateItem(3, ExpenseItemDraft::default()));
        assert_eq!(form.items.len(), 1);

        let form = form.reduce(ExpenseFormAction::RemoveItem(0));
        assert!(form.items.is_empty());
    }

    #[test]
    fn missing_fields_reject_submit() {
        let err = ExpenseForm::default()
            .submit(noon(), "TRY", "Elif Arslan")
            .unwrap_err();
        assert_eq!(err, DeskError::Validation(vec!["receiptNumber", "category"]));
    }
}
