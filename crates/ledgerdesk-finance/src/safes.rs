use std::sync::Arc;

use chrono::{DateTime, Utc};
use ledgerdesk_core::{
    DataProvider, DeskError, FilterState, NotificationLevel, Record, Result, Safe, SafeType,
    derive,
};
use ledgerdesk_platform::NotificationBus;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{info, warn};
use uuid::Uuid;

use crate::{CurrencyTotals, add_to};

pub const TRANSFER_TOPIC: &str = "safes.transfer";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafeListFilter {
    pub filters: FilterState<SafeType>,
    pub active_only: bool,
}

impl SafeListFilter {
    pub fn apply(&self, safes: &[Safe]) -> Vec<Safe> {
        let mut rows = derive(safes, &self.filters);
        if self.active_only {
            rows.retain(|safe| safe.is_active);
        }
        rows
    }
}

/// Balance per currency over active safes.
pub fn balances(safes: &[Safe]) -> CurrencyTotals {
    let mut totals = CurrencyTotals::new();
    for safe in safes.iter().filter(|safe| safe.is_active) {
        add_to(&mut totals, &safe.currency, safe.balance);
    }
    totals
}

/// Safes a transfer out of `source_id` may go to: active, not the source, and
/// in the source's currency. Empty when the source is unknown.
pub fn transfer_targets(safes: &[Safe], source_id: Uuid) -> Vec<Safe> {
    let Some(source) = safes.iter().find(|safe| safe.id == source_id) else {
        return Vec::new();
    };
    safes
        .iter()
        .filter(|safe| {
            safe.id != source.id
                && safe.is_active
                && safe.currency.eq_ignore_ascii_case(&source.currency)
        })
        .cloned()
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    pub from: Uuid,
    pub to: Uuid,
    pub amount: Decimal,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalLine {
    pub account: String,
    pub debit: Decimal,
    pub credit: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferReceipt {
    pub id: Uuid,
    pub from: Uuid,
    pub to: Uuid,
    pub amount: Decimal,
    pub currency: String,
    pub source_balance: Decimal,
    pub target_balance: Decimal,
    pub memo: String,
    pub lines: Vec<JournalLine>,
    pub executed_at: DateTime<Utc>,
}

/// Moves `amount` between two safes in place. Nothing changes unless every
/// check passes.
pub fn transfer(safes: &mut [Safe], request: &TransferRequest) -> Result<TransferReceipt> {
    if request.amount <= Decimal::ZERO {
        return Err(DeskError::InvalidAmount(request.amount));
    }
    if request.from == request.to {
        return Err(DeskError::SameAccount(request.from));
    }

    let source_idx = position(safes, request.from)?;
    let target_idx = position(safes, request.to)?;
    let (source, target) = (&safes[source_idx], &safes[target_idx]);

    if !source.is_active {
        return Err(DeskError::InactiveAccount(source.id));
    }
    if !target.is_active {
        return Err(DeskError::InactiveAccount(target.id));
    }
    if !source.currency.eq_ignore_ascii_case(&target.currency) {
        return Err(DeskError::CurrencyMismatch {
            source_currency: source.currency.clone(),
            target_currency: target.currency.clone(),
        });
    }
    if source.balance < request.amount {
        return Err(DeskError::InsufficientBalance {
            requested: request.amount,
            available: source.balance,
        });
    }

    let memo = request
        .description
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("Transfer {} -> {}", source.name, target.name));
    let lines = vec![
        JournalLine {
            account: target.name.clone(),
            debit: request.amount,
            credit: Decimal::ZERO,
        },
        JournalLine {
            account: source.name.clone(),
            debit: Decimal::ZERO,
            credit: request.amount,
        },
    ];
    let currency = source.currency.clone();

    safes[source_idx].balance -= request.amount;
    safes[target_idx].balance += request.amount;

    Ok(TransferReceipt {
        id: Uuid::new_v4(),
        from: request.from,
        to: request.to,
        amount: request.amount,
        currency,
        source_balance: safes[source_idx].balance,
        target_balance: safes[target_idx].balance,
        memo,
        lines,
        executed_at: Utc::now(),
    })
}

/// Runs transfers against one safe record source and announces each outcome.
/// Transfers through the same desk run one at a time, so the balance check and
/// the write of both safes cannot interleave with another transfer.
pub struct TransferDesk {
    provider: Arc<dyn DataProvider<Safe>>,
    bus: NotificationBus,
    lock: Mutex<()>,
}

impl TransferDesk {
    pub fn new(provider: Arc<dyn DataProvider<Safe>>, bus: NotificationBus) -> Self {
        Self {
            provider,
            bus,
            lock: Mutex::new(()),
        }
    }

    pub async fn execute(&self, request: &TransferRequest) -> Result<TransferReceipt> {
        let _turn = self.lock.lock().await;
        let mut safes = self.provider.list().await?;

        let receipt = match transfer(&mut safes, request) {
            Ok(receipt) => receipt,
            Err(err) => {
                warn!(from = %request.from, to = %request.to, "transfer rejected: {err}");
                self.bus.failure(TRANSFER_TOPIC, err.to_string());
                return Err(err);
            }
        };

        let touched: Vec<Safe> = safes
            .into_iter()
            .filter(|safe| safe.id == receipt.from || safe.id == receipt.to)
            .collect();
        self.provider.save_all(touched).await?;

        info!(
            from = %receipt.from,
            to = %receipt.to,
            amount = %receipt.amount,
            currency = %receipt.currency,
            "transfer completed"
        );
        if let Err(err) = self.bus.publish_json(
            TRANSFER_TOPIC,
            NotificationLevel::Success,
            receipt.memo.clone(),
            &receipt,
        ) {
            warn!("transfer notification dropped: {err:#}");
        }
        Ok(receipt)
    }
}

fn position(safes: &[Safe], id: Uuid) -> Result<usize> {
    safes
        .iter()
        .position(|safe| safe.id == id)
        .ok_or(DeskError::NotFound {
            kind: Safe::KIND,
            id,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn safe(id: u128, currency: &str, balance: i64, is_active: bool) -> Safe {
        Safe {
            id: Uuid::from_u128(id),
            name: format!("Safe {id}"),
            safe_type: SafeType::Cash,
            currency: currency.to_string(),
            balance: Decimal::new(balance, 0),
            account_name: None,
            iban: None,
            is_active,
        }
    }

    fn request(from: u128, to: u128, amount: i64) -> TransferRequest {
        TransferRequest {
            from: Uuid::from_u128(from),
            to: Uuid::from_u128(to),
            amount: Decimal::new(amount, 0),
            description: None,
        }
    }

    fn book() -> Vec<Safe> {
        vec![
            safe(1, "TRY", 1000, true),
            safe(2, "TRY", 0, true),
            safe(3, "USD", 500, true),
            safe(4, "TRY", 0, false),
        ]
    }

    #[test]
    fn targets_share_currency_and_are_active() {
        let targets = transfer_targets(&book(), Uuid::from_u128(1));
        let ids: Vec<Uuid> = targets.iter().map(|safe| safe.id).collect();
        assert_eq!(ids, vec![Uuid::from_u128(2)]);

        assert!(transfer_targets(&book(), Uuid::from_u128(99)).is_empty());
    }

    #[test]
    fn transfer_moves_balance_and_books_both_sides() {
        let mut safes = book();
        let receipt = transfer(&mut safes, &request(1, 2, 250)).unwrap();

        assert_eq!(safes[0].balance, Decimal::new(750, 0));
        assert_eq!(safes[1].balance, Decimal::new(250, 0));
        assert_eq!(receipt.source_balance, Decimal::new(750, 0));
        assert_eq!(receipt.target_balance, Decimal::new(250, 0));
        assert_eq!(receipt.currency, "TRY");
        assert_eq!(receipt.memo, "Transfer Safe 1 -> Safe 2");

        let debits: Decimal = receipt.lines.iter().map(|line| line.debit).sum();
        let credits: Decimal = receipt.lines.iter().map(|line| line.credit).sum();
        assert_eq!(debits, credits);
    }

    #[test]
    fn rejected_transfers_leave_balances_untouched() {
        let cases = [
            (request(1, 2, 0), DeskError::InvalidAmount(Decimal::ZERO)),
            (request(1, 1, 10), DeskError::SameAccount(Uuid::from_u128(1))),
            (
                request(1, 4, 10),
                DeskError::InactiveAccount(Uuid::from_u128(4)),
            ),
            (
                request(1, 3, 10),
                DeskError::CurrencyMismatch {
                    source_currency: "TRY".to_string(),
                    target_currency: "USD".to_string(),
                },
            ),
            (
                request(2, 1, 10),
                DeskError::InsufficientBalance {
                    requested: Decimal::new(10, 0),
                    available: Decimal::ZERO,
                },
            ),
            (
                request(1, 9, 10),
                DeskError::NotFound {
                    kind: "safe",
                    id: Uuid::from_u128(9),
                },
            ),
        ];

        for (request, expected) in cases {
            let mut safes = book();
            let err = transfer(&mut safes, &request).unwrap_err();
            assert_eq!(err, expected);
            assert_eq!(safes, book());
        }
    }

    #[test]
    fn list_filter_combines_type_currency_and_active_switch() {
        let mut safes = book();
        safes[1].safe_type = SafeType::Bank;
        safes[1].iban = Some("TR00 1111".to_string());

        let filter = SafeListFilter {
            filters: FilterState::new().with_currencies(["TRY"]),
            active_only: true,
        };
        let ids: Vec<Uuid> = filter.apply(&safes).iter().map(|safe| safe.id).collect();
        assert_eq!(ids, vec![Uuid::from_u128(1), Uuid::from_u128(2)]);

        let filter = SafeListFilter {
            filters: FilterState::new()
                .with_statuses([SafeType::Bank])
                .with_search("tr00"),
            active_only: false,
        };
        assert_eq!(filter.apply(&safes).len(), 1);
    }

    #[test]
    fn list_filter_reads_back_from_json() {
        let filter = SafeListFilter {
            filters: FilterState::new()
                .with_statuses([SafeType::Bank])
                .with_currencies(["TRY"]),
            active_only: true,
        };
        let json = serde_json::to_string(&filter).unwrap();
        let back: SafeListFilter = serde_json::from_str(&json).unwrap();
        assert_eq!(back, filter);

        let sparse: SafeListFilter =
            serde_json::from_str(r#"{"filters":{"statuses":["cash"]},"activeOnly":false}"#)
                .unwrap();
        assert_eq!(sparse.filters.statuses, vec![SafeType::Cash]);
        assert!(!sparse.active_only);
    }

    #[test]
    fn balances_skip_inactive_safes() {
        let mut safes = book();
        safes[3].balance = Decimal::new(9999, 0);
        let totals = balances(&safes);
        assert_eq!(totals["TRY"], Decimal::new(1000, 0));
        assert_eq!(totals["USD"], Decimal::new(500, 0));
    }
}
