use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::filter::Filterable;
use crate::storage::Record;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SalaryStatus {
    Paid,
    Pending,
    Overdue,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeSalary {
    pub id: Uuid,
    pub employee_id: String,
    pub employee_name: String,
    pub payment_date: NaiveDate,
    pub amount: Decimal,
    pub currency: String,
    pub status: SalaryStatus,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ReceiptStatus {
    Paid,
    Pending,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseItem {
    pub description: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
}

impl ExpenseItem {
    pub fn line_total(&self) -> Decimal {
        self.quantity * self.unit_price
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReceiptHistoryEntry {
    pub at: DateTime<Utc>,
    pub action: String,
    pub actor: String,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReceiptDocument {
    pub name: String,
    pub kind: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseReceipt {
    pub id: Uuid,
    pub receipt_number: String,
    pub date: NaiveDate,
    pub category: String,
    pub description: String,
    pub amount: Decimal,
    pub currency: String,
    pub status: ReceiptStatus,
    #[serde(default)]
    pub items: Vec<ExpenseItem>,
    #[serde(default)]
    pub history: Vec<ReceiptHistoryEntry>,
    #[serde(default)]
    pub documents: Vec<ReceiptDocument>,
}

impl ExpenseReceipt {
    pub fn items_total(&self) -> Decimal {
        self.items.iter().map(ExpenseItem::line_total).sum()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum InvoiceStatus {
    Paid,
    Pending,
    Overdue,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseInvoice {
    pub id: Uuid,
    pub invoice_number: String,
    pub supplier: String,
    pub date: NaiveDate,
    pub vat: Decimal,
    pub amount: Decimal,
    pub status: InvoiceStatus,
}

impl PurchaseInvoice {
    /// Amount including VAT.
    pub fn total(&self) -> Decimal {
        self.amount + self.vat
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ReceivableStatus {
    Paid,
    NotDue,
    Overdue,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerReceivable {
    pub id: Uuid,
    pub invoice_number: String,
    pub customer_name: String,
    pub invoice_date: NaiveDate,
    pub due_date: NaiveDate,
    pub amount: Decimal,
    pub currency: String,
    pub status: ReceivableStatus,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Completed,
    Pending,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IncomingPayment {
    pub id: Uuid,
    pub payment_number: String,
    pub customer: String,
    pub date: NaiveDate,
    pub amount: Decimal,
    pub status: PaymentStatus,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SafeType {
    Cash,
    Bank,
}

/// A cash box or bank account tracked for balances and transfers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Safe {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub safe_type: SafeType,
    pub currency: String,
    pub balance: Decimal,
    pub account_name: Option<String>,
    pub iban: Option<String>,
    pub is_active: bool,
}

impl Record for EmployeeSalary {
    const KIND: &'static str = "employee salary";

    fn id(&self) -> Uuid {
        self.id
    }
}

impl Record for ExpenseReceipt {
    const KIND: &'static str = "expense receipt";

    fn id(&self) -> Uuid {
        self.id
    }
}

impl Record for PurchaseInvoice {
    const KIND: &'static str = "purchase invoice";

    fn id(&self) -> Uuid {
        self.id
    }
}

impl Record for CustomerReceivable {
    const KIND: &'static str = "customer receivable";

    fn id(&self) -> Uuid {
        self.id
    }
}

impl Record for IncomingPayment {
    const KIND: &'static str = "incoming payment";

    fn id(&self) -> Uuid {
        self.id
    }
}

impl Record for Safe {
    const KIND: &'static str = "safe";

    fn id(&self) -> Uuid {
        self.id
    }
}

impl Filterable for EmployeeSalary {
    type Status = SalaryStatus;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.employee_name.as_str(), self.employee_id.as_str()]
    }

    fn status(&self) -> Option<SalaryStatus> {
        Some(self.status)
    }

    fn date(&self) -> Option<NaiveDate> {
        Some(self.payment_date)
    }

    fn amount(&self) -> Option<Decimal> {
        Some(self.amount)
    }

    fn currency(&self) -> Option<&str> {
        Some(&self.currency)
    }
}

impl Filterable for ExpenseReceipt {
    type Status = ReceiptStatus;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.receipt_number.as_str(), self.category.as_str(), self.description.as_str()]
    }

    fn status(&self) -> Option<ReceiptStatus> {
        Some(self.status)
    }

    fn date(&self) -> Option<NaiveDate> {
        Some(self.date)
    }

    fn amount(&self) -> Option<Decimal> {
        Some(self.amount)
    }

    fn currency(&self) -> Option<&str> {
        Some(&self.currency)
    }
}

impl Filterable for PurchaseInvoice {
    type Status = InvoiceStatus;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.invoice_number.as_str(), self.supplier.as_str()]
    }

    fn status(&self) -> Option<InvoiceStatus> {
        Some(self.status)
    }

    fn date(&self) -> Option<NaiveDate> {
        Some(self.date)
    }

    fn amount(&self) -> Option<Decimal> {
        Some(self.amount)
    }
}

impl Filterable for CustomerReceivable {
    type Status = ReceivableStatus;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.invoice_number.as_str(), self.customer_name.as_str()]
    }

    fn status(&self) -> Option<ReceivableStatus> {
        Some(self.status)
    }

    fn date(&self) -> Option<NaiveDate> {
        Some(self.invoice_date)
    }

    fn amount(&self) -> Option<Decimal> {
        Some(self.amount)
    }

    fn currency(&self) -> Option<&str> {
        Some(&self.currency)
    }
}

impl Filterable for IncomingPayment {
    type Status = PaymentStatus;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.payment_number.as_str(), self.customer.as_str()]
    }

    fn status(&self) -> Option<PaymentStatus> {
        Some(self.status)
    }

    fn date(&self) -> Option<NaiveDate> {
        Some(self.date)
    }

    fn amount(&self) -> Option<Decimal> {
        Some(self.amount)
    }
}

impl Filterable for Safe {
    type Status = SafeType;

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        fields.extend(self.account_name.as_deref());
        fields.extend(self.iban.as_deref());
        fields
    }

    fn status(&self) -> Option<SafeType> {
        Some(self.safe_type)
    }

    fn amount(&self) -> Option<Decimal> {
        Some(self.balance)
    }

    fn currency(&self) -> Option<&str> {
        Some(&self.currency)
    }
}
