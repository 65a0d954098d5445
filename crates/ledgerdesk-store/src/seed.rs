//! Demo datasets every page starts from.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use ledgerdesk_core::{
    CustomerReceivable, EmployeeSalary, ExpenseItem, ExpenseReceipt, IncomingPayment,
    InvoiceStatus, PaymentStatus, PurchaseInvoice, ReceiptDocument, ReceiptHistoryEntry,
    ReceiptStatus, ReceivableStatus, Safe, SafeType, SalaryStatus,
};
use rust_decimal::Decimal;
use uuid::Uuid;

pub const MAIN_CASH_ID: Uuid = Uuid::from_u128(0x5afe_0001);
pub const USD_CASH_ID: Uuid = Uuid::from_u128(0x5afe_0002);
pub const ZIRAAT_TRY_ID: Uuid = Uuid::from_u128(0x5afe_0003);
pub const GARANTI_USD_ID: Uuid = Uuid::from_u128(0x5afe_0004);
pub const ISBANK_EUR_ID: Uuid = Uuid::from_u128(0x5afe_0005);
pub const AKBANK_TRY_ID: Uuid = Uuid::from_u128(0x5afe_0006);

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

fn money(units: i64, cents: i64) -> Decimal {
    Decimal::new(units * 100 + cents, 2)
}

pub fn customer_receivables() -> Vec<CustomerReceivable> {
    vec![
        CustomerReceivable {
            id: Uuid::from_u128(0xa1),
            invoice_number: "FAT-2024-001".to_string(),
            customer_name: "Ahmet Yılmaz".to_string(),
            invoice_date: date(2024, 1, 15),
            due_date: date(2024, 2, 15),
            amount: money(15000, 0),
            currency: "TRY".to_string(),
            status: ReceivableStatus::Paid,
        },
        CustomerReceivable {
            id: Uuid::from_u128(0xa2),
            invoice_number: "FAT-2024-002".to_string(),
            customer_name: "Ayşe Kaya".to_string(),
            invoice_date: date(2024, 1, 20),
            due_date: date(2024, 2, 20),
            amount: money(8500, 0),
            currency: "USD".to_string(),
            status: ReceivableStatus::Overdue,
        },
        CustomerReceivable {
            id: Uuid::from_u128(0xa3),
            invoice_number: "FAT-2024-003".to_string(),
            customer_name: "Mehmet Demir".to_string(),
            invoice_date: date(2024, 2, 1),
            due_date: date(2024, 3, 1),
            amount: money(22000, 0),
            currency: "TRY".to_string(),
            status: ReceivableStatus::NotDue,
        },
        CustomerReceivable {
            id: Uuid::from_u128(0xa4),
            invoice_number: "FAT-2024-004".to_string(),
            customer_name: "Zeynep Çelik".to_string(),
            invoice_date: date(2024, 2, 10),
            due_date: date(2024, 3, 10),
            amount: money(5750, 50),
            currency: "EUR".to_string(),
            status: ReceivableStatus::NotDue,
        },
    ]
}

pub fn employee_salaries() -> Vec<EmployeeSalary> {
    vec![
        EmployeeSalary {
            id: Uuid::from_u128(0xb1),
            employee_id: "EMP-001".to_string(),
            employee_name: "Ali Vural".to_string(),
            payment_date: date(2024, 1, 31),
            amount: money(35000, 0),
            currency: "TRY".to_string(),
            status: SalaryStatus::Paid,
        },
        EmployeeSalary {
            id: Uuid::from_u128(0xb2),
            employee_id: "EMP-002".to_string(),
            employee_name: "Elif Arslan".to_string(),
            payment_date: date(2024, 1, 31),
            amount: money(42000, 0),
            currency: "TRY".to_string(),
            status: SalaryStatus::Paid,
        },
        EmployeeSalary {
            id: Uuid::from_u128(0xb3),
            employee_id: "EMP-003".to_string(),
            employee_name: "Can Öztürk".to_string(),
            payment_date: date(2024, 2, 29),
            amount: money(38000, 0),
            currency: "TRY".to_string(),
            status: SalaryStatus::Pending,
        },
        EmployeeSalary {
            id: Uuid::from_u128(0xb4),
            employee_id: "EMP-004".to_string(),
            employee_name: "Deniz Aydın".to_string(),
            payment_date: date(2024, 1, 31),
            amount: money(4000, 0),
            currency: "USD".to_string(),
            status: SalaryStatus::Overdue,
        },
    ]
}

pub fn expense_receipts() -> Vec<ExpenseReceipt> {
    vec![
        ExpenseReceipt {
            id: Uuid::from_u128(0xc1),
            receipt_number: "MF-2024-001".to_string(),
            date: date(2024, 1, 8),
            category: "Office Supplies".to_string(),
            description: "Printer paper and toner".to_string(),
            amount: money(2450, 0),
            currency: "TRY".to_string(),
            status: ReceiptStatus::Paid,
            items: vec![
                ExpenseItem {
                    description: "A4 paper (box)".to_string(),
                    quantity: Decimal::new(5, 0),
                    unit_price: money(250, 0),
                },
                ExpenseItem {
                    description: "Toner cartridge".to_string(),
                    quantity: Decimal::ONE,
                    unit_price: money(1200, 0),
                },
            ],
            history: vec![
                ReceiptHistoryEntry {
                    at: at(2024, 1, 8, 9, 30),
                    action: "created".to_string(),
                    actor: "Elif Arslan".to_string(),
                    note: None,
                },
                ReceiptHistoryEntry {
                    at: at(2024, 1, 10, 14, 5),
                    action: "paid".to_string(),
                    actor: "Ali Vural".to_string(),
                    note: Some("Paid from main cash".to_string()),
                },
            ],
            documents: vec![ReceiptDocument {
                name: "mf-2024-001.pdf".to_string(),
                kind: "application/pdf".to_string(),
                url: "/documents/mf-2024-001.pdf".to_string(),
            }],
        },
        ExpenseReceipt {
            id: Uuid::from_u128(0xc2),
            receipt_number: "MF-2024-002".to_string(),
            date: date(2024, 1, 22),
            category: "Travel".to_string(),
            description: "Client visit, Izmir".to_string(),
            amount: money(6800, 0),
            currency: "TRY".to_string(),
            status: ReceiptStatus::Pending,
            items: vec![
                ExpenseItem {
                    description: "Flight".to_string(),
                    quantity: Decimal::new(2, 0),
                    unit_price: money(2400, 0),
                },
                ExpenseItem {
                    description: "Hotel night".to_string(),
                    quantity: Decimal::ONE,
                    unit_price: money(2000, 0),
                },
            ],
            history: vec![ReceiptHistoryEntry {
                at: at(2024, 1, 22, 18, 0),
                action: "created".to_string(),
                actor: "Can Öztürk".to_string(),
                note: None,
            }],
            documents: Vec::new(),
        },
        ExpenseReceipt {
            id: Uuid::from_u128(0xc3),
            receipt_number: "MF-2024-003".to_string(),
            date: date(2024, 2, 3),
            category: "Software".to_string(),
            description: "Design tool subscription".to_string(),
            amount: money(120, 0),
            currency: "USD".to_string(),
            status: ReceiptStatus::Cancelled,
            items: vec![ExpenseItem {
                description: "Annual licence".to_string(),
                quantity: Decimal::ONE,
                unit_price: money(120, 0),
            }],
            history: vec![
                ReceiptHistoryEntry {
                    at: at(2024, 2, 3, 11, 15),
                    action: "created".to_string(),
                    actor: "Deniz Aydın".to_string(),
                    note: None,
                },
                ReceiptHistoryEntry {
                    at: at(2024, 2, 4, 8, 45),
                    action: "cancelled".to_string(),
                    actor: "Elif Arslan".to_string(),
                    note: Some("Duplicate of an existing licence".to_string()),
                },
            ],
            documents: Vec::new(),
        },
    ]
}

pub fn purchase_invoices() -> Vec<PurchaseInvoice> {
    vec![
        PurchaseInvoice {
            id: Uuid::from_u128(0xd1),
            invoice_number: "ALF-2024-101".to_string(),
            supplier: "Anadolu Kırtasiye".to_string(),
            date: date(2024, 1, 5),
            vat: money(900, 0),
            amount: money(4500, 0),
            status: InvoiceStatus::Paid,
        },
        PurchaseInvoice {
            id: Uuid::from_u128(0xd2),
            invoice_number: "ALF-2024-102".to_string(),
            supplier: "Marmara Lojistik".to_string(),
            date: date(2024, 1, 18),
            vat: money(2400, 0),
            amount: money(12000, 0),
            status: InvoiceStatus::Pending,
        },
        PurchaseInvoice {
            id: Uuid::from_u128(0xd3),
            invoice_number: "ALF-2024-103".to_string(),
            supplier: "Ege Teknoloji".to_string(),
            date: date(2023, 12, 20),
            vat: money(6000, 0),
            amount: money(30000, 0),
            status: InvoiceStatus::Overdue,
        },
    ]
}

pub fn incoming_payments() -> Vec<IncomingPayment> {
    vec![
        IncomingPayment {
            id: Uuid::from_u128(0xe1),
            payment_number: "TAH-2024-001".to_string(),
            customer: "Ahmet Yılmaz".to_string(),
            date: date(2024, 2, 14),
            amount: money(15000, 0),
            status: PaymentStatus::Completed,
        },
        IncomingPayment {
            id: Uuid::from_u128(0xe2),
            payment_number: "TAH-2024-002".to_string(),
            customer: "Mehmet Demir".to_string(),
            date: date(2024, 2, 20),
            amount: money(10000, 0),
            status: PaymentStatus::Pending,
        },
        IncomingPayment {
            id: Uuid::from_u128(0xe3),
            payment_number: "TAH-2024-003".to_string(),
            customer: "Zeynep Çelik".to_string(),
            date: date(2024, 2, 22),
            amount: money(2000, 0),
            status: PaymentStatus::Cancelled,
        },
    ]
}

pub fn safes() -> Vec<Safe> {
    vec![
        Safe {
            id: MAIN_CASH_ID,
            name: "Merkez Kasa".to_string(),
            safe_type: SafeType::Cash,
            currency: "TRY".to_string(),
            balance: money(125_000, 0),
            account_name: None,
            iban: None,
            is_active: true,
        },
        Safe {
            id: USD_CASH_ID,
            name: "Dolar Kasa".to_string(),
            safe_type: SafeType::Cash,
            currency: "USD".to_string(),
            balance: money(8000, 0),
            account_name: None,
            iban: None,
            is_active: true,
        },
        Safe {
            id: ZIRAAT_TRY_ID,
            name: "Ziraat Bankası TL".to_string(),
            safe_type: SafeType::Bank,
            currency: "TRY".to_string(),
            balance: money(450_000, 0),
            account_name: Some("Ledgerdesk Ltd. Şti.".to_string()),
            iban: Some("TR33 0001 0012 3456 7890 1234 56".to_string()),
            is_active: true,
        },
        Safe {
            id: GARANTI_USD_ID,
            name: "Garanti USD".to_string(),
            safe_type: SafeType::Bank,
            currency: "USD".to_string(),
            balance: money(32_000, 0),
            account_name: Some("Ledgerdesk Ltd. Şti.".to_string()),
            iban: Some("TR64 0006 2000 1234 0006 2987 65".to_string()),
            is_active: true,
        },
        Safe {
            id: ISBANK_EUR_ID,
            name: "İş Bankası EUR".to_string(),
            safe_type: SafeType::Bank,
            currency: "EUR".to_string(),
            balance: money(15_000, 0),
            account_name: Some("Ledgerdesk Ltd. Şti.".to_string()),
            iban: Some("TR12 0006 4000 0011 2345 6789 01".to_string()),
            is_active: true,
        },
        Safe {
            id: AKBANK_TRY_ID,
            name: "Akbank TL".to_string(),
            safe_type: SafeType::Bank,
            currency: "TRY".to_string(),
            balance: Decimal::ZERO,
            account_name: Some("Ledgerdesk Ltd. Şti.".to_string()),
            iban: Some("TR55 0004 6000 9988 7766 5544 33".to_string()),
            is_active: false,
        },
    ]
}
