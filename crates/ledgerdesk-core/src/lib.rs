pub mod error;
pub mod events;
pub mod filter;
pub mod models;
pub mod paging;
pub mod storage;

pub use error::{DeskError, Result};
pub use events::{Notification, NotificationLevel};
pub use filter::{FilterInput, FilterState, Filterable, derive};
pub use models::{
    CustomerReceivable, EmployeeSalary, ExpenseItem, ExpenseReceipt, IncomingPayment,
    InvoiceStatus, PaymentStatus, PurchaseInvoice, ReceiptDocument, ReceiptHistoryEntry,
    ReceiptStatus, ReceivableStatus, Safe, SafeType, SalaryStatus,
};
pub use paging::{Page, paginate};
pub use storage::{DataProvider, Record};
