use ledgerdesk_core::{EmployeeSalary, SalaryStatus};
use serde::Serialize;

use crate::{CurrencyTotals, add_to};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalarySummary {
    pub paid: CurrencyTotals,
    pub pending: CurrencyTotals,
    pub overdue: CurrencyTotals,
    pub employee_count: usize,
}

impl SalarySummary {
    pub fn from_records(records: &[EmployeeSalary]) -> Self {
        let mut summary = Self::default();
        let mut employees: Vec<&str> = Vec::new();

        for salary in records {
            let bucket = match salary.status {
                SalaryStatus::Paid => &mut summary.paid,
                SalaryStatus::Pending => &mut summary.pending,
                SalaryStatus::Overdue => &mut summary.overdue,
            };
            add_to(bucket, &salary.currency, salary.amount);

            if !employees.contains(&salary.employee_id.as_str()) {
                employees.push(&salary.employee_id);
            }
        }

        summary.employee_count = employees.len();
        summary
    }
}
