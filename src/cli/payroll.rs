//! Payroll screen

use std::io::{BufRead, Write};

use crate::display::format_payroll;
use crate::error::YardResult;
use crate::services::payroll::{month_name, rollup, valid_month_count, PayrollSummary, MAX_MONTHS};

use super::prompt::Prompter;

/// Ask for an employee's salaries and print the running total
///
/// Salaries are asked from the most recent month backwards and printed
/// oldest first.
pub fn payroll_rollup<I: BufRead, O: Write>(prompter: &mut Prompter<I, O>) -> YardResult<PayrollSummary> {
    prompter.say("\n=== PAYROLL ===")?;
    let employee = prompter.text("Employee name: ")?;

    let months = loop {
        let count = prompter.integer(&format!("Number of months (1-{}): ", MAX_MONTHS))?;
        if valid_month_count(count) {
            break count as usize;
        }
        prompter.warn(format_args!("enter a number between 1 and {}", MAX_MONTHS))?;
    };

    let mut salaries = vec![0.0; months];
    for month in (1..=months).rev() {
        salaries[month - 1] =
            prompter.decimal_or_zero(&format!("Salary for {} (month {}): ", month_name(month), month))?;
    }

    let summary = rollup(employee, &salaries);
    prompter.say("")?;
    prompter.show(format_payroll(&summary))?;
    Ok(summary)
}
