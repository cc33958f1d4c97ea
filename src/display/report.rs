//! Sale ticket and payroll formatting

use crate::services::{DiscountTicket, PayrollSummary};
use crate::storage::csv_io::format_decimal;

/// Format a separator line
pub fn separator(width: usize) -> String {
    "-".repeat(width)
}

pub fn format_ticket(ticket: &DiscountTicket) -> String {
    let mut output = String::new();
    output.push_str("SALE TICKET\n");
    output.push_str(&format!("{}\n", separator(32)));
    output.push_str(&format!("Seller:      {}\n", ticket.seller));
    output.push_str(&format!("Sale number: {}\n", ticket.sale_number));
    output.push_str(&format!("{}\n", separator(32)));
    output.push_str(&format!("{:<16}{:>16}\n", "Subtotal:", format_decimal(ticket.subtotal)));
    output.push_str(&format!("{:<16}{:>16}\n", "Discount:", format_decimal(ticket.discount_amount)));
    output.push_str(&format!("{:<16}{:>16}\n", "Total to pay:", format_decimal(ticket.total)));
    output
}

/// Month-by-month table, oldest first, then the final total
pub fn format_payroll(summary: &PayrollSummary) -> String {
    let mut output = format!("Payroll for {}\n", summary.employee);
    output.push_str(&format!(
        "{:<12}  {:>12}  {:>14}\n",
        "Month", "Salary", "Accumulated"
    ));
    output.push_str(&format!("{:-<12}  {:->12}  {:->14}\n", "", "", ""));

    for line in &summary.lines {
        output.push_str(&format!(
            "{:<12}  {:>12}  {:>14}\n",
            line.name,
            format_decimal(line.salary),
            format_decimal(line.accumulated)
        ));
    }

    output.push_str(&format!("\nTotal paid: {}\n", format_decimal(summary.total)));
    output
}
