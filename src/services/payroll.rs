//! Payroll rollup
//!
//! Accumulates an employee's monthly salaries, oldest month first.

/// Most months a single rollup accepts
pub const MAX_MONTHS: usize = 12;

const MONTH_NAMES: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

/// Name of a 1-based month number, wrapping after December
pub fn month_name(month: usize) -> &'static str {
    MONTH_NAMES[month.saturating_sub(1) % MONTH_NAMES.len()]
}

/// Whether `count` is an acceptable number of months
pub fn valid_month_count(count: i64) -> bool {
    (1..=MAX_MONTHS as i64).contains(&count)
}

/// One month of the rollup
#[derive(Debug, Clone, PartialEq)]
pub struct PayrollLine {
    /// 1-based month number
    pub month: usize,
    pub name: &'static str,
    pub salary: f64,
    /// Sum of this month and every earlier one
    pub accumulated: f64,
}

/// Full rollup for one employee
#[derive(Debug, Clone, PartialEq)]
pub struct PayrollSummary {
    pub employee: String,
    pub lines: Vec<PayrollLine>,
    pub total: f64,
}

/// Fold salaries (oldest month first) into running totals
pub fn rollup(employee: impl Into<String>, salaries: &[f64]) -> PayrollSummary {
    let mut accumulated = 0.0;
    let lines: Vec<PayrollLine> = salaries
        .iter()
        .enumerate()
        .map(|(index, &salary)| {
            accumulated += salary;
            PayrollLine {
                month: index + 1,
                name: month_name(index + 1),
                salary,
                accumulated,
            }
        })
        .collect();

    PayrollSummary {
        employee: employee.into(),
        total: accumulated,
        lines,
    }
}
