//! Point-of-sale discount calculator

/// Discount picked at the register
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Discount {
    Student,
    Senior,
    None,
    /// Percentage typed by the seller, e.g. `10.0` for 10%
    Custom(f64),
}

impl Discount {
    /// Map a menu choice (1-3); 4 is custom and asks for the percentage
    pub fn from_choice(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(Discount::Student),
            2 => Some(Discount::Senior),
            3 => Some(Discount::None),
            _ => None,
        }
    }

    /// Fraction of the sale taken off
    pub fn rate(&self) -> f64 {
        match self {
            Discount::Student => 0.50,
            Discount::Senior => 0.20,
            Discount::None => 0.0,
            Discount::Custom(percent) => percent / 100.0,
        }
    }
}

/// Printed sale summary
#[derive(Debug, Clone, PartialEq)]
pub struct DiscountTicket {
    pub seller: String,
    pub sale_number: i64,
    pub subtotal: f64,
    pub discount_amount: f64,
    pub total: f64,
}

impl DiscountTicket {
    pub fn new(seller: impl Into<String>, sale_number: i64, subtotal: f64, discount: Discount) -> Self {
        let discount_amount = subtotal * discount.rate();
        Self {
            seller: seller.into(),
            sale_number,
            subtotal,
            discount_amount,
            total: subtotal - discount_amount,
        }
    }
}
