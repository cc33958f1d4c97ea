//! Point-of-sale discount screen

use std::io::{BufRead, Write};

use crate::display::format_ticket;
use crate::error::YardResult;
use crate::services::{Discount, DiscountTicket};

use super::prompt::Prompter;

pub fn sale_discount<I: BufRead, O: Write>(prompter: &mut Prompter<I, O>) -> YardResult<DiscountTicket> {
    prompter.say("\n=== SALE ===")?;
    let seller = prompter.text("Seller: ")?;
    let sale_number = prompter.integer("Sale number: ")?;
    let subtotal = prompter.decimal("Sale total: ")?;

    prompter.say("Discount:")?;
    prompter.say("1. Student (50%)")?;
    prompter.say("2. Senior (20%)")?;
    prompter.say("3. No discount")?;
    prompter.say("4. Other percentage")?;

    let choice = prompter.menu_choice("Select an option: ")?;
    let discount = match Discount::from_choice(choice) {
        Some(discount) => discount,
        None if choice == 4 => Discount::Custom(prompter.decimal("Discount percentage (e.g. 10 for 10%): ")?),
        None => {
            prompter.warn("invalid option, no discount applied")?;
            Discount::None
        }
    };

    let ticket = DiscountTicket::new(seller, sale_number, subtotal, discount);
    prompter.say("")?;
    prompter.show(format_ticket(&ticket))?;
    Ok(ticket)
}
