//! Interactive menus
//!
//! Every screen reads and writes through a [`Prompter`], bridging the
//! terminal with the service layer.

pub mod entry;
pub mod list_menu;
pub mod main_menu;
pub mod payroll;
pub mod profiles;
pub mod prompt;
pub mod sales;
pub mod yard;

pub use list_menu::{run_list_menu, ListExit};
pub use prompt::Prompter;
