//! Shopping cart module.
//!
//! Contains the cart ledger, line items and totals.

mod ledger;
mod line_item;
mod summary;

pub use ledger::{CartAddition, CartLedger};
pub use line_item::LineItem;
pub use summary::{CartSummary, LineItemSummary};
