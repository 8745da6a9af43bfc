//! Cart

pub mod log;
pub mod reconcile;
pub mod totals;

pub use log::CartLog;
pub use reconcile::{CartLine, Reconciliation, reconcile};
pub use totals::{OrderTotals, totals};
