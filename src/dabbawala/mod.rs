//! Dabbawala - delivery tracker with auto-assigned ids and a
//! `pending -> completed` lifecycle.

mod delivery;
mod tracker;

pub use delivery::{Delivery, DeliveryStats, DeliveryStatus};
pub use tracker::{Dabbawala, DeliveryRules};
