use std::fmt;

use serde::{Deserialize, Serialize};

use crate::impl_record;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    Pending,
    Completed,
}

impl DeliveryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryStatus::Pending => "pending",
            DeliveryStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One tiffin run from a pickup stop to a drop stop.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delivery {
    pub id: u64,
    pub from: String,
    pub to: String,
    pub status: DeliveryStatus,
}

impl_record!(Delivery, "delivery", id: u64, status: DeliveryStatus);

/// Aggregate figures for one dabbawala.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryStats {
    pub name: String,
    pub area: String,
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub success_rate: String,
}
