use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub stock: i32,
}

/// Classification of a single reservation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReserveOutcome {
    Reserved,
    OutOfStock,
    NotFound,
    Invalid,
    InternalError,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationResult {
    pub outcome: ReserveOutcome,
    pub message: String,
    pub item: Option<MenuItem>,
}

impl ReservationResult {
    pub fn reserved(item: MenuItem) -> Self {
        Self {
            outcome: ReserveOutcome::Reserved,
            message: format!("{} added to cart!", item.name),
            item: Some(item),
        }
    }

    pub fn out_of_stock(item: MenuItem) -> Self {
        Self {
            outcome: ReserveOutcome::OutOfStock,
            message: format!("{} is out of stock.", item.name),
            item: Some(item),
        }
    }

    /// Stock was exhausted by a concurrent reservation between our read and
    /// our conditional write.
    pub fn lost_race(item: MenuItem) -> Self {
        Self {
            outcome: ReserveOutcome::OutOfStock,
            message: format!("{} just went out of stock!", item.name),
            item: Some(item),
        }
    }

    pub fn not_found(item_id: &str) -> Self {
        Self {
            outcome: ReserveOutcome::NotFound,
            message: format!("Item with ID {} not found.", item_id),
            item: None,
        }
    }

    pub fn invalid() -> Self {
        Self {
            outcome: ReserveOutcome::Invalid,
            message: "Invalid item ID provided.".to_string(),
            item: None,
        }
    }

    pub fn internal_error() -> Self {
        Self {
            outcome: ReserveOutcome::InternalError,
            message: "An error occurred while processing your request.".to_string(),
            item: None,
        }
    }

    pub fn succeeded(&self) -> bool {
        self.outcome == ReserveOutcome::Reserved
    }
}
