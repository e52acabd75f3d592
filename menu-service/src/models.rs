use chrono::{DateTime, Utc};
use diesel::prelude::*;
use shared::MenuItem;

#[derive(Debug, Clone, Queryable, Identifiable)]
#[diesel(table_name = crate::schema::menu_items)]
pub struct MenuItemRow {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub stock: i32,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl MenuItemRow {
    pub fn into_item(self) -> MenuItem {
        MenuItem {
            id: self.id,
            name: self.name,
            description: self.description,
            stock: self.stock,
        }
    }

    /// Snapshot reflecting the one-unit decrement this reservation committed.
    pub fn into_reserved_item(self) -> MenuItem {
        let mut item = self.into_item();
        item.stock -= 1;
        item
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_snapshot_decrements_by_one() {
        let row = MenuItemRow {
            id: "onion".to_string(),
            name: "Onion".to_string(),
            description: None,
            stock: 1,
            created_at: None,
            updated_at: None,
        };
        let item = row.into_reserved_item();
        assert_eq!(item.stock, 0);
        assert_eq!(item.name, "Onion");
    }
}
