/// `OrderingKey` is a single `ORDER BY` term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderingKey {
    pub(crate) column: String,
    pub(crate) direction: OrderingDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderingDirection {
    Ascending,
    Descending,
}

impl OrderingKey {
    pub fn new<C: Into<String>>(column: C, direction: OrderingDirection) -> OrderingKey {
        Self {
            column: column.into(),
            direction,
        }
    }

    pub fn ascending_by<C: Into<String>>(column: C) -> OrderingKey {
        Self::new(column, OrderingDirection::Ascending)
    }

    pub fn descending_by<C: Into<String>>(column: C) -> OrderingKey {
        Self::new(column, OrderingDirection::Descending)
    }

    pub(crate) fn render(&self) -> String {
        match self.direction {
            OrderingDirection::Ascending => format!("{} ASC", self.column),
            OrderingDirection::Descending => format!("{} DESC", self.column),
        }
    }
}
