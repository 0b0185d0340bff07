//! Explicit query configuration for store reads.
//!
//! Each accessor builds one `QueryOptions` value up front and hands it to
//! `StoreClient::fetch`, which renders it into PostgREST query parameters.
//! The recognized options are exactly: one single-column filter, one
//! single-column ordering, and a row-count limit.

/// Comparison operator for a filter clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    Eq,
    Gte,
    Lt,
}

impl FilterOp {
    fn as_str(self) -> &'static str {
        match self {
            FilterOp::Eq => "eq",
            FilterOp::Gte => "gte",
            FilterOp::Lt => "lt",
        }
    }
}

/// A single-column filter clause.
#[derive(Debug, Clone)]
pub struct Filter {
    pub column: &'static str,
    pub op: FilterOp,
    pub value: String,
}

impl Filter {
    pub fn new(column: &'static str, op: FilterOp, value: impl Into<String>) -> Self {
        Filter {
            column,
            op,
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

/// Where rows with a null ordering column land. Always stated explicitly in
/// the rendered parameter rather than inherited from the store default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nulls {
    First,
    Last,
}

/// A single-column ordering clause.
#[derive(Debug, Clone)]
pub struct Order {
    pub column: &'static str,
    pub direction: Direction,
    pub nulls: Option<Nulls>,
}

impl Order {
    pub fn asc(column: &'static str) -> Self {
        Order {
            column,
            direction: Direction::Asc,
            nulls: None,
        }
    }

    pub fn desc(column: &'static str) -> Self {
        Order {
            column,
            direction: Direction::Desc,
            nulls: None,
        }
    }

    pub fn nulls_last(mut self) -> Self {
        self.nulls = Some(Nulls::Last);
        self
    }
}

/// The full configuration of one read, built before the request is issued.
#[derive(Debug, Clone, Default)]
pub struct QueryOptions {
    pub filter: Option<Filter>,
    pub order: Option<Order>,
    pub limit: Option<u32>,
}

impl QueryOptions {
    /// Render to PostgREST query parameters (`?select=*&...`).
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![("select".to_string(), "*".to_string())];

        if let Some(filter) = &self.filter {
            pairs.push((
                filter.column.to_string(),
                format!("{}.{}", filter.op.as_str(), filter.value),
            ));
        }

        if let Some(order) = &self.order {
            let direction = match order.direction {
                Direction::Asc => "asc",
                Direction::Desc => "desc",
            };
            let mut clause = format!("{}.{}", order.column, direction);
            match order.nulls {
                Some(Nulls::First) => clause.push_str(".nullsfirst"),
                Some(Nulls::Last) => clause.push_str(".nullslast"),
                None => {}
            }
            pairs.push(("order".to_string(), clause));
        }

        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }

        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(pairs: &[(String, String)], key: &str) -> Option<String> {
        pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }

    #[test]
    fn test_default_options_select_everything() {
        let pairs = QueryOptions::default().to_query_pairs();
        assert_eq!(pairs, vec![("select".to_string(), "*".to_string())]);
    }

    #[test]
    fn test_posts_ordering_states_null_placement() {
        let options = QueryOptions {
            filter: None,
            order: Some(Order::desc("published_at").nulls_last()),
            limit: Some(3),
        };

        let pairs = options.to_query_pairs();
        assert_eq!(
            pair(&pairs, "order").as_deref(),
            Some("published_at.desc.nullslast")
        );
        assert_eq!(pair(&pairs, "limit").as_deref(), Some("3"));
    }

    #[test]
    fn test_slug_filter_renders_equality() {
        let options = QueryOptions {
            filter: Some(Filter::new("slug", FilterOp::Eq, "hello-world")),
            order: None,
            limit: None,
        };

        let pairs = options.to_query_pairs();
        assert_eq!(pair(&pairs, "slug").as_deref(), Some("eq.hello-world"));
    }

    #[test]
    fn test_upcoming_event_window_is_gte_ascending() {
        let options = QueryOptions {
            filter: Some(Filter::new(
                "event_date",
                FilterOp::Gte,
                "2024-06-01T12:00:00+00:00",
            )),
            order: Some(Order::asc("event_date")),
            limit: None,
        };

        let pairs = options.to_query_pairs();
        assert_eq!(
            pair(&pairs, "event_date").as_deref(),
            Some("gte.2024-06-01T12:00:00+00:00")
        );
        assert_eq!(pair(&pairs, "order").as_deref(), Some("event_date.asc"));
    }

    #[test]
    fn test_past_event_window_is_lt_descending() {
        let options = QueryOptions {
            filter: Some(Filter::new(
                "event_date",
                FilterOp::Lt,
                "2024-06-01T12:00:00+00:00",
            )),
            order: Some(Order::desc("event_date")),
            limit: None,
        };

        let pairs = options.to_query_pairs();
        assert_eq!(
            pair(&pairs, "event_date").as_deref(),
            Some("lt.2024-06-01T12:00:00+00:00")
        );
        assert_eq!(pair(&pairs, "order").as_deref(), Some("event_date.desc"));
    }
}
