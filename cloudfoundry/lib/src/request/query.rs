//! Query strings in Cloud Controller v2 conventions.
//!
//! Filters become repeated `q` parameters of the form `q=<field> IN <v1>,<v2>`
//! and paging uses `page`, `results-per-page` and `order-direction`. Pairs keep
//! the order they were added in, so the same request always yields the same
//! URL.

use std::fmt::Display;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use strum::{Display as StrumDisplay, EnumString};

/// Everything except RFC 3986 unreserved characters gets encoded.
pub(crate) const COMPONENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Sort direction for list operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum OrderDirection {
    /// Ascending.
    Asc,
    /// Descending.
    Desc,
}

/// Paging controls shared by every list operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    /// Page to return (1-based on the server).
    pub page: Option<i32>,
    /// Page size.
    pub results_per_page: Option<u32>,
    /// Sort direction.
    pub order_direction: Option<OrderDirection>,
}

/// Ordered query parameters. Unset values are never added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Creates an empty parameter list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a parameter.
    pub fn push(mut self, name: &str, value: impl Display) -> Self {
        self.pairs.push((name.to_string(), value.to_string()));
        self
    }

    /// Appends a parameter only when a value is present.
    pub fn push_opt<T: Display>(self, name: &str, value: Option<T>) -> Self {
        match value {
            Some(value) => self.push(name, value),
            None => self,
        }
    }

    /// Appends `q=<field> IN <values>` unless `values` is empty.
    pub fn filter(self, field: &str, values: &[String]) -> Self {
        if values.is_empty() {
            self
        } else {
            let joined = values.join(",");
            self.push("q", format!("{field} IN {joined}"))
        }
    }

    /// Appends the paging parameters that are set.
    pub fn paginate(self, pagination: &Pagination) -> Self {
        self.push_opt("page", pagination.page)
            .push_opt("results-per-page", pagination.results_per_page)
            .push_opt("order-direction", pagination.order_direction)
    }

    /// Returns `true` if no parameter was added.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns the unencoded pairs in order.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Percent-encodes the pairs into a query string.
    pub fn encode(&self) -> String {
        self.pairs
            .iter()
            .map(|(name, value)| {
                format!(
                    "{}={}",
                    utf8_percent_encode(name, COMPONENT_ENCODE_SET),
                    utf8_percent_encode(value, COMPONENT_ENCODE_SET)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_and_page() {
        let query = QueryParams::new()
            .filter("name", &["test-name".to_string()])
            .paginate(&Pagination {
                page: Some(-1),
                ..Default::default()
            });
        assert_eq!(query.encode(), "q=name%20IN%20test-name&page=-1");
    }

    #[test]
    fn test_empty_filter_is_omitted() {
        let query = QueryParams::new().filter("name", &[]);
        assert!(query.is_empty());
        assert_eq!(query.encode(), "");
    }

    #[test]
    fn test_multiple_values_and_filters_keep_order() {
        let query = QueryParams::new()
            .filter("name", &["a".to_string(), "b".to_string()])
            .filter("status", &["active".to_string()]);
        assert_eq!(
            query.pairs(),
            [
                ("q".to_string(), "name IN a,b".to_string()),
                ("q".to_string(), "status IN active".to_string()),
            ]
        );
        assert_eq!(query.encode(), "q=name%20IN%20a%2Cb&q=status%20IN%20active");
    }

    #[test]
    fn test_paging_parameters_in_fixed_order() {
        let query = QueryParams::new().paginate(&Pagination {
            page: Some(2),
            results_per_page: Some(50),
            order_direction: Some(OrderDirection::Desc),
        });
        assert_eq!(query.encode(), "page=2&results-per-page=50&order-direction=desc");
    }

    #[test]
    fn test_push_opt_skips_absent_values() {
        let query = QueryParams::new()
            .push_opt("after_guid", None::<&str>)
            .push_opt("page", Some(1));
        assert_eq!(query.encode(), "page=1");
    }

    #[test]
    fn test_empty_string_is_present() {
        let query = QueryParams::new().push_opt("after_guid", Some(""));
        assert_eq!(query.encode(), "after_guid=");
    }

    #[test]
    fn test_reserved_characters_are_encoded() {
        let query = QueryParams::new().push("q", "name IN a&b=c/d?");
        assert_eq!(query.encode(), "q=name%20IN%20a%26b%3Dc%2Fd%3F");
    }

    #[test]
    fn test_order_direction_parse() {
        assert_eq!("asc".parse::<OrderDirection>().unwrap(), OrderDirection::Asc);
        assert_eq!(OrderDirection::Desc.to_string(), "desc");
    }
}
