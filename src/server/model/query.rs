//! List query parameters shared by the school and student listings.
//!
//! Covers free-text search, `ordering` parsing (`"-name,city"` style) and page bounds.

use std::str::FromStr;

/// Page size used when the request does not specify `entries`.
pub const DEFAULT_ENTRIES: u64 = 10;

/// Largest page size a client may request.
pub const MAX_ENTRIES: u64 = 100;

/// A requested sort key and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderBy<F> {
    pub field: F,
    pub descending: bool,
}

/// Returned by the order field `FromStr` impls for names that cannot be sorted on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOrderField(pub String);

/// Parses a comma-separated ordering expression.
///
/// A leading `-` sorts descending. Blank entries and names that `F` does not recognise
/// are dropped.
pub fn parse_ordering<F>(raw: &str) -> Vec<OrderBy<F>>
where
    F: FromStr<Err = UnknownOrderField>,
{
    raw.split(',')
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .filter_map(|term| {
            let (descending, name) = match term.strip_prefix('-') {
                Some(name) => (true, name),
                None => (false, term),
            };

            match name.parse::<F>() {
                Ok(field) => Some(OrderBy { field, descending }),
                Err(UnknownOrderField(unknown)) => {
                    tracing::debug!("Ignoring unknown ordering field '{}'", unknown);
                    None
                }
            }
        })
        .collect()
}

/// Search, ordering and pagination for a list request.
#[derive(Debug, Clone, PartialEq)]
pub struct ListParams<F> {
    /// Case-insensitive substring to look for; `None` lists everything.
    pub search: Option<String>,
    pub ordering: Vec<OrderBy<F>>,
    /// Zero-indexed page number.
    pub page: u64,
    pub per_page: u64,
}

impl<F: FromStr<Err = UnknownOrderField>> ListParams<F> {
    /// Builds list parameters from raw query values.
    ///
    /// Blank searches are dropped and `entries` is clamped to `1..=MAX_ENTRIES`.
    pub fn new(search: Option<String>, ordering: Option<&str>, page: u64, entries: u64) -> Self {
        let search = search
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Self {
            search,
            ordering: ordering.map(parse_ordering).unwrap_or_default(),
            page,
            per_page: entries.clamp(1, MAX_ENTRIES),
        }
    }
}

/// One page of results with the totals needed to render pagination controls.
#[derive(Debug, Clone, PartialEq)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, total: u64, page: u64, per_page: u64) -> Self {
        let total_pages = if per_page > 0 {
            total.div_ceil(per_page)
        } else {
            0
        };

        Self {
            items,
            total,
            page,
            per_page,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Field {
        Name,
        City,
    }

    impl FromStr for Field {
        type Err = UnknownOrderField;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            match s {
                "name" => Ok(Self::Name),
                "city" => Ok(Self::City),
                other => Err(UnknownOrderField(other.to_string())),
            }
        }
    }

    #[test]
    fn parses_ascending_and_descending_fields() {
        let ordering = parse_ordering::<Field>("-name, city");

        assert_eq!(
            ordering,
            vec![
                OrderBy {
                    field: Field::Name,
                    descending: true
                },
                OrderBy {
                    field: Field::City,
                    descending: false
                },
            ]
        );
    }

    #[test]
    fn ignores_unknown_and_blank_fields() {
        let ordering = parse_ordering::<Field>(",password,-,city,");

        assert_eq!(
            ordering,
            vec![OrderBy {
                field: Field::City,
                descending: false
            }]
        );
    }

    #[test]
    fn clamps_page_size_and_drops_blank_search() {
        let params = ListParams::<Field>::new(Some("   ".to_string()), None, 2, 0);
        assert_eq!(params.search, None);
        assert_eq!(params.per_page, 1);
        assert!(params.ordering.is_empty());

        let params = ListParams::<Field>::new(Some(" herald ".to_string()), Some("name"), 0, 500);
        assert_eq!(params.search.as_deref(), Some("herald"));
        assert_eq!(params.per_page, MAX_ENTRIES);
    }

    #[test]
    fn computes_total_pages() {
        let page = Paginated::new(vec![1, 2, 3], 21, 0, 10);
        assert_eq!(page.total_pages, 3);

        let empty: Paginated<i32> = Paginated::new(vec![], 0, 0, 10);
        assert_eq!(empty.total_pages, 0);
    }
}
