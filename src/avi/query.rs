//! Listing query construction

use crate::config::api;

/// Name filter applied server-side to a listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameFilter {
    /// No name constraint, list every object of the type
    All,
    /// Substring match against object names
    Search(String),
    /// One or more exact names
    Names(Vec<String>),
}

impl NameFilter {
    /// Build from the mutually exclusive `-s` / `-n` flags
    pub fn from_args(search: Option<&str>, names: Option<&str>) -> Self {
        if let Some(s) = search {
            NameFilter::Search(s.to_string())
        } else if let Some(n) = names {
            NameFilter::Names(n.split(',').map(str::to_string).collect())
        } else {
            NameFilter::All
        }
    }
}

/// Query for a listing of one object type
#[derive(Debug)]
pub struct ObjectQuery<'a> {
    pub object_type: &'a str,
    pub filter: &'a NameFilter,
}

impl ObjectQuery<'_> {
    /// Build the first-page path with encoded query parameters
    ///
    /// Always requests `fields=uuid,name`; a single name becomes an exact
    /// `name` match, several become `name.in`, a search string becomes the
    /// controller's `search=(name,<s>)` substring filter.
    pub fn to_path(&self) -> String {
        let mut query_parts = vec![format!("fields={}", api::LIST_FIELDS)];

        match self.filter {
            NameFilter::All => {}
            NameFilter::Search(s) => {
                let expr = format!("(name,{})", s);
                query_parts.push(format!("search={}", urlencoding::encode(&expr)));
            }
            NameFilter::Names(names) if names.len() == 1 => {
                query_parts.push(format!("name={}", urlencoding::encode(&names[0])));
            }
            NameFilter::Names(names) => {
                query_parts.push(format!("name.in={}", urlencoding::encode(&names.join(","))));
            }
        }

        format!(
            "{}/{}?{}",
            api::BASE_PATH,
            self.object_type,
            query_parts.join("&")
        )
    }
}
