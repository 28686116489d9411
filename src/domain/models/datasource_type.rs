//! Data Source Type
//!
//! A supported class of data source and the versions its built-in driver covers.

/// Descriptor of a data-source type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSourceType {
    pub ds_type: String,
    pub name: String,
    pub supported_versions: Option<String>,
}

impl DataSourceType {
    /// Case-insensitive match on the type key
    #[must_use]
    pub fn matches(&self, ds_type: &str) -> bool {
        self.ds_type.to_lowercase() == ds_type.to_lowercase()
    }
}

/// Find the descriptor for `ds_type`; when several match, the last one wins.
#[must_use]
pub fn find_type<'a>(types: &'a [DataSourceType], ds_type: &str) -> Option<&'a DataSourceType> {
    types.iter().rev().find(|t| t.matches(ds_type))
}
