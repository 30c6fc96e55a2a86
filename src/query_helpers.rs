//! Filter keyword compilation for tzKT query strings.
//!
//! tzKT accepts filters as dotted query parameters (`level.gt=100`, `sort.desc=id`,
//! `offset.pg=2`). Callers describe them as keys joined to a modifier suffix by
//! [`MODIFIER_DELIMITER`] (`level__gt`), which [`compile`] checks against an endpoint's
//! whitelist and rewrites into wire names.
//!
//! ```
//! use tzkt_client::query_helpers::{compile, Comparator, FilterValue, Filters, SortOrder};
//!
//! let filters = Filters::new()
//!     .with_modifier("level", Comparator::Gt, 100)
//!     .sort(SortOrder::Desc, "level");
//! let query = compile(&filters, &["level", "sort"], &[]).unwrap();
//! assert_eq!(query.params["level.gt"], FilterValue::Int(100));
//! assert_eq!(query.params["sort.desc"], FilterValue::Str("level".into()));
//! ```

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};

/// Separator between a base field and its modifier suffix in filter keys.
pub const MODIFIER_DELIMITER: &str = "__";

/// Separator used in the wire parameter names.
pub const WIRE_DELIMITER: &str = ".";

/// Filter key selecting the API root for a single call. Never sent as a parameter.
pub const DOMAIN_FIELD: &str = "domain";

pub const COMPARATOR_SUFFIXES: &[&str] = &[
    "eq", "ne", "gt", "ge", "lt", "le", "in", "ni", "un", "as", "null",
];
pub const SET_SUFFIXES: &[&str] = &["eq", "any", "all"];
pub const OFFSET_SUFFIXES: &[&str] = &["el", "pg", "cr"];
pub const SORT_SUFFIXES: &[&str] = &["asc", "desc"];

/// Pagination fields accepted by every list endpoint.
pub const PAGINATION_FIELDS: &[&str] = &["sort", "offset", "limit"];

/// Filter validation failures. Raised before any request is sent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParameterError {
    /// One or more filter keys name a field the endpoint does not accept.
    #[error("the following parameters are invalid: {}", .0.join(", "))]
    InvalidFields(Vec<String>),
    /// Unsupported report delimiter.
    #[error("{0:?} is not a valid delimiter")]
    InvalidDelimiter(String),
}

/// A single filter value.
///
/// Values are sent as given; the compiler never converts them. Timestamps are rendered to
/// the API's ISO-8601 format when they are turned into a `FilterValue`.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<FilterValue>),
}

impl FilterValue {
    /// Comma-joined rendering of a list, or the plain rendering of a scalar.
    pub fn joined(&self) -> String {
        match self {
            Self::List(items) => items
                .iter()
                .map(FilterValue::joined)
                .collect::<Vec<_>>()
                .join(","),
            other => other.to_string(),
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Str(value) => f.write_str(value),
            Self::List(_) => f.write_str(&self.joined()),
        }
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for FilterValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for FilterValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u64> for FilterValue {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(value) => Self::Int(value),
            Err(_) => Self::Str(value.to_string()),
        }
    }
}

impl From<f64> for FilterValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for FilterValue {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<DateTime<Utc>> for FilterValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Str(crate::types::timestamp::format(&value))
    }
}

impl From<NaiveDate> for FilterValue {
    fn from(value: NaiveDate) -> Self {
        Self::Str(value.format("%Y-%m-%d").to_string())
    }
}

impl<T: Into<FilterValue>> From<Vec<T>> for FilterValue {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<FilterValue>, const N: usize> From<[T; N]> for FilterValue {
    fn from(values: [T; N]) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<FilterValue>> From<Option<T>> for FilterValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// A modifier suffix that can be appended to a base field.
pub trait Modifier {
    fn suffix(&self) -> &'static str;
}

/// Value comparison, set membership and nullability modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparator {
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,
    In,
    Ni,
    /// Wildcard "like" match.
    As,
    /// Wildcard "unlike" match.
    Un,
    Null,
}

impl Modifier for Comparator {
    fn suffix(&self) -> &'static str {
        match self {
            Self::Eq => "eq",
            Self::Ne => "ne",
            Self::Gt => "gt",
            Self::Ge => "ge",
            Self::Lt => "lt",
            Self::Le => "le",
            Self::In => "in",
            Self::Ni => "ni",
            Self::As => "as",
            Self::Un => "un",
            Self::Null => "null",
        }
    }
}

/// Modifiers for collection-valued fields such as big map tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SetModifier {
    Eq,
    Any,
    All,
}

impl Modifier for SetModifier {
    fn suffix(&self) -> &'static str {
        match self {
            Self::Eq => "eq",
            Self::Any => "any",
            Self::All => "all",
        }
    }
}

/// How `offset` is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OffsetMode {
    /// Number of elements to skip.
    Elements,
    /// Page number, sized by `limit`.
    Page,
    /// Cursor: id of the last item received.
    Cursor,
}

impl Modifier for OffsetMode {
    fn suffix(&self) -> &'static str {
        match self {
            Self::Elements => "el",
            Self::Page => "pg",
            Self::Cursor => "cr",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl Modifier for SortOrder {
    fn suffix(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Caller-supplied filters, kept in insertion order.
///
/// Inserting a key that is already present replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filters {
    entries: Vec<(String, FilterValue)>,
}

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `key = value`, where `key` is `field` or `field__suffix`.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Adds `field__<modifier> = value`.
    pub fn with_modifier(
        self,
        field: &str,
        modifier: impl Modifier,
        value: impl Into<FilterValue>,
    ) -> Self {
        self.with(modifier_key(field, modifier), value)
    }

    /// Sorts by `field` in the given order (`sort.asc=field`).
    pub fn sort(self, order: SortOrder, field: &str) -> Self {
        self.with_modifier("sort", order, field)
    }

    pub fn offset(self, mode: OffsetMode, value: u64) -> Self {
        self.with_modifier("offset", mode, value)
    }

    pub fn limit(self, limit: u32) -> Self {
        self.with("limit", limit)
    }

    /// Sends this call to another tzKT instance (e.g. `https://api.ghostnet.tzkt.io`).
    pub fn domain(self, domain: impl Into<String>) -> Self {
        self.with(DOMAIN_FIELD, domain.into())
    }

    /// Inserts a filter, returning the value it replaced.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<FilterValue>,
    ) -> Option<FilterValue> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&FilterValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    pub fn remove(&mut self, key: &str) -> Option<FilterValue> {
        let index = self.entries.iter().position(|(existing, _)| existing == key)?;
        Some(self.entries.remove(index).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<FilterValue>> FromIterator<(K, V)> for Filters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut filters = Self::new();
        for (key, value) in iter {
            filters.insert(key, value);
        }
        filters
    }
}

/// Builds the filter key `field__suffix`.
pub fn modifier_key(field: &str, modifier: impl Modifier) -> String {
    format!("{field}{MODIFIER_DELIMITER}{}", modifier.suffix())
}

/// Wire-ready parameters produced by [`compile`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompiledQuery {
    /// Wire parameter name to value. Ignored keys appear here under their original key.
    pub params: BTreeMap<String, FilterValue>,
    /// Base field to the wire names it produced, in input order.
    pub expansions: BTreeMap<String, Vec<String>>,
}

impl CompiledQuery {
    /// Comma-joins every collection value produced by `base`.
    pub fn join_lists(&mut self, base: &str) {
        let Some(wire_names) = self.expansions.get(base) else {
            return;
        };
        for wire_name in wire_names {
            if let Some(value) = self.params.get_mut(wire_name) {
                if value.is_list() {
                    *value = FilterValue::Str(value.joined());
                }
            }
        }
    }

    /// Removes a parameter, typically an ignored key consumed by the caller.
    pub fn take(&mut self, key: &str) -> Option<FilterValue> {
        self.params.remove(key)
    }

    /// Removes every parameter whose key has `base` as its base field, bare or suffixed.
    pub fn take_base(&mut self, base: &str) -> Vec<(String, FilterValue)> {
        let keys: Vec<String> = self
            .params
            .keys()
            .filter(|key| base_field(key) == base)
            .cloned()
            .collect();
        keys.into_iter()
            .filter_map(|key| self.params.remove(&key).map(|value| (key, value)))
            .collect()
    }

    /// Adds a parameter that did not come from the filters.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FilterValue>) {
        self.params.insert(key.into(), value.into());
    }

    /// Renders the parameters as query-string pairs. Lists that were not joined repeat
    /// their key once per element.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(self.params.len());
        for (name, value) in &self.params {
            match value {
                FilterValue::List(items) => {
                    pairs.extend(items.iter().map(|item| (name.clone(), item.to_string())));
                }
                other => pairs.push((name.clone(), other.to_string())),
            }
        }
        pairs
    }
}

/// The part of a filter key before its first modifier suffix.
fn base_field(key: &str) -> &str {
    key.split(MODIFIER_DELIMITER).next().unwrap_or(key)
}

/// Compiles `filters` into wire parameters.
///
/// Each key's base field must appear in `whitelist` or `ignore`; [`DOMAIN_FIELD`] is always
/// ignored. Ignored keys pass through unchanged and are not tracked in
/// [`CompiledQuery::expansions`]. Every offending base field is reported in one
/// [`ParameterError::InvalidFields`].
pub fn compile(
    filters: &Filters,
    whitelist: &[&str],
    ignore: &[&str],
) -> Result<CompiledQuery, ParameterError> {
    let mut query = CompiledQuery::default();
    let mut invalid: Vec<String> = Vec::new();

    for (key, value) in filters.iter() {
        let parts: Vec<&str> = key.split(MODIFIER_DELIMITER).collect();
        let base = parts[0];

        if base == DOMAIN_FIELD || ignore.contains(&base) {
            query.params.insert(key.to_string(), value.clone());
            continue;
        }

        if !whitelist.contains(&base) {
            if !invalid.iter().any(|field| field == base) {
                invalid.push(base.to_string());
            }
            continue;
        }

        let wire_name = parts.join(WIRE_DELIMITER);
        query
            .expansions
            .entry(base.to_string())
            .or_default()
            .push(wire_name.clone());
        query.params.insert(wire_name, value.clone());
    }

    if !invalid.is_empty() {
        return Err(ParameterError::InvalidFields(invalid));
    }
    Ok(query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const LIST_WHITELIST: &[&str] = &["level", "sort", "offset", "limit"];

    #[test]
    fn compiles_comparator_and_bare_fields() {
        let filters = Filters::new().with("level__gt", 100).with("sort", "id");
        let query = compile(&filters, LIST_WHITELIST, &[]).unwrap();

        assert_eq!(query.params.len(), 2);
        assert_eq!(query.params["level.gt"], FilterValue::Int(100));
        assert_eq!(query.params["sort"], FilterValue::Str("id".into()));
        assert_eq!(query.expansions["level"], vec!["level.gt".to_string()]);
        assert_eq!(query.expansions["sort"], vec!["sort".to_string()]);
    }

    #[test]
    fn keeps_every_suffix_on_the_same_field() {
        let filters = Filters::new()
            .with_modifier("level", Comparator::Gt, 10)
            .with_modifier("level", Comparator::Lt, 20);
        let query = compile(&filters, LIST_WHITELIST, &[]).unwrap();

        assert_eq!(query.params["level.gt"], FilterValue::Int(10));
        assert_eq!(query.params["level.lt"], FilterValue::Int(20));
        assert_eq!(query.expansions["level"], vec!["level.gt", "level.lt"]);
    }

    #[test]
    fn take_base_removes_bare_and_suffixed_keys() {
        let filters = Filters::new()
            .with("domain", "https://api.ghostnet.tzkt.io")
            .with("domain__eq", "x")
            .with("domainer", 1)
            .with("level__gt", 3);
        let mut query = compile(&filters, &["level", "domainer"], &[]).unwrap();

        let taken = query.take_base(DOMAIN_FIELD);
        assert_eq!(
            taken,
            vec![
                ("domain".to_string(), FilterValue::Str("https://api.ghostnet.tzkt.io".into())),
                ("domain__eq".to_string(), FilterValue::Str("x".into())),
            ]
        );
        assert_eq!(query.params.len(), 2);
        assert!(query.params.contains_key("domainer"));
        assert!(query.params.contains_key("level.gt"));
    }

    #[test]
    fn rejects_unknown_field() {
        let filters = Filters::new().with("bogus", 1);
        let err = compile(&filters, &["level"], &[]).unwrap_err();
        assert_eq!(err, ParameterError::InvalidFields(vec!["bogus".into()]));
        assert!(err.to_string().contains("bogus"));
    }

    #[test]
    fn reports_every_invalid_field_once() {
        let filters = Filters::new()
            .with("bogus__gt", 1)
            .with("level", 5)
            .with("other", "x")
            .with("bogus__lt", 9);
        let err = compile(&filters, &["level"], &[]).unwrap_err();
        assert_eq!(
            err,
            ParameterError::InvalidFields(vec!["bogus".into(), "other".into()])
        );
        assert_eq!(
            err.to_string(),
            "the following parameters are invalid: bogus, other"
        );
    }

    #[test]
    fn domain_is_passed_through_untracked() {
        let filters = Filters::new()
            .domain("https://custom.tzkt.io")
            .with("level", 5);
        let query = compile(&filters, &["level"], &[DOMAIN_FIELD]).unwrap();

        assert_eq!(
            query.params[DOMAIN_FIELD],
            FilterValue::Str("https://custom.tzkt.io".into())
        );
        assert_eq!(query.params["level"], FilterValue::Int(5));
        assert!(!query.expansions.contains_key(DOMAIN_FIELD));
    }

    #[test]
    fn ignored_keys_keep_their_suffix_and_skip_validation() {
        let filters = Filters::new().with("micheline__eq", 1).with("domain", "x");
        let query = compile(&filters, &[], &["micheline"]).unwrap();

        assert_eq!(query.params["micheline__eq"], FilterValue::Int(1));
        assert_eq!(query.params["domain"], FilterValue::Str("x".into()));
        assert!(query.expansions.is_empty());
    }

    #[test]
    fn collections_are_left_for_the_caller_to_join() {
        let filters = Filters::new().with_modifier("tags", SetModifier::Any, ["a", "b"]);
        let mut query = compile(&filters, &["tags"], &[]).unwrap();

        assert_eq!(
            query.params["tags.any"],
            FilterValue::List(vec!["a".into(), "b".into()])
        );
        assert_eq!(query.expansions["tags"], vec!["tags.any"]);

        query.join_lists("tags");
        assert_eq!(query.params["tags.any"], FilterValue::Str("a,b".into()));
    }

    #[test]
    fn compiling_twice_is_stable() {
        let filters = Filters::new()
            .with("level__ge", 1)
            .offset(OffsetMode::Page, 3)
            .limit(50);
        let first = compile(&filters, LIST_WHITELIST, &[]).unwrap();
        let second = compile(&filters, LIST_WHITELIST, &[]).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.params["offset.pg"], FilterValue::Int(3));
    }

    #[test]
    fn unjoined_lists_repeat_their_key() {
        let mut query = CompiledQuery::default();
        query.insert("type", vec!["transaction", "delegation"]);
        query.insert("limit", 2);
        assert_eq!(
            query.to_query_pairs(),
            vec![
                ("limit".to_string(), "2".to_string()),
                ("type".to_string(), "transaction".to_string()),
                ("type".to_string(), "delegation".to_string()),
            ]
        );
    }

    #[test]
    fn reinserting_a_key_replaces_it_in_place() {
        let mut filters = Filters::new().with("a", 1).with("b", 2);
        assert_eq!(filters.insert("a", 3), Some(FilterValue::Int(1)));
        let keys: Vec<_> = filters.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(filters.remove("a"), Some(FilterValue::Int(3)));
        assert_eq!(filters.len(), 1);
    }

    #[test]
    fn timestamps_render_in_wire_format() {
        let at = Utc.with_ymd_and_hms(2021, 3, 4, 5, 6, 7).unwrap();
        assert_eq!(
            FilterValue::from(at),
            FilterValue::Str("2021-03-04T05:06:07Z".into())
        );
        let day = NaiveDate::from_ymd_opt(2021, 3, 4).unwrap();
        assert_eq!(FilterValue::from(day), FilterValue::Str("2021-03-04".into()));
    }

    #[test]
    fn modifier_enums_match_suffix_vocabularies() {
        let comparators = [
            Comparator::Eq,
            Comparator::Ne,
            Comparator::Gt,
            Comparator::Ge,
            Comparator::Lt,
            Comparator::Le,
            Comparator::In,
            Comparator::Ni,
            Comparator::Un,
            Comparator::As,
            Comparator::Null,
        ];
        let suffixes: Vec<_> = comparators.iter().map(Modifier::suffix).collect();
        assert_eq!(suffixes, COMPARATOR_SUFFIXES);

        let sets: Vec<_> = [SetModifier::Eq, SetModifier::Any, SetModifier::All]
            .iter()
            .map(Modifier::suffix)
            .collect();
        assert_eq!(sets, SET_SUFFIXES);

        let offsets: Vec<_> = [OffsetMode::Elements, OffsetMode::Page, OffsetMode::Cursor]
            .iter()
            .map(Modifier::suffix)
            .collect();
        assert_eq!(offsets, OFFSET_SUFFIXES);

        let sorts: Vec<_> = [SortOrder::Asc, SortOrder::Desc]
            .iter()
            .map(Modifier::suffix)
            .collect();
        assert_eq!(sorts, SORT_SUFFIXES);
    }

    #[test]
    fn scalar_rendering() {
        assert_eq!(FilterValue::from(true).to_string(), "true");
        assert_eq!(FilterValue::from(u64::MAX).to_string(), u64::MAX.to_string());
        assert_eq!(FilterValue::from(None::<i64>).to_string(), "");
        assert_eq!(FilterValue::from(vec![1, 2, 3]).joined(), "1,2,3");
    }
}
