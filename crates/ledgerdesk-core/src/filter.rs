//! Filter state and the derivation of a table view from a record list.
//!
//! Every active dimension must match (logical AND); an inactive dimension
//! passes everything. A dimension the record type does not carry, such as a
//! date on a safe, never excludes a record.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Exposes the fields of a record that filters can look at.
pub trait Filterable {
    type Status: Copy + PartialEq;

    /// Fields the free-text search looks into.
    fn search_fields(&self) -> Vec<&str>;

    fn status(&self) -> Option<Self::Status> {
        None
    }

    fn date(&self) -> Option<NaiveDate> {
        None
    }

    fn amount(&self) -> Option<Decimal> {
        None
    }

    fn currency(&self) -> Option<&str> {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "S: Deserialize<'de>"))]
pub struct FilterState<S> {
    pub search: Option<String>,
    #[serde(default)]
    pub statuses: Vec<S>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub min_amount: Option<Decimal>,
    pub max_amount: Option<Decimal>,
    #[serde(default)]
    pub currencies: Vec<String>,
}

impl<S> Default for FilterState<S> {
    fn default() -> Self {
        Self {
            search: None,
            statuses: Vec::new(),
            date_from: None,
            date_to: None,
            min_amount: None,
            max_amount: None,
            currencies: Vec::new(),
        }
    }
}

impl<S: Copy + PartialEq> FilterState<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search = Some(query.into());
        self
    }

    pub fn with_statuses(mut self, statuses: impl IntoIterator<Item = S>) -> Self {
        self.statuses = statuses.into_iter().collect();
        self
    }

    pub fn between(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.date_from = from;
        self.date_to = to;
        self
    }

    pub fn amount_between(mut self, min: Option<Decimal>, max: Option<Decimal>) -> Self {
        self.min_amount = min;
        self.max_amount = max;
        self
    }

    pub fn with_currencies<I, C>(mut self, currencies: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<String>,
    {
        self.currencies = currencies
            .into_iter()
            .map(Into::<String>::into)
            .filter_map(|code| non_blank(&code).map(str::to_string))
            .collect();
        self
    }

    /// Builds filter state from raw user input. Anything that does not parse is
    /// left inactive.
    pub fn from_input(input: &FilterInput<S>) -> Self {
        Self {
            search: non_blank(&input.search).map(str::to_string),
            statuses: input.statuses.clone(),
            date_from: parse_date(&input.date_from),
            date_to: parse_date(&input.date_to),
            min_amount: parse_amount(&input.min_amount),
            max_amount: parse_amount(&input.max_amount),
            currencies: input
                .currencies
                .iter()
                .filter_map(|code| non_blank(code))
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.search_needle().is_none()
            && self.statuses.is_empty()
            && self.date_from.is_none()
            && self.date_to.is_none()
            && self.min_amount.is_none()
            && self.max_amount.is_none()
            && self.currencies.is_empty()
    }

    pub fn matches<R>(&self, record: &R) -> bool
    where
        R: Filterable<Status = S>,
    {
        self.matches_search(record)
            && self.matches_status(record)
            && self.matches_date(record)
            && self.matches_amount(record)
            && self.matches_currency(record)
    }

    fn search_needle(&self) -> Option<String> {
        self.search
            .as_deref()
            .and_then(non_blank)
            .map(str::to_lowercase)
    }

    fn matches_search<R: Filterable<Status = S>>(&self, record: &R) -> bool {
        let Some(needle) = self.search_needle() else {
            return true;
        };
        record
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    fn matches_status<R: Filterable<Status = S>>(&self, record: &R) -> bool {
        if self.statuses.is_empty() {
            return true;
        }
        match record.status() {
            Some(status) => self.statuses.contains(&status),
            None => true,
        }
    }

    fn matches_date<R: Filterable<Status = S>>(&self, record: &R) -> bool {
        let Some(date) = record.date() else {
            return true;
        };
        self.date_from.is_none_or(|from| date >= from) && self.date_to.is_none_or(|to| date <= to)
    }

    fn matches_amount<R: Filterable<Status = S>>(&self, record: &R) -> bool {
        let Some(amount) = record.amount() else {
            return true;
        };
        self.min_amount.is_none_or(|min| amount >= min)
            && self.max_amount.is_none_or(|max| amount <= max)
    }

    fn matches_currency<R: Filterable<Status = S>>(&self, record: &R) -> bool {
        if self.currencies.is_empty() {
            return true;
        }
        match record.currency() {
            Some(currency) => self
                .currencies
                .iter()
                .any(|code| code.trim().eq_ignore_ascii_case(currency)),
            None => true,
        }
    }
}

/// Filter values exactly as typed into the page's filter bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "S: Deserialize<'de>"))]
pub struct FilterInput<S> {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub statuses: Vec<S>,
    #[serde(default)]
    pub date_from: String,
    #[serde(default)]
    pub date_to: String,
    #[serde(default)]
    pub min_amount: String,
    #[serde(default)]
    pub max_amount: String,
    #[serde(default)]
    pub currencies: Vec<String>,
}

impl<S> Default for FilterInput<S> {
    fn default() -> Self {
        Self {
            search: String::new(),
            statuses: Vec::new(),
            date_from: String::new(),
            date_to: String::new(),
            min_amount: String::new(),
            max_amount: String::new(),
            currencies: Vec::new(),
        }
    }
}

/// Returns the records that pass every active filter, in their original order.
pub fn derive<R>(records: &[R], filters: &FilterState<R::Status>) -> Vec<R>
where
    R: Filterable + Clone,
{
    if filters.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|record| filters.matches(*record))
        .cloned()
        .collect()
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    non_blank(raw).and_then(|value| NaiveDate::parse_from_str(value, DATE_INPUT_FORMAT).ok())
}

/// Parses an amount typed with either `.` or `,` as the decimal separator.
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    non_blank(raw).and_then(|value| Decimal::from_str(&value.replace(',', ".")).ok())
}

fn non_blank(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
