//! Request DTOs for the menu cache API
//!
//! Defines the query parameters of the menu endpoints and their validated form.

use std::fmt;

use serde::Deserialize;

use crate::error::MenuError;

// == Day ==
/// Which of the two cached days a request is asking for.
///
/// Any query value other than `tomorrow` (including absence) selects `Today`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Day {
    #[default]
    Today,
    Tomorrow,
}

impl Day {
    /// Parses the optional `day` query parameter.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("tomorrow") => Day::Tomorrow,
            _ => Day::Today,
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Day::Today => write!(f, "today"),
            Day::Tomorrow => write!(f, "tomorrow"),
        }
    }
}

// == Menu Query ==
/// Raw query parameters of `GET /menu` and `GET /menu/single`.
///
/// All fields are optional at the wire level; `into_lookup` enforces the
/// required ones so that a missing parameter is a 400, not a deserialization
/// failure.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct MenuQuery {
    /// Opaque location identifier, passed through to the upstream path
    pub location: Option<String>,
    /// ISO `YYYY-MM-DD` date
    pub date: Option<String>,
    /// Optional opaque period identifier
    pub period: Option<String>,
    /// `today` or `tomorrow`; anything else is treated as `today`
    pub day: Option<String>,
}

impl MenuQuery {
    /// Validates the query into a [`LookupRequest`].
    ///
    /// `location` and `date` must be present and non-empty; their absence is
    /// a client error, not a cache miss.
    pub fn into_lookup(self) -> Result<LookupRequest, MenuError> {
        let location = self.location.filter(|s| !s.is_empty());
        let date = self.date.filter(|s| !s.is_empty());

        match (location, date) {
            (Some(location), Some(date)) => Ok(LookupRequest {
                location,
                date,
                period: self.period.filter(|s| !s.is_empty()),
                day: Day::from_param(self.day.as_deref()),
            }),
            _ => Err(MenuError::MissingParams),
        }
    }
}

// == Lookup Request ==
/// A validated menu lookup.
#[derive(Debug, Clone)]
pub struct LookupRequest {
    /// Opaque location identifier
    pub location: String,
    /// ISO `YYYY-MM-DD` date
    pub date: String,
    /// Optional opaque period identifier
    pub period: Option<String>,
    /// Which day's slot the caller wants
    pub day: Day,
}
