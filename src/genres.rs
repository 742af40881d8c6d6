//! Genre selections and their URL query representation.
//!
//! A [`GenreSelection`] is the ordered list of checked genres. It travels from the
//! form page to the display page only through the query string, as repeated
//! `genre=<value>` pairs, so encoding and decoding here must be exact inverses.

use std::fmt;

use dioxus::router::FromQuery;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use serde::{Deserialize, Serialize};

/// `name` attribute shared by every genre checkbox on the form.
pub const FORM_FIELD: &str = "genres";

/// Query key carrying one selected genre.
pub const QUERY_KEY: &str = "genre";

/// Characters left alone by `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenreSelection(Vec<String>);

impl GenreSelection {
    pub fn new(genres: Vec<String>) -> Self {
        Self(genres)
    }

    /// Keeps every option whose checkbox is checked, in option order.
    pub fn from_checked(options: &[String], checked: &[bool]) -> Self {
        options
            .iter()
            .zip(checked)
            .filter(|(_, c)| **c)
            .map(|(o, _)| o.clone())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Serializes the selection as `genre=a&genre=b`, one pair per genre.
    pub fn to_query_string(&self) -> String {
        self.0
            .iter()
            .map(|g| format!("{QUERY_KEY}={}", utf8_percent_encode(g, COMPONENT)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Reads the selection out of a full route string such as
    /// `/selected_genres_page.html?genre=a&genre=b#top`.
    ///
    /// Returns `None` when there is no query at all.
    pub fn from_location(location: &str) -> Option<Self> {
        let location = location.split_once('#').map_or(location, |(l, _)| l);
        let (_, query) = location.split_once('?')?;
        Some(Self::parse_query(query))
    }

    /// Reads every `genre` pair out of a raw query string.
    ///
    /// Parsing is lenient in the way `URLSearchParams` is: empty pieces are
    /// skipped, a pair without `=` has an empty value, `+` is a space, broken
    /// percent escapes are kept literally and invalid UTF-8 is replaced.
    pub fn parse_query(raw: &str) -> Self {
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        raw.split('&')
            .filter(|piece| !piece.is_empty())
            .filter_map(|piece| {
                let (key, value) = piece.split_once('=').unwrap_or((piece, ""));
                if decode_component(key) == QUERY_KEY {
                    Some(decode_component(value))
                } else {
                    None
                }
            })
            .collect()
    }
}

fn decode_component(s: &str) -> String {
    let s = s.replace('+', " ");
    percent_decode_str(&s).decode_utf8_lossy().into_owned()
}

impl FromIterator<String> for GenreSelection {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for GenreSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_query_string())
    }
}

/// The router decodes the query once before calling this, so escaped `&`, `+`
/// and `%` inside values are already merged into the text. Pages that need the
/// exact values read the raw location with [`GenreSelection::from_location`].
impl FromQuery for GenreSelection {
    fn from_query(query: &str) -> Self {
        Self::parse_query(query)
    }
}
