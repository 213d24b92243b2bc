use std::fmt;

use percent_encoding::{AsciiSet, CONTROLS, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;
use serde::ser::{SerializeStruct, Serializer};
use url::Url;

/// Bytes escaped inside a query name or value. Brackets stay readable so
/// keys like `pickup[latitude]` keep the shape the apps document.
const QUERY_COMPONENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Only RFC 3986 unreserved characters survive in a path segment.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

pub fn escape_path_segment(raw: &str) -> String {
    utf8_percent_encode(raw, PATH_SEGMENT).to_string()
}

fn escape_query_component(raw: &str) -> String {
    utf8_percent_encode(raw, QUERY_COMPONENT).to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryParam {
    pub name: &'static str,
    pub value: String,
}

/// A built deep link: scheme, path and ordered query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeepLink {
    pub scheme: &'static str,
    pub path: String,
    pub query: Vec<QueryParam>,
}

impl DeepLink {
    pub fn new(scheme: &'static str, path: impl Into<String>) -> Self {
        Self {
            scheme,
            path: path.into(),
            query: Vec::new(),
        }
    }

    pub fn push(&mut self, name: &'static str, value: impl Into<String>) {
        self.query.push(QueryParam {
            name,
            value: value.into(),
        });
    }

    /// Appends the parameter only when a value exists.
    pub fn push_opt<V: Into<String>>(&mut self, name: &'static str, value: Option<V>) {
        if let Some(value) = value {
            self.push(name, value);
        }
    }

    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|param| param.name == name)
            .map(|param| param.value.as_str())
    }

    pub fn has_query(&self, name: &str) -> bool {
        self.query.iter().any(|param| param.name == name)
    }

    pub fn query_string(&self) -> String {
        self.query
            .iter()
            .map(|param| {
                format!(
                    "{}={}",
                    escape_query_component(param.name),
                    escape_query_component(&param.value)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }

    pub fn to_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.to_string())
    }
}

impl fmt::Display for DeepLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", self.scheme, self.path)?;
        if !self.query.is_empty() {
            write!(f, "?{}", self.query_string())?;
        }
        Ok(())
    }
}

impl Serialize for DeepLink {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("DeepLink", 4)?;
        state.serialize_field("scheme", self.scheme)?;
        state.serialize_field("path", &self.path)?;
        state.serialize_field("query", &self.query)?;
        state.serialize_field("url", &self.to_string())?;
        state.end()
    }
}
