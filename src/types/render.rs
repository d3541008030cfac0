//! Structured rendering of error payloads.
//!
//! A [`Renderable`] payload writes itself into a [`ResponseBody`], an ordered
//! set of named fields. The body is the hand-off point to whatever turns a
//! failure into a wire response: with the `serde` feature it serializes as a
//! map, otherwise its [`Display`](core::fmt::Display) gives a compact line.
use core::fmt;

use smallvec::SmallVec;

use crate::types::alloc_type::{Box, Cow, String, Text, Vec};
use crate::types::StatusCode;

#[cfg(feature = "serde")]
use serde::ser::SerializeMap;
#[cfg(feature = "serde")]
use serde::{Serialize, Serializer};

/// A value that can describe itself as a response body.
///
/// # Examples
///
/// ```
/// use validation_outcome::{Renderable, ResponseBody};
///
/// struct Locked(&'static str);
///
/// impl Renderable for Locked {
///     fn render(&self, body: &mut ResponseBody) {
///         body.insert("reason", "resource is locked");
///         body.insert("resource", self.0);
///     }
/// }
///
/// let body = Locked("users").to_body();
/// assert_eq!(body.to_string(), "reason=resource is locked, resource=users");
/// ```
pub trait Renderable {
    /// Writes this value's fields into `body`.
    fn render(&self, body: &mut ResponseBody);

    /// Renders into a fresh body.
    fn to_body(&self) -> ResponseBody {
        let mut body = ResponseBody::new();
        self.render(&mut body);
        body
    }
}

impl<T: Renderable + ?Sized> Renderable for &T {
    #[inline]
    fn render(&self, body: &mut ResponseBody) {
        (**self).render(body)
    }
}

impl<T: Renderable + ?Sized> Renderable for Box<T> {
    #[inline]
    fn render(&self, body: &mut ResponseBody) {
        (**self).render(body)
    }
}

impl Renderable for str {
    fn render(&self, body: &mut ResponseBody) {
        body.insert("message", self);
    }
}

impl Renderable for String {
    fn render(&self, body: &mut ResponseBody) {
        self.as_str().render(body)
    }
}

impl Renderable for Cow<'_, str> {
    fn render(&self, body: &mut ResponseBody) {
        (**self).render(body)
    }
}

impl Renderable for ResponseBody {
    fn render(&self, body: &mut ResponseBody) {
        for (key, value) in &self.fields {
            body.insert(key.clone(), value.clone());
        }
    }
}

/// A single field value inside a [`ResponseBody`].
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum BodyValue {
    Text(String),
    Integer(i64),
    Bool(bool),
    List(Vec<String>),
    Object(Box<ResponseBody>),
}

impl fmt::Display for BodyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BodyValue::Text(text) => f.write_str(text),
            BodyValue::Integer(n) => write!(f, "{n}"),
            BodyValue::Bool(b) => write!(f, "{b}"),
            BodyValue::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    f.write_str(item)?;
                }
                f.write_str("]")
            }
            BodyValue::Object(body) => write!(f, "{{{body}}}"),
        }
    }
}

impl From<&str> for BodyValue {
    fn from(value: &str) -> Self {
        BodyValue::Text(value.into())
    }
}

impl From<String> for BodyValue {
    fn from(value: String) -> Self {
        BodyValue::Text(value)
    }
}

impl From<Text> for BodyValue {
    fn from(value: Text) -> Self {
        BodyValue::Text(value.into_owned())
    }
}

impl From<i64> for BodyValue {
    fn from(value: i64) -> Self {
        BodyValue::Integer(value)
    }
}

impl From<u16> for BodyValue {
    fn from(value: u16) -> Self {
        BodyValue::Integer(i64::from(value))
    }
}

impl From<bool> for BodyValue {
    fn from(value: bool) -> Self {
        BodyValue::Bool(value)
    }
}

impl From<Vec<String>> for BodyValue {
    fn from(value: Vec<String>) -> Self {
        BodyValue::List(value)
    }
}

impl From<ResponseBody> for BodyValue {
    fn from(value: ResponseBody) -> Self {
        BodyValue::Object(Box::new(value))
    }
}

/// Ordered key/value fields describing a failure.
///
/// Inserting a key that is already present replaces its value without
/// moving it.
///
/// # Examples
///
/// ```
/// use validation_outcome::ResponseBody;
///
/// let mut body = ResponseBody::new();
/// body.insert("status", "BAD_REQUEST");
/// body.insert("reason", "first");
/// body.insert("reason", "second");
///
/// assert_eq!(body.len(), 2);
/// assert_eq!(body.to_string(), "status=BAD_REQUEST, reason=second");
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash, Debug)]
pub struct ResponseBody {
    fields: SmallVec<[(Text, BodyValue); 4]>,
}

impl ResponseBody {
    /// Creates an empty body.
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`, replacing an existing value in place.
    pub fn insert<K, V>(&mut self, key: K, value: V) -> &mut Self
    where
        K: Into<Text>,
        V: Into<BodyValue>,
    {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((key, value)),
        }
        self
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<Text>,
        V: Into<BodyValue>,
    {
        self.insert(key, value);
        self
    }

    /// Looks a field up by name.
    ///
    /// # Examples
    ///
    /// ```
    /// use validation_outcome::{BodyValue, ResponseBody};
    ///
    /// let body = ResponseBody::new().with("status", 404u16);
    /// assert_eq!(body.get("status"), Some(&BodyValue::Integer(404)));
    /// assert_eq!(body.get("reason"), None);
    /// ```
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&BodyValue> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    /// `true` if a field named `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Removes `key`, keeping the order of the remaining fields.
    pub fn remove(&mut self, key: &str) -> Option<BodyValue> {
        let index = self.fields.iter().position(|(existing, _)| existing == key)?;
        Some(self.fields.remove(index).1)
    }

    /// Number of fields.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// `true` if the body has no fields.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BodyValue)> {
        self.fields.iter().map(|(key, value)| (&**key, value))
    }
}

impl fmt::Display for ResponseBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}={value}")?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl Serialize for ResponseBody {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// How the status of a rejection is written into its body.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusStyle {
    /// Upper snake case name, e.g. `"BAD_REQUEST"`.
    #[default]
    Name,
    /// Numeric code, e.g. `400`.
    Code,
}

/// Controls how a [`Rejection`](crate::Rejection) becomes a [`ResponseBody`].
///
/// # Examples
///
/// ```
/// use validation_outcome::{RenderConfig, Rejection, StatusCode};
///
/// let rejection = Rejection::new(StatusCode::NotFound, "no such user");
///
/// let named = rejection.render_with(&RenderConfig::default());
/// assert_eq!(named.to_string(), "status=NOT_FOUND, message=no such user");
///
/// let numeric = rejection.render_with(&RenderConfig::numeric());
/// assert_eq!(numeric.to_string(), "status=404, message=no such user");
///
/// let bare = rejection.render_with(&RenderConfig::payload_only());
/// assert_eq!(bare.to_string(), "message=no such user");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Whether the status is written at all.
    pub include_status: bool,
    /// How the status value is spelled.
    pub status_style: StatusStyle,
    /// Field name the status is written under. Payload fields never replace it.
    pub status_key: Text,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { include_status: true, status_style: StatusStyle::Name, status_key: "status".into() }
    }
}

impl RenderConfig {
    /// Status written as its numeric code under `status`.
    #[inline]
    pub fn numeric() -> Self {
        Self { status_style: StatusStyle::Code, ..Default::default() }
    }

    /// No status field, only the payload's own fields.
    #[inline]
    pub fn payload_only() -> Self {
        Self { include_status: false, ..Default::default() }
    }

    /// Writes `status` into `body` according to this configuration.
    pub fn write_status(&self, status: StatusCode, body: &mut ResponseBody) {
        if !self.include_status {
            return;
        }
        let key = self.status_key.clone();
        match self.status_style {
            StatusStyle::Name => body.insert(key, status.name()),
            StatusStyle::Code => body.insert(key, status.as_u16()),
        };
    }
}
