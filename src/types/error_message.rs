//! The default error payload for validation failures.
use core::fmt;

use smallvec::SmallVec;

use crate::types::alloc_type::{String, Text, Vec};
use crate::types::render::{Renderable, ResponseBody};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const INVALID_CONFIGURATION: &str = "Invalid configuration";

/// Values attached to an [`ErrorMessage`] under one detail key.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum DetailValue {
    /// Offending key names, rendered as `{"keys": "a,b"}`.
    Keys(Vec<String>),
    /// Key to expected type, rendered as `{"a": "String expected"}`.
    ///
    /// Each key appears once; a later expectation for the same key replaces
    /// the earlier one.
    Types(Vec<(String, String)>),
}

impl DetailValue {
    fn merge(&mut self, other: DetailValue) {
        match (self, other) {
            (DetailValue::Keys(existing), DetailValue::Keys(more)) => existing.extend(more),
            (DetailValue::Types(existing), DetailValue::Types(more)) => {
                for (key, expected) in more {
                    insert_type(existing, key, expected);
                }
            }
            (slot, other) => *slot = other.normalized(),
        }
    }

    fn normalized(self) -> Self {
        match self {
            DetailValue::Types(pairs) => {
                let mut unique = Vec::with_capacity(pairs.len());
                for (key, expected) in pairs {
                    insert_type(&mut unique, key, expected);
                }
                DetailValue::Types(unique)
            }
            keys => keys,
        }
    }

    fn to_body(&self) -> ResponseBody {
        let mut body = ResponseBody::new();
        match self {
            DetailValue::Keys(keys) => {
                body.insert("keys", keys.join(","));
            }
            DetailValue::Types(pairs) => {
                for (key, expected) in pairs {
                    body.insert(Text::Owned(key.clone()), expected.as_str());
                }
            }
        }
        body
    }
}

fn insert_type(pairs: &mut Vec<(String, String)>, key: String, expected: String) {
    match pairs.iter_mut().find(|(existing, _)| *existing == key) {
        Some((_, slot)) => *slot = expected,
        None => pairs.push((key, expected)),
    }
}

/// Renderable description of why a validation stage rejected its input.
///
/// Carries a human readable `reason` and any number of named details. Details
/// added under a key that already exists are merged into it. A detail named
/// `reason` never replaces the reason text in the rendered body.
///
/// # Examples
///
/// ```
/// use validation_outcome::{ErrorMessage, Renderable};
///
/// let message = ErrorMessage::invalid_keys(["colour", "size"])
///     .with_detail("missing_mandatory_keys", ["name"]);
///
/// assert_eq!(message.reason(), "Invalid configuration");
/// assert_eq!(
///     message.to_body().to_string(),
///     "reason=Invalid configuration, invalid_keys={keys=colour,size}, missing_mandatory_keys={keys=name}"
/// );
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct ErrorMessage {
    reason: Text,
    details: SmallVec<[(Text, DetailValue); 2]>,
}

impl ErrorMessage {
    /// Creates a message with no details.
    ///
    /// # Arguments
    ///
    /// * `reason` - Human readable summary of the failure
    ///
    /// # Examples
    ///
    /// ```
    /// use validation_outcome::ErrorMessage;
    ///
    /// let message = ErrorMessage::new("Resource is reserved.");
    /// assert_eq!(message.reason(), "Resource is reserved.");
    /// assert_eq!(message.details().count(), 0);
    /// ```
    #[inline]
    pub fn new(reason: impl Into<Text>) -> Self {
        Self { reason: reason.into(), details: SmallVec::new() }
    }

    /// Names keys the request must not contain.
    pub fn invalid_keys<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self::new(INVALID_CONFIGURATION).with_detail("invalid_keys", keys)
    }

    /// Names keys the request must contain but does not.
    pub fn missing_mandatory_keys<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self::new(INVALID_CONFIGURATION).with_detail("missing_mandatory_keys", keys)
    }

    /// Names keys whose values have the wrong type, with the expected type.
    ///
    /// A key listed twice keeps its last expectation.
    ///
    /// # Arguments
    ///
    /// * `pairs` - Key and expected type, e.g. `("hosts", "Array expected")`
    ///
    /// # Examples
    ///
    /// ```
    /// use validation_outcome::{ErrorMessage, Renderable};
    ///
    /// let message = ErrorMessage::wrong_datatypes([("hosts", "Array expected")]);
    /// assert_eq!(
    ///     message.to_body().to_string(),
    ///     "reason=Invalid configuration, wrong_datatypes={hosts=Array expected}"
    /// );
    /// ```
    pub fn wrong_datatypes<I, K, T>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
        T: Into<String>,
    {
        let pairs = pairs.into_iter().map(|(key, expected)| (key.into(), expected.into()));
        Self::new(INVALID_CONFIGURATION)
            .with_detail_value("wrong_datatypes", DetailValue::Types(pairs.collect()))
    }

    /// The request body could not be parsed at all.
    ///
    /// # Examples
    ///
    /// ```
    /// use validation_outcome::ErrorMessage;
    ///
    /// assert_eq!(ErrorMessage::body_not_parseable().reason(), "Could not parse content of request.");
    /// ```
    pub fn body_not_parseable() -> Self {
        Self::new("Could not parse content of request.")
    }

    /// The action needs a request body and none was sent.
    pub fn payload_mandatory() -> Self {
        Self::new("Request body required for this action.")
    }

    /// The action takes no request body but one was sent.
    pub fn payload_not_allowed() -> Self {
        Self::new("Request body not allowed for this action.")
    }

    /// Adds key names under `key`.
    pub fn with_detail<I, K>(self, key: impl Into<Text>, values: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        let keys = values.into_iter().map(Into::into).collect();
        self.with_detail_value(key, DetailValue::Keys(keys))
    }

    /// Adds an arbitrary detail under `key`, merging with any existing one.
    ///
    /// Values of the same kind are combined. A value of a different kind
    /// replaces what was there.
    ///
    /// # Arguments
    ///
    /// * `key` - Detail name, rendered as a nested object
    /// * `value` - The detail to add
    ///
    /// # Examples
    ///
    /// ```
    /// use validation_outcome::{DetailValue, ErrorMessage};
    ///
    /// let message = ErrorMessage::new("Invalid configuration")
    ///     .with_detail_value("types", DetailValue::Types(vec![("a".into(), "Array expected".into())]))
    ///     .with_detail_value("types", DetailValue::Types(vec![("b".into(), "String expected".into())]));
    ///
    /// assert_eq!(
    ///     message.detail("types"),
    ///     Some(&DetailValue::Types(vec![
    ///         ("a".into(), "Array expected".into()),
    ///         ("b".into(), "String expected".into()),
    ///     ]))
    /// );
    /// ```
    pub fn with_detail_value(mut self, key: impl Into<Text>, value: DetailValue) -> Self {
        let key = key.into();
        match self.details.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => slot.merge(value),
            None => self.details.push((key, value.normalized())),
        }
        self
    }

    /// The reason text.
    #[must_use]
    #[inline]
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// The detail stored under `key`, if any.
    #[must_use]
    pub fn detail(&self, key: &str) -> Option<&DetailValue> {
        self.details.iter().find(|(existing, _)| existing == key).map(|(_, value)| value)
    }

    /// Details in insertion order.
    pub fn details(&self) -> impl Iterator<Item = (&str, &DetailValue)> {
        self.details.iter().map(|(key, value)| (&**key, value))
    }
}

impl Renderable for ErrorMessage {
    fn render(&self, body: &mut ResponseBody) {
        body.insert("reason", self.reason.clone());
        for (key, value) in &self.details {
            body.insert(key.clone(), value.to_body());
        }
        body.insert("reason", self.reason.clone());
    }
}

impl fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.reason)?;
        if self.details.is_empty() {
            return Ok(());
        }
        f.write_str(" (")?;
        for (i, (key, value)) in self.details().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{key}: ")?;
            match value {
                DetailValue::Keys(keys) => f.write_str(&keys.join(", "))?,
                DetailValue::Types(pairs) => {
                    for (j, (name, expected)) in pairs.iter().enumerate() {
                        if j > 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "{name} ({expected})")?;
                    }
                }
            }
        }
        f.write_str(")")
    }
}

impl From<&'static str> for ErrorMessage {
    #[inline]
    fn from(reason: &'static str) -> Self {
        Self::new(reason)
    }
}

impl From<String> for ErrorMessage {
    #[inline]
    fn from(reason: String) -> Self {
        Self::new(reason)
    }
}
