//! Request validation.
//!
//! Every request type implements [`Validate`]. Validation is a pure function
//! of the request: it collects one message per problem, in the declaration
//! order of the request's fields, and never stops at the first one.

use crate::error::ValidationError;

/// Types that can check themselves before being sent.
pub trait Validate {
    /// Inspects the request and reports every violation found.
    fn validate(&self) -> ValidationResult;
}

/// Ordered violation messages. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    messages: Vec<String>,
}

impl ValidationResult {
    /// Starts collecting violations.
    pub fn builder() -> ValidationResultBuilder {
        ValidationResultBuilder::default()
    }

    /// Returns `true` if no violation was recorded.
    pub fn is_valid(&self) -> bool {
        self.messages.is_empty()
    }

    /// Returns the violation messages in the order they were recorded.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Converts into `Ok(())` when valid, or the error carrying every message.
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(ValidationError::new(self.messages))
        }
    }
}

/// Collects violations for a [`ValidationResult`].
///
/// ## Examples
///
/// ```rust
/// use cloudfoundry_client::validation::ValidationResult;
///
/// let organization_id: Option<String> = None;
/// let auditor_id = Some("uaa-id-71".to_string());
///
/// let result = ValidationResult::builder()
///     .require("organization_id", &organization_id)
///     .require("auditor_id", &auditor_id)
///     .build();
///
/// assert_eq!(result.messages(), ["organization id must be specified"]);
/// ```
#[derive(Debug, Default)]
pub struct ValidationResultBuilder {
    messages: Vec<String>,
}

impl ValidationResultBuilder {
    /// Records `"<label> must be specified"` when `value` is unset.
    ///
    /// `field` is the structural field name; it is turned into a label
    /// with [`field_label`].
    pub fn require<T>(self, field: &str, value: &Option<T>) -> Self {
        if value.is_some() {
            self
        } else {
            self.message(format!("{} must be specified", field_label(field)))
        }
    }

    /// Like [`require`](Self::require), but a blank value is also a violation.
    ///
    /// Used for identifiers that land in the URL path, where an empty segment
    /// would address a different route.
    pub fn require_non_empty<S: AsRef<str>>(self, field: &str, value: &Option<S>) -> Self {
        match value {
            None => self.message(format!("{} must be specified", field_label(field))),
            Some(v) if v.as_ref().trim().is_empty() => {
                self.message(format!("{} must not be empty", field_label(field)))
            }
            Some(_) => self,
        }
    }

    /// Records an arbitrary violation message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.messages.push(message.into());
        self
    }

    /// Finishes collection.
    pub fn build(self) -> ValidationResult {
        ValidationResult {
            messages: self.messages,
        }
    }
}

/// Turns a structural field name into a human readable label.
///
/// Both `snake_case` and `camelCase` names map to space separated lower case:
/// `organization_id` and `organizationId` both become `organization id`.
/// A run of capitals is kept as one word, so `URLPath` becomes `url path`.
pub fn field_label(field: &str) -> String {
    let chars: Vec<char> = field.chars().collect();
    let mut label = String::with_capacity(field.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' || c == '-' || c == ' ' {
            if !label.is_empty() && !label.ends_with(' ') {
                label.push(' ');
            }
            continue;
        }

        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let boundary = prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_lower);
            if boundary && !label.is_empty() && !label.ends_with(' ') {
                label.push(' ');
            }
        }

        label.extend(c.to_lowercase());
    }

    label.trim_end().to_string()
}
