//! Destination records.
//!
//! A destination is created once and never mutated. Its identifier is
//! assigned by the store at insertion time; callers submit a
//! [`DestinationDraft`] carrying the four descriptive fields.

use std::fmt;
use std::str::FromStr;

/// Validation errors returned by [`DestinationDraft::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DestinationValidationError {
    /// The named field was empty.
    EmptyField {
        /// JSON name of the offending field.
        field: &'static str,
    },
}

impl fmt::Display for DestinationValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyField { field } => write!(f, "{field} must not be empty"),
        }
    }
}

impl std::error::Error for DestinationValidationError {}

/// Numeric destination identifier.
///
/// Parsing reads the leading integer of a path segment: leading whitespace
/// and an optional sign are skipped, a `0x` prefix switches to hexadecimal,
/// and anything after the digits is ignored. Ids that were never assigned
/// simply fail to resolve.
///
/// # Examples
/// ```
/// use travel_planner::domain::DestinationId;
///
/// let id: DestinationId = "3".parse().expect("integer id");
/// assert_eq!(id.get(), 3);
/// let id: DestinationId = "1.5".parse().expect("leading integer");
/// assert_eq!(id.get(), 1);
/// assert!("invalid".parse::<DestinationId>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DestinationId(i64);

impl DestinationId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Access the raw identifier.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for DestinationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when a segment does not start with an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DestinationIdParseError;

impl fmt::Display for DestinationIdParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("destination id has no leading integer")
    }
}

impl std::error::Error for DestinationIdParseError {}

impl FromStr for DestinationId {
    type Err = DestinationIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim_start();
        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        let (radix, digits) = match unsigned
            .strip_prefix("0x")
            .or_else(|| unsigned.strip_prefix("0X"))
        {
            Some(hex) => (16_u32, hex),
            None => (10_u32, unsigned),
        };

        let mut seen_digit = false;
        let mut value = Some(0_i64);
        for digit in digits.chars().map_while(|c| c.to_digit(radix)) {
            seen_digit = true;
            value = value
                .and_then(|acc| acc.checked_mul(i64::from(radix)))
                .and_then(|acc| {
                    if negative {
                        acc.checked_sub(i64::from(digit))
                    } else {
                        acc.checked_add(i64::from(digit))
                    }
                });
        }
        if !seen_digit {
            return Err(DestinationIdParseError);
        }

        // Out-of-range values saturate; the store never assigns either bound.
        let saturated = if negative { i64::MIN } else { i64::MAX };
        Ok(Self(value.unwrap_or(saturated)))
    }
}

/// Validated field set for a destination that has not been stored yet.
///
/// ## Invariants
/// - `name`, `climate`, `budget`, and `best_time` are non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationDraft {
    name: String,
    climate: String,
    budget: String,
    best_time: String,
}

impl DestinationDraft {
    /// Validate and construct a draft.
    ///
    /// Only emptiness is checked; surrounding whitespace is preserved as
    /// submitted.
    ///
    /// # Errors
    /// Returns [`DestinationValidationError::EmptyField`] naming the first
    /// empty field.
    pub fn new(
        name: impl Into<String>,
        climate: impl Into<String>,
        budget: impl Into<String>,
        best_time: impl Into<String>,
    ) -> Result<Self, DestinationValidationError> {
        let draft = Self {
            name: name.into(),
            climate: climate.into(),
            budget: budget.into(),
            best_time: best_time.into(),
        };
        for (field, value) in draft.fields() {
            if value.is_empty() {
                return Err(DestinationValidationError::EmptyField { field });
            }
        }
        Ok(draft)
    }

    fn fields(&self) -> [(&'static str, &str); 4] {
        [
            ("name", self.name.as_str()),
            ("climate", self.climate.as_str()),
            ("budget", self.budget.as_str()),
            ("bestTime", self.best_time.as_str()),
        ]
    }

    /// Destination name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Promote the draft to a stored record under `id`.
    #[must_use]
    pub fn into_destination(self, id: DestinationId) -> Destination {
        Destination {
            id,
            name: self.name,
            climate: self.climate,
            budget: self.budget,
            best_time: self.best_time,
        }
    }
}

/// A stored destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    /// Store-assigned identifier.
    pub id: DestinationId,
    /// Display name, e.g. `Marrakesh`.
    pub name: String,
    /// Climate classification, e.g. `arid`.
    pub climate: String,
    /// Budget band, e.g. `medium`.
    pub budget: String,
    /// Recommended travel window, e.g. `Spring/Fall`.
    pub best_time: String,
}

impl Destination {
    /// Project the record to its list form.
    #[must_use]
    pub fn summary(&self) -> DestinationSummary {
        DestinationSummary {
            id: self.id,
            name: self.name.clone(),
        }
    }
}

/// List projection of a destination: identifier and name only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationSummary {
    /// Store-assigned identifier.
    pub id: DestinationId,
    /// Display name.
    pub name: String,
}
