//! User preference records.
//!
//! A preference is a labelled snapshot of one user's climate and budget
//! choice. Labels come from a single global counter (`Preference 1`,
//! `Preference 2`, ...) and are unique across all users.

use std::fmt;

/// Prefix shared by every generated label.
pub const PREFERENCE_LABEL_PREFIX: &str = "Preference";

/// Validation errors returned by [`PreferenceDraft::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreferenceValidationError {
    /// The named field was empty.
    EmptyField {
        /// JSON name of the offending field.
        field: &'static str,
    },
}

impl fmt::Display for PreferenceValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyField { field } => write!(f, "{field} must not be empty"),
        }
    }
}

impl std::error::Error for PreferenceValidationError {}

/// Owner of a preference, compared by exact string value.
///
/// No registry of users exists; any identifier is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    /// Wrap a raw identifier.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Generated preference label.
///
/// # Examples
/// ```
/// use travel_planner::domain::PreferenceLabel;
///
/// let label = PreferenceLabel::for_sequence(3);
/// assert_eq!(label.as_ref(), "Preference 3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PreferenceLabel(String);

impl PreferenceLabel {
    /// Label for the `sequence`-th preference ever created.
    #[must_use]
    pub fn for_sequence(sequence: u64) -> Self {
        Self(format!("{PREFERENCE_LABEL_PREFIX} {sequence}"))
    }

    /// Wrap a label received from a client for lookup.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }
}

impl AsRef<str> for PreferenceLabel {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for PreferenceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<PreferenceLabel> for String {
    fn from(value: PreferenceLabel) -> Self {
        value.0
    }
}

/// Validated preference submission awaiting a label.
///
/// ## Invariants
/// - `user_id`, `climate`, and `budget` are non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceDraft {
    user_id: UserId,
    climate: String,
    budget: String,
}

impl PreferenceDraft {
    /// Validate and construct a draft.
    ///
    /// # Errors
    /// Returns [`PreferenceValidationError::EmptyField`] naming the first
    /// empty field.
    pub fn new(
        user_id: impl Into<String>,
        climate: impl Into<String>,
        budget: impl Into<String>,
    ) -> Result<Self, PreferenceValidationError> {
        let user_id = user_id.into();
        let climate = climate.into();
        let budget = budget.into();
        let empty = [
            ("userId", user_id.is_empty()),
            ("climate", climate.is_empty()),
            ("budget", budget.is_empty()),
        ]
        .into_iter()
        .find_map(|(field, is_empty)| is_empty.then_some(field));
        if let Some(field) = empty {
            return Err(PreferenceValidationError::EmptyField { field });
        }
        Ok(Self {
            user_id: UserId(user_id),
            climate,
            budget,
        })
    }

    /// Owner of the submission.
    #[must_use]
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Attach the generated label.
    #[must_use]
    pub fn into_preference(self, label: PreferenceLabel) -> Preference {
        Preference {
            label,
            user_id: self.user_id,
            climate: self.climate,
            budget: self.budget,
        }
    }
}

/// A stored preference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preference {
    /// Globally unique generated label.
    pub label: PreferenceLabel,
    /// Owner of the preference.
    pub user_id: UserId,
    /// Preferred climate.
    pub climate: String,
    /// Preferred budget band.
    pub budget: String,
}

impl Preference {
    /// Whether `user_id` owns this preference.
    #[must_use]
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        self.user_id == *user_id
    }

    /// Project the record to the client-facing form, dropping the owner.
    #[must_use]
    pub fn summary(&self) -> PreferenceSummary {
        PreferenceSummary {
            label: self.label.clone(),
            climate: self.climate.clone(),
            budget: self.budget.clone(),
        }
    }
}

/// Client-facing projection of a preference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceSummary {
    /// Generated label.
    pub label: PreferenceLabel,
    /// Preferred climate.
    pub climate: String,
    /// Preferred budget band.
    pub budget: String,
}
