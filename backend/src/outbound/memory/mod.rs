//! Process-local store backing every repository port.
//!
//! All state sits behind one mutex so each operation, including the resets,
//! is atomic with respect to every other. Nothing is persisted; a restart
//! returns to the seed catalogue.

use std::fmt;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{
    DestinationRepository, DestinationRepositoryError, PreferenceRepository,
    PreferenceRepositoryError, StoreResetError, StoreResetRepository,
};
use crate::domain::{
    Destination, DestinationDraft, DestinationId, Preference, PreferenceDraft, PreferenceLabel,
    UserId, seed_destinations,
};

#[derive(Debug, Default)]
struct StoreState {
    destinations: Vec<Destination>,
    preferences: Vec<Preference>,
    preference_count: u64,
}

impl StoreState {
    fn seeded() -> Self {
        Self {
            destinations: seed_destinations(),
            ..Self::default()
        }
    }

    fn next_destination_id(&self) -> Result<DestinationId, StoreFault> {
        i64::try_from(self.destinations.len())
            .ok()
            .and_then(|count| count.checked_add(1))
            .map(DestinationId::new)
            .ok_or(StoreFault::SequenceExhausted)
    }

    fn next_preference_label(&mut self) -> Result<PreferenceLabel, StoreFault> {
        let next = self
            .preference_count
            .checked_add(1)
            .ok_or(StoreFault::SequenceExhausted)?;
        self.preference_count = next;
        Ok(PreferenceLabel::for_sequence(next))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StoreFault {
    Poisoned,
    SequenceExhausted,
}

impl fmt::Display for StoreFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Poisoned => f.write_str("store lock poisoned"),
            Self::SequenceExhausted => f.write_str("identifier sequence exhausted"),
        }
    }
}

impl From<StoreFault> for DestinationRepositoryError {
    fn from(fault: StoreFault) -> Self {
        Self::unavailable(fault.to_string())
    }
}

impl From<StoreFault> for PreferenceRepositoryError {
    fn from(fault: StoreFault) -> Self {
        Self::unavailable(fault.to_string())
    }
}

impl From<StoreFault> for StoreResetError {
    fn from(fault: StoreFault) -> Self {
        Self::unavailable(fault.to_string())
    }
}

/// In-memory destinations and preferences.
///
/// Implements [`DestinationRepository`], [`PreferenceRepository`], and
/// [`StoreResetRepository`] over the same state, so one instance should be
/// shared (behind an `Arc`) by every service.
#[derive(Debug)]
pub struct InMemoryTravelStore {
    state: Mutex<StoreState>,
}

impl InMemoryTravelStore {
    /// Store holding the five seed destinations and no preferences.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            state: Mutex::new(StoreState::seeded()),
        }
    }

    /// Store with no destinations and no preferences.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            state: Mutex::new(StoreState::default()),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreState>, StoreFault> {
        self.state.lock().map_err(|_| StoreFault::Poisoned)
    }
}

impl Default for InMemoryTravelStore {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait]
impl DestinationRepository for InMemoryTravelStore {
    async fn all(&self) -> Result<Vec<Destination>, DestinationRepositoryError> {
        Ok(self.lock()?.destinations.clone())
    }

    async fn find_by_id(
        &self,
        id: DestinationId,
    ) -> Result<Option<Destination>, DestinationRepositoryError> {
        let state = self.lock()?;
        Ok(state.destinations.iter().find(|d| d.id == id).cloned())
    }

    async fn append(
        &self,
        draft: DestinationDraft,
    ) -> Result<Destination, DestinationRepositoryError> {
        let mut state = self.lock()?;
        let id = state.next_destination_id()?;
        let destination = draft.into_destination(id);
        state.destinations.push(destination.clone());
        debug!(%id, total = state.destinations.len(), "destination appended");
        Ok(destination)
    }
}

#[async_trait]
impl PreferenceRepository for InMemoryTravelStore {
    async fn insert(
        &self,
        draft: PreferenceDraft,
    ) -> Result<Preference, PreferenceRepositoryError> {
        let mut state = self.lock()?;
        let label = state.next_preference_label()?;
        let preference = draft.into_preference(label);
        state.preferences.push(preference.clone());
        Ok(preference)
    }

    async fn find_by_owner(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<Preference>, PreferenceRepositoryError> {
        let state = self.lock()?;
        Ok(state
            .preferences
            .iter()
            .filter(|p| p.is_owned_by(user_id))
            .cloned()
            .collect())
    }

    async fn find_by_label(
        &self,
        label: &PreferenceLabel,
    ) -> Result<Option<Preference>, PreferenceRepositoryError> {
        let state = self.lock()?;
        Ok(state.preferences.iter().find(|p| p.label == *label).cloned())
    }
}

#[async_trait]
impl StoreResetRepository for InMemoryTravelStore {
    async fn restore_seed(&self) -> Result<(), StoreResetError> {
        *self.lock()? = StoreState::seeded();
        Ok(())
    }

    async fn clear_preferences(&self) -> Result<(), StoreResetError> {
        let mut state = self.lock()?;
        state.preferences.clear();
        state.preference_count = 0;
        Ok(())
    }
}
