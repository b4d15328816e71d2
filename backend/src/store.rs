use std::sync::{Mutex, MutexGuard};
use shared::models::{Candidate, NewCandidate};

/// How `insert` picks the id of a new record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdStrategy {
    /// `len + 1`. Ids can repeat once records have been deleted; lookups then
    /// act on the first match in insertion order.
    #[default]
    Length,
    /// One past the highest id ever handed out.
    Monotonic,
}

#[derive(Debug, PartialEq, Eq)]
pub enum StoreError {
    NotFound,
    LockFailed,
}

struct Inner {
    candidates: Vec<Candidate>,
    highest_id: u64,
}

pub struct CandidateStore {
    inner: Mutex<Inner>,
    strategy: IdStrategy,
}

impl CandidateStore {
    pub fn new(strategy: IdStrategy) -> Self {
        Self {
            inner: Mutex::new(Inner { candidates: Vec::new(), highest_id: 0 }),
            strategy,
        }
    }

    pub fn strategy(&self) -> IdStrategy {
        self.strategy
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>, StoreError> {
        self.inner.lock().map_err(|_| StoreError::LockFailed)
    }

    /// Copy of the whole list taken under a single lock.
    pub fn list(&self) -> Result<Vec<Candidate>, StoreError> {
        Ok(self.lock()?.candidates.clone())
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.lock()?.candidates.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }

    pub fn get_by_id(&self, id: u64) -> Result<Candidate, StoreError> {
        self.lock()?
            .candidates
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    pub fn insert(&self, candidate: NewCandidate) -> Result<Candidate, StoreError> {
        let mut inner = self.lock()?;
        let id = match self.strategy {
            IdStrategy::Length => inner.candidates.len() as u64 + 1,
            IdStrategy::Monotonic => inner.highest_id + 1,
        };
        inner.highest_id = inner.highest_id.max(id);

        let candidate = candidate.into_candidate(id);
        inner.candidates.push(candidate.clone());
        Ok(candidate)
    }

    pub fn replace(&self, id: u64, candidate: NewCandidate) -> Result<Candidate, StoreError> {
        let mut inner = self.lock()?;
        let slot = inner
            .candidates
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(StoreError::NotFound)?;

        *slot = candidate.into_candidate(id);
        Ok(slot.clone())
    }

    pub fn remove_by_id(&self, id: u64) -> Result<Candidate, StoreError> {
        let mut inner = self.lock()?;
        let index = inner
            .candidates
            .iter()
            .position(|c| c.id == id)
            .ok_or(StoreError::NotFound)?;

        Ok(inner.candidates.remove(index))
    }
}

impl Default for CandidateStore {
    fn default() -> Self {
        Self::new(IdStrategy::default())
    }
}
