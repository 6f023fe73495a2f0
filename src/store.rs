use serde::Serialize;
use strum::IntoEnumIterator;

use crate::domain::field::Field;
use crate::domain::gender::Gender;
use crate::domain::lock_mask::LockMask;
use crate::domain::profile::Profile;
use crate::error::field::InvalidFieldError;
use crate::generator::ProfileGenerator;

/// Point-in-time copy of the store state, handed out for rendering and
/// export. Mutating a snapshot never touches the store.
#[derive(Serialize, Debug, Clone, Eq, PartialEq)]
pub struct Snapshot {
    pub profile: Profile,
    pub locks: LockMask,
}

/// Owns the current profile and its lock mask. The mask outlives any single
/// profile: regeneration replaces the profile wholesale (locked values
/// copied forward) and leaves the mask alone.
pub struct ProfileStore<G: ProfileGenerator> {
    current: Profile,
    locks: LockMask,
    generator: G,
}

impl<G: ProfileGenerator> ProfileStore<G> {
    pub fn new(mut generator: G) -> Self {
        let current = generator.generate();
        Self {
            current,
            locks: LockMask::default(),
            generator,
        }
    }

    /// Draws a fresh profile and merges it with the current one: locked
    /// fields keep their value, the rest are re-randomized. If gender is
    /// locked, the fresh draw is conditioned on it so an unlocked first
    /// name still matches.
    pub fn regenerate(&mut self) -> Profile {
        let fresh = match self.locked_gender() {
            Some(gender) => self.generator.generate_with_gender(gender),
            None => self.generator.generate(),
        };
        self.current = merge(&self.current, fresh, &self.locks);
        tracing::info!(locked = self.locks.locked_count(), "regenerated profile");
        self.current.clone()
    }

    fn locked_gender(&self) -> Option<Gender> {
        if !self.locks.is_locked(Field::Gender) {
            return None;
        }
        // The stored value always came out of a Gender draw.
        Gender::parse(self.current.value(Field::Gender)).ok()
    }

    /// Flips one lock and returns the updated mask. The current profile is
    /// untouched.
    pub fn toggle_lock(&mut self, field: Field) -> LockMask {
        let locked = self.locks.toggle(field);
        tracing::info!(field = %field, locked, "toggled field lock");
        self.locks
    }

    /// String-facing variant for callers working with field names. Unknown
    /// names are rejected and nothing changes.
    pub fn toggle_lock_by_name(&mut self, name: &str) -> Result<LockMask, InvalidFieldError> {
        let field = Field::parse(name)?;
        Ok(self.toggle_lock(field))
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            profile: self.current.clone(),
            locks: self.locks,
        }
    }
}

/// Field-wise merge of two profiles under a lock mask: locked fields take
/// `current`'s value, unlocked ones take `fresh`'s.
pub fn merge(current: &Profile, fresh: Profile, locks: &LockMask) -> Profile {
    let mut merged = fresh;
    for field in Field::iter() {
        if locks.is_locked(field) {
            merged.set_value(field, current.value(field).to_string());
        }
    }
    merged
}
