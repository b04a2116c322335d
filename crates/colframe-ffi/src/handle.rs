//! Generational handle arena.
//!
//! Each slot carries a generation that is bumped when its value is released,
//! so a handle kept past `remove` no longer matches and is rejected instead
//! of aliasing whatever reuses the slot.

use std::marker::PhantomData;
use std::sync::Arc;

use parking_lot::RwLock;
use thiserror::Error;

use colframe_core::prelude::{Error, GroupHandle, Result, TableHandle};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HandleError {
    #[error("null handle")]
    Null,
    #[error("unknown handle {0:#x}")]
    Unknown(u64),
    #[error("stale handle {0:#x} (already released)")]
    Stale(u64),
    #[error("handle arena exhausted")]
    Exhausted,
}

impl From<HandleError> for Error {
    fn from(e: HandleError) -> Self {
        Error::Boundary(e.to_string())
    }
}

/// Handle types an arena can mint.
pub trait ArenaHandle: Copy {
    fn from_parts(slot: u32, generation: u32) -> Self;
    fn raw(self) -> u64;
    fn slot(self) -> Option<usize>;
    fn generation(self) -> u32;
}

macro_rules! impl_arena_handle {
    ($($t:ty),*) => {
        $(
            impl ArenaHandle for $t {
                fn from_parts(slot: u32, generation: u32) -> Self {
                    <$t>::from_parts(slot, generation)
                }
                fn raw(self) -> u64 {
                    self.get()
                }
                fn slot(self) -> Option<usize> {
                    <$t>::slot(self)
                }
                fn generation(self) -> u32 {
                    <$t>::generation(self)
                }
            }
        )*
    };
}

impl_arena_handle!(TableHandle, GroupHandle);

struct Entry<T> {
    generation: u32,
    value: Option<Arc<T>>,
}

struct Slots<T> {
    entries: Vec<Entry<T>>,
    free: Vec<u32>,
    live: usize,
}

pub struct HandleArena<T, H> {
    slots: RwLock<Slots<T>>,
    _handle: PhantomData<fn() -> H>,
}

impl<T, H: ArenaHandle> HandleArena<T, H> {
    pub fn new() -> Self {
        Self {
            slots: RwLock::new(Slots {
                entries: Vec::new(),
                free: Vec::new(),
                live: 0,
            }),
            _handle: PhantomData,
        }
    }

    pub fn insert(&self, value: Arc<T>) -> Result<H> {
        let mut slots = self.slots.write();
        let slot = match slots.free.pop() {
            Some(slot) => slot,
            None => {
                // The low half of a handle stores `slot + 1`.
                let slot = u32::try_from(slots.entries.len())
                    .ok()
                    .filter(|s| *s < u32::MAX)
                    .ok_or(HandleError::Exhausted)?;
                slots.entries.push(Entry {
                    generation: 0,
                    value: None,
                });
                slot
            }
        };
        let entry = &mut slots.entries[slot as usize];
        entry.value = Some(value);
        let handle = H::from_parts(slot, entry.generation);
        slots.live += 1;
        Ok(handle)
    }

    pub fn get(&self, handle: H) -> Result<Arc<T>> {
        let slots = self.slots.read();
        let entry = Self::entry(&slots, handle)?;
        entry
            .value
            .clone()
            .ok_or_else(|| HandleError::Stale(handle.raw()).into())
    }

    /// Replace the value behind a live handle with `f(current)`, atomically
    /// with respect to other arena calls. On error the value is unchanged.
    pub fn update<F>(&self, handle: H, f: F) -> Result<()>
    where
        F: FnOnce(&T) -> Result<T>,
    {
        let mut slots = self.slots.write();
        let slot = Self::live_slot(&slots, handle)?;
        let entry = &mut slots.entries[slot];
        let current = entry
            .value
            .as_ref()
            .ok_or(HandleError::Stale(handle.raw()))?;
        let next = f(current)?;
        entry.value = Some(Arc::new(next));
        Ok(())
    }

    /// Release a handle. Outstanding `Arc`s from `get` stay valid.
    pub fn remove(&self, handle: H) -> Result<Arc<T>> {
        let mut slots = self.slots.write();
        let slot = Self::live_slot(&slots, handle)?;
        let entry = &mut slots.entries[slot];
        let value = entry
            .value
            .take()
            .ok_or(HandleError::Stale(handle.raw()))?;
        entry.generation = entry.generation.wrapping_add(1);
        slots.free.push(slot as u32);
        slots.live -= 1;
        Ok(value)
    }

    pub fn len(&self) -> usize {
        self.slots.read().live
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn entry<'a>(slots: &'a Slots<T>, handle: H) -> Result<&'a Entry<T>> {
        let slot = Self::live_slot(slots, handle)?;
        Ok(&slots.entries[slot])
    }

    fn live_slot(slots: &Slots<T>, handle: H) -> Result<usize> {
        let slot = handle.slot().ok_or(HandleError::Null)?;
        let entry = slots
            .entries
            .get(slot)
            .ok_or(HandleError::Unknown(handle.raw()))?;
        if entry.generation != handle.generation() || entry.value.is_none() {
            return Err(HandleError::Stale(handle.raw()).into());
        }
        Ok(slot)
    }
}

impl<T, H: ArenaHandle> Default for HandleArena<T, H> {
    fn default() -> Self {
        Self::new()
    }
}
