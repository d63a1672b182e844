//! Open addressing table keyed by cell index.
//!
//! A key's home slot is `key % slots`; collisions probe linearly and wrap.
//! A probe that visits every slot without finding the key or a free slot
//! reports [`ProbeOverflow`]. The slot layout is observable through
//! [`IndexTable::slots`], which lets callers write the table straight into
//! positional output buffers.

use crate::types::H3Index;

/// Every slot was probed without finding the key or a free slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("probe sequence exceeded the table size")]
pub struct ProbeOverflow;

/// Fixed-size open addressing map from `H3Index` to `V`.
#[derive(Debug, Clone)]
pub struct IndexTable<V> {
  slots: Vec<Option<(H3Index, V)>>,
}

impl<V: Copy> IndexTable<V> {
  /// Table with exactly `len` slots. It never grows.
  #[must_use]
  pub fn with_slots(len: usize) -> Self {
    Self { slots: vec![None; len] }
  }

  /// Number of slots.
  #[must_use]
  pub fn capacity(&self) -> usize {
    self.slots.len()
  }

  /// Number of occupied slots.
  #[must_use]
  pub fn len(&self) -> usize {
    self.slots.iter().filter(|slot| slot.is_some()).count()
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.slots.iter().all(Option::is_none)
  }

  /// Slot holding `key`, or the free slot where it would go.
  fn find_slot(&self, key: H3Index) -> Result<usize, ProbeOverflow> {
    let len = self.slots.len();
    if len == 0 {
      return Err(ProbeOverflow);
    }
    let mut loc = (key.0 % len as u64) as usize;
    for _ in 0..len {
      match self.slots[loc] {
        None => return Ok(loc),
        Some((existing, _)) if existing == key => return Ok(loc),
        Some(_) => loc = (loc + 1) % len,
      }
    }
    Err(ProbeOverflow)
  }

  /// Value stored for `key`.
  #[must_use]
  pub fn get(&self, key: H3Index) -> Option<V> {
    let loc = self.find_slot(key).ok()?;
    self.slots[loc].map(|(_, value)| value)
  }

  #[must_use]
  pub fn contains(&self, key: H3Index) -> bool {
    self.get(key).is_some()
  }

  /// Stores `value` for `key`, returning the value it replaced.
  pub fn insert(&mut self, key: H3Index, value: V) -> Result<Option<V>, ProbeOverflow> {
    let loc = self.find_slot(key)?;
    let previous = self.slots[loc].map(|(_, old)| old);
    self.slots[loc] = Some((key, value));
    Ok(previous)
  }

  /// Stores `f(current)` for `key` and returns it; `current` is `None` for a new key.
  pub fn upsert(&mut self, key: H3Index, f: impl FnOnce(Option<V>) -> V) -> Result<V, ProbeOverflow> {
    let loc = self.find_slot(key)?;
    let value = f(self.slots[loc].map(|(_, old)| old));
    self.slots[loc] = Some((key, value));
    Ok(value)
  }

  /// Occupied entries in slot order.
  pub fn iter(&self) -> impl Iterator<Item = (H3Index, V)> + '_ {
    self.slots.iter().flatten().copied()
  }

  /// Every slot in order, `None` where empty.
  pub fn slots(&self) -> impl Iterator<Item = Option<(H3Index, V)>> + '_ {
    self.slots.iter().copied()
  }

  /// Empties every slot, keeping the size.
  pub fn clear(&mut self) {
    self.slots.fill(None);
  }
}
