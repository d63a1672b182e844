//! Replacing complete sibling sets by their parent, and the inverse.

use log::debug;

use super::parent_child::{_is_valid_child_res, h3_to_children, h3_to_parent, max_h3_to_children_size};
use crate::h3_index::get_resolution;
use crate::h3_index::inspection::h3_is_pentagon;
use crate::index_table::{IndexTable, ProbeOverflow};
use crate::types::{CompactError, H3Index, UncompactError, H3_NULL};

impl From<ProbeOverflow> for CompactError {
  fn from(_: ProbeOverflow) -> Self {
    CompactError::LoopExceeded
  }
}

fn emit(out: &mut [H3Index], offset: &mut usize, cells: &[H3Index]) -> Result<(), CompactError> {
  let end = *offset + cells.len();
  if end > out.len() {
    return Err(CompactError::OutputTooSmall);
  }
  out[*offset..end].copy_from_slice(cells);
  *offset = end;
  Ok(())
}

// Children present per parent, checked against the number of children the parent has.
fn count_parents(cells: &[H3Index], parent_res: i32) -> Result<IndexTable<u8>, CompactError> {
  let mut parents = IndexTable::with_slots(cells.len());
  for cell in cells {
    let parent = h3_to_parent(*cell, parent_res);
    let limit = if h3_is_pentagon(parent) { 6 } else { 7 };
    let seen = parents.upsert(parent, |count| count.unwrap_or(0) + 1)?;
    if seen > limit {
      return Err(CompactError::Duplicate);
    }
  }
  Ok(parents)
}

fn compact_level(cells: &[H3Index], out: &mut [H3Index], offset: &mut usize) -> Result<Vec<H3Index>, CompactError> {
  let parent_res = get_resolution(cells[0]) - 1;
  if parent_res < 0 || cells.len() < 6 {
    emit(out, offset, cells)?;
    return Ok(Vec::new());
  }

  let parents = count_parents(cells, parent_res)?;
  // the deleted pentagon child counts as present
  let is_complete = |parent: H3Index, count: u8| count + u8::from(h3_is_pentagon(parent)) == 7;

  let mut complete = Vec::with_capacity(cells.len() / 6);
  for (parent, count) in parents.iter() {
    if is_complete(parent, count) {
      complete.push(parent);
    }
  }

  let uncompactable: Vec<H3Index> = cells
    .iter()
    .copied()
    .filter(|cell| {
      let parent = h3_to_parent(*cell, parent_res);
      !parents.get(parent).is_some_and(|count| is_complete(parent, count))
    })
    .collect();
  emit(out, offset, &uncompactable)?;
  Ok(complete)
}

/// Compacts a set of same-resolution cells.
///
/// Every complete set of siblings is replaced by its parent, repeatedly,
/// until no complete set remains. Cells that cannot be merged are written to
/// `out` in input order, finest first. `H3_NULL` entries are skipped. Slots of
/// `out` past the compacted set are left untouched; an `out` as long as the
/// input is always enough.
pub fn compact(h3_set: &[H3Index], out: &mut [H3Index]) -> Result<(), CompactError> {
  let mut remaining: Vec<H3Index> = h3_set.iter().copied().filter(|h| !h.is_null()).collect();
  let Some(first) = remaining.first() else {
    return Ok(());
  };
  let res = get_resolution(*first);
  if remaining.iter().any(|h| get_resolution(*h) != res) {
    debug!("compact: input mixes resolutions, first cell at res {res}");
    return Err(CompactError::ResolutionMismatch);
  }

  let mut offset = 0;
  while !remaining.is_empty() {
    let level_res = get_resolution(remaining[0]);
    remaining = match compact_level(&remaining, out, &mut offset) {
      Ok(parents) => parents,
      Err(err) => {
        debug!("compact: failed at res {level_res}: {err}");
        return Err(err);
      }
    };
  }
  Ok(())
}

/// Expands a compacted set so every cell is at `res`.
///
/// Each cell coarser than `res` is replaced by its `max_h3_to_children_size`
/// block of children, pentagon blocks keeping their `H3_NULL` gaps. `H3_NULL`
/// entries are skipped.
pub fn uncompact(compacted_set: &[H3Index], res: i32, out: &mut [H3Index]) -> Result<(), UncompactError> {
  let mut offset = 0;
  for cell in compacted_set.iter().copied().filter(|h| !h.is_null()) {
    if offset >= out.len() {
      return Err(UncompactError::OutputTooSmall);
    }
    let current_res = get_resolution(cell);
    if !_is_valid_child_res(current_res, res) {
      return Err(UncompactError::ResolutionMismatch);
    }
    let count = max_h3_to_children_size(cell, res) as usize;
    if offset + count > out.len() {
      return Err(UncompactError::OutputTooSmall);
    }
    h3_to_children(cell, res, &mut out[offset..offset + count]).map_err(|_| UncompactError::OutputTooSmall)?;
    offset += count;
  }
  Ok(())
}

/// Slots `uncompact` needs to expand `compacted_set` to `res`.
pub fn max_uncompact_size(compacted_set: &[H3Index], res: i32) -> Result<i64, UncompactError> {
  compacted_set.iter().filter(|h| **h != H3_NULL).try_fold(0i64, |total, cell| {
    if !_is_valid_child_res(get_resolution(*cell), res) {
      return Err(UncompactError::ResolutionMismatch);
    }
    Ok(total + max_h3_to_children_size(*cell, res))
  })
}
