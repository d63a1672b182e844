use crate::constants::NUM_BASE_CELLS;
use crate::coords::face_ijk::{_face_ijk_to_geo, _face_ijk_to_geo_boundary};
use crate::h3_index::inspection::h3_is_pentagon;
use crate::h3_index::{_h3_to_face_ijk, get_base_cell, get_resolution};
use crate::types::{GeoBoundary, GeoCoord, H3Index};

fn has_base_cell(h: H3Index) -> bool {
  (0..NUM_BASE_CELLS).contains(&get_base_cell(h))
}

/// Center of the cell. The index is not otherwise validated; a base cell
/// out of range gives the default coordinate.
#[must_use]
pub fn h3_to_geo(h: H3Index) -> GeoCoord {
  if !has_base_cell(h) {
    return GeoCoord::default();
  }
  _face_ijk_to_geo(&_h3_to_face_ijk(h), get_resolution(h))
}

/// Boundary of the cell, counter-clockwise.
///
/// With `add_edge_verts`, Class III cells get an extra vertex wherever an
/// edge crosses an icosahedron edge, so the outline stays on the right side
/// of the face seam once projected. A base cell out of range gives an empty
/// boundary.
#[must_use]
pub fn h3_to_geo_boundary(h: H3Index, add_edge_verts: bool) -> GeoBoundary {
  if !has_base_cell(h) {
    return GeoBoundary::default();
  }
  _face_ijk_to_geo_boundary(&_h3_to_face_ijk(h), get_resolution(h), h3_is_pentagon(h), add_edge_verts)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::constants::{NUM_HEX_VERTS, NUM_PENT_VERTS};
  use crate::geo_coord::geo_almost_equal_threshold;
  use crate::h3_index::inspection::get_pentagon_indexes;
  use crate::h3_index::set_base_cell;
  use crate::indexing::geo_to_h3;
  use crate::types::H3_NULL;

  #[test]
  fn test_h3_to_geo_known_center() {
    let center = h3_to_geo(H3Index::from_raw(0x8928342e20fffff));
    let expected = GeoCoord::from_degrees(37.5012466151, -122.5003039349);
    assert!(
      geo_almost_equal_threshold(&center, &expected, 0.000_001),
      "center {:?} near {:?}",
      center,
      expected
    );
  }

  #[test]
  fn test_center_maps_back() {
    let h = H3Index::from_raw(0x85283473fffffff);
    assert_eq!(geo_to_h3(&h3_to_geo(h), 5), h, "center lies in its own cell");
  }

  #[test]
  fn test_hexagon_boundary() {
    let h = H3Index::from_raw(0x85283473fffffff);
    let boundary = h3_to_geo_boundary(h, false);
    assert_eq!(boundary.num_verts, NUM_HEX_VERTS, "six vertices");
    assert_eq!(boundary.verts().len(), NUM_HEX_VERTS, "slice matches count");
    assert_eq!(h3_to_geo_boundary(h, true).num_verts, NUM_HEX_VERTS, "interior cell gains no edge vertices");
  }

  #[test]
  fn test_pentagon_boundaries() {
    for res in [1, 2] {
      let mut pentagons = [H3_NULL; 12];
      get_pentagon_indexes(res, &mut pentagons).expect("valid resolution");
      for pentagon in pentagons {
        let plain = h3_to_geo_boundary(pentagon, false);
        assert_eq!(plain.num_verts, NUM_PENT_VERTS, "five vertices for {pentagon}");
        let with_edges = h3_to_geo_boundary(pentagon, true);
        let expected = if res % 2 == 1 { 2 * NUM_PENT_VERTS } else { NUM_PENT_VERTS };
        assert_eq!(with_edges.num_verts, expected, "edge crossings for {pentagon} at res {res}");
      }
    }
  }

  #[test]
  fn test_base_cell_out_of_range() {
    let h = H3Index::from_raw(0x85283473fffffff);
    for bc in [NUM_BASE_CELLS, 127] {
      let bad = set_base_cell(h, bc);
      assert_eq!(h3_to_geo(bad), GeoCoord::default(), "no center for base cell {bc}");
      assert_eq!(h3_to_geo_boundary(bad, false).num_verts, 0, "no boundary for base cell {bc}");
      assert_eq!(h3_to_geo_boundary(bad, true), GeoBoundary::default(), "no edge vertices for base cell {bc}");
    }
  }
}
