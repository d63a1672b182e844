// tests/h3_properties_tests.rs

use hexgrid_h3::h3_index::{get_index_digit, get_mode, set_high_bit, set_index_digit, set_mode, set_reserved_bits};
use hexgrid_h3::*;

#[test]
fn test_inspection_of_known_cell() {
  let cell = string_to_h3("85283473fffffff");
  assert_eq!(h3_get_resolution(cell), 5, "resolution");
  assert_eq!(h3_get_base_cell(cell), 20, "base cell");
  assert!(h3_is_res_class_iii(cell), "res 5 is class III");
  assert!(!h3_is_res_class_iii(string_to_h3("8428347ffffffff")), "res 4 is class II");
  assert!(h3_is_valid(cell), "valid");
  assert!(!h3_is_pentagon(cell), "hexagon");
  assert!(h3_is_pentagon(string_to_h3("8009fffffffffff")), "base cell 4");
}

#[test]
fn test_string_round_trip() {
  let mut res0 = vec![H3_NULL; res0_index_count() as usize];
  get_res0_indexes(&mut res0).expect("sized by res0_index_count");
  for cell in res0.iter().flat_map(|c| [*c, h3_to_center_child(*c, 9), h3_to_center_child(*c, 15)]) {
    let text = h3_to_string(cell);
    assert_eq!(string_to_h3(&text), cell, "{text}");
    assert_eq!(text.parse::<H3Index>(), Ok(cell), "FromStr {text}");
    assert_eq!(text.to_uppercase().parse::<H3Index>(), Ok(cell), "uppercase {text}");
  }
}

#[test]
fn test_validity_rules() {
  let cell = string_to_h3("85283473fffffff");
  assert!(!h3_is_valid(H3_NULL), "null");
  assert!(!h3_is_valid(set_high_bit(cell, 1)), "high bit");
  assert!(!h3_is_valid(set_mode(cell, 2)), "edge mode");
  assert!(!h3_is_valid(set_reserved_bits(cell, 1)), "reserved bits");
  assert!(!h3_is_valid(set_index_digit(cell, 3, Direction::InvalidDigit)), "7 within the resolution");
  assert!(!h3_is_valid(set_index_digit(cell, 6, Direction::Center)), "digit past the resolution");

  let pentagon = string_to_h3("820807fffffffff");
  assert!(h3_is_pentagon(pentagon), "res 2 pentagon");
  let deleted = set_index_digit(pentagon, 2, Direction::KAxes);
  assert!(!h3_is_valid(deleted), "deleted pentagon sub-sequence");
}

#[test]
fn test_res0_and_pentagon_listing() {
  let mut res0 = vec![H3_NULL; res0_index_count() as usize];
  get_res0_indexes(&mut res0).expect("sized");
  assert!(res0.iter().all(|c| h3_is_valid(*c) && h3_get_resolution(*c) == 0), "all res 0");
  assert_eq!(res0.iter().filter(|c| h3_is_pentagon(**c)).count(), NUM_PENTAGONS as usize, "twelve pentagons");
  assert_eq!(get_res0_indexes(&mut res0[..10]), Err(H3Error::MemoryBounds), "short buffer");

  for res in 0..=MAX_H3_RES {
    let mut pentagons = [H3_NULL; 12];
    get_pentagon_indexes(res, &mut pentagons).expect("valid resolution");
    assert!(pentagons.iter().all(|p| h3_is_pentagon(*p) && h3_get_resolution(*p) == res), "res {res}");
  }
  let mut pentagons = [H3_NULL; 12];
  assert_eq!(get_pentagon_indexes(16, &mut pentagons), Err(H3Error::ResDomain), "res 16");
}

#[test]
fn test_hierarchy_consistency_of_encoded_points() {
  let geo = GeoCoord::from_degrees(-54.8019, -68.303);
  let finest = geo_to_h3(&geo, MAX_H3_RES);
  for res in 0..MAX_H3_RES {
    let parent = h3_to_parent(finest, res);
    assert_eq!(h3_get_resolution(parent), res, "resolution {res}");
    assert_eq!(get_mode(parent), 1, "cell mode");
    for r in 1..=res {
      assert_eq!(get_index_digit(parent, r), get_index_digit(finest, r), "digit {r} shared with res {res}");
    }
    assert_eq!(h3_to_parent(h3_to_center_child(parent, res + 1), res), parent, "center child goes back up");
  }
}

#[test]
fn test_metadata_tables() {
  assert_eq!(num_hexagons(0), Ok(122), "base cells");
  assert_eq!(num_hexagons(2), Ok(5_882), "res 2");
  assert!(hex_area_km2(0).expect("valid") > hex_area_km2(1).expect("valid"), "areas shrink");
  assert_eq!(edge_length_m(16), Err(H3Error::ResDomain), "out of range");
  assert_eq!(max_face_count(string_to_h3("85283473fffffff")), 2, "hexagon");
}
