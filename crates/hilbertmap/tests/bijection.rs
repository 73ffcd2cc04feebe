//! Bijection properties of the 2D and 3D curves.
//!
//! `Curve2D::distance` must hit every value in `[0, 4^k)` exactly once over
//! the grid, and `Curve3D::point_from_distance` must hit every cube cell
//! exactly once over `[0, 8^k)`.

#![allow(missing_docs, clippy::tests_outside_test_module)]

use hilbertmap::{AxisOrder, Curve2D, Curve3D};
use proptest::prelude::*;

const ORDERS2: [&str; 2] = ["xy", "yx"];
const ORDERS3: [&str; 6] = ["xyz", "xzy", "yxz", "yzx", "zxy", "zyx"];

#[test]
fn curve2d_distances_cover_range_once() {
    for order in 0..=6 {
        for axes in ORDERS2 {
            let curve = Curve2D::new(order, axes.parse().unwrap()).unwrap();
            let side = curve.side();
            let mut seen = vec![false; curve.length() as usize];
            for y in 0..side {
                for x in 0..side {
                    let d = curve.distance(x, y).unwrap() as usize;
                    assert!(!seen[d], "order {order} {axes}: distance {d} repeated");
                    seen[d] = true;
                }
            }
            assert!(seen.iter().all(|&s| s), "order {order} {axes}: gap");
        }
    }
}

#[test]
fn curve3d_points_cover_cube_once() {
    for order in 0..=4 {
        for axes in ORDERS3 {
            let curve = Curve3D::new(order, axes.parse().unwrap()).unwrap();
            let side = curve.side() as usize;
            let mut seen = vec![false; side * side * side];
            for d in 0..u64::from(curve.length()) {
                let [x, y, z] = curve.point_from_distance(d).unwrap();
                assert!(x < curve.side() && y < curve.side() && z < curve.side());
                let cell = (x as usize * side + y as usize) * side + z as usize;
                assert!(!seen[cell], "order {order} {axes}: cell {cell} repeated");
                seen[cell] = true;
            }
            assert!(seen.iter().all(|&s| s), "order {order} {axes}: gap");
        }
    }
}

#[test]
fn blocks_4096_grid_endpoints() {
    let curve = Curve2D::new(12, AxisOrder::identity()).unwrap();
    assert_eq!(curve.length(), 1 << 24);
    assert_eq!(curve.distance(0, 0).unwrap(), 0);
    let last = curve.point(curve.length() - 1).unwrap();
    assert_eq!(curve.distance(last[0], last[1]).unwrap(), curve.length() - 1);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// 2D round trip on the largest grid used for colour maps.
    #[test]
    fn curve2d_round_trip(x in 0u32..4096, y in 0u32..4096, swap in any::<bool>()) {
        let axes = if swap { "yx" } else { "xy" };
        let curve = Curve2D::new(12, axes.parse().unwrap()).unwrap();
        let d = curve.distance(x, y).unwrap();
        prop_assert!(d < curve.length());
        prop_assert_eq!(curve.point(d).unwrap(), [x, y]);
    }

    /// 3D round trip over the full 8-bit colour cube.
    #[test]
    fn curve3d_round_trip(d in 0u64..(1 << 24), axes in 0usize..6) {
        let curve = Curve3D::new(8, ORDERS3[axes].parse().unwrap()).unwrap();
        let point = curve.point_from_distance(d).unwrap();
        prop_assert!(point.iter().all(|&c| c < 256));
        prop_assert_eq!(u64::from(curve.distance(point).unwrap()), d);
    }
}
