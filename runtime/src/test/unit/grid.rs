//! Grid evaluation tests: midpoint policy, traversal order, degenerate
//! domains, statelessness.

use crate::error::Error;
use crate::func::BinaryFn;
use crate::grid::{Grid2D, evaluate, evaluate_parallel};

extern "C" fn take_x(x: f64, _y: f64) -> f64 {
    x
}

extern "C" fn take_y(_x: f64, y: f64) -> f64 {
    y
}

/// Encodes both coordinates so tests can tell cells apart.
extern "C" fn pack(x: f64, y: f64) -> f64 {
    100.0 * y + x
}

extern "C" fn wave(x: f64, y: f64) -> f64 {
    (x * y).sin() + x
}

#[test]
fn samples_cell_midpoints() {
    let grid = Grid2D { xmin: 0.0, xmax: 1.0, nx: 2, ymin: 0.0, ymax: 1.0, ny: 1 };
    let mut dst = [0.0; 2];

    evaluate(BinaryFn::new(take_x), &grid, &mut dst).unwrap();

    // Midpoints of [0, 0.5] and [0.5, 1].
    assert_eq!(dst, [0.25, 0.75]);
}

#[test]
fn samples_row_midpoints() {
    let grid = Grid2D { xmin: 0.0, xmax: 1.0, nx: 1, ymin: 0.0, ymax: 8.0, ny: 4 };
    let mut dst = [0.0; 4];

    evaluate(BinaryFn::new(take_y), &grid, &mut dst).unwrap();

    assert_eq!(dst, [1.0, 3.0, 5.0, 7.0]);
}

#[test]
fn writes_row_major_with_rows_outer() {
    let grid = Grid2D { xmin: 0.0, xmax: 4.0, nx: 2, ymin: 0.0, ymax: 2.0, ny: 2 };
    let mut dst = vec![f64::NAN; grid.cells()];

    evaluate(BinaryFn::new(pack), &grid, &mut dst).unwrap();

    for iy in 0..grid.ny {
        for ix in 0..grid.nx {
            assert_eq!(dst[iy * grid.nx + ix], 100.0 * grid.y(iy) + grid.x(ix), "cell ({ix}, {iy})");
        }
    }
    // Spelled out: columns at x = 1, 3 and rows at y = 0.5, 1.5.
    assert_eq!(dst, [51.0, 53.0, 151.0, 153.0]);
}

#[test]
fn zero_rows_write_nothing() {
    let grid = Grid2D { xmin: 0.0, xmax: 1.0, nx: 2, ymin: 0.0, ymax: 1.0, ny: 0 };
    let mut dst = [7.0; 4];

    evaluate(BinaryFn::new(take_x), &grid, &mut dst).unwrap();
    assert_eq!(dst, [7.0; 4]);

    evaluate_parallel(BinaryFn::new(take_x), &grid, &mut dst).unwrap();
    assert_eq!(dst, [7.0; 4]);
}

#[test]
fn zero_columns_write_nothing() {
    let grid = Grid2D { xmin: 0.0, xmax: 1.0, nx: 0, ymin: 0.0, ymax: 1.0, ny: 3 };
    let mut dst = [7.0; 4];

    evaluate(BinaryFn::new(take_x), &grid, &mut dst).unwrap();
    assert_eq!(dst, [7.0; 4]);

    evaluate_parallel(BinaryFn::new(take_x), &grid, &mut dst).unwrap();
    assert_eq!(dst, [7.0; 4]);
}

#[test]
fn undersized_destination_is_rejected() {
    let grid = Grid2D { xmin: 0.0, xmax: 1.0, nx: 3, ymin: 0.0, ymax: 1.0, ny: 3 };
    let mut dst = [0.5; 8];

    let err = evaluate(BinaryFn::new(take_x), &grid, &mut dst).unwrap_err();
    assert!(matches!(err, Error::BufferTooSmall { needed: 9, len: 8 }));
    assert_eq!(dst, [0.5; 8], "nothing may be written on rejection");

    let err = evaluate_parallel(BinaryFn::new(take_x), &grid, &mut dst).unwrap_err();
    assert!(matches!(err, Error::BufferTooSmall { needed: 9, len: 8 }));
}

#[test]
fn oversized_destination_keeps_its_tail() {
    let grid = Grid2D { xmin: 0.0, xmax: 1.0, nx: 2, ymin: 0.0, ymax: 1.0, ny: 1 };
    let mut dst = [f64::NAN; 4];

    evaluate(BinaryFn::new(take_x), &grid, &mut dst).unwrap();

    assert_eq!(dst[..2], [0.25, 0.75]);
    assert!(dst[2].is_nan());
    assert!(dst[3].is_nan());
}

#[test]
fn inverted_domain_samples_reversed() {
    let forward = Grid2D { xmin: 0.0, xmax: 1.0, nx: 2, ymin: 0.0, ymax: 1.0, ny: 1 };
    let inverted = Grid2D { xmin: 1.0, xmax: 0.0, ..forward };
    let mut dst = [0.0; 2];

    evaluate(BinaryFn::new(take_x), &inverted, &mut dst).unwrap();

    assert_eq!(dst, [0.75, 0.25]);
}

#[test]
fn evaluation_is_stateless() {
    let grid = Grid2D { xmin: -2.0, xmax: 2.0, nx: 7, ymin: -1.0, ymax: 3.0, ny: 5 };
    let mut first = vec![0.0; grid.cells()];
    let mut second = vec![0.0; grid.cells()];

    evaluate(BinaryFn::new(wave), &grid, &mut first).unwrap();
    evaluate(BinaryFn::new(wave), &grid, &mut second).unwrap();

    let first_bits: Vec<u64> = first.iter().map(|v| v.to_bits()).collect();
    let second_bits: Vec<u64> = second.iter().map(|v| v.to_bits()).collect();
    assert_eq!(first_bits, second_bits);
}
