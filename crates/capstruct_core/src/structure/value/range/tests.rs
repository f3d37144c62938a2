use super::{DoubleRange, Grid, GridOverlap, Int64Range, IntRange};

fn grid(min: i128, max: i128, step: i128) -> Grid {
	Grid { min, max, step }
}

#[test]
fn construction_rejects_empty_and_unstepped_ranges() {
	assert!(IntRange::new(5, 5).is_err());
	assert!(IntRange::new(6, 5).is_err());
	assert!(IntRange::with_step(1, 10, 0).is_err());
	assert!(Int64Range::with_step(1, 10, -2).is_err());
	assert!(DoubleRange::new(1.0, 1.0).is_err());
	assert!(DoubleRange::new(f64::NAN, 1.0).is_err());
}

#[test]
fn members_are_anchored_at_min() {
	let range = IntRange::with_step(1, 10, 3).expect("valid range");
	let members: Vec<i32> = (0..=12).filter(|v| range.contains(*v)).collect();
	assert_eq!(members, vec![1, 4, 7, 10]);
}

#[test]
fn nearest_rounds_within_the_step_grid() {
	let range = IntRange::with_step(1, 10, 3).expect("valid range");
	assert_eq!(range.nearest(4), 4);
	assert_eq!(range.nearest(5), 4);
	assert_eq!(range.nearest(6), 7);
	assert_eq!(range.nearest(-100), 1);
	assert_eq!(range.nearest(100), 10);
}

#[test]
fn nearest_ties_round_up() {
	let range = IntRange::with_step(0, 10, 2).expect("valid range");
	assert_eq!(range.nearest(5), 6);
}

#[test]
fn nearest_steps_back_when_rounding_passes_max() {
	let range = IntRange::with_step(0, 9, 4).expect("valid range");
	assert_eq!(range.nearest(9), 8);
}

#[test]
fn overlapping_unit_grids_intersect_to_span() {
	let overlap = grid(320, 640, 1).intersect(grid(480, 1024, 1));
	assert_eq!(overlap, Some(GridOverlap::Span(grid(480, 640, 1))));
}

#[test]
fn touching_grids_collapse_to_point() {
	assert_eq!(grid(0, 10, 1).intersect(grid(10, 20, 1)), Some(GridOverlap::Point(10)));
}

#[test]
fn disjoint_grids_do_not_intersect() {
	assert_eq!(grid(0, 10, 1).intersect(grid(11, 20, 1)), None);
	assert_eq!(grid(0, 20, 2).intersect(grid(1, 21, 2)), None);
}

#[test]
fn stepped_grids_meet_on_common_multiple() {
	let overlap = grid(0, 60, 4).intersect(grid(0, 60, 6));
	assert_eq!(overlap, Some(GridOverlap::Span(grid(0, 60, 12))));

	let shifted = grid(1, 100, 3).intersect(grid(0, 100, 5));
	assert_eq!(shifted, Some(GridOverlap::Span(grid(10, 100, 15))));
}

#[test]
fn subset_requires_grid_alignment() {
	assert!(grid(2, 8, 2).is_subset_of(grid(0, 10, 1)));
	assert!(grid(0, 8, 4).is_subset_of(grid(0, 10, 2)));
	assert!(!grid(1, 9, 2).is_subset_of(grid(0, 10, 2)));
	assert!(!grid(0, 12, 2).is_subset_of(grid(0, 10, 2)));
}

#[test]
fn member_enumeration_respects_limit() {
	assert_eq!(grid(1, 10, 3).members(8), Some(vec![1, 4, 7, 10]));
	assert_eq!(grid(0, 100, 1).members(8), None);
}

#[test]
fn wide_steps_that_never_align_are_disjoint() {
	assert_eq!(grid(0, 2_147_483_646, 2).intersect(grid(1, 2_147_483_647, 1 << 30)), None);
	assert_eq!(
		grid(0, 1_000_000_000_000_000, 2).intersect(grid(1, 1_000_000_000_000_000, 2_000_000_000_000)),
		None
	);
	assert_eq!(grid(7, 1 << 40, (1 << 30) + 1).intersect(grid(5, 1 << 40, 1 << 30)), None);
}

#[test]
fn wide_coprime_steps_meet_on_shared_residue() {
	let overlap = grid(0, 1_000_000_000_000_000, 3).intersect(grid(1, 1_000_000_000_000_000, 2_000_000_000_000));
	assert_eq!(
		overlap,
		Some(GridOverlap::Span(grid(2_000_000_000_001, 998_000_000_000_001, 6_000_000_000_000)))
	);

	let overlap = grid(7, 1 << 62, (1 << 30) + 1).intersect(grid(5, 1 << 62, 1 << 30));
	assert_eq!(
		overlap,
		Some(GridOverlap::Span(grid(
			1_152_921_503_533_105_157,
			3_458_764_514_894_282_757,
			1_152_921_505_680_588_800
		)))
	);
}
