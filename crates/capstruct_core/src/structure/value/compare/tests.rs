use crate::structure::{DoubleRange, Int64Range, IntRange, Value, ValueOrder};

fn int_range(min: i32, max: i32, step: i32) -> Value {
	Value::from(IntRange::with_step(min, max, step).expect("valid range"))
}

#[test]
fn scalars_order_naturally() {
	assert_eq!(Value::Int(1).compare(&Value::Int(2)), ValueOrder::Less);
	assert_eq!(Value::UInt64(9).compare(&Value::UInt64(3)), ValueOrder::Greater);
	assert_eq!(Value::from("abc").compare(&Value::from("abd")), ValueOrder::Less);
	assert_eq!(Value::Bool(true).compare(&Value::Bool(false)), ValueOrder::Unordered);
	assert_eq!(Value::Int(1).compare(&Value::Int64(1)), ValueOrder::Unordered);
	assert_eq!(Value::Double(f64::NAN).compare(&Value::Double(f64::NAN)), ValueOrder::Unordered);
}

#[test]
fn null_strings_only_equal_each_other() {
	assert_eq!(Value::null_string().compare(&Value::null_string()), ValueOrder::Equal);
	assert_eq!(Value::null_string().compare(&Value::from("")), ValueOrder::Unordered);
}

#[test]
fn list_comparison_ignores_order() {
	assert_eq!(Value::list([1, 2, 3]), Value::list([3, 1, 2]));
	assert_ne!(Value::list([1, 1, 2]), Value::list([1, 2, 2]));
	assert_ne!(Value::array([1, 2]), Value::array([2, 1]));
}

#[test]
fn single_element_list_compares_like_its_element() {
	assert_eq!(Value::list([5]).compare(&Value::Int(5)), ValueOrder::Equal);
	assert_eq!(Value::list([5]).compare(&Value::Int(7)), ValueOrder::Less);
	assert_eq!(Value::Int(7).compare(&Value::list([5])), ValueOrder::Greater);
	assert_eq!(Value::list([5, 6]).compare(&Value::Int(5)), ValueOrder::Unordered);
}

#[test]
fn list_equals_range_with_the_same_members() {
	assert_eq!(Value::list([1, 4, 7, 10]).compare(&int_range(1, 10, 3)), ValueOrder::Equal);
	assert_eq!(int_range(1, 10, 3).compare(&Value::list([10, 7, 4, 1])), ValueOrder::Equal);
	assert_ne!(Value::list([1, 4, 7]), int_range(1, 10, 3));
	assert_ne!(Value::list([1, 4, 4, 7, 10]), int_range(1, 10, 3));
}

#[test]
fn range_and_scalar_intersect_to_the_scalar() {
	let range = int_range(320, 640, 1);
	assert_eq!(range.intersect(&Value::Int(480)), Some(Value::Int(480)));
	assert_eq!(Value::Int(100).intersect(&range), None);
	assert_eq!(int_range(0, 10, 5).intersect(&Value::Int(3)), None);
	assert!(range.can_intersect(&Value::Int(1)));
	assert!(!range.can_intersect(&Value::from("x")));
}

#[test]
fn stepped_ranges_intersect_on_the_common_grid() {
	let hit = int_range(0, 30, 2).intersect(&int_range(1, 30, 3));
	assert_eq!(hit, Some(int_range(4, 28, 6)));

	let point = int_range(0, 10, 1).intersect(&int_range(10, 20, 1));
	assert_eq!(point, Some(Value::Int(10)));

	assert_eq!(int_range(0, 10, 2).intersect(&int_range(1, 11, 2)), None);
}

#[test]
fn int64_and_double_ranges_intersect() {
	let a = Value::from(Int64Range::new(0, 1 << 40).expect("valid range"));
	let b = Value::from(Int64Range::new(1 << 39, 1 << 41).expect("valid range"));
	let expected = Value::from(Int64Range::new(1 << 39, 1 << 40).expect("valid range"));
	assert_eq!(a.intersect(&b), Some(expected));

	let c = Value::from(DoubleRange::new(0.0, 1.0).expect("valid range"));
	let d = Value::from(DoubleRange::new(1.0, 2.0).expect("valid range"));
	assert_eq!(c.intersect(&d), Some(Value::Double(1.0)));
	assert_eq!(c.intersect(&Value::Double(0.5)), Some(Value::Double(0.5)));
}

#[test]
fn list_intersection_keeps_distinct_survivors() {
	let hit = Value::list([1, 2, 3, 4]).intersect(&Value::list([4, 2, 9]));
	assert_eq!(hit, Some(Value::list([2, 4])));

	let single = Value::list([1, 2]).intersect(&Value::Int(2));
	assert_eq!(single, Some(Value::Int(2)));

	let ranged = Value::List(vec![int_range(0, 5, 1), int_range(3, 8, 1)]).intersect(&Value::Int(4));
	assert_eq!(ranged, Some(Value::Int(4)));

	assert_eq!(Value::list(["a"]).intersect(&Value::list(["b"])), None);
}

#[test]
fn arrays_intersect_element_wise() {
	let a = Value::Array(vec![Value::Int(1), int_range(0, 10, 1)]);
	let b = Value::array([1, 5]);
	assert_eq!(a.intersect(&b), Some(Value::array([1, 5])));
	assert_eq!(a.intersect(&Value::array([1])), None);
}

#[test]
fn subset_covers_ranges_and_lists() {
	assert!(Value::Int(5).is_subset(&int_range(0, 10, 1)));
	assert!(int_range(2, 8, 2).is_subset(&int_range(0, 10, 2)));
	assert!(!int_range(1, 9, 2).is_subset(&int_range(0, 10, 2)));
	assert!(Value::list([1, 2]).is_subset(&Value::list([3, 2, 1])));
	assert!(!Value::list([1, 4]).is_subset(&Value::list([1, 2])));
	assert!(int_range(1, 3, 1).is_subset(&Value::list([1, 2, 3, 4])));
	assert!(!int_range(1, 5, 1).is_subset(&Value::list([1, 2, 3, 4])));
	assert!(Value::from(7).is_subset(&Value::from(7)));
}

#[test]
fn huge_range_is_not_enumerated_against_a_list() {
	let big = int_range(0, i32::MAX, 1);
	assert!(!big.is_subset(&Value::list([0, 1, 2])));
}
