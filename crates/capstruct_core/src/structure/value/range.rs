use crate::structure::{Result, StructureError};

/// Stepped integer set `{ min + k*step }` bounded by `max`, in a width that fits every range kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Grid {
	pub(crate) min: i128,
	pub(crate) max: i128,
	pub(crate) step: i128,
}

/// Outcome of intersecting two grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GridOverlap {
	Point(i128),
	Span(Grid),
}

impl Grid {
	pub(crate) fn contains(self, value: i128) -> bool {
		value >= self.min && value <= self.max && (value - self.min) % self.step == 0
	}

	/// Largest member.
	pub(crate) fn last(self) -> i128 {
		self.min + (self.max - self.min) / self.step * self.step
	}

	pub(crate) fn len(self) -> i128 {
		(self.max - self.min) / self.step + 1
	}

	/// Members in ascending order, or `None` when there are more than `limit`.
	pub(crate) fn members(self, limit: usize) -> Option<Vec<i128>> {
		if self.len() > limit as i128 {
			return None;
		}
		let mut out = Vec::with_capacity(self.len() as usize);
		let mut value = self.min;
		while value <= self.max {
			out.push(value);
			value += self.step;
		}
		Some(out)
	}

	pub(crate) fn intersect(self, other: Grid) -> Option<GridOverlap> {
		let lo = self.min.max(other.min);
		let hi = self.max.min(other.max);
		if lo > hi {
			return None;
		}

		// Members shared by both grids form one residue class modulo the lcm.
		let g = gcd(self.step, other.step);
		let offset = other.min - self.min;
		if offset % g != 0 {
			return None;
		}
		let step = self.step / g * other.step;
		let modulus = other.step / g;
		let (_, inverse, _) = extended_gcd(self.step, other.step);
		let k = (offset / g).rem_euclid(modulus) * inverse.rem_euclid(modulus) % modulus;
		let anchor = self.min + self.step * k;
		let first = lo + (anchor - lo).rem_euclid(step);
		if first > hi {
			return None;
		}

		let last = first + (hi - first) / step * step;
		if last == first {
			Some(GridOverlap::Point(first))
		} else {
			Some(GridOverlap::Span(Grid { min: first, max: last, step }))
		}
	}

	/// Whether every member of `self` is a member of `other`.
	pub(crate) fn is_subset_of(self, other: Grid) -> bool {
		if self.len() == 1 {
			return other.contains(self.min);
		}
		other.contains(self.min) && self.last() <= other.max && self.step % other.step == 0
	}

	/// Member closest to `target`; ties round up, never past `max`.
	pub(crate) fn nearest(self, target: i128) -> i128 {
		let target = target.clamp(self.min, self.max);
		let rem = (target - self.min) % self.step;
		let mut value = target - rem;
		if rem * 2 >= self.step {
			value += self.step;
		}
		if value > self.max {
			value -= self.step;
		}
		value
	}
}

fn gcd(mut a: i128, mut b: i128) -> i128 {
	while b != 0 {
		let t = a % b;
		a = b;
		b = t;
	}
	a.abs()
}

/// `(g, x, y)` with `a*x + b*y == g`.
fn extended_gcd(a: i128, b: i128) -> (i128, i128, i128) {
	let (mut old_r, mut r) = (a, b);
	let (mut old_x, mut x) = (1, 0);
	let (mut old_y, mut y) = (0, 1);
	while r != 0 {
		let q = old_r / r;
		(old_r, r) = (r, old_r - q * r);
		(old_x, x) = (x, old_x - q * x);
		(old_y, y) = (y, old_y - q * y);
	}
	(old_r, old_x, old_y)
}

macro_rules! stepped_range {
	($(#[$meta:meta])* $name:ident, $int:ty) => {
		$(#[$meta])*
		#[derive(Debug, Clone, Copy, PartialEq, Eq)]
		pub struct $name {
			min: $int,
			max: $int,
			step: $int,
		}

		impl $name {
			/// Range with unit step; requires `min < max`.
			pub fn new(min: $int, max: $int) -> Result<Self> {
				Self::with_step(min, max, 1)
			}

			/// Range whose members are `min + k*step` up to `max`; requires `min < max` and `step > 0`.
			pub fn with_step(min: $int, max: $int, step: $int) -> Result<Self> {
				if min >= max || step <= 0 {
					return Err(StructureError::InvalidRange {
						min: min.to_string(),
						max: max.to_string(),
						step: step.to_string(),
					});
				}
				Ok(Self { min, max, step })
			}

			/// Lower bound (always a member).
			pub fn min(&self) -> $int {
				self.min
			}

			/// Upper bound as given at construction.
			pub fn max(&self) -> $int {
				self.max
			}

			/// Distance between members.
			pub fn step(&self) -> $int {
				self.step
			}

			/// Whether `value` is a member.
			pub fn contains(&self, value: $int) -> bool {
				self.grid().contains(i128::from(value))
			}

			/// Member closest to `target`; ties round up.
			pub fn nearest(&self, target: $int) -> $int {
				// Members lie inside [min, max], so the narrowing is lossless.
				self.grid().nearest(i128::from(target)) as $int
			}

			pub(crate) fn grid(&self) -> Grid {
				Grid {
					min: i128::from(self.min),
					max: i128::from(self.max),
					step: i128::from(self.step),
				}
			}

			pub(crate) fn from_grid(grid: Grid) -> Option<Self> {
				Some(Self {
					min: <$int>::try_from(grid.min).ok()?,
					max: <$int>::try_from(grid.max).ok()?,
					step: <$int>::try_from(grid.step).ok()?,
				})
			}
		}
	};
}

stepped_range!(
	/// Stepped range of 32-bit integers.
	IntRange,
	i32
);

stepped_range!(
	/// Stepped range of 64-bit integers.
	Int64Range,
	i64
);

/// Closed range of doubles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoubleRange {
	min: f64,
	max: f64,
}

impl DoubleRange {
	/// Closed range `[min, max]`; requires `min < max`.
	pub fn new(min: f64, max: f64) -> Result<Self> {
		if min.is_nan() || max.is_nan() || min >= max {
			return Err(StructureError::InvalidRange {
				min: min.to_string(),
				max: max.to_string(),
				step: "-".into(),
			});
		}
		Ok(Self { min, max })
	}

	/// Lower bound.
	pub fn min(&self) -> f64 {
		self.min
	}

	/// Upper bound.
	pub fn max(&self) -> f64 {
		self.max
	}

	/// Whether `value` lies within the bounds.
	pub fn contains(&self, value: f64) -> bool {
		value >= self.min && value <= self.max
	}
}

#[cfg(test)]
mod tests;
