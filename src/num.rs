//! Scalar traits a [`Complex`](crate::Complex) can be built over.

use core::cmp::{PartialEq, PartialOrd};
use core::ops::{Add, Div, Mul, Neg, Rem, Sub};
use core::ops::{AddAssign, DivAssign, MulAssign, RemAssign, SubAssign};

/// Forward a method to the inherent method of the same name.
macro_rules! forward {
	($( Self :: $method:ident ( self $( , $arg:ident : $ty:ty )* ) -> $ret:ty ; )*) => {$(
		#[inline]
		fn $method(self $( , $arg : $ty )* ) -> $ret {
			Self::$method(self $( , $arg )* )
		}
	)*};
}

pub trait Cast: Sized {
	fn from_f64(v: f64) -> Self;
	fn as_f64(&self) -> f64;
}

/// Lossy conversion between two number types, routed through `f64`.
pub fn cast<T: Number, U: Number>(v: T) -> U {
	U::from_f64(v.as_f64())
}

pub trait NumOps<Rhs = Self, Output = Self>:
	Add<Rhs, Output = Output> +
	Sub<Rhs, Output = Output> +
	Mul<Rhs, Output = Output> +
	Div<Rhs, Output = Output> +
	Rem<Rhs, Output = Output>
{}

impl<T, Rhs, Output> NumOps<Rhs, Output> for T where T:
	Add<Rhs, Output = Output> +
	Sub<Rhs, Output = Output> +
	Mul<Rhs, Output = Output> +
	Div<Rhs, Output = Output> +
	Rem<Rhs, Output = Output>
{}

pub trait NumAssignOps<Rhs = Self>:
	AddAssign<Rhs> +
	SubAssign<Rhs> +
	MulAssign<Rhs> +
	DivAssign<Rhs> +
	RemAssign<Rhs>
{}

impl<T, Rhs> NumAssignOps<Rhs> for T where T:
	AddAssign<Rhs> +
	SubAssign<Rhs> +
	MulAssign<Rhs> +
	DivAssign<Rhs> +
	RemAssign<Rhs>
{}

pub trait Base: Copy + NumOps + NumAssignOps {
	const ZERO: Self;
	const ONE: Self;
	const TWO: Self;

	const MIN: Self;
	const MAX: Self;
}

/// Any primitive integer or float.
pub trait Number: Base + Cast + Default + PartialEq + PartialOrd {}

macro_rules! number_impl {
	($($t:ident),*) => {$(
		impl Base for $t {
			const ZERO: Self = 0 as Self;
			const ONE: Self = 1 as Self;
			const TWO: Self = 2 as Self;

			const MIN: Self = $t::MIN;
			const MAX: Self = $t::MAX;
		}

		impl Number for $t {}

		impl Cast for $t {
			fn from_f64(v: f64) -> Self {
				v as Self
			}

			fn as_f64(&self) -> f64 {
				*self as f64
			}
		}
	)*}
}

number_impl!(u8, i8, u16, i16, u32, i32, u64, i64, u128, i128, usize, isize, f32, f64);

pub trait SignedNumber: Number + Neg<Output = Self> {
	const MINUS_ONE: Self;
}

pub trait SignedNumberOps: SignedNumber {
	fn signum(self) -> Self;
	fn abs(self) -> Self;
}

macro_rules! signed_number_impl {
	($($t:ident => $minus_one:literal),*) => {$(
		impl SignedNumber for $t {
			const MINUS_ONE: Self = $minus_one;
		}

		impl SignedNumberOps for $t {
			forward! {
				Self::signum(self) -> Self;
				Self::abs(self) -> Self;
			}
		}
	)*}
}

signed_number_impl!(i8 => -1, i16 => -1, i32 => -1, i64 => -1, i128 => -1, isize => -1, f32 => -1.0, f64 => -1.0);

/// An IEEE-754 binary float.
pub trait Float: SignedNumber {
	const PI: Self;
	const FRAC_PI_2: Self;
}

pub trait FloatOps: Float + SignedNumberOps {
	/// True when `self` and `b` differ by less than `eps`.
	fn approx(self, b: Self, eps: Self) -> bool;
	fn atan(self) -> Self;
	/// Four-quadrant arctangent of `self / x`, with `self` as the y coordinate.
	fn atan2(self, x: Self) -> Self;
	fn is_finite(self) -> bool;
	fn is_nan(self) -> bool;
	fn sin_cos(self) -> (Self, Self);
	fn sqrt(self) -> Self;
}

macro_rules! float_impl {
	($($t:ident),*) => {$(
		impl Float for $t {
			const PI: Self = core::$t::consts::PI;
			const FRAC_PI_2: Self = core::$t::consts::FRAC_PI_2;
		}

		impl FloatOps for $t {
			fn approx(self, b: Self, eps: Self) -> bool {
				Self::abs(self - b) < eps
			}

			forward! {
				Self::atan(self) -> Self;
				Self::atan2(self, x: Self) -> Self;
				Self::is_finite(self) -> bool;
				Self::is_nan(self) -> bool;
				Self::sin_cos(self) -> (Self, Self);
				Self::sqrt(self) -> Self;
			}
		}
	)*}
}

float_impl!(f32, f64);

#[cfg(test)]
mod tests {
	use super::*;

	fn quarter_turn<T: Float + FloatOps>() -> T {
		T::ONE.atan2(T::ZERO)
	}

	#[test]
	fn atan2_takes_y_first() {
		assert_eq!(quarter_turn::<f64>(), core::f64::consts::FRAC_PI_2, "atan2(1, 0) is not pi/2");
		assert_eq!(quarter_turn::<f32>(), core::f32::consts::FRAC_PI_2, "atan2(1, 0) is not pi/2");
		assert_eq!(FloatOps::atan2(0.0f64, -1.0), f64::PI);
		assert!((FloatOps::atan(1.0f64) * 4.0).approx(f64::PI, 1e-15));
	}

	#[test]
	fn casts() {
		assert_eq!(cast::<i32, f64>(-3), -3.0);
		assert_eq!(cast::<f64, u8>(200.7), 200);
		assert_eq!(cast::<f32, f64>(0.5), 0.5);
	}

	#[test]
	fn approx() {
		assert!(1.0f64.approx(1.0 + 1e-12, 1e-9));
		assert!(!1.0f32.approx(1.1, 1e-3));
		assert!(!f64::NAN.approx(f64::NAN, 1.0), "NaN must never compare approximately equal");
	}

	#[test]
	fn constants() {
		assert_eq!(<i64 as Base>::TWO, 2);
		assert_eq!(<f32 as SignedNumber>::MINUS_ONE, -1.0);
		assert_eq!(<u8 as Base>::MAX, 255);
	}
}
