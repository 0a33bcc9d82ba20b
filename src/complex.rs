use std::fmt;
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::num::{Float, FloatOps, Number, SignedNumber};

/// A complex number `re + im·i`.
///
/// The layout is exactly `{ re, im }` with no padding, so a `Complex<f64>` may be
/// handed to any library that expects a C `double[2]` or `fftw_complex`, and a
/// `[Complex<T>]` may be viewed as an interleaved `[T]`. See [`crate::interleave`].
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Complex<T> {
	pub re: T,
	pub im: T,
}

pub type Complex32 = Complex<f32>;
pub type Complex64 = Complex<f64>;

// SAFETY: `#[repr(C)]` over two fields of the same type has no padding, and every
// bit pattern is valid when it is valid for `T`.
unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Complex<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Complex<T> {}

impl<T> Complex<T> {
	pub const fn new(re: T, im: T) -> Self {
		Self { re, im }
	}
}

impl<T: Number> Complex<T> {
	pub const ZERO: Self = Self::new(T::ZERO, T::ZERO);
	pub const ONE: Self = Self::new(T::ONE, T::ZERO);
	pub const I: Self = Self::new(T::ZERO, T::ONE);

	/// Constructs a purely real complex number.
	pub const fn from_real(re: T) -> Self {
		Self::new(re, T::ZERO)
	}

	pub fn real(&self) -> T {
		self.re
	}

	pub fn imag(&self) -> T {
		self.im
	}

	pub fn to_parts(self) -> (T, T) {
		(self.re, self.im)
	}

	/// The squared magnitude `re² + im²`. Overflows the same way `T` does.
	pub fn magsq(&self) -> T {
		self.re * self.re + self.im * self.im
	}

	/// Multiplies both parts by a real factor.
	pub fn scale(&self, k: T) -> Self {
		Self::new(self.re * k, self.im * k)
	}

	/// Divides both parts by a real factor.
	pub fn unscale(&self, k: T) -> Self {
		Self::new(self.re / k, self.im / k)
	}

	/// Divides by `rhs`, or `None` if `rhs` has zero magnitude.
	pub fn checked_div(self, rhs: Self) -> Option<Self> {
		(rhs.magsq() != T::ZERO).then(|| self / rhs)
	}
}

impl<T: SignedNumber> Complex<T> {
	pub fn conj(&self) -> Self {
		Self::new(self.re, -self.im)
	}

	/// Returns the reciprocal, or `None` if this number has zero magnitude.
	pub fn inv(&self) -> Option<Self> {
		let magsq = self.magsq();
		(magsq != T::ZERO).then(|| self.conj().unscale(magsq))
	}
}

impl<T: Float + FloatOps> Complex<T> {
	/// Constructs a complex number from its magnitude and phase in radians.
	pub fn from_polar(mag: T, phase: T) -> Self {
		let (sin, cos) = phase.sin_cos();
		Self::new(mag * cos, mag * sin)
	}

	pub fn mag(&self) -> T {
		self.magsq().sqrt()
	}

	/// The angle from the positive real axis in radians, in `(-pi, pi]`.
	///
	/// Zero (of either sign) has phase `0`.
	pub fn phase(&self) -> T {
		if self.re == T::ZERO && self.im == T::ZERO {
			return T::ZERO;
		}

		let angle = self.im.atan2(self.re);

		// A negative zero imaginary part lands on -pi.
		if angle == -T::PI { T::PI } else { angle }
	}

	/// True when both parts are within `eps` of `other`'s.
	pub fn approx(&self, other: Self, eps: T) -> bool {
		self.re.approx(other.re, eps) && self.im.approx(other.im, eps)
	}

	pub fn is_nan(&self) -> bool {
		self.re.is_nan() || self.im.is_nan()
	}

	pub fn is_finite(&self) -> bool {
		self.re.is_finite() && self.im.is_finite()
	}
}

impl<T: Number> From<T> for Complex<T> {
	fn from(re: T) -> Self {
		Self::from_real(re)
	}
}

impl<T> From<(T, T)> for Complex<T> {
	fn from((re, im): (T, T)) -> Self {
		Self::new(re, im)
	}
}

impl<T: SignedNumber> Neg for Complex<T> {
	type Output = Complex<T>;

	fn neg(self) -> Self::Output {
		Self::new(-self.re, -self.im)
	}
}

impl<T: Number> AddAssign for Complex<T> {
	fn add_assign(&mut self, rhs: Self) {
		self.re += rhs.re;
		self.im += rhs.im;
	}
}

impl<T: Number> SubAssign for Complex<T> {
	fn sub_assign(&mut self, rhs: Self) {
		self.re -= rhs.re;
		self.im -= rhs.im;
	}
}

impl<T: Number> MulAssign for Complex<T> {
	/// `(a+bi)(c+di) = (ac-bd) + (ad+bc)i`
	fn mul_assign(&mut self, rhs: Self) {
		let Self { re: a, im: b } = *self;
		let Self { re: c, im: d } = rhs;

		self.re = a * c - b * d;
		self.im = a * d + b * c;
	}
}

impl<T: Number> DivAssign for Complex<T> {
	/// `(a+bi)/(c+di) = ((ac+bd) + (bc-ad)i) / (c²+d²)`
	///
	/// A zero divisor is not checked: floats produce Inf/NaN parts and integers panic.
	/// Use [`Complex::checked_div`] to test for it.
	fn div_assign(&mut self, rhs: Self) {
		let Self { re: a, im: b } = *self;
		let Self { re: c, im: d } = rhs;
		let magsq = rhs.magsq();

		self.re = (a * c + b * d) / magsq;
		self.im = (b * c - a * d) / magsq;
	}
}

impl<T: Number> MulAssign<T> for Complex<T> {
	fn mul_assign(&mut self, rhs: T) {
		*self = self.scale(rhs);
	}
}

impl<T: Number> DivAssign<T> for Complex<T> {
	fn div_assign(&mut self, rhs: T) {
		*self = self.unscale(rhs);
	}
}

/// Implements a binary operator on top of its compound assignment form.
macro_rules! binop_impl {
	($($imp:ident :: $method:ident => $assign:ident;)*) => {$(
		impl<T: Number> $imp for Complex<T> {
			type Output = Complex<T>;

			fn $method(mut self, rhs: Self) -> Self::Output {
				self.$assign(rhs);
				self
			}
		}

		impl<T: Number> $imp<T> for Complex<T> {
			type Output = Complex<T>;

			fn $method(mut self, rhs: T) -> Self::Output {
				self.$assign(rhs);
				self
			}
		}

		impl<'a, T: Number> $imp<&'a Complex<T>> for Complex<T> {
			type Output = Complex<T>;

			fn $method(self, rhs: &'a Complex<T>) -> Self::Output {
				self.$method(*rhs)
			}
		}

		impl<'a, T: Number> $imp<Complex<T>> for &'a Complex<T> {
			type Output = Complex<T>;

			fn $method(self, rhs: Complex<T>) -> Self::Output {
				(*self).$method(rhs)
			}
		}

		impl<'a, 'b, T: Number> $imp<&'b Complex<T>> for &'a Complex<T> {
			type Output = Complex<T>;

			fn $method(self, rhs: &'b Complex<T>) -> Self::Output {
				(*self).$method(*rhs)
			}
		}
	)*};
}

binop_impl! {
	Add::add => add_assign;
	Sub::sub => sub_assign;
	Mul::mul => mul_assign;
	Div::div => div_assign;
}

impl<T: Number> AddAssign<T> for Complex<T> {
	fn add_assign(&mut self, rhs: T) {
		self.re += rhs;
	}
}

impl<T: Number> SubAssign<T> for Complex<T> {
	fn sub_assign(&mut self, rhs: T) {
		self.re -= rhs;
	}
}

impl<T: Number> Sum for Complex<T> {
	fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
		iter.fold(Self::ZERO, Add::add)
	}
}

impl<'a, T: Number> Sum<&'a Complex<T>> for Complex<T> {
	fn sum<I: Iterator<Item = &'a Complex<T>>>(iter: I) -> Self {
		iter.fold(Self::ZERO, Add::add)
	}
}

impl<T: Number> Product for Complex<T> {
	fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
		iter.fold(Self::ONE, Mul::mul)
	}
}

impl<'a, T: Number> Product<&'a Complex<T>> for Complex<T> {
	fn product<I: Iterator<Item = &'a Complex<T>>>(iter: I) -> Self {
		iter.fold(Self::ONE, Mul::mul)
	}
}

impl<T: Number + fmt::Display> fmt::Display for Complex<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.im < T::ZERO {
			write!(f, "{}{}i", self.re, self.im)
		} else {
			write!(f, "{}+{}i", self.re, self.im)
		}
	}
}
