//! Zero-copy views between `[Complex<T>]` and interleaved `[re, im, re, im, ...]` buffers.
//!
//! This is the form in which FFT libraries and GPU APIs exchange complex data.

use bytemuck::Pod;

use super::{Complex, Error};

/// Views complex values as `2 * values.len()` interleaved scalars.
pub fn as_interleaved<T: Pod>(values: &[Complex<T>]) -> &[T] {
	bytemuck::cast_slice(values)
}

pub fn as_interleaved_mut<T: Pod>(values: &mut [Complex<T>]) -> &mut [T] {
	bytemuck::cast_slice_mut(values)
}

/// Views an interleaved scalar buffer as complex values.
///
/// Fails if the buffer has odd length.
pub fn from_interleaved<T: Pod>(scalars: &[T]) -> Result<&[Complex<T>], Error> {
	check_len(scalars.len())?;
	Ok(bytemuck::try_cast_slice(scalars)?)
}

pub fn from_interleaved_mut<T: Pod>(scalars: &mut [T]) -> Result<&mut [Complex<T>], Error> {
	check_len(scalars.len())?;
	Ok(bytemuck::try_cast_slice_mut(scalars)?)
}

fn check_len(len: usize) -> Result<(), Error> {
	if len % 2 != 0 {
		log::warn!(target: "fft_complex::interleave", "Rejected interleaved buffer of odd length {}", len);
		return Err(Error::OddLength { len });
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::Complex64;

	#[test]
	fn views() {
		let values = [Complex::new(1.0, 2.0), Complex::new(3.0, 4.0)];
		assert_eq!(as_interleaved(&values), &[1.0, 2.0, 3.0, 4.0]);

		let scalars = [1.0f32, -1.0, 0.5, 0.25];
		let values = from_interleaved(&scalars).unwrap();
		assert_eq!(values, &[Complex::new(1.0, -1.0), Complex::new(0.5, 0.25)]);
	}

	#[test]
	fn mutate_through_views() {
		let mut scalars = [0.0f64; 4];

		for z in from_interleaved_mut(&mut scalars).unwrap() {
			*z += Complex::new(1.0, 2.0);
			*z *= Complex::I;
		}

		assert_eq!(scalars, [-2.0, 1.0, -2.0, 1.0]);

		let mut values = [Complex64::ONE; 2];
		as_interleaved_mut(&mut values)[3] = 7.0;
		assert_eq!(values[1], Complex::new(1.0, 7.0));
	}

	#[test]
	fn odd_length() {
		let scalars = [1.0f64, 2.0, 3.0];

		assert_eq!(from_interleaved(&scalars), Err(Error::OddLength { len: 3 }));
		assert_eq!(from_interleaved(&scalars[..0]).map(<[_]>::len), Ok(0));
		assert_eq!(Error::OddLength { len: 3 }.to_string(), "interleaved buffer has odd length 3");
	}
}
