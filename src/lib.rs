//! A `#[repr(C)]` complex number that is layout-compatible with the
//! `{ re, im }` complex structs FFT libraries operate on.

pub mod interleave;
pub mod num;

mod complex;

pub use complex::{Complex, Complex32, Complex64};
pub use interleave::{as_interleaved, as_interleaved_mut, from_interleaved, from_interleaved_mut};

/// Failure to reinterpret a scalar buffer as complex values.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Error {
	/// The buffer holds a dangling real part with no imaginary part.
	OddLength { len: usize },
	/// The underlying byte cast was rejected.
	Cast(bytemuck::PodCastError),
}

impl std::fmt::Debug for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Error::OddLength { len } => write!(f, "OddLength({len})"),
			Error::Cast(err) => write!(f, "Cast({err:?})"),
		}
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Error::OddLength { len } => write!(f, "interleaved buffer has odd length {len}"),
			Error::Cast(err) => write!(f, "buffer cannot be reinterpreted: {err}"),
		}
	}
}

impl std::error::Error for Error {}

impl From<bytemuck::PodCastError> for Error {
	fn from(err: bytemuck::PodCastError) -> Error {
		Error::Cast(err)
	}
}
