//! Complex numbers, reflected as scalars.

use core::fmt;

/// A complex number in Cartesian form.
///
/// Written on the wire as `#C(re im)`.
///
/// # Examples
///
/// ```
/// use sx_reflect::complex::Complex64;
///
/// let z = Complex64::new(1.0, 2.0);
/// assert_eq!(z.to_string(), "1+2i");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Complex<T> {
    pub re: T,
    pub im: T,
}

/// A complex number with `f32` parts.
pub type Complex32 = Complex<f32>;

/// A complex number with `f64` parts.
pub type Complex64 = Complex<f64>;

impl<T> Complex<T> {
    /// Creates a complex number from its real and imaginary parts.
    #[inline]
    pub const fn new(re: T, im: T) -> Self {
        Self { re, im }
    }
}

impl<T: fmt::Display + PartialOrd + Default> fmt::Display for Complex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im < T::default() {
            write!(f, "{}{}i", self.re, self.im)
        } else {
            write!(f, "{}+{}i", self.re, self.im)
        }
    }
}
