// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_traits::Float;

/// A complex number in Cartesian form.
///
/// # Examples
///
/// ```rust
/// use verdict::Complex64;
///
/// let z = Complex64::new(3.0, 4.0);
/// assert_eq!(z.norm(), 5.0);
/// assert_eq!(z * z.conj(), Complex64::new(25.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex<F> {
    /// Real part
    pub re: F,
    /// Imaginary part
    pub im: F,
}

/// Single-precision complex number.
pub type Complex32 = Complex<f32>;

/// Double-precision complex number.
pub type Complex64 = Complex<f64>;

impl<F> Complex<F> {
    /// Creates a complex number from its real and imaginary parts.
    pub const fn new(re: F, im: F) -> Self {
        Self { re, im }
    }
}

impl<F: Float> Complex<F> {
    /// The imaginary unit.
    #[must_use]
    pub fn i() -> Self {
        Self::new(F::zero(), F::one())
    }

    /// Returns the complex conjugate.
    #[must_use]
    pub fn conj(self) -> Self {
        Self::new(self.re, -self.im)
    }

    /// Returns the squared magnitude, which avoids the square root of [`norm`](Self::norm).
    #[must_use]
    pub fn norm_sqr(self) -> F {
        self.re * self.re + self.im * self.im
    }

    /// Returns the magnitude.
    #[must_use]
    pub fn norm(self) -> F {
        self.re.hypot(self.im)
    }

    /// Multiplies both parts by a real factor.
    #[must_use]
    pub fn scale(self, factor: F) -> Self {
        Self::new(self.re * factor, self.im * factor)
    }
}

impl<F: Float> Add for Complex<F> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl<F: Float> Sub for Complex<F> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl<F: Float> Mul for Complex<F> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

impl<F: Float> Mul<F> for Complex<F> {
    type Output = Self;

    fn mul(self, rhs: F) -> Self {
        self.scale(rhs)
    }
}

impl<F: Float> Neg for Complex<F> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.re, -self.im)
    }
}

impl<F: Float + fmt::Display> fmt::Display for Complex<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im.is_sign_negative() {
            write!(f, "{}-{}i", self.re, -self.im)
        } else {
            write!(f, "{}+{}i", self.re, self.im)
        }
    }
}
