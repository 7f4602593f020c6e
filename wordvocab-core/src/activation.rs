//! Activation functions for the recurrent layers built on top of the encoded documents.
//!
//! [`Sigmoid`] is implemented for `f32`, `f64` and `ndarray` arrays of any dimension; arrays are
//! mapped elementwise and keep their shape.

use ndarray::{Array, ArrayBase, Data, Dimension, NdFloat};

/// Trait for the logistic function `1 / (1 + exp(-x))` (e.g. `x.sigmoid()` or `(&arr).sigmoid()`).
pub trait Sigmoid {
    /// Result of the activation.
    type Output;

    /// Returns `sigmoid(self)`, elementwise for arrays.
    #[must_use]
    fn sigmoid(self) -> Self::Output;
}

impl Sigmoid for f64 {
    type Output = f64;

    fn sigmoid(self) -> f64 {
        1.0 / (1.0 + (-self).exp())
    }
}

impl Sigmoid for f32 {
    type Output = f32;

    fn sigmoid(self) -> f32 {
        1.0 / (1.0 + (-self).exp())
    }
}

impl<A, S, D> Sigmoid for &ArrayBase<S, D>
where
    A: NdFloat,
    S: Data<Elem = A>,
    D: Dimension,
{
    type Output = Array<A, D>;

    fn sigmoid(self) -> Array<A, D> {
        self.mapv(logistic)
    }
}

impl<A, D> Sigmoid for Array<A, D>
where
    A: NdFloat,
    D: Dimension,
{
    type Output = Array<A, D>;

    fn sigmoid(self) -> Array<A, D> {
        self.mapv_into(logistic)
    }
}

fn logistic<A: NdFloat>(x: A) -> A {
    A::one() / (A::one() + (-x).exp())
}

/// Logistic function for a scalar or an array: `1 / (1 + exp(-x))`.
///
/// No clamping: for very negative `x`, `exp(-x)` overflows to infinity and the result underflows
/// to `0.0`. Use [`stable_sigmoid`] when that matters.
#[must_use]
pub fn sigmoid<T: Sigmoid>(x: T) -> T::Output {
    x.sigmoid()
}

/// Sigmoid that never overflows `exp`: negative inputs use `exp(x) / (1 + exp(x))`.
#[must_use]
pub fn stable_sigmoid(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}
