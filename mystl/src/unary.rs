//! Type-level natural numbers, represented by zero [`Z`] and successor [`S`].
//!
//! Element positions inside a [`Tuple`](crate::Tuple) are unary numbers: the first element sits at
//! [`Z`], the second at `S<Z>`, and so on. Ordinary `const` indices are mapped onto them through
//! [`UnaryOf`], which is how `t.get::<2>()` finds its slot.

/// The number zero: the position of the first element.
///
/// # Examples
///
/// ```
/// use mystl::unary::{Unary, Z};
///
/// assert_eq!(Z::VALUE, 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Z;

/// The successor of `N`, that is, the position right after `N`.
///
/// # Examples
///
/// ```
/// use mystl::unary::{Unary, S, Z};
///
/// let second: S<Z> = S(Z);
/// assert_eq!(<S<Z>>::VALUE, 1);
/// ```
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct S<N>(pub N);

/// The unary number corresponding to the constant `N`.
///
/// Defined for `N` in `0..=64`.
pub type UnaryOf<const N: usize> = <Number<N> as ToUnary>::AsUnary;

/// All unary numbers can be converted to their value-level equivalent `usize`.
///
/// # Examples
///
/// ```
/// use mystl::unary::*;
///
/// assert_eq!(<UnaryOf<0>>::VALUE, 0);
/// assert_eq!(<UnaryOf<7>>::VALUE, 7);
/// assert_eq!(<UnaryOf<64>>::VALUE, 64);
/// ```
pub trait Unary: sealed::Unary + Sized + Sync + Send + 'static {
    /// The runtime value of this type-level number.
    const VALUE: usize;
}

impl Unary for Z {
    const VALUE: usize = 0;
}

impl<N: Unary> Unary for S<N> {
    const VALUE: usize = N::VALUE + 1;
}

/// Strict less-than between unary numbers. Used to reject out-of-range element indices with a
/// readable error.
///
/// ```
/// use mystl::unary::*;
///
/// fn ok() where UnaryOf<1>: LessThan<UnaryOf<2>> {}
/// ```
///
/// An index equal to the length is out of range:
///
/// ```compile_fail
/// # use mystl::unary::*;
/// fn bad() where UnaryOf<3>: LessThan<UnaryOf<3>> {}
/// ```
pub trait LessThan<N: Unary>
where
    Self: Unary,
{
}

impl<N: Unary> LessThan<S<N>> for Z {}

impl<N: Unary, M: LessThan<N>> LessThan<S<N>> for S<M> {}

/// Add two unary numbers at the type level.
///
/// The length of a concatenation is the sum of the lengths:
///
/// ```
/// use mystl::unary::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(<(UnaryOf<2>, UnaryOf<3>) as Add>::Result, UnaryOf<5>);
/// assert_type_eq_all!(<(UnaryOf<0>, UnaryOf<0>) as Add>::Result, Z);
/// ```
pub trait Add: sealed::Add {
    /// The sum.
    type Result: Unary;
}

impl<N: Unary> Add for (N, Z) {
    type Result = N;
}

impl<N: Unary, M: Unary> Add for (N, S<M>)
where
    (N, M): Add,
{
    type Result = S<<(N, M) as Add>::Result>;
}

/// A trait marking wrapped type-level constants.
pub trait Constant: sealed::Constant {}

/// A wrapper for type-level `usize` values, so that traits can be implemented on them.
#[allow(missing_debug_implementations)]
pub struct Number<const N: usize>;

impl<const N: usize> Constant for Number<N> {}

/// Convert a wrapped constant into its unary representation.
pub trait ToUnary {
    /// The result of conversion.
    type AsUnary: Unary + ToConstant<AsConstant = Self>;
}

/// Convert a unary number back into a wrapped constant.
pub trait ToConstant: Unary {
    /// The result of conversion.
    type AsConstant: Constant + ToUnary<AsUnary = Self>;
}

mystl_macro::generate_unary_conversion_impls!(64);

/// Type synonyms `_0` through `_64` for the unary numbers.
pub mod types {
    #![allow(non_camel_case_types)]
    use super::{S, Z};

    mystl_macro::generate_unary_types!(64);
}

/// Values `_0` through `_64` inhabiting the synonyms in [`types`].
pub mod constants {
    #![allow(non_upper_case_globals)]
    use super::types::*;
    use super::{S, Z};

    mystl_macro::generate_unary_constants!(64);
}

mod sealed {
    use super::*;
    pub trait Unary: 'static {}
    impl Unary for Z {}
    impl<N: Unary> Unary for S<N> {}

    pub trait Constant: 'static {}
    impl<const N: usize> Constant for Number<N> {}

    pub trait Add {}
    impl<N: Unary, M: Unary> Add for (N, M) {}
}
