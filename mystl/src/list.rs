//! Type-level lists and the queries over them.
//!
//! The public interface speaks in flat tuples such as `(i32, String, bool)`, but every piece of
//! machinery underneath works on the equivalent inductive list `(i32, (String, (bool, ())))`,
//! because only the inductive shape can be recursed over with ordinary trait impls. [`Types`] and
//! [`List`] convert between the two, for arities up to 32.

use std::any::TypeId;

use crate::storage::Layout;
use crate::traits::{Predicate, Relation};
use crate::unary::*;

/// A flat tuple of element types, convertible into its inductive list.
pub trait Types: Sized {
    /// The corresponding inductive list.
    type AsList: List<AsTypes = Self> + Layout<Z> + HasLength;

    /// Restructure the values into the inductive list.
    fn into_list(self) -> Self::AsList;
}

/// An inductive list, convertible back into its flat tuple.
pub trait List: Sized {
    /// The corresponding flat tuple.
    type AsTypes: Types<AsList = Self>;

    /// Restructure the values into the flat tuple.
    fn into_types(self) -> Self::AsTypes;
}

/// Take the length of a type-level list as a unary type-level number.
pub trait HasLength {
    /// The length of a type-level list.
    type Length: Unary;
}

impl HasLength for () {
    type Length = Z;
}

impl<T, Ts: HasLength> HasLength for (T, Ts) {
    type Length = S<Ts::Length>;
}

/// Lists with at least one element.
pub trait NonEmpty {}

impl<T, Ts> NonEmpty for (T, Ts) {}

/// The `N`th type of a list. There is no impl when `N` is out of range.
///
/// ```
/// use mystl::list::Select;
/// use mystl::unary::UnaryOf;
/// use static_assertions::assert_type_eq_all;
///
/// type L = (u8, (String, (bool, ())));
/// assert_type_eq_all!(<L as Select<UnaryOf<1>>>::Selected, String);
/// ```
///
/// ```compile_fail
/// # use mystl::list::Select;
/// # use mystl::unary::UnaryOf;
/// type L = (u8, (String, (bool, ())));
/// let _: Option<<L as Select<UnaryOf<3>>>::Selected> = None;
/// ```
pub trait Select<N: Unary> {
    /// The selected type.
    type Selected;
}

impl<T, Ts> Select<Z> for (T, Ts) {
    type Selected = T;
}

impl<T, Ts, N: Unary> Select<S<N>> for (T, Ts)
where
    Ts: Select<N>,
{
    type Selected = Ts::Selected;
}

/// The position `N` of the type `T` within a list.
///
/// `N` is meant to be inferred. When `T` does not occur there is no impl, and when it occurs more
/// than once the index is ambiguous. Both are compile errors, which is what lookup by type needs.
///
/// ```
/// use mystl::list::Find;
/// use mystl::unary::Unary;
///
/// fn index_of<T, L: Find<T, N>, N: Unary>() -> usize {
///     L::INDEX
/// }
///
/// assert_eq!(index_of::<bool, (u8, (String, (bool, ()))), _>(), 2);
/// ```
///
/// ```compile_fail
/// # use mystl::list::Find;
/// # use mystl::unary::Unary;
/// # fn index_of<T, L: Find<T, N>, N: Unary>() -> usize { L::INDEX }
/// // `u8` appears twice
/// let _ = index_of::<u8, (u8, (String, (u8, ()))), _>();
/// ```
pub trait Find<T, N: Unary> {
    /// The position as a value.
    const INDEX: usize = N::VALUE;
}

impl<T, Ts> Find<T, Z> for (T, Ts) {}

impl<T, H, Ts, N: Unary> Find<T, S<N>> for (H, Ts) where Ts: Find<T, N> {}

/// Count the occurrences of a type in a list of `'static` types.
pub trait Occurrences {
    /// How many elements of the list are exactly `T`.
    fn count<T: 'static>() -> usize;
}

impl Occurrences for () {
    fn count<T: 'static>() -> usize {
        0
    }
}

impl<H: 'static, Ts: Occurrences> Occurrences for (H, Ts) {
    fn count<T: 'static>() -> usize {
        usize::from(TypeId::of::<H>() == TypeId::of::<T>()) + Ts::count::<T>()
    }
}

/// The predicate `P` holds for every element of the list. Holds vacuously for `()`.
pub trait AllTrue<P> {}

impl<P> AllTrue<P> for () {}

impl<P, H, Ts> AllTrue<P> for (H, Ts)
where
    P: Predicate<H>,
    Ts: AllTrue<P>,
{
}

/// The lists `Self` and `Us` have the same length and the relation `R` holds at every position.
///
/// ```
/// use mystl::list::AllPairwise;
/// use mystl::traits::Convert;
///
/// fn convertible<Ts: AllPairwise<Convert, Us>, Us>() {}
/// convertible::<(i64, (String, ())), (i32, (&str, ()))>();
/// ```
///
/// Lists of different lengths are never related:
///
/// ```compile_fail
/// # use mystl::list::AllPairwise;
/// # use mystl::traits::Convert;
/// # fn convertible<Ts: AllPairwise<Convert, Us>, Us>() {}
/// convertible::<(i64, (i64, ())), (i32, ())>();
/// ```
pub trait AllPairwise<R, Us> {}

impl<R> AllPairwise<R, ()> for () {}

impl<R, H, Ts, U, Us> AllPairwise<R, (U, Us)> for (H, Ts)
where
    R: Relation<H, U>,
    Ts: AllPairwise<R, Us>,
{
}

/// Concatenate two lists, at both the type and the value level.
pub trait Append<Ys> {
    /// `Self` followed by `Ys`.
    type Output;

    /// Concatenate the values.
    fn append(self, ys: Ys) -> Self::Output;
}

impl<Ys> Append<Ys> for () {
    type Output = Ys;

    fn append(self, ys: Ys) -> Ys {
        ys
    }
}

impl<H, Ts, Ys> Append<Ys> for (H, Ts)
where
    Ts: Append<Ys>,
{
    type Output = (H, Ts::Output);

    fn append(self, ys: Ys) -> Self::Output {
        let (head, tail) = self;
        (head, tail.append(ys))
    }
}

mystl_macro::impl_tuples!(32);
