//! The two-element [`Pair`], with public `first` and `second` fields.

use std::{cmp::Ordering, mem};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use crate::{
    category::{By, Mut, Ref, Val},
    list::Find,
    traits::{Assign, ImplicitDefault},
    tuple::{Elements, Get, TupleLike},
    unary::*,
    Tuple,
};

/// Two values of possibly different types.
///
/// A pair follows the same rules as a two-element [`Tuple`] and converts to and from one. Unlike a
/// tuple its elements are plain fields.
///
/// ```
/// use mystl::prelude::*;
///
/// let mut p: Pair<i64, String> = (1i32, "one").into();
/// p.first += 1;
/// assert_eq!(p, make_pair(2, "one"));
///
/// let t: Tuple<(i64, String)> = p.clone().into();
/// assert_eq!(t.into_inner(), (2, String::from("one")));
/// ```
#[derive(Derivative)]
#[derivative(Clone(bound = "T1: Clone, T2: Clone", clone_from = "true"))]
#[derive(Debug, Copy, Default, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct Pair<T1, T2> {
    /// The first element.
    pub first: T1,
    /// The second element.
    pub second: T2,
}

impl<T1, T2> Pair<T1, T2> {
    /// Build a pair from exactly its element values.
    pub fn new(first: T1, second: T2) -> Self {
        Pair { first, second }
    }

    /// Build a pair converting each argument with `Into`; the explicit forwarding construction.
    pub fn construct<U1: Into<T1>, U2: Into<T2>>(first: U1, second: U2) -> Self {
        Pair {
            first: first.into(),
            second: second.into(),
        }
    }

    /// Build a pair by cloning values held elsewhere.
    pub fn from_refs(first: &T1, second: &T2) -> Self
    where
        T1: Clone,
        T2: Clone,
    {
        Pair::new(first.clone(), second.clone())
    }

    /// Build a pair from another pair, converting each element.
    pub fn convert<U1: Into<T1>, U2: Into<T2>>(other: Pair<U1, U2>) -> Self {
        Pair::construct(other.first, other.second)
    }

    /// Build a pair from a borrowed pair, cloning and converting each element.
    pub fn convert_from<U1, U2>(other: &Pair<U1, U2>) -> Self
    where
        U1: Clone + Into<T1>,
        U2: Clone + Into<T2>,
    {
        Pair::construct(other.first.clone(), other.second.clone())
    }

    /// Exchange the contents of two pairs, `first` then `second`.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.first, &mut other.first);
        mem::swap(&mut self.second, &mut other.second);
    }

    /// Move the elements out as a flat tuple.
    pub fn into_inner(self) -> (T1, T2) {
        (self.first, self.second)
    }

    /// Borrow element `I`, which is `0` or `1`.
    pub fn get<'a, const I: usize>(&'a self) -> <&'a Self as Get<UnaryOf<I>>>::Output
    where
        Number<I>: ToUnary,
        &'a Self: Get<UnaryOf<I>>,
    {
        <&'a Self as Get<UnaryOf<I>>>::element(self)
    }

    /// Mutably borrow element `I`.
    pub fn get_mut<'a, const I: usize>(&'a mut self) -> <&'a mut Self as Get<UnaryOf<I>>>::Output
    where
        Number<I>: ToUnary,
        &'a mut Self: Get<UnaryOf<I>>,
    {
        <&'a mut Self as Get<UnaryOf<I>>>::element(self)
    }

    /// Move element `I` out.
    pub fn into_get<const I: usize>(self) -> <Self as Get<UnaryOf<I>>>::Output
    where
        Number<I>: ToUnary,
        Self: Get<UnaryOf<I>>,
    {
        <Self as Get<UnaryOf<I>>>::element(self)
    }

    /// Borrow the element of type `U`. Does not compile when both elements have that type.
    ///
    /// ```
    /// use mystl::prelude::*;
    ///
    /// let p = make_pair(1u8, 'c');
    /// assert_eq!(p.get_type::<char, _>(), &'c');
    /// ```
    ///
    /// ```compile_fail
    /// use mystl::prelude::*;
    ///
    /// let p = make_pair(1u8, 2u8);
    /// let _ = p.get_type::<u8, _>();
    /// ```
    pub fn get_type<'a, U, N: Unary>(&'a self) -> &'a U
    where
        (T1, (T2, ())): Find<U, N>,
        &'a Self: Get<N, Output = &'a U>,
    {
        <&'a Self as Get<N>>::element(self)
    }

    /// Mutably borrow the element of type `U`.
    pub fn get_type_mut<'a, U, N: Unary>(&'a mut self) -> &'a mut U
    where
        (T1, (T2, ())): Find<U, N>,
        &'a mut Self: Get<N, Output = &'a mut U>,
    {
        <&'a mut Self as Get<N>>::element(self)
    }

    /// Move the element of type `U` out.
    pub fn into_type<U, N: Unary>(self) -> U
    where
        (T1, (T2, ())): Find<U, N>,
        Self: Get<N, Output = U>,
    {
        <Self as Get<N>>::element(self)
    }
}

/// Build a pair from two values.
pub fn make_pair<T1, T2>(first: T1, second: T2) -> Pair<T1, T2> {
    Pair::new(first, second)
}

impl<T1: ImplicitDefault, T2: ImplicitDefault> ImplicitDefault for Pair<T1, T2> {}

impl<T1, T2, U1: Into<T1>, U2: Into<T2>> From<(U1, U2)> for Pair<T1, T2> {
    fn from((first, second): (U1, U2)) -> Self {
        Pair::construct(first, second)
    }
}

impl<'r, T1: Copy, T2: Copy> From<&'r (T1, T2)> for Pair<T1, T2> {
    fn from(&(first, second): &'r (T1, T2)) -> Self {
        Pair::new(first, second)
    }
}

impl<T1, T2> From<Pair<T1, T2>> for (T1, T2) {
    fn from(pair: Pair<T1, T2>) -> Self {
        pair.into_inner()
    }
}

impl<T1, T2, U1: Into<T1>, U2: Into<T2>> From<Tuple<(U1, U2)>> for Pair<T1, T2> {
    fn from(tuple: Tuple<(U1, U2)>) -> Self {
        let (first, second) = tuple.into_inner();
        Pair::construct(first, second)
    }
}

impl<'r, T1, T2, U1, U2> From<&'r Tuple<(U1, U2)>> for Pair<T1, T2>
where
    U1: Clone + Into<T1>,
    U2: Clone + Into<T2>,
{
    fn from(tuple: &'r Tuple<(U1, U2)>) -> Self {
        let (first, second) = tuple.as_refs();
        Pair::construct(first.clone(), second.clone())
    }
}

impl<T1, T2, U1: Into<T1>, U2: Into<T2>> From<Pair<U1, U2>> for Tuple<(T1, T2)> {
    fn from(pair: Pair<U1, U2>) -> Self {
        Tuple::construct(pair.into_inner())
    }
}

impl<'r, T1, T2, U1, U2> From<&'r Pair<U1, U2>> for Tuple<(T1, T2)>
where
    U1: Clone + Into<T1>,
    U2: Clone + Into<T2>,
{
    fn from(pair: &'r Pair<U1, U2>) -> Self {
        Tuple::construct((pair.first.clone(), pair.second.clone()))
    }
}

impl<T1: Assign<U1>, T2: Assign<U2>, U1, U2> Assign<Pair<U1, U2>> for Pair<T1, T2> {
    fn assign(&mut self, rhs: Pair<U1, U2>) {
        self.first.assign(rhs.first);
        self.second.assign(rhs.second);
    }
}

impl<'r, T1, T2, U1, U2> Assign<&'r Pair<U1, U2>> for Pair<T1, T2>
where
    T1: Assign<U1>,
    T2: Assign<U2>,
    U1: Clone,
    U2: Clone,
{
    fn assign(&mut self, rhs: &'r Pair<U1, U2>) {
        self.first.assign(rhs.first.clone());
        self.second.assign(rhs.second.clone());
    }
}

impl<T1: Assign<U1>, T2: Assign<U2>, U1, U2> Assign<Tuple<(U1, U2)>> for Pair<T1, T2> {
    fn assign(&mut self, rhs: Tuple<(U1, U2)>) {
        let (first, second) = rhs.into_inner();
        self.first.assign(first);
        self.second.assign(second);
    }
}

impl<'r, T1, T2, U1, U2> Assign<&'r Tuple<(U1, U2)>> for Pair<T1, T2>
where
    T1: Assign<U1>,
    T2: Assign<U2>,
    U1: Clone,
    U2: Clone,
{
    fn assign(&mut self, rhs: &'r Tuple<(U1, U2)>) {
        let (first, second) = rhs.as_refs();
        self.first.assign(first.clone());
        self.second.assign(second.clone());
    }
}

/// Assignment of a pair into a two-element tuple, element by element.
impl<T1: Assign<U1>, T2: Assign<U2>, U1, U2> Assign<Pair<U1, U2>> for Tuple<(T1, T2)> {
    fn assign(&mut self, rhs: Pair<U1, U2>) {
        let (first, second) = self.as_mut_refs();
        first.assign(rhs.first);
        second.assign(rhs.second);
    }
}

impl<'r, T1, T2, U1, U2> Assign<&'r Pair<U1, U2>> for Tuple<(T1, T2)>
where
    T1: Assign<U1>,
    T2: Assign<U2>,
    U1: Clone,
    U2: Clone,
{
    fn assign(&mut self, rhs: &'r Pair<U1, U2>) {
        let (first, second) = self.as_mut_refs();
        first.assign(rhs.first.clone());
        second.assign(rhs.second.clone());
    }
}

impl<T1, T2, U1, U2> PartialEq<Pair<U1, U2>> for Pair<T1, T2>
where
    T1: PartialEq<U1>,
    T2: PartialEq<U2>,
{
    fn eq(&self, other: &Pair<U1, U2>) -> bool {
        self.first == other.first && self.second == other.second
    }
}

impl<T1: Eq, T2: Eq> Eq for Pair<T1, T2> {}

fn less<A1, A2, B1, B2>(a: &Pair<A1, A2>, b: &Pair<B1, B2>) -> bool
where
    A1: PartialOrd<B1>,
    B1: PartialOrd<A1>,
    A2: PartialOrd<B2>,
{
    a.first < b.first || (!(b.first < a.first) && a.second < b.second)
}

/// Lexicographic order built from element `<` alone, as for [`Tuple`].
impl<T1, T2, U1, U2> PartialOrd<Pair<U1, U2>> for Pair<T1, T2>
where
    T1: PartialOrd<U1>,
    U1: PartialOrd<T1>,
    T2: PartialOrd<U2>,
    U2: PartialOrd<T2>,
{
    fn partial_cmp(&self, other: &Pair<U1, U2>) -> Option<Ordering> {
        if less(self, other) {
            Some(Ordering::Less)
        } else if less(other, self) {
            Some(Ordering::Greater)
        } else if self == other {
            Some(Ordering::Equal)
        } else {
            None
        }
    }

    fn lt(&self, other: &Pair<U1, U2>) -> bool {
        less(self, other)
    }

    fn gt(&self, other: &Pair<U1, U2>) -> bool {
        less(other, self)
    }

    fn le(&self, other: &Pair<U1, U2>) -> bool {
        !less(other, self)
    }

    fn ge(&self, other: &Pair<U1, U2>) -> bool {
        !less(self, other)
    }
}

impl<T1: Ord, T2: Ord> Ord for Pair<T1, T2> {
    fn cmp(&self, other: &Self) -> Ordering {
        if less(self, other) {
            Ordering::Less
        } else if less(other, self) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

impl<T1, T2> TupleLike for Pair<T1, T2> {
    type Flat = (T1, T2);

    fn into_flat(self) -> (T1, T2) {
        self.into_inner()
    }
}

impl<T1, T2> Elements for Pair<T1, T2> {
    type List = (T1, (T2, ()));
}

impl<'a, T1, T2> Elements for &'a Pair<T1, T2> {
    type List = (T1, (T2, ()));
}

impl<'a, T1, T2> Elements for &'a mut Pair<T1, T2> {
    type List = (T1, (T2, ()));
}

macro_rules! impl_pair_get {
    ($index:ty, $field:ident, $elem:ident) => {
        impl<T1, T2> Get<$index> for Pair<T1, T2> {
            type Convention = Val;
            type Output = $elem;

            fn element(self) -> $elem {
                self.$field
            }
        }

        impl<'a, T1: 'a, T2: 'a> Get<$index> for &'a Pair<T1, T2> {
            type Convention = Ref;
            type Output = <$elem as By<'a, Ref>>::Type;

            fn element(self) -> Self::Output {
                &self.$field
            }
        }

        impl<'a, T1: 'a, T2: 'a> Get<$index> for &'a mut Pair<T1, T2> {
            type Convention = Mut;
            type Output = <$elem as By<'a, Mut>>::Type;

            fn element(self) -> Self::Output {
                &mut self.$field
            }
        }
    };
}

impl_pair_get!(Z, first, T1);
impl_pair_get!(S<Z>, second, T2);
