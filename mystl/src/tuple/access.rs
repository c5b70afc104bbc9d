use super::*;
use crate::{
    category::{By, Convention, Mut, Ref, Val},
    list::Find,
    storage::At,
};

/// Element access by position `I`, where the receiver's value category decides the output: an
/// owned receiver gives up the element, a shared borrow gives `&T`, a unique borrow gives
/// `&mut T`.
///
/// Implemented for [`Tuple`] and [`Pair`](crate::Pair) and for borrows of both. The free function
/// [`get`] is the usual entry point.
pub trait Get<I: Unary> {
    /// One of [`Val`], [`Ref`] or [`Mut`].
    type Convention: Convention;

    /// The element, reached through [`Self::Convention`].
    type Output;

    /// Extract the element.
    fn element(self) -> Self::Output;
}

/// Anything whose elements form the inductive list [`Self::List`], which is what lookup by type
/// searches.
pub trait Elements {
    /// The element types.
    type List;
}

impl<T: Types, I: Unary> Get<I> for Tuple<T>
where
    Storage<T>: At<I>,
{
    type Convention = Val;
    type Output = <Storage<T> as At<I>>::Element;

    fn element(self) -> Self::Output {
        self.storage.into_at()
    }
}

impl<'a, T: Types, I: Unary> Get<I> for &'a Tuple<T>
where
    Storage<T>: At<I>,
    <Storage<T> as At<I>>::Element: 'a,
{
    type Convention = Ref;
    type Output = <<Storage<T> as At<I>>::Element as By<'a, Ref>>::Type;

    fn element(self) -> Self::Output {
        self.storage.at()
    }
}

impl<'a, T: Types, I: Unary> Get<I> for &'a mut Tuple<T>
where
    Storage<T>: At<I>,
    <Storage<T> as At<I>>::Element: 'a,
{
    type Convention = Mut;
    type Output = <<Storage<T> as At<I>>::Element as By<'a, Mut>>::Type;

    fn element(self) -> Self::Output {
        self.storage.at_mut()
    }
}

impl<T: Types> Elements for Tuple<T> {
    type List = T::AsList;
}

impl<'a, T: Types> Elements for &'a Tuple<T> {
    type List = T::AsList;
}

impl<'a, T: Types> Elements for &'a mut Tuple<T> {
    type List = T::AsList;
}

/// Get element `I` of a tuple or pair. The result follows the receiver: `T` from an owned value,
/// `&T` from a shared borrow, `&mut T` from a unique borrow.
///
/// ```
/// use mystl::prelude::*;
///
/// let mut t = make_tuple((1, String::from("two")));
/// *get::<0, _>(&mut t) += 10;
/// assert_eq!(get::<0, _>(&t), &11);
/// let two: String = get::<1, _>(t);
/// assert_eq!(two, "two");
/// ```
///
/// An index past the end does not compile:
///
/// ```compile_fail
/// use mystl::prelude::*;
///
/// let t = make_tuple((1, 2));
/// let _ = get::<2, _>(&t);
/// ```
pub fn get<const I: usize, R>(receiver: R) -> <R as Get<UnaryOf<I>>>::Output
where
    Number<I>: ToUnary,
    R: Get<UnaryOf<I>>,
{
    receiver.element()
}

/// Get the single element of type `U`. Does not compile when `U` occurs zero times or more than
/// once.
///
/// ```
/// use mystl::prelude::*;
///
/// let t = make_tuple((5u8, String::from("x"), 2.5f64));
/// assert_eq!(get_type::<String, _, _>(&t), "x");
/// assert_eq!(get_type::<f64, _, _>(t), 2.5);
/// ```
///
/// Two elements of the type are ambiguous:
///
/// ```compile_fail
/// use mystl::prelude::*;
///
/// let t = make_tuple((1, 2));
/// let _ = get_type::<i32, _, _>(&t);
/// ```
///
/// An absent type has no position:
///
/// ```compile_fail
/// use mystl::prelude::*;
///
/// let t = make_tuple((1u8, String::new()));
/// let _ = get_type::<char, _, _>(&t);
/// ```
pub fn get_type<U, N: Unary, R>(receiver: R) -> <R as Get<N>>::Output
where
    R: Elements + Get<N>,
    R::List: Find<U, N>,
{
    receiver.element()
}

impl<T: Types> Tuple<T> {
    /// Borrow element `I`.
    pub fn get<const I: usize>(&self) -> &<Storage<T> as At<UnaryOf<I>>>::Element
    where
        Number<I>: ToUnary,
        UnaryOf<I>: LessThan<<T::AsList as HasLength>::Length>,
        Storage<T>: At<UnaryOf<I>>,
    {
        self.storage.at()
    }

    /// Mutably borrow element `I`.
    pub fn get_mut<const I: usize>(&mut self) -> &mut <Storage<T> as At<UnaryOf<I>>>::Element
    where
        Number<I>: ToUnary,
        UnaryOf<I>: LessThan<<T::AsList as HasLength>::Length>,
        Storage<T>: At<UnaryOf<I>>,
    {
        self.storage.at_mut()
    }

    /// Move element `I` out, dropping the others.
    pub fn into_get<const I: usize>(self) -> <Storage<T> as At<UnaryOf<I>>>::Element
    where
        Number<I>: ToUnary,
        UnaryOf<I>: LessThan<<T::AsList as HasLength>::Length>,
        Storage<T>: At<UnaryOf<I>>,
    {
        self.storage.into_at()
    }

    /// Borrow the element of type `U`; the position `N` is inferred.
    pub fn get_type<U, N: Unary>(&self) -> &U
    where
        T::AsList: Find<U, N>,
        Storage<T>: At<N, Element = U>,
    {
        self.storage.at()
    }

    /// Mutably borrow the element of type `U`.
    pub fn get_type_mut<U, N: Unary>(&mut self) -> &mut U
    where
        T::AsList: Find<U, N>,
        Storage<T>: At<N, Element = U>,
    {
        self.storage.at_mut()
    }

    /// Move the element of type `U` out, dropping the others.
    pub fn into_type<U, N: Unary>(self) -> U
    where
        T::AsList: Find<U, N>,
        Storage<T>: At<N, Element = U>,
    {
        self.storage.into_at()
    }
}
