//! The variadic [`Tuple`] and the free functions that build one.

use std::{fmt, hash::Hash, mem};

#[cfg(feature = "serde")]
use serde_crate::{ser::SerializeTuple, Deserialize, Deserializer, Serialize, Serializer};

#[cfg(feature = "serde")]
use crate::storage::SerializeEach;
use crate::{
    error::ElementError,
    list::{AllPairwise, AllTrue, HasLength, List, NonEmpty, Select, Types},
    storage::{AssignEach, Borrowed, BorrowedMut, Build, DebugEach, Layout, Storage, TryBuild},
    traits::{
        Assign, CloneConvert, Convert, CopyAssign, ImplicitDefault, IsBinding, IsImplicitDefault,
        IsReference, MoveAssign, TryConvert,
    },
    unary::*,
};

mod access;
mod cat;
mod compare;

pub use access::{get, get_type, Elements, Get};
pub use cat::{tuple_cat, CatFold, Concatenated};

/// A fixed-size heterogeneous collection, written `Tuple<(T0, T1, ...)>`.
///
/// The element types are given as a flat Rust tuple. Each element lives in its own
/// [`Slot`](crate::slot::Slot) and every capability of the tuple follows from its elements: it is
/// [`Default`], [`Clone`], [`Copy`], comparable, hashable or assignable exactly when every element
/// is.
///
/// # Examples
///
/// ```
/// use mystl::prelude::*;
///
/// let mut t = Tuple::new((5i32, String::from("x"), vec![1i32, 2]));
/// assert_eq!(*t.get::<0>(), 5);
/// t.get_mut::<2>().push(3);
/// assert_eq!(t.get_type::<Vec<i32>, _>(), &[1, 2, 3]);
///
/// let (n, s, v) = t.into_inner();
/// assert_eq!((n, s.as_str(), v.len()), (5, "x", 3));
/// ```
///
/// Construction converts each argument with `Into`, implicitly through `From`/`Into` or explicitly
/// through [`Tuple::construct`]:
///
/// ```
/// use mystl::prelude::*;
///
/// let t: Tuple<(i64, String)> = (1i32, "one").into();
/// assert_eq!(t, Tuple::<(i64, String)>::construct((1u8, 'o'.to_string() + "ne")));
/// ```
///
/// An argument list of the wrong length is rejected:
///
/// ```compile_fail
/// use mystl::prelude::*;
///
/// let t: Tuple<(i64, String)> = (1i32,).into();
/// ```
#[derive(Derivative)]
#[derivative(
    Clone(bound = "Storage<T>: Clone", clone_from = "true"),
    Copy(bound = "Storage<T>: Copy"),
    Default(bound = "Storage<T>: Default"),
    Hash(bound = "Storage<T>: Hash")
)]
pub struct Tuple<T: Types> {
    storage: Storage<T>,
}

impl<T: Types> Tuple<T> {
    /// Build a tuple from exactly its element values.
    pub fn new(values: T) -> Self {
        Tuple {
            storage: values.into_list().pack(),
        }
    }

    /// Build a tuple by cloning element values held elsewhere; the explicit copy construction.
    ///
    /// The implicit form is `From<&T>`, which needs every element to be `Copy`.
    ///
    /// ```
    /// use mystl::prelude::*;
    ///
    /// let values = (String::from("a"), vec![1]);
    /// let t = Tuple::from_ref(&values);
    /// assert_eq!(t.get::<0>(), &values.0);
    ///
    /// let copied: Tuple<(u8, char)> = (&(1, 'c')).into();
    /// assert_eq!(*copied.get::<1>(), 'c');
    /// ```
    pub fn from_ref(values: &T) -> Self
    where
        T: Clone,
        T::AsList: NonEmpty,
    {
        Self::new(values.clone())
    }

    /// Build a tuple from one argument per element, converting each with `Into`.
    pub fn construct<A: Types>(args: A) -> Self
    where
        Storage<T>: Build<Convert, A::AsList>,
    {
        Tuple {
            storage: <Storage<T> as Build<Convert, A::AsList>>::build(args.into_list()),
        }
    }

    /// Like [`construct`](Tuple::construct), but through `TryFrom`, stopping at the first element
    /// that fails.
    ///
    /// ```
    /// use mystl::prelude::*;
    ///
    /// let ok = Tuple::<(u8, i16)>::try_construct((7i64, 300i32)).unwrap();
    /// assert_eq!(ok, make_tuple((7u8, 300i16)));
    ///
    /// let err = Tuple::<(u8, i16)>::try_construct((7i64, 70_000i32)).unwrap_err();
    /// assert_eq!(err.index, 1);
    /// ```
    pub fn try_construct<A: Types>(args: A) -> Result<Self, ElementError>
    where
        Storage<T>: TryBuild<TryConvert, A::AsList>,
    {
        Ok(Tuple {
            storage: <Storage<T> as TryBuild<TryConvert, A::AsList>>::try_build(args.into_list())?,
        })
    }

    /// Build a tuple from another tuple of the same length, converting each element.
    ///
    /// This is distinct from forwarding construction, so a one-element tuple converts its element
    /// rather than trying to become the element:
    ///
    /// ```
    /// use mystl::prelude::*;
    ///
    /// let wide = Tuple::<(i64,)>::convert(make_tuple((5i32,)));
    /// assert_eq!(*wide.get::<0>(), 5i64);
    /// ```
    pub fn convert<U: Types>(other: Tuple<U>) -> Self
    where
        Storage<T>: Build<Convert, U::AsList>,
    {
        Tuple {
            storage: <Storage<T> as Build<Convert, U::AsList>>::build(other.into_list()),
        }
    }

    /// Build a tuple from a borrowed tuple of the same length, cloning and converting each
    /// element. The source is left untouched.
    pub fn convert_from<'a, U: Types>(other: &'a Tuple<U>) -> Self
    where
        Storage<U>: Borrowed<'a>,
        Storage<T>: Build<CloneConvert, <Storage<U> as Borrowed<'a>>::Refs>,
    {
        Tuple {
            storage: <Storage<T> as Build<CloneConvert, _>>::build(other.storage.borrowed()),
        }
    }

    /// Like [`convert`](Tuple::convert), but through `TryFrom`.
    pub fn try_convert<U: Types>(other: Tuple<U>) -> Result<Self, ElementError>
    where
        Storage<T>: TryBuild<TryConvert, U::AsList>,
    {
        Ok(Tuple {
            storage: <Storage<T> as TryBuild<TryConvert, U::AsList>>::try_build(other.into_list())?,
        })
    }

    /// Move the elements out as a flat tuple.
    pub fn into_inner(self) -> T {
        self.into_list().into_types()
    }

    /// Borrow every element, as a flat tuple of references.
    ///
    /// ```
    /// use mystl::prelude::*;
    ///
    /// let t = make_tuple((1, String::from("a")));
    /// let (n, s) = t.as_refs();
    /// assert_eq!((*n, s.as_str()), (1, "a"));
    /// ```
    pub fn as_refs<'a>(&'a self) -> <<Storage<T> as Borrowed<'a>>::Refs as List>::AsTypes
    where
        Storage<T>: Borrowed<'a>,
        <Storage<T> as Borrowed<'a>>::Refs: List,
    {
        self.storage.borrowed().into_types()
    }

    /// Mutably borrow every element, as a flat tuple of unique references.
    pub fn as_mut_refs<'a>(&'a mut self) -> <<Storage<T> as BorrowedMut<'a>>::Refs as List>::AsTypes
    where
        Storage<T>: BorrowedMut<'a>,
        <Storage<T> as BorrowedMut<'a>>::Refs: List,
    {
        self.storage.borrowed_mut().into_types()
    }

    /// Exchange the contents of two tuples of the same type.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.storage, &mut other.storage);
    }

    pub(crate) fn into_list(self) -> T::AsList {
        <T::AsList as Layout<Z>>::unpack(self.storage)
    }
}

impl<T: Types> ImplicitDefault for Tuple<T>
where
    Storage<T>: Default,
    T::AsList: AllTrue<IsImplicitDefault>,
{
}

impl<'r, T: Types + Copy> From<&'r T> for Tuple<T>
where
    T::AsList: NonEmpty,
{
    fn from(values: &'r T) -> Self {
        Self::new(*values)
    }
}

/// Converting move assignment, element by element.
impl<T: Types, U: Types> Assign<Tuple<U>> for Tuple<T>
where
    T::AsList: AllPairwise<MoveAssign, U::AsList>,
    Storage<T>: AssignEach<MoveAssign, U::AsList>,
{
    fn assign(&mut self, rhs: Tuple<U>) {
        self.storage.assign_each(rhs.into_list());
    }
}

/// Converting copy assignment: each source element is cloned, then assigned.
impl<'r, T: Types, U: Types> Assign<&'r Tuple<U>> for Tuple<T>
where
    Storage<U>: Borrowed<'r>,
    T::AsList: AllPairwise<CopyAssign, <Storage<U> as Borrowed<'r>>::Refs>,
    Storage<T>: AssignEach<CopyAssign, <Storage<U> as Borrowed<'r>>::Refs>,
{
    fn assign(&mut self, rhs: &'r Tuple<U>) {
        self.storage.assign_each(rhs.storage.borrowed());
    }
}

impl<T: Types> fmt::Debug for Tuple<T>
where
    Storage<T>: DebugEach,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if <<T::AsList as HasLength>::Length as Unary>::VALUE == 0 {
            return f.write_str("()");
        }
        let mut out = f.debug_tuple("");
        self.storage.debug_each(&mut out);
        out.finish()
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl<T: Types> Serialize for Tuple<T>
where
    Storage<T>: SerializeEach,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut out =
            serializer.serialize_tuple(<<T::AsList as HasLength>::Length as Unary>::VALUE)?;
        self.storage.serialize_each(&mut out)?;
        out.end()
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl<'de, T: Types + Deserialize<'de>> Deserialize<'de> for Tuple<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(Tuple::new)
    }
}

/// Anything that can be taken apart into a flat tuple of elements: [`Tuple`],
/// [`Pair`](crate::Pair), and flat tuples themselves.
pub trait TupleLike {
    /// The element types, as a flat tuple.
    type Flat: Types;

    /// The number of elements.
    const SIZE: usize = <<<Self::Flat as Types>::AsList as HasLength>::Length as Unary>::VALUE;

    /// Move the elements out.
    fn into_flat(self) -> Self::Flat;
}

impl<T: Types> TupleLike for Tuple<T> {
    type Flat = T;

    fn into_flat(self) -> T {
        self.into_inner()
    }
}

/// The type of element `I` of the tuple-like `T`.
///
/// ```
/// use mystl::prelude::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(ElementOf<Tuple<(u8, String)>, 1>, String);
/// assert_type_eq_all!(ElementOf<Pair<u8, char>, 0>, u8);
/// assert_eq!(<Tuple<(u8, String)> as TupleLike>::SIZE, 2);
/// ```
pub type ElementOf<T, const I: usize> =
    <<<T as TupleLike>::Flat as Types>::AsList as Select<UnaryOf<I>>>::Selected;

/// Build a tuple from values. A `&x` or `&mut x` argument becomes a reference element.
///
/// ```
/// use mystl::prelude::*;
///
/// let mut n = 1;
/// let mut t = make_tuple((&mut n, "label"));
/// **t.get_mut::<0>() += 1;
/// assert_eq!(n, 2);
/// ```
pub fn make_tuple<T: Types>(values: T) -> Tuple<T> {
    Tuple::new(values)
}

/// Build a tuple of bindings: each element is a `&mut` reference or [`Ignore`](crate::Ignore).
/// Assigning a tuple into the result writes through to the bindings.
///
/// The [`tie!`](crate::tie!) macro is usually more convenient.
///
/// ```
/// use mystl::prelude::*;
///
/// let (mut a, mut b) = (0, String::new());
/// tie((&mut a, &mut b)).assign(make_tuple((42, "answer")));
/// assert_eq!((a, b.as_str()), (42, "answer"));
/// ```
///
/// Anything other than a binding is rejected:
///
/// ```compile_fail
/// use mystl::prelude::*;
///
/// let a = 0;
/// let _ = tie((&a,));
/// ```
pub fn tie<T: Types>(bindings: T) -> Tuple<T>
where
    T::AsList: AllTrue<IsBinding>,
{
    Tuple::new(bindings)
}

/// Build a tuple of references that keeps each reference exactly as given.
///
/// ```
/// use mystl::prelude::*;
///
/// let (a, mut b) = (1, 2);
/// let mut refs = forward_as_tuple((&a, &mut b));
/// **refs.get_mut::<1>() = **refs.get::<0>() + 10;
/// assert_eq!(b, 11);
/// ```
pub fn forward_as_tuple<T: Types>(refs: T) -> Tuple<T>
where
    T::AsList: AllTrue<IsReference>,
{
    Tuple::new(refs)
}

/// Exchange the contents of two tuples.
pub fn swap<T: Types>(a: &mut Tuple<T>, b: &mut Tuple<T>) {
    a.swap(b);
}

/// Bind places for assignment from a tuple, with `_` for elements to discard.
///
/// ```
/// use mystl::prelude::*;
///
/// let (mut first, mut last) = (0, ' ');
/// tie!(first, _, last).assign(make_tuple((1, "skipped", 'z')));
/// assert_eq!((first, last), (1, 'z'));
/// ```
#[macro_export]
macro_rules! tie {
    (@bind [$($bound:tt)*]) => {
        $crate::tie(($($bound)*))
    };
    (@bind [$($bound:tt)*] _ $(, $($rest:tt)*)?) => {
        $crate::tie!(@bind [$($bound)* $crate::IGNORE,] $($($rest)*)?)
    };
    (@bind [$($bound:tt)*] $place:expr $(, $($rest:tt)*)?) => {
        $crate::tie!(@bind [$($bound)* &mut $place,] $($($rest)*)?)
    };
    ($($places:tt)*) => {
        $crate::tie!(@bind [] $($places)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Ignore;
    use static_assertions::{assert_impl_all, assert_not_impl_any};

    assert_impl_all!(Tuple<(i32, String)>: Clone, Default, ImplicitDefault, Hash);
    assert_impl_all!(Tuple<(i32, char)>: Copy);
    assert_not_impl_any!(Tuple<(i32, String)>: Copy);
    assert_impl_all!(Tuple<()>: Copy, ImplicitDefault);
    assert_impl_all!(Tuple<(&'static mut i32, Ignore)>: Assign<Tuple<(i32, &'static str)>>);
    assert_not_impl_any!(Tuple<(&'static i32,)>: Assign<Tuple<(i32,)>>);

    #[test]
    fn from_ref_requires_an_element() {
        assert_impl_all!(Tuple<(u8,)>: From<&'static (u8,)>);
        assert_not_impl_any!(Tuple<()>: From<&'static ()>);
    }

    #[test]
    fn into_list_preserves_order() {
        let t = Tuple::new((1u8, 'b', "c"));
        assert_eq!(t.into_list(), (1u8, ('b', ("c", ()))));
    }

    #[test]
    fn copy_assignment_leaves_source() {
        let src = make_tuple((String::from("kept"), 3u8));
        let mut dst = make_tuple((String::new(), 0u16));
        dst.assign(&src);
        assert_eq!(dst.into_inner(), (String::from("kept"), 3u16));
        assert_eq!(src.get::<0>(), "kept");
    }

    #[test]
    fn debug_looks_like_a_native_tuple() {
        assert_eq!(format!("{:?}", make_tuple((1, "x"))), r#"(1, "x")"#);
        assert_eq!(format!("{:?}", make_tuple((1,))), "(1,)");
        assert_eq!(format!("{:?}", make_tuple(())), "()");
    }
}
