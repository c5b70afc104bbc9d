//! Element-level traits that decide which tuple and pair operations exist.
//!
//! Whether a [`Tuple`](crate::Tuple) can be defaulted, cloned, converted or assigned depends on
//! what its elements can do. The queries are phrased as marker types: a [`Predicate`] marker
//! answers a question about one type, and a [`Relation`] marker answers a question about a
//! (target, source) pair and knows how to perform the operation. The list folds in
//! [`list`](crate::list) and [`storage`](crate::storage) take the marker as a parameter, so one
//! fold serves every operation.

use std::{
    cell::{Cell, RefCell},
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
    error::Error,
    hash::{BuildHasher, Hash},
    marker::PhantomData,
    rc::Rc,
    sync::Arc,
};

/// A type that may be default-constructed implicitly, without naming its constructor.
///
/// A type can be [`Default`] without opting into this, in which case a tuple holding it is still
/// `Default` but cannot be produced by [`init`].
pub trait ImplicitDefault: Default {}

macro_rules! impl_implicit_default {
    ($($t:ty),* $(,)?) => {
        $(impl ImplicitDefault for $t {})*
    };
}

impl_implicit_default!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    String,
);

impl<T> ImplicitDefault for Vec<T> {}
impl<T> ImplicitDefault for VecDeque<T> {}
impl<T> ImplicitDefault for Option<T> {}
impl<T> ImplicitDefault for PhantomData<T> {}
impl<T: ImplicitDefault> ImplicitDefault for Box<T> {}
impl<T: ImplicitDefault> ImplicitDefault for Rc<T> {}
impl<T: ImplicitDefault> ImplicitDefault for Arc<T> {}
impl<T: ImplicitDefault> ImplicitDefault for Cell<T> {}
impl<T: ImplicitDefault> ImplicitDefault for RefCell<T> {}
impl<K: Ord, V> ImplicitDefault for BTreeMap<K, V> {}
impl<T: Ord> ImplicitDefault for BTreeSet<T> {}
impl<K, V, H: BuildHasher + Default> ImplicitDefault for HashMap<K, V, H> {}
impl<T, H: BuildHasher + Default> ImplicitDefault for HashSet<T, H> {}
impl<'a> ImplicitDefault for &'a str {}

/// Default-construct a value implicitly. This compiles only for [`ImplicitDefault`] types.
///
/// ```
/// use mystl::prelude::*;
///
/// let t: Tuple<(i32, String)> = init();
/// assert_eq!(t, make_tuple((0, String::new())));
/// ```
///
/// A tuple with an element that is only explicitly `Default` is still `Default`, but `init`
/// rejects it:
///
/// ```compile_fail
/// use mystl::prelude::*;
///
/// #[derive(Default)]
/// struct Explicit(i32);
///
/// let _ = Tuple::<(i32, Explicit)>::default();
/// let _: Tuple<(i32, Explicit)> = init();
/// ```
pub fn init<T: ImplicitDefault>() -> T {
    T::default()
}

/// Assignment from a value of type `Rhs` into an existing value.
///
/// Unlike `Into`, an `Assign` impl writes into an existing value, which lets a `&mut T` element
/// (from [`tie`](crate::tie())) write through to the binding it refers to. Shared references are
/// never assignable.
///
/// Implemented here for the standard library types, for `&mut T` where `T: Assign`, and for
/// [`Ignore`]. Other element types can use `#[derive(Assign)]`.
pub trait Assign<Rhs = Self> {
    /// Overwrite `self` with `rhs`.
    fn assign(&mut self, rhs: Rhs);
}

// Primitive targets list their sources, by value and by shared reference, so that a tuple of
// `&T` assigns like a tuple of `T`. The sources are the lossless `From` conversions in std.
macro_rules! impl_assign_from_sources {
    ($($t:ty: [$($src:ty),*];)*) => {
        $($(
            impl Assign<$src> for $t {
                fn assign(&mut self, rhs: $src) {
                    *self = <$t>::from(rhs);
                }
            }

            impl<'r> Assign<&'r $src> for $t {
                fn assign(&mut self, rhs: &'r $src) {
                    *self = <$t>::from(*rhs);
                }
            }
        )*)*
    };
}

impl_assign_from_sources! {
    (): [()];
    bool: [bool];
    char: [char, u8];
    i8: [i8, bool];
    i16: [i16, i8, u8, bool];
    i32: [i32, i16, i8, u16, u8, bool];
    i64: [i64, i32, i16, i8, u32, u16, u8, bool];
    i128: [i128, i64, i32, i16, i8, u64, u32, u16, u8, bool];
    isize: [isize, i16, i8, u8, bool];
    u8: [u8, bool];
    u16: [u16, u8, bool];
    u32: [u32, u16, u8, char, bool];
    u64: [u64, u32, u16, u8, char, bool];
    u128: [u128, u64, u32, u16, u8, char, bool];
    usize: [usize, u16, u8, bool];
    f32: [f32, i16, i8, u16, u8];
    f64: [f64, f32, i32, i16, i8, u32, u16, u8];
}

impl<U: Into<String>> Assign<U> for String {
    fn assign(&mut self, rhs: U) {
        *self = rhs.into();
    }
}

macro_rules! impl_assign_by_into_generic {
    ($($t:ident),* $(,)?) => {
        $(
            impl<T: ?Sized, U: Into<$t<T>>> Assign<U> for $t<T> {
                fn assign(&mut self, rhs: U) {
                    *self = rhs.into();
                }
            }
        )*
    };
}

impl_assign_by_into_generic!(Box, Rc, Arc);

impl<T, U: Into<Vec<T>>> Assign<U> for Vec<T> {
    fn assign(&mut self, rhs: U) {
        *self = rhs.into();
    }
}

impl<T, U: Into<Option<T>>> Assign<U> for Option<T> {
    fn assign(&mut self, rhs: U) {
        *self = rhs.into();
    }
}

impl<K: Ord, V, U: Into<BTreeMap<K, V>>> Assign<U> for BTreeMap<K, V> {
    fn assign(&mut self, rhs: U) {
        *self = rhs.into();
    }
}

impl<K: Eq + Hash, V, H: BuildHasher, U: Into<HashMap<K, V, H>>> Assign<U> for HashMap<K, V, H> {
    fn assign(&mut self, rhs: U) {
        *self = rhs.into();
    }
}

impl<'a, T: Assign<U> + ?Sized, U> Assign<U> for &'a mut T {
    fn assign(&mut self, rhs: U) {
        (**self).assign(rhs);
    }
}

/// A binding that discards whatever is assigned to it; the `_` of [`tie!`](crate::tie!).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Ignore;

/// The value of [`Ignore`].
pub const IGNORE: Ignore = Ignore;

impl<U> Assign<U> for Ignore {
    fn assign(&mut self, _: U) {}
}

/// A question about a single type, answered by whether `Self: Predicate<T>` holds.
pub trait Predicate<T: ?Sized> {}

/// `T: ImplicitDefault`.
#[derive(Debug, Clone, Copy)]
pub struct IsImplicitDefault;
impl<T: ImplicitDefault> Predicate<T> for IsImplicitDefault {}

/// `T: Clone`, the explicit copy.
#[derive(Debug, Clone, Copy)]
pub struct IsClone;
impl<T: Clone> Predicate<T> for IsClone {}

/// `T: Copy`, the implicit copy.
#[derive(Debug, Clone, Copy)]
pub struct IsCopy;
impl<T: Copy> Predicate<T> for IsCopy {}

/// `T` is something [`tie`](crate::tie()) can bind: a unique reference or [`Ignore`].
#[derive(Debug, Clone, Copy)]
pub struct IsBinding;
impl<'a, T: ?Sized> Predicate<&'a mut T> for IsBinding {}
impl Predicate<Ignore> for IsBinding {}

/// `T` is a reference of either kind.
#[derive(Debug, Clone, Copy)]
pub struct IsReference;
impl<'a, T: ?Sized> Predicate<&'a T> for IsReference {}
impl<'a, T: ?Sized> Predicate<&'a mut T> for IsReference {}

/// A question about a target type `T` and a source type `U`.
pub trait Relation<T, U> {}

/// A relation that can build a `T` out of a `U`.
pub trait Construction<T, U>: Relation<T, U> {
    /// Build the target.
    fn construct(source: U) -> T;
}

/// A relation that can try to build a `T` out of a `U`.
pub trait TryConstruction<T, U>: Relation<T, U> {
    /// Try to build the target.
    fn try_construct(source: U) -> Result<T, Box<dyn Error + Send + Sync>>;
}

/// A relation that can overwrite a `T` with a `U`.
pub trait Assignment<T, U>: Relation<T, U> {
    /// Overwrite the target.
    fn assign(target: &mut T, source: U);
}

/// `U: Into<T>`: converting move construction.
#[derive(Debug, Clone, Copy)]
pub struct Convert;

impl<T, U: Into<T>> Relation<T, U> for Convert {}

impl<T, U: Into<T>> Construction<T, U> for Convert {
    fn construct(source: U) -> T {
        source.into()
    }
}

/// `&U` where `U: Clone + Into<T>`: converting copy construction.
#[derive(Debug, Clone, Copy)]
pub struct CloneConvert;

impl<'a, T, U: Clone + Into<T>> Relation<T, &'a U> for CloneConvert {}

impl<'a, T, U: Clone + Into<T>> Construction<T, &'a U> for CloneConvert {
    fn construct(source: &'a U) -> T {
        source.clone().into()
    }
}

/// `T: TryFrom<U>`: fallible construction.
#[derive(Debug, Clone, Copy)]
pub struct TryConvert;

impl<T, U> Relation<T, U> for TryConvert
where
    T: TryFrom<U>,
    T::Error: Error + Send + Sync + 'static,
{
}

impl<T, U> TryConstruction<T, U> for TryConvert
where
    T: TryFrom<U>,
    T::Error: Error + Send + Sync + 'static,
{
    fn try_construct(source: U) -> Result<T, Box<dyn Error + Send + Sync>> {
        T::try_from(source).map_err(Into::into)
    }
}

/// `T: Assign<U>`: move assignment.
#[derive(Debug, Clone, Copy)]
pub struct MoveAssign;

impl<T: Assign<U>, U> Relation<T, U> for MoveAssign {}

impl<T: Assign<U>, U> Assignment<T, U> for MoveAssign {
    fn assign(target: &mut T, source: U) {
        target.assign(source);
    }
}

/// `&U` where `U: Clone` and `T: Assign<U>`: copy assignment.
#[derive(Debug, Clone, Copy)]
pub struct CopyAssign;

impl<'a, T: Assign<U>, U: Clone> Relation<T, &'a U> for CopyAssign {}

impl<'a, T: Assign<U>, U: Clone> Assignment<T, &'a U> for CopyAssign {
    fn assign(target: &mut T, source: &'a U) {
        target.assign(source.clone());
    }
}
