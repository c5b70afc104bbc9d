//! The physical representation of a tuple: a chain of [`Slot`]s.
//!
//! [`Layout`] maps an inductive list `(A, (B, ()))` to `Cons<Z, A, Cons<S<Z>, B, Nil>>`, so each
//! element sits in its own slot tagged with its position. Every operation on a tuple is a fold
//! over this chain in position order, parameterized by a relation marker from
//! [`traits`](crate::traits) where the operation depends on a second operand.

use std::fmt;

use crate::{
    error::ElementError,
    list::Types,
    slot::Slot,
    traits::{Assignment, Construction, TryConstruction},
    unary::*,
};

/// The storage of a [`Tuple<T>`](crate::Tuple).
pub type Storage<T> = <<T as Types>::AsList as Layout<Z>>::Storage;

/// One slot at position `N` followed by the rest of the chain.
#[derive(Derivative)]
#[derivative(
    Clone(bound = "H: Clone, R: Clone", clone_from = "true"),
    Copy(bound = "H: Copy, R: Copy"),
    Default(bound = "H: Default, R: Default"),
    PartialEq(bound = "H: PartialEq, R: PartialEq"),
    Eq(bound = "H: Eq, R: Eq"),
    PartialOrd(bound = "H: PartialOrd, R: PartialOrd"),
    Ord(bound = "H: Ord, R: Ord"),
    Hash(bound = "H: std::hash::Hash, R: std::hash::Hash"),
    Debug(bound = "H: fmt::Debug, R: fmt::Debug")
)]
pub struct Cons<N, H, R> {
    pub(crate) head: Slot<N, H>,
    pub(crate) tail: R,
}

/// The end of a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Nil;

/// Lay out an inductive list as a chain of slots, numbering them from `N`.
pub trait Layout<N: Unary> {
    /// The chain of slots.
    type Storage;

    /// Move the values into their slots.
    fn pack(self) -> Self::Storage;

    /// Move the values back out of their slots.
    fn unpack(storage: Self::Storage) -> Self;
}

impl<N: Unary> Layout<N> for () {
    type Storage = Nil;

    fn pack(self) -> Nil {
        Nil
    }

    fn unpack(_: Nil) -> Self {}
}

impl<N: Unary, H, T: Layout<S<N>>> Layout<N> for (H, T) {
    type Storage = Cons<N, H, T::Storage>;

    fn pack(self) -> Self::Storage {
        let (head, tail) = self;
        Cons {
            head: Slot::new(head),
            tail: tail.pack(),
        }
    }

    fn unpack(storage: Self::Storage) -> Self {
        (storage.head.into_inner(), T::unpack(storage.tail))
    }
}

/// Build every slot from the matching argument of the inductive list `Args`, using the relation
/// `R`. There is no impl when the argument count differs from the slot count.
pub trait Build<R, Args> {
    /// Construct the chain.
    fn build(args: Args) -> Self;
}

impl<R> Build<R, ()> for Nil {
    fn build(_: ()) -> Self {
        Nil
    }
}

impl<R, N, H, Rest, A, As> Build<R, (A, As)> for Cons<N, H, Rest>
where
    R: Construction<H, A>,
    Rest: Build<R, As>,
{
    fn build((arg, args): (A, As)) -> Self {
        Cons {
            head: Slot::new(R::construct(arg)),
            tail: Rest::build(args),
        }
    }
}

/// Like [`Build`], but each conversion may fail.
pub trait TryBuild<R, Args>: Sized {
    /// Construct the chain, stopping at the first failure.
    fn try_build(args: Args) -> Result<Self, ElementError>;
}

impl<R> TryBuild<R, ()> for Nil {
    fn try_build(_: ()) -> Result<Self, ElementError> {
        Ok(Nil)
    }
}

impl<R, N: Unary, H, Rest, A, As> TryBuild<R, (A, As)> for Cons<N, H, Rest>
where
    R: TryConstruction<H, A>,
    Rest: TryBuild<R, As>,
{
    fn try_build((arg, args): (A, As)) -> Result<Self, ElementError> {
        let head = R::try_construct(arg).map_err(|source| ElementError::new(N::VALUE, source))?;
        Ok(Cons {
            head: Slot::new(head),
            tail: Rest::try_build(args)?,
        })
    }
}

/// Select a slot by its position `I`, counted from the start of this chain.
pub trait At<I: Unary> {
    /// The element type at position `I`.
    type Element;

    /// Borrow the element.
    fn at(&self) -> &Self::Element;

    /// Mutably borrow the element.
    fn at_mut(&mut self) -> &mut Self::Element;

    /// Move the element out, dropping the rest.
    fn into_at(self) -> Self::Element;
}

impl<N, H, R> At<Z> for Cons<N, H, R> {
    type Element = H;

    fn at(&self) -> &H {
        self.head.get()
    }

    fn at_mut(&mut self) -> &mut H {
        self.head.get_mut()
    }

    fn into_at(self) -> H {
        self.head.into_inner()
    }
}

impl<N, H, R, I: Unary> At<S<I>> for Cons<N, H, R>
where
    R: At<I>,
{
    type Element = R::Element;

    fn at(&self) -> &Self::Element {
        self.tail.at()
    }

    fn at_mut(&mut self) -> &mut Self::Element {
        self.tail.at_mut()
    }

    fn into_at(self) -> Self::Element {
        self.tail.into_at()
    }
}

/// Element-wise, short-circuiting equality against another chain of the same length.
pub trait EqualEach<Rhs> {
    /// Whether every pair of elements compares equal.
    fn equal_each(&self, other: &Rhs) -> bool;
}

impl EqualEach<Nil> for Nil {
    fn equal_each(&self, _: &Nil) -> bool {
        true
    }
}

impl<N, H, R, M, U, Q> EqualEach<Cons<M, U, Q>> for Cons<N, H, R>
where
    H: PartialEq<U>,
    R: EqualEach<Q>,
{
    fn equal_each(&self, other: &Cons<M, U, Q>) -> bool {
        self.head.get() == other.head.get() && self.tail.equal_each(&other.tail)
    }
}

/// Lexicographic less-than that only ever asks elements `<`.
pub trait LessEach<Rhs> {
    /// Whether `self` orders strictly before `other`.
    fn less_each(&self, other: &Rhs) -> bool;
}

impl LessEach<Nil> for Nil {
    fn less_each(&self, _: &Nil) -> bool {
        false
    }
}

impl<N, H, R, M, U, Q> LessEach<Cons<M, U, Q>> for Cons<N, H, R>
where
    H: PartialOrd<U>,
    U: PartialOrd<H>,
    R: LessEach<Q>,
{
    fn less_each(&self, other: &Cons<M, U, Q>) -> bool {
        let (a, b) = (self.head.get(), other.head.get());
        if a < b {
            true
        } else if b < a {
            false
        } else {
            self.tail.less_each(&other.tail)
        }
    }
}

/// Assign every slot from the matching element of the inductive list `Src`, using the relation
/// `R`.
pub trait AssignEach<R, Src> {
    /// Assign in position order.
    fn assign_each(&mut self, src: Src);
}

impl<R> AssignEach<R, ()> for Nil {
    fn assign_each(&mut self, _: ()) {}
}

impl<R, N, H, Rest, U, Us> AssignEach<R, (U, Us)> for Cons<N, H, Rest>
where
    R: Assignment<H, U>,
    Rest: AssignEach<R, Us>,
{
    fn assign_each(&mut self, (value, values): (U, Us)) {
        R::assign(self.head.get_mut(), value);
        self.tail.assign_each(values);
    }
}

/// View a chain as an inductive list of shared references.
pub trait Borrowed<'a> {
    /// `(&'a A, (&'a B, ()))` for a chain holding `A` and `B`.
    type Refs;

    /// Borrow every element.
    fn borrowed(&'a self) -> Self::Refs;
}

impl<'a> Borrowed<'a> for Nil {
    type Refs = ();

    fn borrowed(&'a self) {}
}

impl<'a, N, H: 'a, R: Borrowed<'a>> Borrowed<'a> for Cons<N, H, R> {
    type Refs = (&'a H, R::Refs);

    fn borrowed(&'a self) -> Self::Refs {
        (self.head.get(), self.tail.borrowed())
    }
}

/// View a chain as an inductive list of unique references.
pub trait BorrowedMut<'a> {
    /// `(&'a mut A, (&'a mut B, ()))` for a chain holding `A` and `B`.
    type Refs;

    /// Mutably borrow every element.
    fn borrowed_mut(&'a mut self) -> Self::Refs;
}

impl<'a> BorrowedMut<'a> for Nil {
    type Refs = ();

    fn borrowed_mut(&'a mut self) {}
}

impl<'a, N, H: 'a, R: BorrowedMut<'a>> BorrowedMut<'a> for Cons<N, H, R> {
    type Refs = (&'a mut H, R::Refs);

    fn borrowed_mut(&'a mut self) -> Self::Refs {
        (self.head.get_mut(), self.tail.borrowed_mut())
    }
}

/// Write every element into a [`fmt::DebugTuple`].
pub trait DebugEach {
    /// Add one field per element, in position order.
    fn debug_each(&self, out: &mut fmt::DebugTuple<'_, '_>);
}

impl DebugEach for Nil {
    fn debug_each(&self, _: &mut fmt::DebugTuple<'_, '_>) {}
}

impl<N, H: fmt::Debug, R: DebugEach> DebugEach for Cons<N, H, R> {
    fn debug_each(&self, out: &mut fmt::DebugTuple<'_, '_>) {
        let _ = out.field(self.head.get());
        self.tail.debug_each(out);
    }
}

/// Write every element into a serde tuple serializer.
#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
pub trait SerializeEach {
    /// Serialize one element per position.
    fn serialize_each<S: serde_crate::ser::SerializeTuple>(
        &self,
        out: &mut S,
    ) -> Result<(), S::Error>;
}

#[cfg(feature = "serde")]
impl SerializeEach for Nil {
    fn serialize_each<S: serde_crate::ser::SerializeTuple>(
        &self,
        _: &mut S,
    ) -> Result<(), S::Error> {
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl<N, H: serde_crate::Serialize, R: SerializeEach> SerializeEach for Cons<N, H, R> {
    fn serialize_each<S: serde_crate::ser::SerializeTuple>(
        &self,
        out: &mut S,
    ) -> Result<(), S::Error> {
        out.serialize_element(self.head.get())?;
        self.tail.serialize_each(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{Convert, MoveAssign};
    use static_assertions::{assert_eq_size, assert_type_eq_all};

    assert_eq_size!(Storage<(u64, u32, u32)>, (u64, u32, u32));
    assert_eq_size!(Storage<()>, ());

    type Two = Storage<(i32, String)>;

    fn pack<L: Layout<Z>>(list: L) -> L::Storage {
        list.pack()
    }

    #[test]
    fn layout_numbers_slots_in_order() {
        assert_type_eq_all!(Two, Cons<Z, i32, Cons<S<Z>, String, Nil>>);
        let storage: Two = pack((7, (String::from("x"), ())));
        assert_eq!(<Two as At<S<Z>>>::at(&storage), "x");
        assert_eq!(
            <(i32, (String, ())) as Layout<Z>>::unpack(storage),
            (7, ("x".into(), ()))
        );
    }

    #[test]
    fn build_converts_each_argument() {
        let storage = <Storage<(i64, String)> as Build<Convert, _>>::build((3i32, ("y", ())));
        assert_eq!(*At::<Z>::at(&storage), 3i64);
        assert_eq!(At::<S<Z>>::into_at(storage), "y");
    }

    #[test]
    fn less_each_decides_at_first_difference() {
        let a: Storage<(i32, &str)> = pack((1, ("apple", ())));
        let b: Storage<(i32, &str)> = pack((1, ("banana", ())));
        assert!(a.less_each(&b));
        assert!(!b.less_each(&a));
        assert!(!a.less_each(&a));
        assert!(!Nil.less_each(&Nil));
    }

    #[test]
    fn assign_each_runs_in_order() {
        let mut storage: Storage<(i64, String)> = pack((0, (String::new(), ())));
        AssignEach::<MoveAssign, _>::assign_each(&mut storage, (5i32, ("z", ())));
        assert_eq!(storage.borrowed(), (&5i64, (&String::from("z"), ())));
    }
}
