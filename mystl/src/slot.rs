//! The storage cell for a single element.

use std::marker::PhantomData;

use crate::unary::Unary;

/// Exactly one value of type `T`, tagged with its position `N` inside the owning aggregate.
///
/// The tag is a zero-sized `PhantomData`, so a slot has the size and alignment of `T`. Two slots of
/// one aggregate always carry different tags, even when their element types are equal.
#[derive(Derivative)]
#[derivative(
    Clone(bound = "T: Clone", clone_from = "true"),
    Copy(bound = "T: Copy"),
    Default(bound = "T: Default"),
    PartialEq(bound = "T: PartialEq"),
    Eq(bound = "T: Eq"),
    PartialOrd(bound = "T: PartialOrd"),
    Ord(bound = "T: Ord"),
    Hash(bound = "T: std::hash::Hash"),
    Debug(bound = "T: std::fmt::Debug")
)]
pub struct Slot<N, T> {
    value: T,
    #[derivative(Debug = "ignore")]
    index: PhantomData<N>,
}

impl<N: Unary, T> Slot<N, T> {
    /// The position of this slot in its aggregate.
    pub const INDEX: usize = N::VALUE;
}

impl<N, T> Slot<N, T> {
    /// Store `value`.
    pub fn new(value: T) -> Self {
        Slot {
            value,
            index: PhantomData,
        }
    }

    /// Borrow the element.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Mutably borrow the element.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Move the element out.
    pub fn into_inner(self) -> T {
        self.value
    }
}
