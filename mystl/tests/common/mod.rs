//! Element types with deliberately restricted capabilities, shared by the integration tests.

#![allow(dead_code)]

use std::cell::Cell;

use mystl::{Assign, ImplicitDefault};

thread_local! {
    static CLONES: Cell<usize> = Cell::new(0);
    static DROPS: Cell<usize> = Cell::new(0);
}

/// How many [`Counted`] values have been cloned on this thread so far.
pub fn clones() -> usize {
    CLONES.with(Cell::get)
}

/// How many [`Counted`] values have been dropped on this thread so far.
pub fn drops() -> usize {
    DROPS.with(Cell::get)
}

/// A value that records every clone and drop.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Assign, ImplicitDefault)]
pub struct Counted(pub u32);

impl Clone for Counted {
    fn clone(&self) -> Self {
        CLONES.with(|c| c.set(c.get() + 1));
        Counted(self.0)
    }
}

impl Drop for Counted {
    fn drop(&mut self) {
        DROPS.with(|c| c.set(c.get() + 1));
    }
}

/// Converting into a [`Counted`] always panics.
#[derive(Debug)]
pub struct Fuse;

impl From<Fuse> for Counted {
    fn from(_: Fuse) -> Self {
        panic!("fuse blown")
    }
}

/// Movable and assignable, never cloned.
#[derive(Debug, PartialEq, Eq, Default, Assign, ImplicitDefault)]
pub struct MoveOnly(pub Option<Box<i32>>);

/// `Default`, but only when asked for by name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Assign)]
pub struct ExplicitDefault(pub i32);

/// Has no default at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoDefault(pub i32);

/// Can be built and cloned but never assigned.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NonAssignable(pub i32);
