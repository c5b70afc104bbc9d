use std::cmp::Ordering;

use super::*;
use crate::storage::{EqualEach, LessEach};

impl<T: Types, U: Types> PartialEq<Tuple<U>> for Tuple<T>
where
    Storage<T>: EqualEach<Storage<U>>,
{
    fn eq(&self, other: &Tuple<U>) -> bool {
        self.storage.equal_each(&other.storage)
    }
}

impl<T: Types> Eq for Tuple<T> where Storage<T>: Eq + EqualEach<Storage<T>> {}

/// Lexicographic order built from element `<` alone: the first position where either side is
/// less decides. `>` swaps the operands of `<`, and `<=`/`>=` negate `>`/`<`.
impl<T: Types, U: Types> PartialOrd<Tuple<U>> for Tuple<T>
where
    Storage<T>: EqualEach<Storage<U>> + LessEach<Storage<U>>,
    Storage<U>: LessEach<Storage<T>>,
{
    fn partial_cmp(&self, other: &Tuple<U>) -> Option<Ordering> {
        if self.lt(other) {
            Some(Ordering::Less)
        } else if self.gt(other) {
            Some(Ordering::Greater)
        } else if self.eq(other) {
            Some(Ordering::Equal)
        } else {
            None
        }
    }

    fn lt(&self, other: &Tuple<U>) -> bool {
        self.storage.less_each(&other.storage)
    }

    fn gt(&self, other: &Tuple<U>) -> bool {
        other.storage.less_each(&self.storage)
    }

    fn le(&self, other: &Tuple<U>) -> bool {
        !self.gt(other)
    }

    fn ge(&self, other: &Tuple<U>) -> bool {
        !self.lt(other)
    }
}

impl<T: Types> Ord for Tuple<T>
where
    Storage<T>: Ord + EqualEach<Storage<T>> + LessEach<Storage<T>>,
{
    fn cmp(&self, other: &Self) -> Ordering {
        if self.lt(other) {
            Ordering::Less
        } else if self.gt(other) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}
