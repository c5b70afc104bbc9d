use std::{
    cmp::Ordering,
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
};

use mystl::prelude::*;
use quickcheck::{QuickCheck, TestResult};

/// A type whose only comparison is `<`; `==` always says no.
#[derive(Debug, Clone, Copy)]
struct LessOnly(i32);

impl PartialEq for LessOnly {
    fn eq(&self, _: &Self) -> bool {
        false
    }
}

impl PartialOrd for LessOnly {
    fn partial_cmp(&self, _: &Self) -> Option<Ordering> {
        None
    }

    fn lt(&self, other: &Self) -> bool {
        self.0 < other.0
    }
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn lexicographic_examples() {
    assert!(make_tuple((1, "apple")) < make_tuple((1, "banana")));
    assert!(!(make_tuple((2, "x")) < make_tuple((1, "z"))));
    let t = make_tuple((3, "same"));
    assert!(!(t < t));
    assert!(t <= t && t >= t);
    assert!(!(make_tuple(()) < make_tuple(())));
    assert_eq!(make_tuple(()), make_tuple(()));
}

#[test]
fn ordering_never_asks_for_equality() {
    let a = make_tuple((LessOnly(1), 5));
    let b = make_tuple((LessOnly(1), 6));
    // Neither head is less than the other, so the second position decides.
    assert!(a < b);
    assert!(b > a);
    assert!(!(b < a));
}

#[test]
fn heterogeneous_comparison() {
    let owned = make_tuple((String::from("k"), 1.0f64));
    let borrowed = make_tuple(("k", 1.0f64));
    assert!(borrowed == owned);
    assert_eq!(make_pair(1, "a"), make_pair(1, String::from("a")));
}

#[test]
fn equal_tuples_hash_equally() {
    let a = make_tuple((7u8, String::from("h")));
    let b = a.clone();
    assert_eq!(hash_of(&a), hash_of(&b));
    assert_eq!(hash_of(&make_pair(1, 2)), hash_of(&make_pair(1, 2)));
}

fn agrees_with_native_tuples(a: (i16, String, bool), b: (i16, String, bool)) -> TestResult {
    let (x, y) = (Tuple::new(a.clone()), Tuple::new(b.clone()));
    TestResult::from_bool(
        (x == y) == (a == b)
            && (y == x) == (x == y)
            && x.partial_cmp(&y) == a.partial_cmp(&b)
            && x.cmp(&y) == a.cmp(&b)
            && (x < y) == (a < b)
            && (x <= y) == (a <= b)
            && (x > y) == (a > b)
            && (x >= y) == (a >= b),
    )
}

#[test]
fn tuple_order_agrees_with_native_order() {
    QuickCheck::new().quickcheck(agrees_with_native_tuples as fn(_, _) -> TestResult);
}

fn pair_agrees_with_native_pairs(a: (u8, i64), b: (u8, i64)) -> TestResult {
    let (x, y) = (make_pair(a.0, a.1), make_pair(b.0, b.1));
    TestResult::from_bool(x.partial_cmp(&y) == a.partial_cmp(&b) && (x == y) == (a == b))
}

#[test]
fn pair_order_agrees_with_native_order() {
    QuickCheck::new().quickcheck(pair_agrees_with_native_pairs as fn(_, _) -> TestResult);
}

fn equality_is_an_equivalence(a: (u32, char)) -> bool {
    let t = Tuple::new(a);
    t == t && t == Tuple::new(a) && !(t < t) && !(t > t)
}

#[test]
fn equality_is_reflexive() {
    QuickCheck::new().quickcheck(equality_is_an_equivalence as fn(_) -> bool);
}
