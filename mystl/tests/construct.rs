use std::{error::Error, mem, panic};

use mystl::prelude::*;
use mystl::ElementError;
use static_assertions::{assert_impl_all, assert_not_impl_any};

mod common;
use common::*;

// Default and implicit default are tracked separately.
assert_impl_all!(Tuple<(i32, String, Vec<i32>)>: Default, ImplicitDefault);
assert_impl_all!(Tuple<(i32, ExplicitDefault)>: Default);
assert_not_impl_any!(Tuple<(i32, ExplicitDefault)>: ImplicitDefault);
assert_not_impl_any!(Tuple<(i32, NoDefault)>: Default, ImplicitDefault);
assert_impl_all!(Tuple<()>: Default, ImplicitDefault);

// Implicit copy needs `Copy`, explicit copy only `Clone`.
assert_impl_all!(Tuple<(u8, char)>: Copy, From<&'static (u8, char)>);
assert_not_impl_any!(Tuple<(u8, String)>: Copy, From<&'static (u8, String)>);
assert_impl_all!(Tuple<(u8, String)>: Clone);
assert_not_impl_any!(Tuple<(u8, MoveOnly)>: Clone);

// Implicit forwarding construction needs the exact arity.
assert_impl_all!(Tuple<(i64, String)>: From<(i32, &'static str)>);
assert_not_impl_any!(Tuple<(i64, String)>: From<(i32,)>, From<(i32, &'static str, u8)>);

#[test]
fn default_values_by_index_and_type() {
    let t = Tuple::<(i32, String, Vec<i32>)>::default();
    assert_eq!(*t.get::<0>(), 0);
    assert_eq!(t.get::<1>(), "");
    assert!(t.get::<2>().is_empty());
    assert_eq!(t.get_type::<i32, _>(), &0);
    assert_eq!(t.get_type::<String, _>(), "");
    assert_eq!(t.get_type::<Vec<i32>, _>(), &Vec::<i32>::new());
}

#[test]
fn implicit_default_through_init() {
    let t: Tuple<(i32, String, MoveOnly)> = init();
    assert_eq!(t.into_inner(), (0, String::new(), MoveOnly(None)));

    let p: Pair<Counted, Vec<u8>> = init();
    assert_eq!(p.first, Counted(0));

    let explicit = Tuple::<(i32, ExplicitDefault)>::default();
    assert_eq!(explicit.get::<1>(), &ExplicitDefault(0));
}

#[test]
fn forwarding_converts_each_argument() {
    let implicit: Tuple<(i64, String, f64)> = (1i32, "one", 0.5f32).into();
    let explicit = Tuple::<(i64, String, f64)>::construct((1u8, String::from("one"), 0.5f64));
    assert_eq!(implicit, explicit);

    let empty: Tuple<()> = ().into();
    assert_eq!(empty, Tuple::<()>::default());
}

#[test]
fn clone_leaves_the_source_alone() {
    let before = clones();
    let src = make_tuple((Counted(1), Counted(2), String::from("s")));
    let dst = src.clone();
    assert_eq!(clones() - before, 2);
    assert_eq!(src, dst);
    assert_eq!(src.get::<2>(), "s");

    let mut reused = make_tuple((Counted(0), Counted(0), String::with_capacity(32)));
    reused.clone_from(&src);
    assert_eq!(reused, src);
    assert!(reused.get::<2>().capacity() >= 32);
}

#[test]
fn move_leaves_a_moved_from_source() {
    let mut src = make_tuple((Some(Box::new(7)), vec![1, 2, 3]));
    let dst = mem::take(&mut src);
    assert_eq!(src.into_inner(), (None, Vec::new()));
    assert_eq!(dst.into_inner(), (Some(Box::new(7)), vec![1, 2, 3]));
}

#[test]
fn copy_construction_from_references() {
    let values = (String::from("a"), vec![1u8]);
    let explicit = Tuple::from_ref(&values);
    assert_eq!(explicit.into_inner(), values);

    let implicit: Tuple<(u8, char)> = (&(3, 'c')).into();
    assert_eq!(implicit.into_inner(), (3, 'c'));
}

#[test]
fn single_element_conversion_is_element_wise() {
    let dst = Tuple::<(i32,)>::convert(make_tuple((5i16,)));
    assert_eq!(*dst.get::<0>(), 5);

    // Same source and destination type: this is plain copy construction.
    let src = make_tuple((Counted(9),));
    let before = clones();
    let copied = Tuple::<(Counted,)>::convert_from(&src);
    assert_eq!(clones() - before, 1);
    assert_eq!(copied, src);
}

#[test]
fn converting_copy_keeps_the_source() {
    let src = make_tuple((7u8, "seven"));
    let dst = Tuple::<(u32, String)>::convert_from(&src);
    assert_eq!(dst.into_inner(), (7, String::from("seven")));
    assert_eq!(src.into_inner(), (7, "seven"));
}

#[test]
fn pair_conversions() {
    let pair = make_pair(1i32, "x");
    let by_ref: Tuple<(i64, String)> = (&pair).into();
    let by_move: Tuple<(i64, String)> = pair.into();
    assert_eq!(by_ref, by_move);
    assert_eq!(by_move.into_inner(), (1, String::from("x")));
}

#[test]
fn failed_conversion_reports_the_position() {
    let err: ElementError = Tuple::<(i8, u8, u16)>::try_construct((1i32, 2i32, -3i32)).unwrap_err();
    assert_eq!(err.index, 2);
    assert_eq!(err.to_string(), "failed to construct element 2");
    assert!(err.source().is_some());

    let ok = Tuple::<(i8, u8)>::try_convert(make_tuple((-1i64, 255u16))).unwrap();
    assert_eq!(ok.into_inner(), (-1, 255));
}

#[test]
fn failed_conversion_drops_what_was_built() {
    let before = drops();
    let result = Tuple::<(Counted, u8)>::try_construct((Counted(1), 300i32));
    assert_eq!(result.unwrap_err().index, 1);
    assert_eq!(drops() - before, 1);
}

#[test]
fn panicking_conversion_drops_what_was_built() {
    let before = drops();
    let result = panic::catch_unwind(|| Tuple::<(Counted, Counted)>::construct((Counted(1), Fuse)));
    assert!(result.is_err());
    assert_eq!(drops() - before, 1);
}
