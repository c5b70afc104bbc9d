use mystl::prelude::*;
use static_assertions::{assert_impl_all, assert_not_impl_any};

mod common;
use common::*;

assert_impl_all!(Pair<i32, String>: Default, ImplicitDefault, Clone);
assert_not_impl_any!(Pair<i32, ExplicitDefault>: ImplicitDefault);
assert_not_impl_any!(Pair<NoDefault, i32>: Default);
assert_impl_all!(Pair<i64, String>: From<(i32, &'static str)>, From<Tuple<(i32, &'static str)>>);
assert_impl_all!((u8, char): From<Pair<u8, char>>);

#[test]
fn construction_forms() {
    let exact = Pair::new(1i64, String::from("a"));
    let forwarded = Pair::<i64, String>::construct(1u8, "a");
    let implicit: Pair<i64, String> = (1i32, "a").into();
    assert_eq!(exact, forwarded);
    assert_eq!(forwarded, implicit);

    let copied: Pair<u8, char> = (&(1, 'c')).into();
    let cloned = Pair::from_refs(&String::from("x"), &vec![1]);
    assert_eq!(copied.into_inner(), (1, 'c'));
    assert_eq!(cloned.first, "x");
}

#[test]
fn conversions() {
    let narrow = make_pair(1u8, 'c');
    let wide = Pair::<u32, char>::convert_from(&narrow);
    assert_eq!(wide, make_pair(1u32, 'c'));
    let wider = Pair::<u64, char>::convert(narrow);
    assert_eq!(wider.first, 1);

    let from_tuple: Pair<i64, String> = make_tuple((2i32, "t")).into();
    let from_borrowed: Pair<i64, String> = (&make_tuple((2i32, "t"))).into();
    assert_eq!(from_tuple, from_borrowed);
}

#[test]
fn ordering_is_lexicographic() {
    assert!(make_pair(1, "apple") < make_pair(1, "banana"));
    assert!(!(make_pair(2, "x") < make_pair(1, "z")));
    let mut v = vec![make_pair(2, 'a'), make_pair(1, 'z'), make_pair(1, 'b')];
    v.sort();
    assert_eq!(v, [make_pair(1, 'b'), make_pair(1, 'z'), make_pair(2, 'a')]);
}

#[test]
fn get_type_finds_the_unique_element() {
    let mut p = make_pair(3u8, String::from("s"));
    p.get_type_mut::<String, _>().push('!');
    assert_eq!(get_type::<String, _, _>(&p), "s!");
    assert_eq!(get_type::<u8, _, _>(p), 3);
}
