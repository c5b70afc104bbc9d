use mystl::prelude::*;
use static_assertions::{assert_impl_all, assert_not_impl_any};

#[derive(Debug, Clone, PartialEq, Default, mystl::Assign, mystl::ImplicitDefault)]
struct Celsius(f64);

impl From<i32> for Celsius {
    fn from(degrees: i32) -> Self {
        Celsius(f64::from(degrees))
    }
}

#[derive(Debug, Default, PartialEq, mystl::Assign)]
struct Labelled<T> {
    label: String,
    value: T,
}

#[derive(Debug, Default)]
struct Plain;

assert_impl_all!(Celsius: mystl::Assign<Celsius>, mystl::Assign<i32>, ImplicitDefault);
assert_impl_all!(Labelled<u8>: mystl::Assign<Labelled<u8>>);
assert_not_impl_any!(Labelled<u8>: mystl::Assign<u8>, ImplicitDefault);
assert_not_impl_any!(Plain: mystl::Assign<Plain>, ImplicitDefault);

assert_impl_all!(Tuple<(Celsius, u8)>: ImplicitDefault, Assign<Tuple<(i32, u8)>>);
assert_not_impl_any!(Tuple<(Plain, u8)>: ImplicitDefault, Assign<Tuple<(Plain, u8)>>);

#[test]
fn derived_assign_converts_through_into() {
    let mut t: Tuple<(Celsius, u8)> = init();
    assert_eq!(t.get::<0>(), &Celsius(0.0));
    t.assign(make_tuple((21, 3u8)));
    assert_eq!(t.into_inner(), (Celsius(21.0), 3));
}

#[test]
fn derived_assign_on_generic_types() {
    let mut pair = make_pair(
        Labelled::<u8>::default(),
        Labelled {
            label: String::from("b"),
            value: 'b',
        },
    );
    pair.assign(make_pair(
        Labelled {
            label: String::from("a"),
            value: 1u8,
        },
        Labelled {
            label: String::from("c"),
            value: 'c',
        },
    ));
    assert_eq!(pair.first.value, 1);
    assert_eq!(pair.second.label, "c");
}
