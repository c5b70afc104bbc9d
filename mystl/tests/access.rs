use mystl::prelude::*;
use mystl::unary::UnaryOf;
use mystl::Get;
use static_assertions::{assert_impl_all, assert_not_impl_any, assert_type_eq_all};

type Three = Tuple<(i32, String, Vec<i32>)>;

assert_type_eq_all!(ElementOf<Three, 0>, i32);
assert_type_eq_all!(ElementOf<Three, 2>, Vec<i32>);
assert_type_eq_all!(ElementOf<(u8, char), 1>, char);
assert_type_eq_all!(ElementOf<Pair<u8, char>, 1>, char);

// Out-of-range indices have no `Get` impl at all.
assert_impl_all!(Three: Get<UnaryOf<2>>);
assert_not_impl_any!(Three: Get<UnaryOf<3>>);
assert_not_impl_any!(Pair<u8, u8>: Get<UnaryOf<2>>);

fn sample() -> Three {
    Tuple::construct((5i32, "x", vec![1i32, 2]))
}

#[test]
fn elements_by_index() {
    let t = sample();
    assert_eq!(get::<0, _>(&t), &5);
    assert_eq!(get::<1, _>(&t), "x");
    assert_eq!(get::<2, _>(&t), &vec![1, 2]);
}

#[test]
fn elements_by_type() {
    let t = sample();
    assert_eq!(get_type::<i32, _, _>(&t), &5);
    assert_eq!(get_type::<String, _, _>(&t), "x");
    assert_eq!(get_type::<Vec<i32>, _, _>(&t), &vec![1, 2]);
}

#[test]
fn category_follows_the_receiver() {
    let mut t = sample();

    let shared: &String = get::<1, _>(&t);
    assert_eq!(shared, "x");

    let unique: &mut Vec<i32> = get::<2, _>(&mut t);
    unique.push(3);
    *get_type::<i32, _, _>(&mut t) += 1;

    let moved: Vec<i32> = get::<2, _>(t);
    assert_eq!(moved, [1, 2, 3]);
}

#[test]
fn pair_elements_delegate_to_fields() {
    let mut p = make_pair(1u8, String::from("b"));
    assert_eq!(get::<0, _>(&p), &p.first);
    get::<1, _>(&mut p).push('c');
    assert_eq!(p.get_type::<String, _>(), "bc");
    *p.get_type_mut::<u8, _>() = 9;
    assert_eq!(p.into_type::<u8, _>(), 9);
}

#[test]
fn destructuring() {
    let mut t = sample();
    {
        let (n, _, v) = t.as_mut_refs();
        *n = v.len() as i32;
    }
    let (n, s, v) = t.as_refs();
    assert_eq!((*n, s.as_str(), v.as_slice()), (2, "x", &[1, 2][..]));

    let (n, s, v): (i32, String, Vec<i32>) = t.into();
    assert_eq!((n, s, v), (2, String::from("x"), vec![1, 2]));

    let (first, second): (char, f64) = make_pair('a', 1.5).into();
    assert_eq!((first, second), ('a', 1.5));
}

#[test]
fn tuple_like_sizes() {
    assert_eq!(<Three as TupleLike>::SIZE, 3);
    assert_eq!(<Tuple<()> as TupleLike>::SIZE, 0);
    assert_eq!(<Pair<u8, u8> as TupleLike>::SIZE, 2);
    assert_eq!(<(u8, u8, u8, u8) as TupleLike>::SIZE, 4);
}
