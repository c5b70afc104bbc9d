/*!
Fixed-size heterogeneous collections that follow the standard library's rules for construction,
conversion, assignment and comparison, checked entirely at compile time.

- [`Pair`] holds exactly two values, as public fields `first` and `second`.
- [`Tuple`] holds any number of values, written `Tuple<(T0, T1, ...)>`.
- [`alloc::Allocator`] is a stateless typed allocator over the global heap.

Every capability of a [`Tuple`] or [`Pair`] is derived from its elements, and an operation that
some element does not support simply does not exist for that instantiation: a tuple is [`Default`]
only when each element is, [`Copy`] only when each element is, assignable from another tuple only
when each element is assignable from its counterpart, and so on. Misuse is a type error, never a
panic.

## Quick reference

Most programs should `use mystl::prelude::*;`.

| Operation | How |
| :-------- | :-- |
| Build from values | [`make_tuple((a, b, c))`](make_tuple), [`make_pair(a, b)`](make_pair), [`Tuple::new`] |
| Build with per-element conversion | [`Tuple::construct`], `(a, b).into()`, [`Pair::construct`] |
| Fallible conversion | [`Tuple::try_construct`], [`Tuple::try_convert`] |
| Default construction | [`Default::default`], or [`init`] when every element is [`ImplicitDefault`] |
| Access by index | [`get::<I, _>(&t)`](get), [`t.get::<I>()`](Tuple::get) |
| Access by type | [`get_type::<U, _, _>(&t)`](get_type), [`t.get_type::<U, _>()`](Tuple::get_type) |
| Assign element-wise | [`t.assign(u)`](Assign::assign), [`t.assign(&u)`](Assign::assign) |
| Unpack into places | [`tie!(a, _, c).assign(t)`](tie!) |
| Concatenate | [`tuple_cat((t, u, p))`](tuple_cat) |
| Compare | `==`, `<`, ... lexicographically, across element types |

```
use mystl::prelude::*;

let mut t: Tuple<(i64, String, f64)> = (1i32, "one", 1.5f32).into();
*t.get_mut::<0>() += 1;
assert_eq!(get::<0, _>(&t), &2);

let (mut n, mut s) = (0i64, String::new());
tie!(n, s, _).assign(t.clone());
assert_eq!((n, s.as_str()), (2, "one"));

let joined = tuple_cat((t, make_pair('x', 'y')));
assert_eq!(joined.get::<3>(), &'x');
assert_eq!(joined.into_inner().4, 'y');
```
*/

#![recursion_limit = "256"]
#![allow(clippy::type_complexity)]
#![warn(missing_docs)]
#![warn(missing_copy_implementations, missing_debug_implementations)]
#![warn(unused_qualifications, unused_results)]
#![warn(future_incompatible)]
#![warn(unused)]
// Documentation configuration
#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
extern crate derivative;

pub mod alloc;
pub mod category;
pub mod list;
pub mod slot;
pub mod storage;
pub mod traits;
pub mod tuple;
pub mod unary;

mod error;
mod pair;

pub use error::{AllocError, ElementError};
pub use mystl_macro::{Assign, ImplicitDefault};
pub use pair::{make_pair, Pair};
pub use traits::{init, Assign, Ignore, ImplicitDefault, IGNORE};
pub use tuple::{
    forward_as_tuple, get, get_type, make_tuple, swap, tie, tuple_cat, ElementOf, Elements, Get,
    Tuple, TupleLike,
};

/// The prelude module for quickly getting started.
///
/// This module is designed to be imported as `use mystl::prelude::*;`, which brings into scope the
/// collection types, their constructors and accessors, and the traits whose methods they use.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::tie;
    #[doc(no_inline)]
    pub use crate::traits::{init, Assign, Ignore, ImplicitDefault, IGNORE};
    #[doc(no_inline)]
    pub use crate::tuple::{
        forward_as_tuple, get, get_type, make_tuple, swap, tuple_cat, ElementOf, Tuple, TupleLike,
    };
    #[doc(no_inline)]
    pub use crate::{make_pair, Pair};
}
