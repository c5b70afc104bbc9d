//! Value categories for element access.
//!
//! An element can be reached from an owned tuple, through a shared borrow, or through a unique
//! borrow, and the element handed back is respectively `T`, `&'a T`, or `&'a mut T`. The
//! [`Get`](crate::Get) trait tags each receiver with one of the calling conventions [`Val`],
//! [`Ref`] or [`Mut`] and computes its output as `<T as By<'a, Convention>>::Type`, so the same
//! index lookup serves all three forms.
//!
//! # Examples
//!
//! ```
//! use mystl::category::{By, Mut, Ref, Val};
//! use static_assertions::assert_type_eq_all;
//!
//! assert_type_eq_all!(<String as By<'static, Val>>::Type, String);
//! assert_type_eq_all!(<String as By<'static, Ref>>::Type, &'static String);
//! assert_type_eq_all!(<String as By<'static, Mut>>::Type, &'static mut String);
//! ```

pub use call_by::{By, Convention, Mut, Ref, Val};
