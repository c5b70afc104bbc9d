use super::*;
use crate::list::Append;

/// Left fold over an inductive list of tuple-likes, appending each one's elements onto the
/// accumulator `Acc`.
pub trait CatFold<Acc> {
    /// The accumulated list of elements.
    type Output;

    /// Run the fold.
    fn cat_fold(self, acc: Acc) -> Self::Output;
}

impl<Acc> CatFold<Acc> for () {
    type Output = Acc;

    fn cat_fold(self, acc: Acc) -> Acc {
        acc
    }
}

impl<Acc, H, Rest> CatFold<Acc> for (H, Rest)
where
    H: TupleLike,
    Acc: Append<<H::Flat as Types>::AsList>,
    Rest: CatFold<<Acc as Append<<H::Flat as Types>::AsList>>::Output>,
{
    type Output = Rest::Output;

    fn cat_fold(self, acc: Acc) -> Self::Output {
        let (head, rest) = self;
        rest.cat_fold(acc.append(head.into_flat().into_list()))
    }
}

/// The element types of the concatenation of the flat tuple of tuple-likes `Ts`.
pub type Concatenated<Ts> = <<<Ts as Types>::AsList as CatFold<()>>::Output as List>::AsTypes;

/// Concatenate any number of tuple-likes, given as a flat tuple, into one [`Tuple`] whose elements
/// are theirs in argument order.
///
/// ```
/// use mystl::prelude::*;
///
/// let joined = tuple_cat((
///     make_tuple((1, 'a')),
///     make_tuple(()),
///     make_pair(2.5, "pair"),
///     (100i64,),
/// ));
/// assert_eq!(joined.into_inner(), (1, 'a', 2.5, "pair", 100i64));
/// assert_eq!(tuple_cat(()), make_tuple(()));
/// ```
pub fn tuple_cat<Ts>(tuples: Ts) -> Tuple<Concatenated<Ts>>
where
    Ts: Types,
    Ts::AsList: CatFold<()>,
    <Ts::AsList as CatFold<()>>::Output: List + Layout<Z> + HasLength,
{
    Tuple::new(tuples.into_list().cat_fold(()).into_types())
}

impl<T: Types> Tuple<T> {
    /// Append the elements of `other` after those of `self`.
    ///
    /// ```
    /// use mystl::prelude::*;
    ///
    /// let t = make_tuple((1u8,)).concat(make_tuple(("two", 3.0f32)));
    /// assert_eq!(t, make_tuple((1u8, "two", 3.0f32)));
    /// ```
    pub fn concat<U: Types>(
        self,
        other: Tuple<U>,
    ) -> Tuple<<<T::AsList as Append<U::AsList>>::Output as List>::AsTypes>
    where
        T::AsList: Append<U::AsList>,
        <T::AsList as Append<U::AsList>>::Output: List + Layout<Z> + HasLength,
    {
        Tuple::new(self.into_list().append(other.into_list()).into_types())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_type_eq_all;

    #[test]
    fn empty_tuples_are_identities() {
        assert_type_eq_all!(Concatenated<(Tuple<()>, Tuple<(u8,)>, Tuple<()>)>, (u8,));
        let t = tuple_cat((make_tuple(()), make_tuple((7u8,)), make_tuple(())));
        assert_eq!(t, make_tuple((7u8,)));
    }

    #[test]
    fn folds_left_to_right() {
        let t = tuple_cat((
            make_tuple((1u8,)),
            make_tuple((2u16,)),
            make_tuple((3u32,)),
        ));
        assert_eq!(t.into_inner(), (1u8, 2u16, 3u32));
    }
}
