//! Type-level index lists: the compile-time sequence `0, 1, ..., N - 1` that drives every
//! arity-polymorphic expansion in this crate.
//!
//! An index list is an inductive list of [`Unary`] numbers, `(_0, (_1, (_2, ())))`. It is never
//! constructed as a value; trait impls on `()` and `(I, Is)` fold over it instead, which is how a
//! visit over a heterogeneous tuple is expanded at compile time.
//!
//! # Examples
//!
//! ```
//! use arity::index::{IndexList, IndexSequenceOf};
//! use arity::unary::*;
//! use static_assertions::assert_type_eq_all;
//!
//! assert_type_eq_all!(IndexSequenceOf<3>, (Z, (S<Z>, (S<S<Z>>, ()))));
//!
//! let mut seen = Vec::new();
//! <IndexSequenceOf<4>>::for_each(|i| seen.push(i));
//! assert_eq!(seen, [0, 1, 2, 3]);
//! ```

use std::convert::Infallible;

use crate::unary::*;

/// An inductive list of type-level indices, in the order they will be visited.
///
/// Implemented only for `()` and `(I, Is)` where `I` is [`Unary`] and `Is` is itself an
/// `IndexList`.
pub trait IndexList: sealed::IndexList {
    /// How many indices this list holds.
    type Length: Unary;

    /// How many indices this list holds, as a value.
    const LEN: usize = <Self::Length as Unary>::VALUE;

    /// Call `f` with each index of this list, front to back, stopping at the first error.
    fn try_for_each<E, F>(f: &mut F) -> Result<(), E>
    where
        F: FnMut(usize) -> Result<(), E>;

    /// Call `f` with each index of this list, front to back.
    fn for_each<F>(mut f: F)
    where
        F: FnMut(usize),
    {
        let result: Result<(), Infallible> = Self::try_for_each(&mut |i| {
            f(i);
            Ok(())
        });
        match result {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }
}

impl IndexList for () {
    type Length = Z;

    #[inline]
    fn try_for_each<E, F>(_: &mut F) -> Result<(), E>
    where
        F: FnMut(usize) -> Result<(), E>,
    {
        Ok(())
    }
}

impl<I: Unary, Is: IndexList> IndexList for (I, Is) {
    type Length = S<Is::Length>;

    #[inline]
    fn try_for_each<E, F>(f: &mut F) -> Result<(), E>
    where
        F: FnMut(usize) -> Result<(), E>,
    {
        f(I::VALUE)?;
        Is::try_for_each(f)
    }
}

/// Generate the index list for a unary arity, counting up from `Start`.
///
/// `<N as Indices>::List` is the list `0, 1, ..., N - 1`. The `Start` parameter is the counter
/// threaded through the recursion: `Z` yields the empty list, and `S<N>` yields `Start` followed by
/// the indices of `N` counted from `Start + 1`.
///
/// # Examples
///
/// ```
/// use arity::index::Indices;
/// use arity::unary::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(<Z as Indices>::List, ());
/// assert_type_eq_all!(<UnaryOf<2> as Indices>::List, (Z, (S<Z>, ())));
/// assert_type_eq_all!(<UnaryOf<2> as Indices<UnaryOf<5>>>::List, (UnaryOf<5>, (UnaryOf<6>, ())));
/// ```
pub trait Indices<Start: Unary = Z>: Unary {
    /// The generated list of indices.
    type List: IndexList;
}

impl<Start: Unary> Indices<Start> for Z {
    type List = ();
}

impl<Start: Unary, N: Indices<S<Start>>> Indices<Start> for S<N> {
    type List = (Start, <N as Indices<S<Start>>>::List);
}

/// The index list `0, 1, ..., N - 1` for a constant `N`.
pub type IndexSequenceOf<const N: usize> = <UnaryOf<N> as Indices>::List;

mod sealed {
    use super::*;
    pub trait IndexList {}
    impl IndexList for () {}
    impl<I: Unary, Is: IndexList> IndexList for (I, Is) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_type_eq_all;

    assert_type_eq_all!(IndexSequenceOf<0>, ());
    assert_type_eq_all!(IndexSequenceOf<1>, (Z, ()));
    assert_type_eq_all!(<IndexSequenceOf<7> as IndexList>::Length, UnaryOf<7>);

    fn collect<L: IndexList>() -> Vec<usize> {
        let mut seen = Vec::new();
        L::for_each(|i| seen.push(i));
        seen
    }

    #[test]
    fn empty_list_visits_nothing() {
        assert!(collect::<IndexSequenceOf<0>>().is_empty());
        assert_eq!(<IndexSequenceOf<0>>::LEN, 0);
    }

    #[test]
    fn indices_ascend_without_gaps() {
        assert_eq!(collect::<IndexSequenceOf<1>>(), [0]);
        assert_eq!(collect::<IndexSequenceOf<10>>(), (0..10).collect::<Vec<_>>());
        assert_eq!(collect::<IndexSequenceOf<32>>(), (0..32).collect::<Vec<_>>());
        assert_eq!(<IndexSequenceOf<32>>::LEN, 32);
    }

    #[test]
    fn offset_lists_start_at_the_offset() {
        let mut seen = Vec::new();
        <<UnaryOf<3> as Indices<UnaryOf<4>>>::List>::for_each(|i| seen.push(i));
        assert_eq!(seen, [4, 5, 6]);
    }

    #[test]
    fn errors_stop_the_walk() {
        let mut seen = Vec::new();
        let result = <IndexSequenceOf<6>>::try_for_each(&mut |i| {
            if i == 3 {
                return Err(i);
            }
            seen.push(i);
            Ok(())
        });
        assert_eq!(result, Err(3));
        assert_eq!(seen, [0, 1, 2]);
    }
}
