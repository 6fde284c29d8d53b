//! Conversion of a homogeneous array `[T; N]` into the tuple `(T, T, ..., T)` of the same arity.
//!
//! The conversion walks the array's index list: each index `I` contributes a clone of element `I`
//! to an inductive list, which is then flattened into a tuple by [`List::into_tuple`]. The result
//! type, [`TupleOf<T, N>`](TupleOf), is computed entirely at the type level.
//!
//! # Examples
//!
//! ```
//! use arity::convert::to_tuple;
//! use static_assertions::assert_type_eq_all;
//!
//! let array = [1, 2, 3, 4];
//! let tuple = to_tuple(&array);
//! assert_eq!(tuple, (1, 2, 3, 4));
//!
//! assert_type_eq_all!(arity::convert::TupleOf<i32, 4>, (i32, i32, i32, i32));
//! ```
//!
//! The arity is part of the type, so a tuple of the wrong size is rejected at compile time:
//!
//! ```compile_fail
//! use arity::convert::to_tuple;
//!
//! let (_a, _b, _c): (i32, i32, i32) = to_tuple(&[1, 2, 3, 4]);
//! ```

use crate::aggregate::Get;
use crate::index::{IndexList, IndexSequenceOf, Indices};
use crate::tuple::List;
use crate::unary::*;

/// Clone the elements of `A` named by the index list `Self` into an inductive list.
pub trait Collect<A: ?Sized>: IndexList {
    /// The inductive list of cloned elements.
    type Output: List;

    /// Clone the named elements, in index order.
    fn collect(aggregate: &A) -> Self::Output;
}

impl<A: ?Sized> Collect<A> for () {
    type Output = ();

    #[inline]
    fn collect(_: &A) {}
}

impl<A, I, Is> Collect<A> for (I, Is)
where
    A: Get<I> + ?Sized,
    A::Output: Clone + Sized,
    I: Unary,
    Is: Collect<A>,
    (A::Output, Is::Output): List,
{
    type Output = (A::Output, Is::Output);

    #[inline]
    fn collect(aggregate: &A) -> Self::Output {
        let head = <A as Get<I>>::get(aggregate).clone();
        (head, Is::collect(aggregate))
    }
}

/// The tuple of `N` copies of `T`.
pub type TupleOf<T, const N: usize> =
    <<IndexSequenceOf<N> as Collect<[T; N]>>::Output as List>::AsTuple;

/// Copy each element of `array` into the same position of a new tuple.
///
/// Elements are cloned in index order, `0` first. The tuple owns its copies and does not borrow
/// from `array`.
///
/// # Examples
///
/// ```
/// use arity::convert::to_tuple;
///
/// let names = [String::from("a"), String::from("b")];
/// let (first, second) = to_tuple(&names);
/// assert_eq!(first, "a");
/// assert_eq!(second, "b");
///
/// let () = to_tuple(&[0u8; 0]);
/// ```
pub fn to_tuple<T, const N: usize>(array: &[T; N]) -> TupleOf<T, N>
where
    T: Clone,
    Number<N>: ToUnary,
    UnaryOf<N>: Indices,
    IndexSequenceOf<N>: Collect<[T; N]>,
{
    <IndexSequenceOf<N> as Collect<[T; N]>>::collect(array).into_tuple()
}

/// Method syntax for [`to_tuple`].
///
/// # Examples
///
/// ```
/// use arity::convert::ArrayExt;
///
/// assert_eq!(['x', 'y', 'z'].to_tuple(), ('x', 'y', 'z'));
/// ```
pub trait ArrayExt<T, const N: usize> {
    /// The tuple of `N` copies of `T`, always [`TupleOf<T, N>`](TupleOf).
    type Tuple;

    /// Copy each element into the same position of a new tuple.
    fn to_tuple(&self) -> Self::Tuple;
}

impl<T, const N: usize> ArrayExt<T, N> for [T; N]
where
    T: Clone,
    Number<N>: ToUnary,
    UnaryOf<N>: Indices,
    IndexSequenceOf<N>: Collect<[T; N]>,
{
    type Tuple = TupleOf<T, N>;

    fn to_tuple(&self) -> Self::Tuple {
        to_tuple(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_type_eq_all;
    use std::cell::RefCell;

    assert_type_eq_all!(TupleOf<u8, 0>, ());
    assert_type_eq_all!(TupleOf<u8, 1>, (u8,));
    assert_type_eq_all!(TupleOf<i32, 4>, (i32, i32, i32, i32));
    assert_type_eq_all!(TupleOf<String, 3>, (String, String, String));
    assert_type_eq_all!(<[char; 2] as ArrayExt<char, 2>>::Tuple, TupleOf<char, 2>);

    fn convert_any<A, T, const N: usize>(array: &A) -> A::Tuple
    where
        A: ArrayExt<T, N>,
    {
        array.to_tuple()
    }

    fn last_of_three<A: ArrayExt<u8, 3, Tuple = (u8, u8, u8)>>(array: &A) -> u8 {
        array.to_tuple().2
    }

    #[test]
    fn elements_land_in_matching_positions() {
        assert_eq!(to_tuple(&[1, 2, 3, 4]), (1, 2, 3, 4));
        assert_eq!(to_tuple(&[true]), (true,));
        assert_eq!(['a', 'b', 'c'].to_tuple(), ('a', 'b', 'c'));
    }

    #[test]
    fn method_syntax_through_generic_bounds() {
        assert_eq!(convert_any(&[1.5, 2.5]), (1.5, 2.5));
        assert_eq!(convert_any(&[0u8; 0]), ());
        assert_eq!(last_of_three(&[4, 5, 6]), 6);
    }

    #[test]
    fn empty_array_gives_unit() {
        let () = to_tuple::<u64, 0>(&[]);
    }

    #[test]
    fn source_is_left_untouched() {
        let source = [vec![1], vec![2, 3]];
        let (mut first, second) = to_tuple(&source);
        first.push(10);
        assert_eq!(source, [vec![1], vec![2, 3]]);
        assert_eq!(first, [1, 10]);
        assert_eq!(second, [2, 3]);
    }

    #[test]
    fn clones_happen_in_index_order() {
        #[derive(Debug)]
        struct Noisy<'a>(usize, &'a RefCell<Vec<usize>>);

        impl Clone for Noisy<'_> {
            fn clone(&self) -> Self {
                self.1.borrow_mut().push(self.0);
                Noisy(self.0, self.1)
            }
        }

        let log = RefCell::new(Vec::new());
        let array = [
            Noisy(0, &log),
            Noisy(1, &log),
            Noisy(2, &log),
            Noisy(3, &log),
            Noisy(4, &log),
        ];
        let tuple = to_tuple(&array);
        assert_eq!((tuple.0).0, 0);
        assert_eq!((tuple.4).0, 4);
        assert_eq!(*log.borrow(), [0, 1, 2, 3, 4]);
    }

    #[test]
    fn widest_tuple() {
        let array: [usize; 32] = std::array::from_fn(|i| i * 3);
        let tuple = array.to_tuple();
        assert_eq!(tuple.0, 0);
        assert_eq!(tuple.17, 51);
        assert_eq!(tuple.31, 93);
    }
}
