//! Fixed-size aggregates, positional access at a type-level index, and index-driven visiting.
//!
//! An [`Aggregate`] is anything whose element count is a compile-time [`Unary`] number: every
//! tuple up to size 32 and every array `[T; N]` up to size 64. [`Get<K>`](Get) reads the element
//! at the type-level index `K`, and [`Visit`] walks the aggregate's [`IndicesOf`] list, handing
//! each element in turn to a [`Visitor`].
//!
//! # Examples
//!
//! ```
//! use arity::aggregate::{Aggregate, Get};
//! use arity::unary::UnaryOf;
//!
//! let tuple = (1u8, "two", 3.0f64);
//! assert_eq!(<(u8, &str, f64)>::ARITY, 3);
//! assert_eq!(*Get::<UnaryOf<1>>::get(&tuple), "two");
//!
//! let array = [10, 20, 30, 40];
//! assert_eq!(<[i32; 4]>::ARITY, 4);
//! assert_eq!(*Get::<UnaryOf<3>>::get(&array), 40);
//! ```
//!
//! Reading past the end does not compile, for tuples:
//!
//! ```compile_fail
//! use arity::aggregate::Get;
//! use arity::unary::UnaryOf;
//!
//! let tuple = (1u8, "two");
//! let _ = Get::<UnaryOf<2>>::get(&tuple);
//! ```
//!
//! or for arrays:
//!
//! ```compile_fail
//! use arity::aggregate::Get;
//! use arity::unary::UnaryOf;
//!
//! let array = [1, 2, 3];
//! let _ = Get::<UnaryOf<3>>::get(&array);
//! ```

use std::fmt;

use crate::index::Indices;
use crate::render::Render;
use crate::unary::*;

/// A collection whose number of elements is fixed by its type.
pub trait Aggregate {
    /// The number of elements, as a type-level number.
    type Arity: Unary;

    /// The number of elements, as a value.
    const ARITY: usize = <Self::Arity as Unary>::VALUE;
}

impl<T, const N: usize> Aggregate for [T; N]
where
    Number<N>: ToUnary,
{
    type Arity = UnaryOf<N>;
}

/// The index list `0, 1, ..., A::ARITY - 1` for the aggregate type `A`.
pub type IndicesOf<A> = <<A as Aggregate>::Arity as Indices>::List;

/// Read the element at the type-level position `K`.
///
/// Implemented for every position of every tuple up to size 32, and for every `K` strictly less
/// than `N` on `[T; N]`.
pub trait Get<K: Unary> {
    /// The type of the element at position `K`.
    type Output: ?Sized;

    /// Borrow the element at position `K`.
    fn get(&self) -> &Self::Output;
}

impl<T, K, const N: usize> Get<K> for [T; N]
where
    Number<N>: ToUnary,
    K: LessThan<UnaryOf<N>>,
{
    type Output = T;

    #[inline]
    fn get(&self) -> &T {
        &self[K::VALUE]
    }
}

/// Receives the elements of an aggregate, one at a time, in ascending index order.
pub trait Visitor {
    /// Accept the element at `index`.
    fn visit<E: Render + ?Sized>(&mut self, index: usize, element: &E) -> fmt::Result;
}

impl<V: Visitor + ?Sized> Visitor for &mut V {
    fn visit<E: Render + ?Sized>(&mut self, index: usize, element: &E) -> fmt::Result {
        (**self).visit(index, element)
    }
}

/// Visit the elements of `A` named by the index list `Self`.
///
/// This is the fold that replaces a runtime loop: `()` visits nothing, and `(I, Is)` visits
/// element `I` of the aggregate before recurring into `Is`.
pub trait VisitEach<A: ?Sized> {
    /// Hand each element of `aggregate` named by this index list to `visitor`.
    fn visit_each<V: Visitor + ?Sized>(aggregate: &A, visitor: &mut V) -> fmt::Result;
}

impl<A: ?Sized> VisitEach<A> for () {
    #[inline]
    fn visit_each<V: Visitor + ?Sized>(_: &A, _: &mut V) -> fmt::Result {
        Ok(())
    }
}

impl<A, I, Is> VisitEach<A> for (I, Is)
where
    A: Get<I> + ?Sized,
    A::Output: Render,
    I: Unary,
    Is: VisitEach<A>,
{
    #[inline]
    fn visit_each<V: Visitor + ?Sized>(aggregate: &A, visitor: &mut V) -> fmt::Result {
        visitor.visit(I::VALUE, <A as Get<I>>::get(aggregate))?;
        Is::visit_each(aggregate, visitor)
    }
}

/// An aggregate whose every element can be rendered, and which can therefore be visited.
///
/// This is implemented automatically for every [`Aggregate`] whose elements all implement
/// [`Render`]; it exists so that generic code can name that whole bundle of bounds at once.
pub trait Visit: Aggregate {
    /// Hand every element to `visitor`, in index order `0, 1, ..., ARITY - 1`.
    fn visit<V: Visitor + ?Sized>(&self, visitor: &mut V) -> fmt::Result;
}

impl<A> Visit for A
where
    A: Aggregate + ?Sized,
    A::Arity: Indices,
    IndicesOf<A>: VisitEach<A>,
{
    #[inline]
    fn visit<V: Visitor + ?Sized>(&self, visitor: &mut V) -> fmt::Result {
        <IndicesOf<A> as VisitEach<A>>::visit_each(self, visitor)
    }
}

/// Hand every element of `aggregate` to `visitor`, in index order.
///
/// # Examples
///
/// ```
/// use std::fmt;
/// use arity::aggregate::{visit, Visitor};
/// use arity::render::Render;
///
/// struct Positions(Vec<usize>);
///
/// impl Visitor for Positions {
///     fn visit<E: Render + ?Sized>(&mut self, index: usize, _: &E) -> fmt::Result {
///         self.0.push(index);
///         Ok(())
///     }
/// }
///
/// let mut positions = Positions(Vec::new());
/// visit(&('a', "b", 3u8, [4u8; 2]), &mut positions).unwrap();
/// assert_eq!(positions.0, [0, 1, 2, 3]);
/// ```
pub fn visit<A, V>(aggregate: &A, visitor: &mut V) -> fmt::Result
where
    A: Visit + ?Sized,
    V: Visitor + ?Sized,
{
    aggregate.visit(visitor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::{assert_impl_all, assert_not_impl_any, assert_type_eq_all};

    assert_type_eq_all!(<(u8, u16) as Aggregate>::Arity, UnaryOf<2>);
    assert_type_eq_all!(<[bool; 5] as Aggregate>::Arity, UnaryOf<5>);
    assert_type_eq_all!(<(u8, u16, u32) as Get<UnaryOf<2>>>::Output, u32);
    assert_type_eq_all!(<[char; 3] as Get<UnaryOf<0>>>::Output, char);

    assert_impl_all!((u8, String): Get<UnaryOf<0>>, Get<UnaryOf<1>>, Visit);
    assert_not_impl_any!((u8, String): Get<UnaryOf<2>>);
    assert_not_impl_any!([u8; 0]: Get<UnaryOf<0>>);
    assert_impl_all!([u8; 64]: Aggregate, Get<UnaryOf<63>>);

    /// Records every visit as `(index, rendered element)`.
    #[derive(Debug, Default)]
    struct Recorder(Vec<(usize, String)>);

    impl Visitor for Recorder {
        fn visit<E: Render + ?Sized>(&mut self, index: usize, element: &E) -> fmt::Result {
            let mut text = String::new();
            element.render(&mut text)?;
            self.0.push((index, text));
            Ok(())
        }
    }

    fn record<A: Visit + ?Sized>(aggregate: &A) -> Vec<(usize, String)> {
        let mut recorder = Recorder::default();
        visit(aggregate, &mut recorder).unwrap();
        recorder.0
    }

    #[test]
    fn arity_constants() {
        assert_eq!(<()>::ARITY, 0);
        assert_eq!(<(u8,)>::ARITY, 1);
        assert_eq!(<[u8; 0]>::ARITY, 0);
        assert_eq!(<[u8; 64]>::ARITY, 64);
    }

    #[test]
    fn empty_aggregates_are_not_visited() {
        assert!(record(&()).is_empty());
        assert!(record(&[0u8; 0]).is_empty());
    }

    #[test]
    fn heterogeneous_tuple_is_visited_in_order() {
        let visits = record(&(1u8, 'x', "yz", false));
        assert_eq!(
            visits,
            [
                (0, "1".to_string()),
                (1, "x".to_string()),
                (2, "yz".to_string()),
                (3, "false".to_string()),
            ]
        );
    }

    #[test]
    fn array_is_visited_in_order() {
        let visits = record(&[5, 6, 7]);
        let indices: Vec<usize> = visits.iter().map(|(i, _)| *i).collect();
        assert_eq!(indices, [0, 1, 2]);
        assert_eq!(visits[2].1, "7");
    }

    #[test]
    fn visiting_twice_sees_the_same_elements() {
        let tuple = (1.5f32, String::from("s"), [1u8, 2]);
        assert_eq!(record(&tuple), record(&tuple));
    }

    #[test]
    fn visitor_errors_stop_the_walk() {
        struct StopAt(usize, Vec<usize>);

        impl Visitor for StopAt {
            fn visit<E: Render + ?Sized>(&mut self, index: usize, _: &E) -> fmt::Result {
                if index == self.0 {
                    return Err(fmt::Error);
                }
                self.1.push(index);
                Ok(())
            }
        }

        let mut stop = StopAt(2, Vec::new());
        assert!(visit(&[0u8; 6], &mut stop).is_err());
        assert_eq!(stop.1, [0, 1]);
    }
}
