//! Value-level index and integer sequences, with a fixed textual listing.
//!
//! Two flavors of [`Sequence`] exist:
//!
//! - [`IndexSequence<N>`](IndexSequence): the positional indices `0, 1, ..., N - 1` of a unary
//!   arity `N`, as `usize`. It is zero-sized; its indices come from the type-level [`Indices`]
//!   list. Build one with [`make_index_sequence`] or [`index_sequence_for`].
//! - [`IntegerSequence<T, N>`](IntegerSequence): `N` explicitly supplied values of an integer type
//!   `T`, kept in the order given. Build one with [`integer_sequence!`](crate::integer_sequence),
//!   [`IntegerSequence::new`], or [`make_integer_sequence`].
//!
//! Every sequence knows its [`size`](Sequence::size) without looking at its values, and
//! [`render`](Sequence::render)s as `The sequence of size N: v0 v1 ... vN-1 ` followed by a
//! newline:
//!
//! ```
//! use arity::integer_sequence;
//! use arity::sequence::{index_sequence_for, make_index_sequence, Sequence};
//!
//! let literal = integer_sequence!(u32; 9, 2, 5, 1, 9, 1, 6);
//! assert_eq!(literal.size(), 7);
//! assert_eq!(literal.to_string(), "The sequence of size 7: 9 2 5 1 9 1 6 \n");
//!
//! assert_eq!(make_index_sequence::<3>().to_string(), "The sequence of size 3: 0 1 2 \n");
//! assert_eq!(index_sequence_for::<(f32, String, char)>().size(), 3);
//! ```

use std::{fmt, marker::PhantomData};

use crate::aggregate::{Aggregate, Visit, Visitor};
use crate::index::{IndexList, Indices};
use crate::render::{Render, SequenceLayout};
use crate::unary::*;

/// An ordered, fixed-size run of integer values with a known size.
pub trait Sequence {
    /// The number of values, known without reading any of them.
    const SIZE: usize;

    /// The number of values, known without reading any of them.
    fn size(&self) -> usize {
        Self::SIZE
    }

    /// Hand each value to `visitor`, in stored order.
    fn visit_values<V: Visitor + ?Sized>(&self, visitor: &mut V) -> fmt::Result;

    /// Write the listing `The sequence of size N: v0 v1 ... vN-1 \n` to `out`.
    fn render<W: fmt::Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        write!(out, "The sequence of size {}: ", self.size())?;
        self.visit_values(&mut SequenceLayout::new(&mut *out))?;
        out.write_char('\n')
    }
}

/// The indices `0, 1, ..., N - 1` of the unary arity `N`.
#[derive(Derivative)]
#[derivative(
    Debug(bound = ""),
    Clone(bound = ""),
    Copy(bound = ""),
    Default(bound = ""),
    PartialEq(bound = ""),
    Eq(bound = ""),
    Hash(bound = "")
)]
pub struct IndexSequence<N> {
    arity: PhantomData<fn() -> N>,
}

impl<N: Indices> IndexSequence<N> {
    /// The index sequence for `N`.
    pub const fn new() -> Self {
        IndexSequence { arity: PhantomData }
    }
}

impl<N: Indices> Sequence for IndexSequence<N> {
    const SIZE: usize = N::VALUE;

    fn visit_values<V: Visitor + ?Sized>(&self, visitor: &mut V) -> fmt::Result {
        <N::List as IndexList>::try_for_each(&mut |i| visitor.visit(i, &i))
    }
}

impl<N: Indices> fmt::Display for IndexSequence<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Sequence::render(self, f)
    }
}

/// The index sequence `0, 1, ..., N - 1` for a constant `N`.
///
/// # Examples
///
/// ```
/// use arity::sequence::{make_index_sequence, Sequence};
///
/// let indices = make_index_sequence::<10>();
/// assert_eq!(indices.size(), 10);
/// assert_eq!(indices.to_string(), "The sequence of size 10: 0 1 2 3 4 5 6 7 8 9 \n");
/// ```
pub fn make_index_sequence<const N: usize>() -> IndexSequence<UnaryOf<N>>
where
    Number<N>: ToUnary,
    UnaryOf<N>: Indices,
{
    IndexSequence::new()
}

/// The index sequence for the positions of the aggregate type `A`.
///
/// The element types of `A` are irrelevant; only its arity is used.
///
/// # Examples
///
/// ```
/// use arity::sequence::{index_sequence_for, Sequence};
///
/// let indices = index_sequence_for::<(f32, std::io::Stdin, char)>();
/// assert_eq!(indices.to_string(), "The sequence of size 3: 0 1 2 \n");
/// ```
pub fn index_sequence_for<A>() -> IndexSequence<A::Arity>
where
    A: Aggregate + ?Sized,
    A::Arity: Indices,
{
    IndexSequence::new()
}

/// The primitive integer types, which may be the values of an [`IntegerSequence`].
pub trait Integer: sealed::Integer + Copy + Render + fmt::Display + fmt::Debug + 'static {
    /// The largest value of this type, widened.
    const MAX: u128;

    /// Convert an index known to be at most [`MAX`](Integer::MAX).
    fn from_index(index: usize) -> Self;
}

macro_rules! integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Integer for $ty {}

            impl Integer for $ty {
                const MAX: u128 = <$ty>::MAX as u128;

                #[inline]
                #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
                fn from_index(index: usize) -> Self {
                    index as $ty
                }
            }
        )*
    };
}

integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// `N` literal values of the integer type `T`, in the order given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntegerSequence<T, const N: usize> {
    values: [T; N],
}

impl<T: Integer, const N: usize> IntegerSequence<T, N> {
    /// Wrap the given values, keeping their order.
    pub const fn new(values: [T; N]) -> Self {
        IntegerSequence { values }
    }

    /// The number of values.
    pub const fn len(&self) -> usize {
        N
    }

    /// Whether there are no values.
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// The values, in stored order.
    pub fn values(&self) -> &[T; N] {
        &self.values
    }

    /// Unwrap the values, in stored order.
    pub fn into_values(self) -> [T; N] {
        self.values
    }
}

impl<T: Integer, const N: usize> Sequence for IntegerSequence<T, N>
where
    [T; N]: Visit,
{
    const SIZE: usize = N;

    fn visit_values<V: Visitor + ?Sized>(&self, visitor: &mut V) -> fmt::Result {
        self.values.visit(visitor)
    }
}

impl<T: Integer, const N: usize> fmt::Display for IntegerSequence<T, N>
where
    [T; N]: Visit,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Sequence::render(self, f)
    }
}

impl<T: Integer, const N: usize> From<[T; N]> for IntegerSequence<T, N> {
    fn from(values: [T; N]) -> Self {
        IntegerSequence::new(values)
    }
}

/// Rejects, at monomorphization time, any `N` whose largest index does not fit in `T`.
struct IndicesFit<T, const N: usize>(PhantomData<T>);

impl<T: Integer, const N: usize> IndicesFit<T, N> {
    const OK: () = assert!(
        N == 0 || (N - 1) as u128 <= T::MAX,
        "the indices of this sequence do not fit in its integer type"
    );
}

/// The integer sequence `0, 1, ..., N - 1` of type `T`.
///
/// Asking for more values than `T` can hold fails to compile.
///
/// # Examples
///
/// ```
/// use arity::sequence::{make_integer_sequence, Sequence};
///
/// let ints = make_integer_sequence::<i32, 5>();
/// assert_eq!(ints.values(), &[0, 1, 2, 3, 4]);
/// assert_eq!(ints.to_string(), "The sequence of size 5: 0 1 2 3 4 \n");
/// ```
///
/// ```compile_fail
/// use arity::sequence::make_integer_sequence;
///
/// // 256 values need the index 255, which does not fit in an `i8`.
/// let _ = make_integer_sequence::<i8, 256>();
/// ```
pub fn make_integer_sequence<T: Integer, const N: usize>() -> IntegerSequence<T, N> {
    #[allow(clippy::let_unit_value)]
    let () = IndicesFit::<T, N>::OK;
    IntegerSequence::new(std::array::from_fn(T::from_index))
}

/// Build an [`IntegerSequence`] from literal values of the given integer type.
///
/// The length is inferred from the number of values.
///
/// # Examples
///
/// ```
/// use arity::integer_sequence;
/// use arity::sequence::Sequence;
///
/// let seq = integer_sequence!(i64; -3, 0, 3);
/// assert_eq!(seq.size(), 3);
/// assert_eq!(seq.values(), &[-3, 0, 3]);
///
/// let empty = integer_sequence!(u8);
/// assert_eq!(empty.to_string(), "The sequence of size 0: \n");
/// ```
#[macro_export]
macro_rules! integer_sequence {
    ($ty:ty; $($value:expr),+ $(,)?) => {
        $crate::sequence::IntegerSequence::new([$({
            let value: $ty = $value;
            value
        }),+])
    };
    ($ty:ty $(;)?) => {
        $crate::sequence::IntegerSequence::<$ty, 0>::new([])
    };
}

mod sealed {
    pub trait Integer {}
}
