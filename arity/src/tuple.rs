//! Conversions back and forth between flat tuples like `(A, B, C)` and their corresponding
//! inductive list structures like `(A, (B, (C, ())))`.
//!
//! Recursive trait impls can only walk the inductive form, one head at a time, but callers read and
//! write flat tuples. The traits here convert between the two equivalent representations, both at
//! the type level and for values.
//!
//! At present, tuples up to size 32 are supported.
//!
//! # Examples
//!
//! ```
//! use arity::tuple::{List, Tuple};
//!
//! let list = (1u8, 'b', "c").into_list();
//! assert_eq!(list, (1u8, ('b', ("c", ()))));
//! assert_eq!(list.into_tuple(), (1u8, 'b', "c"));
//! ```

use crate::unary::*;

/// Convert a tuple into its corresponding inductive list structure.
pub trait Tuple: Sized {
    /// The corresponding inductive list.
    type AsList: List<AsTuple = Self>;

    /// Move the elements of this tuple into its inductive list form.
    fn into_list(self) -> Self::AsList;
}

/// Convert an inductive list structure into its corresponding tuple.
pub trait List: Sized {
    /// The corresponding tuple.
    type AsTuple: Tuple<AsList = Self>;

    /// Move the elements of this list into its flat tuple form.
    fn into_tuple(self) -> Self::AsTuple;
}

/// Take the length of a type-level list as a unary type-level number.
///
/// # Examples
///
/// ```
/// use arity::tuple::{HasLength, Tuple};
/// use arity::unary::UnaryOf;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(<<(u8, u16, u32) as Tuple>::AsList as HasLength>::Length, UnaryOf<3>);
/// ```
pub trait HasLength {
    /// The length of a type-level list.
    type Length: Unary;
}

impl HasLength for () {
    type Length = Z;
}

impl<T, Ts: HasLength> HasLength for (T, Ts) {
    type Length = S<Ts::Length>;
}

arity_macro::impl_tuples!(32);

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_type_eq_all;

    assert_type_eq_all!(<() as Tuple>::AsList, ());
    assert_type_eq_all!(<(u8,) as Tuple>::AsList, (u8, ()));
    assert_type_eq_all!(<(u8, i8, bool) as Tuple>::AsList, (u8, (i8, (bool, ()))));
    assert_type_eq_all!(<(char, (String, ())) as List>::AsTuple, (char, String));

    #[test]
    fn empty_tuple_is_empty_list() {
        let () = ().into_list();
        let () = ().into_tuple();
    }

    #[test]
    fn values_survive_the_round_trip() {
        let tuple = (String::from("owned"), 7usize, [1u8, 2]);
        let list = tuple.clone().into_list();
        assert_eq!(list.0, "owned");
        assert_eq!((list.1).0, 7);
        assert_eq!(((list.1).1).0, [1, 2]);
        assert_eq!(list.into_tuple(), tuple);
    }

    #[test]
    fn lengths_count_elements() {
        assert_eq!(<<() as Tuple>::AsList as HasLength>::Length::VALUE, 0);
        assert_eq!(<<(u8,) as Tuple>::AsList as HasLength>::Length::VALUE, 1);
        assert_eq!(
            <<(u8, u8, u8, u8, u8, u8, u8, u8, u8, u8) as Tuple>::AsList as HasLength>::Length::VALUE,
            10
        );
    }
}
