/*!
Arity-polymorphic operations on fixed-size aggregates, expanded entirely at compile time.

An *aggregate* here is a tuple or an array: a collection whose number of elements is part of its
type. This crate provides three layers of machinery over such aggregates, each built on the one
before:

1. **Index generation.** Every arity is a type-level unary number ([`unary`]), and every arity `N`
   has a type-level list of the indices `0, 1, ..., N - 1` ([`index`]). Value-level
   [`IndexSequence`]s and literal [`IntegerSequence`]s ([`sequence`]) know their size statically
   and print a fixed listing, which is handy when debugging type-level code.
2. **Conversion.** An array `[T; N]` can be copied into the tuple `(T, T, ..., T)` of the same
   arity ([`convert`]), with the tuple type computed from `N`.
3. **Rendering.** Any aggregate can be turned into text by visiting its elements in index order
   ([`aggregate`]) and writing them out in the *tuple layout*, `(e0, e1, e2)`, or the *sequence
   layout*, `e0 e1 e2 ` ([`render`]). Renderings nest, compose with `format!`, and can be written
   to I/O sinks ([`io`](mod@io)).

No runtime type information is involved, and no element is ever reached by a runtime loop over a
heterogeneous collection: every visit is a chain of trait impls, one per index, resolved when the
program is compiled. Arity mismatches and out-of-range positions are compile errors.

## Quick reference

```
use arity::prelude::*;

// A literal sequence, printed with its size.
let literal = integer_sequence!(u32; 9, 2, 5, 1, 9, 1, 6);
assert_eq!(literal.to_string(), "The sequence of size 7: 9 2 5 1 9 1 6 \n");

// The indices of an arbitrary tuple type.
let indices = index_sequence_for::<(f32, std::io::Stdin, char)>();
assert_eq!(indices.to_string(), "The sequence of size 3: 0 1 2 \n");

// Array to tuple, then both rendered.
let array = [1, 2, 3, 4];
let tuple = array.to_tuple();
assert_eq!(tuple, (1, 2, 3, 4));
assert_eq!(format!("The Array: {}", display_sequence(&array)), "The Array: 1 2 3 4 ");
assert_eq!(format!("The tuple: {}", display_tuple(&tuple)), "The tuple: (1, 2, 3, 4)");

// Nested aggregates render recursively.
assert_eq!(((1, 2), 3).display().to_string(), "((1, 2), 3)");
```

## Limits

Tuples are supported up to 32 elements and arrays up to 64 elements (arrays up to 32 elements for
[`to_tuple`](convert::to_tuple), since the result is a tuple). Code which works with the largest
arrays may need `#![recursion_limit = "256"]`, because bounding a type-level index is itself a
recursion over the index.
*/

#![recursion_limit = "256"]
#![allow(clippy::type_complexity)]
#![warn(missing_docs)]
#![warn(missing_copy_implementations, missing_debug_implementations)]
#![warn(unused_qualifications, unused_results)]
#![warn(future_incompatible)]
#![warn(unused)]
// Documentation configuration
#![forbid(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
extern crate derivative;

pub mod aggregate;
pub mod convert;
pub mod index;
pub mod io;
pub mod render;
pub mod sequence;
pub mod tuple;
pub mod unary;

mod error;

pub use error::Error;
#[allow(unused_imports)] // For documentation linking
use sequence::{IndexSequence, IntegerSequence};

/// The prelude module for quickly getting started.
///
/// This module is designed to be imported as `use arity::prelude::*;`, which brings into scope
/// the traits whose methods you will call and the functions you will most often use.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::aggregate::{visit, Aggregate, Get, Visit, Visitor};
    #[doc(no_inline)]
    pub use crate::convert::{to_tuple, ArrayExt};
    #[doc(no_inline)]
    pub use crate::integer_sequence;
    #[doc(no_inline)]
    pub use crate::render::{display_sequence, display_tuple, Displayed, Render, RenderExt};
    #[doc(no_inline)]
    pub use crate::sequence::{
        index_sequence_for, make_index_sequence, make_integer_sequence, IndexSequence,
        IntegerSequence, Sequence,
    };
    #[doc(no_inline)]
    pub use crate::unary::UnaryOf;
}
