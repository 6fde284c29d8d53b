//! Structural rendering of fixed-size aggregates into text.
//!
//! Two layouts are provided, each as a [`Visitor`] and as a free function over any [`Visit`]able
//! aggregate:
//!
//! - **tuple layout** ([`render_tuple`]): `(e0, e1, ..., eN-1)`, with `", "` before every element
//!   except the first. The empty aggregate renders as `()`.
//! - **sequence layout** ([`render_sequence`]): `e0 e1 ... eN-1 `, with a single space *after*
//!   every element, including the last, and no enclosing punctuation. The empty aggregate renders
//!   as nothing at all.
//!
//! Rendering appends to any [`fmt::Write`] sink and never adds a newline, so it can be spliced into
//! a larger piece of text. The [`display_tuple`] and [`display_sequence`] adapters do the same
//! through [`Display`], for use with `format!`, `write!` and friends:
//!
//! ```
//! use arity::render::{display_sequence, display_tuple};
//!
//! let array = [1, 2, 3, 4];
//! assert_eq!(format!("The Array: {}", display_sequence(&array)), "The Array: 1 2 3 4 ");
//! assert_eq!(format!("The tuple: {}", display_tuple(&(1, "a", 'b'))), "The tuple: (1, a, b)");
//! ```
//!
//! Elements are converted with their own [`Render`] impl. Primitives use their [`Display`] form;
//! tuples nested inside an aggregate use the tuple layout, and nested arrays use the sequence
//! layout:
//!
//! ```
//! use arity::render::display_tuple;
//!
//! assert_eq!(display_tuple(&((1, 2), 3)).to_string(), "((1, 2), 3)");
//! assert_eq!(display_tuple(&([1, 2], ())).to_string(), "(1 2 , ())");
//! ```

use std::{
    borrow::{Cow, ToOwned},
    fmt::{self, Display},
    rc::Rc,
    sync::Arc,
};

use crate::aggregate::{Visit, Visitor};

/// Append a textual representation of `self` to a sink.
///
/// This is implemented for the primitive types (using their [`Display`] form), for strings, for
/// every tuple up to size 32 (tuple layout), for every array up to size 64 (sequence layout), and
/// through references and the standard smart pointers. Wrap any other [`Display`] type in
/// [`Displayed`] to render it.
pub trait Render {
    /// Write the representation of `self` to `out`.
    fn render<W: fmt::Write + ?Sized>(&self, out: &mut W) -> fmt::Result;
}

macro_rules! render_with_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Render for $ty {
                #[inline]
                fn render<W: fmt::Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
                    write!(out, "{}", self)
                }
            }
        )*
    };
}

render_with_display!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, str,
    String,
);

impl<T: Render + ?Sized> Render for &T {
    fn render<W: fmt::Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        (**self).render(out)
    }
}

impl<T: Render + ?Sized> Render for &mut T {
    fn render<W: fmt::Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        (**self).render(out)
    }
}

impl<T: Render + ?Sized> Render for Box<T> {
    fn render<W: fmt::Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        (**self).render(out)
    }
}

impl<T: Render + ?Sized> Render for Rc<T> {
    fn render<W: fmt::Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        (**self).render(out)
    }
}

impl<T: Render + ?Sized> Render for Arc<T> {
    fn render<W: fmt::Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        (**self).render(out)
    }
}

impl<B: Render + ToOwned + ?Sized> Render for Cow<'_, B> {
    fn render<W: fmt::Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        (**self).render(out)
    }
}

impl<T, const N: usize> Render for [T; N]
where
    [T; N]: Visit,
{
    fn render<W: fmt::Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        render_sequence(self, out)
    }
}

/// Render any [`Display`] type by its [`Display`] form.
///
/// # Examples
///
/// ```
/// use std::net::Ipv4Addr;
/// use arity::render::{display_tuple, Displayed};
///
/// let pair = (Displayed(Ipv4Addr::LOCALHOST), 8080u16);
/// assert_eq!(display_tuple(&pair).to_string(), "(127.0.0.1, 8080)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Displayed<T>(pub T);

impl<T: Display> Render for Displayed<T> {
    fn render<W: fmt::Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        write!(out, "{}", self.0)
    }
}

/// A [`Visitor`] writing elements in the tuple layout, without the enclosing parentheses.
#[derive(Debug)]
pub struct TupleLayout<'a, W: ?Sized> {
    out: &'a mut W,
}

impl<'a, W: fmt::Write + ?Sized> TupleLayout<'a, W> {
    /// Write elements to `out`.
    pub fn new(out: &'a mut W) -> Self {
        TupleLayout { out }
    }
}

impl<W: fmt::Write + ?Sized> Visitor for TupleLayout<'_, W> {
    fn visit<E: Render + ?Sized>(&mut self, index: usize, element: &E) -> fmt::Result {
        if index != 0 {
            self.out.write_str(", ")?;
        }
        element.render(&mut *self.out)
    }
}

/// A [`Visitor`] writing each element followed by a single space.
#[derive(Debug)]
pub struct SequenceLayout<'a, W: ?Sized> {
    out: &'a mut W,
}

impl<'a, W: fmt::Write + ?Sized> SequenceLayout<'a, W> {
    /// Write elements to `out`.
    pub fn new(out: &'a mut W) -> Self {
        SequenceLayout { out }
    }
}

impl<W: fmt::Write + ?Sized> Visitor for SequenceLayout<'_, W> {
    fn visit<E: Render + ?Sized>(&mut self, _: usize, element: &E) -> fmt::Result {
        element.render(&mut *self.out)?;
        self.out.write_char(' ')
    }
}

/// Write `aggregate` to `out` in the tuple layout: `(e0, e1, ..., eN-1)`.
///
/// # Examples
///
/// ```
/// use arity::render::render_tuple;
///
/// let mut out = String::new();
/// render_tuple(&(1, 2.5, "three"), &mut out).unwrap();
/// assert_eq!(out, "(1, 2.5, three)");
///
/// out.clear();
/// render_tuple(&(), &mut out).unwrap();
/// assert_eq!(out, "()");
/// ```
pub fn render_tuple<A, W>(aggregate: &A, out: &mut W) -> fmt::Result
where
    A: Visit + ?Sized,
    W: fmt::Write + ?Sized,
{
    out.write_char('(')?;
    aggregate.visit(&mut TupleLayout::new(out))?;
    out.write_char(')')
}

/// Write `aggregate` to `out` in the sequence layout: `e0 e1 ... eN-1 `.
///
/// # Examples
///
/// ```
/// use arity::render::render_sequence;
///
/// let mut out = String::new();
/// render_sequence(&[1, 2, 3, 4], &mut out).unwrap();
/// assert_eq!(out, "1 2 3 4 ");
///
/// out.clear();
/// render_sequence(&[0u8; 0], &mut out).unwrap();
/// assert_eq!(out, "");
/// ```
pub fn render_sequence<A, W>(aggregate: &A, out: &mut W) -> fmt::Result
where
    A: Visit + ?Sized,
    W: fmt::Write + ?Sized,
{
    aggregate.visit(&mut SequenceLayout::new(out))
}

/// A [`Display`] adapter rendering an aggregate in the tuple layout.
#[derive(Derivative)]
#[derivative(Debug(bound = "A: fmt::Debug"), Clone(bound = ""), Copy(bound = ""))]
pub struct DisplayTuple<'a, A: ?Sized>(&'a A);

impl<A: Visit + ?Sized> Display for DisplayTuple<'_, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_tuple(self.0, f)
    }
}

/// A [`Display`] adapter rendering an aggregate in the sequence layout.
#[derive(Derivative)]
#[derivative(Debug(bound = "A: fmt::Debug"), Clone(bound = ""), Copy(bound = ""))]
pub struct DisplaySequence<'a, A: ?Sized>(&'a A);

impl<A: Visit + ?Sized> Display for DisplaySequence<'_, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_sequence(self.0, f)
    }
}

/// Display `aggregate` in the tuple layout.
pub fn display_tuple<A: Visit + ?Sized>(aggregate: &A) -> DisplayTuple<'_, A> {
    DisplayTuple(aggregate)
}

/// Display `aggregate` in the sequence layout.
pub fn display_sequence<A: Visit + ?Sized>(aggregate: &A) -> DisplaySequence<'_, A> {
    DisplaySequence(aggregate)
}

/// A [`Display`] adapter for any [`Render`] value, using its own layout.
#[derive(Derivative)]
#[derivative(Debug(bound = "R: fmt::Debug"), Clone(bound = ""), Copy(bound = ""))]
pub struct Rendered<'a, R: ?Sized>(&'a R);

impl<R: Render + ?Sized> Display for Rendered<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.render(f)
    }
}

/// Extension methods for everything that implements [`Render`].
pub trait RenderExt: Render {
    /// Borrow `self` as a [`Display`] value.
    ///
    /// # Examples
    ///
    /// ```
    /// use arity::render::RenderExt;
    ///
    /// let nested = ((1, [2, 3]), "four");
    /// assert_eq!(nested.display().to_string(), "((1, 2 3 ), four)");
    /// ```
    fn display(&self) -> Rendered<'_, Self> {
        Rendered(self)
    }

    /// Render `self` into a new [`String`].
    ///
    /// Fails only if one of the elements' own [`Render`] impls fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use arity::render::RenderExt;
    ///
    /// assert_eq!((1, (2, 3)).render_to_string().unwrap(), "(1, (2, 3))");
    /// assert_eq!([true, false].render_to_string().unwrap(), "true false ");
    /// ```
    fn render_to_string(&self) -> Result<String, fmt::Error> {
        let mut out = String::new();
        self.render(&mut out)?;
        Ok(out)
    }
}

impl<R: Render + ?Sized> RenderExt for R {}
