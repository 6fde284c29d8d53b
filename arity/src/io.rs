//! Writing renderings to [`std::io::Write`] sinks.
//!
//! The functions here produce byte-for-byte the same text as their [`render`](crate::render)
//! counterparts, but append it to an I/O sink such as standard output or a file. A failing sink is
//! reported as [`Error::Io`] with the original [`io::Error`] kept intact.
//!
//! # Examples
//!
//! ```
//! use arity::integer_sequence;
//!
//! # fn main() -> Result<(), arity::Error> {
//! let mut out = Vec::new();
//! arity::io::write_listing(&integer_sequence!(u32; 9, 2, 5), &mut out)?;
//! arity::io::write_sequence(&[1, 2, 3, 4], &mut out)?;
//! arity::io::write_tuple(&(1, 2), &mut out)?;
//! assert_eq!(out, b"The sequence of size 3: 9 2 5 \n1 2 3 4 (1, 2)");
//! # Ok(())
//! # }
//! ```

use std::{fmt, io};

use crate::aggregate::Visit;
use crate::error::Error;
use crate::render::{render_sequence, render_tuple, Render};
use crate::sequence::Sequence;

/// A [`fmt::Write`] view of an [`io::Write`] sink which remembers the first I/O error.
struct IoSink<'a, W: ?Sized> {
    inner: &'a mut W,
    written: usize,
    error: Option<io::Error>,
}

impl<'a, W: io::Write + ?Sized> IoSink<'a, W> {
    fn new(inner: &'a mut W) -> Self {
        IoSink {
            inner,
            written: 0,
            error: None,
        }
    }

    /// Run `render` against this sink and translate its outcome.
    ///
    /// `arity` is left out of the emitted events when it is not known statically.
    fn run<F>(mut self, what: &'static str, arity: Option<usize>, render: F) -> Result<(), Error>
    where
        F: FnOnce(&mut Self) -> fmt::Result,
    {
        match render(&mut self) {
            Ok(()) => {
                tracing::trace!(what, arity, bytes = self.written, "wrote rendering");
                Ok(())
            }
            Err(fmt::Error) => {
                let error = match self.error.take() {
                    Some(io) => Error::Io(io),
                    None => Error::Format,
                };
                tracing::debug!(what, arity, bytes = self.written, %error, "rendering failed");
                Err(error)
            }
        }
    }
}

impl<W: io::Write + ?Sized> fmt::Write for IoSink<'_, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        match self.inner.write_all(s.as_bytes()) {
            Ok(()) => {
                self.written += s.len();
                Ok(())
            }
            Err(error) => {
                self.error = Some(error);
                Err(fmt::Error)
            }
        }
    }
}

/// Write `aggregate` to `out` in the tuple layout: `(e0, e1, ..., eN-1)`.
pub fn write_tuple<A, W>(aggregate: &A, out: &mut W) -> Result<(), Error>
where
    A: Visit + ?Sized,
    W: io::Write + ?Sized,
{
    IoSink::new(out).run("tuple", Some(A::ARITY), |sink| render_tuple(aggregate, sink))
}

/// Write `aggregate` to `out` in the sequence layout: `e0 e1 ... eN-1 `.
pub fn write_sequence<A, W>(aggregate: &A, out: &mut W) -> Result<(), Error>
where
    A: Visit + ?Sized,
    W: io::Write + ?Sized,
{
    IoSink::new(out).run("sequence", Some(A::ARITY), |sink| render_sequence(aggregate, sink))
}

/// Write any [`Render`] value to `out`, using its own layout.
pub fn write_rendered<R, W>(value: &R, out: &mut W) -> Result<(), Error>
where
    R: Render + ?Sized,
    W: io::Write + ?Sized,
{
    IoSink::new(out).run("value", None, |sink| value.render(sink))
}

/// Write the listing of `sequence` to `out`: `The sequence of size N: v0 v1 ... vN-1 \n`.
pub fn write_listing<S, W>(sequence: &S, out: &mut W) -> Result<(), Error>
where
    S: Sequence + ?Sized,
    W: io::Write + ?Sized,
{
    IoSink::new(out).run("listing", Some(S::SIZE), |sink| sequence.render(sink))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Displayed;
    use crate::sequence::make_index_sequence;
    use std::sync::{Arc, Mutex};

    /// A shared buffer that collects formatted log lines.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn logged(f: impl FnOnce()) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = captured.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    /// Accepts `capacity` bytes, then fails every write.
    struct Cramped {
        taken: Vec<u8>,
        capacity: usize,
    }

    impl io::Write for Cramped {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let room = self.capacity - self.taken.len();
            if room == 0 {
                return Err(io::Error::new(io::ErrorKind::WriteZero, "sink is full"));
            }
            let n = room.min(buf.len());
            self.taken.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Renders fine until asked, then fails without touching the sink.
    struct Refuses;

    impl Render for Refuses {
        fn render<W: fmt::Write + ?Sized>(&self, _: &mut W) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    #[test]
    fn output_matches_fmt_rendering() {
        let mut out = Vec::new();
        write_tuple(&((1, 2), 3), &mut out).unwrap();
        out.push(b'|');
        write_sequence(&['a', 'b'], &mut out).unwrap();
        out.push(b'|');
        write_rendered(&(Displayed(1.5), [(); 2]), &mut out).unwrap();
        out.push(b'|');
        write_listing(&make_index_sequence::<2>(), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "((1, 2), 3)|a b |(1.5, () () )|The sequence of size 2: 0 1 \n"
        );
    }

    #[test]
    fn sink_failures_surface_as_io_errors() {
        let mut sink = Cramped {
            taken: Vec::new(),
            capacity: 4,
        };
        let error = write_tuple(&(10, 20, 30), &mut sink).unwrap_err();
        match error {
            Error::Io(io) => assert_eq!(io.kind(), io::ErrorKind::WriteZero),
            other => panic!("expected an I/O error, got {:?}", other),
        }
        assert_eq!(sink.taken, b"(10,");
    }

    #[test]
    fn render_failures_surface_as_format_errors() {
        let mut out = Vec::new();
        let error = write_tuple(&(1, Refuses), &mut out).unwrap_err();
        assert!(matches!(error, Error::Format));
        assert_eq!(out, b"(1, ");
    }

    #[test]
    fn events_report_static_arity() {
        let log = logged(|| {
            write_tuple(&(1, 2, 3), &mut Vec::new()).unwrap();
            write_listing(&make_index_sequence::<5>(), &mut Vec::new()).unwrap();
        });
        assert!(log.contains("arity=3"), "{}", log);
        assert!(log.contains("arity=5"), "{}", log);
        assert!(log.contains("bytes=9"), "{}", log);
    }

    #[test]
    fn events_for_arbitrary_values_omit_arity() {
        let log = logged(|| write_rendered(&(1, [2, 3]), &mut Vec::new()).unwrap());
        assert!(log.contains("wrote rendering"), "{}", log);
        assert!(!log.contains("arity="), "{}", log);
    }
}
