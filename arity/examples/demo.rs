//! Prints the listings of a few index and integer sequences, then an array and the tuple it
//! converts to.
//!
//! Run with `RUST_LOG=arity=trace` to see the events emitted for each write.

use arity::prelude::*;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), arity::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    arity::io::write_listing(&integer_sequence!(u32; 9, 2, 5, 1, 9, 1, 6), &mut out)?;
    arity::io::write_listing(&make_integer_sequence::<i32, 20>(), &mut out)?;
    arity::io::write_listing(&make_index_sequence::<10>(), &mut out)?;
    arity::io::write_listing(&index_sequence_for::<(f32, io::Stdin, char)>(), &mut out)?;

    let array = [1, 2, 3, 4];
    let tuple = array.to_tuple();

    out.write_all(b"The Array: ")?;
    arity::io::write_sequence(&array, &mut out)?;
    out.write_all(b"\nThe tuple: ")?;
    arity::io::write_tuple(&tuple, &mut out)?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}
