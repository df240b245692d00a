//! Double-precision complex numbers.
//!
//! [`Complex`] is an immutable `Copy` value with the usual operators (mixing in plain `f64`s on
//! either side), a handful of elementary functions, a `<R;I>` text form and a 16-byte binary
//! form.
//!
//! ```
//! use cplx::{Complex, IMAGINARY_UNIT};
//!
//! let z = 2.0 + 3.0 * IMAGINARY_UNIT;
//! assert_eq!(z.to_string(), "<2;3>");
//! assert_eq!(cplx::parse("<2;3>"), Ok(z));
//! assert_eq!(z * z.conjugate(), Complex::from_real(13.0));
//! ```

pub mod arith;
mod complex;
pub mod error;
pub mod functions;
pub mod io;
pub mod text;

pub use arith::{add, conjugate, divide, equals, multiply, negate, subtract};
pub use complex::{Complex, IMAGINARY_UNIT};
pub use error::{ErrorKind, ParseComplexError};
pub use functions::{acos, cos, exp, log, pow, sqrt};
pub use io::{read_complex, read_from_file, write_complex, write_to_file};
pub use text::{
    format, parse, parse_with, try_parse, DecimalComma, FormatProvider, Invariant, NumberFormat,
};
