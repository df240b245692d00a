//! Binary persistence.
//!
//! A complex number is stored as two little-endian IEEE-754 doubles, real part first, with no
//! header or framing around them.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use tracing::debug;

use crate::complex::Complex;

/// Number of bytes [`write_complex`] emits.
pub const ENCODED_LEN: usize = 16;

pub fn write_complex<W: Write>(writer: &mut W, c: Complex) -> io::Result<()> {
    writer.write_all(&c.real().to_le_bytes())?;
    writer.write_all(&c.imaginary().to_le_bytes())
}

pub fn read_complex<R: Read>(reader: &mut R) -> io::Result<Complex> {
    let mut buf = [0u8; 8];
    reader.read_exact(&mut buf)?;
    let re = f64::from_le_bytes(buf);
    reader.read_exact(&mut buf)?;
    let im = f64::from_le_bytes(buf);
    Ok(Complex::new(re, im))
}

/// Creates (or truncates) the file at `path` and writes `c` into it.
pub fn write_to_file(c: Complex, path: impl AsRef<Path>) -> io::Result<()> {
    let path = path.as_ref();
    debug!(path = %path.display(), value = %c, "writing complex number");
    let mut writer = BufWriter::new(File::create(path)?);
    write_complex(&mut writer, c)?;
    writer.flush()
}

/// Reads a complex number from the start of the file at `path`. Trailing bytes are ignored.
pub fn read_from_file(path: impl AsRef<Path>) -> io::Result<Complex> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading complex number");
    read_complex(&mut BufReader::new(File::open(path)?))
}
