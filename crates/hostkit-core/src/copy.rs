//! Stream copying with a reusable buffer.
//!
//! Archive creation and extraction both copy entry bodies through a single
//! buffer per operation instead of allocating one per file.

use std::io::Read;
use std::io::Write;
use std::io::{self};

use crate::report::NoopProgress;
use crate::report::ProgressCallback;

/// Buffer size for entry copies (64KB).
const COPY_BUFFER_SIZE: usize = 64 * 1024;

/// Stack-allocated buffer reused across every entry of one operation.
#[derive(Debug)]
pub struct CopyBuffer {
    #[allow(clippy::large_stack_arrays)]
    buf: [u8; COPY_BUFFER_SIZE],
}

impl CopyBuffer {
    /// Creates a new zeroed copy buffer.
    #[inline]
    #[must_use]
    #[allow(clippy::large_stack_arrays)]
    pub fn new() -> Self {
        Self {
            buf: [0u8; COPY_BUFFER_SIZE],
        }
    }

    /// Returns the buffer size in bytes.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        COPY_BUFFER_SIZE
    }
}

impl Default for CopyBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Copies all bytes from `reader` to `writer` and returns the count.
///
/// Interrupted reads are retried; every other error is returned unchanged so
/// the caller can attach the path it was working on.
///
/// # Errors
///
/// Returns the first read or write error.
///
/// # Examples
///
/// ```
/// use hostkit_core::copy::CopyBuffer;
/// use hostkit_core::copy::copy_with_buffer;
///
/// let mut buffer = CopyBuffer::new();
/// let mut output = Vec::new();
/// let copied = copy_with_buffer(&mut &b"hello"[..], &mut output, &mut buffer).unwrap();
/// assert_eq!(copied, 5);
/// assert_eq!(output, b"hello");
/// ```
#[inline]
pub fn copy_with_buffer<R: Read, W: Write>(
    reader: &mut R,
    writer: &mut W,
    buffer: &mut CopyBuffer,
) -> io::Result<u64> {
    copy_with_progress(reader, writer, buffer, &mut NoopProgress)
}

/// Like [`copy_with_buffer`], reporting each written chunk to `progress`.
///
/// # Errors
///
/// Returns the first read or write error.
pub fn copy_with_progress<R: Read, W: Write>(
    reader: &mut R,
    writer: &mut W,
    buffer: &mut CopyBuffer,
    progress: &mut dyn ProgressCallback,
) -> io::Result<u64> {
    let mut total: u64 = 0;

    loop {
        let bytes_read = match reader.read(&mut buffer.buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };

        writer.write_all(&buffer.buf[..bytes_read])?;

        total += bytes_read as u64;
        progress.on_bytes_written(bytes_read as u64);
    }

    Ok(total)
}
