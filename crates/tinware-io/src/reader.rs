use crate::error::DecodeError;
use crate::source::ByteSource;

/// Scratch capacity — the widest supported primitive.
const SCRATCH_LEN: usize = 8;

/// Decoder for big-endian fixed-width primitives.
///
/// Wraps a [`ByteSource`] and reads one primitive per call, pulling
/// exactly the type's width off the stream:
///
/// ```text
/// ┌───────────────────┬───────┬──────────────────────────────────┐
/// │ Operation         │ Width │ Encoding                         │
/// ├───────────────────┼───────┼──────────────────────────────────┤
/// │ read_i8/read_u8   │ 1     │ two's-complement / unsigned      │
/// │ read_i16/read_u16 │ 2     │ big-endian                       │
/// │ read_i32/read_u32 │ 4     │ big-endian                       │
/// │ read_i64/read_u64 │ 8     │ big-endian                       │
/// │ read_f32          │ 4     │ big-endian IEEE-754 binary32     │
/// │ read_f64          │ 8     │ big-endian IEEE-754 binary64     │
/// └───────────────────┴───────┴──────────────────────────────────┘
/// ```
///
/// Each read loops until the full width has been accumulated, so
/// sources that deliver short reads (sockets, buffered streams) still
/// decode correctly. If the source reports end of input before the
/// width is satisfied, the read fails with
/// [`DecodeError::UnexpectedEof`] and the partial bytes are discarded —
/// the source's cursor is left wherever the last sub-read put it, with
/// no rollback.
///
/// Floats are decoded bit-for-bit: the wire bytes become the same-width
/// big-endian integer, which is then reinterpreted as IEEE-754. NaN
/// payloads, signed zero, and infinities come through exactly as
/// encoded.
///
/// The internal 8-byte scratch buffer is reused on every call (no
/// per-read allocation), which makes the reader strictly sequential:
/// `&mut self` receivers enforce one caller at a time, and there is no
/// internal synchronization to share it across threads.
///
/// # Lifecycle
///
/// [`close`](Self::close) moves the reader into a terminal closed
/// state; every read after that fails with [`DecodeError::Closed`]
/// without touching the source. The first close also closes the source
/// unless the reader was built with
/// [`with_leave_open`](Self::with_leave_open); repeat closes are
/// no-ops. [`into_inner`](Self::into_inner) hands the source back to
/// the caller.
///
/// # Example
///
/// ```rust
/// use tinware_io::BigEndianReader;
///
/// let bytes: &[u8] = &[0x12, 0x34, 0x3F, 0x80, 0x00, 0x00];
/// let mut reader = BigEndianReader::new(bytes);
/// assert_eq!(reader.read_u16().unwrap(), 0x1234);
/// assert_eq!(reader.read_f32().unwrap(), 1.0);
/// ```
pub struct BigEndianReader<S: ByteSource> {
    source: S,
    /// Reused across calls; only `scratch[..width]` holds meaningful
    /// data, and only until the next read.
    scratch: [u8; SCRATCH_LEN],
    closed: bool,
    leave_open: bool,
}

impl<S: ByteSource> BigEndianReader<S> {
    /// Create a reader whose [`close`](Self::close) also closes the
    /// source.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self::with_leave_open(source, false)
    }

    /// Create a reader with an explicit leave-open policy.
    ///
    /// With `leave_open = true`, closing the reader marks it unusable
    /// but leaves the source untouched — recover it afterwards with
    /// [`into_inner`](Self::into_inner).
    #[must_use]
    pub fn with_leave_open(source: S, leave_open: bool) -> Self {
        Self {
            source,
            scratch: [0; SCRATCH_LEN],
            closed: false,
            leave_open,
        }
    }

    /// Pull exactly `WIDTH` bytes off the source into the scratch
    /// buffer, accumulating across short reads.
    fn fill<const WIDTH: usize>(&mut self) -> Result<[u8; WIDTH], DecodeError> {
        if self.closed {
            return Err(DecodeError::Closed);
        }

        let mut got = 0;
        while got < WIDTH {
            let n = self.source.read_into(&mut self.scratch[got..WIDTH])?;
            if n == 0 {
                return Err(DecodeError::UnexpectedEof { needed: WIDTH, got });
            }
            got += n;
        }

        let mut bytes = [0u8; WIDTH];
        bytes.copy_from_slice(&self.scratch[..WIDTH]);
        Ok(bytes)
    }

    /// Read one unsigned byte.
    ///
    /// # Errors
    ///
    /// [`DecodeError::Closed`] after close, [`DecodeError::UnexpectedEof`]
    /// on an exhausted source, [`DecodeError::Io`] for source faults —
    /// the same for every `read_*` method below.
    pub fn read_u8(&mut self) -> Result<u8, DecodeError> {
        Ok(u8::from_be_bytes(self.fill()?))
    }

    /// Read one signed byte.
    ///
    /// # Errors
    ///
    /// See [`read_u8`](Self::read_u8).
    pub fn read_i8(&mut self) -> Result<i8, DecodeError> {
        Ok(i8::from_be_bytes(self.fill()?))
    }

    /// Read a big-endian two's-complement 16-bit integer.
    ///
    /// # Errors
    ///
    /// See [`read_u8`](Self::read_u8).
    pub fn read_i16(&mut self) -> Result<i16, DecodeError> {
        Ok(i16::from_be_bytes(self.fill()?))
    }

    /// Read a big-endian unsigned 16-bit integer.
    ///
    /// # Errors
    ///
    /// See [`read_u8`](Self::read_u8).
    pub fn read_u16(&mut self) -> Result<u16, DecodeError> {
        Ok(u16::from_be_bytes(self.fill()?))
    }

    /// Read a big-endian two's-complement 32-bit integer.
    ///
    /// # Errors
    ///
    /// See [`read_u8`](Self::read_u8).
    pub fn read_i32(&mut self) -> Result<i32, DecodeError> {
        Ok(i32::from_be_bytes(self.fill()?))
    }

    /// Read a big-endian unsigned 32-bit integer.
    ///
    /// # Errors
    ///
    /// See [`read_u8`](Self::read_u8).
    pub fn read_u32(&mut self) -> Result<u32, DecodeError> {
        Ok(u32::from_be_bytes(self.fill()?))
    }

    /// Read a big-endian two's-complement 64-bit integer.
    ///
    /// # Errors
    ///
    /// See [`read_u8`](Self::read_u8).
    pub fn read_i64(&mut self) -> Result<i64, DecodeError> {
        Ok(i64::from_be_bytes(self.fill()?))
    }

    /// Read a big-endian unsigned 64-bit integer.
    ///
    /// # Errors
    ///
    /// See [`read_u8`](Self::read_u8).
    pub fn read_u64(&mut self) -> Result<u64, DecodeError> {
        Ok(u64::from_be_bytes(self.fill()?))
    }

    /// Read a big-endian IEEE-754 binary32 float.
    ///
    /// The four wire bytes are decoded as a big-endian `u32` and the
    /// bit pattern reinterpreted — no normalization, no NaN
    /// canonicalization.
    ///
    /// # Errors
    ///
    /// See [`read_u8`](Self::read_u8).
    pub fn read_f32(&mut self) -> Result<f32, DecodeError> {
        Ok(f32::from_bits(u32::from_be_bytes(self.fill()?)))
    }

    /// Read a big-endian IEEE-754 binary64 float.
    ///
    /// Bit-exact, like [`read_f32`](Self::read_f32).
    ///
    /// # Errors
    ///
    /// See [`read_u8`](Self::read_u8).
    pub fn read_f64(&mut self) -> Result<f64, DecodeError> {
        Ok(f64::from_bits(u64::from_be_bytes(self.fill()?)))
    }

    /// Close the reader.
    ///
    /// The first call closes the source (unless the reader was created
    /// with leave-open) and marks the reader closed; every later call
    /// is a no-op. Never fails.
    pub fn close(&mut self) {
        if self.closed {
            return;
        }

        if !self.leave_open {
            self.source.close();
        }

        self.closed = true;
    }

    /// Whether [`close`](Self::close) has run.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Consume the reader and hand back the source.
    #[must_use]
    pub fn into_inner(self) -> S {
        self.source
    }
}
