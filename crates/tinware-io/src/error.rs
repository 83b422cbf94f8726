/// Errors that can occur while decoding big-endian primitives.
///
/// The reader fails at three levels: lifecycle (reads on a closed
/// reader), stream termination (the source runs dry mid-primitive),
/// and faults raised by the source itself.
///
/// Error hierarchy:
///
/// ```text
///   DecodeError
///   ├── Closed                 ← read attempted after close()
///   ├── UnexpectedEof          ← source exhausted before the full width
///   └── Io(std::io::Error)     ← fault from the underlying source
/// ```
///
/// None of these are retried by the reader. `Closed` is terminal by
/// definition; `UnexpectedEof` discards any partially accumulated
/// bytes; `Io` surfaces the source's own error untouched.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// A typed read was attempted after the reader was closed.
    ///
    /// The closed state is terminal — once set it never clears, so the
    /// caller must treat the reader as permanently unusable. No I/O is
    /// attempted on a closed reader.
    #[error("reader is closed")]
    Closed,

    /// The source reported end of input before a full primitive was read.
    ///
    /// Raised as soon as a sub-read returns zero bytes, including on
    /// the very first sub-read of an empty source. `got` bytes had been
    /// accumulated at that point; they are discarded, and the source's
    /// cursor stays wherever the last sub-read left it — a failed read
    /// is not repeatable.
    #[error("unexpected end of stream: needed {needed} bytes, got {got}")]
    UnexpectedEof { needed: usize, got: usize },

    /// An I/O fault from the underlying byte source.
    ///
    /// Propagated unchanged — the reader neither interprets nor wraps
    /// source failures.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
