use std::io;

/// Minimal byte-source capability consumed by
/// [`BigEndianReader`](crate::BigEndianReader).
///
/// A source only has to do two things: place bytes into a caller-owned
/// buffer, and release itself when asked. This deliberately stays far
/// smaller than [`std::io::Read`]'s full surface — the reader needs
/// nothing beyond a bounded read and an optional close.
///
/// ```text
///   read_into(buf) ──▶ Ok(n)  1..=buf.len() bytes placed
///                  ──▶ Ok(0)  end of input
///                  ──▶ Err(e) source fault, surfaced unchanged
/// ```
///
/// Every `R: std::io::Read` is a `ByteSource` through the blanket
/// implementation below, so files, TCP streams, cursors, and byte
/// slices all work directly. Custom sources may implement the trait
/// themselves instead (as long as they do not also implement `Read`,
/// which would overlap with the blanket impl) — typically to give
/// [`close`](Self::close) real semantics.
pub trait ByteSource {
    /// Read up to `buf.len()` bytes into `buf`, returning how many
    /// were placed. `Ok(0)` signals that no more data will arrive.
    ///
    /// Short reads are expected and legal: a source may return fewer
    /// bytes than requested on any call (network and buffered sources
    /// routinely do).
    ///
    /// # Errors
    ///
    /// Any fault of the source itself. The caller propagates it
    /// without interpretation.
    fn read_into(&mut self, buf: &mut [u8]) -> io::Result<usize>;

    /// Release the source.
    ///
    /// Infallible and expected to tolerate repeat calls. The default
    /// implementation does nothing — for standard readers, dropping
    /// the value is what actually releases the resource.
    fn close(&mut self) {}
}

impl<R: io::Read> ByteSource for R {
    fn read_into(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.read(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices_are_sources() {
        let mut source: &[u8] = &[0xAA, 0xBB, 0xCC];
        let mut buf = [0u8; 2];
        assert_eq!(source.read_into(&mut buf).unwrap(), 2);
        assert_eq!(buf, [0xAA, 0xBB]);
        assert_eq!(source.read_into(&mut buf).unwrap(), 1);
        assert_eq!(buf[0], 0xCC);
        assert_eq!(source.read_into(&mut buf).unwrap(), 0);
    }

    #[test]
    fn default_close_is_a_no_op() {
        let mut source: &[u8] = &[0x01];
        source.close();
        source.close();
        let mut buf = [0u8; 1];
        assert_eq!(source.read_into(&mut buf).unwrap(), 1);
    }
}
