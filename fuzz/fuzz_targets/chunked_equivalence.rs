#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tinware_io::{ByteSource, BigEndianReader};

// Fuzz target: chunked delivery must be invisible to the decoder.
//
// The same bytes are decoded twice — once from a plain slice (whole
// delivery) and once from a source that returns at most `chunk` bytes
// per read. The decoded u32 sequences must be identical, including
// where they stop.
#[derive(Arbitrary, Debug)]
struct Plan {
    chunk: u8,
    data: Vec<u8>,
}

struct Throttled {
    data: Vec<u8>,
    pos: usize,
    chunk: usize,
}

impl ByteSource for Throttled {
    fn read_into(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let n = (self.data.len() - self.pos).min(self.chunk).min(buf.len());
        buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}

fuzz_target!(|plan: Plan| {
    let chunk = usize::from(plan.chunk).max(1);

    let mut whole = BigEndianReader::new(plan.data.as_slice());
    let mut chunked = BigEndianReader::new(Throttled {
        data: plan.data.clone(),
        pos: 0,
        chunk,
    });

    loop {
        match (whole.read_u32(), chunked.read_u32()) {
            (Ok(a), Ok(b)) => assert_eq!(a, b, "chunked delivery changed a value"),
            (Err(_), Err(_)) => break,
            (a, b) => panic!("delivery mode changed the outcome: {a:?} vs {b:?}"),
        }
    }
});
