#![no_main]

use libfuzzer_sys::fuzz_target;
use tinware_io::BigEndianReader;

// Fuzz target: drain arbitrary bytes through a cycle of typed reads.
//
// Catches bugs in:
// - The fill loop (over-/under-consumption, infinite loops at EOF)
// - Width bookkeeping between differently sized reads
// - Panics on any input shape
//
// Every input must end in UnexpectedEof; no read may panic.
fuzz_target!(|data: &[u8]| {
    let mut reader = BigEndianReader::new(data);

    loop {
        if reader.read_u8().is_err() {
            break;
        }
        if reader.read_i16().is_err() {
            break;
        }
        if reader.read_u32().is_err() {
            break;
        }
        if reader.read_f32().is_err() {
            break;
        }
        if reader.read_i64().is_err() {
            break;
        }
        if reader.read_f64().is_err() {
            break;
        }
    }

    // Lifecycle transitions must hold on every input too.
    reader.close();
    reader.close();
    assert!(reader.read_u16().is_err());
});
