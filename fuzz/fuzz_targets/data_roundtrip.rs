#![no_main]

use codec::{decode_data, encode_data};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let limits = wire::Limits::for_testing();
    if let Ok(course) = decode_data(text, &limits) {
        let encoded = encode_data(&course);
        decode_data(&encoded, &wire::Limits::unlimited()).expect("encoded data must decode");
    }
});
