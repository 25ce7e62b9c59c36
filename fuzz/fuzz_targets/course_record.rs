#![no_main]

use course::{Course, Limits};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(raw) = std::str::from_utf8(data) else {
        return;
    };
    let limits = Limits::for_testing();
    if let Ok(course) = Course::parse_with_limits(raw, &limits) {
        let _ = course.serialize("fuzz", "token");
        let _ = course.upload("fuzz", "token");
        let _ = Course::parse_verified(raw, "fuzz");
    }
});
