#![no_main]

//! Fuzz target for timecode string parsing.
//!
//! Exercises the strict HH:MM:SS:FF grammar: the parser must never
//! panic, and anything it accepts must format back to the same string.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use video_timecode::{parse_timecode, FrameRate, TimeCode};

#[derive(Arbitrary, Debug)]
struct ParseInput {
    text: String,
    rate_num: u32,
    rate_den: u32,
}

fuzz_target!(|input: ParseInput| {
    // Limit input size
    if input.text.len() > 1024 {
        return;
    }

    // FromStr with the defaulted rate.
    if let Ok(tc) = input.text.parse::<TimeCode>() {
        assert!(tc.is_valid());
        assert_eq!(tc.to_string(), input.text);
    }

    // Explicit-rate parse, including degenerate rates.
    if let Ok(rate) = FrameRate::new(input.rate_num, input.rate_den) {
        if let Ok(tc) = parse_timecode(&input.text, rate) {
            assert!(tc.is_valid());
            assert_eq!(tc.to_string(), input.text);
            let _ = tc.add_frames(1).is_valid();
        }
    }
});
