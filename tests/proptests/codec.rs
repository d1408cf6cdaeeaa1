//! Property tests for share text and JSON encodings

use polyshare::Share;
use polyshare::codec;
use polyshare::domain::Threshold;
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

/// Wrapper for arbitrary byte vectors
#[derive(Clone, Debug)]
struct ByteVec(Vec<u8>);

impl Arbitrary for ByteVec {
    fn arbitrary(g: &mut Gen) -> Self {
        ByteVec(Vec::arbitrary(g))
    }
}

/// Text encoding preserves threshold, index and payload exactly
#[quickcheck]
fn prop_text_round_trip(data: ByteVec, threshold: u8, x: u8) -> bool {
    let ByteVec(fx) = data;

    let Ok(threshold_newtype) = Threshold::new(threshold) else {
        return true;
    };
    let share = Share { x, fx };

    let Ok(text) = codec::create_share(&share, threshold_newtype) else {
        // Only reserved indices may fail to encode
        return x == 0 || x == 255;
    };

    let Ok((parsed_threshold, parsed_share)) = codec::parse_share(text.as_str()) else {
        return false;
    };

    parsed_threshold == threshold_newtype && parsed_share == share
}

/// JSON encoding preserves threshold, index and payload exactly
#[quickcheck]
fn prop_json_round_trip(data: ByteVec, threshold: u8, x: u8) -> bool {
    let ByteVec(fx) = data;

    let Ok(threshold_newtype) = Threshold::new(threshold) else {
        return true;
    };
    let share = Share { x, fx };

    let Ok(json) = codec::to_json(&share, threshold_newtype) else {
        return x == 0 || x == 255;
    };

    let Ok((parsed_threshold, parsed_share)) = codec::parse_any(json.as_str()) else {
        return false;
    };

    parsed_threshold == threshold_newtype && parsed_share == share
}

/// Anything without the polyshare prefix is rejected
#[quickcheck]
fn prop_invalid_prefix_rejected(words: Vec<String>) -> bool {
    let text = format!("invalid-{}", words.join("-"));
    codec::parse_share(&text).is_err()
}
