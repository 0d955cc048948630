use std::fs;
use std::path::Path;

use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8};
use crate::error::{CoreError, Result};

#[derive(Debug)]
pub struct DecodedText {
    pub text: String,
    pub encoding: String,
}

pub fn decode_file(path: &Path) -> Result<DecodedText> {
    let bytes = fs::read(path)?;
    decode_bytes(&bytes).ok_or_else(|| {
        let guess = guess_encoding(&bytes);
        CoreError::Decode {
            path: path.display().to_string(),
            encoding: guess.name().to_lowercase(),
        }
    })
}

/// BOM first (UTF-8 and UTF-16 files saved by phone editors), then chardetng.
pub fn decode_bytes(bytes: &[u8]) -> Option<DecodedText> {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        let (text, had_errors) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
        if had_errors {
            return None;
        }
        return Some(DecodedText {
            text: text.into_owned(),
            encoding: encoding.name().to_lowercase(),
        });
    }

    let encoding = guess_encoding(bytes);
    let (text, had_errors) = encoding.decode_without_bom_handling(bytes);
    if had_errors {
        return None;
    }

    Some(DecodedText {
        text: text.into_owned(),
        encoding: encoding.name().to_lowercase(),
    })
}

fn guess_encoding(bytes: &[u8]) -> &'static Encoding {
    // chardetng only reports UTF-8 when told it is allowed to
    if std::str::from_utf8(bytes).is_ok() {
        return UTF_8;
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    detector.guess(None, true)
}
