//! Optional gzip and base64 layers around the raw input and output bytes.
//!
//! Output layering is payload -> gzip -> base64; decoding applies the
//! inverse, so a stream produced with both toggles round-trips.

use std::io::{Read, Write};

use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

use crate::error::{SortError, SortResult};

/// Decode `raw` according to the enabled layers.
pub fn decode(raw: &[u8], gzip: bool, base64: bool) -> SortResult<Vec<u8>> {
    let mut payload = raw.to_vec();

    if base64 {
        payload = BASE64_STANDARD
            .decode(&payload)
            .map_err(|err| SortError::decode(&format!("base64: {err}")))?;
    }

    if gzip {
        let mut decoder = GzDecoder::new(payload.as_slice());
        let mut inflated = Vec::new();
        decoder
            .read_to_end(&mut inflated)
            .map_err(|err| SortError::decode(&format!("gzip: {err}")))?;
        payload = inflated;
    }

    Ok(payload)
}

/// Encode `payload` according to the enabled layers.
pub fn encode(payload: &[u8], gzip: bool, base64: bool) -> SortResult<Vec<u8>> {
    let mut out = payload.to_vec();

    if gzip {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&out)?;
        out = encoder.finish()?;
    }

    if base64 {
        out = BASE64_STANDARD.encode(&out).into_bytes();
    }

    Ok(out)
}
