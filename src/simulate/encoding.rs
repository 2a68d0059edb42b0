//! Body encodings: compressed echoes and base64 decoding.

use std::io::Write;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use flate2::write::{GzEncoder, ZlibEncoder};
use flate2::Compression;

/// Content codings offered by the compressed echo endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compressed {
    Gzip,
    Deflate,
    Brotli,
}

impl Compressed {
    /// Value for the Content-Encoding response header.
    pub fn content_encoding(self) -> &'static str {
        match self {
            Compressed::Gzip => "gzip",
            Compressed::Deflate => "deflate",
            Compressed::Brotli => "br",
        }
    }

    /// Marker field set to true in the echoed JSON.
    pub fn marker(self) -> &'static str {
        match self {
            Compressed::Gzip => "gzipped",
            Compressed::Deflate => "deflated",
            Compressed::Brotli => "brotli",
        }
    }
}

/// Compress `data` with the selected coding.
///
/// Writes go to in-memory buffers and cannot fail.
pub fn compress(coding: Compressed, data: &[u8]) -> Vec<u8> {
    match coding {
        Compressed::Gzip => {
            let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
            let _ = encoder.write_all(data);
            encoder.finish().unwrap_or_default()
        }
        Compressed::Deflate => {
            let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
            let _ = encoder.write_all(data);
            encoder.finish().unwrap_or_default()
        }
        Compressed::Brotli => {
            let mut out = Vec::new();
            {
                let mut writer = brotli::CompressorWriter::new(&mut out, 4096, 5, 22);
                let _ = writer.write_all(data);
            }
            out
        }
    }
}

/// Hint returned whenever the path segment is not valid base64.
pub const BASE64_FALLBACK: &str = "Incorrect Base64 data try: SFRUUEJJTiBpcyBhd2Vzb21l";

/// Decode a base64 path segment, or hand back the canned hint.
pub fn decode_base64(value: &str) -> String {
    match BASE64.decode(value) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(_) => BASE64_FALLBACK.to_string(),
    }
}
