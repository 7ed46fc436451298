// Copyright 2025 Dustin McAfee
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! SAC v1 container encoder.
//!
//! Packs a fixed 24-byte header followed by two raw little-endian i16
//! arrays. There is no compression, checksum, or trailer; the consumer
//! relies on the header's length and dimension fields alone. See the crate
//! docs for the full byte layout.

use bytes::{BufMut, BytesMut};

use crate::{DTYPE_INT16, SAC_ARRAY_COUNT, SAC_HEADER_LEN, SAC_MAGIC};

/// Builds a SAC v1 container from two i16 mask arrays.
///
/// `width` and `height` are dimension hints written into the header. When
/// both are non-zero, each array length must equal `width * height`.
/// Passing 0 for either skips the check; the zeros are still written to the
/// header verbatim.
///
/// # Errors
///
/// Returns `InvalidInput` if a dimension hint is given and either array
/// length does not match `width * height`.
pub fn build_sac(a: &[i16], b: &[i16], width: u32, height: u32) -> std::io::Result<Vec<u8>> {
    if width != 0 && height != 0 {
        let expected = width as usize * height as usize;
        if a.len() != expected {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!(
                    "SAC: array A length mismatch: got {} elements, expected {} for {}x{} mask",
                    a.len(),
                    expected,
                    width,
                    height
                ),
            ));
        }
        if b.len() != expected {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!(
                    "SAC: array B length mismatch: got {} elements, expected {} for {}x{} mask",
                    b.len(),
                    expected,
                    width,
                    height
                ),
            ));
        }
    }

    let mut buf = BytesMut::with_capacity(SAC_HEADER_LEN + 2 * (a.len() + b.len()));
    buf.put_slice(SAC_MAGIC);
    buf.put_u8(0); // flags
    buf.put_u8(DTYPE_INT16);
    buf.put_u8(SAC_ARRAY_COUNT);
    buf.put_u8(0); // reserved
    buf.put_u32_le(a.len() as u32);
    buf.put_u32_le(b.len() as u32);
    buf.put_u32_le(width);
    buf.put_u32_le(height);

    for &v in a {
        buf.put_i16_le(v);
    }
    for &v in b {
        buf.put_i16_le(v);
    }

    #[cfg(feature = "debug-logging")]
    log::info!(
        "SAC: packed {}+{} elements into {} bytes ({}x{})",
        a.len(),
        b.len(),
        buf.len(),
        width,
        height
    );

    Ok(buf.to_vec())
}
