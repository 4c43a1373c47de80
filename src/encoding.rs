// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Base64 detection for certificate material.

use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Check whether a string is padded standard base64.
///
/// This is a heuristic: plain text that happens to be valid base64 is
/// reported as encoded. Whitespace is not stripped, so PEM text never matches.
pub fn is_base64_encoded(s: &str) -> bool {
    !s.is_empty() && STANDARD.decode(s).is_ok()
}
