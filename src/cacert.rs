// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Materialization of the injector-supplied CA certificate

use crate::encoding::is_base64_encoded;
use crate::error::Result;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::fs;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Decode certificate content passed through CACERT.
///
/// Base64 content is decoded, anything else is taken as PEM text.
pub fn decode_ca_cert(raw: &str) -> Result<Vec<u8>> {
    if is_base64_encoded(raw) {
        debug!("CA certificate is base64 encoded, decoding");
        Ok(STANDARD.decode(raw)?)
    } else {
        Ok(raw.as_bytes().to_vec())
    }
}

/// Write the decoded certificate to `path`, creating parent directories
#[instrument(skip(raw))]
pub fn write_ca_cert(raw: &str, path: &Path) -> Result<()> {
    let pem = decode_ca_cert(raw)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, &pem)?;

    info!("Wrote CA certificate ({} bytes) to {}", pem.len(), path.display());
    Ok(())
}
