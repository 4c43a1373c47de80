// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InjectError {
    #[error("Invalid auth config: {0}")]
    InvalidAuthConfig(String),

    #[error("Failed to decode CA certificate: {0}")]
    CaCertDecode(#[from] base64::DecodeError),

    #[error("Failed to write CA certificate: {0}")]
    CaCertWrite(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, InjectError>;
