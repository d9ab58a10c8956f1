// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use std::io;
use thiserror::Error;
use vecgen_kernel::VectorError;

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Vector error: {0}")]
    Vector(#[from] VectorError),
    #[error("Invalid data format: {0}")]
    InvalidFormat(String),
}

pub type Result<T> = std::result::Result<T, PersistenceError>;
