// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
pub mod error;
pub mod vector_file;
pub mod fixtures;

pub use error::{PersistenceError, Result};
