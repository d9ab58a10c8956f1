#[cfg(test)]
// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
pub mod support;
pub mod vector_tests;
pub mod determinism_tests;
pub mod proof_tests;
