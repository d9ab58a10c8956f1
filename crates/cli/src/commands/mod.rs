// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
pub mod inspect;
pub mod verify;
pub mod digest;
pub mod diff;
pub mod sample;
