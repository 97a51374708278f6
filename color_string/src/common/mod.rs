// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
mod color_string_error;

// Re-export.
pub use color_string_error::*;
