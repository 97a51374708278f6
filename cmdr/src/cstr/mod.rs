// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Include.
pub mod clap_config;
pub mod demo_scenarios;
pub mod launcher;
pub mod ui_str;

// Reexport.
pub use clap_config::*;
pub use demo_scenarios::*;
pub use launcher::*;
