// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::str::FromStr;

use strum_macros::{Display, EnumCount, EnumIter, EnumString};

use crate::{ColorStringError, ColorStringResult};

/// Output styles for [`crate::RgbaColor::format`].
///
/// | Style          | Name   | Example                   |
/// | :------------- | :----- | :------------------------ |
/// | `Hex`          | `hex`  | `#FF8000`                 |
/// | `HexWithAlpha` | `hex4` | `#FF8000FF`               |
/// | `Rgb`          | `rgb`  | `rgb(255, 128, 0)`        |
/// | `Rgba`         | `rgba` | `rgba(255, 128, 0, 255)`  |
///
/// `HexWithAlpha` also accepts the name `hex-with-alpha` when parsed.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
)]
pub enum ColorFormat {
    #[default]
    #[strum(to_string = "hex")]
    Hex,
    #[strum(to_string = "hex4", serialize = "hex-with-alpha")]
    HexWithAlpha,
    #[strum(to_string = "rgb")]
    Rgb,
    #[strum(to_string = "rgba")]
    Rgba,
}

impl ColorFormat {
    /// Looks up a style by name.
    ///
    /// # Errors
    ///
    /// Returns [`ColorStringError::UnknownColorFormat`] if the name isn't one of the
    /// styles listed on [`ColorFormat`].
    pub fn try_from_name(name: &str) -> ColorStringResult<Self> {
        Self::from_str(name).map_err(|_| ColorStringError::UnknownColorFormat {
            format: name.to_string(),
        })
    }
}
