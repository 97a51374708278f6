// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use r3bl_color_string::{ColorString, RgbaColor, SplitOptions};

/// One titled group of lines printed by `cstr demo`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoScenario {
    pub title: &'static str,
    pub lines: Vec<ColorString>,
}

/// Every demo scenario, in the order they are printed.
///
/// # Errors
///
/// Returns an error if a markup round trip fails.
pub fn demo_scenarios() -> miette::Result<Vec<DemoScenario>> {
    let hello_word = hello_word_with_orl();
    Ok(vec![
        DemoScenario {
            title: "replace \"World\" with a blue \"Universe\"",
            lines: vec![
                ColorString::from_text("Hello, World!")
                    .replace("World", &RgbaColor::BLUE.colorize("Universe")),
            ],
        },
        DemoScenario {
            title: "replace \"or\" inside a red \"Word\" with a blue \"orl\"",
            lines: vec![hello_word.clone()],
        },
        DemoScenario {
            title: "split on \"l\", removing empty entries",
            lines: hello_word.split(&["l"], None, SplitOptions::REMOVE_EMPTY_ENTRIES),
        },
        DemoScenario {
            title: "upper-case the text, then recolor everything that isn't blue to red",
            lines: vec![recolored_hello_world()],
        },
        markup_round_trip()?,
    ])
}

fn hello_word_with_orl() -> ColorString {
    ColorString::concat_all([
        &ColorString::from_text("Hello "),
        &RgbaColor::RED.colorize("Word"),
        &ColorString::from_text("!"),
    ])
    .replace("or", &RgbaColor::BLUE.colorize("orl"))
}

fn recolored_hello_world() -> ColorString {
    let it = ColorString::from_text("Hello ").concat(&RgbaColor::BLUE.colorize("World!"));
    it.with_text(it.text().to_ascii_uppercase()).map_colors(|color| {
        if color == RgbaColor::BLUE {
            color
        } else {
            RgbaColor::RED
        }
    })
}

fn markup_round_trip() -> miette::Result<DemoScenario> {
    let original = recolored_hello_world();
    let markup = original.to_markup()?;
    let parsed = ColorString::parse_markup(&markup)?;
    tracing::debug!(message = "demo markup round trip", markup = %markup);
    Ok(DemoScenario {
        title: "encode as markup, then parse it back",
        lines: vec![ColorString::from_text(markup), parsed],
    })
}
