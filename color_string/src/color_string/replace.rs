// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ColorMarker, ColorString, InlineVecColorMarkers, RgbaColor};

impl ColorString {
    /// Every non overlapping occurrence of `old` (scanning left to right) replaced with
    /// `replacement`, colors and all.
    ///
    /// - Text that isn't replaced keeps its color.
    /// - The replacement's markers are spliced in where it lands. If it has no marker at
    ///   its start, the color active just before the match carries on into it.
    /// - After each replacement, the color that the original text had right after the
    ///   match resumes.
    ///
    /// An empty `old` matches nothing and returns an equal copy.
    #[must_use]
    pub fn replace(&self, old: &str, replacement: &ColorString) -> ColorString {
        if old.is_empty() {
            return self.clone();
        }

        let text = self.text();
        let mut acc_text = String::with_capacity(text.len());
        let mut candidates = InlineVecColorMarkers::new();
        let mut index = 0;

        while index < text.len() {
            let rest = &text[index..];

            if rest.starts_with(old) {
                let splice_at = acc_text.len();
                // Nothing precedes the splice, so an unmarked lead can't carry a color.
                if candidates.is_empty()
                    && !replacement.is_empty()
                    && replacement.markers().marker_at(0).is_none()
                {
                    candidates.push(ColorMarker::new(RgbaColor::DEFAULT, 0));
                }
                acc_text.push_str(replacement.text());
                candidates.extend(
                    replacement
                        .markers()
                        .iter()
                        .map(|marker| marker.shifted(splice_at)),
                );

                let match_end = index + old.len();
                if let Some(resume_color) = self.color_at(match_end) {
                    candidates.push(ColorMarker::new(resume_color, acc_text.len()));
                }
                index = match_end;
                continue;
            }

            if let Some(marker) = self.markers().marker_at(index) {
                candidates.push(marker.at(acc_text.len()));
            }
            let char_len = rest.chars().next().map_or(1, char::len_utf8);
            acc_text.push_str(&rest[..char_len]);
            index += char_len;
        }

        Self::from_candidates(acc_text, candidates)
    }
}
