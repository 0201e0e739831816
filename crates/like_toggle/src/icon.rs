// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Thumbs-up glyphs and the mapping from [`ToggleState`] to the glyph on screen.

use crate::state::ToggleState;

const OUTLINE: &str = r#"<i class="fa-regular fa-thumbs-up"></i>"#;
const SOLID: &str = r#"<i class="fa-solid fa-thumbs-up"></i>"#;

/// One of the two fixed icon font renderings of the button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconVariant {
    /// `fa-regular` glyph
    Outline,
    /// `fa-solid` glyph
    Solid,
}

impl IconVariant {
    /// HTML fragment written into the icon container.
    pub const fn markup(self) -> &'static str {
        match self {
            IconVariant::Outline => OUTLINE,
            IconVariant::Solid => SOLID,
        }
    }
}

/// Decides which glyph represents which state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum IconMapping {
    /// Solid glyph while liked, outline glyph otherwise.
    #[default]
    Conventional,
    /// Outline glyph while liked, solid glyph otherwise.
    ///
    /// This is what the legacy page script rendered. It is most likely a bug there,
    /// so binding with this mapping logs a warning.
    Inverted,
}

impl IconMapping {
    pub const fn icon_for(self, state: ToggleState) -> IconVariant {
        match (self, state) {
            (IconMapping::Conventional, ToggleState::Liked)
            | (IconMapping::Inverted, ToggleState::Unliked) => IconVariant::Solid,
            (IconMapping::Conventional, ToggleState::Unliked)
            | (IconMapping::Inverted, ToggleState::Liked) => IconVariant::Outline,
        }
    }
}

/// Glyph for `state` under the [conventional](IconMapping::Conventional) mapping.
pub const fn icon_for(state: ToggleState) -> IconVariant {
    IconMapping::Conventional.icon_for(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conventional() {
        assert_eq!(icon_for(ToggleState::Liked), IconVariant::Solid);
        assert_eq!(icon_for(ToggleState::Unliked), IconVariant::Outline);
    }

    #[test]
    fn inverted() {
        let mapping = IconMapping::Inverted;

        assert_eq!(mapping.icon_for(ToggleState::Liked), IconVariant::Outline);
        assert_eq!(mapping.icon_for(ToggleState::Unliked), IconVariant::Solid);
    }

    #[test]
    fn states_never_share_a_glyph() {
        for mapping in [IconMapping::Conventional, IconMapping::Inverted] {
            assert_ne!(
                mapping.icon_for(ToggleState::Liked),
                mapping.icon_for(ToggleState::Unliked)
            );
        }
    }

    #[test]
    fn markup() {
        assert_eq!(
            IconVariant::Outline.markup(),
            r#"<i class="fa-regular fa-thumbs-up"></i>"#
        );
        assert_eq!(
            IconVariant::Solid.markup(),
            r#"<i class="fa-solid fa-thumbs-up"></i>"#
        );
    }
}
