// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Settings for binding a like button to a page.
//!
//! The defaults match the markup the toggle was written for:
//!
//! ```html
//! <button class="like_btn">
//!     <span id="icon"><i class="fa-regular fa-thumbs-up"></i></span>
//!     <span id="count">10</span>
//! </button>
//! ```

use crate::icon::IconMapping;

/// CSS selectors used to find the three elements the toggle drives.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Selectors {
    pub button: String,
    pub icon: String,
    pub count: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Selectors {
            button: ".like_btn".into(),
            icon: "#icon".into(),
            count: "#count".into(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    pub selectors: Selectors,
    pub mapping: IconMapping,
    /// Write the icon for the initial state as soon as the button is bound,
    /// instead of leaving the page markup alone until the first click.
    pub render_on_bind: bool,
}

impl Config {
    pub fn button(mut self, selector: impl Into<String>) -> Self {
        self.selectors.button = selector.into();
        self
    }

    pub fn icon(mut self, selector: impl Into<String>) -> Self {
        self.selectors.icon = selector.into();
        self
    }

    pub fn count(mut self, selector: impl Into<String>) -> Self {
        self.selectors.count = selector.into();
        self
    }

    pub fn mapping(mut self, mapping: IconMapping) -> Self {
        self.mapping = mapping;
        self
    }

    pub fn render_on_bind(mut self, render: bool) -> Self {
        self.render_on_bind = render;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();

        assert_eq!(config.selectors.button, ".like_btn");
        assert_eq!(config.selectors.icon, "#icon");
        assert_eq!(config.selectors.count, "#count");
        assert_eq!(config.mapping, IconMapping::Conventional);
        assert!(!config.render_on_bind);
    }

    #[test]
    fn builder() {
        let config = Config::default()
            .button("#post-7 .like")
            .count("#post-7 .likes")
            .mapping(IconMapping::Inverted)
            .render_on_bind(true);

        assert_eq!(config.selectors.button, "#post-7 .like");
        assert_eq!(config.selectors.icon, "#icon");
        assert_eq!(config.selectors.count, "#post-7 .likes");
        assert_eq!(config.mapping, IconMapping::Inverted);
        assert!(config.render_on_bind);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_partial() {
        let config: Config = serde_json::from_str(
            r#"{ "selectors": { "count": ".likes" }, "mapping": "inverted" }"#,
        )
        .unwrap();

        assert_eq!(config, Config::default().count(".likes").mapping(IconMapping::Inverted));
    }
}
