// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Binding of the toggle to existing page elements.

use web_sys::{Document, Element};

use crate::config::Selectors;
use crate::error::{Error, Result, Role};
use crate::toggle::Surface;

/// The three elements a like button is made of.
pub struct DomSurface {
    button: Element,
    icon: Element,
    count: Element,
}

impl DomSurface {
    /// Assemble a surface from elements looked up elsewhere. The first missing
    /// element is reported as [`Error::ElementNotFound`], with `selector` left empty.
    pub fn new(
        button: Option<Element>,
        icon: Option<Element>,
        count: Option<Element>,
    ) -> Result<Self> {
        Ok(DomSurface {
            button: require(button, Role::Button, "")?,
            icon: require(icon, Role::Icon, "")?,
            count: require(count, Role::Count, "")?,
        })
    }

    /// Find all three elements in `document`.
    pub fn query(document: &Document, selectors: &Selectors) -> Result<Self> {
        let find = |role, selector: &str| {
            // A selector that fails to parse can't match anything either
            let found = document.query_selector(selector).ok().flatten();

            require(found, role, selector)
        };

        Ok(DomSurface {
            button: find(Role::Button, &selectors.button)?,
            icon: find(Role::Icon, &selectors.icon)?,
            count: find(Role::Count, &selectors.count)?,
        })
    }

    pub fn button(&self) -> &Element {
        &self.button
    }

    pub fn icon(&self) -> &Element {
        &self.icon
    }

    pub fn count(&self) -> &Element {
        &self.count
    }
}

fn require(el: Option<Element>, role: Role, selector: &str) -> Result<Element> {
    el.ok_or_else(|| Error::ElementNotFound {
        role,
        selector: selector.into(),
    })
}

impl Surface for DomSurface {
    fn set_icon_markup(&self, markup: &str) {
        self.icon.set_inner_html(markup);
    }

    fn count_text(&self) -> String {
        self.count.text_content().unwrap_or_default()
    }

    fn set_count_text(&self, text: &str) {
        self.count.set_text_content(Some(text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_elements_fail_in_order() {
        assert_eq!(
            DomSurface::new(None, None, None).err(),
            Some(Error::ElementNotFound {
                role: Role::Button,
                selector: String::new(),
            })
        );
    }
}
