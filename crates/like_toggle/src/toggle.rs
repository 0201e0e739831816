// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The click logic of a like button, independent of the DOM.

use log::{debug, warn};

use crate::count::Count;
use crate::icon::IconMapping;
use crate::state::ToggleState;

/// Whatever the toggle draws into. On a page this is a
/// [`DomSurface`](crate::dom::DomSurface).
pub trait Surface {
    fn set_icon_markup(&self, markup: &str);

    fn count_text(&self) -> String;

    fn set_count_text(&self, text: &str);
}

impl<S: Surface + ?Sized> Surface for &S {
    fn set_icon_markup(&self, markup: &str) {
        (**self).set_icon_markup(markup)
    }

    fn count_text(&self) -> String {
        (**self).count_text()
    }

    fn set_count_text(&self, text: &str) {
        (**self).set_count_text(text)
    }
}

pub struct LikeToggle<S> {
    state: ToggleState,
    mapping: IconMapping,
    surface: S,
}

impl<S: Surface> LikeToggle<S> {
    /// Create an unliked toggle. Nothing is drawn until [`click`](LikeToggle::click)
    /// or [`render`](LikeToggle::render) is called.
    pub fn new(surface: S, mapping: IconMapping) -> Self {
        LikeToggle {
            state: ToggleState::default(),
            mapping,
            surface,
        }
    }

    pub fn state(&self) -> ToggleState {
        self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Draw the icon for the current state. The counter is left untouched.
    pub fn render(&self) {
        let icon = self.mapping.icon_for(self.state);

        self.surface.set_icon_markup(icon.markup());
    }

    /// Handle a single click and return the new state.
    pub fn click(&mut self) -> ToggleState {
        let state = self.state.flip();

        self.render();

        let text = self.surface.count_text();
        let count = match Count::parse(&text) {
            Ok(count) => count,
            Err(err) => {
                warn!("{err}, counter will show NaN");
                Count::NaN
            }
        };

        let count = match state {
            ToggleState::Liked => count.increment(),
            ToggleState::Unliked => count.decrement(),
        };

        self.surface.set_count_text(&count.to_string());

        debug!("like toggled to {state:?}, count {count}");

        state
    }
}
