// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The two-valued state behind a like button.

/// Whether the button is currently liked. A fresh page always starts out [`Unliked`](ToggleState::Unliked).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ToggleState {
    #[default]
    Unliked,
    Liked,
}

impl ToggleState {
    /// Return the state a single click moves to.
    pub const fn toggle(self) -> Self {
        match self {
            ToggleState::Unliked => ToggleState::Liked,
            ToggleState::Liked => ToggleState::Unliked,
        }
    }

    /// Flip the state in place, returning the new value.
    pub fn flip(&mut self) -> Self {
        *self = self.toggle();
        *self
    }

    pub const fn is_liked(self) -> bool {
        matches!(self, ToggleState::Liked)
    }

    /// State reached from [`Unliked`](ToggleState::Unliked) after `clicks` clicks.
    pub const fn after_clicks(clicks: u64) -> Self {
        if clicks % 2 == 1 {
            ToggleState::Liked
        } else {
            ToggleState::Unliked
        }
    }
}

impl From<bool> for ToggleState {
    fn from(liked: bool) -> Self {
        if liked {
            ToggleState::Liked
        } else {
            ToggleState::Unliked
        }
    }
}
