// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Like Toggle
//!
//! A like button for server-rendered pages. The page ships the markup and the starting
//! count; this crate attaches to it and handles the clicks:
//!
//! * the first click likes: the icon switches to the solid glyph and the count goes up by one,
//! * the next click unlikes: the outline glyph comes back and the count goes down again,
//!
//! and so on for as long as the page stays open. Nothing is persisted or sent anywhere.
//!
//! ### Example
//!
//! ```no_run
//! like_toggle::start!();
//! # fn main() {}
//! ```
//!
//! Elements are found with the selectors in [`Config`], `.like_btn`, `#icon` and `#count`
//! by default:
//!
//! ```no_run
//! use like_toggle::Config;
//!
//! like_toggle::start!(Config::default().button("#post .like").count("#post .likes"));
//! # fn main() {}
//! ```
//!
//! The click logic itself lives in [`LikeToggle`] and draws into any [`Surface`], so it
//! can be driven without a browser.

pub mod config;
pub mod count;
pub mod dom;
pub mod error;
pub mod icon;
pub mod runtime;
pub mod state;
pub mod toggle;

pub use config::{Config, Selectors};
pub use error::{Error, Result};
pub use icon::{icon_for, IconMapping, IconVariant};
pub use state::ToggleState;
pub use toggle::{LikeToggle, Surface};

/// Crate re-exports for the [`start!`] macro internals
pub mod reexport {
    pub use wasm_bindgen;
    pub use web_sys;
}

/// Generate the Wasm start function that binds the like button, optionally with a [`Config`].
#[macro_export]
macro_rules! start {
    () => {
        $crate::start!($crate::Config::default());
    };

    ($config:expr) => {
        use $crate::reexport::wasm_bindgen;

        #[wasm_bindgen::prelude::wasm_bindgen(start)]
        fn like_toggle_main() {
            $crate::runtime::start($config);
        }
    };
}
