// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_events::EventListener;
use log::{error, info, warn};
use web_sys::Document;

use crate::config::Config;
use crate::dom::DomSurface;
use crate::error::{Error, Result};
use crate::icon::IconMapping;
use crate::state::ToggleState;
use crate::toggle::LikeToggle;

/// A like button with a live `click` listener. Dropping it removes the listener.
pub struct Binding {
    toggle: Rc<RefCell<LikeToggle<DomSurface>>>,
    listener: EventListener,
}

impl Binding {
    pub fn state(&self) -> ToggleState {
        self.toggle.borrow().state()
    }

    /// Keep the listener attached for the rest of the page's lifetime.
    pub fn forget(self) {
        self.listener.forget();
    }
}

/// Find the like button in `document` and start handling its clicks.
pub fn bind(document: &Document, config: Config) -> Result<Binding> {
    let surface = DomSurface::query(document, &config.selectors)?;
    let button = surface.button().clone();

    if config.mapping == IconMapping::Inverted {
        warn!("binding like button with inverted icons, liked posts will show the outline glyph");
    }

    let toggle = LikeToggle::new(surface, config.mapping);

    if config.render_on_bind {
        toggle.render();
    }

    let toggle = Rc::new(RefCell::new(toggle));
    let listener = EventListener::new(&button, "click", {
        let toggle = toggle.clone();

        move |_| match toggle.try_borrow_mut() {
            Ok(mut toggle) => {
                toggle.click();
            }
            Err(_) => warn!("click arrived while the like button was updating, ignored"),
        }
    });

    Ok(Binding { toggle, listener })
}

thread_local! {
    static INIT: Cell<bool> = const { Cell::new(false) };

    static HOOKS: Cell<bool> = const { Cell::new(false) };
}

/// Bind the like button of the current page. Can only succeed once per page.
pub fn try_start(config: Config) -> Result<()> {
    if INIT.get() {
        return Err(Error::AlreadyStarted);
    }

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or(Error::NoDocument)?;

    bind(&document, config)?.forget();

    INIT.set(true);

    Ok(())
}

/// Set up logging and bind the like button of the current page.
///
/// Failures are written to the console and leave the rest of the page untouched.
pub fn start(config: Config) {
    init_hooks();

    match try_start(config) {
        Ok(()) => info!("like button bound"),
        Err(err) => error!("like button disabled: {err}"),
    }
}

/// Panic hook and console logger are process-wide and must only be installed once.
fn init_hooks() {
    if HOOKS.replace(true) {
        return;
    }

    init_panic_hook();
    init_logger();
}

fn init_logger() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };

    wasm_logger::init(wasm_logger::Config::new(level));
}

fn init_panic_hook() {
    // Only enable console hook on debug builds
    #[cfg(debug_assertions)]
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
}
