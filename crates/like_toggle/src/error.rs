// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Which of the bound elements a selector was meant to find.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Button,
    Icon,
    Count,
}

impl Role {
    pub const fn as_str(self) -> &'static str {
        match self {
            Role::Button => "button",
            Role::Icon => "icon",
            Role::Count => "count",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("no {role} element matches `{selector}`")]
    ElementNotFound { role: Role, selector: String },

    #[error("counter text {text:?} is not a number")]
    CounterParse { text: String },

    #[error("no document to bind to")]
    NoDocument,

    #[error("like toggle was already started on this page")]
    AlreadyStarted,
}
