// Copyright (c) 2025 Billfold Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Failures surfaced to the user. Unparsable persisted values are not in this
/// taxonomy: the stores recover from those by falling back to defaults.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("No account exists. Run 'billfold signup' first")]
    NoAccount,

    #[error("Not logged in. Run 'billfold login' first")]
    NotLoggedIn,

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Storage encode error: {0}")]
    Encode(#[from] serde_json::Error),
}
