// Copyright (c) 2025 Billfold Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::Storage;
use crate::error::AppError;
use crate::models::UserRecord;

const USER_KEY: &str = "user";
const LOGGED_IN_KEY: &str = "loggedIn";
const REMEMBER_ME_KEY: &str = "rememberMe";

/// Single-user account record plus session flags. Credential checks are
/// exact-string: email case-folded, password case-sensitive. Toy auth by
/// design; no hashing, no lockout.
pub struct AccountStore<'a> {
    store: &'a Storage,
}

impl<'a> AccountStore<'a> {
    pub fn new(store: &'a Storage) -> Self {
        Self { store }
    }

    /// Overwrites the single stored record wholesale. There is no uniqueness
    /// check beyond "one record total".
    pub fn register(&self, name: &str, email: &str, password: &str) -> Result<UserRecord, AppError> {
        let name = name.trim();
        let email = email.trim().to_lowercase();
        if name.is_empty() || email.is_empty() || password.trim().is_empty() {
            return Err(AppError::Validation(
                "Name, email, and password are all required".to_string(),
            ));
        }
        let user = UserRecord {
            name: name.to_string(),
            email,
            password: password.to_string(),
        };
        self.store.set(USER_KEY, &serde_json::to_string(&user)?)?;
        Ok(user)
    }

    /// Stored record, if present and parsable. A corrupt value reads as
    /// absent, never as an error.
    pub fn user(&self) -> Result<Option<UserRecord>, AppError> {
        match self.store.get(USER_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw).ok()),
            None => Ok(None),
        }
    }

    pub fn authenticate(&self, email: &str, password: &str) -> Result<UserRecord, AppError> {
        let user = self.user()?.ok_or(AppError::NoAccount)?;
        let email = email.trim().to_lowercase();
        if user.email != email || user.password != password {
            return Err(AppError::InvalidCredentials);
        }
        Ok(user)
    }

    /// The rememberMe flag is only ever written as "true"; absence means "do
    /// not auto-login".
    pub fn set_session(&self, remember: bool) -> Result<(), AppError> {
        self.store.set(LOGGED_IN_KEY, "true")?;
        if remember {
            self.store.set(REMEMBER_ME_KEY, "true")?;
        } else {
            self.store.remove(REMEMBER_ME_KEY)?;
        }
        Ok(())
    }

    /// Logout clears the loggedIn flag only; the account record and the
    /// rememberMe flag survive.
    pub fn clear_session(&self) -> Result<(), AppError> {
        self.store.remove(LOGGED_IN_KEY)?;
        Ok(())
    }

    pub fn is_logged_in(&self) -> Result<bool, AppError> {
        Ok(self.store.get(LOGGED_IN_KEY)?.as_deref() == Some("true"))
    }

    pub fn is_remembered(&self) -> Result<bool, AppError> {
        Ok(self.store.get(REMEMBER_ME_KEY)?.as_deref() == Some("true"))
    }

    /// If rememberMe is set and an account exists, opens a session and
    /// returns the user; otherwise a no-op.
    pub fn try_auto_login(&self) -> Result<Option<UserRecord>, AppError> {
        if !self.is_remembered()? {
            return Ok(None);
        }
        let Some(user) = self.user()? else {
            return Ok(None);
        };
        self.store.set(LOGGED_IN_KEY, "true")?;
        Ok(Some(user))
    }

    /// Gate for every ledger command: a live session, or the remember-me
    /// path, or an error telling the user to log in.
    pub fn require_session(&self) -> Result<UserRecord, AppError> {
        if self.is_logged_in()? {
            if let Some(user) = self.user()? {
                return Ok(user);
            }
        }
        match self.try_auto_login()? {
            Some(user) => Ok(user),
            None => Err(AppError::NotLoggedIn),
        }
    }
}
