// Copyright (c) 2025 Billfold Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::account::AccountStore;
use crate::db::Storage;

pub fn signup(storage: &Storage, sub: &clap::ArgMatches) -> Result<()> {
    let accounts = AccountStore::new(storage);
    let name = sub.get_one::<String>("name").unwrap();
    let email = sub.get_one::<String>("email").unwrap();
    let password = sub.get_one::<String>("password").unwrap();
    let user = accounts.register(name, email, password)?;
    println!("Signup successful for {} <{}>. Login now.", user.name, user.email);
    Ok(())
}

pub fn login(storage: &Storage, sub: &clap::ArgMatches) -> Result<()> {
    let accounts = AccountStore::new(storage);
    match (
        sub.get_one::<String>("email"),
        sub.get_one::<String>("password"),
    ) {
        (Some(email), Some(password)) => {
            let user = accounts.authenticate(email, password)?;
            accounts.set_session(sub.get_flag("remember"))?;
            println!("Hi, {}", user.name);
        }
        _ => match accounts.try_auto_login()? {
            Some(user) => println!("Hi, {} (remembered)", user.name),
            None => anyhow::bail!("No remembered session. Pass --email and --password"),
        },
    }
    Ok(())
}

pub fn logout(storage: &Storage) -> Result<()> {
    let accounts = AccountStore::new(storage);
    accounts.clear_session()?;
    println!("Logged out");
    Ok(())
}

pub fn whoami(storage: &Storage) -> Result<()> {
    let accounts = AccountStore::new(storage);
    let user = accounts.require_session()?;
    println!("Hi, {} <{}>", user.name, user.email);
    Ok(())
}
