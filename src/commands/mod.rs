// Copyright (c) 2025 Billfold Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod account;
pub mod categories;
pub mod loans;
pub mod savings;
pub mod summary;
pub mod transactions;
