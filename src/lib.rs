// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod analysis;
pub mod breakdown;
pub mod categorize;
pub mod cli;
pub mod commands;
pub mod config;
pub mod models;
pub mod parse;
pub mod report;
pub mod utils;
pub mod validate;
