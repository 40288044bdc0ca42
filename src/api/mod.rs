// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! REST client for the detection backend.

pub mod client;
pub mod worker;
