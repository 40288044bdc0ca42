// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data model shared with the detection backend.

pub mod detection;
pub mod project;
pub mod roi;
