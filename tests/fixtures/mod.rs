//! Test fixtures for field-planner.
//!
//! Provides realistic test data:
//! - Real Beijing (Haidian and surroundings) landmarks
//! - Helpers turning them into planner input

#![allow(dead_code)]

pub mod beijing_landmarks;

pub use beijing_landmarks::*;
