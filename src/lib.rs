//! 神秘抽奖箱 - Terminal Mystery Lottery Box Library
//!
//! This module exposes the draw and registry logic for testing and external use.

// Allow dead code in library - some functions are only used by the binary
#![allow(dead_code)]

pub mod app;
pub mod constants;
pub mod draw;
pub mod prizes;
pub mod storage;

// UI module is consumed by the binary target
pub mod ui;
