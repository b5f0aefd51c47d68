#![allow(clippy::new_without_default, clippy::type_complexity)]

pub mod cmd;
pub mod data;
pub mod error;
pub mod ui;
pub mod widget;
