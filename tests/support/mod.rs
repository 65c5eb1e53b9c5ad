#![allow(dead_code)]

pub mod logs;
pub mod marathon;
pub mod server;
