// Each integration test binary uses a different slice of these helpers
#![allow(dead_code)]

pub mod db;
pub mod factories;
pub mod helpers;
pub mod in_memory;
