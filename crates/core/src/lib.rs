#![deny(warnings)]

pub mod catalog;
pub mod config;
pub mod controller;
pub mod surface;
pub mod translate;
