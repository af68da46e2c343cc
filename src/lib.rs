//! Galactic Cocktails Library
//!
//! Cocktail catalog, favorites, AI suggestions and the cocktailatrice
//! price/calorie calculator.

pub mod build_info;
pub mod calculator;
pub mod catalog;
pub mod db;
pub mod mcp;
pub mod models;
pub mod pricing;
pub mod suggest;
pub mod tools;
