//! Main module for regmap library functionality

pub mod ast;
pub mod config;
pub mod driver;
pub mod error;
pub mod formats;
pub mod lexer;
pub mod parser;
