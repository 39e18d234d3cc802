//! Scanner module.
//!
//! This module organizes the scanner implementation into smaller, focused components:
//! - `core` - Main Scanner struct and dispatch
//! - `comment` - `<!-- ... -->` comment scanning
//! - `string` - Double-quoted string literal scanning
//! - `delimiter` - Single- and two-character delimiter scanning
//! - `text` - Free-text run capture after a closing `>`
//! - `identifier` - Tag and attribute name scanning

mod comment;
mod core;
mod delimiter;
mod identifier;
mod string;
mod text;

pub use self::core::{scan, scan_str, Scanner};
