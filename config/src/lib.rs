//! # Config Crate
//!
//! Centralized configuration constants for the gnoweb theme token resolver.
//! Every literal the resolver needs (root font size, unit suffix, content
//! globs, safelist) is defined here once so the token crates stay declarative.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{BASE_FONT_SIZE_PX, REM_SUFFIX};
//!
//! // A 24px heading expressed in root-relative units
//! let rem = 24.0 / BASE_FONT_SIZE_PX;
//! assert_eq!(format!("{rem}{REM_SUFFIX}"), "1.5rem");
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Engine Compatible**: Values match what the CSS generation engine expects
//! - **No Hidden Globals**: Overrides travel through [`constants::ResolverConfig`]

pub mod constants;
