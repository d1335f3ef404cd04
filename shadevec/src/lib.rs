//! # shadevec
//!
//! Convert 6-digit hex color codes into normalized `vec3(...)` literals for
//! pasting into shader code.
//!
//! ## Quick Start
//!
//! ### Converting a Single Code
//!
//! ```
//! use shadevec::color;
//!
//! let rgb = color::hex_to_rgb("FF8000")?;
//! assert_eq!(color::vec3_literal(rgb), "vec3(1.0, 0.502, 0.0)");
//! # Ok::<(), shadevec::Error>(())
//! ```
//!
//! ### Running the Interactive Loop
//!
//! ```no_run
//! use std::io;
//!
//! let stdin = io::stdin();
//! shadevec::repl::run(stdin.lock(), io::stdout())?;
//! # Ok::<(), shadevec::Error>(())
//! ```

pub mod color;
pub mod error;
pub mod repl;

// Re-exports for convenience
pub use error::{Error, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
