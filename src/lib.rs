//! Growable containers and a byte text buffer built on top of them.
//!
//! This crate provides a generic growable array with explicit capacity
//! management, and a terminated byte string that does all of its work through
//! that array's public operations: insertion, KMP search, in-place replace,
//! tokenizing split, repeat, ranged substrings and `%`-style formatting.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐     ┌───────────────────────────────────┐
//! │   container.rs   │────▶│             text/                 │
//! │ (Container<T>,   │     │ mod.rs    insert, range, repeat   │
//! │  resize, copy,   │     │ search.rs find (KMP), replace     │
//! │  position clamp) │     │ split.rs  tokenizer               │
//! └──────────────────┘     │ format.rs %-conversions           │
//!          │               └───────────────────────────────────┘
//!          ▼                                │
//! ┌─────────────────────────────────────────────────────┐
//! │                    contracts.rs                      │
//! │  (count <= capacity, terminator present,             │
//! │   ascending match offsets - debug assertions)        │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Invariants
//!
//! | Type           | Invariant                                           |
//! |----------------|-----------------------------------------------------|
//! | `Container<T>` | `count <= capacity`; capacity only grows (doubling) |
//! | `Text`         | zero byte at offset `length`, not counted           |
//! | `IndexList`    | offsets strictly ascending                          |
//!
//! # Usage
//!
//! ```
//! use vest::Text;
//!
//! let mut text = Text::new("ABABACCABA").unwrap();
//! assert_eq!(text.find("ABA").unwrap().as_slice(), &[0, 2, 7]);
//!
//! text.replace("A", "F", None).unwrap();
//! assert_eq!(text, "FBFBFCCFBF");
//! ```

// Module declarations
pub mod container;
pub mod contracts;
pub mod error;
mod text;

// Re-exports for public API
pub use container::{Container, INIT_CAPACITY};
pub use error::{ContainerError, TextError};
pub use text::{FormatArg, IndexList, Text, TextList};

/// `%g` rendering used by the `%f` conversion.
pub use text::format_general;

/// Placeholder appended for unknown `%` conversions.
pub use text::UNKNOWN_CONVERSION;
