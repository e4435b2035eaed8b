#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), no_std)]
#![deny(
    unsafe_code,
    unused_imports,
    unused_variables,
    unused_must_use,
    missing_docs,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::dbg_macro,
    clippy::todo,
    clippy::unimplemented
)]
#![allow(clippy::len_without_is_empty)]

extern crate alloc;

mod utils;

mod node;

mod error;
pub use error::{Error, InvariantViolation};

mod order;
pub use order::{Ascending, Descending, KeyOrder};

mod tree;
pub use tree::{RbTree, Traverse};
