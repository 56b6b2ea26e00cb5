#![cfg_attr(feature = "strict", deny(warnings))]

pub use crate::{pretty::PrettyPrint, transform::Transform};

pub mod ext;
pub mod host;
pub mod prelude;
mod pretty;
mod transform;
