pub use crate::{ext::ExtendRotation3, pretty::PrettyPrint};
