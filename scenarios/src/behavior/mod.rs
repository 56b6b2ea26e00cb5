pub use self::{
    behavior::{Action, Behavior},
    context::Context,
};

pub mod atomic;
mod behavior;
mod context;
pub mod higher_order;
