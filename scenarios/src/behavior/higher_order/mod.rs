pub use self::{
    parallel::{Parallel, ParallelPolicy},
    sequence::Sequence,
};
#[cfg(test)]
pub use self::null::{NullBehavior, Scripted};

#[cfg(test)]
mod null;
mod parallel;
mod sequence;
