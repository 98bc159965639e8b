//! Core behavior trait.

use crate::Status;

/// A node evaluated against a context `C` once per frame.
///
/// `C` is the blackboard: nodes read the world snapshot from it and write
/// their decision back into it. Nodes are `Send + Sync` so a tree can be
/// built once and shared by controllers on any thread.
pub trait Behavior<C>: Send + Sync {
    fn tick(&self, ctx: &mut C) -> Status;
}

/// Lets `Box<dyn Behavior<C>>` be used wherever a node is expected.
impl<C> Behavior<C> for Box<dyn Behavior<C>> {
    #[inline]
    fn tick(&self, ctx: &mut C) -> Status {
        (**self).tick(ctx)
    }
}
