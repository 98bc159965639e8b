//! Minimal behavior tree evaluated once per simulation frame.
//!
//! Trees here answer a question and return: every [`Behavior::tick`] runs to
//! completion within the frame that calls it, so there is no `Running`
//! status and no node keeps state between frames. Anything that has to span
//! several frames (an input sequence, a cooldown) belongs in the context the
//! tree is ticked against.
//!
//! # Architecture
//!
//! - [`Behavior`]: core trait for all nodes
//! - [`Status`]: success or failure
//! - Composites: [`Sequence`] (AND), [`Selector`] (first match wins)
//! - Leaves: [`Condition`] (read-only predicate), [`Action`] (mutates the
//!   context)
//! - [`builder`]: boxed constructors for compact tree literals

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod leaf;
pub mod status;

pub use behavior::Behavior;
pub use composite::{Selector, Sequence};
pub use leaf::{Action, Condition};
pub use status::Status;
