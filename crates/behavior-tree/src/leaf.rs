//! Closure-backed leaf nodes.

use crate::{Behavior, Status};

type Predicate<C> = Box<dyn Fn(&C) -> bool + Send + Sync>;
type Effect<C> = Box<dyn Fn(&mut C) -> Status + Send + Sync>;

/// Read-only check against the context.
pub struct Condition<C> {
    name: &'static str,
    predicate: Predicate<C>,
}

impl<C> Condition<C> {
    pub fn new(name: &'static str, predicate: impl Fn(&C) -> bool + Send + Sync + 'static) -> Self {
        Self {
            name,
            predicate: Box::new(predicate),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<C> Behavior<C> for Condition<C> {
    #[inline]
    fn tick(&self, ctx: &mut C) -> Status {
        (self.predicate)(ctx).into()
    }
}

/// Writes into the context.
pub struct Action<C> {
    name: &'static str,
    effect: Effect<C>,
}

impl<C> Action<C> {
    pub fn new(
        name: &'static str,
        effect: impl Fn(&mut C) -> Status + Send + Sync + 'static,
    ) -> Self {
        Self {
            name,
            effect: Box::new(effect),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<C> Behavior<C> for Action<C> {
    #[inline]
    fn tick(&self, ctx: &mut C) -> Status {
        (self.effect)(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn condition_does_not_mutate() {
        let positive = Condition::new("positive", |value: &i32| *value > 0);
        let mut value = 3;
        assert_eq!(positive.tick(&mut value), Status::Success);
        value = -1;
        assert_eq!(positive.tick(&mut value), Status::Failure);
        assert_eq!(positive.name(), "positive");
    }

    #[test]
    fn action_writes_back() {
        let double = Action::new("double", |value: &mut i32| {
            *value *= 2;
            Status::Success
        });
        let mut value = 4;
        assert!(double.tick(&mut value).is_success());
        assert_eq!(value, 8);
    }
}
