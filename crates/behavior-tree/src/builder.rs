//! Boxed constructors so trees read as nested literals.

use crate::{Action, Behavior, Condition, Selector, Sequence, Status};

#[inline]
pub fn sequence<C: 'static>(children: Vec<Box<dyn Behavior<C>>>) -> Box<dyn Behavior<C>> {
    Box::new(Sequence::new(children))
}

#[inline]
pub fn selector<C: 'static>(children: Vec<Box<dyn Behavior<C>>>) -> Box<dyn Behavior<C>> {
    Box::new(Selector::new(children))
}

#[inline]
pub fn condition<C: 'static>(
    name: &'static str,
    predicate: impl Fn(&C) -> bool + Send + Sync + 'static,
) -> Box<dyn Behavior<C>> {
    Box::new(Condition::new(name, predicate))
}

#[inline]
pub fn action<C: 'static>(
    name: &'static str,
    effect: impl Fn(&mut C) -> Status + Send + Sync + 'static,
) -> Box<dyn Behavior<C>> {
    Box::new(Action::new(name, effect))
}

/// `Sequence[condition, action]`: run `effect` only when `predicate` holds.
pub fn guarded<C: 'static>(
    name: &'static str,
    predicate: impl Fn(&C) -> bool + Send + Sync + 'static,
    effect: impl Fn(&mut C) -> Status + Send + Sync + 'static,
) -> Box<dyn Behavior<C>> {
    sequence(vec![condition(name, predicate), action(name, effect)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guarded_rules_compose_into_a_cascade() {
        let tree = selector(vec![
            guarded("big", |v: &i32| *v > 100, |v: &mut i32| {
                *v = 100;
                Status::Success
            }),
            action("fallback", |v: &mut i32| {
                *v += 1;
                Status::Success
            }),
        ]);

        let mut value = 500;
        assert!(tree.tick(&mut value).is_success());
        assert_eq!(value, 100);

        let mut value = 7;
        tree.tick(&mut value);
        assert_eq!(value, 8);
    }
}
