//! Guard predicates for controlling animation transitions.
//!
//! A predicate is a zero-argument boolean function. It closes over whatever
//! gameplay state it needs ("is the character moving", "has the attack
//! finished"); the state machine only ever calls it and reads the answer.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// A single guard condition on a transition.
///
/// Predicates are evaluated on the caller's thread during
/// [`Animator::tick`](crate::animator::Animator::tick), in insertion order,
/// and must not block. They should be free of side effects, but because the
/// evaluation order is stable a stateful predicate still behaves
/// deterministically.
///
/// # Example
///
/// ```rust
/// use sprite_animator::core::Predicate;
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let moving = Rc::new(Cell::new(false));
/// let is_moving = Predicate::from_flag(Rc::clone(&moving));
///
/// assert!(!is_moving.evaluate());
/// moving.set(true);
/// assert!(is_moving.evaluate());
/// ```
pub struct Predicate {
    condition: Box<dyn Fn() -> bool>,
}

impl Predicate {
    /// Create a predicate from a closure.
    pub fn new<F>(condition: F) -> Self
    where
        F: Fn() -> bool + 'static,
    {
        Predicate {
            condition: Box::new(condition),
        }
    }

    /// Create a predicate that mirrors a shared boolean flag.
    pub fn from_flag(flag: Rc<Cell<bool>>) -> Self {
        Self::new(move || flag.get())
    }

    /// Evaluate the condition right now.
    pub fn evaluate(&self) -> bool {
        (self.condition)()
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Predicate(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicate_returns_closure_result() {
        assert!(Predicate::new(|| true).evaluate());
        assert!(!Predicate::new(|| false).evaluate());
    }

    #[test]
    fn predicate_reads_captured_state_each_call() {
        let flag = Rc::new(Cell::new(false));
        let predicate = Predicate::from_flag(Rc::clone(&flag));

        assert!(!predicate.evaluate());
        flag.set(true);
        assert!(predicate.evaluate());
        flag.set(false);
        assert!(!predicate.evaluate());
    }

    #[test]
    fn predicate_is_deterministic_for_fixed_state() {
        let predicate = Predicate::new(|| 2 + 2 == 4);

        let result1 = predicate.evaluate();
        let result2 = predicate.evaluate();

        assert_eq!(result1, result2);
    }

    #[test]
    fn closures_capture_by_move() {
        let threshold = 10;
        let predicate = Predicate::new(move || threshold > 5);
        assert!(predicate.evaluate());
    }

    #[test]
    fn stateful_predicate_counts_calls() {
        let calls = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&calls);
        let predicate = Predicate::new(move || {
            counter.set(counter.get() + 1);
            true
        });

        predicate.evaluate();
        predicate.evaluate();

        assert_eq!(calls.get(), 2);
    }
}
