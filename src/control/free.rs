//! Free container - programs built from [`Functor`] steps, interpreted later.
//!
//! A `Free<F, A>` is either a finished value or one deferred step followed
//! by the binds that consume its payload. Building a program never runs
//! anything: meaning is only given when an interpreter is supplied to
//! [`Free::run_free`].
//!
//! # Design
//!
//! ```text
//! Free<F, A> = Pure(A)
//!            | Operation { functor: F, arrows: [Payload -> Free<F, _>, ..., _ -> Free<F, A>] }
//! ```
//!
//! Binds on an `Operation` are appended to a queue of type-erased arrows, so
//! `flat_map` is O(1) no matter how deeply a program is left-nested.
//! Interpretation is a loop over a stack of those queues: when an arrow
//! yields another `Operation`, its queue is run before the rest of the
//! enclosing one. Long programs therefore run in linear time and do not grow
//! the stack.
//!
//! The first arrow of an operation accepts exactly `F::Payload` and the
//! interpreter must produce exactly `F::Payload`, so a mismatched interpreter
//! is a compile error rather than a failure during interpretation.
//!
//! # Examples
//!
//! ```rust
//! use kleisli::control::Free;
//! use kleisli::typeclass::Functor;
//!
//! struct Ask(&'static str, String);
//!
//! impl Functor for Ask {
//!     type Payload = String;
//!
//!     fn fmap<F: FnOnce(String) -> String>(self, function: F) -> Self {
//!         Ask(self.0, function(self.1))
//!     }
//!
//!     fn extract(self) -> String {
//!         self.1
//!     }
//! }
//!
//! fn ask(question: &'static str) -> Free<Ask, String> {
//!     Free::lift(Ask(question, String::new()))
//! }
//!
//! let program = ask("name").flat_map(|name| {
//!     ask("city").map(move |city| format!("{name} from {city}"))
//! });
//!
//! let greeting = program.run_free(|Ask(question, _)| match question {
//!     "name" => "Ada".to_string(),
//!     _ => "London".to_string(),
//! });
//! assert_eq!(greeting, "Ada from London");
//! ```

use std::any::Any;
use std::collections::VecDeque;
use std::fmt;
use std::marker::PhantomData;

use crate::typeclass::Functor;

type Erased = Box<dyn Any>;

/// A bind with its input and output types erased.
///
/// The input is the previous step's value; the output is the erased step of
/// the program the bind produced.
type Arrow<F> = Box<dyn FnOnce(Erased) -> Step<F>>;

enum Step<F> {
    Pure(Erased),
    Operation {
        functor: F,
        arrows: VecDeque<Arrow<F>>,
    },
}

fn unerase<T: 'static>(value: Erased) -> T {
    *value
        .downcast::<T>()
        .expect("Free: arrow received a value of another type")
}

/// A deferred program over the step type `F` producing an `A`.
///
/// # Monad Laws
///
/// With `Free::pure` as `pure`, for every interpreter:
///
/// - Left Identity: `Free::pure(a).flat_map(f) == f(a)`
/// - Right Identity: `m.flat_map(Free::pure) == m`
/// - Associativity: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
pub struct Free<F, A> {
    step: Step<F>,
    result: PhantomData<fn() -> A>,
}

impl<F, A> Free<F, A>
where
    F: Functor + 'static,
    F::Payload: 'static,
    A: 'static,
{
    fn from_step(step: Step<F>) -> Self {
        Self {
            step,
            result: PhantomData,
        }
    }

    /// Creates a finished program.
    #[inline]
    pub fn pure(value: A) -> Self {
        Self::from_step(Step::Pure(Box::new(value)))
    }

    /// Creates a program of one step followed by `continuation`.
    pub fn operation<K>(functor: F, continuation: K) -> Self
    where
        K: FnOnce(F::Payload) -> Self + 'static,
    {
        Free::<F, F::Payload>::lift(functor).flat_map(continuation)
    }

    /// Returns `true` for a finished program.
    #[inline]
    pub const fn is_pure(&self) -> bool {
        matches!(self.step, Step::Pure(_))
    }

    /// Sequences this program with one built from its result.
    ///
    /// A finished program feeds `function` right away. On an `Operation` the
    /// bind is queued behind the ones already there.
    pub fn flat_map<B, G>(self, function: G) -> Free<F, B>
    where
        G: FnOnce(A) -> Free<F, B> + 'static,
        B: 'static,
    {
        match self.step {
            Step::Pure(value) => function(unerase(value)),
            Step::Operation {
                functor,
                mut arrows,
            } => {
                arrows.push_back(Box::new(move |input| function(unerase(input)).step));
                Free::from_step(Step::Operation { functor, arrows })
            }
        }
    }

    /// Transforms the eventual result.
    pub fn map<B, G>(self, function: G) -> Free<F, B>
    where
        G: FnOnce(A) -> B + 'static,
        B: 'static,
    {
        self.flat_map(move |value| Free::pure(function(value)))
    }

    /// Runs `next` after this program, discarding this program's result.
    #[must_use]
    pub fn then<B>(self, next: Free<F, B>) -> Free<F, B>
    where
        B: 'static,
    {
        self.flat_map(move |_| next)
    }

    /// Interprets the program, asking `interpreter` for the payload of each step.
    pub fn run_free<I>(self, mut interpreter: I) -> A
    where
        I: FnMut(F) -> F::Payload,
    {
        let (functor, mut current) = match self.step {
            Step::Pure(value) => return unerase(value),
            Step::Operation { functor, arrows } => (functor, arrows),
        };
        let mut pending: Vec<VecDeque<Arrow<F>>> = Vec::new();
        let mut value: Erased = Box::new(interpreter(functor));

        loop {
            let arrow = loop {
                if let Some(arrow) = current.pop_front() {
                    break Some(arrow);
                }
                match pending.pop() {
                    Some(queue) => current = queue,
                    None => break None,
                }
            };
            let Some(arrow) = arrow else {
                return unerase(value);
            };

            match arrow(value) {
                Step::Pure(next) => value = next,
                Step::Operation { functor, arrows } => {
                    let enclosing = std::mem::replace(&mut current, arrows);
                    if !enclosing.is_empty() {
                        pending.push(enclosing);
                    }
                    value = Box::new(interpreter(functor));
                }
            }
        }
    }

    /// Interprets the program by extracting each step's own payload.
    pub fn run_extract(self) -> A {
        self.run_free(Functor::extract)
    }
}

impl<F> Free<F, F::Payload>
where
    F: Functor + 'static,
    F::Payload: 'static,
{
    /// Lifts a single step into a program that yields the step's payload.
    pub fn lift(functor: F) -> Self {
        Self::from_step(Step::Operation {
            functor,
            arrows: VecDeque::new(),
        })
    }
}

impl<F: fmt::Debug, A: fmt::Debug + 'static> fmt::Debug for Free<F, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.step {
            Step::Pure(value) => match value.downcast_ref::<A>() {
                Some(value) => formatter.debug_tuple("Pure").field(value).finish(),
                None => formatter.write_str("Pure(<erased>)"),
            },
            Step::Operation { functor, arrows } => formatter
                .debug_struct("Operation")
                .field("functor", functor)
                .field("arrows", &arrows.len())
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::Identity;
    use rstest::rstest;

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Counter(i32);

    impl Functor for Counter {
        type Payload = i32;

        fn fmap<G>(self, function: G) -> Self
        where
            G: FnOnce(i32) -> i32,
        {
            Self(function(self.0))
        }

        fn extract(self) -> i32 {
            self.0
        }
    }

    #[rstest]
    fn pure_runs_to_its_value() {
        let program: Free<Counter, i32> = Free::pure(42);
        assert!(program.is_pure());
        assert_eq!(program.run_extract(), 42);
    }

    #[rstest]
    fn map_on_pure() {
        let program: Free<Counter, i32> = Free::pure(21).map(|x| x * 2);
        assert_eq!(program.run_extract(), 42);
    }

    #[rstest]
    fn operation_feeds_extracted_payload() {
        let program = Free::operation(Counter(21), |payload| Free::pure(payload * 2));
        assert_eq!(program.run_extract(), 42);
    }

    #[rstest]
    fn interpreter_overrides_payload() {
        let program = Free::lift(Counter(1)).flat_map(|first| Free::lift(Counter(2)).map(move |second| first + second));
        let mut seen = Vec::new();
        let result = program.run_free(|Counter(n)| {
            seen.push(n);
            n * 100
        });
        assert_eq!(result, 300);
        assert_eq!(seen, vec![1, 2]);
    }

    #[rstest]
    fn building_does_not_interpret() {
        let program = Free::lift(Counter(5)).map(|x| x + 1);
        assert!(!program.is_pure());
        assert!(format!("{program:?}").contains("Operation"));
    }

    #[rstest]
    fn long_programs_run_iteratively() {
        let mut program: Free<Identity<u64>, u64> = Free::pure(0);
        for _ in 0..10_000 {
            program = program.flat_map(|total| Free::lift(Identity::new(1)).map(move |step| total + step));
        }
        assert_eq!(program.run_extract(), 10_000);
    }

    #[rstest]
    fn then_discards_previous_result() {
        let program = Free::lift(Counter(9)).then(Free::lift(Counter(4)));
        assert_eq!(program.run_extract(), 4);
    }
}
