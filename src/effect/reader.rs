//! Reader container - a computation that depends on a shared environment.
//!
//! A `Reader<R, A>` wraps a function `R -> A`. Every step of a chained reader
//! sees the very same environment: [`Reader::flat_map`] hands one copy to the
//! original computation and another to the continuation's reader.
//!
//! # Examples
//!
//! ```rust
//! use kleisli::effect::Reader;
//!
//! #[derive(Clone)]
//! struct Config {
//!     host: String,
//!     port: u16,
//! }
//!
//! let address = Reader::asks(|config: Config| config.host)
//!     .flat_map(|host| Reader::asks(move |config: Config| format!("{host}:{}", config.port)));
//!
//! let config = Config { host: "localhost".to_string(), port: 8080 };
//! assert_eq!(address.run(config), "localhost:8080");
//! ```

use std::rc::Rc;

/// A computation reading from an environment of type `R`.
///
/// # Monad Laws
///
/// - Left Identity: `Reader::pure(a).flat_map(f) == f(a)`
/// - Right Identity: `m.flat_map(Reader::pure) == m`
/// - Associativity: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
pub struct Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    computation: Rc<dyn Fn(R) -> A>,
}

impl<R, A> Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    /// Creates a `Reader` from a function of the environment.
    pub fn new<F>(computation: F) -> Self
    where
        F: Fn(R) -> A + 'static,
    {
        Self {
            computation: Rc::new(computation),
        }
    }

    /// Creates a `Reader` that ignores the environment and yields `value`.
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |_| value.clone())
    }

    /// Runs the computation against `environment`.
    pub fn run(&self, environment: R) -> A {
        (self.computation)(environment)
    }

    /// Transforms the produced value.
    pub fn map<B, F>(self, function: F) -> Reader<R, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let computation = self.computation;
        Reader::new(move |environment| function(computation(environment)))
    }

    /// Chains a `Reader` built from the produced value; both see the same environment.
    pub fn flat_map<B, F>(self, function: F) -> Reader<R, B>
    where
        F: Fn(A) -> Reader<R, B> + 'static,
        R: Clone,
        B: 'static,
    {
        let computation = self.computation;
        Reader::new(move |environment: R| {
            let value = computation(environment.clone());
            function(value).run(environment)
        })
    }

    /// Projects a part of the environment.
    pub fn asks<F>(projection: F) -> Self
    where
        F: Fn(R) -> A + 'static,
    {
        Self::new(projection)
    }

    /// Runs `computation` against an environment rewritten by `modifier`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::Reader;
    ///
    /// let doubled = Reader::local(|depth: u32| depth * 2, Reader::ask());
    /// assert_eq!(doubled.run(21), 42);
    /// ```
    pub fn local<F>(modifier: F, computation: Self) -> Self
    where
        F: Fn(R) -> R + 'static,
    {
        Self::new(move |environment| computation.run(modifier(environment)))
    }
}

impl<R> Reader<R, R>
where
    R: 'static,
{
    /// Yields the environment itself.
    pub fn ask() -> Self {
        Self::new(|environment| environment)
    }
}

impl<R, A> Clone for Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    fn clone(&self) -> Self {
        Self {
            computation: Rc::clone(&self.computation),
        }
    }
}
