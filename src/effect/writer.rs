//! Writer container - a value travelling with an output.
//!
//! A `Writer<W, A>` holds a value, an output, and a `combine` step that
//! [`Writer::run`] applies to the pair. Writers built with [`Writer::new`]
//! use an identity step, so `run` returns the pair as stored;
//! [`Writer::with_combine`] lets the caller decide how the output is
//! finalised.
//!
//! The container never merges outputs on its own. [`Writer::flat_map`] runs
//! the next writer and carries *its* output forward; any accumulation belongs
//! to the caller, either inside the continuation or in a `combine` step.
//!
//! # Examples
//!
//! ```rust
//! use kleisli::effect::Writer;
//!
//! let step = Writer::new(2, vec!["start".to_string()]).flat_map(|value| {
//!     Writer::new(value * 10, vec!["start".to_string(), format!("scaled {value}")])
//! });
//! assert_eq!(step.run(), (20, vec!["start".to_string(), "scaled 2".to_string()]));
//!
//! let stamped = Writer::with_combine(1, String::from("done"), |value, output| {
//!     (value, format!("[{value}] {output}"))
//! });
//! assert_eq!(stamped.run(), (1, "[1] done".to_string()));
//! ```

use std::fmt;
use std::rc::Rc;

/// The finalising step applied by [`Writer::run`].
type Combine<A, W> = Rc<dyn Fn(A, W) -> (A, W)>;

/// A value paired with an output.
///
/// # Monad Laws
///
/// With `Writer::pure` as `pure`, comparing the pairs returned by `run`:
///
/// - Left Identity: `Writer::pure(a).flat_map(f) == f(a)`
/// - Right Identity: `m.flat_map(Writer::pure) == m` for writers whose output
///   is empty, since `flat_map` carries the continuation's output forward
/// - Associativity: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
pub struct Writer<W, A>
where
    W: 'static,
    A: 'static,
{
    value: A,
    output: W,
    combine: Combine<A, W>,
}

impl<W, A> Writer<W, A>
where
    W: 'static,
    A: 'static,
{
    /// Creates a writer whose `run` returns `(value, output)` unchanged.
    pub fn new(value: A, output: W) -> Self {
        Self::with_combine(value, output, |value, output| (value, output))
    }

    /// Creates a writer whose `run` finalises the pair with `combine`.
    pub fn with_combine<F>(value: A, output: W, combine: F) -> Self
    where
        F: Fn(A, W) -> (A, W) + 'static,
    {
        Self {
            value,
            output,
            combine: Rc::new(combine),
        }
    }

    /// Creates a writer carrying `value` and an empty output.
    pub fn pure(value: A) -> Self
    where
        W: Default,
    {
        Self::new(value, W::default())
    }

    /// Returns the stored value.
    #[inline]
    pub const fn value(&self) -> &A {
        &self.value
    }

    /// Returns the stored output.
    #[inline]
    pub const fn output(&self) -> &W {
        &self.output
    }

    /// Applies the `combine` step to the stored pair.
    pub fn run(&self) -> (A, W)
    where
        A: Clone,
        W: Clone,
    {
        (self.combine)(self.value.clone(), self.output.clone())
    }

    /// Transforms the value; the output and its `combine` step are kept.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::Writer;
    ///
    /// let counted = Writer::with_combine(3, 0_u32, |value, calls| (value, calls + 1))
    ///     .map(|value| value.to_string());
    /// assert_eq!(counted.run(), ("3".to_string(), 1));
    /// ```
    pub fn map<B, F>(self, function: F) -> Writer<W, B>
    where
        F: FnOnce(A) -> B,
        A: Clone,
        B: Clone + 'static,
    {
        let original = self.value.clone();
        let mapped = function(self.value);
        let combine = self.combine;
        let result = mapped.clone();
        Writer::with_combine(mapped, self.output, move |_, output| {
            let (_, output) = combine(original.clone(), output);
            (result.clone(), output)
        })
    }

    /// Runs the writer built from the value and carries its value and output forward.
    pub fn flat_map<B, F>(self, function: F) -> Writer<W, B>
    where
        F: FnOnce(A) -> Writer<W, B>,
        W: Clone,
        B: Clone + 'static,
    {
        let (value, output) = function(self.value).run();
        Writer::new(value, output)
    }
}

impl<W, A> Clone for Writer<W, A>
where
    W: Clone + 'static,
    A: Clone + 'static,
{
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            output: self.output.clone(),
            combine: Rc::clone(&self.combine),
        }
    }
}

impl<W, A> fmt::Debug for Writer<W, A>
where
    W: fmt::Debug + 'static,
    A: fmt::Debug + 'static,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Writer")
            .field("value", &self.value)
            .field("output", &self.output)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn flat_map_carries_next_output() {
        let writer = Writer::new(3, 7).flat_map(|x| Writer::new(x + 1, x));
        assert_eq!(writer.run(), (4, 3));
    }

    #[rstest]
    fn flat_map_does_not_merge_outputs() {
        let writer = Writer::new(1, vec!["first"]).flat_map(|x| Writer::new(x, vec!["second"]));
        assert_eq!(writer.output(), &vec!["second"]);
    }

    #[rstest]
    fn map_keeps_output() {
        let writer = Writer::new(5, "log").map(|x| x * 2);
        assert_eq!(writer.value(), &10);
        assert_eq!(writer.run(), (10, "log"));
    }

    #[rstest]
    fn run_applies_combine_once_per_call() {
        let writer = Writer::with_combine(2, 100, |value, output| (value, output + value));
        assert_eq!(writer.run(), (2, 102));
        assert_eq!(writer.run(), (2, 102));
    }

    #[rstest]
    fn pure_has_empty_output() {
        let writer: Writer<String, i32> = Writer::pure(9);
        assert_eq!(writer.run(), (9, String::new()));
        assert!(format!("{writer:?}").contains("Writer"));
    }
}
