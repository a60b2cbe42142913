//! Functor capability - the step shape consumed by [`Free`](crate::control::Free).
//!
//! A `Functor` here is a single instruction of a DSL: it carries a payload
//! that can be transformed without changing the instruction, and that payload
//! can be pulled back out when the instruction is interpreted.
//!
//! # Laws
//!
//! All `Functor` implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! ## Extraction
//!
//! Extraction observes the mapped payload:
//!
//! ```text
//! fa.fmap(f).extract() == f(fa.extract())
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kleisli::typeclass::Functor;
//!
//! #[derive(Debug, PartialEq)]
//! struct Tick(u32);
//!
//! impl Functor for Tick {
//!     type Payload = u32;
//!
//!     fn fmap<F>(self, function: F) -> Self
//!     where
//!         F: FnOnce(u32) -> u32,
//!     {
//!         Tick(function(self.0))
//!     }
//!
//!     fn extract(self) -> u32 {
//!         self.0
//!     }
//! }
//!
//! assert_eq!(Tick(20).fmap(|n| n + 1).extract(), 21);
//! ```

/// A single interpretable step whose payload can be transformed and extracted.
///
/// The payload type is fixed per step type, which keeps [`Free`](crate::control::Free)
/// fully typed: the continuation attached to a step must accept exactly this
/// payload, and any interpreter must produce exactly this payload.
pub trait Functor: Sized {
    /// The value carried by the step.
    type Payload;

    /// Applies a function to the payload, preserving the step.
    fn fmap<F>(self, function: F) -> Self
    where
        F: FnOnce(Self::Payload) -> Self::Payload;

    /// Pulls the payload out of the step.
    fn extract(self) -> Self::Payload;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug, Clone, PartialEq)]
    struct Counter(i32);

    impl Functor for Counter {
        type Payload = i32;

        fn fmap<F>(self, function: F) -> Self
        where
            F: FnOnce(i32) -> i32,
        {
            Self(function(self.0))
        }

        fn extract(self) -> i32 {
            self.0
        }
    }

    #[rstest]
    fn fmap_identity_law() {
        let step = Counter(7);
        assert_eq!(step.clone().fmap(|x| x), step);
    }

    #[rstest]
    fn fmap_composition_law() {
        let function1 = |x: i32| x + 1;
        let function2 = |x: i32| x * 3;
        let left = Counter(4).fmap(function1).fmap(function2);
        let right = Counter(4).fmap(|x| function2(function1(x)));
        assert_eq!(left, right);
    }

    #[rstest]
    #[case(0)]
    #[case(-12)]
    #[case(99)]
    fn extract_observes_mapped_payload(#[case] payload: i32) {
        assert_eq!(Counter(payload).fmap(|x| x * 2).extract(), payload * 2);
    }
}
