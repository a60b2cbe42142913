//! Property-based tests for Reader laws.
//!
//! - Left Identity: pure(a).flat_map(f) == f(a)
//! - Right Identity: m.flat_map(pure) == m
//! - Associativity: m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! - Ask: every stage of a chain observes the same environment

use kleisli::effect::Reader;
use proptest::prelude::*;

fn offset(value: i64) -> Reader<i64, i64> {
    Reader::new(move |environment: i64| value.wrapping_add(environment))
}

fn describe(value: i64) -> Reader<i64, String> {
    Reader::new(move |environment: i64| format!("{value}@{environment}"))
}

proptest! {
    #[test]
    fn prop_reader_left_identity(value in any::<i64>(), environment in any::<i64>()) {
        prop_assert_eq!(Reader::pure(value).flat_map(offset).run(environment), offset(value).run(environment));
    }

    #[test]
    fn prop_reader_right_identity(environment in any::<i64>()) {
        let reader = Reader::asks(|environment: i64| environment.wrapping_mul(7));
        prop_assert_eq!(reader.clone().flat_map(Reader::pure).run(environment), reader.run(environment));
    }

    #[test]
    fn prop_reader_associativity(environment in any::<i64>()) {
        let reader: Reader<i64, i64> = Reader::ask();
        let left = reader.clone().flat_map(offset).flat_map(describe);
        let right = reader.flat_map(|x| offset(x).flat_map(describe));
        prop_assert_eq!(left.run(environment), right.run(environment));
    }

    #[test]
    fn prop_reader_shares_environment(environment in "[a-z]{0,12}") {
        let reader = Reader::ask().flat_map(|first: String| {
            Reader::asks(move |second: String| first == second)
        });
        prop_assert!(reader.run(environment));
    }
}
