//! Property-based tests for Writer laws.
//!
//! `flat_map` carries the continuation's output forward, so the laws compare
//! the `(value, output)` pairs returned by `run`, starting from writers whose
//! output is empty for right identity.

use kleisli::effect::Writer;
use proptest::prelude::*;

fn record(value: i32) -> Writer<Vec<String>, i32> {
    Writer::new(value.wrapping_add(1), vec![format!("recorded {value}")])
}

fn square(value: i32) -> Writer<Vec<String>, i32> {
    Writer::new(value.wrapping_mul(value), vec![format!("squared {value}")])
}

proptest! {
    #[test]
    fn prop_writer_left_identity(value in any::<i32>()) {
        prop_assert_eq!(Writer::pure(value).flat_map(record).run(), record(value).run());
    }

    #[test]
    fn prop_writer_right_identity(value in any::<i32>()) {
        let writer: Writer<Vec<String>, i32> = Writer::pure(value);
        prop_assert_eq!(writer.clone().flat_map(Writer::pure).run(), writer.run());
    }

    #[test]
    fn prop_writer_associativity(value in any::<i32>(), log in prop::collection::vec("[a-z]{1,5}", 0..3)) {
        let writer = Writer::new(value, log);
        let left = writer.clone().flat_map(record).flat_map(square);
        let right = writer.flat_map(|x| record(x).flat_map(square));
        prop_assert_eq!(left.run(), right.run());
    }

    #[test]
    fn prop_writer_map_keeps_output(value in any::<i32>(), output in any::<u8>()) {
        let writer = Writer::new(value, output).map(|x| i64::from(x) * 2);
        prop_assert_eq!(writer.run(), (i64::from(value) * 2, output));
    }
}

#[test]
fn flat_map_propagates_next_output() {
    let writer = Writer::new(3, 0).flat_map(|x| Writer::new(x + 1, x));
    assert_eq!(writer.run(), (4, 3));
}

#[test]
fn accumulation_belongs_to_the_caller() {
    let writer = Writer::new(1, vec!["opened"]).flat_map(|value| {
        Writer::with_combine(value + 1, vec!["read"], |value, mut output| {
            output.insert(0, "opened");
            (value, output)
        })
    });
    assert_eq!(writer.run(), (2, vec!["opened", "read"]));
}
