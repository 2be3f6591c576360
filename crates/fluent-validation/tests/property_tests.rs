//! Property-based tests for nebula-fluent-validation.

use nebula_fluent_validation::prelude::*;
use proptest::prelude::*;
use std::cell::Cell;
use std::rc::Rc;

fn leaf(member: &'static str, ok: bool) -> Constraint {
    Constraint::leaf(PredicateConstraint::new(
        member,
        MemberValue::new(ok),
        |v: &bool| *v,
        member,
    ))
}

fn report(constraint: &Constraint) -> Vec<(String, String)> {
    let mut sink: Vec<(String, String)> = Vec::new();
    constraint.accept(Some(&mut sink));
    sink
}

fn shape() -> impl Strategy<Value = Constraint> {
    let leaf_strategy = (0_u8..4, any::<bool>())
        .prop_map(|(id, ok)| leaf(["A", "B", "C", "D"][usize::from(id)], ok));
    leaf_strategy.prop_recursive(4, 16, 2, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(l, r)| l.and(r)),
            (inner.clone(), inner).prop_map(|(l, r)| l.or(r)),
        ]
    })
}

// ============================================================================
// AND SHORT-CIRCUIT: a failing left side hides the right side
// ============================================================================

proptest! {
    #[test]
    fn and_reports_left_failure_only(right_ok in any::<bool>()) {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let right = Constraint::leaf(PredicateConstraint::new(
            "Right",
            MemberValue::new(right_ok),
            move |v: &bool| {
                counter.set(counter.get() + 1);
                *v
            },
            "right",
        ));
        let chain = leaf("Left", false).and(right);

        prop_assert_eq!(chain.accept(Some(&mut Vec::<(String, String)>::new())), 1);
        prop_assert_eq!(calls.get(), 0);
    }

    #[test]
    fn null_is_identity(ok in any::<bool>()) {
        let x = leaf("X", ok);
        prop_assert_eq!(report(&Constraint::null().and(x.clone())), report(&x));
        prop_assert!(Constraint::null().and(x.clone()) == x);
    }
}

// ============================================================================
// INVERSION: involutive and negating
// ============================================================================

proptest! {
    #[test]
    fn invert_is_involutive(c in shape()) {
        prop_assert_eq!(c.invert().invert().is_satisfied(), c.is_satisfied());
        prop_assert_eq!(c.invert().invert().leaf_count(), c.leaf_count());
    }

    #[test]
    fn invert_negates(c in shape()) {
        prop_assert_eq!(c.invert().is_satisfied(), !c.is_satisfied());
    }

    #[test]
    fn reports_iff_unsatisfied(c in shape()) {
        prop_assert_eq!(report(&c).is_empty(), c.is_satisfied());
    }
}

// ============================================================================
// RANGES: symmetry and boundary exclusivity
// ============================================================================

fn violations(declare: impl FnOnce(&mut MemberSet)) -> usize {
    let mut set = MemberSet::new();
    declare(&mut set);
    set.add_error_messages_to(&mut Vec::<(String, String)>::new())
}

proptest! {
    #[test]
    fn in_range_and_not_in_range_are_complementary(
        a in -1000_i64..1000,
        b in -1000_i64..1000,
        v in -1200_i64..1200,
    ) {
        let (left, right) = (a.min(b), a.max(b));
        let range = Range::new(left, right).unwrap();

        let inside = violations(|set| {
            set.add("V", MemberValue::new(v))
                .unwrap()
                .is_in_range(left, right, "outside")
                .unwrap();
        }) == 0;
        let outside = violations(|set| {
            set.add("V", MemberValue::new(v))
                .unwrap()
                .is_not_in_range(left, right, "inside")
                .unwrap();
        }) == 0;

        prop_assert_eq!(range.contains(&v), inside);
        prop_assert_eq!(inside, !outside);
    }

    #[test]
    fn exclusive_boundaries_are_excluded(a in -1000_i64..1000, width in 1_i64..100) {
        let (left, right) = (a, a + width);

        let left_excl = Range::with_options(left, right, RangeOptions::LeftExclusive).unwrap();
        let right_excl = Range::with_options(left, right, RangeOptions::RightExclusive).unwrap();
        let inclusive = Range::new(left, right).unwrap();

        prop_assert!(!left_excl.contains(&left));
        prop_assert!(left_excl.contains(&right));
        prop_assert!(!right_excl.contains(&right));
        prop_assert!(right_excl.contains(&left));
        prop_assert!(inclusive.contains(&left) && inclusive.contains(&right));
    }

    #[test]
    fn reversed_bounds_always_rejected(a in -1000_i64..1000, width in 1_i64..100) {
        let err = Range::new(a + width, a).unwrap_err();
        prop_assert!(err.is_range_error());
    }
}

// ============================================================================
// MESSAGES: rendering is deterministic
// ============================================================================

proptest! {
    #[test]
    fn message_renders_arguments_in_place(n in any::<i32>(), word in "[a-z]{1,8}") {
        let message = ErrorMessage::new("{1} must exceed {0}").with_arg(n).with_arg(word.clone());
        prop_assert_eq!(message.render(), format!("{word} must exceed {n}"));
    }
}
