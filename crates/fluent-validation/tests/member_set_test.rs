use nebula_fluent_validation::prelude::*;
use pretty_assertions::assert_eq;
use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn test_duplicate_member_rejected() {
    let mut set = MemberSet::new();
    set.add("Email", MemberValue::new("a@b.c".to_owned())).unwrap();

    let err = set.add("Email", MemberValue::new(1)).unwrap_err();
    assert!(err.is_duplicate_member());
    assert_eq!(err.code(), "duplicate_member");
    assert_eq!(set.len(), 1);
}

#[test]
fn test_narrowing_keeps_single_registration() {
    let mut set = MemberSet::new();
    set.add("Before", MemberValue::new(0)).unwrap();
    set.add("Payload", MemberValue::new(Box::new(7_i32) as Box<dyn Any>))
        .unwrap()
        .is_instance_of::<i32>("must be a number");
    set.add("After", MemberValue::new(0)).unwrap();

    let names: Vec<(&str, &str)> = set.iter().map(|m| (m.name(), m.type_name())).collect();
    assert_eq!(
        names,
        [("Before", "i32"), ("Payload", "i32"), ("After", "i32")]
    );
    assert!(set.member::<Box<dyn Any>>("Payload").is_none());
    assert_eq!(set.member::<i32>("Payload").unwrap().value(), Some(&7));
}

#[test]
fn test_stale_replace_is_noop() {
    let mut set = MemberSet::new();
    let key = set.add("Id", MemberValue::new(Some(5_u64))).unwrap().key();
    let narrowed = set
        .member::<Option<u64>>("Id")
        .unwrap()
        .is_not_null("required")
        .key();

    assert_ne!(key, narrowed);
    assert_eq!(set.replace(key, MemberValue::new("replayed")), None);
    assert!(set.get("Id").unwrap().is::<u64>());
    assert!(set.get_by_key(narrowed).is_some());
}

#[test]
fn test_reacquired_member_extends_chain() {
    let mut set = MemberSet::new();
    set.add("Score", MemberValue::new(40))
        .unwrap()
        .is_greater_than_or_equal_to(0, "negative")
        .unwrap();
    set.member::<i32>("Score")
        .unwrap()
        .is_smaller_than_or_equal_to(10, "over the limit")
        .unwrap();

    assert!(set.member::<String>("Score").is_none());
    assert_eq!(set.get("Score").unwrap().constraint().leaf_count(), 2);

    let mut builder = ValidationErrorTreeBuilder::new();
    assert_eq!(set.add_error_messages_to(&mut builder), 1);
    assert_eq!(builder.build_error_tree().errors_for("Score"), ["over the limit"]);
}

#[test]
fn test_independent_members_all_reported() {
    let mut set = MemberSet::new();
    for name in ["A", "B", "C"] {
        set.add(name, MemberValue::new(-1))
            .unwrap()
            .is_greater_than(0, "must be positive")
            .unwrap()
            .is_greater_than(100, "must be large")
            .unwrap();
    }

    let mut builder = ValidationErrorTreeBuilder::new();
    assert_eq!(set.add_error_messages_to(&mut builder), 3);
    let tree = builder.build_error_tree();
    for name in ["A", "B", "C"] {
        assert_eq!(tree.errors_for(name), ["must be positive"]);
    }
}

#[test]
fn test_eager_guard_reported_once_per_evaluation() {
    let sink = Rc::new(RefCell::new(ValidationErrorTreeBuilder::new()));
    let mut set = MemberSet::with_consumer(Rc::clone(&sink));
    set.add("Limit", MemberValue::new(None::<u8>))
        .unwrap()
        .is_not_null("must have value")
        .is_greater_than(5, "too small")
        .unwrap();

    let mut later = ValidationErrorTreeBuilder::new();
    assert_eq!(set.add_error_messages_to(&mut later), 1);
    assert_eq!(set.add_error_messages_to(&mut later), 1);

    assert_eq!(sink.borrow().error_count(), 1);
    assert_eq!(later.error_count(), 2);
    assert_eq!(
        later.build_error_tree().errors_for("Limit"),
        ["must have value", "must have value"]
    );
}

#[test]
fn test_declaration_errors_raised_with_bound_consumer() {
    let sink = Rc::new(RefCell::new(Vec::<(String, String)>::new()));
    let mut set = MemberSet::with_consumer(Rc::clone(&sink));

    let nan = set
        .add("Ratio", MemberValue::new(0.5_f64))
        .unwrap()
        .is_smaller_than(f64::NAN, "too large")
        .unwrap_err();
    assert!(nan.is_not_comparable());

    let reversed = set
        .add("Level", MemberValue::new(3))
        .unwrap()
        .is_in_range(10, 0, "outside")
        .unwrap_err();
    assert_eq!(reversed, SpecificationError::range_bounds_reversed("10", "0"));

    let degenerate = set
        .add("Step", MemberValue::new(5))
        .unwrap()
        .is_in_range_with_options(5, 5, RangeOptions::AllExclusive, "outside")
        .unwrap_err();
    assert!(degenerate.is_range_error());

    let duplicate = set.add("Level", MemberValue::new("three")).unwrap_err();
    assert!(duplicate.is_duplicate_member());

    assert!(sink.borrow().is_empty());
    let mut reported: Vec<(String, String)> = Vec::new();
    assert_eq!(set.add_error_messages_to(&mut reported), 0);
}
