use nebula_fluent_validation::prelude::*;
use nebula_fluent_validation::verify_that;
use pretty_assertions::assert_eq;
use std::any::Any;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

// ============================================================================
// FIXTURES
// ============================================================================

struct Address {
    street: String,
    zip: Option<String>,
}

impl ValidateMessage for Address {
    fn verify(&self, validator: &mut FluentValidator) -> SpecificationResult<()> {
        verify_that!(validator, self.street)?.is_not_blank("required");
        validator
            .verify_that(self.zip.clone(), "zip")?
            .is_not_null("required")
            .matches(r"^\d{4,5}$", "malformed")?;
        Ok(())
    }
}

struct Customer {
    name: String,
    age: u32,
    nickname: Option<String>,
    tags: Vec<String>,
    address: Address,
}

impl ValidateMessage for Customer {
    fn verify(&self, validator: &mut FluentValidator) -> SpecificationResult<()> {
        validator
            .verify_that(self.name.clone(), "Name")?
            .is_not_blank("required")
            .has_max_length(20, "too long");
        validator
            .verify_that(self.age, "Age")?
            .is_greater_than_or_equal_to(18, "too young")?
            .is_smaller_than(130, "implausible")?;
        validator
            .verify_that(self.nickname.clone(), "Nickname")?
            .is_not_null("required")
            .has_min_length(3, "too short");
        validator
            .verify_that(self.tags.clone(), "Tags")?
            .has_count_between(1, 3, "one to three tags")?
            .has_unique_items("duplicate tag");
        validator.verify_child(&self.address)?;
        Ok(())
    }
}

fn valid_customer() -> Customer {
    Customer {
        name: "Ada".to_owned(),
        age: 36,
        nickname: Some("countess".to_owned()),
        tags: vec!["vip".to_owned()],
        address: Address {
            street: "St James's Square".to_owned(),
            zip: Some("10115".to_owned()),
        },
    }
}

// ============================================================================
// SCENARIOS
// ============================================================================

#[test]
fn test_valid_message_yields_empty_tree() {
    let tree = valid_customer().validate().unwrap();
    assert!(tree.is_valid());
    assert!(tree.errors().is_empty());
    assert!(tree.children().is_empty());
}

#[test]
fn test_too_young() {
    let mut validator = FluentValidator::new();
    validator
        .verify_that(15, "Age")
        .unwrap()
        .is_greater_than(18, "too young")
        .unwrap();

    let tree = validator.validate();
    assert_eq!(tree.errors().len(), 1);
    assert_eq!(tree.errors_for("Age"), ["too young"]);
}

#[test]
fn test_missing_nullable_reports_once_without_downstream() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let mut validator = FluentValidator::new();
    validator
        .verify_that(None::<i32>, "Limit")
        .unwrap()
        .is_not_null("must have value")
        .satisfies(
            move |_| {
                counter.set(counter.get() + 1);
                false
            },
            "never",
        );

    let tree = validator.validate();
    assert_eq!(tree.total_error_count(), 1);
    assert_eq!(tree.errors_for("Limit"), ["must have value"]);
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_errors_follow_declaration_order() {
    let mut customer = valid_customer();
    customer.name = " ".to_owned();
    customer.age = 12;
    customer.nickname = None;
    customer.tags = vec!["a".to_owned(), "a".to_owned()];

    let tree = customer.validate().unwrap();
    assert_eq!(
        tree.member_names().collect::<Vec<_>>(),
        ["Name", "Age", "Nickname", "Tags"]
    );
    assert_eq!(tree.errors_for("Name"), ["required"]);
    assert_eq!(tree.errors_for("Age"), ["too young"]);
    assert_eq!(tree.errors_for("Nickname"), ["required"]);
    assert_eq!(tree.errors_for("Tags"), ["duplicate tag"]);
    assert!(tree.children().is_empty());
}

#[test]
fn test_nested_message_errors_become_children() {
    let mut customer = valid_customer();
    customer.address.street = String::new();
    customer.address.zip = Some("ABC".to_owned());

    let tree = customer.validate().unwrap();
    assert!(tree.errors().is_empty());
    assert_eq!(tree.children().len(), 1);

    let address = &tree.children()[0];
    assert_eq!(address.errors_for("street"), ["required"]);
    assert_eq!(address.errors_for("zip"), ["malformed"]);
    assert_eq!(tree.total_error_count(), 2);
    assert_eq!(
        tree.to_string(),
        "  street: required\n  zip: malformed\n"
    );
}

#[test]
fn test_specification_errors_surface_from_verify() {
    struct Broken;

    impl ValidateMessage for Broken {
        fn verify(&self, validator: &mut FluentValidator) -> SpecificationResult<()> {
            validator.verify_that(1, "Id")?;
            validator.verify_that(2, "Id")?;
            Ok(())
        }
    }

    let err = Broken.validate().unwrap_err();
    assert!(err.is_duplicate_member());
    assert_eq!(err.to_string(), "member 'Id' already added");
}

#[test]
fn test_instance_narrowing_in_session() {
    let mut validator = FluentValidator::new();
    validator
        .verify_that(Box::new(42_u16) as Box<dyn Any>, "Port")
        .unwrap()
        .is_instance_of::<u16>("must be a port number")
        .is_in_range(1024, 65535, "unprivileged only")
        .unwrap();
    validator
        .verify_that(Box::new("x") as Box<dyn Any>, "Retries")
        .unwrap()
        .is_instance_of::<u8>("must be a count")
        .is_smaller_than(10, "too many")
        .unwrap();

    assert_eq!(validator.members().len(), 2);
    assert!(validator.members().get("Port").unwrap().is::<u16>());

    let tree = validator.validate();
    assert_eq!(tree.errors_for("Port"), ["unprivileged only"]);
    assert_eq!(tree.errors_for("Retries"), ["must be a count"]);
}

#[test]
fn test_bound_consumer_sees_narrowing_and_tree_keeps_it() {
    let sink = Rc::new(RefCell::new(Vec::<(String, String)>::new()));
    let mut validator = FluentValidator::with_consumer(Rc::clone(&sink));
    validator
        .verify_that(None::<String>, "Token")
        .unwrap()
        .is_not_null("missing token")
        .is_not_blank("blank token");

    assert_eq!(
        *sink.borrow(),
        vec![("Token".to_owned(), "missing token".to_owned())]
    );
    let tree = validator.validate();
    assert!(!tree.is_valid());
    assert_eq!(tree.errors_for("Token"), ["missing token"]);
}

#[test]
fn test_bound_consumer_missing_limit_is_invalid() {
    let sink = Rc::new(RefCell::new(ValidationErrorTreeBuilder::new()));
    let mut validator = FluentValidator::with_consumer(Rc::clone(&sink));
    validator
        .verify_that(None::<u32>, "Limit")
        .unwrap()
        .is_not_null("must have value");

    let tree = validator.validate();
    assert!(!tree.is_valid());
    assert_eq!(tree.errors_for("Limit"), ["must have value"]);
    assert_eq!(sink.borrow().error_count(), 1);
}

#[test]
fn test_formatted_messages() {
    let mut validator = FluentValidator::new();
    validator
        .verify_that("ab".to_owned(), "Code")
        .unwrap()
        .has_min_length(3, ErrorMessage::new("needs at least {0} characters").with_arg(3));

    assert_eq!(
        validator.validate().errors_for("Code"),
        ["needs at least 3 characters"]
    );
}
