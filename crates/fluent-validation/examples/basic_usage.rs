//! Basic usage example for nebula-fluent-validation

use nebula_fluent_validation::prelude::*;
use nebula_fluent_validation::verify_that;

struct Signup {
    email: String,
    age: u32,
    referrer: Option<String>,
}

impl ValidateMessage for Signup {
    fn verify(&self, validator: &mut FluentValidator) -> SpecificationResult<()> {
        verify_that!(validator, self.email)?
            .is_not_blank("is required")
            .matches(r"^[^@\s]+@[^@\s]+$", "is not an email address")?;
        verify_that!(validator, self.age)?
            .is_in_range(
                18,
                130,
                ErrorMessage::new("must be between {0} and {1}").with_args([18, 130]),
            )?;
        verify_that!(validator, self.referrer)?
            .is_not_null("is required")
            .has_min_length(3, "is too short");
        Ok(())
    }
}

fn main() -> Result<(), SpecificationError> {
    let valid = Signup {
        email: "ada@example.com".to_owned(),
        age: 36,
        referrer: Some("babbage".to_owned()),
    };
    match valid.validate()?.into_result() {
        Ok(()) => println!("✓ first signup is valid"),
        Err(tree) => print!("✗ first signup is invalid:\n{tree}"),
    }

    let invalid = Signup {
        email: "not-an-email".to_owned(),
        age: 15,
        referrer: None,
    };
    let tree = invalid.validate()?;
    print!("✗ second signup has {} errors:\n{tree}", tree.total_error_count());

    Ok(())
}
