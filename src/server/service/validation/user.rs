use crate::server::{
    model::user::{NewUser, SignupParams},
    service::validation::{greater_than_or_equal_to, require_present, FieldErrors, TAKEN},
};

pub const MIN_AGE: i32 = 0;

/// Validates signup values. `email_taken` reports whether the e-mail is already registered.
pub fn validate(params: &SignupParams, email_taken: bool) -> Result<NewUser, FieldErrors> {
    let mut errors = FieldErrors::new();

    let email = require_present(&mut errors, "email", params.email.clone());
    if email.is_some() && email_taken {
        errors.add("email", TAKEN);
    }

    let password = require_present(&mut errors, "password", params.password.clone());

    if params.age.is_some_and(|age| age < MIN_AGE) {
        errors.add("age", greater_than_or_equal_to(MIN_AGE));
    }

    match (email, password) {
        (Some(email), Some(password)) if errors.is_empty() => Ok(NewUser {
            email,
            password,
            age: params.age,
        }),
        _ => Err(errors),
    }
}
