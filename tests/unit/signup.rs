// Unit tests focus on pure validation logic, with the email capability
// replaced by test doubles

use signup_backend::email::EmailValidator;
use signup_backend::models::signup::SignUpRequest;
use signup_backend::validation::signup::{SignUpError, SignUpValidation};
use std::sync::{Arc, Mutex};

struct EmailValidatorStub {
    answer: bool,
}

impl EmailValidator for EmailValidatorStub {
    fn is_valid(&self, _email: &str) -> bool {
        self.answer
    }
}

/// Spy double: records every argument it is called with.
struct EmailValidatorSpy {
    answer: bool,
    calls: Mutex<Vec<String>>,
}

impl EmailValidatorSpy {
    fn new(answer: bool) -> Self {
        Self {
            answer,
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl EmailValidator for EmailValidatorSpy {
    fn is_valid(&self, email: &str) -> bool {
        self.calls.lock().unwrap().push(email.to_string());
        self.answer
    }
}

fn make_validation(answer: bool) -> SignUpValidation {
    SignUpValidation::new(Arc::new(EmailValidatorStub { answer }))
}

fn body(
    name: Option<&str>,
    email: Option<&str>,
    password: Option<&str>,
    password_confirm: Option<&str>,
) -> SignUpRequest {
    SignUpRequest {
        name: name.map(String::from),
        email: email.map(String::from),
        password: password.map(String::from),
        password_confirm: password_confirm.map(String::from),
    }
}

#[test]
fn rejects_missing_name() {
    let validation = make_validation(true);
    let req = body(
        None,
        Some("_any_email"),
        Some("_any_password"),
        Some("_any_password"),
    );
    assert_eq!(validation.check(&req), Err(SignUpError::MissingParam("name")));
}

#[test]
fn rejects_missing_email() {
    let validation = make_validation(true);
    let req = body(
        Some("_any_name"),
        None,
        Some("_any_password"),
        Some("_any_password"),
    );
    assert_eq!(validation.check(&req), Err(SignUpError::MissingParam("email")));
}

#[test]
fn rejects_missing_password() {
    let validation = make_validation(true);
    let req = body(
        Some("_any_name"),
        Some("_any_email"),
        None,
        Some("_any_password"),
    );
    assert_eq!(validation.check(&req), Err(SignUpError::MissingParam("password")));
}

#[test]
fn rejects_missing_password_confirm() {
    let validation = make_validation(true);
    let req = body(
        Some("_any_name"),
        Some("_any_email"),
        Some("_any_password"),
        None,
    );
    assert_eq!(
        validation.check(&req),
        Err(SignUpError::MissingParam("passwordConfirm"))
    );
}

#[test]
fn earliest_missing_field_wins() {
    let validation = make_validation(true);

    // everything missing: name is reported first
    assert_eq!(
        validation.check(&SignUpRequest::default()),
        Err(SignUpError::MissingParam("name"))
    );

    // name present, the rest missing: email comes next
    let req = body(Some("_any_name"), None, None, None);
    assert_eq!(validation.check(&req), Err(SignUpError::MissingParam("email")));

    let req = body(Some("_any_name"), Some("_any_email"), None, None);
    assert_eq!(validation.check(&req), Err(SignUpError::MissingParam("password")));
}

#[test]
fn treats_empty_strings_as_missing() {
    let validation = make_validation(true);

    let req = body(
        Some(""),
        Some("_any_email"),
        Some("_any_password"),
        Some("_any_password"),
    );
    assert_eq!(validation.check(&req), Err(SignUpError::MissingParam("name")));

    let req = body(
        Some("_any_name"),
        Some("_any_email"),
        Some("_any_password"),
        Some(""),
    );
    assert_eq!(
        validation.check(&req),
        Err(SignUpError::MissingParam("passwordConfirm"))
    );
}

#[test]
fn rejects_an_email_the_validator_refuses() {
    let validation = make_validation(false);
    let req = body(
        Some("_any_name"),
        Some("invalid_email@mail.com"),
        Some("any_password"),
        Some("_any_password"),
    );
    assert_eq!(validation.check(&req), Err(SignUpError::InvalidParam("email")));
}

#[test]
fn accepts_when_the_validator_approves() {
    let validation = make_validation(true);
    let req = body(
        Some("_any_name"),
        Some("_any_email"),
        Some("_any_password"),
        Some("_any_password"),
    );
    assert_eq!(validation.check(&req), Ok(()));
}

#[test]
fn passes_the_exact_email_to_the_validator_once() {
    let spy = Arc::new(EmailValidatorSpy::new(true));
    let validation = SignUpValidation::new(spy.clone());

    let req = body(
        Some("_any_name"),
        Some("any_email@mail.com"),
        Some("_any_password"),
        Some("_any_password"),
    );
    assert_eq!(validation.check(&req), Ok(()));

    let calls = spy.calls.lock().unwrap();
    assert_eq!(*calls, vec!["any_email@mail.com".to_string()]);
}

#[test]
fn skips_the_validator_entirely_when_a_field_is_missing() {
    let spy = Arc::new(EmailValidatorSpy::new(true));
    let validation = SignUpValidation::new(spy.clone());

    let req = body(
        None,
        Some("_any_email"),
        Some("_any_password"),
        Some("_any_password"),
    );
    assert_eq!(validation.check(&req), Err(SignUpError::MissingParam("name")));
    assert!(spy.calls.lock().unwrap().is_empty());
}
