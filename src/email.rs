use validator::ValidateEmail;

/// Email-format capability injected into the sign-up validation at
/// construction time. Implementations must be shareable across concurrent
/// requests; `is_valid` takes `&self` and must not mutate.
pub trait EmailValidator: Send + Sync {
    fn is_valid(&self, email: &str) -> bool;
}

/// Production implementation backed by the `validator` crate's email rules.
#[derive(Clone, Copy, Debug, Default)]
pub struct RfcEmailValidator;

impl EmailValidator for RfcEmailValidator {
    fn is_valid(&self, email: &str) -> bool {
        email.validate_email()
    }
}
