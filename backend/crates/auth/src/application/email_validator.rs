//! Email Validator
//!
//! Standalone syntax check for email input, backed by an [`EmailSyntax`]
//! routine. The login flow does not call it.

use crate::domain::services::EmailSyntax;
use crate::error::{AuthError, AuthResult};
use crate::infra::email_syntax::BasicEmailSyntax;

pub struct EmailValidator<S = BasicEmailSyntax>
where
    S: EmailSyntax,
{
    syntax: S,
}

impl<S> EmailValidator<S>
where
    S: EmailSyntax,
{
    pub fn new(syntax: S) -> Self {
        Self { syntax }
    }

    /// `Err(MissingParam("email"))` when absent or empty, otherwise the
    /// routine's verdict.
    pub fn is_valid(&self, email: Option<&str>) -> AuthResult<bool> {
        let email = email
            .filter(|e| !e.is_empty())
            .ok_or(AuthError::MissingParam("email"))?;
        Ok(self.syntax.is_email(email))
    }
}

impl Default for EmailValidator<BasicEmailSyntax> {
    fn default() -> Self {
        Self::new(BasicEmailSyntax)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::EmailSyntaxSpy;

    #[test]
    fn test_returns_true_when_routine_accepts() {
        let sut = EmailValidator::new(EmailSyntaxSpy::returning(true));
        assert!(sut.is_valid(Some("valid_email@mail.com")).unwrap());
    }

    #[test]
    fn test_returns_false_when_routine_rejects() {
        let sut = EmailValidator::new(EmailSyntaxSpy::returning(false));
        assert!(!sut.is_valid(Some("invalid_email@mail.com")).unwrap());
    }

    #[test]
    fn test_calls_routine_with_correct_email() {
        let sut = EmailValidator::new(EmailSyntaxSpy::returning(true));
        sut.is_valid(Some("any_email@mail.com")).unwrap();
        assert_eq!(sut.syntax.email().as_deref(), Some("any_email@mail.com"));
    }

    #[test]
    fn test_missing_email_is_rejected() {
        let sut = EmailValidator::new(EmailSyntaxSpy::returning(true));
        assert!(matches!(
            sut.is_valid(None),
            Err(AuthError::MissingParam("email"))
        ));
        assert!(matches!(
            sut.is_valid(Some("")),
            Err(AuthError::MissingParam("email"))
        ));
        assert!(sut.syntax.email().is_none());
    }

    #[test]
    fn test_default_routine() {
        let sut = EmailValidator::default();
        assert!(sut.is_valid(Some("valid_email@mail.com")).unwrap());
        assert!(!sut.is_valid(Some("invalid_email")).unwrap());
    }
}
