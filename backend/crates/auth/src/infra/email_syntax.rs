use crate::domain::services::EmailSyntax;
use crate::domain::value_object::email::Email;

/// Structural email check shared with the [`Email`] value object
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicEmailSyntax;

impl EmailSyntax for BasicEmailSyntax {
    fn is_email(&self, email: &str) -> bool {
        Email::is_valid_format(email.trim())
    }
}
