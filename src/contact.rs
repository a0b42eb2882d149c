use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{} is required", .0.label())]
    MissingField(Field),
    #[error("Message couldn't be delivered: {0}")]
    Delivery(String),
}

/// Whatever ends up carrying a submitted message to its recipient.
pub trait MessageDelivery {
    fn deliver(&self, message: &ContactMessage) -> Result<(), ContactError>;
}

/// Records the message in the log and nothing else. There is no backend to
/// receive contact messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDelivery;

impl MessageDelivery for LogDelivery {
    fn deliver(&self, message: &ContactMessage) -> Result<(), ContactError> {
        let record =
            serde_json::to_string(message).map_err(|e| ContactError::Delivery(e.to_string()))?;
        log::info!("contact message received: {record}");
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    fields: ContactMessage,
    submitted: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.fields.name,
            Field::Email => &self.fields.email,
            Field::Subject => &self.fields.subject,
            Field::Message => &self.fields.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.fields.name = value,
            Field::Email => self.fields.email = value,
            Field::Subject => self.fields.subject = value,
            Field::Message => self.fields.message = value,
        }
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Checks required fields the way the browser's `required` attribute
    /// does (non-empty, whitespace allowed) and hands the message over for
    /// delivery.
    /// A second submit while the confirmation is showing is ignored.
    pub fn submit(&mut self, delivery: &impl MessageDelivery) -> Result<bool, ContactError> {
        if self.submitted {
            return Ok(false);
        }
        if let Some(field) = Field::ALL
            .into_iter()
            .find(|f| self.get(*f).is_empty())
        {
            return Err(ContactError::MissingField(field));
        }
        delivery.deliver(&self.fields)?;
        self.submitted = true;
        Ok(true)
    }

    /// Ends the confirmation display and clears every field.
    pub fn finish(&mut self) {
        self.fields = ContactMessage::default();
        self.submitted = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Outbox(RefCell<Vec<ContactMessage>>);

    impl MessageDelivery for Outbox {
        fn deliver(&self, message: &ContactMessage) -> Result<(), ContactError> {
            self.0.borrow_mut().push(message.clone());
            Ok(())
        }
    }

    struct Broken;

    impl MessageDelivery for Broken {
        fn deliver(&self, _message: &ContactMessage) -> Result<(), ContactError> {
            Err(ContactError::Delivery("offline".to_string()))
        }
    }

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set(Field::Name, "Jane");
        form.set(Field::Email, "jane@example.com");
        form.set(Field::Subject, "Project Inquiry");
        form.set(Field::Message, "Hello there");
        form
    }

    #[test]
    fn test_submit_then_finish_clears_fields() {
        let outbox = Outbox::default();
        let mut form = filled();
        assert_eq!(form.submit(&outbox), Ok(true));
        assert!(form.is_submitted());
        assert_eq!(outbox.0.borrow().len(), 1);
        assert_eq!(outbox.0.borrow()[0].subject, "Project Inquiry");

        form.finish();
        assert!(!form.is_submitted());
        for field in Field::ALL {
            assert_eq!(form.get(field), "");
        }
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let mut form = filled();
        form.set(Field::Subject, "");
        assert_eq!(
            form.submit(&LogDelivery),
            Err(ContactError::MissingField(Field::Subject))
        );
        assert!(!form.is_submitted());
    }

    #[test]
    fn test_whitespace_satisfies_required_field() {
        let outbox = Outbox::default();
        let mut form = filled();
        form.set(Field::Subject, "   ");
        assert_eq!(form.submit(&outbox), Ok(true));
        assert_eq!(outbox.0.borrow()[0].subject, "   ");
    }

    #[test]
    fn test_log_delivery_records_message_as_json() {
        let form = filled();
        assert_eq!(LogDelivery.deliver(&form.fields), Ok(()));
        let record = serde_json::to_value(&form.fields).expect("message should serialize");
        assert_eq!(record["email"], "jane@example.com");
        assert_eq!(record["message"], "Hello there");
    }

    #[test]
    fn test_double_submit_is_ignored() {
        let outbox = Outbox::default();
        let mut form = filled();
        assert_eq!(form.submit(&outbox), Ok(true));
        assert_eq!(form.submit(&outbox), Ok(false));
        assert_eq!(outbox.0.borrow().len(), 1);
    }

    #[test]
    fn test_delivery_failure_keeps_fields() {
        let mut form = filled();
        assert!(matches!(form.submit(&Broken), Err(ContactError::Delivery(_))));
        assert!(!form.is_submitted());
        assert_eq!(form.get(Field::Name), "Jane");
    }
}
