use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Phone,
    Subject,
    Message,
}

pub type FieldErrors = BTreeMap<Field, &'static str>;

const MIN_MESSAGE_LEN: usize = 10;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if self.name.trim().is_empty() {
            errors.insert(Field::Name, "Please enter your name.");
        }
        if let Some(msg) = check_email(&self.email) {
            errors.insert(Field::Email, msg);
        }
        if !self.phone.trim().is_empty() && !is_valid_phone(&self.phone) {
            errors.insert(Field::Phone, "Please enter a valid phone number.");
        }
        if self.subject.trim().is_empty() {
            errors.insert(Field::Subject, "Please choose a subject.");
        }
        if self.message.trim().chars().count() < MIN_MESSAGE_LEN {
            errors.insert(Field::Message, "Message must be at least 10 characters.");
        }
        errors
    }
}

/// Contact details attached to a quote request. Phone is required here.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QuoteContact {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
}

impl QuoteContact {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if self.name.trim().is_empty() {
            errors.insert(Field::Name, "Please enter your name.");
        }
        if let Some(msg) = check_email(&self.email) {
            errors.insert(Field::Email, msg);
        }
        if self.phone.trim().is_empty() {
            errors.insert(Field::Phone, "Please enter a phone number.");
        } else if !is_valid_phone(&self.phone) {
            errors.insert(Field::Phone, "Please enter a valid phone number.");
        }
        errors
    }
}

fn check_email(email: &str) -> Option<&'static str> {
    let email = email.trim();
    if email.is_empty() {
        Some("Please enter your email.")
    } else if !is_valid_email(email) {
        Some("Please enter a valid email address.")
    } else {
        None
    }
}

pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || email.chars().any(char::is_whitespace) {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && tld.len() >= 2 && !domain.starts_with('.'),
        None => false,
    }
}

/// 7 to 15 digits; spaces, dashes, dots, parentheses and a leading '+' allowed.
pub fn is_valid_phone(phone: &str) -> bool {
    let phone = phone.trim();
    let body = phone.strip_prefix('+').unwrap_or(phone);
    let mut digits = 0;
    for c in body.chars() {
        match c {
            '0'..='9' => digits += 1,
            ' ' | '-' | '.' | '(' | ')' => {}
            _ => return false,
        }
    }
    (7..=15).contains(&digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Mina Park".into(),
            email: "mina@example.com".into(),
            phone: "".into(),
            subject: "security".into(),
            message: "We need a night guard for our warehouse.".into(),
        }
    }

    #[test]
    fn complete_form_has_no_errors() {
        assert!(valid_form().validate().is_empty());
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let errors = ContactForm::default().validate();
        let fields: Vec<_> = errors.keys().copied().collect();
        assert_eq!(fields, vec![Field::Name, Field::Email, Field::Subject, Field::Message]);
    }

    #[test]
    fn short_message_is_rejected() {
        let form = ContactForm { message: "hi there".into(), ..valid_form() };
        assert!(form.validate().contains_key(&Field::Message));
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@mail.example.org"));
        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a@b.c"));
        assert!(!is_valid_email("a b@example.com"));
    }

    #[test]
    fn phone_shapes() {
        assert!(is_valid_phone("+82 10-1234-5678"));
        assert!(is_valid_phone("(02) 555 0100"));
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("call me maybe"));
        assert!(!is_valid_phone("1234567890123456"));
    }

    #[test]
    fn optional_phone_is_checked_when_present() {
        let form = ContactForm { phone: "12".into(), ..valid_form() };
        assert_eq!(form.validate().get(&Field::Phone), Some(&"Please enter a valid phone number."));
    }

    #[test]
    fn quote_contact_requires_phone() {
        let contact = QuoteContact {
            name: "Jo".into(),
            email: "jo@example.com".into(),
            phone: "".into(),
            company: "".into(),
        };
        assert_eq!(contact.validate().get(&Field::Phone), Some(&"Please enter a phone number."));
    }
}
