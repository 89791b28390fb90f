use crate::domain::contact::Contact;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContactStats {
    pub total: usize,
    pub with_email: usize,
    pub without_email: usize,
}

impl ContactStats {
    pub fn of(contacts: &[Contact]) -> Self {
        let with_email = contacts.iter().filter(|c| c.has_email()).count();

        Self {
            total: contacts.len(),
            with_email,
            without_email: contacts.len() - with_email,
        }
    }
}
