/// The single admin subject, established after a token passed the owner gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerIdentity {
    pub subject: String,
}

impl OwnerIdentity {
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
        }
    }
}
