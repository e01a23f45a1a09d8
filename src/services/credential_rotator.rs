use std::fmt;

/// An API key for the model endpoint. Debug output never shows the key.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(key: impl Into<String>) -> Self {
        Credential(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let skip = self.0.chars().count().saturating_sub(4);
        let tail: String = self.0.chars().skip(skip).collect();
        write!(f, "Credential(…{})", tail)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CredentialPoolError {
    #[error("Credential pool needs at least one non-empty API key")]
    Empty,
}

/// Round-robin over a fixed set of keys. The cursor is always a valid index.
#[derive(Debug)]
pub struct CredentialPool {
    credentials: Vec<Credential>,
    cursor: usize,
}

impl CredentialPool {
    pub fn new<I, S>(keys: I) -> Result<Self, CredentialPoolError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let credentials: Vec<Credential> = keys
            .into_iter()
            .map(|key| {
                let key: String = key.into();
                key.trim().to_string()
            })
            .filter(|key| !key.is_empty())
            .map(Credential)
            .collect();

        if credentials.is_empty() {
            return Err(CredentialPoolError::Empty);
        }

        Ok(CredentialPool {
            credentials,
            cursor: 0,
        })
    }

    /// Hands out the key under the cursor and moves the cursor on, wrapping.
    pub fn next_credential(&mut self) -> Credential {
        let credential = self.credentials[self.cursor].clone();
        self.cursor = (self.cursor + 1) % self.credentials.len();
        credential
    }

    pub fn key_count(&self) -> usize {
        self.credentials.len()
    }
}
