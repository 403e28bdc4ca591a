//! Username validation for lookup and update requests

use super::ValidationError;

/// Non-empty username taken from a request.
///
/// No length or charset rules apply: any name the index accepts must stay
/// reachable over HTTP, and unknown names resolve to 404 in the index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Create a username, rejecting empty input.
    ///
    /// # Example
    /// ```
    /// use rankctl_server::models::Username;
    ///
    /// assert!(Username::new("user_42").is_ok());
    /// assert!(Username::new("").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "username" });
        }

        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_seeded_names() {
        assert!(Username::new("user_1").is_ok());
        assert!(Username::new("Ünïcode name").is_ok());
    }

    #[test]
    fn rejects_empty() {
        let err = Username::new("").unwrap_err();
        assert!(matches!(err, ValidationError::Empty { .. }));
    }

    #[test]
    fn long_names_pass_through() {
        let name = "a".repeat(500);
        assert_eq!(Username::new(&name).unwrap().as_str(), name);
    }
}
