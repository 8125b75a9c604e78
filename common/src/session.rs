use crate::types::role::Role;

/// Who is operating the terminal. Built once at start-up and handed to the
/// actors and api clients that need it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
    pub display_name: String,
    pub role: Role,
    /// Token enviado como `Authorization: Bearer` al backend.
    pub auth_token: Option<String>,
}

impl Session {
    pub fn new(user_id: impl Into<String>, role: Role) -> Self {
        let user_id = user_id.into();
        Self {
            display_name: user_id.clone(),
            user_id,
            role,
            auth_token: None,
        }
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.auth_token = token.filter(|t| !t.trim().is_empty());
        self
    }

    pub fn can_change_status(&self) -> bool {
        !self.role.candidate_statuses().is_empty()
    }
}
