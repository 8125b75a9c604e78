use crate::types::order_status::OrderStatus;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Clasificación del usuario que actúa sobre un pedido.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Chef,
    Employee,
    Rider,
    User,
}

impl Role {
    pub const ALL: [Role; 5] = [Role::Admin, Role::Chef, Role::Employee, Role::Rider, Role::User];

    /// Statuses this role may ever set, before looking at the current status.
    pub const fn candidate_statuses(self) -> &'static [OrderStatus] {
        match self {
            Role::Admin => &[
                OrderStatus::Preparing,
                OrderStatus::Ready,
                OrderStatus::InDelivery,
                OrderStatus::Delivered,
                OrderStatus::Cancelled,
            ],
            Role::Chef | Role::Employee => &[
                OrderStatus::Preparing,
                OrderStatus::Ready,
                OrderStatus::Cancelled,
            ],
            Role::Rider => &[
                OrderStatus::InDelivery,
                OrderStatus::Delivered,
                OrderStatus::Cancelled,
            ],
            Role::User => &[],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Chef => "chef",
            Role::Employee => "employee",
            Role::Rider => "rider",
            Role::User => "user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown role '{}'", self.0)
    }
}

impl std::error::Error for UnknownRole {}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == wanted)
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_has_no_candidates() {
        assert!(Role::User.candidate_statuses().is_empty());
    }

    #[test]
    fn chef_and_employee_share_candidates() {
        assert_eq!(
            Role::Chef.candidate_statuses(),
            Role::Employee.candidate_statuses()
        );
    }

    #[test]
    fn parses_roles_case_insensitively() {
        assert_eq!("Rider".parse::<Role>(), Ok(Role::Rider));
        assert_eq!(" admin ".parse::<Role>(), Ok(Role::Admin));
        assert!("courier".parse::<Role>().is_err());
    }
}
