//! Which status changes an order accepts, and which of them a given role may make.
//!
//! `pending` has no entry in the table: nobody moves an order out of `pending`
//! from the status dialog, the backend confirms it.

use crate::errors::KitchenError;
use crate::types::order_status::OrderStatus;
use crate::types::role::Role;
use std::collections::BTreeSet;

/// Raw lookup in the transition table.
pub fn next_statuses(current: OrderStatus) -> &'static [OrderStatus] {
    match current {
        OrderStatus::Confirmed => &[OrderStatus::Preparing, OrderStatus::Cancelled],
        OrderStatus::Preparing => &[OrderStatus::Ready, OrderStatus::Cancelled],
        OrderStatus::Ready => &[OrderStatus::InDelivery, OrderStatus::Cancelled],
        OrderStatus::InDelivery => &[OrderStatus::Delivered, OrderStatus::Cancelled],
        OrderStatus::Pending | OrderStatus::Delivered | OrderStatus::Cancelled => &[],
    }
}

/// Statuses `role` may move an order to from `current`. Empty disables the action.
pub fn allowed_next_statuses(current: OrderStatus, role: Role) -> BTreeSet<OrderStatus> {
    let reachable = next_statuses(current);
    role.candidate_statuses()
        .iter()
        .copied()
        .filter(|status| reachable.contains(status))
        .collect()
}

pub fn validate_transition(current: OrderStatus, proposed: OrderStatus) -> Result<(), KitchenError> {
    if next_statuses(current).contains(&proposed) {
        Ok(())
    } else {
        Err(KitchenError::InvalidTransition {
            from: current,
            to: proposed,
        })
    }
}

/// Like [`validate_transition`] but also rejects statuses outside the role's candidates.
pub fn validate_transition_for(
    role: Role,
    current: OrderStatus,
    proposed: OrderStatus,
) -> Result<(), KitchenError> {
    if allowed_next_statuses(current, role).contains(&proposed) {
        Ok(())
    } else {
        Err(KitchenError::InvalidTransition {
            from: current,
            to: proposed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ntest::test_case;

    fn parse(status: &str) -> OrderStatus {
        status.parse().unwrap()
    }

    #[test_case("confirmed")]
    #[test_case("preparing")]
    #[test_case("ready")]
    #[test_case("in-delivery")]
    fn allowed_is_role_candidates_intersected_with_table(current: &str) {
        let current = parse(current);
        for role in Role::ALL {
            let expected: BTreeSet<OrderStatus> = role
                .candidate_statuses()
                .iter()
                .filter(|s| next_statuses(current).contains(s))
                .copied()
                .collect();
            assert_eq!(allowed_next_statuses(current, role), expected, "{role}");
        }
    }

    #[test]
    fn table_rows() {
        use OrderStatus::*;
        assert_eq!(next_statuses(Confirmed), &[Preparing, Cancelled]);
        assert_eq!(next_statuses(Preparing), &[Ready, Cancelled]);
        assert_eq!(next_statuses(Ready), &[InDelivery, Cancelled]);
        assert_eq!(next_statuses(InDelivery), &[Delivered, Cancelled]);
        assert!(next_statuses(Pending).is_empty());
        assert!(next_statuses(Delivered).is_empty());
        assert!(next_statuses(Cancelled).is_empty());
    }

    #[test_case("delivered")]
    #[test_case("cancelled")]
    fn terminal_statuses_allow_nothing(current: &str) {
        let current = parse(current);
        for role in Role::ALL {
            assert!(allowed_next_statuses(current, role).is_empty());
        }
        for proposed in OrderStatus::ALL {
            assert!(validate_transition(current, proposed).is_err());
        }
    }

    #[test]
    fn pending_has_no_outgoing_moves() {
        for role in Role::ALL {
            assert!(allowed_next_statuses(OrderStatus::Pending, role).is_empty());
        }
        assert!(validate_transition(OrderStatus::Pending, OrderStatus::Confirmed).is_err());
    }

    #[test]
    fn concrete_role_options() {
        assert_eq!(
            allowed_next_statuses(OrderStatus::Ready, Role::Rider)
                .into_iter()
                .collect::<Vec<_>>(),
            vec![OrderStatus::InDelivery, OrderStatus::Cancelled]
        );
        assert_eq!(
            allowed_next_statuses(OrderStatus::Ready, Role::Chef)
                .into_iter()
                .collect::<Vec<_>>(),
            vec![OrderStatus::Cancelled]
        );
        assert_eq!(
            allowed_next_statuses(OrderStatus::Confirmed, Role::Admin)
                .into_iter()
                .collect::<Vec<_>>(),
            vec![OrderStatus::Preparing, OrderStatus::Cancelled]
        );
        assert!(allowed_next_statuses(OrderStatus::Preparing, Role::User).is_empty());
    }

    #[test]
    fn preparing_to_ready_is_accepted() {
        assert_eq!(
            validate_transition(OrderStatus::Preparing, OrderStatus::Ready),
            Ok(())
        );
    }

    #[test]
    fn preparing_to_delivered_names_both_statuses() {
        let err = validate_transition(OrderStatus::Preparing, OrderStatus::Delivered).unwrap_err();
        assert_eq!(
            err,
            KitchenError::InvalidTransition {
                from: OrderStatus::Preparing,
                to: OrderStatus::Delivered,
            }
        );
        let message = err.to_string();
        assert!(message.contains("preparing"));
        assert!(message.contains("delivered"));
    }

    #[test]
    fn role_check_rejects_table_valid_moves() {
        assert!(validate_transition(OrderStatus::Ready, OrderStatus::InDelivery).is_ok());
        assert!(
            validate_transition_for(Role::Chef, OrderStatus::Ready, OrderStatus::InDelivery)
                .is_err()
        );
        assert!(
            validate_transition_for(Role::Rider, OrderStatus::Ready, OrderStatus::InDelivery)
                .is_ok()
        );
    }
}
