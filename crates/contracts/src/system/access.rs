//! Ролевая видимость действий над записью.
//!
//! `can_perform` is evaluated on every render for every row, from the current
//! session user and the record's department, creator and assignee. It does no
//! I/O; the server still enforces the same rules.

use crate::enums::{Department, Role};
use crate::system::auth::UserInfo;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    View,
    Edit,
    Delete,
    Assign,
    ChangeStatus,
}

impl Action {
    pub fn all() -> [Action; 5] {
        [
            Action::View,
            Action::Edit,
            Action::Delete,
            Action::Assign,
            Action::ChangeStatus,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Action::View => "View",
            Action::Edit => "Edit",
            Action::Delete => "Delete",
            Action::Assign => "Assign",
            Action::ChangeStatus => "Change status",
        }
    }
}

/// Входные данные ACL, которые запись предоставляет предикату
pub trait AccessSubject {
    fn subject_id(&self) -> &str;

    /// `None` for records that are not department scoped.
    fn department(&self) -> Option<Department>;

    fn created_by(&self) -> Option<&str>;

    fn assigned_to(&self) -> Option<&str> {
        None
    }

    /// Only assignable records grant rights to their assignee.
    fn is_assignable(&self) -> bool {
        false
    }
}

fn is_creator<R: AccessSubject + ?Sized>(record: &R, user: &UserInfo) -> bool {
    record.created_by() == Some(user.id.as_str())
}

fn is_assignee<R: AccessSubject + ?Sized>(record: &R, user: &UserInfo) -> bool {
    record.is_assignable() && record.assigned_to() == Some(user.id.as_str())
}

/// Rights of a plain user: own (created or assigned) records, never delete
/// or assign.
fn owner_rights<R: AccessSubject + ?Sized>(action: Action, record: &R, user: &UserInfo) -> bool {
    match action {
        Action::View | Action::Edit | Action::ChangeStatus => {
            is_creator(record, user) || is_assignee(record, user)
        }
        Action::Delete | Action::Assign => false,
    }
}

pub fn can_perform<R: AccessSubject + ?Sized>(action: Action, record: &R, user: &UserInfo) -> bool {
    // Nobody deletes or deactivates themselves, admins included.
    if matches!(action, Action::Delete | Action::ChangeStatus) && record.subject_id() == user.id {
        return false;
    }

    match user.role {
        Role::Admin => true,
        Role::Manager => {
            let in_scope = match record.department() {
                None => true,
                Some(department) => user.department == Some(department),
            };
            // Чужой отдел: только просмотр своих записей
            in_scope
                || (action == Action::View && (is_creator(record, user) || is_assignee(record, user)))
        }
        Role::User => owner_rights(action, record, user),
    }
}

/// Permitted actions in display order, for rendering a row's action column.
pub fn visible_actions<R: AccessSubject + ?Sized>(record: &R, user: &UserInfo) -> Vec<Action> {
    Action::all()
        .into_iter()
        .filter(|action| can_perform(*action, record, user))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Subject {
        id: &'static str,
        department: Option<Department>,
        created_by: Option<&'static str>,
        assigned_to: Option<&'static str>,
        assignable: bool,
    }

    impl AccessSubject for Subject {
        fn subject_id(&self) -> &str {
            self.id
        }
        fn department(&self) -> Option<Department> {
            self.department
        }
        fn created_by(&self) -> Option<&str> {
            self.created_by
        }
        fn assigned_to(&self) -> Option<&str> {
            self.assigned_to
        }
        fn is_assignable(&self) -> bool {
            self.assignable
        }
    }

    fn ticket(department: Department, created_by: &'static str, assigned_to: Option<&'static str>) -> Subject {
        Subject {
            id: "t-1",
            department: Some(department),
            created_by: Some(created_by),
            assigned_to,
            assignable: true,
        }
    }

    fn user(id: &str, role: Role, department: Option<Department>) -> UserInfo {
        UserInfo {
            id: id.to_string(),
            username: id.to_string(),
            full_name: None,
            email: None,
            role,
            department,
            is_active: true,
        }
    }

    #[test]
    fn test_admin_can_do_everything_except_self_destruct() {
        let admin = user("a-1", Role::Admin, None);
        let record = ticket(Department::Hr, "someone", None);
        assert_eq!(visible_actions(&record, &admin), Action::all().to_vec());

        let own_account = Subject {
            id: "a-1",
            department: Some(Department::It),
            created_by: None,
            assigned_to: None,
            assignable: false,
        };
        assert!(!can_perform(Action::Delete, &own_account, &admin));
        assert!(!can_perform(Action::ChangeStatus, &own_account, &admin));
        assert!(can_perform(Action::Edit, &own_account, &admin));
    }

    #[test]
    fn test_manager_is_scoped_to_department() {
        let manager = user("m-1", Role::Manager, Some(Department::It));

        let hr_ticket = ticket(Department::Hr, "u-9", Some("u-8"));
        assert!(!can_perform(Action::Edit, &hr_ticket, &manager));
        assert!(!can_perform(Action::Delete, &hr_ticket, &manager));
        assert!(!can_perform(Action::View, &hr_ticket, &manager));

        let it_ticket = ticket(Department::It, "u-9", None);
        assert!(can_perform(Action::Edit, &it_ticket, &manager));
        assert!(can_perform(Action::Delete, &it_ticket, &manager));
        assert!(can_perform(Action::Assign, &it_ticket, &manager));
    }

    #[test]
    fn test_manager_keeps_view_on_foreign_ticket_assigned_to_them() {
        let manager = user("m-1", Role::Manager, Some(Department::It));
        let hr_ticket = ticket(Department::Hr, "u-9", Some("m-1"));
        assert!(can_perform(Action::View, &hr_ticket, &manager));
        assert!(!can_perform(Action::Edit, &hr_ticket, &manager));
        assert!(!can_perform(Action::ChangeStatus, &hr_ticket, &manager));
        assert!(!can_perform(Action::Delete, &hr_ticket, &manager));
        assert!(!can_perform(Action::Assign, &hr_ticket, &manager));
        assert_eq!(visible_actions(&hr_ticket, &manager), vec![Action::View]);

        let created_in_hr = ticket(Department::Hr, "m-1", None);
        assert_eq!(visible_actions(&created_in_hr, &manager), vec![Action::View]);
    }

    #[test]
    fn test_department_less_records_are_not_scoped() {
        let manager = user("m-1", Role::Manager, Some(Department::Sales));
        let organization = Subject {
            id: "org-1",
            department: None,
            created_by: Some("a-1"),
            assigned_to: None,
            assignable: false,
        };
        assert!(can_perform(Action::Edit, &organization, &manager));
        assert!(can_perform(Action::Delete, &organization, &manager));
    }

    #[test]
    fn test_user_works_on_own_records_only() {
        let me = user("u-1", Role::User, Some(Department::It));

        let mine = ticket(Department::It, "u-1", None);
        assert!(can_perform(Action::View, &mine, &me));
        assert!(can_perform(Action::Edit, &mine, &me));
        assert!(can_perform(Action::ChangeStatus, &mine, &me));
        assert!(!can_perform(Action::Delete, &mine, &me));
        assert!(!can_perform(Action::Assign, &mine, &me));

        let assigned = ticket(Department::Hr, "u-2", Some("u-1"));
        assert_eq!(
            visible_actions(&assigned, &me),
            vec![Action::View, Action::Edit, Action::ChangeStatus]
        );

        let foreign = ticket(Department::It, "u-2", Some("u-3"));
        assert!(visible_actions(&foreign, &me).is_empty());
    }

    #[test]
    fn test_assignee_of_non_assignable_record_gets_nothing() {
        let me = user("u-1", Role::User, None);
        let record = Subject {
            id: "x",
            department: None,
            created_by: Some("u-2"),
            assigned_to: Some("u-1"),
            assignable: false,
        };
        assert!(!can_perform(Action::View, &record, &me));
    }
}
