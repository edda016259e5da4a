//! Разделы приложения: заголовок вкладки, иконка, группа меню, минимальная роль.

use contracts::enums::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub key: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub group: &'static str,
    pub min_role: Role,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        key: "a004_ticket",
        label: "Tickets",
        icon: "tickets",
        group: "Work",
        min_role: Role::User,
    },
    NavItem {
        key: "a005_time_entry",
        label: "Timesheets",
        icon: "timesheets",
        group: "Work",
        min_role: Role::User,
    },
    NavItem {
        key: "a001_organization",
        label: "Organizations",
        icon: "organizations",
        group: "References",
        min_role: Role::Manager,
    },
    NavItem {
        key: "a002_customer",
        label: "Customers",
        icon: "customers",
        group: "References",
        min_role: Role::Manager,
    },
    NavItem {
        key: "sys_users",
        label: "Users",
        icon: "users",
        group: "Administration",
        min_role: Role::Manager,
    },
];

/// Заголовок вкладки; пустая строка для неизвестного ключа
pub fn tab_label_for_key(key: &str) -> &'static str {
    NAV_ITEMS
        .iter()
        .find(|item| item.key == key)
        .map(|item| item.label)
        .unwrap_or("")
}

/// Menu groups in display order, each with the items `role` may open
pub fn menu_for(role: Role) -> Vec<(&'static str, Vec<NavItem>)> {
    let mut groups: Vec<(&'static str, Vec<NavItem>)> = Vec::new();
    for item in NAV_ITEMS.iter().filter(|item| role.has_role(item.min_role)) {
        match groups.iter_mut().find(|(group, _)| *group == item.group) {
            Some((_, items)) => items.push(*item),
            None => groups.push((item.group, vec![*item])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_resolve_known_keys_only() {
        assert_eq!(tab_label_for_key("a005_time_entry"), "Timesheets");
        assert_eq!(tab_label_for_key("p900_sales_register"), "");
    }

    #[test]
    fn test_menu_hides_manager_sections_from_users() {
        let user_menu = menu_for(Role::User);
        assert_eq!(user_menu.len(), 1);
        assert_eq!(user_menu[0].0, "Work");
        assert_eq!(user_menu[0].1.len(), 2);

        let manager_menu = menu_for(Role::Manager);
        let groups: Vec<_> = manager_menu.iter().map(|(group, _)| *group).collect();
        assert_eq!(groups, vec!["Work", "References", "Administration"]);
    }
}
