//! In-memory table model behind the account list screens.
//!
//! Holds the fetched rows plus the UI state: a fixed role filter, a live
//! search term matched case-insensitively against the full name, and a name
//! sort direction.

use uuid::Uuid;

use sd_core::domain::entities::account::Role;
use sd_core::domain::value_objects::account_view::AccountView;

/// Name sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Ascending by full name
    #[default]
    Az,
    /// Descending by full name
    Za,
}

/// Table model for one role's account list
#[derive(Debug)]
pub struct AccountTable {
    role: Role,
    rows: Vec<AccountView>,
    search: String,
    sort: SortOrder,
    current_id: Option<Uuid>,
}

impl AccountTable {
    /// Create an empty table showing accounts with the given role
    pub fn new(role: Role) -> Self {
        Self {
            role,
            rows: Vec::new(),
            search: String::new(),
            sort: SortOrder::default(),
            current_id: None,
        }
    }

    /// Role this table is fixed to
    pub fn role(&self) -> Role {
        self.role
    }

    /// Replace the backing rows, e.g. after a fetch
    pub fn set_rows(&mut self, rows: Vec<AccountView>) {
        self.rows = rows;
    }

    /// Remember the caller's own account id for the delete guard
    pub fn set_current_id(&mut self, id: Uuid) {
        self.current_id = Some(id);
    }

    /// Update the live search term
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    /// Update the sort direction
    pub fn set_sort(&mut self, sort: SortOrder) {
        self.sort = sort;
    }

    /// Whether deleting the given account is allowed from this view
    pub fn can_delete(&self, id: Uuid) -> bool {
        self.current_id != Some(id)
    }

    /// Rows after role filter, search and sort
    pub fn visible_rows(&self) -> Vec<&AccountView> {
        let needle = self.search.to_lowercase();

        let mut rows: Vec<&AccountView> = self
            .rows
            .iter()
            .filter(|row| row.role == self.role)
            .filter(|row| needle.is_empty() || row.full_name.to_lowercase().contains(&needle))
            .collect();

        rows.sort_by(|a, b| {
            let ordering = a
                .full_name
                .to_lowercase()
                .cmp(&b.full_name.to_lowercase());
            match self.sort {
                SortOrder::Az => ordering,
                SortOrder::Za => ordering.reverse(),
            }
        });

        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn view(full_name: &str, role: Role) -> AccountView {
        AccountView {
            id: Uuid::new_v4(),
            full_name: full_name.to_string(),
            email: format!("{}@example.com", full_name.to_lowercase().replace(' ', ".")),
            contact_number: "09171234567".to_string(),
            role,
            is_temporary_password: false,
            is_verified: true,
            valid_id_url: None,
            resume_url: None,
            created_at: Utc::now(),
        }
    }

    fn staff_table() -> AccountTable {
        let mut table = AccountTable::new(Role::Staff);
        table.set_rows(vec![
            view("Ana Santos", Role::Staff),
            view("Bianca Cruz", Role::Staff),
            view("Juan Dela Cruz", Role::Staff),
            view("Armando Reyes", Role::Admin),
        ]);
        table
    }

    #[test]
    fn test_role_filter_is_fixed() {
        let table = staff_table();
        let names: Vec<&str> = table
            .visible_rows()
            .iter()
            .map(|r| r.full_name.as_str())
            .collect();
        // The admin row is never shown in the staff table
        assert_eq!(names, vec!["Ana Santos", "Bianca Cruz", "Juan Dela Cruz"]);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let mut table = staff_table();
        table.set_search("an");

        let names: Vec<&str> = table
            .visible_rows()
            .iter()
            .map(|r| r.full_name.as_str())
            .collect();
        assert_eq!(names, vec!["Ana Santos", "Bianca Cruz", "Juan Dela Cruz"]);

        table.set_search("ANA");
        let names: Vec<&str> = table
            .visible_rows()
            .iter()
            .map(|r| r.full_name.as_str())
            .collect();
        assert_eq!(names, vec!["Ana Santos"]);

        table.set_search("zzz");
        assert!(table.visible_rows().is_empty());
    }

    #[test]
    fn test_sort_directions() {
        let mut table = staff_table();

        table.set_sort(SortOrder::Az);
        let names: Vec<&str> = table
            .visible_rows()
            .iter()
            .map(|r| r.full_name.as_str())
            .collect();
        assert_eq!(names, vec!["Ana Santos", "Bianca Cruz", "Juan Dela Cruz"]);

        table.set_sort(SortOrder::Za);
        let names: Vec<&str> = table
            .visible_rows()
            .iter()
            .map(|r| r.full_name.as_str())
            .collect();
        assert_eq!(names, vec!["Juan Dela Cruz", "Bianca Cruz", "Ana Santos"]);
    }

    #[test]
    fn test_self_delete_guard() {
        let mut table = staff_table();
        let own_id = table.visible_rows()[0].id;
        let other_id = table.visible_rows()[1].id;

        table.set_current_id(own_id);
        assert!(!table.can_delete(own_id));
        assert!(table.can_delete(other_id));
    }
}
