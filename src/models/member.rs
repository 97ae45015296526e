use serde::{Deserialize, Serialize};

/// A person on the roster who is allowed to check in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    #[serde(default)]
    pub role: String,
}

impl Member {
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
        }
    }

    /// Build a member from one roster row (column A = name, column B = role).
    ///
    /// The Sheets API drops trailing empty cells, so a row may hold a single
    /// value; the role then defaults to empty. Rows without a name are skipped.
    pub fn from_row(row: &[String]) -> Option<Self> {
        let name = row.first().map(|s| s.trim()).unwrap_or("");
        if name.is_empty() {
            return None;
        }
        let role = row.get(1).map(|s| s.trim()).unwrap_or("");
        Some(Self::new(name, role))
    }

    /// Dropdown label: "Alice (Staff)", or just the name when there is no role.
    pub fn label(&self) -> String {
        if self.role.is_empty() {
            self.name.clone()
        } else {
            format!("{} ({})", self.name, self.role)
        }
    }
}

/// Map raw roster rows to members, dropping blank rows.
pub fn from_rows(rows: &[Vec<String>]) -> Vec<Member> {
    rows.iter().filter_map(|row| Member::from_row(row)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_from_row_name_and_role() {
        let m = Member::from_row(&row(&["Alice", "Staff"])).expect("member");
        assert_eq!(m, Member::new("Alice", "Staff"));
    }

    #[test]
    fn test_from_row_missing_role_defaults_empty() {
        let m = Member::from_row(&row(&["Bob"])).expect("member");
        assert_eq!(m.role, "");
    }

    #[test]
    fn test_from_row_empty_role_defaults_empty() {
        let m = Member::from_row(&row(&["Carol", ""])).expect("member");
        assert_eq!(m.role, "");
    }

    #[test]
    fn test_from_row_blank_name_skipped() {
        assert!(Member::from_row(&row(&[])).is_none());
        assert!(Member::from_row(&row(&["  ", "Staff"])).is_none());
    }

    #[test]
    fn test_from_rows_keeps_order() {
        let rows = vec![row(&["Alice", "Staff"]), row(&[]), row(&["Bob"])];
        let members = from_rows(&rows);
        assert_eq!(members.len(), 2);
        assert_eq!(members[0].name, "Alice");
        assert_eq!(members[1].name, "Bob");
    }

    #[test]
    fn test_label() {
        assert_eq!(Member::new("Alice", "Staff").label(), "Alice (Staff)");
        assert_eq!(Member::new("Bob", "").label(), "Bob");
    }
}
