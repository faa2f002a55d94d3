//! Display models for the record screen: list rows, titles and dialog text.

use crate::{
    core::{Record, RecordId, ValidationError},
    form::FormMode,
};

pub const ACTIONS_HEADER: &str = "Actions";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: RecordId,
    pub cells: Vec<String>,
}

/// One row per record, in collection order.
#[derive(Debug)]
pub struct ListView<'a, R: Record> {
    records: &'a [R],
}

impl<'a, R: Record> ListView<'a, R> {
    pub fn new(records: &'a [R]) -> Self {
        Self { records }
    }

    pub fn title(&self) -> String {
        format!("{}s List", R::NOUN)
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Field labels followed by the actions column.
    pub fn header(&self) -> Vec<&'static str> {
        R::FIELDS
            .iter()
            .map(|&field| R::field_label(field))
            .chain(std::iter::once(ACTIONS_HEADER))
            .collect()
    }

    pub fn rows(&self) -> Vec<Row> {
        self.records
            .iter()
            .map(|record| Row {
                id: record.id().clone(),
                cells: R::FIELDS
                    .iter()
                    .map(|&field| record.field_value(field).to_string())
                    .collect(),
            })
            .collect()
    }
}

pub fn form_title<R: Record>(mode: &FormMode) -> String {
    match mode {
        FormMode::Creating => format!("Add {}", R::NOUN),
        FormMode::Editing(_) => format!("Edit {}", R::NOUN),
    }
}

pub fn submit_label<R: Record>(mode: &FormMode) -> String {
    match mode {
        FormMode::Creating => format!("Add {}", R::NOUN),
        FormMode::Editing(_) => format!("Update {}", R::NOUN),
    }
}

/// Content of a modal dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Invalid(ValidationError),
    Added,
    Updated,
    /// Asks to proceed or cancel.
    ConfirmDelete,
    Deleted,
}

impl Notice {
    pub fn title(&self) -> &'static str {
        match self {
            Notice::Invalid(_) => "Error",
            Notice::Added | Notice::Updated => "Success",
            Notice::ConfirmDelete => "Confirm Delete",
            Notice::Deleted => "Deleted",
        }
    }

    pub fn message<R: Record>(&self) -> String {
        let noun = R::NOUN;
        match self {
            Notice::Invalid(e) => e.to_string(),
            Notice::Added => format!("{noun} added!"),
            Notice::Updated => format!("{noun} updated!"),
            Notice::ConfirmDelete => format!(
                "Are you sure you want to delete this {}?",
                noun.to_lowercase()
            ),
            Notice::Deleted => format!("{noun} has been deleted."),
        }
    }

    pub fn is_confirmation(&self) -> bool {
        matches!(self, Notice::ConfirmDelete)
    }
}

fn format_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}

/// Renders the list as a fixed-width text table.
pub fn render_table<R: Record>(view: &ListView<'_, R>) -> String {
    let header: Vec<&str> = view.header()[..R::FIELDS.len()].to_vec();
    let rows = view.rows();

    let widths: Vec<usize> = header
        .iter()
        .enumerate()
        .map(|(i, label)| {
            rows.iter()
                .map(|row| row.cells[i].chars().count())
                .chain(std::iter::once(label.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    out.push_str(&view.title());
    out.push('\n');
    if view.is_empty() {
        out.push_str(&format!("(no {}s)\n", R::NOUN.to_lowercase()));
        return out;
    }
    out.push_str(&format_line(header.iter().copied(), &widths));
    out.push('\n');
    out.push_str(
        &widths
            .iter()
            .map(|&w| "-".repeat(w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    out.push('\n');
    for row in &rows {
        out.push_str(&format_line(row.cells.iter().map(String::as_str), &widths));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Item, User};

    fn user(id: &str, first: &str) -> User {
        User {
            id: RecordId::from(id),
            first_name: first.into(),
            last_name: "Doe".into(),
            phone: "555".into(),
            email: "x@y.io".into(),
        }
    }

    #[test]
    fn header_and_rows_follow_fields() {
        let users = vec![user("1", "Ann"), user("2", "Bob")];
        let view = ListView::new(&users);
        assert_eq!(
            view.header(),
            vec!["First Name", "Last Name", "Phone", "Email", "Actions"]
        );
        let rows = view.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].id, RecordId::from("2"));
        assert_eq!(rows[1].cells, vec!["Bob", "Doe", "555", "x@y.io"]);
        assert_eq!(view.title(), "Users List");
    }

    #[test]
    fn titles_follow_mode() {
        let editing = FormMode::Editing(RecordId::from("1"));
        assert_eq!(form_title::<User>(&FormMode::Creating), "Add User");
        assert_eq!(form_title::<User>(&editing), "Edit User");
        assert_eq!(submit_label::<User>(&editing), "Update User");
        assert_eq!(submit_label::<Item>(&FormMode::Creating), "Add Item");
    }

    #[test]
    fn notice_text() {
        assert_eq!(Notice::Added.message::<User>(), "User added!");
        assert_eq!(
            Notice::ConfirmDelete.message::<User>(),
            "Are you sure you want to delete this user?"
        );
        assert_eq!(Notice::Deleted.message::<Item>(), "Item has been deleted.");
        let invalid = Notice::Invalid(ValidationError::InvalidEmail);
        assert_eq!(invalid.title(), "Error");
        assert_eq!(invalid.message::<User>(), "Please enter a valid email.");
        assert!(Notice::ConfirmDelete.is_confirmation());
    }

    #[test]
    fn table_pads_columns() {
        let items = vec![
            Item {
                id: RecordId::from("1"),
                name: "milk".into(),
            },
            Item {
                id: RecordId::from("2"),
                name: "bread rolls".into(),
            },
        ];
        let table = render_table(&ListView::new(&items));
        assert_eq!(table, "Items List\nName\n-----------\nmilk\nbread rolls\n");

        let empty: Vec<Item> = Vec::new();
        assert_eq!(render_table(&ListView::new(&empty)), "Items List\n(no items)\n");
    }
}
