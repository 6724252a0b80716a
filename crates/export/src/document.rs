//! The layout of an exported board, independent of the output format.

use std::fmt;

use taskboard_protocol::{ColumnKind, KanbanBoard, Task};

/// Default date format used in exported entries.
pub const DEFAULT_DATE_FORMAT: &str = "%d.%m.%Y";

/// A whole exported board: one section per column, in board order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDocument {
    /// Document title, stored in the output's metadata.
    pub title: String,
    /// One section per column.
    pub sections: Vec<Section>,
}

/// A column heading followed by its tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Rendered in bold.
    pub heading: String,
    /// One entry per task, in column order.
    pub entries: Vec<Entry>,
}

/// One task in the export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// `<title> (<priority>) – Due: <date>`
    pub line: String,
    /// `→ <description>`, rendered in italics. Absent for empty descriptions.
    pub note: Option<String>,
}

impl Entry {
    /// Builds the entry for a task.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{NaiveDate, NaiveTime};
    /// use taskboard_export::Entry;
    /// use taskboard_protocol::{Priority, Task, TaskFields};
    ///
    /// let due = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
    /// let task = Task::new(
    ///     TaskFields::new("Report", due, NaiveTime::MIN)
    ///         .with_priority(Priority::High)
    ///         .with_description("Q1 numbers"),
    /// );
    /// let entry = Entry::for_task(&task, "%d.%m.%Y");
    ///
    /// assert_eq!(entry.line, "Report (High) – Due: 14.03.2025");
    /// assert_eq!(entry.note.as_deref(), Some("→ Q1 numbers"));
    /// ```
    #[must_use]
    pub fn for_task(task: &Task, date_format: &str) -> Self {
        let line = format!(
            "{} ({}) – Due: {}",
            task.title,
            task.priority,
            task.due_date.format(date_format)
        );
        let note = (!task.description.is_empty()).then(|| format!("→ {}", task.description));
        Self { line, note }
    }
}

impl ExportDocument {
    /// Lays out every column of the board.
    ///
    /// An empty board still yields all three headings.
    #[must_use]
    pub fn from_board(board: &KanbanBoard, date_format: &str) -> Self {
        let sections = ColumnKind::all()
            .into_iter()
            .map(|kind| Section {
                heading: kind.display_name().to_string(),
                entries: board
                    .column(kind)
                    .tasks
                    .iter()
                    .map(|task| Entry::for_task(task, date_format))
                    .collect(),
            })
            .collect();
        Self {
            title: "Kanban Board".to_string(),
            sections,
        }
    }

    /// Returns the number of task entries across all sections.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.sections.iter().map(|s| s.entries.len()).sum()
    }
}

impl fmt::Display for ExportDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
                writeln!(f)?;
            }
            write!(f, "{}", section.heading)?;
            for entry in &section.entries {
                write!(f, "\n{}", entry.line)?;
                if let Some(note) = &entry.note {
                    write!(f, "\n{note}")?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use taskboard_protocol::{Priority, TaskFields};

    use super::*;

    fn task(title: &str, description: &str, priority: Priority, day: u32) -> Task {
        let due = NaiveDate::from_ymd_opt(2025, 3, day).expect("valid date");
        Task::new(
            TaskFields::new(title, due, NaiveTime::MIN)
                .with_description(description)
                .with_priority(priority),
        )
    }

    #[test]
    fn empty_board_has_three_headings_only() {
        let document = ExportDocument::from_board(&KanbanBoard::new(), DEFAULT_DATE_FORMAT);

        let headings: Vec<_> = document.sections.iter().map(|s| s.heading.as_str()).collect();
        assert_eq!(headings, ["To Do", "In Progress", "Done"]);
        assert_eq!(document.entry_count(), 0);
    }

    #[test]
    fn empty_description_has_no_note() {
        let entry = Entry::for_task(&task("Plain", "", Priority::Low, 2), DEFAULT_DATE_FORMAT);
        assert_eq!(entry.line, "Plain (Low) – Due: 02.03.2025");
        assert!(entry.note.is_none());
    }

    #[test]
    fn date_format_is_respected() {
        let entry = Entry::for_task(&task("Iso", "", Priority::Medium, 9), "%Y-%m-%d");
        assert_eq!(entry.line, "Iso (Medium) – Due: 2025-03-09");
    }

    #[test]
    fn board_layout_as_text() {
        let mut board = KanbanBoard::new();
        board.add_task(ColumnKind::ToDo, task("Write report", "Quarterly numbers", Priority::High, 14));
        board.add_task(ColumnKind::ToDo, task("Book room", "", Priority::Medium, 15));
        board.add_task(ColumnKind::Done, task("Ship", "", Priority::Low, 1));

        let document = ExportDocument::from_board(&board, DEFAULT_DATE_FORMAT);
        insta::assert_snapshot!(document.to_string(), @r"
To Do
Write report (High) – Due: 14.03.2025
→ Quarterly numbers
Book room (Medium) – Due: 15.03.2025

In Progress

Done
Ship (Low) – Due: 01.03.2025
");
    }

    #[test]
    fn empty_board_as_text() {
        let document = ExportDocument::from_board(&KanbanBoard::new(), DEFAULT_DATE_FORMAT);
        insta::assert_snapshot!(document.to_string(), @r"
To Do

In Progress

Done
");
    }
}
