//! Fixed-width table rendering for `ls`.

use crate::task::Task;

const ID_WIDTH: usize = 5;
const DESCRIPTION_WIDTH: usize = 20;
const STATUS_WIDTH: usize = 15;

/// Renders tasks as a table: header row, full-width dash separator, one row
/// per task. Cells are right-aligned to their column width; content wider
/// than the column is not clipped.
pub fn render(tasks: &[Task]) -> String {
    // Three columns plus two " | " separators.
    let total_width = ID_WIDTH + DESCRIPTION_WIDTH + STATUS_WIDTH + 6;

    let mut out = String::new();
    out.push_str(&row("ID", "Description", "Status"));
    out.push('\n');
    out.push_str(&"-".repeat(total_width));
    for task in tasks {
        out.push('\n');
        out.push_str(&row(
            &task.id().to_string(),
            task.description(),
            &task.status().to_string(),
        ));
    }
    out
}

fn row(id: &str, description: &str, status: &str) -> String {
    format!(
        "{id:>iw$} | {description:>dw$} | {status:>sw$}",
        iw = ID_WIDTH,
        dw = DESCRIPTION_WIDTH,
        sw = STATUS_WIDTH,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{Status, TaskList};

    fn sample_tasks() -> Vec<Task> {
        let mut list = TaskList::new();
        list.add("buy milk".to_string());
        list.add("walk dog".to_string());
        list.set_status(2, Status::Done).unwrap();
        list.iter().cloned().collect()
    }

    #[test]
    fn test_header_and_separator() {
        let rendered = render(&sample_tasks());
        let mut lines = rendered.lines();

        assert_eq!(
            lines.next().unwrap(),
            "   ID |          Description |          Status"
        );
        let separator = lines.next().unwrap();
        assert_eq!(separator.len(), 46);
        assert!(separator.chars().all(|c| c == '-'));
    }

    #[test]
    fn test_rows_are_right_aligned() {
        let rendered = render(&sample_tasks());
        let lines: Vec<_> = rendered.lines().collect();

        assert_eq!(lines[2], "    1 |             buy milk |         pending");
        assert_eq!(lines[3], "    2 |             walk dog |            done");
    }

    #[test]
    fn test_wide_description_is_not_clipped() {
        let mut list = TaskList::new();
        let long = "a description well past twenty characters";
        list.add(long.to_string());
        let tasks: Vec<_> = list.iter().cloned().collect();

        let rendered = render(&tasks);
        assert!(rendered.contains(long));
    }

    #[test]
    fn test_empty_input_renders_header_only() {
        let rendered = render(&[]);
        assert_eq!(rendered.lines().count(), 2);
    }
}
