use crate::allocation::AssignmentRow;

/// Render an allocation as the message shared with the shift team.
///
/// ```text
/// 🗓️ <shift label>
/// 👤 مدير الشفت: <manager>
///
/// 👤 <supervisor>
/// المهام:
/// - <task>
/// الجلسات الفردية: <name>, <name>
/// ```
///
/// Rows are separated by one blank line. A row without tasks has no
/// `المهام` block and a row without sessions has no `الجلسات الفردية` line.
/// Trailing whitespace is trimmed from the whole message.
pub fn format_report(shift_label: &str, manager: &str, rows: &[AssignmentRow]) -> String {
    let mut msg = format!("🗓️ {shift_label}\n👤 مدير الشفت: {manager}\n\n");
    for row in rows {
        msg.push_str(&format_row(row));
    }
    msg.trim_end().to_string()
}

/// A single row block including its trailing blank line.
pub fn format_row(row: &AssignmentRow) -> String {
    let mut block = format!("👤 {}\n", row.supervisor);
    if !row.tasks.is_empty() {
        block.push_str("المهام:\n");
        for task in &row.tasks {
            block.push_str(&format!("- {task}\n"));
        }
    }
    if !row.sessions.is_empty() {
        block.push_str(&format!("الجلسات الفردية: {}\n", row.sessions.join(", ")));
    }
    block.push('\n');
    block
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(sup: &str, sessions: &[&str], tasks: &[&str]) -> AssignmentRow {
        AssignmentRow {
            supervisor: sup.to_string(),
            sessions: sessions.iter().map(|s| s.to_string()).collect(),
            tasks: tasks.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn empty_row_is_name_and_blank_line() {
        assert_eq!(format_row(&row("X", &[], &[])), "👤 X\n\n");
    }

    #[test]
    fn full_report_layout() {
        let rows = vec![
            row("X", &["A", "B"], &["T1", "T2"]),
            row("Z", &["C"], &[]),
        ];
        let out = format_report("Shift 1", "M", &rows);
        let expected = "🗓️ Shift 1\n👤 مدير الشفت: M\n\n\
                        👤 X\nالمهام:\n- T1\n- T2\nالجلسات الفردية: A, B\n\n\
                        👤 Z\nالجلسات الفردية: C";
        assert_eq!(out, expected);
    }

    #[test]
    fn tasks_without_sessions() {
        let out = format_report("S", "M", &[row("X", &[], &["T1"])]);
        assert!(out.ends_with("👤 X\nالمهام:\n- T1"));
        assert!(!out.contains("الجلسات الفردية"));
    }

    #[test]
    fn no_rows_is_header_only() {
        let out = format_report("S", "M", &[]);
        assert_eq!(out, "🗓️ S\n👤 مدير الشفت: M");
    }

    #[test]
    fn deterministic() {
        let rows = vec![row("X", &["A"], &["T"])];
        assert_eq!(
            format_report("S", "M", &rows),
            format_report("S", "M", &rows)
        );
    }
}
