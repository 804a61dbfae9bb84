// ABOUTME: Borderless column alignment shared by every listing.
// ABOUTME: Wraps comfy-table with one space between columns.

use comfy_table::{ContentArrangement, Table, presets};

/// Lay out `rows` under `header`, left-aligned, one space between columns,
/// no trailing whitespace.
pub(crate) fn layout(header: &[&str], rows: Vec<Vec<String>>) -> String {
    let mut table = Table::new();
    table
        .load_preset(presets::NOTHING)
        .set_content_arrangement(ContentArrangement::Disabled)
        .set_header(header.to_vec());
    for row in rows {
        table.add_row(row);
    }
    for column in table.column_iter_mut() {
        column.set_padding((0, 1));
    }

    let mut out = String::new();
    for line in table.lines() {
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_are_aligned() {
        let out = layout(
            &["id", "name"],
            vec![
                vec!["a1".to_string(), "web".to_string()],
                vec!["b22222".to_string(), "db".to_string()],
            ],
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "id     name");
        assert_eq!(lines[1], "a1     web");
        assert_eq!(lines[2], "b22222 db");
    }

    #[test]
    fn header_only_when_empty() {
        let out = layout(&["age", "driver", "name"], Vec::new());
        assert_eq!(out.trim_end(), "age driver name");
    }
}
