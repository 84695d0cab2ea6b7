/// Render rows as aligned plain-text columns with a dashed rule under the
/// header. Each column is as wide as its widest cell, header included;
/// columns are separated by two spaces.
pub fn render(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() && cell.len() > widths[i] {
                widths[i] = cell.len();
            }
        }
    }

    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    let rule_cells: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_row(&header_cells, &widths));
    lines.push(format_row(&rule_cells, &widths));
    for row in rows {
        lines.push(format_row(row, &widths));
    }
    lines.join("\n")
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect();
    padded.join("  ").trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(raw: &[&[&str]]) -> Vec<Vec<String>> {
        raw.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn columns_align_to_widest_cell() {
        let out = render(
            &["Category", "Cost"],
            &rows(&[&["Storage", "$12.5000"], &["TOTAL", "$12.5000"]]),
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Category  Cost");
        assert_eq!(lines[1], "--------  --------");
        assert_eq!(lines[2], "Storage   $12.5000");
        assert_eq!(lines[3], "TOTAL     $12.5000");
    }

    #[test]
    fn header_wider_than_cells() {
        let out = render(&["Usage Type", "Cost"], &rows(&[&["a", "$1.0000"]]));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Usage Type  Cost");
        assert_eq!(lines[1], "----------  -------");
        assert_eq!(lines[2], "a           $1.0000");
    }

    #[test]
    fn no_trailing_whitespace() {
        let out = render(&["A", "B"], &rows(&[&["wide-cell", "x"]]));
        for line in out.lines() {
            assert_eq!(line, line.trim_end());
        }
    }

    #[test]
    fn renders_header_and_rule_for_empty_rows() {
        let out = render(&["Category", "Cost"], &[]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Category  Cost");
    }
}
