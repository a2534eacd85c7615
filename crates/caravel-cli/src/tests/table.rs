use crate::format::Table;

fn strings(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

#[test]
fn test_render_single_row() {
    let table = Table::new(
        strings(&["ID", "Name"]),
        vec![strings(&["r1", "first replica"])],
    );

    let rendered = table.to_string();
    let expected = "\
+----+---------------+
| ID | Name          |
+----+---------------+
| r1 | first replica |
+----+---------------+
";
    assert_eq!(rendered, expected);
}

#[test]
fn test_render_empty_table_has_no_body_separator() {
    let table = Table::new(strings(&["ID", "Name"]), Vec::new());

    let rendered = table.to_string();
    let expected = "\
+----+------+
| ID | Name |
+----+------+
";
    assert_eq!(rendered, expected);
}

#[test]
fn test_multi_line_cell_spans_physical_lines() {
    let table = Table::new(
        strings(&["ID", "Instances"]),
        vec![strings(&["r1", "vm1\nvm2"])],
    );

    let rendered = table.to_string();
    assert!(rendered.contains("| r1 | vm1       |"));
    assert!(rendered.contains("|    | vm2       |"));
    // Still one logical row: separators only around the body
    assert_eq!(rendered.matches('+').count(), 3 * 3);
}

#[test]
fn test_column_width_uses_widest_cell_line() {
    let table = Table::new(
        strings(&["H"]),
        vec![strings(&["short\na much longer line"])],
    );

    for line in table.to_string().lines() {
        assert_eq!(line.len(), "| a much longer line |".len());
    }
}

#[test]
fn test_padding_uses_display_width_for_wide_characters() {
    // Each CJK character occupies two terminal columns
    let table = Table::new(strings(&["Name"]), vec![strings(&["東京"]), strings(&["ab"])]);

    let rendered = table.to_string();
    assert!(rendered.contains("| 東京 |"));
    assert!(rendered.contains("| ab   |"));
}

#[test]
fn test_accessors_expose_input() {
    let columns = strings(&["A", "B"]);
    let rows = vec![strings(&["1", "2"])];
    let table = Table::new(columns.clone(), rows.clone());

    assert_eq!(table.columns(), columns.as_slice());
    assert_eq!(table.rows(), rows.as_slice());
}
