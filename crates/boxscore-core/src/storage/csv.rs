//! CSV import/export functionality

use crate::error::{BoxscoreError, Result};
use crate::sheet::Sheet;
use boxscore_engine::CellRef;
use std::io::Write;
use std::path::Path;

/// Load a CSV file into a sheet, one cell per non-empty field.
pub fn parse_csv(path: &Path) -> Result<Sheet> {
    let content = std::fs::read_to_string(path)?;
    parse_csv_str(&content)
}

/// Parse CSV text into a sheet. Row 1 of the text is row 1 of the sheet.
pub fn parse_csv_str(content: &str) -> Result<Sheet> {
    let sheet = Sheet::new();

    for (row_idx, line) in content.lines().enumerate() {
        let fields = parse_csv_line(line).map_err(|message| BoxscoreError::Parse {
            line: row_idx + 1,
            message,
        })?;
        for (col_idx, field) in fields.into_iter().enumerate() {
            if field.is_empty() {
                continue;
            }
            sheet.set(CellRef::new(col_idx, row_idx), &field);
        }
    }

    Ok(sheet)
}

/// Parse a single CSV line, handling quoted fields
pub(crate) fn parse_csv_line(line: &str) -> std::result::Result<Vec<String>, String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut field_was_quoted = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                // Check for escaped quote
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(c);
            }
        } else {
            match c {
                '"' => {
                    in_quotes = true;
                    field_was_quoted = true;
                }
                ',' => {
                    if field_was_quoted {
                        fields.push(std::mem::take(&mut current));
                    } else {
                        fields.push(current.trim().to_string());
                        current.clear();
                    }
                    field_was_quoted = false;
                }
                _ => current.push(c),
            }
        }
    }
    if in_quotes {
        return Err("unterminated quoted field".to_string());
    }
    if field_was_quoted {
        fields.push(current);
    } else {
        fields.push(current.trim().to_string());
    }
    Ok(fields)
}

/// Write rows of text as CSV. Rows may differ in length.
pub fn write_csv<W: Write>(w: &mut W, rows: &[Vec<String>]) -> Result<()> {
    for row in rows {
        let fields: Vec<String> = row.iter().map(|f| escape_csv_field(f)).collect();
        writeln!(w, "{}", fields.join(","))?;
    }
    Ok(())
}

/// Escape a field for CSV output
fn escape_csv_field(field: &str) -> String {
    // Guard against CSV formula injection in spreadsheet apps.
    let first_non_space = field.trim_start_matches([' ', '\t']).chars().next();
    let safe_field = if matches!(first_non_space, Some('=' | '+' | '-' | '@')) {
        format!("'{}", field)
    } else {
        field.to_string()
    };

    if safe_field.contains(',')
        || safe_field.contains('"')
        || safe_field.contains('\n')
        || safe_field.contains('\r')
    {
        format!("\"{}\"", safe_field.replace('"', "\"\""))
    } else {
        safe_field
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_csv_line_simple() {
        assert_eq!(parse_csv_line("1B,K,,HR").unwrap(), vec!["1B", "K", "", "HR"]);
    }

    #[test]
    fn test_parse_csv_line_quoted() {
        assert_eq!(
            parse_csv_line(r#"1B,"K, PC2",BB"#).unwrap(),
            vec!["1B", "K, PC2", "BB"]
        );
    }

    #[test]
    fn test_parse_csv_line_escaped_quotes() {
        assert_eq!(
            parse_csv_line(r#"a,"say ""hello""",c"#).unwrap(),
            vec!["a", r#"say "hello""#, "c"]
        );
    }

    #[test]
    fn test_parse_csv_line_unterminated() {
        assert!(parse_csv_line(r#"1B,"K"#).is_err());
    }

    #[test]
    fn test_parse_csv_str_positions_cells() {
        let sheet = parse_csv_str("Batter,1,2\nSmith, 1B ,K PC1\n").unwrap();
        assert_eq!(sheet.get(&CellRef::new(1, 1)).as_deref(), Some("1B"));
        assert_eq!(sheet.get(&CellRef::new(2, 1)).as_deref(), Some("K PC1"));
        assert_eq!(sheet.len(), 6);
    }

    #[test]
    fn test_parse_csv_str_reports_line() {
        let err = parse_csv_str("a,b\nc,\"d\n").unwrap_err();
        assert!(matches!(err, BoxscoreError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_escape_csv_field() {
        assert_eq!(escape_csv_field("simple"), "simple");
        assert_eq!(escape_csv_field("with,comma"), "\"with,comma\"");
        assert_eq!(escape_csv_field("with\"quote"), "\"with\"\"quote\"");
        assert_eq!(escape_csv_field(" =1+1"), "' =1+1");
        assert_eq!(escape_csv_field("-2"), "'-2");
    }

    #[test]
    fn test_write_csv_ragged_rows() {
        let rows = vec![
            vec!["Batting".to_string(), "AB".to_string()],
            vec![],
            vec!["Smith, J.".to_string(), "4".to_string()],
        ];
        let mut out = Vec::new();
        write_csv(&mut out, &rows).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Batting,AB\n\n\"Smith, J.\",4\n"
        );
    }
}
