use super::outcome::SkipReason;

/// Zero-based offsets of the id/name/age columns for one upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMapping {
    pub id_col: usize,
    pub name_col: usize,
    pub age_col: usize,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            id_col: 0,
            name_col: 1,
            age_col: 2,
        }
    }
}

/// Text fields pulled out of one CSV row, not yet coerced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub id: String,
    pub name: String,
    pub age: String,
}

/// Splits an upload into lines on `\n`, `\r\n` or a bare `\r`. A trailing
/// terminator does not produce an extra empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut out = Vec::new();
    let mut start = 0usize;
    let mut i = 0usize;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                out.push(&text[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                out.push(&text[start..i]);
                i += 1;
                if bytes.get(i) == Some(&b'\n') {
                    i += 1;
                }
                start = i;
            }
            _ => i += 1,
        }
    }
    if start < bytes.len() {
        out.push(&text[start..]);
    }
    out
}

/// Splits one line on commas. Double quotes group a field and `""` inside
/// quotes is a literal quote. An empty line has no fields at all.
pub fn parse_csv_record(line: &str) -> Vec<String> {
    if line.is_empty() {
        return Vec::new();
    }
    let mut out: Vec<String> = Vec::new();
    let mut buf = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '"' {
            if in_quotes && chars.peek() == Some(&'"') {
                buf.push('"');
                chars.next();
                continue;
            }
            in_quotes = !in_quotes;
            continue;
        }
        if ch == ',' && !in_quotes {
            out.push(std::mem::take(&mut buf));
            continue;
        }
        buf.push(ch);
    }
    out.push(buf);
    out
}

pub fn extract_row(fields: &[String], mapping: &ColumnMapping) -> Result<RawRow, SkipReason> {
    for index in [mapping.id_col, mapping.name_col, mapping.age_col] {
        if index >= fields.len() {
            return Err(SkipReason::MissingColumn {
                index,
                len: fields.len(),
            });
        }
    }
    Ok(RawRow {
        id: fields[mapping.id_col].clone(),
        name: fields[mapping.name_col].clone(),
        age: fields[mapping.age_col].clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(line: &str) -> Vec<String> {
        parse_csv_record(line)
    }

    #[test]
    fn splits_plain_fields() {
        assert_eq!(fields("1,Ann,30"), vec!["1", "Ann", "30"]);
    }

    #[test]
    fn quoted_field_keeps_commas_and_escaped_quotes() {
        assert_eq!(
            fields(r#"4,"Smith, ""Jo""",41"#),
            vec!["4", r#"Smith, "Jo""#, "41"]
        );
    }

    #[test]
    fn empty_line_has_no_fields_but_trailing_comma_does() {
        assert!(fields("").is_empty());
        assert_eq!(fields("1,Ann,"), vec!["1", "Ann", ""]);
    }

    #[test]
    fn split_lines_accepts_all_three_terminators() {
        assert_eq!(
            split_lines("h\r1,a,2\n2,b,3\r\n3,c,4"),
            vec!["h", "1,a,2", "2,b,3", "3,c,4"]
        );
        assert_eq!(split_lines("h\r\n\r\n1,a,2\r"), vec!["h", "", "1,a,2"]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn extract_follows_mapping() {
        let mapping = ColumnMapping {
            id_col: 2,
            name_col: 0,
            age_col: 1,
        };
        let row = extract_row(&fields("Bea,22,9"), &mapping).expect("row");
        assert_eq!(
            row,
            RawRow {
                id: "9".into(),
                name: "Bea".into(),
                age: "22".into(),
            }
        );
    }

    #[test]
    fn extract_reports_first_out_of_range_offset() {
        let mapping = ColumnMapping {
            id_col: 0,
            name_col: 5,
            age_col: 7,
        };
        let err = extract_row(&fields("1,Ann,30"), &mapping).unwrap_err();
        assert_eq!(err, SkipReason::MissingColumn { index: 5, len: 3 });
    }
}
