//! Report 2: the per-operator state table.
//!
//! Column widths grow with their content: each column is as wide as its
//! label or its widest formatted value. The name column is left-aligned,
//! the five state columns are right-aligned, with a single space between
//! columns. Widths are measured in Unicode display width.

use once_cell::sync::Lazy;
use regex::Regex;
use report_core::states::OperatorState;
use report_data::operators::OperatorTotals;
use unicode_width::UnicodeWidthStr;

/// Label of the operator-name column.
pub const NAME_COLUMN_LABEL: &str = "ФИО";

/// Three capitalized Cyrillic words: last name, first name, patronymic.
static FULL_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[А-ЯЁ][а-яё]+\s[А-ЯЁ][а-яё]+\s[А-ЯЁ][а-яё]+$")
        .expect("full-name pattern is valid")
});

/// Whether `name` looks like a complete three-word full name.
pub fn is_full_name(name: &str) -> bool {
    FULL_NAME_RE.is_match(name)
}

/// One rendered table line plus its highlight flag.
///
/// `highlight` is set when the operator name fails the full-name check; how
/// that is displayed (colour, marker, nothing) is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    pub text: String,
    pub highlight: bool,
}

/// The rendered operator table: a header line and one row per operator.
#[derive(Debug, Clone)]
pub struct OperatorTable {
    pub header: String,
    pub rows: Vec<RenderedRow>,
}

impl OperatorTable {
    /// The table as plain text with the trailing blank line, ignoring
    /// highlight flags.
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.header);
        out.push('\n');
        for row in &self.rows {
            out.push_str(&row.text);
            out.push('\n');
        }
        out.push('\n');
        out
    }
}

struct ColumnWidths {
    name: usize,
    states: [usize; 5],
}

/// Render the operator state table in first-seen operator order.
pub fn render_operator_table(totals: &OperatorTotals) -> OperatorTable {
    let widths = column_widths(totals);

    let labels = OperatorState::ALL.map(|state| state.label().to_string());
    let header = format_row(NAME_COLUMN_LABEL, &labels, &widths);

    let rows = totals
        .rows()
        .iter()
        .map(|row| {
            let values =
                OperatorState::ALL.map(|state| row.totals.get(state).num_seconds().to_string());
            RenderedRow {
                text: format_row(&row.operator, &values, &widths),
                highlight: !is_full_name(&row.operator),
            }
        })
        .collect();

    OperatorTable { header, rows }
}

/// Per-column width: the label or the widest value, whichever is wider.
fn column_widths(totals: &OperatorTotals) -> ColumnWidths {
    let name = totals
        .rows()
        .iter()
        .map(|row| row.operator.width())
        .max()
        .unwrap_or(0)
        .max(NAME_COLUMN_LABEL.width());

    let mut states = [0usize; 5];
    for (idx, state) in OperatorState::ALL.into_iter().enumerate() {
        let widest_value = totals
            .rows()
            .iter()
            .map(|row| row.totals.get(state).num_seconds().to_string().len())
            .max()
            .unwrap_or(0);
        states[idx] = widest_value.max(state.label().width());
    }

    ColumnWidths { name, states }
}

fn format_row(name: &str, values: &[String; 5], widths: &ColumnWidths) -> String {
    let mut out = pad_right(name, widths.name);
    for (value, width) in values.iter().zip(widths.states) {
        out.push(' ');
        out.push_str(&pad_left(value, width));
    }
    out
}

fn pad_right(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(padding))
}

fn pad_left(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.width());
    format!("{}{}", " ".repeat(padding), text)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;
    use report_core::session::Session;
    use report_data::operators::aggregate_operator_states;

    fn make_session(operator: &str, state: &str, seconds: i64) -> Session {
        Session {
            start: chrono::NaiveDateTime::parse_from_str(
                "14.10.2020 15:35:41",
                report_core::session::DATE_TIME_FORMAT,
            )
            .unwrap(),
            end: chrono::NaiveDateTime::parse_from_str(
                "14.10.2020 15:36:06",
                report_core::session::DATE_TIME_FORMAT,
            )
            .unwrap(),
            project: "P1".to_string(),
            operator: operator.to_string(),
            state: state.to_string(),
            duration: TimeDelta::seconds(seconds),
        }
    }

    fn fixture_table() -> OperatorTable {
        let sessions = vec![
            make_session("Шатохина Арина Александровна", "Разговор", 26),
            make_session("Парфенова Александра Александровна", "Готов", 16),
            make_session("Чечухина Марина Анатольевна", "Разговор", 78),
        ];
        render_operator_table(&aggregate_operator_states(&sessions))
    }

    // ── Reference fixture ─────────────────────────────────────────────────────

    #[test]
    fn test_reference_fixture_header() {
        let table = fixture_table();
        assert_eq!(
            table.header,
            "ФИО                                Пауза Готов Разговор Обработка Перезвон",
        );
    }

    #[test]
    fn test_reference_fixture_rows() {
        let table = fixture_table();
        let texts: Vec<&str> = table.rows.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "Шатохина Арина Александровна           0     0       26         0        0",
                "Парфенова Александра Александровна     0    16        0         0        0",
                "Чечухина Марина Анатольевна            0     0       78         0        0",
            ]
        );
    }

    #[test]
    fn test_reference_fixture_no_highlights() {
        let table = fixture_table();
        assert!(table.rows.iter().all(|r| !r.highlight));
    }

    #[test]
    fn test_reference_fixture_plain_text() {
        let table = fixture_table();
        assert_eq!(
            table.to_plain_text(),
            "ФИО                                Пауза Готов Разговор Обработка Перезвон\n\
             Шатохина Арина Александровна           0     0       26         0        0\n\
             Парфенова Александра Александровна     0    16        0         0        0\n\
             Чечухина Марина Анатольевна            0     0       78         0        0\n\
             \n",
        );
    }

    // ── Column widths ─────────────────────────────────────────────────────────

    #[test]
    fn test_value_wider_than_label_grows_column() {
        // 123456789 seconds is wider than "Пауза" (5), so the column grows.
        let sessions = vec![make_session("Оператор Тест Тестович", "Пауза", 123_456_789)];
        let table = render_operator_table(&aggregate_operator_states(&sessions));

        assert!(table.header.contains("    Пауза"));
        assert!(table.rows[0].text.contains("123456789"));
    }

    #[test]
    fn test_short_name_padded_to_label_width() {
        // "Ян" is narrower than "ФИО", so the label sets the column width.
        let sessions = vec![make_session("Ян", "Готов", 1)];
        let table = render_operator_table(&aggregate_operator_states(&sessions));

        assert!(table.header.starts_with("ФИО "));
        assert!(table.rows[0].text.starts_with("Ян  "));
    }

    #[test]
    fn test_empty_table_renders_header_only() {
        let table = render_operator_table(&aggregate_operator_states(&[]));
        assert!(table.rows.is_empty());
        assert!(table.header.starts_with(NAME_COLUMN_LABEL));
    }

    // ── Full-name highlighting ────────────────────────────────────────────────

    #[test]
    fn test_is_full_name_accepts_three_capitalized_words() {
        assert!(is_full_name("Шатохина Арина Александровна"));
        assert!(is_full_name("Ёлкина Анна Ивановна"));
    }

    #[test]
    fn test_is_full_name_rejects_partial_or_latin_names() {
        assert!(!is_full_name("Шатохина Арина"));
        assert!(!is_full_name("шатохина арина александровна"));
        assert!(!is_full_name("John Smith Doe"));
        assert!(!is_full_name(""));
    }

    #[test]
    fn test_incomplete_name_row_is_highlighted() {
        let sessions = vec![
            make_session("Шатохина Арина Александровна", "Разговор", 26),
            make_session("Оператор 17", "Готов", 16),
        ];
        let table = render_operator_table(&aggregate_operator_states(&sessions));

        assert!(!table.rows[0].highlight);
        assert!(table.rows[1].highlight);
    }
}
