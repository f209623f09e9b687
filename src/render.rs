use insurance_age::InsuranceAgeReport;

const MIN_ALIGN_WIDTH: usize = 44;

// Utilities for building the aligned text report

pub fn build_row(key: &str, value: &str, align_width: usize) -> String {
    let key_part = format!("{key}: ");
    let base_len = key_part.len() + value.len();
    let available = align_width.saturating_sub(base_len);

    let dots = match available {
        0 => "".to_string(),
        1 => " ".to_string(),
        2 => ". ".to_string(),
        n => format!("{} ", ".".repeat(n - 1)),
    };

    format!("{key_part}{dots}{value}")
}

fn build_header_line(label: &str, align_width: usize) -> String {
    let base = format!("{label} ");
    let dash_count = align_width.saturating_sub(base.len());
    format!("{base}{}", "-".repeat(dash_count))
}

/// Renders the report as aligned `key: ..... value` rows.
pub fn render_text(report: &InsuranceAgeReport) -> String {
    let rows: Vec<(&str, String)> = vec![
        ("Birth date", report.birth.to_string()),
        ("Reference date", report.reference.to_string()),
        ("Insurance age", report.insurance_age.to_string()),
        ("Exact age", report.elapsed.to_string()),
        ("Rule", report.reason.describe().to_string()),
        ("Next rounding date", report.next_rounding_date.to_string()),
        (
            "Days until rounding",
            report.days_until_next_rounding.to_string(),
        ),
    ];

    let align_width = rows
        .iter()
        .map(|(k, v)| k.len() + v.len() + 4)
        .max()
        .unwrap_or(0)
        .max(MIN_ALIGN_WIDTH);

    let mut out = build_header_line("Insurance age", align_width);
    out.push('\n');
    for (key, value) in &rows {
        out.push_str(&build_row(key, value, align_width));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use insurance_age::compute_insurance_age;

    #[test]
    fn row_pads_with_dots() {
        assert_eq!(build_row("Age", "30", 14), "Age: ...... 30");
        assert_eq!(build_row("Age", "30", 9), "Age: . 30");
        assert_eq!(build_row("Age", "30", 8), "Age:  30");
        assert_eq!(build_row("Age", "30", 7), "Age: 30");
    }

    #[test]
    fn rows_share_a_width() {
        let birth = NaiveDate::from_ymd_opt(1995, 1, 1).unwrap();
        let reference = NaiveDate::from_ymd_opt(2024, 7, 2).unwrap();
        let text = render_text(&compute_insurance_age(birth, reference).unwrap());

        let widths: Vec<usize> = text.lines().map(str::len).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "{text}");
        assert!(text.contains("Insurance age: "));
        assert!(text.contains("29 years, 6 months, 1 day"));
        assert!(text.contains("2025-07-02"));
    }
}
