//! Terminal rendering for the CLI subcommands.
//!
//! Each function returns the full text so handlers can write it to any sink
//! and tests can inspect it.

use std::fmt::Write as _;

use colored::*;

use crate::classify::{classify, resolve_ml_verdict, triggered_indicators, MlVerdict, Verdict};
use crate::display::{describe_record, HistoryRow, TriState, ABSENT};
use crate::record::AnalysisRecord;
use crate::statistics::Summary;

const BAR_WIDTH: usize = 30;

/// Verdict headline, triggering indicators, field table and ML verdict.
pub fn render_analysis(record: &AnalysisRecord) -> String {
    let mut out = String::new();
    let verdict = classify(record);
    let headline = match verdict {
        Verdict::Malicious => verdict.headline().red().bold(),
        Verdict::Safe => verdict.headline().green().bold(),
    };
    let _ = writeln!(out, "{headline}  {}", record.url.cyan());

    let triggered = triggered_indicators(record);
    if !triggered.is_empty() {
        let names: Vec<&str> = triggered.iter().map(|f| f.label()).collect();
        let _ = writeln!(out, "Triggered by: {}", names.join(", "));
    }
    let _ = writeln!(out);

    let views = describe_record(record);
    let width = views.iter().map(|v| v.label.len()).max().unwrap_or(0);
    for view in &views {
        let label = format!("{:<width$}", view.label);
        if view.risky {
            let _ = writeln!(out, "{} {}  {}", "!".red().bold(), label.red(), view.value.red());
            if let Some(explanation) = view.explanation {
                let _ = writeln!(out, "  {:<width$}  {}", "", explanation.dimmed());
            }
        } else {
            let _ = writeln!(out, "  {label}  {}", view.value);
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "ML classification: {}",
        ml_badge(resolve_ml_verdict(&record.ml_scores))
    );
    out
}

/// History table, one line per row.
pub fn render_history(rows: &[HistoryRow]) -> String {
    let mut out = String::new();
    if rows.is_empty() {
        let _ = writeln!(out, "No analyses yet.");
        return out;
    }

    let _ = writeln!(
        out,
        "{:>5}  {:<16}  {:<9}  {:^4} {:^4} {:^4} {:^4}  {:^7}  {:>8}  {:>5}  {:^5}  {:<8}  URL",
        "#", "Date", "Status", "Num", "Sub", "Chr", "DDNS", "SSL", "Age", "Forms", "Login", "ML"
    );
    for row in rows {
        let id = row.id.map(|id| id.to_string()).unwrap_or_else(|| ABSENT.into());
        let status = format!("{:<9}", row.status());
        let status = if row.blacklisted {
            status.red()
        } else {
            status.green()
        };
        let ssl = match row.ssl_valid {
            TriState::Yes => format!("{:^7}", row.ssl_valid).green(),
            TriState::No => format!("{:^7}", row.ssl_valid).red(),
            TriState::Unknown => format!("{:^7}", ABSENT).normal(),
        };
        let age = match row.domain_age_days {
            Some(days) if row.young_domain => format!("{:>8}", format!("{days} days")).red(),
            Some(days) => format!("{:>8}", format!("{days} days")).normal(),
            None => format!("{:>8}", ABSENT).normal(),
        };
        let forms = format!("{:>5}", row.forms_found);
        let forms = if row.has_forms {
            forms.yellow()
        } else {
            forms.normal()
        };
        let _ = writeln!(
            out,
            "{:>5}  {:<16}  {}  {:^4} {:^4} {:^4} {:^4}  {}  {}  {}  {:^5}  {}  {}",
            id,
            row.date,
            status,
            flag(row.suspicious_numbers),
            flag(row.excessive_subdomains),
            flag(row.special_chars),
            flag(row.dynamic_dns),
            ssl,
            age,
            forms,
            flag(row.login_fields_found),
            ml_badge_padded(row.ml_verdict),
            row.url,
        );
    }
    out
}

/// Stat cards, indicator bars, pie series and ML tally.
pub fn render_summary(summary: &Summary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total analyzed: {}", summary.total.to_string().bold());
    let _ = writeln!(
        out,
        "Malicious:      {}",
        summary.malicious_count.to_string().red().bold()
    );
    let _ = writeln!(
        out,
        "Safe:           {}",
        summary.safe_count.to_string().green().bold()
    );

    let _ = writeln!(out, "\nIndicators");
    let max = summary
        .per_indicator
        .iter()
        .map(|c| c.count)
        .max()
        .unwrap_or(0);
    for count in &summary.per_indicator {
        let _ = writeln!(
            out,
            "  {:<20} {:>5}  {}",
            count.name,
            count.count,
            bar(count.count, max).red()
        );
    }

    let _ = writeln!(out, "\nBlacklist status");
    for slice in &summary.pie {
        let _ = writeln!(
            out,
            "  {:<20} {:>5}  {}",
            slice.name,
            slice.value,
            percent(slice.value, summary.total)
        );
    }

    let ml = &summary.ml_verdicts;
    let _ = writeln!(out, "\nML classification");
    let _ = writeln!(out, "  {:<20} {:>5}", MlVerdict::Phishing.label(), ml.phishing);
    let _ = writeln!(out, "  {:<20} {:>5}", MlVerdict::Benign.label(), ml.benign);
    let _ = writeln!(out, "  {:<20} {:>5}", "Indeterminate", ml.indeterminate);
    out
}

fn flag(set: bool) -> ColoredString {
    if set {
        "x".red().bold()
    } else {
        ABSENT.normal()
    }
}

fn ml_badge(verdict: MlVerdict) -> ColoredString {
    match verdict {
        MlVerdict::Phishing => verdict.label().red().bold(),
        MlVerdict::Benign => verdict.label().green(),
        MlVerdict::Indeterminate => verdict.label().normal(),
    }
}

fn ml_badge_padded(verdict: MlVerdict) -> ColoredString {
    let text = format!("{:<8}", verdict.label());
    match verdict {
        MlVerdict::Phishing => text.red().bold(),
        MlVerdict::Benign => text.green(),
        MlVerdict::Indeterminate => text.normal(),
    }
}

fn bar(count: usize, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let len = (count * BAR_WIDTH).div_ceil(max);
    "#".repeat(len)
}

fn percent(part: usize, total: usize) -> String {
    if total == 0 {
        return "0.0%".to_string();
    }
    format!("{:.1}%", part as f64 * 100.0 / total as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::history_rows;
    use crate::record::MlScore;
    use crate::statistics::aggregate;

    fn blacklisted() -> AnalysisRecord {
        AnalysisRecord {
            id: Some(1),
            url: "http://bad.example".into(),
            blacklisted: true,
            blacklist_source: Some("OpenPhish".into()),
            timestamp: Some("2024-03-01T12:30:00".into()),
            ml_scores: vec![MlScore {
                label: "phishing".into(),
                probability: 0.9,
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_render_analysis_malicious() {
        let text = render_analysis(&blacklisted());
        assert!(text.contains("Possibly malicious"));
        assert!(text.contains("Triggered by: Blacklisted"));
        assert!(text.contains("OpenPhish"));
        assert!(text.contains("Phishing"));
    }

    #[test]
    fn test_render_analysis_safe_has_no_trigger_line() {
        let record = AnalysisRecord {
            url: "http://ok.example".into(),
            domain_age_days: Some(3),
            ..Default::default()
        };
        let text = render_analysis(&record);
        assert!(text.contains("Possibly safe"));
        assert!(!text.contains("Triggered by"));
        // Young domain is highlighted even though the verdict is safe
        assert!(text.contains("Domains younger than 30 days"));
    }

    #[test]
    fn test_render_history_empty() {
        assert_eq!(render_history(&[]), "No analyses yet.\n");
    }

    #[test]
    fn test_render_history_rows() {
        let rows = history_rows(&[blacklisted(), AnalysisRecord::default()], -180);
        let text = render_history(&rows);
        assert_eq!(text.lines().count(), 3);
        assert!(text.contains("01/03/2024 09:30"));
        assert!(text.contains("Malicious"));
        assert!(text.contains("http://bad.example"));
    }

    #[test]
    fn test_render_summary_empty_has_zero_percentages() {
        let text = render_summary(&aggregate(&[]));
        assert!(text.contains("0.0%"));
        assert!(text.contains("Suspicious Numbers"));
    }

    #[test]
    fn test_bar_scaling() {
        assert_eq!(bar(0, 0), "");
        assert_eq!(bar(5, 5).len(), BAR_WIDTH);
        assert_eq!(bar(1, 3).len(), 10);
        assert_eq!(bar(0, 3), "");
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(1, 4), "25.0%");
        assert_eq!(percent(0, 0), "0.0%");
    }
}
