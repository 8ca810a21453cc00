//! Report rendering for analysis verdicts
//!
//! Text and HTML are rendered in the verdict's language. No PDF typesetter is
//! bundled, so a `pdf` request is answered with the printable HTML report.

use std::fmt::Write;
use std::str::FromStr;

use shared_types::{ComplianceVerdict, Finding, Language, Severity};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    #[error("Unknown report format '{0}'. Must be 'html', 'pdf', or 'txt'")]
    UnknownFormat(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Html,
    Pdf,
    Txt,
}

impl ReportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Html => "html",
            ReportFormat::Pdf => "pdf",
            ReportFormat::Txt => "txt",
        }
    }

    /// Content type of the rendered body. `pdf` bodies are HTML.
    pub fn content_type(&self) -> &'static str {
        match self {
            ReportFormat::Html | ReportFormat::Pdf => "text/html; charset=utf-8",
            ReportFormat::Txt => "text/plain; charset=utf-8",
        }
    }
}

impl FromStr for ReportFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "html" => Ok(ReportFormat::Html),
            "pdf" => Ok(ReportFormat::Pdf),
            "txt" => Ok(ReportFormat::Txt),
            _ => Err(ReportError::UnknownFormat(s.to_string())),
        }
    }
}

struct Labels {
    title: &'static str,
    summary: &'static str,
    contract_type: &'static str,
    file: &'static str,
    date: &'static str,
    score: &'static str,
    level: &'static str,
    violations: &'static str,
    missing_clauses: &'static str,
    risks: &'static str,
    recommendations: &'static str,
    compliant_clauses: &'static str,
    reference: &'static str,
    none: &'static str,
    footer: &'static str,
}

const EN: Labels = Labels {
    title: "Contract Analysis Report",
    summary: "Analysis Summary",
    contract_type: "Contract Type",
    file: "File",
    date: "Analysis Date",
    score: "Compliance Score",
    level: "Compliance Level",
    violations: "Violations",
    missing_clauses: "Missing Clauses",
    risks: "Risks",
    recommendations: "Recommendations",
    compliant_clauses: "Compliant Clauses",
    reference: "Reference",
    none: "None",
    footer: "This report was generated by the Saudi AI Contracts system",
};

const AR: Labels = Labels {
    title: "تقرير تحليل العقد",
    summary: "ملخص التحليل",
    contract_type: "نوع العقد",
    file: "الملف",
    date: "تاريخ التحليل",
    score: "نسبة الامتثال",
    level: "مستوى الامتثال",
    violations: "المخالفات",
    missing_clauses: "البنود المفقودة",
    risks: "المخاطر",
    recommendations: "التوصيات",
    compliant_clauses: "البنود المتوافقة",
    reference: "المرجع",
    none: "لا يوجد",
    footer: "تم إنشاء هذا التقرير بواسطة نظام العقود الذكي السعودي",
};

fn labels(language: Language) -> &'static Labels {
    match language {
        Language::Ar => &AR,
        Language::En => &EN,
    }
}

fn severity_label(severity: Severity, language: Language) -> &'static str {
    match (severity, language) {
        (Severity::High, Language::En) => "High Risk",
        (Severity::Medium, Language::En) => "Medium Risk",
        (Severity::High, Language::Ar) => "مخاطرة عالية",
        (Severity::Medium, Language::Ar) => "مخاطرة متوسطة",
    }
}

/// Render `verdict` in `format`
pub fn render(verdict: &ComplianceVerdict, format: ReportFormat, file_name: Option<&str>) -> String {
    match format {
        ReportFormat::Txt => render_txt(verdict, file_name),
        ReportFormat::Html => render_html(verdict, file_name),
        ReportFormat::Pdf => {
            debug!("No PDF renderer available, serving the HTML report");
            render_html(verdict, file_name)
        }
    }
}

fn finding_line(finding: &Finding, language: Language, l: &Labels) -> String {
    let mut line = format!(
        "{} [{}]",
        finding.description(),
        severity_label(finding.severity(), language)
    );
    if let Some(reference) = finding.reference() {
        let _ = write!(line, " ({}: {})", l.reference, reference);
    }
    line
}

fn render_txt(verdict: &ComplianceVerdict, file_name: Option<&str>) -> String {
    let language = verdict.language();
    let l = labels(language);
    let mut out = String::new();

    let _ = writeln!(out, "{}", l.title);
    let _ = writeln!(out, "{}", "=".repeat(l.title.chars().count()));
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", l.summary);
    let _ = writeln!(out, "{}: {}", l.contract_type, verdict.contract_type().display_name(language));
    if let Some(name) = file_name {
        let _ = writeln!(out, "{}: {}", l.file, name);
    }
    let _ = writeln!(out, "{}: {}", l.date, verdict.analysis_timestamp().format("%Y-%m-%d %H:%M UTC"));
    let _ = writeln!(out, "{}: {}%", l.score, verdict.compliance_score());
    let level = verdict.compliance_level();
    let level_name = match language {
        Language::Ar => level.name_ar(),
        Language::En => level.name_en(),
    };
    let _ = writeln!(out, "{}: {}", l.level, level_name);

    let sections: [(&str, Vec<String>); 5] = [
        (
            l.violations,
            verdict.violations().map(|f| finding_line(f, language, l)).collect(),
        ),
        (
            l.missing_clauses,
            verdict.missing_clauses().map(|f| finding_line(f, language, l)).collect(),
        ),
        (l.risks, verdict.risks().map(|f| finding_line(f, language, l)).collect()),
        (l.recommendations, verdict.recommendations().to_vec()),
        (
            l.compliant_clauses,
            verdict
                .compliant_clauses()
                .iter()
                .map(|c| format!("{} ({}: {})", c.description, l.reference, c.reference))
                .collect(),
        ),
    ];

    for (title, lines) in sections {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", title);
        let _ = writeln!(out, "{}", "-".repeat(title.chars().count()));
        if lines.is_empty() {
            let _ = writeln!(out, "{}", l.none);
        }
        for (i, line) in lines.iter().enumerate() {
            let _ = writeln!(out, "{}. {}", i + 1, line);
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", l.footer);
    out
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

fn html_list(out: &mut String, title: &str, items: &[String], none: &str) {
    let _ = writeln!(out, "<h2>{}</h2>", escape_html(title));
    if items.is_empty() {
        let _ = writeln!(out, "<p>{}</p>", escape_html(none));
        return;
    }
    let _ = writeln!(out, "<ol>");
    for item in items {
        let _ = writeln!(out, "  <li>{}</li>", escape_html(item));
    }
    let _ = writeln!(out, "</ol>");
}

fn render_html(verdict: &ComplianceVerdict, file_name: Option<&str>) -> String {
    let language = verdict.language();
    let l = labels(language);
    let dir = match language {
        Language::Ar => "rtl",
        Language::En => "ltr",
    };
    let level = verdict.compliance_level();
    let level_name = match language {
        Language::Ar => level.name_ar(),
        Language::En => level.name_en(),
    };

    let mut out = String::new();
    let _ = writeln!(out, "<!DOCTYPE html>");
    let _ = writeln!(out, "<html lang=\"{}\" dir=\"{}\">", language.as_str(), dir);
    let _ = writeln!(out, "<head><meta charset=\"UTF-8\"><title>{}</title></head>", escape_html(l.title));
    let _ = writeln!(out, "<body>");
    let _ = writeln!(out, "<h1>{}</h1>", escape_html(l.title));
    let _ = writeln!(out, "<table class=\"summary\">");
    let mut row = |label: &str, value: &str| {
        let _ = writeln!(out, "  <tr><th>{}</th><td>{}</td></tr>", escape_html(label), escape_html(value));
    };
    row(l.contract_type, verdict.contract_type().display_name(language));
    if let Some(name) = file_name {
        row(l.file, name);
    }
    row(l.date, &verdict.analysis_timestamp().format("%Y-%m-%d %H:%M UTC").to_string());
    row(l.score, &format!("{}%", verdict.compliance_score()));
    row(l.level, level_name);
    let _ = writeln!(out, "</table>");

    let violations: Vec<String> = verdict.violations().map(|f| finding_line(f, language, l)).collect();
    let missing: Vec<String> = verdict.missing_clauses().map(|f| finding_line(f, language, l)).collect();
    let risks: Vec<String> = verdict.risks().map(|f| finding_line(f, language, l)).collect();
    let compliant: Vec<String> = verdict
        .compliant_clauses()
        .iter()
        .map(|c| format!("{} ({}: {})", c.description, l.reference, c.reference))
        .collect();

    html_list(&mut out, l.violations, &violations, l.none);
    html_list(&mut out, l.missing_clauses, &missing, l.none);
    html_list(&mut out, l.risks, &risks, l.none);
    html_list(&mut out, l.recommendations, verdict.recommendations(), l.none);
    html_list(&mut out, l.compliant_clauses, &compliant, l.none);

    let _ = writeln!(out, "<footer>{}</footer>", escape_html(l.footer));
    let _ = writeln!(out, "</body>");
    let _ = writeln!(out, "</html>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use shared_types::ContractType;

    fn verdict(language: Language) -> ComplianceVerdict {
        ComplianceVerdict::new(
            ContractType::Rental,
            language,
            Utc.with_ymd_and_hms(2025, 4, 28, 4, 0, 0).unwrap(),
            vec![Finding::Violation {
                rule_id: "ejar_registration".to_string(),
                description: "No mention of Ejar registration".to_string(),
                severity: Severity::High,
                reference: "Ejar Regulations".to_string(),
                recommendation: "Register the contract on Ejar".to_string(),
            }],
            85,
            Vec::new(),
        )
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("HTML".parse::<ReportFormat>(), Ok(ReportFormat::Html));
        assert_eq!(" txt ".parse::<ReportFormat>(), Ok(ReportFormat::Txt));
        assert_eq!(
            "docx".parse::<ReportFormat>(),
            Err(ReportError::UnknownFormat("docx".to_string()))
        );
    }

    #[test]
    fn test_txt_report_contents() {
        let report = render(&verdict(Language::En), ReportFormat::Txt, Some("lease.pdf"));
        assert!(report.starts_with("Contract Analysis Report\n"));
        assert!(report.contains("File: lease.pdf"));
        assert!(report.contains("Compliance Score: 85%"));
        assert!(report.contains("Compliance Level: Very Good"));
        assert!(report.contains("1. No mention of Ejar registration [High Risk] (Reference: Ejar Regulations)"));
        assert!(report.contains("1. Register the contract on Ejar"));
    }

    #[test]
    fn test_arabic_html_is_rtl() {
        let report = render(&verdict(Language::Ar), ReportFormat::Html, None);
        assert!(report.contains("dir=\"rtl\""));
        assert!(report.contains("تقرير تحليل العقد"));
        assert!(report.contains("عقد إيجار"));
    }

    #[test]
    fn test_html_escapes_content() {
        let report = render(&verdict(Language::En), ReportFormat::Html, Some("<script>.txt"));
        assert!(report.contains("&lt;script&gt;.txt"));
        assert!(!report.contains("<script>"));
    }

    #[test]
    fn test_pdf_falls_back_to_html() {
        let report = render(&verdict(Language::Ar), ReportFormat::Pdf, Some("عقد.pdf"));
        assert_eq!(report, render(&verdict(Language::Ar), ReportFormat::Html, Some("عقد.pdf")));
        assert!(report.starts_with("<!DOCTYPE html>"));
        assert_eq!(ReportFormat::Pdf.content_type(), "text/html; charset=utf-8");
    }
}
