use std::sync::LazyLock;

use regex::Regex;

static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s@.\-]").expect("valid regex"));
static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Lowercases `text`, replaces anything other than word characters, whitespace,
/// `@`, `.` and `-` with a space, collapses whitespace runs and trims.
///
/// Total over every input; the empty string normalizes to itself.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = DISALLOWED.replace_all(&lowered, " ");
    let collapsed = WHITESPACE_RUN.replace_all(&stripped, " ");
    collapsed.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[&str] = &[
        "",
        "   ",
        "John DOE | Data Analyst",
        "Email: john.doe@mail.com\n\nPhone: +62 812-3456",
        "Skills:\t\tPython, SQL; (Excel) & Tableau!!!",
        "C++ / C# / Node.js — 5 years",
        "tab\tnew\nline\r\ncarriage",
    ];

    #[test]
    fn test_lowercases_and_strips_punctuation() {
        assert_eq!(
            normalize("Skills: Python, SQL & Excel!"),
            "skills python sql excel"
        );
    }

    #[test]
    fn test_keeps_email_and_dotted_tokens() {
        assert_eq!(
            normalize("Contact: Jane.Doe@Example.com (node.js, scikit-learn)"),
            "contact jane.doe@example.com node.js scikit-learn"
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \n\t "), "");
    }

    #[test]
    fn test_output_charset_and_single_spaces() {
        for sample in SAMPLES {
            let out = normalize(sample);
            assert!(
                out.chars().all(|c| c.is_ascii_lowercase()
                    || c.is_ascii_digit()
                    || matches!(c, '_' | ' ' | '@' | '.' | '-')),
                "unexpected character in {out:?}"
            );
            assert!(!out.contains("  "), "whitespace run in {out:?}");
            assert_eq!(out, out.trim());
        }
    }

    #[test]
    fn test_idempotent() {
        for sample in SAMPLES {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once);
        }
    }
}
