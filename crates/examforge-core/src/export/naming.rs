//! Download file names and content types.

/// MIME type of exported `.docx` files.
pub const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// MIME type of exported plain-text files.
pub const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// Stem used when the uploaded file name has none.
pub const FALLBACK_STEM: &str = "试卷";

const SUFFIX: &str = "_二次开发练习";

/// Returns `<topic>_二次开发练习.docx`.
pub fn docx_file_name(topic: &str) -> String {
    format!("{topic}{SUFFIX}.docx")
}

/// Returns `<stem>_二次开发练习.txt`, where the stem is everything before the
/// first `.` of the uploaded name.
pub fn text_file_name(uploaded_name: Option<&str>) -> String {
    let stem = uploaded_name
        .and_then(|name| name.split('.').next())
        .map(str::trim)
        .filter(|stem| !stem.is_empty())
        .unwrap_or(FALLBACK_STEM);
    format!("{stem}{SUFFIX}.txt")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn docx_name_uses_topic() {
        assert_eq!(docx_file_name("七选五"), "七选五_二次开发练习.docx");
    }

    #[test]
    fn text_name_stops_at_first_dot() {
        assert_eq!(text_file_name(Some("2024.gaokao.pdf")), "2024_二次开发练习.txt");
        assert_eq!(text_file_name(Some("paper.pdf")), "paper_二次开发练习.txt");
    }

    #[test]
    fn text_name_falls_back_without_stem() {
        assert_eq!(text_file_name(None), "试卷_二次开发练习.txt");
        assert_eq!(text_file_name(Some(".pdf")), "试卷_二次开发练习.txt");
    }
}
