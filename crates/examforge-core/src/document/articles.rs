//! Reading-comprehension passage detection.

/// Maximum number of passages a paper carries (A through D).
pub const MAX_ARTICLES: usize = 4;

/// Returns `true` if the trimmed line is a lone passage marker `A`..`D`.
fn is_article_marker(line: &str) -> bool {
    matches!(line.trim(), "A" | "B" | "C" | "D")
}

/// Splits the text into reading passages.
///
/// A line holding only one of the letters `A`..`D` opens a new passage, and the
/// marker line is kept as the passage's first line. Text before the first
/// marker is ignored. At most [`MAX_ARTICLES`] passages are returned.
pub fn split_articles(text: &str) -> Vec<String> {
    let mut articles = Vec::new();
    let mut current: Option<Vec<&str>> = None;

    for line in text.lines() {
        if is_article_marker(line) {
            if let Some(lines) = current.take() {
                articles.push(lines.join("\n"));
                if articles.len() == MAX_ARTICLES {
                    return articles;
                }
            }
            current = Some(vec![line.trim()]);
        } else if let Some(lines) = current.as_mut() {
            lines.push(line);
        }
    }

    if let Some(lines) = current
        && articles.len() < MAX_ARTICLES
    {
        articles.push(lines.join("\n"));
    }

    articles
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_markers_means_no_articles() {
        assert!(split_articles("Part one\nReading comprehension\nQuestions").is_empty());
    }

    #[test]
    fn splits_on_lone_letters() {
        let text = "Section header\nA\nFirst passage.\nMore text.\n B \nSecond passage.";
        let articles = split_articles(text);

        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0], "A\nFirst passage.\nMore text.");
        assert_eq!(articles[1], "B\nSecond passage.");
    }

    #[test]
    fn letters_inside_sentences_are_not_markers() {
        let articles = split_articles("A\nA good day.\nChoose B or C.");
        assert_eq!(articles.len(), 1);
    }

    #[test]
    fn caps_at_four_articles() {
        let text = "A\none\nB\ntwo\nC\nthree\nD\nfour\nA\nfive";
        let articles = split_articles(text);

        assert_eq!(articles.len(), MAX_ARTICLES);
        assert!(articles[3].ends_with("four"));
    }
}
