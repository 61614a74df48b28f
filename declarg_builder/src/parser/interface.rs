use terminal_size::{terminal_size, Width};

use crate::parser::base::ValidationError;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

// Let's assume the average word length is 5.
// Then 17 is a good minimum, because it allows precisely 3 words with a space between them.
pub(crate) const MINIMUM_WRAP_WIDTH: usize = 17;

/// Wrap a paragraph into lines of at most `width` characters.
/// Words longer than a line are hyphenated.
pub(crate) fn chunk(paragraph: &str, width: usize) -> Vec<String> {
    // Hyphenation needs room for at least one character plus the hyphen.
    let width = std::cmp::max(width, 2);
    let mut lines = Vec::default();
    let mut current = String::default();

    for word in paragraph.split(' ') {
        if !word.is_empty() {
            if current.is_empty() {
                hyphenate(width, &mut lines, &mut current, word);
            } else if current.chars().count() + word.chars().count() + 1 <= width {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(current);
                current = String::default();
                hyphenate(width, &mut lines, &mut current, word);
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

fn hyphenate(width: usize, lines: &mut Vec<String>, current: &mut String, word: &str) {
    let characters: Vec<char> = word.chars().collect();
    let increment = width - 1;
    let mut left = 0;

    while characters.len() - left > width {
        let part: String = characters[left..left + increment].iter().collect();
        lines.push(format!("{part}-"));
        left += increment;
    }

    current.extend(characters[left..].iter());
}

/// Where the presentation helpers send their output.
pub(crate) trait UserInterface {
    fn print(&self, message: String);
    fn print_error(&self, error: &ValidationError);
    /// The column width available for help text, if known.
    fn width(&self) -> Option<usize>;
}

#[derive(Default)]
pub(crate) struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        println!("{message}");
    }

    fn print_error(&self, error: &ValidationError) {
        eprintln!("{error}");
    }

    fn width(&self) -> Option<usize> {
        let width = terminal_size().map(|(Width(w), _)| w as usize);

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Terminal width: {width:?}.");
        }

        width
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", 5, vec![])]
    #[case("   ", 5, vec![])]
    #[case("abc", 5, vec!["abc"])]
    #[case("abc def", 7, vec!["abc def"])]
    #[case("abc def", 6, vec!["abc", "def"])]
    #[case("abc  def", 7, vec!["abc def"])]
    #[case("abcdefgh", 5, vec!["abcd-", "efgh"])]
    #[case("abcdefghi", 5, vec!["abcd-", "efghi"])]
    #[case("abcdefghij", 5, vec!["abcd-", "efgh-", "ij"])]
    #[case("ab abcdefgh", 5, vec!["ab", "abcd-", "efgh"])]
    #[case("abc", 0, vec!["a-", "bc"])]
    #[case("éèêëē", 3, vec!["éè-", "êëē"])]
    fn chunk_paragraph(#[case] paragraph: &str, #[case] width: usize, #[case] expected: Vec<&str>) {
        assert_eq!(chunk(paragraph, width), expected);
    }

    #[test]
    fn chunk_within_width() {
        let paragraph = "The quick brown fox jumps over the extraordinarily lazy dog.";

        for width in 2..paragraph.len() {
            for line in chunk(paragraph, width) {
                assert!(
                    line.chars().count() <= width,
                    "'{line}' exceeds width {width}"
                );
            }
        }
    }

    #[test]
    fn in_memory() {
        // Setup
        let interface = util::InMemoryInterface::with_width(40);

        // Execute
        interface.print("a".to_string());
        interface.print("b".to_string());
        interface.print_error(&ValidationError::new("x", "y"));

        // Verify
        assert_eq!(interface.width(), Some(40));
        let (message, error) = interface.consume();
        assert_eq!(message, Some("a\nb".to_string()));
        assert_eq!(error, Some("Invalid argument 'x': y.".to_string()));
    }
}
