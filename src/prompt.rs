//! Prompt buffer rendering and readback parsing
//!
//! The prompt is the text handed to the user's editor: one `keep <version>`
//! line per scanned version plus a comment block documenting the commands.
//! The readback is the edited text, from which drop directives are recovered.

/// Render the editor prompt for a list of scanned versions.
///
/// One `keep <version>` line per version in input order, a blank line, then
/// the fixed command reference. Pure function.
pub fn render_prompt(versions: &[String]) -> String {
    let mut buf = String::new();

    for version in versions {
        buf.push_str("keep ");
        buf.push_str(version);
        buf.push('\n');
    }

    buf.push('\n');
    buf.push_str("# Commands:\n");
    buf.push_str("# k, keep <version> = keep this version\n");
    buf.push_str("# d, drop <version> = delete all files associated with this version\n");

    buf
}

/// Extract the versions marked for deletion from the edited prompt.
///
/// Comment lines (`#`) are skipped. A line starting with `drop ` or `d `
/// marks the remainder after the first space, trimmed, for deletion if it
/// exactly matches a known version; unknown versions are silently ignored.
/// Every other line, including untouched `keep` lines, is ignored. Duplicates
/// are preserved in input order.
pub fn parse_readback(lines: &[String], known_versions: &[String]) -> Vec<String> {
    let mut drops = Vec::new();

    for line in lines {
        if line.starts_with('#') {
            continue;
        }

        if line.starts_with("drop ") || line.starts_with("d ") {
            let Some((_, rest)) = line.split_once(' ') else {
                continue;
            };
            let version = rest.trim();
            if known_versions.iter().any(|known| known == version) {
                drops.push(version.to_string());
            }
        }
    }

    drops
}

#[cfg(test)]
mod tests {
    use super::*;

    fn versions(list: &[&str]) -> Vec<String> {
        list.iter().map(|v| v.to_string()).collect()
    }

    fn lines(text: &str) -> Vec<String> {
        text.lines().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_render_prompt_lists_versions_in_order() {
        let prompt = render_prompt(&versions(&["5.15.0", "5.10.0"]));
        assert_eq!(
            prompt,
            "keep 5.15.0\n\
             keep 5.10.0\n\
             \n\
             # Commands:\n\
             # k, keep <version> = keep this version\n\
             # d, drop <version> = delete all files associated with this version\n"
        );
    }

    #[test]
    fn test_render_prompt_no_versions() {
        let prompt = render_prompt(&[]);
        assert_eq!(
            prompt,
            "\n\
             # Commands:\n\
             # k, keep <version> = keep this version\n\
             # d, drop <version> = delete all files associated with this version\n"
        );
    }

    #[test]
    fn test_unmodified_prompt_yields_no_drops() {
        let known = versions(&["5.10.0", "5.15.0"]);
        let readback = lines(&render_prompt(&known));
        assert!(parse_readback(&readback, &known).is_empty());
    }

    #[test]
    fn test_long_and_short_forms_are_equivalent() {
        let known = versions(&["5.10.0"]);
        assert_eq!(
            parse_readback(&lines("drop 5.10.0"), &known),
            vec!["5.10.0"]
        );
        assert_eq!(parse_readback(&lines("d 5.10.0"), &known), vec!["5.10.0"]);
    }

    #[test]
    fn test_unknown_version_is_ignored() {
        let known = versions(&["5.10.0", "5.15.0"]);
        assert!(parse_readback(&lines("drop 9.9.9"), &known).is_empty());
    }

    #[test]
    fn test_comment_is_never_a_directive() {
        let known = versions(&["5.10.0"]);
        assert!(parse_readback(&lines("# drop 5.10.0"), &known).is_empty());
    }

    #[test]
    fn test_extra_whitespace_around_version_is_trimmed() {
        let known = versions(&["5.10.0"]);
        assert_eq!(parse_readback(&lines("d  5.10.0 "), &known), vec!["5.10.0"]);
    }

    #[test]
    fn test_directive_without_argument_is_ignored() {
        let known = versions(&["5.10.0"]);
        assert!(parse_readback(&lines("drop"), &known).is_empty());
        assert!(parse_readback(&lines("d"), &known).is_empty());
    }

    #[test]
    fn test_prefix_must_match_exactly() {
        let known = versions(&["5.10.0"]);
        assert!(parse_readback(&lines("droppy 5.10.0"), &known).is_empty());
        assert!(parse_readback(&lines("delete 5.10.0"), &known).is_empty());
    }

    #[test]
    fn test_duplicates_are_preserved() {
        let known = versions(&["5.10.0"]);
        let readback = lines("drop 5.10.0\nd 5.10.0");
        assert_eq!(parse_readback(&readback, &known), vec!["5.10.0", "5.10.0"]);
    }

    #[test]
    fn test_mixed_buffer() {
        let known = versions(&["5.10.0", "5.15.0", "6.1.0"]);
        let readback = lines(
            "keep 5.10.0\n\
             drop 5.15.0\n\
             garbage line\n\
             d 6.1.0\n\
             \n\
             # d 5.10.0",
        );
        assert_eq!(parse_readback(&readback, &known), vec!["5.15.0", "6.1.0"]);
    }
}
