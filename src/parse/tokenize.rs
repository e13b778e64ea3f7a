use super::{CONCURRENT_SEPARATOR, REDIRECT_OPERATOR};

/// All command groups of one input line, in order of appearance.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CommandLine {
    groups: Vec<Vec<String>>,
}

impl CommandLine {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl IntoIterator for CommandLine {
    type Item = Vec<String>;
    type IntoIter = std::vec::IntoIter<Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

/// Token separators: spaces, tabs and line endings. Other whitespace, such
/// as a no-break space, stays inside a token.
fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// Splits `line` into `&`-separated groups and each group into tokens.
///
/// Never fails: anything that doesn't form a token is dropped, so blank or
/// separator-only input gives an empty [`CommandLine`]. `>` always stands
/// alone as a token even when written against a word (`ls>out`).
pub fn tokenize(line: &str) -> CommandLine {
    let groups = line
        .split(CONCURRENT_SEPARATOR)
        .map(|group| group.trim_matches(is_blank))
        .filter(|group| !group.is_empty())
        .map(split_tokens)
        .filter(|tokens| !tokens.is_empty())
        .collect();

    CommandLine { groups }
}

fn split_tokens(group: &str) -> Vec<String> {
    let mut tokens = Vec::new();

    for word in group.split(is_blank).filter(|word| !word.is_empty()) {
        let mut rest = word;
        while let Some(pos) = rest.find(REDIRECT_OPERATOR) {
            if pos > 0 {
                tokens.push(rest[..pos].to_string());
            }
            tokens.push(REDIRECT_OPERATOR.to_string());
            rest = &rest[pos + REDIRECT_OPERATOR.len_utf8()..];
        }
        if !rest.is_empty() {
            tokens.push(rest.to_string());
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groups(line: &str) -> Vec<Vec<String>> {
        tokenize(line).into_iter().collect()
    }

    #[test]
    fn test_blank_lines_are_empty() {
        for line in ["", "   ", "\t\t", "\n", " \t \n"] {
            assert!(tokenize(line).is_empty(), "{:?}", line);
        }
    }

    #[test]
    fn test_separator_only_lines_are_empty() {
        assert!(tokenize("&").is_empty());
        assert!(tokenize(" & & \t&\n").is_empty());
    }

    #[test]
    fn test_single_command() {
        assert_eq!(groups("ls -la /tmp\n"), vec![vec!["ls", "-la", "/tmp"]]);
    }

    #[test]
    fn test_runs_of_whitespace() {
        assert_eq!(
            groups("  echo \t hello    world  "),
            vec![vec!["echo", "hello", "world"]]
        );
    }

    #[test]
    fn test_concurrent_groups_keep_order() {
        assert_eq!(
            groups("foo a & bar&baz b c"),
            vec![vec!["foo", "a"], vec!["bar"], vec!["baz", "b", "c"]]
        );
    }

    #[test]
    fn test_empty_groups_dropped() {
        assert_eq!(groups("& ls && pwd &"), vec![vec!["ls"], vec!["pwd"]]);
        assert_eq!(groups("a & & b"), vec![vec!["a"], vec!["b"]]);
    }

    #[test]
    fn test_redirect_split_from_words() {
        assert_eq!(groups("ls>out"), vec![vec!["ls", ">", "out"]]);
        assert_eq!(groups("ls >out"), vec![vec!["ls", ">", "out"]]);
        assert_eq!(groups("ls> out"), vec![vec!["ls", ">", "out"]]);
        assert_eq!(groups("a>>b"), vec![vec!["a", ">", ">", "b"]]);
    }

    #[test]
    fn test_redirect_alone_stays_a_group() {
        assert_eq!(groups(">"), vec![vec![">"]]);
    }

    #[test]
    fn test_only_ascii_blanks_separate() {
        assert_eq!(
            groups("echo a\u{a0}b\r\n"),
            vec![vec!["echo", "a\u{a0}b"]]
        );
        assert!(tokenize("\r\n").is_empty());
    }

    #[test]
    fn test_join_reproduces_trimmed_tokens() {
        let line = "  cat   file.txt\tother.txt  \n";
        let joined: Vec<String> = tokenize(line)
            .into_iter()
            .map(|tokens| tokens.join(" "))
            .collect();
        assert_eq!(joined, vec!["cat file.txt other.txt"]);
        assert_eq!(
            joined[0].split(' ').collect::<Vec<_>>(),
            line.split_whitespace().collect::<Vec<_>>()
        );
    }
}
