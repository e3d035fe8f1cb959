//! Turns one line of operator input into a structured command
//!
//! Tokens are separated by whitespace. `COURSE ADD` and `COURSE UPDATE` take a
//! free-text course name, so for those two the last token is always the start
//! date and everything between the fixed arguments and the date is joined back
//! together with single spaces. All other commands receive their remaining
//! tokens unchanged.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub command: String,
    pub subcommand: Option<String>,
    pub args: Vec<String>,
}

pub fn parse_command(input: &str) -> ParsedCommand {
    let parts: Vec<&str> = input.split_whitespace().collect();

    let command = parts.first().copied().unwrap_or_default().to_string();
    let subcommand = parts.get(1).map(|s| s.to_string());

    let args = match (command.as_str(), subcommand.as_deref()) {
        ("COURSE", Some("ADD")) => {
            let (name, start_date) = split_name_and_date(&parts, 2);
            vec![name, start_date]
        }
        ("COURSE", Some("UPDATE")) => {
            let id = parts.get(2).copied().unwrap_or_default().to_string();
            let (name, start_date) = split_name_and_date(&parts, 3);
            vec![id, name, start_date]
        }
        _ => parts.iter().skip(2).map(|s| s.to_string()).collect(),
    };

    ParsedCommand {
        command,
        subcommand,
        args,
    }
}

/// Last token is the date, tokens in `[name_start, last)` form the name.
fn split_name_and_date(parts: &[&str], name_start: usize) -> (String, String) {
    if parts.len() <= name_start {
        return (String::new(), String::new());
    }
    let last = parts.len() - 1;
    let start_date = parts[last].to_string();
    let name = parts[name_start..last].join(" ");
    (name, start_date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_add_rejoins_multi_word_name() {
        let result = parse_command("COURSE ADD Easy introduction to React 2026-05-01");
        assert_eq!(result.command, "COURSE");
        assert_eq!(result.subcommand.as_deref(), Some("ADD"));
        assert_eq!(result.args, vec!["Easy introduction to React", "2026-05-01"]);
    }

    #[test]
    fn test_course_update_keeps_id_then_name_then_date() {
        let result = parse_command("COURSE UPDATE 42 New Name Here 2026-01-01");
        assert_eq!(result.args, vec!["42", "New Name Here", "2026-01-01"]);
    }

    #[test]
    fn test_repeated_whitespace_collapses_in_name() {
        let result = parse_command("  COURSE ADD   Rust   basics  2026-02-03 ");
        assert_eq!(result.args, vec!["Rust basics", "2026-02-03"]);
    }

    #[test]
    fn test_course_add_with_only_one_token_has_empty_name() {
        let result = parse_command("COURSE ADD 2026-05-01");
        assert_eq!(result.args, vec!["", "2026-05-01"]);

        let result = parse_command("COURSE ADD");
        assert_eq!(result.args, vec!["", ""]);
    }

    #[test]
    fn test_other_commands_keep_literal_tokens() {
        let result = parse_command("TRAINEE ADD Ada Lovelace");
        assert_eq!(result.command, "TRAINEE");
        assert_eq!(result.args, vec!["Ada", "Lovelace"]);

        let result = parse_command("COURSE JOIN 12 34");
        assert_eq!(result.args, vec!["12", "34"]);
    }

    #[test]
    fn test_missing_subcommand() {
        let result = parse_command("COURSE");
        assert_eq!(result.command, "COURSE");
        assert_eq!(result.subcommand, None);
        assert!(result.args.is_empty());
    }
}
