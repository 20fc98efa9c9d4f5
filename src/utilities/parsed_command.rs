pub struct ParsedCommand {
    pub name: String,
    pub arguments: String,
}

impl ParsedCommand {
    /// splits an input line into a command name and its arguments, an optional leading `/` is
    /// accepted
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let line = line.strip_prefix('/').unwrap_or(line);

        let (name, arguments) =
            line.split_once(|char: char| char.is_ascii_whitespace()).unwrap_or((line, ""));

        if name.is_empty() {
            return None;
        }

        Some(Self { name: name.to_lowercase(), arguments: arguments.trim_ascii_start().into() })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse() {
        let command = ParsedCommand::parse("generate title=\"Verde Vivo\"").unwrap();
        assert_eq!(command.name, "generate");
        assert_eq!(command.arguments, "title=\"Verde Vivo\"");

        let command = ParsedCommand::parse("  /OPEN  ").unwrap();
        assert_eq!(command.name, "open");
        assert_eq!(command.arguments, "");

        let command = ParsedCommand::parse("download   /tmp/logos").unwrap();
        assert_eq!(command.arguments, "/tmp/logos");

        assert!(ParsedCommand::parse("").is_none());
        assert!(ParsedCommand::parse("   ").is_none());
        assert!(ParsedCommand::parse("/").is_none());
    }
}
