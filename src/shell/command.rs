/// A parsed prompt line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Current,
    /// `cd <name>`; `None` when the argument is missing.
    ChangeInto(Option<String>),
    ChangeToParent,
    Reset,
    List,
    Size,
    Help,
    Exit,
    Unknown(String),
}

impl Command {
    /// Parses one line of input. Only the first two whitespace separated
    /// tokens are considered; `exit` is matched ignoring ASCII case, every
    /// other command is case sensitive.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.eq_ignore_ascii_case("exit") {
            return Command::Exit;
        }

        let mut tokens = line.split_whitespace();
        let command = tokens.next().unwrap_or_default();
        let argument = tokens.next();

        match command {
            "current" => Command::Current,
            "cd" => Command::ChangeInto(argument.map(str::to_owned)),
            "cd.." => Command::ChangeToParent,
            "reset" => Command::Reset,
            "ls" => Command::List,
            "size" => Command::Size,
            "help" => Command::Help,
            other => Command::Unknown(other.to_owned()),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::*;

    use super::*;

    #[rstest]
    #[case("current", Command::Current)]
    #[case("cd documents", Command::ChangeInto(Some("documents".into())))]
    #[case("  cd   work  ", Command::ChangeInto(Some("work".into())))]
    #[case("cd work extra tokens", Command::ChangeInto(Some("work".into())))]
    #[case("cd", Command::ChangeInto(None))]
    #[case("cd ..", Command::ChangeInto(Some("..".into())))]
    #[case("cd..", Command::ChangeToParent)]
    #[case("reset", Command::Reset)]
    #[case("ls", Command::List)]
    #[case("ls -la", Command::List)]
    #[case("size", Command::Size)]
    #[case("help", Command::Help)]
    #[case("exit", Command::Exit)]
    #[case("EXIT", Command::Exit)]
    #[case("  Exit ", Command::Exit)]
    #[case("LS", Command::Unknown("LS".into()))]
    #[case("exit now", Command::Unknown("exit".into()))]
    #[case("mkdir new", Command::Unknown("mkdir".into()))]
    #[case("", Command::Unknown(String::new()))]
    fn parses_commands(#[case] line: &str, #[case] expected: Command) {
        assert_eq!(Command::parse(line), expected);
    }
}
