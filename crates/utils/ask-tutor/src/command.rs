//! Input line parsing for the terminal host.

/// What one line typed at the prompt asks for.
#[derive(Debug, PartialEq, Eq)]
pub enum Command<'a> {
    /// Plain text: send it as the next user turn (untrimmed).
    Ask(&'a str),
    /// `/select <text>`: offer text as selection context, as a browser selection would.
    Select(&'a str),
    /// `/unselect`: dismiss the captured selection.
    Unselect,
    /// `/clear`: start over.
    Clear,
    /// `/help`
    Help,
    /// `/quit` or `/exit`
    Quit,
    /// Any other `/word`.
    Unknown(&'a str),
}

pub const HELP: &str = "\
Type a question and press Enter.
  /select <text>  use <text> as selected page context for the next question
  /unselect       dismiss the selected text
  /clear          clear the conversation
  /quit           exit";

pub fn parse(line: &str) -> Command<'_> {
    let trimmed = line.trim_start();
    let Some(rest) = trimmed.strip_prefix('/') else {
        return Command::Ask(line);
    };

    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg),
        None => (rest.trim_end(), ""),
    };

    match name {
        "select" => Command::Select(arg),
        "unselect" => Command::Unselect,
        "clear" => Command::Clear,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => Command::Unknown(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_a_question() {
        assert_eq!(parse("  What is a node? "), Command::Ask("  What is a node? "));
        assert_eq!(parse(""), Command::Ask(""));
    }

    #[test]
    fn test_commands() {
        assert_eq!(parse("/clear"), Command::Clear);
        assert_eq!(parse("/quit\n"), Command::Quit);
        assert_eq!(parse("/exit"), Command::Quit);
        assert_eq!(parse("/unselect"), Command::Unselect);
        assert_eq!(parse("/help"), Command::Help);
        assert_eq!(parse("/frobnicate now"), Command::Unknown("frobnicate"));
    }

    #[test]
    fn test_select_keeps_argument() {
        assert_eq!(
            parse("/select Nodes publish on topics"),
            Command::Select("Nodes publish on topics")
        );
        assert_eq!(parse("/select"), Command::Select(""));
    }
}
