//! Help text listing every command.

/// Command reference shown for `?`.
pub const HELP_TEXT: &str = "\
?      display this help
.      toggle row cursor on and off
;      toggle line cursor on and off
h      move cursor left
j      move cursor up
k      move cursor down
l      move cursor right
^      move cursor to beginning of the line
$      move cursor to end of the line
w      move cursor to beginning of next word
b      move cursor to beginning of previous word
i <t>  insert <t> before cursor
a <t>  append <t> after cursor
x      delete character at cursor
dw     delete word and trailing spaces at cursor
yy     copy current line to clipboard
p      paste copied line below current line
P      paste copied line above current line
dd     delete line
o      insert empty line below
O      insert empty line above
u      undo previous command
r      repeat last command
s      show content
q      quit program";

/// Returns the help text one line at a time.
pub fn help_lines() -> impl Iterator<Item = &'static str> {
    HELP_TEXT.lines()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::command::parse_command;

    #[test]
    fn test_every_listed_command_parses() {
        for line in help_lines() {
            let token = line.split_whitespace().next().unwrap();
            let raw = match token {
                "i" | "a" => format!("{} text", token),
                _ => token.to_string(),
            };
            assert!(parse_command(&raw).is_ok(), "help lists unparseable '{}'", raw);
        }
    }
}
