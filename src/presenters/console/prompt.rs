use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};
use std::sync::{Mutex, PoisonError};

use log::warn;

use crate::controllers::save_as::ports::PromptPort;
use crate::core::data::confirm_prompt::{ConfirmPrompt, PromptChoice};

/// Asks yes/no questions on a terminal.
pub struct ConsolePrompt<R, W> {
    input: Mutex<R>,
    output: Mutex<W>,
}

impl ConsolePrompt<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead + Send, W: Write + Send> ConsolePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: Mutex::new(input),
            output: Mutex::new(output),
        }
    }

    pub fn into_output(self) -> W {
        self.output.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

fn parse_answer(line: &str) -> Option<PromptChoice> {
    match line.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(PromptChoice::Yes),
        "n" | "no" => Some(PromptChoice::No),
        _ => None,
    }
}

impl<R: BufRead + Send, W: Write + Send> PromptPort for ConsolePrompt<R, W> {
    fn ask(&self, prompt: &ConfirmPrompt) -> Option<PromptChoice> {
        let mut input = self.input.lock().unwrap_or_else(PoisonError::into_inner);
        let mut output = self.output.lock().unwrap_or_else(PoisonError::into_inner);

        loop {
            write!(output, "[{}] {} [y/n] ", prompt.title, prompt.message).ok()?;
            output.flush().ok()?;

            let mut line = String::new();
            match input.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => {
                    if let Some(choice) = parse_answer(&line) {
                        return Some(choice);
                    }
                }
                Err(e) => {
                    warn!("could not read answer: {}", e);
                    return None;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn question() -> ConfirmPrompt {
        ConfirmPrompt::yes_no_question("\"a.ppm\" already exists. Do you want to replace it?", "Save")
    }

    #[test]
    fn test_yes_and_no_answers() {
        let yes = ConsolePrompt::new(Cursor::new("y\n"), Vec::new());
        let no = ConsolePrompt::new(Cursor::new("No\n"), Vec::new());

        assert_eq!(yes.ask(&question()), Some(PromptChoice::Yes));
        assert_eq!(no.ask(&question()), Some(PromptChoice::No));
    }

    #[test]
    fn test_reasks_until_answer_is_understood() {
        let prompt = ConsolePrompt::new(Cursor::new("maybe\nyes\n"), Vec::new());

        assert_eq!(prompt.ask(&question()), Some(PromptChoice::Yes));

        let written = String::from_utf8(prompt.into_output()).unwrap();
        assert_eq!(written.matches("[y/n]").count(), 2);
        assert!(written.starts_with("[Save] \"a.ppm\" already exists."));
    }

    #[test]
    fn test_end_of_input_is_no_answer() {
        let prompt = ConsolePrompt::new(Cursor::new(""), Vec::new());

        assert_eq!(prompt.ask(&question()), None);
    }
}
