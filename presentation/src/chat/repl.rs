//! REPL for the turn-based screening conversation
//!
//! Renders one question per turn, collects raw input, and re-prompts on
//! anything the current question cannot accept. All sequencing decisions
//! stay in the core; this loop only translates keystrokes.

use crate::ConsoleFormatter;
use navigator_application::RunScreeningUseCase;
use navigator_domain::{AnswerType, AnswerValue, Question, SubmitOutcome};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};

/// Interactive screening REPL
pub struct ScreeningRepl {
    use_case: RunScreeningUseCase,
    show_banner: bool,
}

impl ScreeningRepl {
    pub fn new(use_case: RunScreeningUseCase) -> Self {
        Self {
            use_case,
            show_banner: true,
        }
    }

    /// Set whether to print the welcome banner
    pub fn with_banner(mut self, show: bool) -> Self {
        self.show_banner = show;
        self
    }

    /// Run the interactive screening loop
    pub fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = dirs::data_dir().map(|p| p.join("symptom-navigator").join("history.txt"));

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        if self.show_banner {
            self.print_welcome();
        }

        let total = self.use_case.catalog().len();
        let (mut session, mut current) = self.use_case.start();
        println!("{}", ConsoleFormatter::format_question(&current, session.cursor(), total));

        loop {
            let readline = rl.readline("> ");

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    if line.is_empty() {
                        continue;
                    }

                    if line.starts_with('/') {
                        match line {
                            "/quit" | "/exit" => {
                                println!("Take care!");
                                break;
                            }
                            "/restart" => {
                                current = self.use_case.reset(&mut session);
                                println!(
                                    "{}",
                                    ConsoleFormatter::format_question(&current, session.cursor(), total)
                                );
                            }
                            "/help" => {
                                println!("Commands: /restart  /quit  /help");
                            }
                            other => {
                                println!("Unknown command: {} (try /help)", other);
                            }
                        }
                        continue;
                    }

                    let _ = rl.add_history_entry(line);

                    if !session.is_active() {
                        println!("This screening is finished. /restart starts a new one.");
                        continue;
                    }

                    let Some(value) = parse_answer(&current, line) else {
                        println!(
                            "Sorry, I didn't catch that (expected {}).",
                            current.answer_type().expects()
                        );
                        continue;
                    };

                    match self.use_case.submit(&mut session, value) {
                        Ok(SubmitOutcome::Next(next)) => {
                            current = next;
                            println!(
                                "{}",
                                ConsoleFormatter::format_question(&current, session.cursor(), total)
                            );
                        }
                        Ok(SubmitOutcome::Completed(verdict)) => {
                            println!("{}", ConsoleFormatter::format_verdict(&verdict));
                            println!("/restart screens again, /quit exits.");
                        }
                        Err(error) => {
                            println!("{}", error);
                        }
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Take care!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│        Symptom Navigator - Screening        │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("I'll ask a few questions about how you're feeling and");
        println!("suggest what to do next. This is guidance, not a diagnosis.");
        println!();
    }
}

/// Translate raw input into an answer value for the given question.
///
/// Returns `None` when the input cannot mean anything for this question
/// type; the caller re-prompts.
fn parse_answer(question: &Question, input: &str) -> Option<AnswerValue> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    match question.answer_type() {
        AnswerType::YesNo => match input.to_lowercase().as_str() {
            "y" | "yes" | "true" => Some(AnswerValue::Flag(true)),
            "n" | "no" | "false" => Some(AnswerValue::Flag(false)),
            _ => None,
        },
        AnswerType::MultipleChoice { options } => {
            if let Ok(number) = input.parse::<usize>() {
                return (1..=options.len())
                    .contains(&number)
                    .then(|| AnswerValue::Text(options[number - 1].clone()));
            }
            options
                .iter()
                .find(|o| o.eq_ignore_ascii_case(input))
                .map(|o| AnswerValue::Text(o.clone()))
        }
        AnswerType::FreeText => Some(AnswerValue::Text(input.to_string())),
    }
}
