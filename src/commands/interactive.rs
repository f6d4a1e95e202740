//! Line-based interactive solver
//!
//! Suggests a guess, reads back the feedback the game showed, and repeats
//! until the secret is found.

use crate::core::{Pattern, PatternError, WORD_LENGTH};
use crate::output::formatters::{guess_count, rule_label};
use crate::solver::{
    GuessSelector, Outcome, Session, SolverError, calculate_metrics, divide_alphabet,
};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Remaining candidates are listed once there are this few
const LIST_CANDIDATES: usize = 10;

/// Feedback for one guess, as typed by the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    /// Word actually played, when the player ignored the suggestion
    pub guess: Option<String>,
    pub pattern: Pattern,
}

/// Parse a feedback line
///
/// Accepts anything [`Pattern::parse`] does, optionally prefixed with the
/// word that was played: `"crane,0,0,1,0,2"` or `"crane,--Y-G"`.
///
/// # Errors
///
/// Returns `PatternError` if the pattern part is malformed.
///
/// # Examples
/// ```
/// use greedy_wordle::commands::parse_feedback;
///
/// let plain = parse_feedback("00102").unwrap();
/// assert_eq!(plain.guess, None);
///
/// let chosen = parse_feedback("CRANE,0,0,1,0,2").unwrap();
/// assert_eq!(chosen.guess.as_deref(), Some("crane"));
/// assert_eq!(chosen.pattern, plain.pattern);
/// ```
pub fn parse_feedback(input: &str) -> Result<Feedback, PatternError> {
    let input = input.trim();

    if let Some((head, rest)) = input.split_once(',')
        && head.trim().len() == WORD_LENGTH
        && head.trim().chars().all(|c| c.is_ascii_alphabetic())
    {
        return Ok(Feedback {
            guess: Some(head.trim().to_lowercase()),
            pattern: Pattern::parse(rest)?,
        });
    }

    Ok(Feedback {
        guess: None,
        pattern: Pattern::parse(input)?,
    })
}

enum Command {
    Quit,
    NewGame,
    Report(Feedback),
}

fn parse_command(input: &str) -> Result<Command, PatternError> {
    match input.trim().to_lowercase().as_str() {
        "quit" | "q" | "exit" => Ok(Command::Quit),
        "new" | "n" => Ok(Command::NewGame),
        "win" | "correct" | "solved" => Ok(Command::Report(Feedback {
            guess: None,
            pattern: Pattern::PERFECT,
        })),
        other => parse_feedback(other).map(Command::Report),
    }
}

/// Run the interactive solver until the player quits or input ends
///
/// # Errors
///
/// Returns an error if reading or writing fails, or if the solver reaches a
/// state it cannot suggest a guess for.
pub fn run_interactive<R: BufRead, W: Write>(
    selector: &GuessSelector<'_>,
    hard: bool,
    mut input: R,
    mut output: W,
) -> anyhow::Result<()> {
    let mut session = Session::new(selector, hard)?;
    let mut history: Vec<(String, Pattern)> = Vec::new();

    print_intro(&mut output, hard)?;

    loop {
        print_turn(&mut output, &session)?;

        let Some(line) = ask(&mut input, &mut output, "Feedback")? else {
            return Ok(());
        };

        let feedback = match parse_command(&line) {
            Ok(Command::Quit) => {
                writeln!(output, "\nThanks for playing!")?;
                return Ok(());
            }
            Ok(Command::NewGame) => {
                session.restart()?;
                history.clear();
                writeln!(output, "\n{}\n", "New game started".bright_cyan())?;
                continue;
            }
            Ok(Command::Report(feedback)) => feedback,
            Err(e) => {
                writeln!(output, "{} {e}", "Invalid feedback:".red())?;
                writeln!(output, "Use G/Y/- letters, digits 0-2, or squares\n")?;
                continue;
            }
        };

        let word = feedback
            .guess
            .clone()
            .unwrap_or_else(|| session.suggest().text().to_string());
        let result = match &feedback.guess {
            Some(guess) => session.observe_guess(guess, feedback.pattern),
            None => session.observe(feedback.pattern),
        };

        match result {
            Ok(Outcome::Continue { .. }) => history.push((word, feedback.pattern)),
            Ok(Outcome::Solved { turns }) => {
                history.push((word, feedback.pattern));
                print_victory(&mut output, turns, &history)?;

                let again = ask(&mut input, &mut output, "Play again? (yes/no)")?
                    .map(|answer| answer.to_lowercase());
                if !matches!(again.as_deref(), Some("y" | "yes")) {
                    writeln!(output, "\nThanks for playing!")?;
                    return Ok(());
                }
                session.restart()?;
                history.clear();
                writeln!(output, "\n{}\n", "New game started".bright_cyan())?;
            }
            Err(e @ (SolverError::InconsistentFeedback { .. } | SolverError::UnknownGuess(_))) => {
                writeln!(output, "{} {e}", "Rejected:".red())?;
                writeln!(output, "Check the feedback and enter it again\n")?;
            }
            Err(e) => return Err(e.into()),
        }
    }
}

/// Prompt and read one line; `None` at end of input
fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(output, "{prompt}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn print_intro<W: Write>(output: &mut W, hard: bool) -> io::Result<()> {
    writeln!(output, "{}", "Wordle Solver - Interactive Mode".bright_cyan().bold())?;
    if hard {
        writeln!(output, "{}", "Hard mode: only remaining candidates are suggested".yellow())?;
    }
    writeln!(output)?;
    writeln!(output, "After each guess, enter the feedback pattern:")?;
    writeln!(output, "  - G or 2 for green (correct position)")?;
    writeln!(output, "  - Y or 1 for yellow (wrong position)")?;
    writeln!(output, "  - '-' or 0 for gray (not in word)")?;
    writeln!(output, "  - prefix with the word if you played something else: crane,GY--G")?;
    writeln!(output, "Commands: 'win', 'new', 'quit'\n")
}

fn print_turn<W: Write>(output: &mut W, session: &Session<'_>) -> io::Result<()> {
    let remaining = session.alphabet().len();
    let suggestion = session.suggestion();
    let word = session.suggest();

    writeln!(output, "{}", "─".repeat(60))?;
    writeln!(output, "Turn {}: {remaining} candidates remaining", session.turn())?;
    writeln!(output, "{}", "─".repeat(60))?;

    writeln!(
        output,
        "\nSuggested guess: {} ({})",
        word.text().to_uppercase().bright_yellow().bold(),
        rule_label(suggestion.rule)
    )?;

    if remaining > 1 {
        let table = session.selector().table();
        let partition = divide_alphabet(table, suggestion.guess, session.alphabet());
        let metrics = calculate_metrics(&partition);
        writeln!(output, "   Entropy:          {:.3} bits", metrics.entropy)?;
        writeln!(
            output,
            "   Expected remain:  {:.1} candidates",
            metrics.expected_remaining
        )?;
        writeln!(output, "   Worst case:       {} candidates", metrics.max_partition)?;
    }
    writeln!(output)?;

    if remaining <= LIST_CANDIDATES {
        writeln!(output, "Remaining candidates:")?;
        for candidate in session.candidates() {
            writeln!(output, "  • {}", candidate.text().to_uppercase())?;
        }
        writeln!(output)?;
    }
    Ok(())
}

fn print_victory<W: Write>(
    output: &mut W,
    turns: usize,
    history: &[(String, Pattern)],
) -> io::Result<()> {
    writeln!(output, "\n{}", "═".repeat(60).bright_cyan())?;
    writeln!(
        output,
        "{}",
        format!("Solved in {}!", guess_count(turns)).bright_green().bold()
    )?;
    for (i, (word, pattern)) in history.iter().enumerate() {
        writeln!(
            output,
            "  {}. {} {}",
            i + 1,
            word.to_uppercase().bright_white().bold(),
            pattern.to_emoji()
        )?;
    }
    writeln!(output, "{}\n", "═".repeat(60).bright_cyan())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{PatternTable, SelectorConfig, play};
    use crate::wordlists::words_from_slice;
    use std::io::Cursor;

    fn table() -> PatternTable {
        PatternTable::build(
            words_from_slice(&["soare", "three", "chimp"]),
            words_from_slice(&[
                "abide", "shape", "shake", "shame", "crane", "slate", "irate", "trace", "stare",
            ]),
        )
        .unwrap()
    }

    fn run(selector: &GuessSelector<'_>, script: &str) -> String {
        colored::control::set_override(false);
        let mut output = Vec::new();
        run_interactive(selector, false, Cursor::new(script), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    /// Feedback lines that lead the solver to `secret`
    fn script_for(selector: &GuessSelector<'_>, secret: &str) -> String {
        let table = selector.table();
        let game = play(selector, table.candidate_id(secret).unwrap(), false).unwrap();
        game.steps
            .iter()
            .map(|step| format!("{}\n", step.pattern))
            .collect()
    }

    #[test]
    fn parse_feedback_plain_patterns() {
        let expected = Pattern::from_digits([0, 0, 1, 0, 2]).unwrap();

        for line in ["00102", "0,0,1,0,2", " --y-g ", "⬜⬜🟨⬜🟩"] {
            let feedback = parse_feedback(line).unwrap();
            assert_eq!(feedback.guess, None);
            assert_eq!(feedback.pattern, expected);
        }
    }

    #[test]
    fn parse_feedback_with_played_word() {
        let feedback = parse_feedback("Three, 0, 0, 0, 0, 2").unwrap();
        assert_eq!(feedback.guess.as_deref(), Some("three"));
        assert_eq!(feedback.pattern.digits(), [0, 0, 0, 0, 2]);

        let feedback = parse_feedback("three,----G").unwrap();
        assert_eq!(feedback.guess.as_deref(), Some("three"));
    }

    #[test]
    fn parse_feedback_rejects_garbage() {
        assert_eq!(parse_feedback("0010"), Err(PatternError::WrongLength(4)));
        assert!(parse_feedback("three,0,0").is_err());
        assert!(parse_feedback("hello").is_err());
    }

    #[test]
    fn quit_immediately() {
        let table = table();
        let selector = GuessSelector::new(&table, &SelectorConfig::default()).unwrap();

        let out = run(&selector, "quit\n");
        assert!(out.contains("Turn 1: 9 candidates remaining"));
        assert!(out.contains("SOARE"));
        assert!(out.contains("Thanks for playing!"));
    }

    #[test]
    fn end_of_input_stops_cleanly() {
        let table = table();
        let selector = GuessSelector::new(&table, &SelectorConfig::default()).unwrap();

        let out = run(&selector, "");
        assert!(out.contains("Turn 1:"));
        assert!(!out.contains("Thanks for playing!"));
    }

    #[test]
    fn plays_a_game_to_the_end() {
        let table = table();
        let selector = GuessSelector::new(&table, &SelectorConfig::default()).unwrap();
        let script = script_for(&selector, "shame");
        let turns = script.lines().count();

        let out = run(&selector, &format!("{script}no\n"));
        assert!(out.contains(&format!("Solved in {}!", guess_count(turns))));
        assert!(out.contains("SHAME 🟩🟩🟩🟩🟩"));
        assert!(out.contains("Thanks for playing!"));
    }

    #[test]
    fn bad_feedback_is_reprompted() {
        let table = table();
        let selector = GuessSelector::new(&table, &SelectorConfig::default()).unwrap();

        // 11111 would make soare an anagram of the secret
        let out = run(&selector, "xyz\n11111\nquit\n");
        assert!(out.contains("Invalid feedback:"));
        assert!(out.contains("Rejected:"));
        assert!(!out.contains("Turn 2:"));
        assert_eq!(out.matches("Turn 1:").count(), 3);
    }

    #[test]
    fn unknown_played_word_is_rejected() {
        let table = table();
        let selector = GuessSelector::new(&table, &SelectorConfig::default()).unwrap();

        let out = run(&selector, "zzzzz,00000\nquit\n");
        assert!(out.contains("'zzzzz' is not an allowed guess"));
    }

    #[test]
    fn play_again_and_new_game_restart() {
        let table = table();
        let selector = GuessSelector::new(&table, &SelectorConfig::default()).unwrap();
        let script = script_for(&selector, "abide");
        let first_feedback = script.lines().next().unwrap();

        let out = run(
            &selector,
            &format!("{script}yes\n{first_feedback}\nnew\nquit\n"),
        );
        assert_eq!(out.matches("New game started").count(), 2);
        assert_eq!(out.matches("Turn 1: 9 candidates remaining").count(), 3);
    }
}
