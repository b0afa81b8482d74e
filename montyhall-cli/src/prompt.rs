//! Interactive session loop
use std::io::{self, BufRead, Write};

use anyhow::Result;
use montyhall_game::{ExperimentConfig, ExperimentSummary, Strategy, run_experiment};
use thiserror::Error;

const QUIT_HINT: &str = "\nInput blank to quit.\n";
const DOORS_PROMPT: &str = "How many doors would you like to have? (N>0) ";
const TRIES_PROMPT: &str = "How many tries would you like to execute? (N>0) ";
const CHANGE_PROMPT: &str = "Would you like to change your pick? (Y/N) ";

/// Rejections surfaced to the user between prompts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
enum PromptError {
    #[error("{value} is less than 0. The integer must be greater than 0.")]
    NonPositive { value: i64 },
    #[error("{input} is an invalid input.")]
    Invalid { input: String },
}

/// Drive the prompt loop until the user quits with a blank line.
///
/// Each round reads a door count, a trial count, and a change answer, then
/// prints the reference result block. Rejected inputs re-ask the same
/// question; round seeds derive from `seed` so a session replays exactly.
///
/// # Errors
///
/// Returns an error when the underlying reader or writer fails.
pub fn run_interactive<R, W>(mut input: R, mut output: W, seed: u64) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut round = 0_u64;
    loop {
        writeln!(output, "{QUIT_HINT}")?;

        let Some(doors) = read_field(&mut input, &mut output, DOORS_PROMPT, parse_doors)? else {
            break;
        };
        let Some(trials) = read_field(&mut input, &mut output, TRIES_PROMPT, parse_count)? else {
            break;
        };
        let Some(strategy) = read_field(&mut input, &mut output, CHANGE_PROMPT, parse_change)?
        else {
            break;
        };

        let cfg = ExperimentConfig {
            doors,
            trials,
            strategy,
            seed: seed.wrapping_add(round),
        };
        let summary = run_experiment(&cfg)?;

        writeln!(output, "\n{}", tally_sentence(&summary))?;
        writeln!(output, "\n{}", result_sentence(strategy, &summary))?;
        writeln!(output, "\nStarting over.")?;

        round = round.wrapping_add(1);
    }
    output.flush()?;
    Ok(())
}

/// The "You won ... attempt(s)." line of the result block.
#[must_use]
pub fn tally_sentence(summary: &ExperimentSummary) -> String {
    format!(
        "You won {} time(s) out of {} attempt(s).",
        summary.wins, summary.attempts
    )
}

/// The strategy-specific winning-chance line of the result block.
#[must_use]
pub fn result_sentence(strategy: Strategy, summary: &ExperimentSummary) -> String {
    match strategy {
        Strategy::Switch => format!(
            "If you change your pick, the chances of you winning is {}.",
            summary.percentage_label()
        ),
        Strategy::Stay => format!(
            "If you refuse to change your pick, the chance of you winning is {}.",
            summary.percentage_label()
        ),
    }
}

fn read_field<T, R, W>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    parse: impl Fn(&str) -> Result<T, PromptError>,
) -> io::Result<Option<T>>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(output, "{prompt}")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let token = line.trim();
        if token.is_empty() {
            return Ok(None);
        }

        match parse(token) {
            Ok(value) => return Ok(Some(value)),
            Err(err) => {
                log::debug!("rejected {token:?}: {err}");
                writeln!(output, "{err}")?;
            }
        }
    }
}

fn parse_count(token: &str) -> Result<u64, PromptError> {
    if let Ok(value) = token.parse::<u64>() {
        if value > 0 {
            return Ok(value);
        }
        return Err(PromptError::NonPositive { value: 0 });
    }
    if let Ok(value) = token.parse::<i64>() {
        return Err(PromptError::NonPositive { value });
    }
    Err(PromptError::Invalid {
        input: token.to_string(),
    })
}

fn parse_doors(token: &str) -> Result<usize, PromptError> {
    let value = parse_count(token)?;
    usize::try_from(value).map_err(|_| PromptError::Invalid {
        input: token.to_string(),
    })
}

fn parse_change(token: &str) -> Result<Strategy, PromptError> {
    token
        .parse::<Strategy>()
        .map_err(|err| PromptError::Invalid { input: err.input })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(script: &str, seed: u64) -> String {
        let mut output = Vec::new();
        run_interactive(Cursor::new(script), &mut output, seed).expect("session runs");
        String::from_utf8(output).expect("utf8 transcript")
    }

    #[test]
    fn blank_doors_input_quits_immediately() {
        let transcript = run_script("\n", 1);
        assert_eq!(
            transcript,
            "\nInput blank to quit.\n\nHow many doors would you like to have? (N>0) "
        );
    }

    #[test]
    fn full_round_emits_the_reference_lines_in_order() {
        let transcript = run_script("3\n10\nN\n\n", 42);
        let markers = [
            "Input blank to quit.",
            "How many doors would you like to have? (N>0) ",
            "How many tries would you like to execute? (N>0) ",
            "Would you like to change your pick? (Y/N) ",
            "You won ",
            " time(s) out of 10 attempt(s).",
            "If you refuse to change your pick, the chance of you winning is ",
            "Starting over.",
        ];
        let mut cursor = 0;
        for marker in markers {
            let found = transcript[cursor..]
                .find(marker)
                .unwrap_or_else(|| panic!("missing {marker:?} after byte {cursor}"));
            cursor += found + marker.len();
        }
        assert!(transcript.ends_with(DOORS_PROMPT));
    }

    #[test]
    fn invalid_inputs_reprompt_the_same_question() {
        let transcript = run_script("abc\n0\n-2\n3\nfive\n10\nmaybe\nY\n\n", 7);
        assert_eq!(transcript.matches(DOORS_PROMPT).count(), 5);
        assert_eq!(transcript.matches(TRIES_PROMPT).count(), 2);
        assert_eq!(transcript.matches(CHANGE_PROMPT).count(), 2);
        assert_eq!(transcript.matches("is an invalid input.").count(), 3);
        assert_eq!(
            transcript
                .matches("is less than 0. The integer must be greater than 0.")
                .count(),
            2
        );
        assert!(transcript.contains("If you change your pick, the chances of you winning is"));
    }

    #[test]
    fn sessions_loop_until_blank() {
        let transcript = run_script("3\n25\nn\n3\n25\nn\n\n", 9);
        assert_eq!(
            transcript.matches(" time(s) out of 25 attempt(s).").count(),
            2
        );
        assert_eq!(transcript.matches("Starting over.").count(), 2);
        assert_eq!(transcript.matches("Input blank to quit.").count(), 3);
    }

    #[test]
    fn eof_mid_session_quits_without_results() {
        let transcript = run_script("3\n10", 5);
        assert!(transcript.ends_with(CHANGE_PROMPT));
        assert!(!transcript.contains("You won"));
    }

    #[test]
    fn identical_scripts_replay_identically_for_a_seed() {
        let first = run_script("4\n50\ny\n\n", 1234);
        let second = run_script("4\n50\ny\n\n", 1234);
        assert_eq!(first, second);
    }

    #[test]
    fn count_tokens_classify_cleanly() {
        assert_eq!(parse_count("7"), Ok(7));
        assert_eq!(parse_count("+5"), Ok(5));
        assert!(matches!(
            parse_count("0"),
            Err(PromptError::NonPositive { value: 0 })
        ));
        assert!(matches!(
            parse_count("-3"),
            Err(PromptError::NonPositive { value: -3 })
        ));
        assert!(matches!(parse_count("x"), Err(PromptError::Invalid { .. })));
    }

    #[test]
    fn result_sentences_match_the_reference_wording() {
        let summary = ExperimentSummary {
            wins: 7,
            attempts: 9,
        };
        assert_eq!(tally_sentence(&summary), "You won 7 time(s) out of 9 attempt(s).");
        assert_eq!(
            result_sentence(Strategy::Switch, &summary),
            "If you change your pick, the chances of you winning is 78%."
        );
        assert_eq!(
            result_sentence(Strategy::Stay, &summary),
            "If you refuse to change your pick, the chance of you winning is 78%."
        );
    }
}
