//! Behaviour-driven step definitions driving the score CLI scenarios.

use super::helpers::{InputFiles, utf8_output};
use super::*;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;
use std::io::Cursor;

#[derive(Debug)]
struct ScoreWorld {
    files: InputFiles,
    cli_args: RefCell<Vec<String>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl ScoreWorld {
    fn new() -> Self {
        Self {
            files: InputFiles::new(),
            cli_args: RefCell::new(Vec::new()),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn push_args<const N: usize>(&self, args: [String; N]) {
        self.cli_args.borrow_mut().extend(args);
    }

    fn build_command_line(&self) -> Vec<String> {
        let mut argv = vec!["moodscore".to_owned(), "score".to_owned()];
        argv.extend(self.cli_args.borrow().iter().cloned());
        argv
    }

    fn stdout(&self) -> String {
        utf8_output(&self.stdout.borrow())
    }

    fn expect_error(&self, check: impl FnOnce(&CliError)) {
        let borrowed = self.result.borrow();
        let error = borrowed
            .as_ref()
            .expect("result recorded")
            .as_ref()
            .expect_err("expected error");
        check(error);
    }

    fn expect_success(&self) {
        let borrowed = self.result.borrow();
        let result = borrowed.as_ref().expect("result recorded");
        if let Err(err) = result {
            panic!("expected success, found {err:?}");
        }
    }
}

#[fixture]
fn world() -> ScoreWorld {
    ScoreWorld::new()
}

// Gherkin keeps the surrounding quotes in captured strings.
fn unquote(raw: &str) -> &str {
    raw.trim_matches('"')
}

#[given("the text {text} is passed inline")]
fn text_passed_inline(#[from(world)] world: &ScoreWorld, text: String) {
    world.push_args([unquote(&text).to_owned()]);
}

#[given("the text {text} is stored in an input file")]
fn text_stored_in_file(#[from(world)] world: &ScoreWorld, text: String) {
    let path = world.files.write("mood.txt", unquote(&text));
    world.push_args([format!("--{ARG_INPUT}"), path.into_string()]);
}

#[given("jitter is turned off")]
fn jitter_turned_off(#[from(world)] world: &ScoreWorld) {
    world.push_args([format!("--{ARG_JITTER}"), "off".to_owned()]);
}

#[given("JSON output is requested")]
fn json_requested(#[from(world)] world: &ScoreWorld) {
    world.push_args([format!("--{ARG_FORMAT}"), "json".to_owned()]);
}

#[given("an explanation is requested")]
fn explanation_requested(#[from(world)] world: &ScoreWorld) {
    world.push_args([format!("--{ARG_EXPLAIN}")]);
}

#[given("a seed of {seed} is passed")]
fn seed_passed(#[from(world)] world: &ScoreWorld, seed: u64) {
    world.push_args([format!("--{ARG_SEED}"), seed.to_string()]);
}

#[when("I run the score command")]
fn run_score_command(#[from(world)] world: &ScoreWorld) {
    let invocation = world.build_command_line();
    let parsed = Cli::try_parse_from(invocation).map_err(CliError::from);
    let outcome = parsed.and_then(|cli| match cli.command {
        Command::Score(args) => {
            let mut stdin = Cursor::new(Vec::new());
            let mut buffer = world.stdout.borrow_mut();
            run_score_with(args, &mut stdin, &mut *buffer)
        }
        Command::Rules => panic!("expected score command"),
    });

    world.result.replace(Some(outcome));
}

#[then("the command prints {line}")]
fn command_prints(#[from(world)] world: &ScoreWorld, line: String) {
    world.expect_success();
    let expected = unquote(&line);
    let stdout = world.stdout();
    assert!(
        stdout.lines().any(|printed| printed == expected),
        "expected {expected:?} in output:\n{stdout}"
    );
}

#[then("the JSON output reports score {score} and label {label}")]
fn json_reports(#[from(world)] world: &ScoreWorld, score: u64, label: String) {
    world.expect_success();
    let value: serde_json::Value =
        serde_json::from_str(&world.stdout()).expect("output should be JSON");
    assert_eq!(value["score"], score);
    assert_eq!(value["label"], unquote(&label));
}

#[then("the explanation lists an intensified {rule} match")]
fn explanation_lists_match(#[from(world)] world: &ScoreWorld, rule: String) {
    world.expect_success();
    let rule = unquote(&rule).to_owned();
    let stdout = world.stdout();
    let line = stdout
        .lines()
        .find(|printed| printed.split_whitespace().nth(1) == Some(rule.as_str()))
        .unwrap_or_else(|| panic!("no explanation line for {rule:?} in:\n{stdout}"));
    assert!(line.ends_with("(intensified)"), "line was {line:?}");
}

#[then("the command fails because the input is blank")]
fn command_fails_blank(#[from(world)] world: &ScoreWorld) {
    world.expect_error(|error| match error {
        CliError::EmptyInput => {}
        other => panic!("expected EmptyInput, found {other:?}"),
    });
}

#[then("the command fails because the text was supplied twice")]
fn command_fails_twice(#[from(world)] world: &ScoreWorld) {
    world.expect_error(|error| match error {
        CliError::ConflictingInput { field } => assert_eq!(*field, ARG_INPUT),
        other => panic!("expected ConflictingInput, found {other:?}"),
    });
}

#[then("the command fails because the seed conflicts with disabled jitter")]
fn command_fails_seed_conflict(#[from(world)] world: &ScoreWorld) {
    world.expect_error(|error| match error {
        CliError::ConflictingJitter { .. } => {}
        other => panic!("expected ConflictingJitter, found {other:?}"),
    });
}

macro_rules! register_score_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/score_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: ScoreWorld) {
            let _ = world;
        }
    };
}

register_score_scenario!(score_inline_text, "scoring inline text");
register_score_scenario!(score_file_as_json, "scoring a file as JSON");
register_score_scenario!(score_with_explanation, "explaining the matched rules");
register_score_scenario!(score_blank_input, "rejecting blank input");
register_score_scenario!(score_text_twice, "rejecting text supplied twice");
register_score_scenario!(score_seed_conflict, "rejecting a seed with jitter turned off");
