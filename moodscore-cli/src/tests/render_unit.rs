//! Unit tests for text and JSON rendering.

use super::helpers::utf8_output;
use crate::render::{percentage_bar, write_json, write_rule_table, write_text};
use moodscore_core::{NoJitter, RuleTable};
use moodscore_scorer::{Assessment, RuleBasedScorer};
use rstest::rstest;

fn assess(text: &str) -> Assessment {
    RuleBasedScorer::with_defaults(NoJitter)
        .expect("built-in rules compile")
        .assess(text)
}

#[rstest]
#[case(0, "[--------------------] 0%")]
#[case(4, "[--------------------] 4%")]
#[case(50, "[##########----------] 50%")]
#[case(79, "[###############-----] 79%")]
#[case(100, "[####################] 100%")]
fn bar_fills_one_cell_per_five_points(#[case] score: u8, #[case] expected: &str) {
    assert_eq!(percentage_bar(score), expected);
}

#[rstest]
fn json_output_is_a_flat_record() {
    let mut output = Vec::new();
    write_json(&mut output, &assess("I feel hopeless"), false).expect("render json");
    let value: serde_json::Value =
        serde_json::from_str(&utf8_output(&output)).expect("valid json");
    assert_eq!(
        value,
        serde_json::json!({
            "score": 15,
            "label": "Poor",
            "color": "#dc2626",
            "feedback": "You're having a bad time right now, don't worry it'll pass.",
        })
    );
}

#[rstest]
fn explained_json_lists_matches() {
    let mut output = Vec::new();
    write_json(&mut output, &assess("happy but stressed"), true).expect("render json");
    let value: serde_json::Value =
        serde_json::from_str(&utf8_output(&output)).expect("valid json");
    let rules: Vec<&str> = value["matches"]
        .as_array()
        .expect("matches array")
        .iter()
        .filter_map(|found| found["rule"].as_str())
        .collect();
    assert_eq!(rules, ["elated", "anxiety"]);
    assert_eq!(value["result"]["score"], 62);
    assert_eq!(value["jitter"], 0.0);
}

#[rstest]
fn explained_text_lists_each_match() {
    let mut output = Vec::new();
    write_text(&mut output, &assess("I am happy"), true).expect("render text");
    let stdout = utf8_output(&output);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        [
            "Happy 79/100 (#3b82f6)",
            "[###############-----] 79%",
            "You're happy today, good job!",
            format!("+ {:<16} +29.0 \"happy\"", "elated").as_str(),
            "jitter +0.00",
        ]
    );
}

#[rstest]
fn explained_text_notes_when_nothing_matched() {
    let mut output = Vec::new();
    write_text(&mut output, &assess("the bus left at noon"), true).expect("render text");
    let stdout = utf8_output(&output);
    assert!(stdout.contains("no rules matched"), "output was {stdout}");
    assert!(stdout.starts_with("Good 50/100"), "output was {stdout}");
}

#[rstest]
fn rule_table_prints_one_line_per_rule() {
    let mut output = Vec::new();
    write_rule_table(&mut output, &RuleTable::DEFAULT).expect("render rules");
    let stdout = utf8_output(&output);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 14);
    assert!(lines.first().is_some_and(|line| line.starts_with("+ elated ")));
    assert!(lines.get(6).is_some_and(|line| line.starts_with("- dejected ")));
}
