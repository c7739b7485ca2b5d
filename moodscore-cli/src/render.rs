//! Presentation of scoring results and the rule table.

use std::io::{self, Write};

use moodscore_core::{Polarity, RuleTable};
use moodscore_scorer::Assessment;

use crate::CliError;

const BAR_WIDTH: usize = 20;

/// Render `assessment` as a short human-readable block.
pub(crate) fn write_text(
    writer: &mut dyn Write,
    assessment: &Assessment,
    explain: bool,
) -> io::Result<()> {
    let result = &assessment.result;
    writeln!(
        writer,
        "{} {}/100 ({})",
        result.label(),
        result.score(),
        result.color()
    )?;
    writeln!(writer, "{}", percentage_bar(result.score()))?;
    writeln!(writer, "{}", result.feedback())?;
    if explain {
        write_explanation(writer, assessment)?;
    }
    Ok(())
}

fn write_explanation(writer: &mut dyn Write, assessment: &Assessment) -> io::Result<()> {
    if assessment.matches.is_empty() {
        writeln!(writer, "no rules matched")?;
    }
    for found in &assessment.matches {
        let boost = if found.intensified { " (intensified)" } else { "" };
        writeln!(
            writer,
            "{} {:<16} {:+.1} {:?}{boost}",
            sign_marker(found.polarity),
            found.rule,
            found.delta,
            found.span
        )?;
    }
    writeln!(writer, "jitter {:+.2}", assessment.jitter)
}

/// Render the result, or the whole assessment when explaining, as JSON.
pub(crate) fn write_json(
    writer: &mut dyn Write,
    assessment: &Assessment,
    explain: bool,
) -> Result<(), CliError> {
    let payload = if explain {
        serde_json::to_string_pretty(assessment)
    } else {
        serde_json::to_string_pretty(&assessment.result)
    }
    .map_err(CliError::SerialiseResult)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

/// Print one line per rule: polarity, name, weight and pattern.
pub(crate) fn write_rule_table(writer: &mut dyn Write, table: &RuleTable) -> io::Result<()> {
    for (polarity, rule) in table.iter() {
        writeln!(
            writer,
            "{} {:<16} {:>5.1}  {}",
            sign_marker(polarity),
            rule.name,
            rule.weight,
            rule.pattern
        )?;
    }
    Ok(())
}

/// A `[#####-----] 50%` style bar, one cell per five points.
pub(crate) fn percentage_bar(score: u8) -> String {
    let filled = (usize::from(score) * BAR_WIDTH / 100).min(BAR_WIDTH);
    format!(
        "[{}{}] {score}%",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled)
    )
}

const fn sign_marker(polarity: Polarity) -> char {
    match polarity {
        Polarity::Positive => '+',
        Polarity::Negative => '-',
    }
}
