//! Rendering for analysis results: human-readable text or stable JSON.

use std::io::{self, Write};

use anyhow::Result;
use prio_core::{AnalyzeResponse, ScoredTask, StrategyWeights, SuggestResponse};

const RULE_WIDTH: usize = 64;

fn rule(w: &mut dyn Write) -> io::Result<()> {
    writeln!(w, "{:-<width$}", "", width = RULE_WIDTH)
}

pub fn print_analysis(resp: &AnalyzeResponse, json: bool) -> Result<()> {
    let mut out = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut out, resp)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(
        out,
        "{} tasks ranked under '{}'",
        resp.total_tasks, resp.strategy
    )?;
    rule(&mut out)?;
    for (position, task) in resp.tasks.iter().enumerate() {
        write_task(&mut out, position + 1, task)?;
    }
    Ok(())
}

pub fn print_suggestions(resp: &SuggestResponse, json: bool) -> Result<()> {
    let mut out = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut out, resp)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(
        out,
        "top {} of {} requested under '{}'",
        resp.returned_count, resp.requested_count, resp.strategy
    )?;
    rule(&mut out)?;
    for task in &resp.suggestions {
        write_task(&mut out, task.rank.unwrap_or(0), task)?;
    }
    Ok(())
}

pub fn print_strategies(json: bool) -> Result<()> {
    let mut out = io::stdout().lock();
    let builtins = StrategyWeights::builtins();

    if json {
        let map: serde_json::Map<String, serde_json::Value> = builtins
            .iter()
            .map(|(name, weights)| {
                Ok(((*name).to_string(), serde_json::to_value(weights)?))
            })
            .collect::<Result<_, serde_json::Error>>()?;
        serde_json::to_writer_pretty(&mut out, &map)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(
        out,
        "{:<16} {:>8} {:>11} {:>7} {:>13}",
        "strategy", "urgency", "importance", "effort", "dependencies"
    )?;
    rule(&mut out)?;
    for (name, w) in builtins {
        writeln!(
            out,
            "{name:<16} {:>8.2} {:>11.2} {:>7.2} {:>13.2}",
            w.urgency, w.importance, w.effort, w.dependencies
        )?;
    }
    Ok(())
}

fn write_task(w: &mut dyn Write, position: usize, task: &ScoredTask) -> io::Result<()> {
    let due = task.due_date.as_deref().unwrap_or("no due date");
    writeln!(
        w,
        "{position:>3}. [{:>7.2}] {}  (due {due})",
        task.priority_score, task.title
    )?;

    let c = task.score_components;
    writeln!(
        w,
        "     urgency {:.2} · importance {:.2} · effort {:.2} · dependencies {:.2}",
        c.urgency, c.importance, c.effort, c.dependencies
    )?;
    writeln!(w, "     {}", task.explanation)?;
    if let Some(warning) = &task.warning {
        writeln!(w, "     ! {warning}")?;
    }
    Ok(())
}
