//! Output rendering for evaluation results and catalog listings.

use anyhow::{Context, Result};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use bloods_engine::{FrequencyTag, frequency_tag, split_sections};
use bloods_model::{FrequencyGroup, KnowledgeBase, QuestionKind, ResolvedTest};

pub const NO_TESTS_MESSAGE: &str = "No tests required";

const MONITORING: &str = "Monitoring";
const DIAGNOSTIC: &str = "Diagnostic/Other";

/// Indented text listing, one block per test.
pub fn render_plain(tests: &[ResolvedTest]) -> String {
    if tests.is_empty() {
        return NO_TESTS_MESSAGE.to_string();
    }
    let mut lines = Vec::new();
    for test in tests {
        lines.push(test.test_name.clone());
        let sections = split_sections(test);
        for (title, groups) in [
            (MONITORING, &sections.monitoring),
            (DIAGNOSTIC, &sections.diagnostic),
        ] {
            if groups.is_empty() {
                continue;
            }
            lines.push(format!("  {title}"));
            for group in groups {
                lines.push(format!(
                    "    {} [{}]: {}",
                    group.frequency,
                    frequency_tag(&group.frequency),
                    group.diseases.join(", ")
                ));
            }
        }
    }
    lines.join("\n")
}

/// Table with one row per frequency group.
pub fn render_table(tests: &[ResolvedTest]) -> String {
    if tests.is_empty() {
        return NO_TESTS_MESSAGE.to_string();
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Test"),
        header_cell("Section"),
        header_cell("Frequency"),
        header_cell("Diseases"),
    ]);
    apply_table_style(&mut table);
    for test in tests {
        let sections = split_sections(test);
        let rows = sections
            .monitoring
            .iter()
            .map(|group| (MONITORING, *group))
            .chain(sections.diagnostic.iter().map(|group| (DIAGNOSTIC, *group)));
        for (index, (section, group)) in rows.enumerate() {
            let name = if index == 0 {
                Cell::new(&test.test_name).add_attribute(Attribute::Bold)
            } else {
                Cell::new("")
            };
            let section_cell = if section == MONITORING {
                Cell::new(section)
            } else {
                dim_cell(section)
            };
            table.add_row(vec![
                name,
                section_cell,
                frequency_cell(group),
                Cell::new(group.diseases.join("\n")),
            ]);
        }
    }
    table.to_string()
}

/// Pretty-printed JSON array of resolved tests.
pub fn render_json(tests: &[ResolvedTest]) -> Result<String> {
    serde_json::to_string_pretty(tests).context("serialize results")
}

/// Disease catalog with badges and follow-up questions.
pub fn diseases_table(knowledge: &KnowledgeBase) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Badge"),
        header_cell("Disease"),
        header_cell("Colour"),
        header_cell("Questions"),
    ]);
    apply_table_style(&mut table);
    for disease in knowledge.diseases() {
        let questions: Vec<String> = disease
            .questions
            .iter()
            .map(|question| match &question.kind {
                QuestionKind::Toggle => format!("{} (yes/no)", question.label),
                QuestionKind::Select { options } => {
                    let choices: Vec<&str> =
                        options.iter().map(|option| option.label.as_str()).collect();
                    format!("{} ({})", question.label, choices.join(" / "))
                }
            })
            .collect();
        table.add_row(vec![
            Cell::new(disease.abbreviation()).add_attribute(Attribute::Bold),
            Cell::new(&disease.name),
            dim_cell(disease.color),
            Cell::new(questions.join("\n")),
        ]);
    }
    table
}

/// Tests in display order with the diseases that have rules for them.
pub fn tests_table(knowledge: &KnowledgeBase) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Test"),
        header_cell("Diseases"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    let mut ordered: Vec<&str> = knowledge.tests().iter().map(|t| t.name.as_str()).collect();
    ordered.sort_by_key(|name| knowledge.priority_of(name).unwrap_or(usize::MAX));
    for (index, name) in ordered.into_iter().enumerate() {
        let diseases: Vec<&str> = knowledge
            .diseases_for_test(name)
            .into_iter()
            .map(|disease| disease.name.as_str())
            .collect();
        table.add_row(vec![
            dim_cell(index + 1),
            Cell::new(name).add_attribute(Attribute::Bold),
            Cell::new(diseases.join(", ")),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn frequency_cell(group: &FrequencyGroup) -> Cell {
    Cell::new(&group.frequency).fg(tag_color(frequency_tag(&group.frequency)))
}

fn tag_color(tag: FrequencyTag) -> Color {
    match tag.color() {
        "red" => Color::Red,
        "green" => Color::Green,
        "purple" => Color::Magenta,
        "indigo" => Color::Blue,
        "pink" => Color::DarkMagenta,
        "teal" => Color::Cyan,
        _ => Color::DarkGrey,
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
