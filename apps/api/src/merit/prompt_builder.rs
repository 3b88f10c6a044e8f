//! Prompt Builder — turns the form and merit entries into a context block
//! (user message) and an instruction block (system message).
//!
//! The number of filled entries N drives the instruction block: it asks for
//! exactly N titled subsections, one per entry, in input order.

use std::fmt::Write as _;

use serde::Serialize;

use crate::merit::form::{filled, FormInput};
use crate::merit::prompts::{
    CONTEXT_MERITS_HEADER, INSTRUCTION_HEADER, SECTION_PLACEHOLDER_TEMPLATE, WRITING_RULES,
};

/// A fully assembled prompt, ready for the generation client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeritPrompt {
    pub context: String,
    pub instructions: String,
    /// Number of filled merit entries the prompt asks the model to cover.
    pub item_count: usize,
}

/// Builds the prompt. Pure and total: field validity is checked by the caller.
pub fn build_prompt(form: &FormInput, entries: &[String]) -> MeritPrompt {
    let merits = filled(entries);
    MeritPrompt {
        context: build_context(form, &merits),
        instructions: build_instructions(merits.len()),
        item_count: merits.len(),
    }
}

fn build_context(form: &FormInput, merits: &[&str]) -> String {
    let mut context = format!(
        "성명: {}\n소속: {}\n부서: {}\n직위: {}\n재직기간: {}\n{}\n",
        form.name, form.organization, form.department, form.position, form.tenure,
        CONTEXT_MERITS_HEADER
    );
    for (i, merit) in merits.iter().enumerate() {
        // Writing into a String cannot fail.
        let _ = writeln!(context, "{}. {}", i + 1, merit);
    }
    context
}

fn build_instructions(item_count: usize) -> String {
    let mut instructions = String::from(INSTRUCTION_HEADER);
    for index in 1..=item_count {
        instructions.push_str(&SECTION_PLACEHOLDER_TEMPLATE.replace("{index}", &index.to_string()));
    }
    instructions.push_str(WRITING_RULES);
    instructions
}
