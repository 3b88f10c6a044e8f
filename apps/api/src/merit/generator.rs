//! Merit statement generation — orchestrates one submission.
//!
//! Flow: validate → build_prompt → TextGenerator::complete → parse_completion.
//! Validation failures never reach the generator.

use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::llm_client::TextGenerator;
use crate::merit::form::{validate_submission, FormInput};
use crate::merit::parser::{count_sections, parse_completion, GenerationResult};
use crate::merit::prompt_builder::build_prompt;

pub async fn generate_merit_statement(
    llm: &dyn TextGenerator,
    form: &FormInput,
    entries: &[String],
) -> Result<GenerationResult, AppError> {
    validate_submission(form, entries)?;

    let prompt = build_prompt(form, entries);
    info!(
        "Generating merit statement with {} merit item(s)",
        prompt.item_count
    );

    let completion = llm
        .complete(&prompt.context, &prompt.instructions)
        .await
        .map_err(|e| {
            warn!("Merit statement generation failed: {e}");
            AppError::Generation(e)
        })?;

    let result = parse_completion(&completion, prompt.item_count);
    if result.details.is_empty() {
        debug!("Completion had no details delimiter; showing it as summary only");
    } else {
        debug!(
            "Parsed completion: requested {} section(s), found {} header(s)",
            prompt.item_count,
            count_sections(&result.details)
        );
    }

    Ok(result)
}
