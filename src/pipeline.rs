//! The end-to-end flow: diff → request → suggestions → choice → commit.

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::commit::{apply_prefix, choose_message, normalize_messages, prefix_for_branch};
use crate::config::Config;
use crate::error::PipelineError;
use crate::git::{current_branch, fetch_diff, make_commit};
use crate::interact::Prompter;
use crate::llm::{CompletionProvider, build_request, check_budget};

/// Per-run switches, derived from CLI flags.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Directory the diff and commit commands run in.
    pub workdir: PathBuf,
    /// Print the chosen message instead of committing.
    pub dry_run: bool,
    /// Skip the confirmation when the request is over the token limit.
    pub assume_yes: bool,
    /// Offer inline editing of a picked suggestion.
    pub edit: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            workdir: PathBuf::from("."),
            dry_run: false,
            assume_yes: false,
            edit: true,
        }
    }
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The commit command succeeded.
    Committed { message: String, output: String },
    /// `dry_run` was set; nothing was committed.
    DryRun { message: String },
    /// The user declined to send an oversized request.
    Cancelled,
}

/// Run the full pipeline.
pub async fn run_pipeline<P, C>(
    config: &Config,
    options: &RunOptions,
    prompter: &P,
    completer: &C,
) -> Result<Outcome, PipelineError>
where
    P: Prompter + ?Sized,
    C: CompletionProvider + ?Sized,
{
    // ── Stage 1: Diff ──
    info!("Getting git diff...");
    let diff = fetch_diff(&options.workdir, &config.git_command)?;

    // ── Stage 2: Request + token budget ──
    let request = build_request(config, &diff);
    let budget = check_budget(&request, config.max_token_count)?;
    debug!(
        estimated = budget.estimated,
        limit = budget.limit,
        "Estimated request tokens"
    );

    if budget.is_exceeded() {
        warn!(
            "Request contains too many tokens: ~{} (limit {})",
            budget.estimated, budget.limit
        );
        let proceed = options.assume_yes
            || prompter.confirm(
                &format!(
                    "The request is ~{} tokens, over the limit of {}. This may result in additional charges. Proceed?",
                    budget.estimated, budget.limit
                ),
                false,
            )?;
        if !proceed {
            info!("User chose not to proceed due to token count exceeding the limit");
            return Ok(Outcome::Cancelled);
        }
    }

    // ── Stage 3: API call ──
    let content = completer.complete(&request).await?;

    // ── Stage 4: Normalize + prefix ──
    let suggestions = normalize_messages(&content);
    debug!("Parsed {} suggestions", suggestions.len());

    let branch = current_branch(&options.workdir);
    let prefix = prefix_for_branch(
        branch.as_deref(),
        &config.branch_prefix,
        config.effective_task_prefix(),
    );
    if let Some(ref prefix) = prefix {
        debug!(task_id = prefix.task_id(), "Prefixing messages with task id");
    }
    let suggestions = apply_prefix(suggestions, prefix.as_ref());

    // ── Stage 5: Choose ──
    let message = choose_message(&suggestions, prefix.as_ref(), prompter, options.edit)?;

    // ── Stage 6: Commit ──
    if options.dry_run {
        return Ok(Outcome::DryRun { message });
    }

    let output = make_commit(&options.workdir, &config.commit_command, &message)?;
    Ok(Outcome::Committed { message, output })
}
