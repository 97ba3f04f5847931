//! End-to-end export run.
//!
//! profile → club id → member list → per-member sections → CSV.
//! Everything runs in sequence on one task; the only pause is the throttle
//! between members.

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use club_api::ClubClient;
use club_config::ClubConfig;
use club_core::{ClubMember, FlatRecord, export_csv};
use serde_json::Value;

use crate::error::PipelineError;

/// Per-run settings resolved from config and flags.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub club_id: Option<String>,
    pub output: PathBuf,
    pub throttle: Duration,
    pub quiet: bool,
}

impl RunOptions {
    pub fn new(config: &ClubConfig, club_id: Option<String>, quiet: bool) -> Self {
        Self {
            club_id,
            output: config.export.output.clone(),
            throttle: config.export.throttle(),
            quiet,
        }
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub club_id: String,
    pub exported: usize,
    pub output: PathBuf,
}

/// Per-user sections fetched for every member, in fetch order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberSection {
    Stats,
    PeakRating,
}

impl MemberSection {
    pub const ORDER: [Self; 2] = [Self::Stats, Self::PeakRating];

    async fn fetch(self, client: &ClubClient, user_id: &str) -> Option<Value> {
        match self {
            Self::Stats => client.get_user_stats(user_id).await,
            Self::PeakRating => client.get_user_peak_rating(user_id).await,
        }
    }

    fn apply(self, member: &mut ClubMember, value: Option<Value>) {
        match self {
            Self::Stats => member.update_stats(value),
            Self::PeakRating => member.update_peak_rating(value),
        }
    }
}

/// Club id from `user.club.clubId`; numbers are accepted as their text form.
pub fn club_id_from_profile(profile: &Value) -> Option<String> {
    let id = match profile.pointer("/user/club/clubId")? {
        Value::String(id) => id.trim().to_string(),
        Value::Number(id) => id.to_string(),
        _ => return None,
    };
    (!id.is_empty()).then_some(id)
}

/// Run one export, printing progress to stdout.
///
/// # Errors
///
/// Fails on a profile or member-list request error, a profile without a club,
/// or an export write failure. Per-member fetch failures only leave that
/// member's section empty.
pub async fn run(client: &ClubClient, options: &RunOptions) -> Result<RunSummary, PipelineError> {
    run_with_output(client, options, &mut std::io::stdout()).await
}

/// [`run`] with progress lines written to `out`.
///
/// # Errors
///
/// Same as [`run`].
pub async fn run_with_output(
    client: &ClubClient,
    options: &RunOptions,
    out: &mut impl Write,
) -> Result<RunSummary, PipelineError> {
    let club_id = match &options.club_id {
        Some(id) => id.clone(),
        None => {
            let profile = client.get_profile().await?;
            club_id_from_profile(&profile).ok_or(PipelineError::NoClub)?
        }
    };
    tracing::info!(%club_id, "fetching club members");

    let mut members: Vec<ClubMember> = client
        .get_club_members(&club_id)
        .await?
        .into_iter()
        .map(ClubMember::from_entry)
        .collect();

    say(options, out, "Fetching user stats and ratings...");
    fetch_member_sections(client, &mut members, options, out).await;

    let records = members
        .iter()
        .map(ClubMember::to_flattened_record)
        .collect::<Result<Vec<FlatRecord>, _>>()?;
    let exported = export_csv(&options.output, &records)?;
    say(
        options,
        out,
        &format!("Exported {exported} members to {}", options.output.display()),
    );

    Ok(RunSummary {
        club_id,
        exported,
        output: options.output.clone(),
    })
}

async fn fetch_member_sections(
    client: &ClubClient,
    members: &mut [ClubMember],
    options: &RunOptions,
    out: &mut impl Write,
) {
    let total = members.len();
    for (index, member) in members.iter_mut().enumerate() {
        for section in MemberSection::ORDER {
            let value = section.fetch(client, member.user_id()).await;
            if value.is_none() {
                tracing::debug!(user_id = member.user_id(), ?section, "section left empty");
            }
            section.apply(member, value);
        }

        say(
            options,
            out,
            &format!("[{}/{total}] Fetched stats for {}", index + 1, member.nick()),
        );

        if index + 1 < total && !options.throttle.is_zero() {
            tokio::time::sleep(options.throttle).await;
        }
    }
}

/// Progress output is best-effort; a closed stdout does not abort the run.
fn say(options: &RunOptions, out: &mut impl Write, line: &str) {
    if !options.quiet {
        let _ = writeln!(out, "{line}");
    }
}
