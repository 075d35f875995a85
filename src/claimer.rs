use alloy::primitives::Address;

use crate::{
    account::Account,
    config::Config,
    constants::{ACCOUNT_DELAY_MS, CYCLE_INTERVAL_SECS},
    countdown::countdown,
    errors::RequestError,
    humanity::{display_value, RewardApi},
    utils::{align_tokens, random_delay, read_file_lines, read_private_keys},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClaimOutcome {
    /// No token for this account in the current cycle.
    Skipped,
    Claimed { amount: String },
    ClaimRejected { message: String },
    Unavailable { message: String },
    Unauthorized,
    Failed { reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleState {
    Running,
    Waiting,
}

/// Never returns an error: every failure is logged and folded into the outcome.
pub async fn check_and_claim(
    api: &impl RewardApi,
    account: &Account,
    token: &str,
    account_index: usize,
    token_file: &str,
) -> ClaimOutcome {
    let address = account.address();
    let line = account_index + 1;

    if token.is_empty() {
        tracing::warn!("[{address}] No token on line {line} of {token_file}. Skipping");
        return ClaimOutcome::Skipped;
    }

    tracing::info!("[{address}] Using token from {token_file}");

    match try_check_and_claim(api, address, token).await {
        Ok(outcome) => outcome,
        Err(e) if e.is_unauthorized() => {
            tracing::warn!("[{address}] 401: token is invalid or expired");
            tracing::warn!("   Replace line {line} of {token_file} with a fresh token");
            tracing::error!("[{address}] Check/claim failed: {e}");
            ClaimOutcome::Unauthorized
        }
        Err(e) => {
            tracing::error!("[{address}] Check/claim failed: {e}");
            ClaimOutcome::Failed {
                reason: e.to_string(),
            }
        }
    }
}

async fn try_check_and_claim(
    api: &impl RewardApi,
    address: Address,
    token: &str,
) -> Result<ClaimOutcome, RequestError> {
    tracing::info!("[{address}] Checking daily reward...");
    let check = api.check(token).await?;

    if !check.available {
        let message = check
            .message
            .unwrap_or_else(|| "no data or reward unavailable".to_string());
        tracing::info!("[{address}] Reward not available. Message: {message}");
        return Ok(ClaimOutcome::Unavailable { message });
    }

    tracing::info!(
        "[{address}] Reward available! Amount: {}",
        display_value(&check.amount)
    );
    tracing::info!("[{address}] Claiming...");
    let claim = api.claim(token).await?;

    if claim.daily_claimed {
        let amount = display_value(&claim.amount);
        tracing::info!("[{address}] Claimed {amount} successfully!");
        Ok(ClaimOutcome::Claimed { amount })
    } else {
        let message = claim.message.unwrap_or_else(|| "N/A".to_string());
        tracing::warn!("[{address}] Claim failed or already claimed. Message: {message}");
        Ok(ClaimOutcome::ClaimRejected { message })
    }
}

/// Processes every account once, in file order, with a short random pause between accounts.
pub async fn run_cycle(
    api: &impl RewardApi,
    accounts: &[Account],
    token_file: &str,
    cycle: u64,
) -> Vec<ClaimOutcome> {
    tracing::info!(
        "===== Starting claim cycle #{cycle} for {} accounts =====",
        accounts.len()
    );

    let tokens = align_tokens(read_file_lines(token_file, true).await, accounts.len());

    if tokens.iter().any(String::is_empty) {
        tracing::warn!("Some accounts have no token in {token_file}. They will be skipped");
        tracing::info!("Make sure every private key has a matching valid token in {token_file}");
    }

    let mut outcomes = Vec::with_capacity(accounts.len());

    for (i, (account, token)) in accounts.iter().zip(&tokens).enumerate() {
        tracing::info!("--- Account {}/{} ---", i + 1, accounts.len());

        outcomes.push(check_and_claim(api, account, token, i, token_file).await);

        if i + 1 < accounts.len() {
            tokio::time::sleep(random_delay(ACCOUNT_DELAY_MS)).await;
        }
    }

    log_summary(cycle, &outcomes);

    outcomes
}

fn log_summary(cycle: u64, outcomes: &[ClaimOutcome]) {
    let count = |f: fn(&ClaimOutcome) -> bool| outcomes.iter().filter(|o| f(o)).count();

    let claimed = count(|o| matches!(o, ClaimOutcome::Claimed { .. }));
    let unavailable = count(|o| {
        matches!(
            o,
            ClaimOutcome::Unavailable { .. } | ClaimOutcome::ClaimRejected { .. }
        )
    });
    let skipped = count(|o| matches!(o, ClaimOutcome::Skipped));
    let failed = count(|o| matches!(o, ClaimOutcome::Unauthorized | ClaimOutcome::Failed { .. }));

    tracing::info!(
        "Cycle #{cycle} finished: {claimed} claimed, {unavailable} unavailable, {skipped} skipped, {failed} failed"
    );
}

/// Runs forever once at least one private key is loaded.
pub async fn claim_for_all(config: Config, api: impl RewardApi) -> eyre::Result<()> {
    let accounts = read_private_keys(&config.private_keys_file).await?;

    if accounts.is_empty() {
        eyre::bail!(
            "No private keys found. Check the file: {}",
            config.private_keys_file
        );
    }

    tracing::info!(
        "Loaded {} accounts from {}",
        accounts.len(),
        config.private_keys_file
    );

    let mut state = CycleState::Running;
    let mut cycle = 0;

    loop {
        state = match state {
            CycleState::Running => {
                cycle += 1;
                run_cycle(&api, &accounts, &config.token_file, cycle).await;
                tracing::info!("===== Cycle #{cycle} complete. Waiting 24 hours for the next one =====");
                CycleState::Waiting
            }
            CycleState::Waiting => {
                countdown(CYCLE_INTERVAL_SECS).await;
                CycleState::Running
            }
        };
    }
}
