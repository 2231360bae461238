//! Expense share allocator: applies a rate set to one expense.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tandem_core::{percent_of, DomainError, DomainResult};
use tandem_participants::Participant;

use crate::expense::{ExpenseDraft, Share};

/// How shares are distributed across the household.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AllocationMode {
    /// Reference-compatible: one share per participant in the **global**
    /// list at their global contribution rate, whether or not they appear in
    /// the expense's `shared_by` set (which is informational only here).
    #[default]
    GlobalRates,
    /// Corrected: shares only for `shared_by` members, with their rates
    /// re-normalized to sum to 100.
    SharedOnly,
}

/// Produce the share list for one expense draft.
///
/// Amounts are exact decimal arithmetic; nothing is rounded here. With a
/// rate set summing to 100, the share amounts reproduce the expense amount
/// within 1e-9. Each share carries the percentage actually used, so later
/// rate changes never rewrite history.
pub fn allocate_shares(
    draft: &ExpenseDraft,
    participants: &[Participant],
    mode: AllocationMode,
) -> DomainResult<Vec<Share>> {
    if participants.is_empty() {
        return Err(DomainError::NoParticipants);
    }
    if draft.amount <= Decimal::ZERO {
        return Err(DomainError::invalid_amount(format!(
            "expense amount must be positive, got {}",
            draft.amount
        )));
    }
    if !participants.iter().any(|p| p.id_typed() == draft.payer) {
        return Err(DomainError::UnknownPayer(draft.payer));
    }

    match mode {
        AllocationMode::GlobalRates => Ok(participants
            .iter()
            .map(|p| Share {
                participant_id: p.id_typed(),
                amount: percent_of(draft.amount, p.contribution_rate()),
                percentage: p.contribution_rate(),
            })
            .collect()),
        AllocationMode::SharedOnly => allocate_among_sharers(draft, participants),
    }
}

fn allocate_among_sharers(
    draft: &ExpenseDraft,
    participants: &[Participant],
) -> DomainResult<Vec<Share>> {
    for id in &draft.shared_by {
        if !participants.iter().any(|p| p.id_typed() == *id) {
            return Err(DomainError::UnknownParticipant(*id));
        }
    }

    // Global list order, restricted to the sharing set.
    let sharers: Vec<&Participant> = participants
        .iter()
        .filter(|p| draft.shared_by.contains(&p.id_typed()))
        .collect();
    if sharers.is_empty() {
        return Err(DomainError::NoParticipants);
    }

    let rate_sum: Decimal = sharers.iter().map(|p| p.contribution_rate()).sum();

    Ok(sharers
        .iter()
        .map(|p| {
            // All-zero rates (zero household income) allocate nothing,
            // consistent with the zero-income rate policy.
            let rate = if rate_sum > Decimal::ZERO {
                p.contribution_rate() / rate_sum * Decimal::ONE_HUNDRED
            } else {
                Decimal::ZERO
            };
            Share {
                participant_id: p.id_typed(),
                amount: percent_of(draft.amount, rate),
                percentage: rate,
            }
        })
        .collect())
}
