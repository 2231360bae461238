use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tandem_core::{DomainError, DomainResult, ParticipantId, ValueObject};
use tandem_expenses::Expense;
use tandem_participants::Participant;

/// A participant's net position across the whole expense history.
///
/// Derived, never persisted. `amount` is the absolute value of the signed
/// residual; `is_positive` is true when the participant is owed money
/// (strictly positive residual — an exactly settled participant reads as
/// not positive).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    pub participant_id: ParticipantId,
    pub participant_name: String,
    pub amount: Decimal,
    pub is_positive: bool,
}

impl ValueObject for Balance {}

/// Fold the expense history into one signed balance per participant.
///
/// Every expense counts regardless of status — settlement is a flag, not a
/// deletion; callers wanting to exclude settled expenses pre-filter the
/// slice they pass in. Per expense: the payer is credited the full amount,
/// then every share-holder (payer included) is debited their share.
///
/// The output order matches the participant list. Whether the household is
/// "settled" (balances within ±0.01 of zero) is a presentation-layer
/// threshold; raw values are returned here.
pub fn compute_balances(
    expenses: &[Expense],
    participants: &[Participant],
) -> DomainResult<Vec<Balance>> {
    let mut residuals: HashMap<ParticipantId, Decimal> = participants
        .iter()
        .map(|p| (p.id_typed(), Decimal::ZERO))
        .collect();

    for expense in expenses {
        let payer = residuals
            .get_mut(&expense.payer())
            .ok_or(DomainError::UnknownParticipant(expense.payer()))?;
        *payer += expense.amount();

        for share in expense.shares() {
            let holder = residuals
                .get_mut(&share.participant_id)
                .ok_or(DomainError::UnknownParticipant(share.participant_id))?;
            *holder -= share.amount;
        }
    }

    Ok(participants
        .iter()
        .map(|p| {
            let signed = residuals[&p.id_typed()];
            Balance {
                participant_id: p.id_typed(),
                participant_name: p.name().to_string(),
                amount: signed.abs(),
                is_positive: signed > Decimal::ZERO,
            }
        })
        .collect())
}
