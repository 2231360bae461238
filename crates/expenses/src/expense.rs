use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tandem_core::{DomainError, DomainResult, Entity, ExpenseId, ParticipantId, ValueObject};
use tandem_participants::Participant;

use crate::allocate::{allocate_shares, AllocationMode};

/// Expense category (fixed, closed set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Housing,
    Groceries,
    Restaurant,
    Transport,
    Leisure,
    Health,
    Other,
}

/// Expense lifecycle. The only transition is `Pending -> Settled`, one-way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseStatus {
    Pending,
    Settled,
}

/// One participant's computed portion of an expense.
///
/// `percentage` is a snapshot of the contribution rate at allocation time;
/// it does not change retroactively when household rates change later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Share {
    pub participant_id: ParticipantId,
    pub amount: Decimal,
    pub percentage: Decimal,
}

impl ValueObject for Share {}

/// Creation input for an expense: everything the caller knows before the
/// store assigns identity, shares and timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseDraft {
    pub description: String,
    pub amount: Decimal,
    pub category: Category,
    pub date: NaiveDate,
    pub payer: ParticipantId,
    pub shared_by: Vec<ParticipantId>,
}

impl ExpenseDraft {
    /// Validation-layer checks that are not part of the allocation contract:
    /// a usable description and a non-empty, known sharing set.
    pub fn validate(&self, participants: &[Participant]) -> DomainResult<()> {
        if self.description.trim().is_empty() {
            return Err(DomainError::validation("description cannot be empty"));
        }
        if self.shared_by.is_empty() {
            return Err(DomainError::validation(
                "an expense must be shared by at least one participant",
            ));
        }
        for id in &self.shared_by {
            if !participants.iter().any(|p| p.id_typed() == *id) {
                return Err(DomainError::UnknownParticipant(*id));
            }
        }
        Ok(())
    }
}

/// Partial edit of an expense. `None` fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpensePatch {
    pub description: Option<String>,
    pub amount: Option<Decimal>,
    pub category: Option<Category>,
    pub date: Option<NaiveDate>,
}

/// A recorded expense with its immutable share snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    id: ExpenseId,
    description: String,
    amount: Decimal,
    category: Category,
    date: NaiveDate,
    payer: ParticipantId,
    shared_by: Vec<ParticipantId>,
    shares: Vec<Share>,
    status: ExpenseStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Expense {
    /// Assemble a created expense from a draft and its allocated shares.
    ///
    /// Identity and timestamps come from the caller (the store owns both).
    pub fn from_draft(
        id: ExpenseId,
        draft: ExpenseDraft,
        shares: Vec<Share>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            description: draft.description,
            amount: draft.amount,
            category: draft.category,
            date: draft.date,
            payer: draft.payer,
            shared_by: draft.shared_by,
            shares,
            status: ExpenseStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id_typed(&self) -> ExpenseId {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn payer(&self) -> ParticipantId {
        self.payer
    }

    pub fn shared_by(&self) -> &[ParticipantId] {
        &self.shared_by
    }

    pub fn shares(&self) -> &[Share] {
        &self.shares
    }

    pub fn status(&self) -> ExpenseStatus {
        self.status
    }

    pub fn is_settled(&self) -> bool {
        self.status == ExpenseStatus::Settled
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// `pending -> settled`. Returns whether a transition happened; settling
    /// an already settled expense is a no-op and leaves `updated_at` alone.
    pub fn mark_settled(&mut self, now: DateTime<Utc>) -> bool {
        if self.is_settled() {
            return false;
        }
        self.status = ExpenseStatus::Settled;
        self.updated_at = now;
        true
    }

    /// Apply a partial edit. An amount change reallocates shares at the
    /// current contribution rates; otherwise the share snapshot is kept.
    pub fn apply_patch(
        &mut self,
        patch: ExpensePatch,
        participants: &[Participant],
        mode: AllocationMode,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        let draft = ExpenseDraft {
            description: patch.description.unwrap_or_else(|| self.description.clone()),
            amount: patch.amount.unwrap_or(self.amount),
            category: patch.category.unwrap_or(self.category),
            date: patch.date.unwrap_or(self.date),
            payer: self.payer,
            shared_by: self.shared_by.clone(),
        };
        draft.validate(participants)?;

        if draft.amount != self.amount {
            self.shares = allocate_shares(&draft, participants, mode)?;
            self.amount = draft.amount;
        }
        self.description = draft.description;
        self.category = draft.category;
        self.date = draft.date;
        self.updated_at = now;
        Ok(())
    }
}

impl Entity for Expense {
    type Id = ExpenseId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
