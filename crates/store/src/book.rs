use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::{debug, info};

use tandem_core::{DomainResult, ExpenseId, ParticipantId};
use tandem_expenses::{
    allocate_shares, AllocationMode, Category, Expense, ExpenseDraft, ExpensePatch,
};
use tandem_ledger::{compute_balances, monthly_summary, Balance, MonthlySummary};
use tandem_participants::{compute_rates, ContributionSchedule, Participant};

/// In-memory repository for one household's expense history.
///
/// Holds the current contribution schedule and the expense list; balances
/// are recomputed from the full history on every query rather than
/// maintained incrementally, which is plenty at household scale.
#[derive(Debug, Clone)]
pub struct ExpenseBook {
    schedule: ContributionSchedule,
    expenses: Vec<Expense>,
    allocation: AllocationMode,
}

impl ExpenseBook {
    /// Create a book over the given participants, computing their initial
    /// contribution rates. Fails on negative income.
    pub fn new(participants: Vec<Participant>) -> DomainResult<Self> {
        let schedule = compute_rates(&participants, Utc::now())?;
        Ok(Self {
            schedule,
            expenses: Vec::new(),
            allocation: AllocationMode::default(),
        })
    }

    /// Switch the share allocation mode. Affects future allocations only;
    /// existing share snapshots are never rewritten.
    pub fn with_allocation_mode(mut self, mode: AllocationMode) -> Self {
        self.allocation = mode;
        self
    }

    /// The demo household: Simon (3000 €) and André (1250 €) with their
    /// first grocery run and restaurant evening.
    pub fn with_sample_data() -> DomainResult<Self> {
        let simon = Participant::new(
            ParticipantId::new(),
            "Simon",
            "simon@example.com",
            Decimal::from(3000),
        )?;
        let andre = Participant::new(
            ParticipantId::new(),
            "André",
            "andre@example.com",
            Decimal::from(1250),
        )?;
        let simon_id = simon.id_typed();
        let andre_id = andre.id_typed();

        let mut book = Self::new(vec![simon, andre])?;
        book.add_expense(ExpenseDraft {
            description: "Courses Carrefour".to_string(),
            amount: Decimal::from(150),
            category: Category::Groceries,
            date: NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date"),
            payer: simon_id,
            shared_by: vec![simon_id, andre_id],
        })?;
        book.add_expense(ExpenseDraft {
            description: "Restaurant Le Petit Bistrot".to_string(),
            amount: Decimal::from(85),
            category: Category::Restaurant,
            date: NaiveDate::from_ymd_opt(2024, 1, 14).expect("valid date"),
            payer: andre_id,
            shared_by: vec![simon_id, andre_id],
        })?;
        Ok(book)
    }

    pub fn participants(&self) -> &[Participant] {
        self.schedule.participants()
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// The current rate schedule (rates, total income, computation time).
    pub fn schedule(&self) -> &ContributionSchedule {
        &self.schedule
    }

    pub fn allocation_mode(&self) -> AllocationMode {
        self.allocation
    }

    /// Update incomes and recompute the contribution schedule. Shares
    /// already allocated keep their rate snapshots.
    pub fn set_incomes(
        &mut self,
        incomes: &[(ParticipantId, Decimal)],
    ) -> DomainResult<&[Participant]> {
        let mut participants = self.schedule.participants().to_vec();
        for (id, income) in incomes {
            let participant = participants
                .iter_mut()
                .find(|p| p.id_typed() == *id)
                .ok_or(tandem_core::DomainError::UnknownParticipant(*id))?;
            participant.set_income(*income)?;
        }
        self.schedule = compute_rates(&participants, Utc::now())?;
        info!(
            total_income = %self.schedule.total_income(),
            "contribution rates recomputed"
        );
        Ok(self.schedule.participants())
    }

    /// Record a new expense: validates the draft, allocates shares at the
    /// current rates, assigns the id and timestamps.
    pub fn add_expense(&mut self, draft: ExpenseDraft) -> DomainResult<Expense> {
        draft.validate(self.participants())?;
        let shares = allocate_shares(&draft, self.participants(), self.allocation)?;
        let expense = Expense::from_draft(ExpenseId::new(), draft, shares, Utc::now());

        info!(
            expense_id = %expense.id_typed(),
            amount = %expense.amount(),
            "expense recorded"
        );
        self.expenses.push(expense.clone());
        Ok(expense)
    }

    /// Partially edit an expense. Returns `Ok(None)` for an unknown id. An
    /// amount change reallocates shares at the current rates.
    pub fn update_expense(
        &mut self,
        id: ExpenseId,
        patch: ExpensePatch,
    ) -> DomainResult<Option<Expense>> {
        let participants = self.schedule.participants().to_vec();
        let mode = self.allocation;
        let Some(expense) = self.expenses.iter_mut().find(|e| e.id_typed() == id) else {
            return Ok(None);
        };
        expense.apply_patch(patch, &participants, mode, Utc::now())?;
        debug!(expense_id = %id, "expense updated");
        Ok(Some(expense.clone()))
    }

    /// Physically remove an expense from the history. Rarely used —
    /// settlement is the normal end of life for an expense.
    pub fn remove_expense(&mut self, id: ExpenseId) -> bool {
        let before = self.expenses.len();
        self.expenses.retain(|e| e.id_typed() != id);
        let removed = self.expenses.len() < before;
        if removed {
            info!(expense_id = %id, "expense removed");
        }
        removed
    }

    /// Transition an expense `pending -> settled`. Returns false for an
    /// unknown id; re-settling an already settled expense is a successful
    /// no-op. Settled expenses stay in balance computation.
    pub fn mark_settled(&mut self, id: ExpenseId) -> bool {
        let Some(expense) = self.expenses.iter_mut().find(|e| e.id_typed() == id) else {
            return false;
        };
        if expense.mark_settled(Utc::now()) {
            info!(expense_id = %id, "expense settled");
        }
        true
    }

    /// Net position per participant over the full history, recomputed from
    /// scratch.
    pub fn current_balances(&self) -> DomainResult<Vec<Balance>> {
        compute_balances(&self.expenses, self.participants())
    }

    pub fn expenses_in_category(&self, category: Category) -> Vec<&Expense> {
        self.expenses
            .iter()
            .filter(|e| e.category() == category)
            .collect()
    }

    /// Expenses the participant paid for or shares in.
    pub fn expenses_involving(&self, id: ParticipantId) -> Vec<&Expense> {
        self.expenses
            .iter()
            .filter(|e| e.payer() == id || e.shared_by().contains(&id))
            .collect()
    }

    /// Expenses dated within the inclusive range.
    pub fn expenses_between(&self, start: NaiveDate, end: NaiveDate) -> Vec<&Expense> {
        self.expenses
            .iter()
            .filter(|e| e.date() >= start && e.date() <= end)
            .collect()
    }

    pub fn monthly_summary(&self, year: i32, month: u32) -> MonthlySummary {
        monthly_summary(&self.expenses, year, month)
    }
}
