use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tandem_core::{DomainError, DomainResult, Entity, ParticipantId};

/// One member of the household.
///
/// The contribution rate is **derived**, never authoritative: it is
/// recomputed from incomes by [`crate::compute_rates`] and carried here so
/// allocation can snapshot it onto shares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    id: ParticipantId,
    name: String,
    email: String,
    income: Decimal,
    contribution_rate: Decimal,
}

impl Participant {
    /// Create a participant with a zero contribution rate.
    ///
    /// The rate stays zero until the next [`crate::compute_rates`] pass.
    pub fn new(
        id: ParticipantId,
        name: impl Into<String>,
        email: impl Into<String>,
        income: Decimal,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("participant name cannot be empty"));
        }
        if income.is_sign_negative() {
            return Err(DomainError::invalid_income(format!(
                "negative income for {name}: {income}"
            )));
        }

        Ok(Self {
            id,
            name,
            email: email.into(),
            income,
            contribution_rate: Decimal::ZERO,
        })
    }

    pub fn id_typed(&self) -> ParticipantId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn income(&self) -> Decimal {
        self.income
    }

    /// Percentage share of total household income, 0–100.
    pub fn contribution_rate(&self) -> Decimal {
        self.contribution_rate
    }

    /// Replace the income. The caller is expected to recompute rates
    /// afterwards; until then the stored rate is stale.
    pub fn set_income(&mut self, income: Decimal) -> DomainResult<()> {
        if income.is_sign_negative() {
            return Err(DomainError::invalid_income(format!(
                "negative income for {}: {income}",
                self.name
            )));
        }
        self.income = income;
        Ok(())
    }

    pub(crate) fn set_contribution_rate(&mut self, rate: Decimal) {
        self.contribution_rate = rate;
    }
}

impl Entity for Participant {
    type Id = ParticipantId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn new_participant_starts_with_zero_rate() {
        let p = Participant::new(
            ParticipantId::new(),
            "Simon",
            "simon@example.com",
            dec!(3000),
        )
        .unwrap();
        assert_eq!(p.contribution_rate(), Decimal::ZERO);
        assert_eq!(p.income(), dec!(3000));
    }

    #[test]
    fn empty_name_is_rejected() {
        let err = Participant::new(ParticipantId::new(), "   ", "x@example.com", dec!(100))
            .unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn negative_income_is_rejected_on_construction_and_update() {
        let err = Participant::new(ParticipantId::new(), "Simon", "s@example.com", dec!(-1))
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidIncome(_)));

        let mut p =
            Participant::new(ParticipantId::new(), "Simon", "s@example.com", dec!(100)).unwrap();
        let err = p.set_income(dec!(-0.01)).unwrap_err();
        assert!(matches!(err, DomainError::InvalidIncome(_)));
        // The failed update must not have touched the stored income.
        assert_eq!(p.income(), dec!(100));
    }
}
