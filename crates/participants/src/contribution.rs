//! Contribution calculator: incomes in, proportional rates out.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tandem_core::{DomainError, DomainResult};

use crate::participant::Participant;

/// Result of one rate computation pass.
///
/// Same participants, same order as the input, with `contribution_rate`
/// populated. `computed_at` is supplied by the caller (the store owns
/// timestamping), keeping this component pure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionSchedule {
    participants: Vec<Participant>,
    total_income: Decimal,
    computed_at: DateTime<Utc>,
}

impl ContributionSchedule {
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn total_income(&self) -> Decimal {
        self.total_income
    }

    pub fn computed_at(&self) -> DateTime<Utc> {
        self.computed_at
    }
}

/// Derive each participant's contribution rate from raw incomes.
///
/// Each rate is `income / total_income * 100`. When the total income is zero
/// every rate is zero — deliberately **not** an even split, matching the
/// reference behavior.
///
/// Negative income fails with [`DomainError::InvalidIncome`]; it should have
/// been rejected by the validation layer and must never produce a negative
/// rate here.
pub fn compute_rates(
    participants: &[Participant],
    computed_at: DateTime<Utc>,
) -> DomainResult<ContributionSchedule> {
    for p in participants {
        if p.income().is_sign_negative() {
            return Err(DomainError::invalid_income(format!(
                "negative income for {}: {}",
                p.name(),
                p.income()
            )));
        }
    }

    let total_income: Decimal = participants.iter().map(Participant::income).sum();

    let mut updated = participants.to_vec();
    for p in &mut updated {
        let rate = if total_income > Decimal::ZERO {
            p.income() / total_income * Decimal::ONE_HUNDRED
        } else {
            Decimal::ZERO
        };
        p.set_contribution_rate(rate);
    }

    Ok(ContributionSchedule {
        participants: updated,
        total_income,
        computed_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;
    use tandem_core::{within_tolerance, ParticipantId};

    fn participant(name: &str, income: Decimal) -> Participant {
        Participant::new(
            ParticipantId::new(),
            name,
            format!("{}@example.com", name.to_lowercase()),
            income,
        )
        .unwrap()
    }

    #[test]
    fn rates_are_proportional_to_income() {
        let schedule = compute_rates(
            &[participant("Simon", dec!(3000)), participant("André", dec!(1250))],
            Utc::now(),
        )
        .unwrap();

        assert_eq!(schedule.total_income(), dec!(4250));

        let rates: Vec<Decimal> = schedule
            .participants()
            .iter()
            .map(Participant::contribution_rate)
            .collect();
        assert!(within_tolerance(rates[0], dec!(70.588235294117647058823529)));
        assert!(within_tolerance(rates[1], dec!(29.411764705882352941176471)));
        assert!(within_tolerance(rates.iter().copied().sum(), dec!(100)));
    }

    #[test]
    fn zero_total_income_yields_all_zero_rates() {
        // Deliberate policy: no even-split fallback.
        let schedule = compute_rates(
            &[participant("Simon", dec!(0)), participant("André", dec!(0))],
            Utc::now(),
        )
        .unwrap();

        assert_eq!(schedule.total_income(), Decimal::ZERO);
        for p in schedule.participants() {
            assert_eq!(p.contribution_rate(), Decimal::ZERO);
        }
    }

    #[test]
    fn input_order_and_identities_are_preserved() {
        let a = participant("Simon", dec!(10));
        let b = participant("André", dec!(30));
        let schedule = compute_rates(&[a.clone(), b.clone()], Utc::now()).unwrap();

        assert_eq!(schedule.participants()[0].id_typed(), a.id_typed());
        assert_eq!(schedule.participants()[1].id_typed(), b.id_typed());
        assert_eq!(schedule.participants()[0].contribution_rate(), dec!(25));
        assert_eq!(schedule.participants()[1].contribution_rate(), dec!(75));
    }

    #[test]
    fn empty_participant_list_produces_empty_schedule() {
        let schedule = compute_rates(&[], Utc::now()).unwrap();
        assert!(schedule.participants().is_empty());
        assert_eq!(schedule.total_income(), Decimal::ZERO);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: for any incomes with a positive total, the computed
        /// rates sum to 100 within 1e-9.
        #[test]
        fn rates_sum_to_one_hundred(
            incomes in prop::collection::vec(0u32..=1_000_000, 1..8)
        ) {
            prop_assume!(incomes.iter().any(|i| *i > 0));

            let participants: Vec<Participant> = incomes
                .iter()
                .enumerate()
                .map(|(i, income)| participant(&format!("p{i}"), Decimal::from(*income)))
                .collect();

            let schedule = compute_rates(&participants, Utc::now()).unwrap();
            let sum: Decimal = schedule
                .participants()
                .iter()
                .map(Participant::contribution_rate)
                .sum();

            prop_assert!(within_tolerance(sum, Decimal::ONE_HUNDRED));
        }
    }
}
