use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;

use tandem_core::ExpenseId;
use tandem_expenses::{allocate_shares, AllocationMode, Category, Expense, ExpenseDraft};
use tandem_ledger::compute_balances;
use tandem_participants::{compute_rates, Participant};

fn household() -> Vec<Participant> {
    let participants = vec![
        Participant::new(
            tandem_core::ParticipantId::new(),
            "Simon",
            "simon@example.com",
            Decimal::from(3000),
        )
        .expect("valid participant"),
        Participant::new(
            tandem_core::ParticipantId::new(),
            "André",
            "andre@example.com",
            Decimal::from(1250),
        )
        .expect("valid participant"),
    ];
    compute_rates(&participants, Utc::now())
        .expect("valid incomes")
        .participants()
        .to_vec()
}

fn build_history(participants: &[Participant], count: usize) -> Vec<Expense> {
    let categories = [
        Category::Housing,
        Category::Groceries,
        Category::Restaurant,
        Category::Transport,
        Category::Leisure,
        Category::Health,
        Category::Other,
    ];

    (0..count)
        .map(|i| {
            let draft = ExpenseDraft {
                description: format!("expense {i}"),
                amount: Decimal::new(1000 + (i as i64 % 9000), 2),
                category: categories[i % categories.len()],
                date: NaiveDate::from_ymd_opt(2024, 1 + (i as u32 % 12), 1)
                    .expect("valid date"),
                payer: participants[i % participants.len()].id_typed(),
                shared_by: participants.iter().map(|p| p.id_typed()).collect(),
            };
            let shares = allocate_shares(&draft, participants, AllocationMode::GlobalRates)
                .expect("allocatable draft");
            Expense::from_draft(ExpenseId::new(), draft, shares, Utc::now())
        })
        .collect()
}

/// Full-ledger recomputation is the simplicity-over-performance choice the
/// store makes on every balance query; this tracks what that costs as the
/// history grows.
fn bench_recompute(c: &mut Criterion) {
    let participants = household();

    let mut group = c.benchmark_group("ledger_recompute");
    for size in [100usize, 1_000, 10_000] {
        let expenses = build_history(&participants, size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &expenses, |b, expenses| {
            b.iter(|| compute_balances(black_box(expenses), black_box(&participants)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_recompute);
criterion_main!(benches);
