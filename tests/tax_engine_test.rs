// 税額計算エンジンのテスト

use tax_intake::session::aggregation::AggregationTotals;
use tax_intake::session::profile::{FilerProfile, FilingStatus};
use tax_intake::tax::engine::{
    bracket_tax, compute, dependent_credit, refund_or_due, standard_deduction, total_tax,
};
use tax_intake::tax::tables::{brackets, phase_out_threshold};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

// ============================================================
// 1. Tables
// ============================================================

#[test]
fn test_standard_deduction_per_status() {
    assert_eq!(standard_deduction(FilingStatus::Single), 14_600.0);
    assert_eq!(standard_deduction(FilingStatus::MarriedJoint), 29_200.0);
    assert_eq!(standard_deduction(FilingStatus::MarriedSeparate), 14_600.0);
    assert_eq!(standard_deduction(FilingStatus::HeadOfHousehold), 21_900.0);
    assert_eq!(standard_deduction(FilingStatus::Widow), 29_200.0);
}

#[test]
fn test_tables_defined_for_every_status() {
    for status in FilingStatus::ALL {
        let table = brackets(status);
        assert!(!table.is_empty(), "{status:?}");
        assert_eq!(table[0].lower_bound, 0.0);
        assert!(table.last().unwrap().upper_bound.is_none());
        for pair in table.windows(2) {
            assert_eq!(pair[0].upper_bound, Some(pair[1].lower_bound));
        }
        assert!(standard_deduction(status) > 0.0);
        assert!(phase_out_threshold(status) > 0.0);
    }
}

// ============================================================
// 2. Bracket tax
// ============================================================

#[test]
fn test_bracket_tax_zero_and_negative_income() {
    for status in FilingStatus::ALL {
        assert_eq!(bracket_tax(0.0, status), 0.0);
        assert_eq!(bracket_tax(-5_000.0, status), 0.0);
    }
}

#[test]
fn test_bracket_tax_exact_boundaries() {
    assert!(approx(bracket_tax(11_600.0, FilingStatus::Single), 1_160.0));
    assert!(approx(bracket_tax(47_150.0, FilingStatus::Single), 5_426.0));
    assert!(approx(bracket_tax(23_200.0, FilingStatus::MarriedJoint), 2_320.0));
}

#[test]
fn test_bracket_tax_single_45400() {
    assert!(approx(bracket_tax(45_400.0, FilingStatus::Single), 5_216.0));
}

#[test]
fn test_bracket_tax_married_joint() {
    // 2,320 + 12% of (70,800 - 23,200)
    assert!(approx(bracket_tax(70_800.0, FilingStatus::MarriedJoint), 8_032.0));
}

#[test]
fn test_bracket_tax_top_bracket() {
    // single: tax through 609,350 is 183,647.25, then 37%
    let tax = bracket_tax(709_350.0, FilingStatus::Single);
    assert!(approx(tax, 183_647.25 + 37_000.0), "got {tax}");
}

#[test]
fn test_bracket_tax_slope_matches_active_rate() {
    let diff = bracket_tax(20_000.0, FilingStatus::Single) - bracket_tax(19_000.0, FilingStatus::Single);
    assert!(approx(diff, 120.0), "got {diff}");

    let diff = bracket_tax(60_000.0, FilingStatus::Single) - bracket_tax(59_000.0, FilingStatus::Single);
    assert!(approx(diff, 220.0), "got {diff}");
}

#[test]
fn test_bracket_tax_non_decreasing() {
    for status in FilingStatus::ALL {
        let mut prev = 0.0;
        for income in (0..900_000).step_by(997) {
            let tax = bracket_tax(income as f64, status);
            assert!(tax >= prev, "{status:?} at {income}: {tax} < {prev}");
            prev = tax;
        }
    }
}

#[test]
fn test_widow_matches_married_joint() {
    for income in [0.0, 30_000.0, 250_000.0, 800_000.0] {
        assert_eq!(
            bracket_tax(income, FilingStatus::Widow),
            bracket_tax(income, FilingStatus::MarriedJoint)
        );
    }
}

// ============================================================
// 3. Dependent credit
// ============================================================

#[test]
fn test_dependent_credit_below_threshold_is_raw() {
    let credit = dependent_credit(FilingStatus::Single, 2, 1, 150_000.0);
    assert_eq!(credit, 4_500.0);

    let credit = dependent_credit(FilingStatus::Single, 1, 0, 200_000.0);
    assert_eq!(credit, 2_000.0);
}

#[test]
fn test_dependent_credit_partial_thousand_rounds_down() {
    assert_eq!(dependent_credit(FilingStatus::Single, 1, 0, 200_999.0), 2_000.0);
    assert_eq!(dependent_credit(FilingStatus::Single, 1, 0, 201_000.0), 1_950.0);
}

#[test]
fn test_dependent_credit_phase_out_steps() {
    // 50,000 over the threshold -> 50 steps of 50
    assert_eq!(dependent_credit(FilingStatus::Single, 2, 0, 250_000.0), 1_500.0);
    // married joint threshold is 400,000
    assert_eq!(dependent_credit(FilingStatus::MarriedJoint, 2, 0, 250_000.0), 4_000.0);
    assert_eq!(dependent_credit(FilingStatus::MarriedJoint, 2, 0, 420_000.0), 3_000.0);
}

#[test]
fn test_dependent_credit_floored_at_zero() {
    assert_eq!(dependent_credit(FilingStatus::Single, 1, 0, 300_000.0), 0.0);
}

#[test]
fn test_dependent_credit_non_increasing_above_threshold() {
    for status in FilingStatus::ALL {
        let mut prev = f64::INFINITY;
        for income in (150_000..600_000).step_by(733) {
            let credit = dependent_credit(status, 3, 2, income as f64);
            assert!(credit >= 0.0);
            assert!(credit <= prev, "{status:?} at {income}");
            prev = credit;
        }
    }
}

// ============================================================
// 4. Total tax and refund
// ============================================================

#[test]
fn test_total_tax_single_one_child() {
    let result = total_tax(60_000.0, FilingStatus::Single, 1, 0);
    assert!(approx(result.taxable_income, 45_400.0));
    assert!(approx(result.tax_before_credits, 5_216.0));
    assert!(approx(result.dependent_credit, 2_000.0));
    assert!(approx(result.tax_owed, 3_216.0));
}

#[test]
fn test_total_tax_income_below_deduction() {
    let result = total_tax(10_000.0, FilingStatus::Single, 0, 0);
    assert_eq!(result.taxable_income, 0.0);
    assert_eq!(result.tax_before_credits, 0.0);
    assert_eq!(result.tax_owed, 0.0);
}

#[test]
fn test_total_tax_credit_capped_by_tax() {
    // taxable 5,400 -> tax 540; raw credit 6,000
    let result = total_tax(20_000.0, FilingStatus::Single, 3, 0);
    assert!(approx(result.tax_before_credits, 540.0));
    assert_eq!(result.tax_owed, 0.0);
    assert!(approx(result.dependent_credit, 540.0));
}

#[test]
fn test_total_tax_phase_out_uses_gross_income() {
    // gross 214,600 is 14,600 over the single threshold even though taxable
    // income (200,000) is not.
    let result = total_tax(214_600.0, FilingStatus::Single, 1, 0);
    assert!(approx(result.taxable_income, 200_000.0));
    assert!(approx(result.dependent_credit, 2_000.0 - 14.0 * 50.0));
}

#[test]
fn test_refund_or_due_sign() {
    assert!(approx(refund_or_due(7_500.0, 3_216.0), 4_284.0));
    assert!(approx(refund_or_due(1_000.0, 3_216.0), -2_216.0));
    assert_eq!(refund_or_due(0.0, 0.0), 0.0);
}

#[test]
fn test_compute_is_deterministic() {
    let totals = AggregationTotals {
        wages: 55_000.0,
        federal_withheld: 7_500.0,
        nec_income: 4_200.0,
        interest_income: 800.0,
    };
    let profile = FilerProfile {
        filing_status: FilingStatus::Single,
        dependent_children: 1,
        other_dependents: 0,
    };

    let first = compute(&totals, &profile);
    let second = compute(&totals, &profile);
    assert_eq!(first, second);

    assert!(approx(first.taxable_income, 45_400.0));
    assert!(approx(first.tax_owed, 3_216.0));
    assert!(approx(first.refund_or_amount_due, 4_284.0));
}
