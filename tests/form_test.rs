// 申告書フィールド割り当てのテスト

use tax_intake::form::{project, projector};
use tax_intake::session::TaxReport;
use tax_intake::session::aggregation::AggregationTotals;
use tax_intake::session::profile::{FilerProfile, FilingStatus};
use tax_intake::tax::engine::compute;

fn report(totals: AggregationTotals, filing_status: FilingStatus) -> TaxReport {
    let profile = FilerProfile {
        filing_status,
        dependent_children: 0,
        other_dependents: 0,
    };
    TaxReport {
        totals,
        profile,
        result: compute(&totals, &profile),
    }
}

#[test]
fn test_project_refund_side() {
    let totals = AggregationTotals {
        wages: 30_000.0,
        federal_withheld: 3_000.0,
        nec_income: 0.0,
        interest_income: 0.0,
    };
    let fields = project(&report(totals, FilingStatus::HeadOfHousehold));

    // taxable 8,100 -> tax 810
    assert_eq!(fields[projector::STANDARD_DEDUCTION], "21900.00");
    assert_eq!(fields[projector::TAXABLE_INCOME], "8100.00");
    assert_eq!(fields[projector::TOTAL_TAX], "810.00");
    assert_eq!(fields[projector::OVERPAID], "2190.00");
    assert_eq!(fields[projector::REFUND], "2190.00");
    assert!(!fields.contains_key(projector::AMOUNT_OWED));
}

#[test]
fn test_project_amount_due_side() {
    let totals = AggregationTotals {
        wages: 0.0,
        federal_withheld: 0.0,
        nec_income: 40_000.0,
        interest_income: 125.5,
    };
    let fields = project(&report(totals, FilingStatus::Single));

    assert_eq!(fields[projector::ADDITIONAL_INCOME], "40000.00");
    assert_eq!(fields[projector::TAXABLE_INTEREST], "125.50");
    assert_eq!(fields[projector::TOTAL_INCOME], "40125.50");
    assert!(!fields.contains_key(projector::REFUND));
    assert!(!fields.contains_key(projector::OVERPAID));
    // taxable 25,525.50 -> 1,160 + 12% of 13,925.50 = 2,831.06
    assert_eq!(fields[projector::AMOUNT_OWED], "2831.06");
}

#[test]
fn test_project_values_have_two_fraction_digits() {
    let totals = AggregationTotals {
        wages: 12_345.0,
        federal_withheld: 100.0,
        nec_income: 0.0,
        interest_income: 0.0,
    };
    let fields = project(&report(totals, FilingStatus::MarriedSeparate));
    for (id, value) in &fields {
        let (_, frac) = value.split_once('.').expect("decimal point");
        assert_eq!(frac.len(), 2, "{id} = {value}");
    }
}
