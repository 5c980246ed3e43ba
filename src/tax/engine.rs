// 累進課税・標準控除・扶養控除（段階的縮小あり）の計算
//
// All functions are pure: the same totals and profile always give the same result.

use serde::Serialize;

use crate::session::aggregation::AggregationTotals;
use crate::session::profile::{FilerProfile, FilingStatus};
use crate::tax::tables::{
    self, CHILD_CREDIT, OTHER_DEPENDENT_CREDIT, PHASE_OUT_REDUCTION, PHASE_OUT_STEP,
};

/// Tax computed before withholding is taken into account.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TaxComputation {
    pub taxable_income: f64,
    pub tax_before_credits: f64,
    /// Credit actually applied, never more than `tax_before_credits`.
    pub dependent_credit: f64,
    pub tax_owed: f64,
}

/// 税額計算結果。リクエストごとに再計算され、保存はしない。
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TaxResult {
    pub taxable_income: f64,
    pub tax_before_credits: f64,
    pub dependent_credit: f64,
    pub tax_owed: f64,
    /// 正なら還付、負なら納付。
    pub refund_or_amount_due: f64,
}

/// Round a dollar amount to whole cents.
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

pub fn standard_deduction(status: FilingStatus) -> f64 {
    tables::standard_deduction(status)
}

/// 課税所得に対する累進税額。
///
/// 各区分は下限を超えた部分のうち `min(所得, 上限)` までをその区分の税率で課税する。
/// 所得が区分の下限を超えなくなった時点で打ち切る。負の所得は0として扱う。
pub fn bracket_tax(taxable_income: f64, status: FilingStatus) -> f64 {
    let income = taxable_income.max(0.0);
    let mut tax = 0.0;

    for b in tables::brackets(status) {
        if income <= b.lower_bound {
            break;
        }
        let top = b.upper_bound.map_or(income, |upper| income.min(upper));
        tax += (top - b.lower_bound) * b.rate;
    }

    round_cents(tax)
}

/// 扶養控除額。閾値を超えた所得 1,000 ドルごとに 50 ドル減額し、0 未満にはしない。
///
/// 端数の 1,000 ドル未満は切り捨てる。
pub fn dependent_credit(
    status: FilingStatus,
    children: u32,
    other_dependents: u32,
    gross_income: f64,
) -> f64 {
    let raw = f64::from(children) * CHILD_CREDIT
        + f64::from(other_dependents) * OTHER_DEPENDENT_CREDIT;

    let threshold = tables::phase_out_threshold(status);
    if gross_income <= threshold {
        return raw;
    }

    let steps = ((gross_income - threshold) / PHASE_OUT_STEP).floor();
    round_cents((raw - steps * PHASE_OUT_REDUCTION).max(0.0))
}

/// Standard deduction, bracket tax, then the dependent credit phased out on
/// gross (pre-deduction) income.
pub fn total_tax(
    total_income: f64,
    status: FilingStatus,
    children: u32,
    other_dependents: u32,
) -> TaxComputation {
    let taxable_income = round_cents((total_income - standard_deduction(status)).max(0.0));
    let tax_before_credits = bracket_tax(taxable_income, status);
    let credit = dependent_credit(status, children, other_dependents, total_income);
    let tax_owed = round_cents((tax_before_credits - credit).max(0.0));

    TaxComputation {
        taxable_income,
        tax_before_credits,
        dependent_credit: round_cents(tax_before_credits - tax_owed),
        tax_owed,
    }
}

/// 源泉徴収額 − 税額。符号で還付/納付を表す。
pub fn refund_or_due(withheld: f64, tax_owed: f64) -> f64 {
    round_cents(withheld - tax_owed)
}

/// 累計額と申告者情報から税額計算結果を求める。
pub fn compute(totals: &AggregationTotals, profile: &FilerProfile) -> TaxResult {
    let computation = total_tax(
        totals.total_income(),
        profile.filing_status,
        profile.dependent_children,
        profile.other_dependents,
    );

    TaxResult {
        taxable_income: computation.taxable_income,
        tax_before_credits: computation.tax_before_credits,
        dependent_credit: computation.dependent_credit,
        tax_owed: computation.tax_owed,
        refund_or_amount_due: refund_or_due(totals.federal_withheld, computation.tax_owed),
    }
}
