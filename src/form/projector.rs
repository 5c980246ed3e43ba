// 計算結果を申告書の固定フィールドへ割り当てる

use std::collections::BTreeMap;

use crate::session::TaxReport;
use crate::tax::engine::standard_deduction;

pub const WAGES: &str = "line_1a_wages";
pub const TOTAL_WAGES: &str = "line_1z_total_wages";
pub const TAXABLE_INTEREST: &str = "line_2b_taxable_interest";
pub const ADDITIONAL_INCOME: &str = "line_8_additional_income";
pub const TOTAL_INCOME: &str = "line_9_total_income";
pub const ADJUSTED_GROSS_INCOME: &str = "line_11_agi";
pub const STANDARD_DEDUCTION: &str = "line_12_standard_deduction";
pub const TAXABLE_INCOME: &str = "line_15_taxable_income";
pub const TAX: &str = "line_16_tax";
pub const TAX_BEFORE_CREDITS: &str = "line_18_tax_before_credits";
pub const DEPENDENT_CREDIT: &str = "line_19_dependent_credit";
pub const TAX_AFTER_CREDITS: &str = "line_22_tax_after_credits";
pub const TOTAL_TAX: &str = "line_24_total_tax";
pub const W2_WITHHOLDING: &str = "line_25a_w2_withholding";
pub const TOTAL_WITHHOLDING: &str = "line_25d_total_withholding";
pub const TOTAL_PAYMENTS: &str = "line_33_total_payments";
pub const OVERPAID: &str = "line_34_overpaid";
pub const REFUND: &str = "line_35a_refund";
pub const AMOUNT_OWED: &str = "line_37_amount_owed";

/// フィールドID → 小数点以下2桁の文字列。
pub type FormFields = BTreeMap<&'static str, String>;

fn money(amount: f64) -> String {
    format!("{amount:.2}")
}

/// 税額計算結果を申告書フィールドに割り当てる。
///
/// 還付欄と納付欄は排他的: 正なら還付欄、負なら納付欄（絶対値）、0ならどちらも出力しない。
pub fn project(report: &TaxReport) -> FormFields {
    let totals = &report.totals;
    let result = &report.result;
    let total_income = totals.total_income();

    let mut fields = FormFields::new();
    fields.insert(WAGES, money(totals.wages));
    fields.insert(TOTAL_WAGES, money(totals.wages));
    fields.insert(TAXABLE_INTEREST, money(totals.interest_income));
    fields.insert(ADDITIONAL_INCOME, money(totals.nec_income));
    fields.insert(TOTAL_INCOME, money(total_income));
    fields.insert(ADJUSTED_GROSS_INCOME, money(total_income));
    fields.insert(
        STANDARD_DEDUCTION,
        money(standard_deduction(report.profile.filing_status)),
    );
    fields.insert(TAXABLE_INCOME, money(result.taxable_income));
    fields.insert(TAX, money(result.tax_before_credits));
    fields.insert(TAX_BEFORE_CREDITS, money(result.tax_before_credits));
    fields.insert(DEPENDENT_CREDIT, money(result.dependent_credit));
    fields.insert(TAX_AFTER_CREDITS, money(result.tax_owed));
    fields.insert(TOTAL_TAX, money(result.tax_owed));
    fields.insert(W2_WITHHOLDING, money(totals.federal_withheld));
    fields.insert(TOTAL_WITHHOLDING, money(totals.federal_withheld));
    fields.insert(TOTAL_PAYMENTS, money(totals.federal_withheld));

    let balance = result.refund_or_amount_due;
    if balance > 0.0 {
        fields.insert(OVERPAID, money(balance));
        fields.insert(REFUND, money(balance));
    } else if balance < 0.0 {
        fields.insert(AMOUNT_OWED, money(-balance));
    }

    fields
}
