// 2024年分の税率表・標準控除・扶養控除の定数

use crate::session::profile::FilingStatus;

/// Tax year the tables below describe.
pub const TAX_YEAR: u32 = 2024;

pub const CHILD_CREDIT: f64 = 2_000.0;
pub const OTHER_DEPENDENT_CREDIT: f64 = 500.0;

/// Credit reduction per full step of income above the phase-out threshold.
pub const PHASE_OUT_REDUCTION: f64 = 50.0;
pub const PHASE_OUT_STEP: f64 = 1_000.0;

/// 累進税率の1区分。`upper_bound` が `None` の区分は上限なし。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaxBracket {
    pub lower_bound: f64,
    pub upper_bound: Option<f64>,
    pub rate: f64,
}

const fn bracket(lower_bound: f64, upper_bound: f64, rate: f64) -> TaxBracket {
    TaxBracket {
        lower_bound,
        upper_bound: Some(upper_bound),
        rate,
    }
}

const fn top_bracket(lower_bound: f64, rate: f64) -> TaxBracket {
    TaxBracket {
        lower_bound,
        upper_bound: None,
        rate,
    }
}

const SINGLE_BRACKETS: [TaxBracket; 7] = [
    bracket(0.0, 11_600.0, 0.10),
    bracket(11_600.0, 47_150.0, 0.12),
    bracket(47_150.0, 100_525.0, 0.22),
    bracket(100_525.0, 191_950.0, 0.24),
    bracket(191_950.0, 243_725.0, 0.32),
    bracket(243_725.0, 609_350.0, 0.35),
    top_bracket(609_350.0, 0.37),
];

const MARRIED_JOINT_BRACKETS: [TaxBracket; 7] = [
    bracket(0.0, 23_200.0, 0.10),
    bracket(23_200.0, 94_300.0, 0.12),
    bracket(94_300.0, 201_050.0, 0.22),
    bracket(201_050.0, 383_900.0, 0.24),
    bracket(383_900.0, 487_450.0, 0.32),
    bracket(487_450.0, 731_200.0, 0.35),
    top_bracket(731_200.0, 0.37),
];

const MARRIED_SEPARATE_BRACKETS: [TaxBracket; 7] = [
    bracket(0.0, 11_600.0, 0.10),
    bracket(11_600.0, 47_150.0, 0.12),
    bracket(47_150.0, 100_525.0, 0.22),
    bracket(100_525.0, 191_950.0, 0.24),
    bracket(191_950.0, 243_725.0, 0.32),
    bracket(243_725.0, 365_600.0, 0.35),
    top_bracket(365_600.0, 0.37),
];

const HEAD_OF_HOUSEHOLD_BRACKETS: [TaxBracket; 7] = [
    bracket(0.0, 16_550.0, 0.10),
    bracket(16_550.0, 63_100.0, 0.12),
    bracket(63_100.0, 100_500.0, 0.22),
    bracket(100_500.0, 191_950.0, 0.24),
    bracket(191_950.0, 243_700.0, 0.32),
    bracket(243_700.0, 609_350.0, 0.35),
    top_bracket(609_350.0, 0.37),
];

/// 申告区分ごとの税率表（昇順、[0, ∞) を隙間なく覆う）。
pub fn brackets(status: FilingStatus) -> &'static [TaxBracket] {
    match status {
        FilingStatus::Single => &SINGLE_BRACKETS,
        FilingStatus::MarriedJoint | FilingStatus::Widow => &MARRIED_JOINT_BRACKETS,
        FilingStatus::MarriedSeparate => &MARRIED_SEPARATE_BRACKETS,
        FilingStatus::HeadOfHousehold => &HEAD_OF_HOUSEHOLD_BRACKETS,
    }
}

pub fn standard_deduction(status: FilingStatus) -> f64 {
    match status {
        FilingStatus::Single | FilingStatus::MarriedSeparate => 14_600.0,
        FilingStatus::MarriedJoint | FilingStatus::Widow => 29_200.0,
        FilingStatus::HeadOfHousehold => 21_900.0,
    }
}

/// Gross income above which the dependent credit starts phasing out.
pub fn phase_out_threshold(status: FilingStatus) -> f64 {
    match status {
        FilingStatus::MarriedJoint | FilingStatus::Widow => 400_000.0,
        FilingStatus::Single | FilingStatus::MarriedSeparate | FilingStatus::HeadOfHousehold => {
            200_000.0
        }
    }
}
