use serde::{Deserialize, Serialize};

/// 申告区分。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilingStatus {
    Single,
    MarriedJoint,
    MarriedSeparate,
    HeadOfHousehold,
    /// 適格寡婦(夫)。税率表・控除・閾値は夫婦合算と同じ扱い。
    Widow,
}

impl FilingStatus {
    pub const ALL: [FilingStatus; 5] = [
        FilingStatus::Single,
        FilingStatus::MarriedJoint,
        FilingStatus::MarriedSeparate,
        FilingStatus::HeadOfHousehold,
        FilingStatus::Widow,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FilingStatus::Single => "single",
            FilingStatus::MarriedJoint => "married_joint",
            FilingStatus::MarriedSeparate => "married_separate",
            FilingStatus::HeadOfHousehold => "head_of_household",
            FilingStatus::Widow => "widow",
        }
    }
}

/// 申告者の情報。税額計算時に控除・税額控除の決定に使う。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilerProfile {
    pub filing_status: FilingStatus,
    /// 扶養人数は0でも明示する。
    pub dependent_children: u32,
    pub other_dependents: u32,
}
