use serde::Serialize;

use crate::document::ExtractedFields;

/// 所得区分ごとの累計額。
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct AggregationTotals {
    pub wages: f64,
    pub federal_withheld: f64,
    pub nec_income: f64,
    pub interest_income: f64,
}

impl AggregationTotals {
    /// Gross income across every category.
    pub fn total_income(&self) -> f64 {
        self.wages + self.nec_income + self.interest_income
    }
}

/// Running totals for every document accumulated so far in a session.
#[derive(Debug, Default)]
pub struct AggregationStore {
    totals: AggregationTotals,
    documents_accumulated: usize,
}

impl AggregationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 抽出結果を対応する累計に加算する。
    ///
    /// 1書類分の加算は一度に行われる。`Unknown` は何も加算せず `false` を返す。
    pub fn accumulate(&mut self, fields: &ExtractedFields) -> bool {
        let t = &mut self.totals;
        match *fields {
            ExtractedFields::WageStatement {
                wages,
                federal_withheld,
            } => {
                t.wages += wages;
                t.federal_withheld += federal_withheld;
            }
            ExtractedFields::NonemployeeCompensation { compensation } => {
                t.nec_income += compensation;
            }
            ExtractedFields::InterestIncome { interest } => {
                t.interest_income += interest;
            }
            ExtractedFields::Unknown { .. } => return false,
        }
        self.documents_accumulated += 1;
        true
    }

    pub fn totals(&self) -> AggregationTotals {
        self.totals
    }

    pub fn documents_accumulated(&self) -> usize {
        self.documents_accumulated
    }

    /// 全ての累計を0に戻す。
    pub fn reset(&mut self) {
        self.totals = AggregationTotals::default();
        self.documents_accumulated = 0;
    }
}
