//! One filer's session: accumulated totals plus the submitted profile.
//!
//! Both live behind a single `RwLock`, so an accumulation is applied as one
//! write and a tax computation always reads totals and profile from the same
//! snapshot.

pub mod aggregation;
pub mod profile;

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::Serialize;

use crate::document::ExtractedFields;
use crate::error::TaxIntakeError;
use crate::tax::TaxResult;
use crate::tax::engine;
use aggregation::{AggregationStore, AggregationTotals};
use profile::FilerProfile;

#[derive(Debug, Default)]
struct SessionState {
    aggregation: AggregationStore,
    profile: Option<FilerProfile>,
}

/// 税額計算の入力と結果。
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TaxReport {
    pub totals: AggregationTotals,
    pub profile: FilerProfile,
    pub result: TaxResult,
}

/// Session-scoped state shared by every document processed for one filer.
#[derive(Debug, Default)]
pub struct Session {
    state: RwLock<SessionState>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> crate::error::Result<RwLockReadGuard<'_, SessionState>> {
        self.state
            .read()
            .map_err(|_| TaxIntakeError::session("session state lock poisoned"))
    }

    fn write(&self) -> crate::error::Result<RwLockWriteGuard<'_, SessionState>> {
        self.state
            .write()
            .map_err(|_| TaxIntakeError::session("session state lock poisoned"))
    }

    /// 1書類分の抽出結果を累計に加算する。加算したかどうかを返す。
    pub fn accumulate(&self, fields: &ExtractedFields) -> crate::error::Result<bool> {
        let mut state = self.write()?;
        let added = state.aggregation.accumulate(fields);
        if added {
            tracing::info!(
                document_type = %fields.document_type(),
                documents = state.aggregation.documents_accumulated(),
                "accumulated document"
            );
        }
        Ok(added)
    }

    pub fn totals(&self) -> crate::error::Result<AggregationTotals> {
        Ok(self.read()?.aggregation.totals())
    }

    pub fn documents_accumulated(&self) -> crate::error::Result<usize> {
        Ok(self.read()?.aggregation.documents_accumulated())
    }

    /// 累計を0に戻す。申告者情報は保持する。
    pub fn reset(&self) -> crate::error::Result<()> {
        self.write()?.aggregation.reset();
        Ok(())
    }

    /// 申告者情報を設定する。既存の情報は上書きされる。
    pub fn set_profile(&self, profile: FilerProfile) -> crate::error::Result<()> {
        self.write()?.profile = Some(profile);
        Ok(())
    }

    /// 申告者情報を破棄する。
    pub fn clear_profile(&self) -> crate::error::Result<()> {
        self.write()?.profile = None;
        Ok(())
    }

    pub fn profile(&self) -> crate::error::Result<Option<FilerProfile>> {
        Ok(self.read()?.profile)
    }

    /// Totals and profile read under one guard.
    pub fn snapshot(&self) -> crate::error::Result<(AggregationTotals, FilerProfile)> {
        let state = self.read()?;
        let profile = state.profile.ok_or(TaxIntakeError::MissingProfile)?;
        Ok((state.aggregation.totals(), profile))
    }

    /// Compute the tax result from the current snapshot.
    pub fn compute_tax(&self) -> crate::error::Result<TaxReport> {
        let (totals, profile) = self.snapshot()?;
        let result = engine::compute(&totals, &profile);
        tracing::info!(
            filing_status = profile.filing_status.as_str(),
            total_income = totals.total_income(),
            tax_owed = result.tax_owed,
            refund_or_amount_due = result.refund_or_amount_due,
            "computed tax"
        );
        Ok(TaxReport {
            totals,
            profile,
            result,
        })
    }
}
