//! Fleet-wide summary over a history snapshot.

use log::debug;
use serde::Serialize;

use crate::classify::{resolve_ml_verdict, MlVerdict};
use crate::record::{AnalysisRecord, Field};

/// Name of the pie slice counting non-blacklisted records.
pub const SAFE_SLICE: &str = "Safe";
/// Name of the pie slice counting blacklisted records.
pub const BLACKLISTED_SLICE: &str = "Blacklisted";

/// Indicators charted on the dashboard, with their chart-axis names.
///
/// The order drives the bar chart's axis and must stay stable.
pub const CHART_INDICATORS: [(Field, &str); 4] = [
    (Field::SuspiciousNumbers, "Suspicious Numbers"),
    (Field::ExcessiveSubdomains, "Subdomains"),
    (Field::SpecialChars, "Special Chars"),
    (Field::DynamicDns, "Dynamic DNS"),
];

/// Count of records with one indicator set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndicatorCount {
    pub field: Field,
    pub name: &'static str,
    pub count: usize,
}

/// One slice of the safe/blacklisted pie chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PieSlice {
    pub name: &'static str,
    pub value: usize,
}

/// Tally of ML verdicts across records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MlTally {
    pub phishing: usize,
    pub benign: usize,
    pub indeterminate: usize,
}

/// Aggregated statistics for a collection of records.
///
/// `malicious_count` counts `blacklisted` records only. This is intentionally
/// narrower than the per-record verdict, which also considers the lexical
/// indicators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total: usize,
    pub malicious_count: usize,
    pub safe_count: usize,
    pub per_indicator: Vec<IndicatorCount>,
    pub pie: [PieSlice; 2],
    pub ml_verdicts: MlTally,
}

impl Summary {
    /// Count for one charted indicator, `None` if it is not charted.
    pub fn indicator_count(&self, field: Field) -> Option<usize> {
        self.per_indicator
            .iter()
            .find(|c| c.field == field)
            .map(|c| c.count)
    }
}

#[derive(Default)]
struct Tally {
    total: usize,
    blacklisted: usize,
    indicators: [usize; CHART_INDICATORS.len()],
    ml: MlTally,
}

impl Tally {
    fn add(mut self, record: &AnalysisRecord) -> Self {
        self.total += 1;
        if record.blacklisted {
            self.blacklisted += 1;
        }
        let flags = [
            record.suspicious_numbers,
            record.excessive_subdomains,
            record.special_chars,
            record.dynamic_dns,
        ];
        for (count, set) in self.indicators.iter_mut().zip(flags) {
            if set {
                *count += 1;
            }
        }
        match resolve_ml_verdict(&record.ml_scores) {
            MlVerdict::Phishing => self.ml.phishing += 1,
            MlVerdict::Benign => self.ml.benign += 1,
            MlVerdict::Indeterminate => self.ml.indeterminate += 1,
        }
        self
    }
}

/// Reduces a history snapshot to a [`Summary`] in a single pass.
///
/// An empty collection yields an all-zero summary.
pub fn aggregate(records: &[AnalysisRecord]) -> Summary {
    let tally = records.iter().fold(Tally::default(), Tally::add);
    let safe_count = tally.total - tally.blacklisted;

    let per_indicator = CHART_INDICATORS
        .iter()
        .zip(tally.indicators)
        .map(|(&(field, name), count)| IndicatorCount { field, name, count })
        .collect();

    debug!(
        "Aggregated {} records ({} blacklisted, {} safe)",
        tally.total, tally.blacklisted, safe_count
    );

    Summary {
        total: tally.total,
        malicious_count: tally.blacklisted,
        safe_count,
        per_indicator,
        pie: [
            PieSlice {
                name: SAFE_SLICE,
                value: safe_count,
            },
            PieSlice {
                name: BLACKLISTED_SLICE,
                value: tally.blacklisted,
            },
        ],
        ml_verdicts: tally.ml,
    }
}
