//! Canned dashboard data. Built once at startup and never mutated.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Stats {
    pub total_records: u32,
    pub product_families: u32,
    pub problem_categories: u32,
    pub avg_tat: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Filters {
    pub product_families: Vec<String>,
    pub problem_categories: Vec<String>,
    pub reasons: Vec<String>,
    pub shifts: Vec<String>,
    pub lines: Vec<String>,
}

/// One repair record, keyed by the dashboard's column names.
#[derive(Debug, Clone, Serialize)]
pub struct TableRow {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Product Family")]
    pub product_family: String,
    #[serde(rename = "Problem Category")]
    pub problem_category: String,
    #[serde(rename = "Reason")]
    pub reason: String,
    #[serde(rename = "Shift")]
    pub shift: String,
    #[serde(rename = "Line")]
    pub line: String,
    #[serde(rename = "In Date")]
    pub in_date: String,
    #[serde(rename = "Out Date")]
    pub out_date: String,
    #[serde(rename = "TAT")]
    pub tat: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TatStats {
    pub average: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
}

/// Chart specs are pre-encoded JSON strings; the UI parses them itself.
#[derive(Debug, Clone, Serialize)]
pub struct Charts {
    pub problem_categories: String,
    pub repair_types: String,
    pub tat_over_time: String,
    pub issues_by_shift: String,
    pub issues_by_line: String,
    pub tat_stats: TatStats,
}

#[derive(Debug, Clone)]
pub struct MockData {
    pub stats: Stats,
    pub filters: Filters,
    pub columns: Vec<String>,
    pub rows: Vec<TableRow>,
    pub charts: Charts,
}

pub const COLUMNS: [&str; 9] = [
    "ID",
    "Product Family",
    "Problem Category",
    "Reason",
    "Shift",
    "Line",
    "In Date",
    "Out Date",
    "TAT",
];

const PROBLEM_CATEGORIES_CHART: &str = r#"{"data":[{"type":"bar","x":["Category 1","Category 2","Category 3","Category 4"],"y":[45,30,25,20]}],"layout":{"title":"Problem Categories Frequency"}}"#;
const REPAIR_TYPES_CHART: &str = r#"{"data":[{"type":"pie","labels":["Type A","Type B","Type C"],"values":[50,30,20]}],"layout":{"title":"Repair Types Distribution"}}"#;
const TAT_OVER_TIME_CHART: &str = r#"{"data":[{"type":"line","x":["2023-01-01","2023-01-02","2023-01-03","2023-01-04","2023-01-05"],"y":[3.2,3.5,3.1,3.8,3.4]}],"layout":{"title":"Average TAT Over Time"}}"#;
const ISSUES_BY_SHIFT_CHART: &str = r#"{"data":[{"type":"bar","x":["Morning","Afternoon","Night"],"y":[45,40,35]}],"layout":{"title":"Issues by Shift"}}"#;
const ISSUES_BY_LINE_CHART: &str = r#"{"data":[{"type":"bar","x":["Line 1","Line 2","Line 3","Line 4"],"y":[30,25,35,30]}],"layout":{"title":"Issues by Line"}}"#;

// (id, family, category, reason, shift, line, in, out, tat)
type RowSpec = (&'static str, &'static str, &'static str, &'static str, &'static str, &'static str, &'static str, &'static str, f64);

const ROWS: [RowSpec; 5] = [
    ("001", "Family A", "Category 1", "Reason 1", "Morning", "Line 1", "2023-01-01", "2023-01-03", 2.0),
    ("002", "Family B", "Category 2", "Reason 2", "Afternoon", "Line 2", "2023-01-02", "2023-01-05", 3.0),
    ("003", "Family C", "Category 3", "Reason 3", "Night", "Line 3", "2023-01-03", "2023-01-07", 4.0),
    ("004", "Family D", "Category 4", "Reason 1", "Morning", "Line 4", "2023-01-04", "2023-01-09", 5.0),
    ("005", "Family E", "Category 1", "Reason 2", "Afternoon", "Line 1", "2023-01-05", "2023-01-08", 3.0),
];

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl MockData {
    pub fn new() -> Self {
        let rows = ROWS
            .iter()
            .map(|&(id, family, category, reason, shift, line, in_date, out_date, tat)| TableRow {
                id: id.into(),
                product_family: family.into(),
                problem_category: category.into(),
                reason: reason.into(),
                shift: shift.into(),
                line: line.into(),
                in_date: in_date.into(),
                out_date: out_date.into(),
                tat,
            })
            .collect();

        Self {
            stats: Stats {
                total_records: 120,
                product_families: 5,
                problem_categories: 8,
                avg_tat: 3.5,
            },
            filters: Filters {
                product_families: strings(&["Family A", "Family B", "Family C", "Family D", "Family E"]),
                problem_categories: strings(&["Category 1", "Category 2", "Category 3", "Category 4"]),
                reasons: strings(&["Reason 1", "Reason 2", "Reason 3"]),
                shifts: strings(&["Morning", "Afternoon", "Night"]),
                lines: strings(&["Line 1", "Line 2", "Line 3", "Line 4"]),
            },
            columns: strings(&COLUMNS),
            rows,
            charts: Charts {
                problem_categories: PROBLEM_CATEGORIES_CHART.into(),
                repair_types: REPAIR_TYPES_CHART.into(),
                tat_over_time: TAT_OVER_TIME_CHART.into(),
                issues_by_shift: ISSUES_BY_SHIFT_CHART.into(),
                issues_by_line: ISSUES_BY_LINE_CHART.into(),
                tat_stats: TatStats {
                    average: 3.5,
                    median: 3.2,
                    min: 1.5,
                    max: 7.8,
                },
            },
        }
    }
}

impl Default for MockData {
    fn default() -> Self {
        Self::new()
    }
}
