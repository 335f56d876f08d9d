#![allow(dead_code)]

use datagrid_lib::Column;
use datagrid_lib::model::Record;
use simplelog::Config;
use simplelog::LevelFilter;
use simplelog::TestLogger;

/// Routes library logs to the test harness output.
pub fn init_logging() {
    let _ = TestLogger::init(LevelFilter::Debug, Config::default());
}

/// One account per value, keyed `usr_1`, `usr_2`, ... in input order.
pub fn mrr_rows(values: &[i64]) -> Vec<Record> {
    values
        .iter()
        .enumerate()
        .map(|(i, &mrr)| {
            Record::new()
                .with_key(format!("usr_{}", i + 1))
                .set("email", format!("user{}@example.com", i + 1))
                .set("mrr", mrr)
        })
        .collect()
}

/// `mrr` 50, 60, ... 160 in ascending order.
pub fn ascending_mrr() -> Vec<i64> {
    (5..=16).map(|n| n * 10).collect()
}

/// The same twelve values, shuffled so that sorting visibly reorders them.
pub const SHUFFLED_MRR: [i64; 12] = [130, 50, 160, 90, 70, 150, 60, 110, 140, 80, 120, 100];

pub fn mrr_columns() -> Vec<Column> {
    vec![Column::new("email", "Email"), Column::new("mrr", "MRR")]
}

pub fn mrr_of(row: &Record) -> i64 {
    row.get_int("mrr").unwrap().unwrap()
}
