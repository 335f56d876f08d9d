//! Customer table of the dashboard: typed rows, column set and mock data.

use std::borrow::Cow;

use chrono::Days;
use chrono::NaiveDate;

use crate::column::Column;
use crate::model::GridRow;
use crate::model::Value;
use crate::model::types::Money;
use crate::render;

/// One customer account.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerRow {
    pub id: String,
    pub email: String,
    pub plan: String,
    pub mrr: Money,
    pub created_at: NaiveDate,
}

impl CustomerRow {
    /// Every field name of a customer row.
    pub const FIELDS: [&'static str; 5] = ["id", "email", "plan", "mrr", "createdAt"];
}

impl GridRow for CustomerRow {
    fn value(&self, field: &str) -> Option<Cow<'_, Value>> {
        let value = match field {
            "id" => Value::from(self.id.as_str()),
            "email" => Value::from(self.email.as_str()),
            "plan" => Value::from(self.plan.as_str()),
            "mrr" => Value::Money(self.mrr),
            "createdAt" => Value::Date(self.created_at),
            _ => return None,
        };
        Some(Cow::Owned(value))
    }

    fn values(&self) -> Vec<Cow<'_, Value>> {
        Self::FIELDS
            .iter()
            .filter_map(|field| self.value(field))
            .collect()
    }

    fn key(&self) -> Option<String> {
        Some(self.id.clone())
    }
}

/// Columns of the customer table: Email, Plan, MRR, Created.
pub fn customer_columns() -> Vec<Column> {
    vec![
        Column::new("email", "Email").render(render::emphasis),
        Column::new("plan", "Plan").render(render::badge),
        Column::new("mrr", "MRR").render(render::currency),
        Column::new("createdAt", "Created").render(render::date),
    ]
}

/// Deterministic mock customers, newest first.
///
/// Customer `i` (one-based) signed up `i - 1` days before `today`. Every
/// fifth account starting with the first is on Enterprise, other multiples of
/// three (zero-based) are on Pro, the rest on Free. Pro and Enterprise
/// accounts carry a higher base MRR.
pub fn sample_customers(count: usize, today: NaiveDate) -> Vec<CustomerRow> {
    (0..count)
        .map(|i| {
            let plan = if i % 5 == 0 {
                "Enterprise"
            } else if i % 3 == 0 {
                "Pro"
            } else {
                "Free"
            };
            let base = if i % 3 == 0 { 200 } else { 50 };
            let spread = (i as i64 * 137) % 400;

            CustomerRow {
                id: format!("usr_{}", i + 1),
                email: format!("user{}@example.com", i + 1),
                plan: plan.to_string(),
                mrr: Money::from_int(base + spread),
                created_at: today
                    .checked_sub_days(Days::new(i as u64))
                    .unwrap_or(NaiveDate::MIN),
            }
        })
        .collect()
}
