use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BalanceHistory {
    #[serde(default)]
    pub id: Option<i64>,
    pub balance: f64,
    #[serde(default)]
    pub change_amount: Option<f64>,
    #[serde(default)]
    pub change_type: Option<String>,
    #[serde(default)]
    pub related_id: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

/// Body for `POST /balance/update`. Without a description the backend records a manual update.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BalanceUpdate {
    pub balance: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
