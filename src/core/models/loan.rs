use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub loan_name: String,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub total_amount: Option<f64>,
    #[serde(default)]
    pub remaining_amount: Option<f64>,
    #[serde(default)]
    pub monthly_payment: Option<f64>,
    #[serde(default)]
    pub payment_day: Option<u32>,
    #[serde(default)]
    pub total_periods: Option<u32>,
    #[serde(default)]
    pub paid_periods: Option<u32>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<NaiveDateTime>,
}

impl Loan {
    pub fn is_active(&self) -> bool {
        self.status.as_deref().unwrap_or("active") == "active"
    }

    /// Share of the principal already repaid, in percent with two decimals.
    /// Zero when either amount is unknown or the total is zero.
    pub fn repaid_percentage(&self) -> f64 {
        match (self.total_amount, self.remaining_amount) {
            (Some(total), Some(remaining)) if total != 0.0 => {
                ((total - remaining) / total * 10_000.0).round() / 100.0
            }
            _ => 0.0,
        }
    }

    pub fn remaining_periods(&self) -> Option<u32> {
        let total = self.total_periods?;
        Some(total.saturating_sub(self.paid_periods.unwrap_or(0)))
    }
}

/// One repayment recorded against a loan.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentHistory {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub loan_id: Option<i64>,
    pub payment_amount: f64,
    pub payment_date: NaiveDate,
    #[serde(default)]
    pub is_extra_payment: Option<bool>,
    #[serde(default)]
    pub auto_deduct_balance: Option<bool>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

/// Body for `POST /loans/{id}/payment`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub payment_amount: f64,
    pub payment_date: NaiveDate,
    pub auto_deduct_balance: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl PaymentRequest {
    /// A payment that is deducted from the current balance, as the backend defaults to.
    pub fn new(payment_amount: f64, payment_date: NaiveDate) -> Self {
        PaymentRequest {
            payment_amount,
            payment_date,
            auto_deduct_balance: true,
            note: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn repaid_percentage_rounds_to_two_decimals() {
        let loan = Loan {
            total_amount: Some(3000.0),
            remaining_amount: Some(2000.0),
            ..Default::default()
        };
        assert_eq!(loan.repaid_percentage(), 33.33);

        let halfway = Loan {
            total_amount: Some(1000.0),
            remaining_amount: Some(250.0),
            ..Default::default()
        };
        assert_eq!(halfway.repaid_percentage(), 75.0);
    }

    #[test]
    fn repaid_percentage_guards_zero_total() {
        let loan = Loan {
            total_amount: Some(0.0),
            remaining_amount: Some(0.0),
            ..Default::default()
        };
        assert_eq!(loan.repaid_percentage(), 0.0);
        assert_eq!(Loan::default().repaid_percentage(), 0.0);
    }

    #[test]
    fn loan_reads_backend_json() {
        let loan: Loan = serde_json::from_value(json!({
            "id": 7,
            "loanName": "Car",
            "platform": "Bank A",
            "totalAmount": 12000.0,
            "remainingAmount": 6000.0,
            "monthlyPayment": 500,
            "paymentDay": 15,
            "totalPeriods": 24,
            "paidPeriods": 12,
            "startDate": "2024-01-15",
            "status": "active",
            "createdAt": "2024-01-10T09:30:00"
        }))
        .unwrap();
        assert_eq!(loan.id, Some(7));
        assert!(loan.is_active());
        assert_eq!(loan.remaining_periods(), Some(12));
        assert_eq!(loan.start_date, NaiveDate::from_ymd_opt(2024, 1, 15));
        assert_eq!(loan.repaid_percentage(), 50.0);
    }

    #[test]
    fn payment_request_uses_backend_field_names() {
        let body = serde_json::to_value(PaymentRequest::new(
            500.0,
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        ))
        .unwrap();
        assert_eq!(
            body,
            json!({ "paymentAmount": 500.0, "paymentDate": "2024-03-15", "autoDeductBalance": true })
        );
    }
}
