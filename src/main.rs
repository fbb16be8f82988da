use chrono::NaiveDate;
use loans_client::config::{self, CONFIG};
use loans_client::core::display::DisplayUtils;
use loans_client::core::models::{BalanceUpdate, Loan, PaymentRequest};
use loans_client::infrastructure::ui::console::{ConsoleNotifier, ConsoleUiStatus};
use loans_client::{ApiClient, ApiError, Transport};
use serde_json::{Value, json};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

type Console = DisplayUtils<ConsoleUiStatus, ConsoleNotifier>;

const USAGE: &str = "usage: loans-cli <command> [args]

commands:
  dashboard | overview | status | info
  loans | active-loans | loan <id> | loan-summary
  pay <loan-id> <amount> <yyyy-mm-dd> [note]
  delete-loan <id>
  income | expenses
  balance | balance-history | set-balance <amount> [description]
  forecast [months] | deficit [months] | timeline [months]";

#[derive(Debug)]
enum CliError {
    Usage(String),
    Api(ApiError),
}

impl From<ApiError> for CliError {
    fn from(err: ApiError) -> Self {
        CliError::Api(err)
    }
}

fn arg<'a>(args: &'a [String], index: usize, name: &str) -> Result<&'a str, CliError> {
    args.get(index)
        .map(String::as_str)
        .ok_or_else(|| CliError::Usage(format!("missing <{}>", name)))
}

fn parse<T: std::str::FromStr>(value: &str, name: &str) -> Result<T, CliError> {
    value
        .parse()
        .map_err(|_| CliError::Usage(format!("invalid <{}>: {}", name, value)))
}

fn months(args: &[String]) -> Result<Option<i64>, CliError> {
    args.get(1).map(|m| parse(m, "months")).transpose()
}

fn print_json(value: &Value) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string()));
}

fn print_loans(console: &Console, loans: Value) -> Result<(), CliError> {
    let loans: Vec<Loan> = serde_json::from_value(loans).map_err(|e| {
        ApiError::Decode {
            status: 200,
            message: e.to_string(),
        }
    })?;
    for loan in &loans {
        println!(
            "{:>4}{} {:<20} {:<12} {:>14} {:>7.2}% {:>4}  {}",
            loan.id.map(|id| id.to_string()).unwrap_or_default(),
            if loan.is_active() { " " } else { "*" },
            loan.loan_name,
            loan.platform.as_deref().unwrap_or("-"),
            console.format_money(&loan.remaining_amount.unwrap_or(0.0)),
            loan.repaid_percentage(),
            loan.remaining_periods().map(|p| p.to_string()).unwrap_or_else(|| "-".to_string()),
            console.format_date(loan.start_date),
        );
    }
    Ok(())
}

async fn run<T: Transport>(client: &ApiClient<T>, console: &Console, args: &[String]) -> Result<(), CliError> {
    let command = arg(args, 0, "command")?;
    match command {
        "dashboard" => print_json(&client.dashboard().get_data().await?),
        "overview" => print_json(&client.dashboard().get_overview().await?),
        "status" => {
            let dashboard = client.dashboard();
            let balance = client.balance();
            let (overview, balance) = futures::try_join!(dashboard.get_overview(), balance.get_current())?;
            print_json(&json!({ "overview": overview, "balance": balance }));
        }
        "info" => print_json(&client.system().get_info().await?),
        "loans" => print_loans(console, client.loans().get_all().await?)?,
        "active-loans" => print_loans(console, client.loans().get_active().await?)?,
        "loan" => print_json(&client.loans().get_by_id(arg(args, 1, "id")?).await?),
        "loan-summary" => print_json(&client.loans().get_summary().await?),
        "pay" => {
            let id = arg(args, 1, "loan-id")?;
            let amount: f64 = parse(arg(args, 2, "amount")?, "amount")?;
            let date: NaiveDate = parse(arg(args, 3, "date")?, "date")?;
            let mut payment = PaymentRequest::new(amount, date);
            payment.note = args.get(4).cloned();
            print_json(&client.loans().record_payment(id, &payment).await?);
            console.show_success(&format!("{} paid", console.format_money(&amount)));
        }
        "delete-loan" => {
            let id = arg(args, 1, "id")?;
            let response = client.loans().delete(id).await?;
            if response.is_success() {
                console.show_success(&format!("loan {} deleted", id));
            } else {
                console.show_error(&format!("delete returned {}", response.status()));
            }
        }
        "income" => print_json(&client.income().get_all().await?),
        "expenses" => print_json(&client.expenses().get_all().await?),
        "balance" => print_json(&client.balance().get_current().await?),
        "balance-history" => print_json(&client.balance().get_history().await?),
        "set-balance" => {
            let update = BalanceUpdate {
                balance: parse(arg(args, 1, "amount")?, "amount")?,
                description: args.get(2).cloned(),
            };
            print_json(&client.balance().update(&update).await?);
            console.show_success(&format!("balance set to {}", console.format_money(&update.balance)));
        }
        "forecast" => print_json(&client.forecast().get_cash_flow(months(args)?).await?),
        "deficit" => print_json(&client.forecast().get_deficit(months(args)?).await?),
        "timeline" => print_json(&client.forecast().get_timeline(months(args)?).await?),
        other => return Err(CliError::Usage(format!("unknown command: {}", other))),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(config::log_level()).unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let client = CONFIG.api_client();
    let console = CONFIG.display();
    info!("Using backend at {}", client.base_url());

    let args: Vec<String> = std::env::args().skip(1).collect();
    console.show_loading();
    let result = run(&client, &console, &args).await;
    console.hide_loading();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Usage(message)) => {
            eprintln!("{}\n\n{}", message, USAGE);
            ExitCode::from(2)
        }
        Err(CliError::Api(err)) => {
            console.show_error(&err.to_string());
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;
    use loans_client::{InMemoryTransport, Locale};

    fn create_test_cli() -> (ApiClient<InMemoryTransport>, Console, InMemoryTransport) {
        let transport = InMemoryTransport::new();
        let client = ApiClient::new("http://localhost:8080", transport.clone());
        let console = DisplayUtils::new(Locale::ZhCn, ConsoleUiStatus, ConsoleNotifier);
        (client, console, transport)
    }

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|a| a.to_string()).collect()
    }

    #[tokio::test]
    async fn test_status_fetches_overview_and_balance() {
        let (client, console, transport) = create_test_cli();
        run(&client, &console, &args(&["status"])).await.unwrap();

        let mut paths: Vec<String> = transport
            .requests()
            .await
            .iter()
            .map(|r| r.path().to_string())
            .collect();
        paths.sort();
        assert_eq!(paths, vec!["/api/balance/current", "/api/dashboard/overview"]);
    }

    #[tokio::test]
    async fn test_status_fails_when_either_fetch_fails() {
        let (client, console, transport) = create_test_cli();
        transport.push_failure("connection refused").await;

        let result = run(&client, &console, &args(&["status"])).await;
        assert!(matches!(result, Err(CliError::Api(ApiError::Transport(_)))));
    }

    #[tokio::test]
    async fn test_loans_table_accepts_backend_records() {
        let (client, console, transport) = create_test_cli();
        transport
            .push_json(
                StatusCode::OK,
                serde_json::json!([
                    { "id": 1, "loanName": "Car", "totalAmount": 1000, "remainingAmount": 250,
                      "totalPeriods": 12, "paidPeriods": 9, "status": "active" },
                    { "id": 2, "loanName": "Phone", "status": "paid_off" }
                ]),
            )
            .await;

        run(&client, &console, &args(&["loans"])).await.unwrap();
        let request = transport.last_request().await.unwrap();
        assert_eq!(request.path(), "/api/loans");
    }

    #[tokio::test]
    async fn test_usage_errors() {
        let (client, console, transport) = create_test_cli();

        let result = run(&client, &console, &args(&[])).await;
        assert!(matches!(result, Err(CliError::Usage(_))));
        let result = run(&client, &console, &args(&["frobnicate"])).await;
        assert!(matches!(result, Err(CliError::Usage(_))));
        let result = run(&client, &console, &args(&["forecast", "soon"])).await;
        assert!(matches!(result, Err(CliError::Usage(_))));

        assert!(transport.requests().await.is_empty());
    }
}
