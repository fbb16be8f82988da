pub mod balance;
pub mod entry;
pub mod loan;
pub mod schedule;

pub use balance::{BalanceHistory, BalanceUpdate};
pub use entry::{Expense, Income};
pub use loan::{Loan, PaymentHistory, PaymentRequest};
pub use schedule::{RepaymentSchedule, TempTransaction};
