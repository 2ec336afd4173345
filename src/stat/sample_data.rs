use super::datatype::{Account, TransactionRow};

pub fn sample_accounts() -> Vec<Account> {
    vec![
        Account::new("Chris Krüger"),
        Account::new("John Doe"),
        Account::new("Alice Smith"),
    ]
}

pub fn sample_transactions() -> Vec<TransactionRow> {
    vec![
        TransactionRow::new("2023-09-01", "Transaction 1", 100),
        TransactionRow::new("2023-09-02", "Transaction 2", -50),
        TransactionRow::new("2023-09-03", "Transaction 3", 200),
    ]
}
