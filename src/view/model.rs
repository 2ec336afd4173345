use chrono::NaiveDate;

use crate::stat::{sample_accounts, sample_transactions, Account, DateRange, FileType, TransactionRow};

/// Values the form widgets show on render. Nothing reads them back.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selections {
    pub account: Option<Account>,
    pub dates: DateRange,
    pub file_type: FileType,
}

impl Selections {
    pub fn for_accounts(accounts: &[Account]) -> Self {
        Self {
            account: accounts.first().cloned(),
            dates: DateRange::default(),
            file_type: FileType::default(),
        }
    }
}

/// Everything the dashboard layout is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardModel {
    pub accounts: Vec<Account>,
    pub rows: Vec<TransactionRow>,
    pub selections: Selections,
}

impl DashboardModel {
    pub fn new(accounts: Vec<Account>, rows: Vec<TransactionRow>) -> Self {
        let selections = Selections::for_accounts(&accounts);
        Self {
            accounts,
            rows,
            selections,
        }
    }

    pub fn sample() -> Self {
        Self::new(sample_accounts(), sample_transactions())
    }

    pub fn with_account(mut self, account: Account) -> Self {
        self.selections.account = Some(account);
        self
    }

    pub fn with_start_date(mut self, date: Option<NaiveDate>) -> Self {
        self.selections.dates.start = date;
        self
    }

    pub fn with_end_date(mut self, date: Option<NaiveDate>) -> Self {
        self.selections.dates.end = date;
        self
    }

    pub fn with_file_type(mut self, file_type: FileType) -> Self {
        self.selections.file_type = file_type;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_preselects_first_account() {
        let model = DashboardModel::sample();
        assert_eq!(model.selections.account, model.accounts.first().cloned());
        assert_eq!(model.selections.file_type, FileType::Pdf);
        assert_eq!(model.selections.dates, DateRange::default());
    }

    #[test]
    fn empty_account_list_selects_nothing() {
        let model = DashboardModel::new(Vec::new(), sample_transactions());
        assert_eq!(model.selections.account, None);
    }

    #[test]
    fn end_before_start_is_accepted() {
        let start = NaiveDate::from_ymd_opt(2023, 9, 3);
        let end = NaiveDate::from_ymd_opt(2023, 9, 1);
        let model = DashboardModel::sample()
            .with_start_date(start)
            .with_end_date(end);
        assert_eq!(model.selections.dates, DateRange::new(start, end));
    }
}
