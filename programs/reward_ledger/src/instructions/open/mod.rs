// reward_ledger/instructions/open/mod.rs

// Read-only queries. Anyone can simulate these to read the return data.

pub mod get_balance;
pub mod get_task_budget;

pub use get_balance::GetBalance;
pub(crate) use get_balance::__client_accounts_get_balance;
pub use get_task_budget::GetTaskBudget;
pub(crate) use get_task_budget::__client_accounts_get_task_budget;

cfg_if::cfg_if! {
    if #[cfg(feature = "cpi")] {
        pub(crate) use get_balance::__cpi_client_accounts_get_balance;
        pub(crate) use get_task_budget::__cpi_client_accounts_get_task_budget;
    }
}
