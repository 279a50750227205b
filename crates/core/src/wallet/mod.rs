//! Wallet module - savings goals and the append-only transaction ledger.

mod wallet_model;


pub use wallet_model::{
    goal_balance_from_ledger, wallet_balance_from_ledger, Goal, Transaction, TransactionType,
    WalletFlow,
};
