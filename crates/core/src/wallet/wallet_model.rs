//! Wallet and savings goal domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A named savings target funded from the wallet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub name: String,
    pub target_amount: Decimal,
    /// May exceed the target
    pub current_amount: Decimal,
}

impl Goal {
    /// Fraction of the target already saved, capped at 1.
    pub fn progress(&self) -> Decimal {
        if self.target_amount <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        (self.current_amount / self.target_amount).min(Decimal::ONE)
    }

    pub fn is_reached(&self) -> bool {
        self.current_amount >= self.target_amount
    }
}

/// Kind of ledger movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    /// Money entering the wallet
    #[serde(rename = "Aporte a Wallet")]
    Aporte,
    /// Money spent from the wallet
    #[serde(rename = "Gasto de Wallet")]
    Gasto,
    /// Wallet to goal
    #[serde(rename = "Aporte a Meta")]
    AsignacionMeta,
    /// Goal back to wallet
    #[serde(rename = "Retiro de Meta")]
    RetiroMeta,
}

impl TransactionType {
    /// Effect of a movement of `amount` on the wallet balance.
    pub fn signed_amount(&self, amount: Decimal) -> Decimal {
        match self {
            TransactionType::Aporte | TransactionType::RetiroMeta => amount,
            TransactionType::Gasto | TransactionType::AsignacionMeta => -amount,
        }
    }
}

/// The two movements a user can record directly against the wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WalletFlow {
    #[serde(rename = "Aporte a Wallet")]
    Aporte,
    #[serde(rename = "Gasto de Wallet")]
    Gasto,
}

impl From<WalletFlow> for TransactionType {
    fn from(flow: WalletFlow) -> Self {
        match flow {
            WalletFlow::Aporte => TransactionType::Aporte,
            WalletFlow::Gasto => TransactionType::Gasto,
        }
    }
}

/// Immutable ledger row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub date: DateTime<Utc>,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// Always positive; the sign comes from the type
    pub amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_goal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Transaction {
    pub fn signed_amount(&self) -> Decimal {
        self.transaction_type.signed_amount(self.amount)
    }
}

/// Wallet balance implied by a ledger, starting from zero.
pub fn wallet_balance_from_ledger(transactions: &[Transaction]) -> Decimal {
    transactions
        .iter()
        .map(Transaction::signed_amount)
        .sum()
}

/// Net amount the ledger has moved into a goal.
pub fn goal_balance_from_ledger(transactions: &[Transaction], goal_id: &str) -> Decimal {
    transactions
        .iter()
        .filter(|tx| tx.related_goal.as_deref() == Some(goal_id))
        .map(|tx| match tx.transaction_type {
            TransactionType::AsignacionMeta => tx.amount,
            TransactionType::RetiroMeta => -tx.amount,
            TransactionType::Aporte | TransactionType::Gasto => Decimal::ZERO,
        })
        .sum()
}
