//! Form input validation
//!
//! Turns the raw form fields into a transaction, or rejects them without
//! touching any state.

use crate::error::{WalletError, WalletResult};
use crate::models::{Money, Transaction, TransactionId, TransactionType};

/// The entry form: description, amount and type selector
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub description: String,
    pub amount: String,
    pub kind: TransactionType,
}

impl FormState {
    /// Form pre-filled with an existing entry, as the Edit action does
    pub fn from_transaction(txn: &Transaction) -> Self {
        Self {
            description: txn.description.clone(),
            amount: txn.amount.to_fixed(),
            kind: txn.kind,
        }
    }

    /// Whether every field holds its default value
    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }
}

/// Form contents that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidInput {
    pub description: String,
    pub amount: Money,
    pub kind: TransactionType,
}

impl ValidInput {
    pub fn into_transaction(self, id: TransactionId) -> Transaction {
        Transaction::new(id, self.description, self.amount, self.kind)
    }
}

/// Validate and normalize a submitted form
///
/// The description is trimmed and must be non-empty. The amount is rounded
/// to cents and must be strictly positive after rounding.
pub fn validate_form(form: &FormState) -> WalletResult<ValidInput> {
    let description = form.description.trim();
    if description.is_empty() {
        return Err(WalletError::invalid_input());
    }

    let amount = Money::parse(&form.amount).map_err(|_| WalletError::invalid_input())?;
    if !amount.is_positive() {
        return Err(WalletError::invalid_input());
    }

    Ok(ValidInput {
        description: description.to_string(),
        amount,
        kind: form.kind,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(description: &str, amount: &str, kind: TransactionType) -> FormState {
        FormState {
            description: description.into(),
            amount: amount.into(),
            kind,
        }
    }

    #[test]
    fn test_normalizes_valid_input() {
        let input = validate_form(&form("  Bonus ", "150", TransactionType::Income)).unwrap();

        assert_eq!(input.description, "Bonus");
        assert_eq!(input.amount.to_fixed(), "150.00");
        assert_eq!(input.kind, TransactionType::Income);
    }

    #[test]
    fn test_rejects_bad_input() {
        let cases = [
            form("", "10", TransactionType::Income),
            form("   ", "10", TransactionType::Income),
            form("Lunch", "", TransactionType::Expense),
            form("Lunch", "0", TransactionType::Expense),
            form("Lunch", "0.004", TransactionType::Expense),
            form("Lunch", "-5", TransactionType::Expense),
            form("Lunch", "ten", TransactionType::Expense),
        ];

        for case in cases {
            let err = validate_form(&case).unwrap_err();
            assert!(err.is_validation(), "{case:?}");
            assert_eq!(err.alert_text(), crate::error::INVALID_INPUT_MESSAGE);
        }
    }

    #[test]
    fn test_amount_ceiling() {
        let largest = validate_form(&form("Salary", "999999999999.99", TransactionType::Income))
            .unwrap();
        assert_eq!(largest.amount, Money::MAX);

        for amount in ["1000000000000", "92233720368547758"] {
            let err = validate_form(&form("Big", amount, TransactionType::Income)).unwrap_err();
            assert_eq!(err.alert_text(), crate::error::INVALID_INPUT_MESSAGE);
        }
    }

    #[test]
    fn test_form_from_transaction() {
        let txn = Transaction::new(
            TransactionId::from_raw(1),
            "Food",
            Money::from_cents(2_000),
            TransactionType::Expense,
        );
        let form = FormState::from_transaction(&txn);

        assert_eq!(form.description, "Food");
        assert_eq!(form.amount, "20.00");
        assert_eq!(form.kind, TransactionType::Expense);
        assert!(!form.is_blank());
        assert!(FormState::default().is_blank());
    }
}
