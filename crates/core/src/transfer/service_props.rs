//! Property tests for transfer validation.

use proptest::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::TransferError;
use super::service::TransferService;
use super::types::{ContractSnapshot, ContractState, JobSnapshot, ProfileKind, ProfileSnapshot};

/// Strategy for positive money amounts with two decimal places.
fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000i64).prop_map(|n| Decimal::new(n, 2))
}

/// Strategy for non-negative money amounts with two decimal places.
fn non_negative_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000i64).prop_map(|n| Decimal::new(n, 2))
}

fn fixture(
    balance: Decimal,
    price: Decimal,
    status: ContractState,
    paid: bool,
) -> (ProfileSnapshot, ContractSnapshot, JobSnapshot) {
    let client = ProfileSnapshot {
        id: Uuid::new_v4(),
        kind: ProfileKind::Client,
        balance,
    };
    let contract = ContractSnapshot {
        id: Uuid::new_v4(),
        status,
        client_id: client.id,
        contractor_id: Uuid::new_v4(),
    };
    let job = JobSnapshot {
        id: Uuid::new_v4(),
        contract_id: contract.id,
        price,
        paid,
    };
    (client, contract, job)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// An authorized plan always moves exactly the job price from the
    /// client to the contractor: applying it conserves the balance total.
    #[test]
    fn prop_plan_conserves_total(price in amount_strategy(), headroom in non_negative_strategy()) {
        let balance = price + headroom;
        let (client, contract, job) = fixture(balance, price, ContractState::InProgress, false);

        let plan = TransferService::authorize_payment(client.id, &job, &contract, &client).unwrap();

        prop_assert_eq!(plan.amount, price);
        prop_assert_eq!(plan.debit_profile_id, client.id);
        prop_assert_eq!(plan.credit_profile_id, contract.contractor_id);

        // Simulated application: total before == total after.
        let contractor_balance = Decimal::ZERO;
        let total_before = client.balance + contractor_balance;
        let total_after = (client.balance - plan.amount) + (contractor_balance + plan.amount);
        prop_assert_eq!(total_before, total_after);
    }

    /// A balance strictly below the price is always rejected, never
    /// partially debited.
    #[test]
    fn prop_underfunded_payment_rejected(price in amount_strategy(), shortfall in amount_strategy()) {
        prop_assume!(shortfall <= price);
        let balance = price - shortfall;
        let (client, contract, job) = fixture(balance, price, ContractState::InProgress, false);

        let result = TransferService::authorize_payment(client.id, &job, &contract, &client);
        let is_insufficient_funds = matches!(result, Err(TransferError::InsufficientFunds { .. }));
        prop_assert!(is_insufficient_funds);
    }

    /// A paid job is never authorized again, regardless of balance.
    #[test]
    fn prop_paid_job_never_reauthorized(price in amount_strategy(), balance in non_negative_strategy()) {
        let (client, contract, job) = fixture(balance, price, ContractState::InProgress, true);

        let result = TransferService::authorize_payment(client.id, &job, &contract, &client);
        prop_assert!(matches!(result, Err(TransferError::JobAlreadyPaid(_))));
    }

    /// The deposit cap boundary: accepted iff amount <= 0.25 * total_owed.
    #[test]
    fn prop_deposit_cap_boundary(amount in amount_strategy(), total_owed in non_negative_strategy()) {
        let client = ProfileSnapshot {
            id: Uuid::new_v4(),
            kind: ProfileKind::Client,
            balance: Decimal::ZERO,
        };

        let result = TransferService::authorize_deposit(&client, &client, amount, total_owed);
        let cap = TransferService::deposit_cap(total_owed);

        if amount <= cap {
            prop_assert!(result.is_ok());
        } else {
            let is_cap_exceeded = matches!(result, Err(TransferError::DepositCapExceeded { .. }));
            prop_assert!(is_cap_exceeded);
        }
    }
}
