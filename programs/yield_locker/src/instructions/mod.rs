pub use cancel_cooldown::*;
pub use deposit::*;
pub use distribute::*;
pub use distribute_many::*;
pub use get_cooldown_status::*;
pub use initialize_distributor::*;
pub use initialize_locker::*;
pub use initialize_locker_depositor::*;
pub use initialize_protocol_fee_config::*;
pub use initialize_split_table::*;
pub use initialize_strategy::*;
pub use protocol_claim_fee_shares::*;
pub use remove_receiver::*;
pub use report::*;
pub use set_fees::*;
pub use start_cooldown::*;
pub use strategy_borrow::*;
pub use strategy_repay::*;
pub use transfer_shares::*;
pub use update_locker::*;
pub use update_split::*;
pub use withdraw::*;
pub use withdraw_fees::*;
pub use withdrawable_amount::*;

mod cancel_cooldown;
pub mod constraints;
mod deposit;
mod distribute;
mod distribute_many;
mod get_cooldown_status;
mod initialize_distributor;
mod initialize_locker;
mod initialize_locker_depositor;
mod initialize_protocol_fee_config;
mod initialize_split_table;
mod initialize_strategy;
mod protocol_claim_fee_shares;
mod remove_receiver;
mod report;
mod set_fees;
mod start_cooldown;
mod strategy_borrow;
mod strategy_repay;
mod transfer_shares;
mod update_locker;
mod update_split;
mod withdraw;
mod withdraw_fees;
mod withdrawable_amount;
