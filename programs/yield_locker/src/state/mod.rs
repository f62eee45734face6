pub use cooldown::*;
pub use distributor::*;
pub use events::*;
pub use fee_config::*;
pub use fee_engine::*;
pub use health_check::*;
pub use locker::*;
pub use locker_depositor::*;
pub use protocol_fee_config::*;
pub use strategy::*;
pub use traits::*;
pub use transfer_guard::*;

mod cooldown;
mod distributor;
pub mod events;
mod fee_config;
mod fee_engine;
mod health_check;
mod locker;
mod locker_depositor;
mod protocol_fee_config;
mod strategy;
mod traits;
mod transfer_guard;
