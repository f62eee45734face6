pub use fees::*;

mod fees;
