pub use error::EngineError;
pub use members::{MemberSpec, MemberType};
pub use ops::{Engine, EngineBuilder, SplitExpense, SplitOutcome, WalletTarget};
pub use split::{SplitKind, equal_split, ratio_split};
pub use summary::{GroupSummary, MemberBalance, MemberReport, PaidEntry, SpentEntry};
pub use wallets::Wallet;

mod error;
pub mod members;
mod ops;
mod split;
mod summary;
pub mod transactions;
pub mod wallets;

type ResultEngine<T> = Result<T, EngineError>;
