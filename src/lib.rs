//! Rust client for the Mono open-banking REST API.
//! Wraps account linking, account data, statements, transactions, income,
//! identity and institution lookups in a small async interface with typed
//! responses.

pub mod client;
pub mod config;
mod endpoints;
pub mod error;
pub mod models;
pub mod payload;

pub use client::Client;
pub use config::{Config, DEFAULT_API_URL};
pub use error::{ApiError, MonoError};
pub use models::{
    Account, IdentityResponse, IncomeResponse, InformationResponse, Institution,
    InstitutionsResponse, Paging, StatementData, StatementJob, StatementJobStatus,
    StatementOutput, StatementResponse, Transaction, TransactionsByType, TransactionsResponse,
};
