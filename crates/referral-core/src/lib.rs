//! Referral email composer and exact-match evaluation pipeline.
//!
//! The crate is split along the three stages of a run:
//!
//! - [`compose`] renders a [`model::UserInfo`] into a referral-request email
//! - [`metrics_api`] defines the [`metrics_api::Scorer`] capability used to grade it
//! - [`driver`] wires composer, scorers and an [`client::EvaluationClient`] together
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use referral_core::client::LocalEvaluationClient;
//! use referral_core::config::EvalConfig;
//! use referral_core::driver::Driver;
//! use referral_core::model::UserInfo;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let driver = Driver::new(
//!     EvalConfig::from_env(),
//!     Arc::new(LocalEvaluationClient::new()),
//!     vec![],
//! );
//! let outcome = driver
//!     .run(UserInfo::canned_scenario(), &mut std::io::stdout())
//!     .await?;
//! println!("exit code: {}", outcome.exit_code());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod compose;
pub mod config;
pub mod driver;
pub mod errors;
pub mod metrics_api;
pub mod model;
pub mod report;

pub use errors::{ReferralError, ReferralResult};
