//! Application layer containing the withdrawal engine.
//!
//! This module defines the `AtmMachine` which acts as the primary entry
//! point for withdrawal requests. It owns the cash deposit and delegates
//! authorization and charging to the configured `Bank` port.

pub mod atm;
