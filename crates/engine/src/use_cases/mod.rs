//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific domain area.
//! Use cases orchestrate across entity modules to fulfill user stories.

pub mod payment;
pub mod sign;

// Re-export main types
pub use payment::{ChargeForSign, ChargeOutcome, PaymentError};
pub use sign::{
    ActivatePaySign, Activation, ActivationDenial, ActivationSettings, CreatePaySign,
    CreateRejection, SignCreation, SignPorts, SignUseCases, UseCaseError, PERMISSION_CREATE,
    PERMISSION_CREATE_OTHER, PERMISSION_USE,
};
