//! Error handling for the application

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rust_decimal::Decimal;
use serde::Serialize;

/// Pricing calculation errors.
///
/// The resolver never clamps or guesses: any of these is an immediate failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PricingError {
    #[error("{field} must be greater than 0 (got {value})")]
    InvalidAmount { field: &'static str, value: Decimal },

    #[error("Pricing factor {factor} is out of range [{min}, {max}]")]
    FactorOutOfRange {
        factor: Decimal,
        min: Decimal,
        max: Decimal,
    },

    #[error("{field} is outside the representable range")]
    AmountOutOfRange { field: &'static str },

    #[error("Insufficient pricing data. Provide at least: net, OR net + factor, OR public + factor.")]
    InsufficientPricingData,

    #[error("Commission percent must be between 0 and 100 (got {commission})")]
    InvalidCommission { commission: Decimal },

    #[error("Minimum pax must be greater than 0")]
    InvalidPax,

    #[error("Exchange rate must be greater than 0 (got {rate})")]
    InvalidExchangeRate { rate: Decimal },
}

impl PricingError {
    /// Stable taxonomy name, used as `error_type` on the wire.
    pub fn kind(&self) -> &'static str {
        match self {
            PricingError::InvalidAmount { .. } => "InvalidAmount",
            PricingError::FactorOutOfRange { .. } => "FactorOutOfRange",
            PricingError::AmountOutOfRange { .. } => "AmountOutOfRange",
            PricingError::InsufficientPricingData => "InsufficientPricingData",
            PricingError::InvalidCommission { .. } => "InvalidCommission",
            PricingError::InvalidPax => "InvalidPax",
            PricingError::InvalidExchangeRate { .. } => "InvalidExchangeRate",
        }
    }
}

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error("No commission configured for channel '{0}'")]
    UnknownChannel(String),

    #[error("OTA settings error: {0}")]
    Settings(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// JSON body returned for any failed request
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error_type: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            AppError::Pricing(e) => (StatusCode::UNPROCESSABLE_ENTITY, e.kind()),
            AppError::UnknownChannel(_) => (StatusCode::NOT_FOUND, "UnknownChannel"),
            AppError::Settings(msg) => {
                tracing::error!("OTA settings error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "SettingsUnavailable")
            }
            AppError::Config(msg) => {
                tracing::error!("Configuration error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal")
            }
        };

        let body = ErrorResponse {
            error_type: error_type.to_string(),
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
