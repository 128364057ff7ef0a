//! HTTP routes for the pricing engine.
//!
//! Thin JSON adapters: decode, call the calculators, encode. Failures map to
//! `AppError` and are rendered there.

use axum::{extract::State, routing::post, Json, Router};

use crate::error::{AppError, Result};
use crate::AppState;

use super::calculators::{calc_net_revenue, get_effective_commission, resolve_pricing};
use super::models::{PartialPricing, PricingResult};
use super::quotes::{calculate_tour_pricing, check_profit_shield, propose_pvp, reverse_margin, TourPriceSheet, TourRates};
use super::requests::{CommissionRequest, NetRevenueRequest, QuoteRequest, ReverseMarginRequest, SeasonalRateRequest};
use super::responses::{CommissionResponse, NetRevenueResponse, QuoteResponse, SeasonalRateResponse};
use super::seasons::find_seasonal_rate;

/// Pricing router, mounted under `/api/pricing`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/resolve", post(resolve))
        .route("/net-revenue", post(net_revenue))
        .route("/commission", post(commission))
        .route("/seasonal", post(seasonal))
        .route("/quote", post(quote))
        .route("/reverse-margin", post(reverse))
        .route("/tour-sheet", post(tour_sheet))
}

async fn resolve(Json(partial): Json<PartialPricing>) -> Result<Json<PricingResult>> {
    Ok(Json(resolve_pricing(&partial)?))
}

async fn net_revenue(Json(req): Json<NetRevenueRequest>) -> Result<Json<NetRevenueResponse>> {
    let net_revenue = calc_net_revenue(req.pvp, req.commission_percent)?;
    Ok(Json(NetRevenueResponse {
        pvp: req.pvp,
        commission_percent: req.commission_percent,
        net_revenue,
    }))
}

async fn commission(
    State(state): State<AppState>,
    Json(req): Json<CommissionRequest>,
) -> Result<Json<CommissionResponse>> {
    let base_commission = match req.base_commission {
        Some(base) => base,
        None => state
            .ota_settings
            .commission_for(&state.settings_source, &req.channel_name)
            .await?
            .ok_or_else(|| AppError::UnknownChannel(req.channel_name.clone()))?,
    };

    let effective_commission = get_effective_commission(&req.channel_name, base_commission, &req.options());
    tracing::debug!(
        "Commission for {}: base {} -> effective {}",
        req.channel_name,
        base_commission,
        effective_commission
    );

    Ok(Json(CommissionResponse {
        channel_name: req.channel_name,
        base_commission,
        effective_commission,
    }))
}

async fn seasonal(Json(req): Json<SeasonalRateRequest>) -> Json<SeasonalRateResponse> {
    let season = find_seasonal_rate(req.date, &req.seasons).cloned();
    Json(SeasonalRateResponse { season })
}

async fn quote(Json(req): Json<QuoteRequest>) -> Result<Json<QuoteResponse>> {
    let quote = propose_pvp(req.net, req.factor)?;
    Ok(Json(QuoteResponse {
        profit_shield_ok: check_profit_shield(&quote, req.min_margin_percent),
        quote,
    }))
}

async fn reverse(Json(req): Json<ReverseMarginRequest>) -> Result<Json<QuoteResponse>> {
    let quote = reverse_margin(req.pvp, req.net)?;
    Ok(Json(QuoteResponse {
        profit_shield_ok: check_profit_shield(&quote, req.min_margin_percent),
        quote,
    }))
}

async fn tour_sheet(Json(rates): Json<TourRates>) -> Result<Json<TourPriceSheet>> {
    Ok(Json(calculate_tour_pricing(&rates)?))
}
