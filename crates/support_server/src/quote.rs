//! Freight quote estimator.
//!
//! Replaces a live carrier API with a deterministic estimate: price and ETA
//! derive from the destination region (first CEP digit) and the billable
//! weight, so the same request always yields the same quote.

use support_core::{cep, CarrierOption, FreightQuoteRequest, FreightQuoteResponse};

const INVALID_CEP_ERROR: &str = "CEP inválido. O CEP deve conter 8 dígitos.";

/// Cubic divisor in cm³/kg, the road-freight convention.
const CUBIC_DIVISOR: f64 = 6000.0;

struct Service {
    name: &'static str,
    base_price: f64,
    base_eta_days: u32,
}

const SERVICES: [Service; 3] = [
    Service {
        name: "JadLog Expresso",
        base_price: 32.9,
        base_eta_days: 2,
    },
    Service {
        name: "JadLog Rodoviário",
        base_price: 21.5,
        base_eta_days: 5,
    },
    Service {
        name: "JadLog Econômico",
        base_price: 16.9,
        base_eta_days: 8,
    },
];

/// Price multiplier and extra transit days by CEP region.
///
/// CEP regions 0-9 fan out from São Paulo; the shop ships from there.
fn region_factors(cep: &str) -> (f64, u32) {
    match cep.as_bytes()[0] {
        b'0' => (1.0, 0),
        b'1' => (1.05, 0),
        b'2' => (1.2, 1),
        b'3' => (1.15, 1),
        b'4' => (1.3, 2),
        b'5' => (1.35, 2),
        b'6' => (1.5, 3),
        b'7' => (1.25, 2),
        b'8' => (1.1, 1),
        _ => (1.15, 1),
    }
}

/// Weight charged: the greater of real weight and cubic weight.
fn billable_weight(request: &FreightQuoteRequest) -> f64 {
    let cubic =
        request.length_cm() * request.height_cm() * request.width_cm() / CUBIC_DIVISOR;
    request.weight_kg().max(cubic)
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn estimate(request: &FreightQuoteRequest) -> FreightQuoteResponse {
    let Some(cep) = cep::normalize(&request.cep) else {
        return FreightQuoteResponse::failed(INVALID_CEP_ERROR);
    };

    let (price_factor, extra_days) = region_factors(&cep);
    let weight = billable_weight(request);
    let weight_factor = 1.0 + 0.15 * (weight - 1.0).max(0.0);

    let carriers = SERVICES
        .iter()
        .map(|service| CarrierOption {
            name: service.name.to_string(),
            price: round_cents(service.base_price * price_factor * weight_factor),
            eta_days: service.base_eta_days + extra_days,
        })
        .collect();

    FreightQuoteResponse::ok(carriers)
}
