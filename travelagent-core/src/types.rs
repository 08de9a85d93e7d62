use crate::pricing::Price;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Local identity for list rendering. Never part of the wire payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OptionId(pub Uuid);

impl OptionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for OptionId {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripRequest {
    pub message: String,
}

impl TripRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Decoded `/chat` payload. Every key is optional on the wire; absent and
/// `null` both decode to `None`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct TripResponse {
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub flights: Option<Vec<FlightOption>>,
    #[serde(default)]
    pub hotels: Option<Vec<HotelOption>>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub execution_time_ms: Option<f64>,

    // Graph node ids in execution order. Diagnostics only.
    #[serde(default)]
    pub execution_order: Option<Vec<Option<String>>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "FlightOptionWire", into = "FlightOptionWire")]
pub struct FlightOption {
    pub id: OptionId,
    pub carrier: String,
    pub flight_number: String,
    pub route: String,
    pub depart_date: String,
    pub return_date: String,
    pub price: Option<f64>,
    pub price_usd: Option<f64>,
    pub currency: Option<String>,

    // Coalesced once from the fields above when decoded.
    pub display_price: Price,
}

impl FlightOption {
    pub fn new(
        carrier: impl Into<String>,
        flight_number: impl Into<String>,
        route: impl Into<String>,
        depart_date: impl Into<String>,
        return_date: impl Into<String>,
    ) -> Self {
        Self {
            id: OptionId::new(),
            carrier: carrier.into(),
            flight_number: flight_number.into(),
            route: route.into(),
            depart_date: depart_date.into(),
            return_date: return_date.into(),
            price: None,
            price_usd: None,
            currency: None,
            display_price: Price::unavailable(),
        }
    }

    pub fn with_pricing(
        mut self,
        price: Option<f64>,
        price_usd: Option<f64>,
        currency: Option<String>,
    ) -> Self {
        self.display_price = Price::coalesce(price, price_usd, currency.as_deref());
        self.price = price;
        self.price_usd = price_usd;
        self.currency = currency;
        self
    }

    pub fn price_string(&self) -> String {
        self.display_price.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "HotelOptionWire", into = "HotelOptionWire")]
pub struct HotelOption {
    pub id: OptionId,
    pub name: String,
    pub city: String,
    pub checkout_date: String,
    pub price_per_night: Option<f64>,
    pub price_usd_per_night: Option<f64>,
    pub currency: Option<String>,
    pub display_price: Price,
}

impl HotelOption {
    pub fn new(
        name: impl Into<String>,
        city: impl Into<String>,
        checkout_date: impl Into<String>,
    ) -> Self {
        Self {
            id: OptionId::new(),
            name: name.into(),
            city: city.into(),
            checkout_date: checkout_date.into(),
            price_per_night: None,
            price_usd_per_night: None,
            currency: None,
            display_price: Price::unavailable(),
        }
    }

    pub fn with_pricing(
        mut self,
        price_per_night: Option<f64>,
        price_usd_per_night: Option<f64>,
        currency: Option<String>,
    ) -> Self {
        self.display_price =
            Price::coalesce(price_per_night, price_usd_per_night, currency.as_deref());
        self.price_per_night = price_per_night;
        self.price_usd_per_night = price_usd_per_night;
        self.currency = currency;
        self
    }

    pub fn price_string(&self) -> String {
        self.display_price.to_string()
    }

    /// e.g. "89.00 EUR / night".
    pub fn nightly_price_string(&self) -> String {
        format!("{} / night", self.display_price)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct FlightOptionWire {
    carrier: String,
    flight: String,
    route: String,
    depart: String,
    #[serde(rename = "return")]
    return_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    price_usd: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    currency: Option<String>,
}

impl From<FlightOptionWire> for FlightOption {
    fn from(w: FlightOptionWire) -> Self {
        FlightOption::new(w.carrier, w.flight, w.route, w.depart, w.return_date)
            .with_pricing(w.price, w.price_usd, w.currency)
    }
}

impl From<FlightOption> for FlightOptionWire {
    fn from(f: FlightOption) -> Self {
        Self {
            carrier: f.carrier,
            flight: f.flight_number,
            route: f.route,
            depart: f.depart_date,
            return_date: f.return_date,
            price: f.price,
            price_usd: f.price_usd,
            currency: f.currency,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct HotelOptionWire {
    name: String,
    city: String,
    checkout: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    price_per_night: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    price_usd_per_night: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    currency: Option<String>,
}

impl From<HotelOptionWire> for HotelOption {
    fn from(w: HotelOptionWire) -> Self {
        HotelOption::new(w.name, w.city, w.checkout).with_pricing(
            w.price_per_night,
            w.price_usd_per_night,
            w.currency,
        )
    }
}

impl From<HotelOption> for HotelOptionWire {
    fn from(h: HotelOption) -> Self {
        Self {
            name: h.name,
            city: h.city,
            checkout: h.checkout_date,
            price_per_night: h.price_per_night,
            price_usd_per_night: h.price_usd_per_night,
            currency: h.currency,
        }
    }
}
