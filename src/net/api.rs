//! Domain REST surface: one module per resource, every call a thin
//! pass-through over [`crate::net::http`]. Nothing here touches tokens; the
//! HTTP client owns the whole credential protocol.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::net::http::{self, ApiError, ApiRequest};
use crate::net::types::{
    ArtisanProduct, BookingTrend, CustomerAnalytics, DashboardStats, FoodExperience, Hotel,
    RevenuePoint, Ticket, TransportService, TravelEvent, TravelPackage, User,
};

/// Build a `?k=v&...` query suffix; empty for no params.
pub fn query_string(params: &[(&str, &str)]) -> String {
    if params.is_empty() {
        return String::new();
    }
    let joined = params
        .iter()
        .map(|(key, value)| {
            format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
        })
        .collect::<Vec<_>>()
        .join("&");
    format!("?{joined}")
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|err| ApiError::Decode(err.to_string()))
}

/// Decode a list endpoint. The backend answers with either a bare array or a
/// paged wrapper holding the array under `content` or `items`.
fn decode_list<T: DeserializeOwned>(value: Value) -> Result<Vec<T>, ApiError> {
    let items = match value {
        Value::Array(items) => Value::Array(items),
        Value::Object(mut map) => map
            .remove("content")
            .or_else(|| map.remove("items"))
            .unwrap_or(Value::Array(Vec::new())),
        _ => Value::Array(Vec::new()),
    };
    decode(items)
}

/// Generate the standard list/get/create/update/delete surface for one
/// resource.
macro_rules! crud_api {
    ($base:literal, $record:ty) => {
        pub async fn list(params: &[(&str, &str)]) -> Result<Vec<$record>, ApiError> {
            let endpoint = format!("{}{}", $base, query_string(params));
            decode_list(http::request(ApiRequest::get(endpoint)).await?)
        }

        pub async fn get(id: &str) -> Result<$record, ApiError> {
            decode(http::request(ApiRequest::get(format!("{}/{id}", $base))).await?)
        }

        pub async fn create(body: Value) -> Result<Value, ApiError> {
            http::request(ApiRequest::post($base, body)).await
        }

        pub async fn update(id: &str, body: Value) -> Result<Value, ApiError> {
            http::request(ApiRequest::put(format!("{}/{id}", $base), body)).await
        }

        pub async fn delete(id: &str) -> Result<(), ApiError> {
            http::request(ApiRequest::delete(format!("{}/{id}", $base))).await.map(|_| ())
        }
    };
}

pub mod hotels {
    use super::*;

    crud_api!("/hotels", Hotel);

    pub async fn add_review(id: &str, rating: u8, comment: Option<&str>) -> Result<Value, ApiError> {
        let body = serde_json::json!({ "rating": rating, "comment": comment });
        http::request(ApiRequest::post(format!("/hotels/{id}/reviews"), body)).await
    }
}

pub mod events {
    use super::*;

    crud_api!("/events", TravelEvent);

    pub async fn attendees(id: &str) -> Result<Vec<User>, ApiError> {
        decode_list(http::request(ApiRequest::get(format!("/events/{id}/attendees"))).await?)
    }

    pub async fn purchase_tickets(id: &str, ticket_id: &str, quantity: u32) -> Result<Value, ApiError> {
        let body = serde_json::json!({ "ticketId": ticket_id, "quantity": quantity });
        http::request(ApiRequest::post(format!("/events/{id}/tickets/purchase"), body)).await
    }
}

pub mod packages {
    use super::*;

    crud_api!("/packages", TravelPackage);

    pub async fn book(id: &str) -> Result<Value, ApiError> {
        http::request(ApiRequest::post_empty(format!("/packages/{id}/book"))).await
    }
}

pub mod transport {
    use super::*;

    crud_api!("/transport", TransportService);
}

pub mod artisan {
    use super::*;

    crud_api!("/artisan", ArtisanProduct);
}

pub mod food {
    use super::*;

    crud_api!("/food", FoodExperience);
}

pub mod tickets {
    use super::*;

    crud_api!("/tickets", Ticket);
}

pub mod statistics {
    use super::*;

    pub async fn dashboard(params: &[(&str, &str)]) -> Result<DashboardStats, ApiError> {
        let endpoint = format!("/statistics/dashboard{}", query_string(params));
        decode(http::request(ApiRequest::get(endpoint)).await?)
    }

    pub async fn revenue(params: &[(&str, &str)]) -> Result<Vec<RevenuePoint>, ApiError> {
        let endpoint = format!("/statistics/revenue{}", query_string(params));
        decode_list(http::request(ApiRequest::get(endpoint)).await?)
    }

    pub async fn bookings(params: &[(&str, &str)]) -> Result<Vec<BookingTrend>, ApiError> {
        let endpoint = format!("/statistics/bookings{}", query_string(params));
        decode_list(http::request(ApiRequest::get(endpoint)).await?)
    }

    pub async fn popular_items(params: &[(&str, &str)]) -> Result<Value, ApiError> {
        let endpoint = format!("/statistics/popular-items{}", query_string(params));
        http::request(ApiRequest::get(endpoint)).await
    }

    pub async fn customer_analytics() -> Result<CustomerAnalytics, ApiError> {
        decode(http::request(ApiRequest::get("/statistics/customer-analytics")).await?)
    }

    pub async fn seller_performance(params: &[(&str, &str)]) -> Result<Value, ApiError> {
        let endpoint = format!("/statistics/seller-performance{}", query_string(params));
        http::request(ApiRequest::get(endpoint)).await
    }
}

pub mod users {
    use super::*;

    pub async fn list(params: &[(&str, &str)]) -> Result<Vec<User>, ApiError> {
        decode_list(http::request(ApiRequest::get(format!("/users{}", query_string(params)))).await?)
    }

    pub async fn update_status(id: &str, is_active: bool) -> Result<Value, ApiError> {
        let body = serde_json::json!({ "isActive": is_active });
        http::request(ApiRequest::put(format!("/users/{id}/status"), body)).await
    }

    pub async fn profile() -> Result<User, ApiError> {
        decode(http::request(ApiRequest::get("/users/profile")).await?)
    }

    /// Profile updates round-trip the whole record; the caller replaces the
    /// context user wholesale with the result.
    pub async fn update_profile(body: Value) -> Result<User, ApiError> {
        decode(http::request(ApiRequest::put("/users/profile", body)).await?)
    }
}
