use super::*;

// =============================================================
// User record
// =============================================================

#[test]
fn full_user_record_decodes_from_camel_case() {
    let user: User = serde_json::from_str(
        r#"{
            "id": "u-1",
            "name": "Yasmina",
            "email": "a@b.com",
            "role": "ROLE_SELLER",
            "phone": "+212600000000",
            "businessInfo": {
                "companyName": "Atlas Tours SARL",
                "license": "L-1234",
                "specialties": ["desert", "hotels"]
            },
            "emailVerified": true,
            "isActive": true,
            "lastLogin": "2025-06-01T10:00:00Z"
        }"#,
    )
    .unwrap();

    assert_eq!(user.role, UserRole::Seller);
    assert!(user.email_verified);
    let business = user.business_info.unwrap();
    assert_eq!(business.company_name.as_deref(), Some("Atlas Tours SARL"));
    assert_eq!(business.specialties.unwrap().len(), 2);
}

#[test]
fn minimal_user_record_decodes_with_defaults() {
    let user: User = serde_json::from_str(
        r#"{"id":"u-1","name":"Yasmina","email":"a@b.com","role":"ROLE_ADMIN"}"#,
    )
    .unwrap();

    assert_eq!(user.role, UserRole::Admin);
    assert!(user.avatar.is_none());
    assert!(user.business_info.is_none());
    assert!(!user.email_verified);
    assert!(!user.is_active);
}

#[test]
fn unknown_role_is_a_decode_error() {
    let result = serde_json::from_str::<User>(
        r#"{"id":"u-1","name":"Yasmina","email":"a@b.com","role":"ROLE_WIZARD"}"#,
    );
    assert!(result.is_err());
}

// =============================================================
// Session payload
// =============================================================

#[test]
fn session_payload_tolerates_missing_fields() {
    let payload: SessionPayload = serde_json::from_str(r#"{"accessToken":"AT1"}"#).unwrap();
    assert_eq!(payload.access_token.as_deref(), Some("AT1"));
    assert!(payload.refresh_token.is_none());
    assert!(payload.user.is_none());
}

// =============================================================
// Domain records
// =============================================================

#[test]
fn event_status_uses_screaming_snake_case() {
    let event: TravelEvent = serde_json::from_str(
        r#"{"id":"e-1","title":"Festival Gnaoua","status":"PUBLISHED","ticketsSold":120}"#,
    )
    .unwrap();
    assert_eq!(event.status, EventStatus::Published);
    assert_eq!(event.tickets_sold, Some(120));
}

#[test]
fn revenue_and_booking_buckets_decode_from_camel_case() {
    let point: RevenuePoint =
        serde_json::from_str(r#"{"period":"2026-07","amount":18450.5}"#).unwrap();
    assert_eq!(point.period, "2026-07");
    assert!((point.amount - 18450.5).abs() < f64::EPSILON);

    let trend: BookingTrend = serde_json::from_str(r#"{"period":"2026-07","count":42}"#).unwrap();
    assert_eq!(trend.count, 42);
}

#[test]
fn customer_analytics_decodes_country_counts() {
    let analytics: CustomerAnalytics =
        serde_json::from_str(r#"{"customersByCountry":{"FR":12,"MA":30}}"#).unwrap();
    assert_eq!(analytics.customers_by_country.get("MA"), Some(&30));

    let empty: CustomerAnalytics = serde_json::from_str("{}").unwrap();
    assert!(empty.customers_by_country.is_empty());
}

#[test]
fn transport_type_round_trips() {
    let service: TransportService = serde_json::from_str(
        r#"{"id":"t-1","name":"CMN navette","transportType":"AIRPORT_TRANSFER"}"#,
    )
    .unwrap();
    assert_eq!(service.transport_type, TransportType::AirportTransfer);

    let encoded = serde_json::to_value(&service).unwrap();
    assert_eq!(encoded["transportType"], "AIRPORT_TRANSFER");
}
