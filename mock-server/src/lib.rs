//! In-memory fake of the VMS backend.
//!
//! Serves the ESG endpoint plus a few diagnostic routes that reflect what a
//! client actually put on the wire or answer with a chosen status.

#![recursion_limit = "256"]

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, Method, StatusCode},
    response::IntoResponse,
    routing::{any, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::net::TcpListener;

const ESG_PATH: &str = "/VMS/getesgall";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GetEsgAll {
    get_all: bool,
}

/// What `/echo` saw. Header names are lower-cased by the HTTP stack.
#[derive(Debug, Serialize, Deserialize)]
pub struct Echo {
    pub method: String,
    pub headers: BTreeMap<String, String>,
    pub body: Option<String>,
}

type Rows = Arc<Vec<Value>>;

pub fn app() -> Router {
    let rows: Rows = Arc::new(seed_rows());
    Router::new()
        .route(ESG_PATH, post(get_esg_all))
        .route("/echo", any(echo))
        .route("/plain", get(plain))
        .route("/status/{code}", get(status_json))
        .route("/status/{code}/raw", get(status_raw))
        .with_state(rows)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Three assessment rows; the last one is inactive.
fn seed_rows() -> Vec<Value> {
    vec![
        esg_row(1, "V0001", "Acme Metals", "Y"),
        esg_row(2, "V0002", "Blue River Plastics", "Y"),
        esg_row(3, "V0003", "Cobalt Logistics", "N"),
    ]
}

fn esg_row(row_id: i64, vend_no: &str, vend_name: &str, is_active: &str) -> Value {
    json!({
        "rowID": row_id,
        "year": "2024",
        "business_Unit": "BU-North",
        "section": "Procurement",
        "esG_Assessment": "Completed",
        "vend_No": vend_no,
        "vend_Name": vend_name,
        "vend_Email": null,
        "spend_Volumn": 1000.0 * row_id as f64,
        "category": "Raw Material",
        "sub_Category": null,
        "isNewSupplier": "N",
        "supplier_Location": "Domestic",
        "signOfConduct": "Y",
        "high_Volumn": "N",
        "critical_Components": "N",
        "oem": "N",
        "critical_Supplier": "N",
        "critical_Suppliers": "Tier 2",
        "you_Critical_Supplier": null,
        "critial_NonTier": null,
        "audit_Critical": null,
        "number_Of_Critical": null,
        "audit_Critical_3Year": null,
        "number_Of_Critical_3Year": null,
        "envRisk_Serverity": "2",
        "envRisk_Likelihood": "2",
        "envRisk_Level": "Low",
        "social_Severity": "1",
        "social_Likelihood": "2",
        "social_isRisk": "N",
        "social_isRisk_Indicator": null,
        "social_Level": "Low",
        "business_Risk_Severity": "3",
        "business_Risk_Likelihood": "2",
        "business_Risk_Level": "Medium",
        "esG_Risk_HighPotential": "N",
        "esG_Risk_Priority_Opt1": "P3",
        "esG_Risk_Priority_Opt2": null,
        "audit_Every_Year": null,
        "audit_3Year": "Y",
        "has_Corrective": null,
        "has_ESG": "Y",
        "isDuplicate": null,
        "imported_Date": null,
        "imported_By": null,
        "createAt": "2024-01-15T08:00:00",
        "createBy": "seed",
        "updateAt": "2024-01-15T08:00:00",
        "updateBy": null,
        "auditPlanNo": null,
        "isActive": is_active
    })
}

fn has_bearer_token(headers: &HeaderMap) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .is_some_and(|token| !token.is_empty())
}

async fn get_esg_all(
    State(rows): State<Rows>,
    headers: HeaderMap,
    Json(input): Json<GetEsgAll>,
) -> (StatusCode, Json<Value>) {
    if !has_bearer_token(&headers) {
        tracing::warn!("rejecting ESG request without bearer token");
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "missing bearer token" })),
        );
    }

    let selected: Vec<Value> = rows
        .iter()
        .filter(|row| input.get_all || row["isActive"] == "Y")
        .cloned()
        .collect();
    tracing::debug!(get_all = input.get_all, rows = selected.len(), "serving ESG rows");

    (
        StatusCode::OK,
        Json(json!({
            "statusCode": "200",
            "message": "Success",
            "totalSize": selected.len(),
            "esgDatas": selected,
        })),
    )
}

async fn echo(method: Method, headers: HeaderMap, body: String) -> Json<Echo> {
    let headers = headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|value| (name.as_str().to_string(), value.to_string()))
        })
        .collect();
    Json(Echo {
        method: method.to_string(),
        headers,
        body: (!body.is_empty()).then_some(body),
    })
}

async fn plain() -> &'static str {
    "pong"
}

async fn status_json(Path(code): Path<u16>) -> Result<(StatusCode, Json<Value>), StatusCode> {
    let status = StatusCode::from_u16(code).map_err(|_| StatusCode::BAD_REQUEST)?;
    let message = status
        .canonical_reason()
        .unwrap_or("unknown status")
        .to_lowercase();
    Ok((status, Json(json!({ "message": message }))))
}

async fn status_raw(Path(code): Path<u16>) -> Result<impl IntoResponse, StatusCode> {
    let status = StatusCode::from_u16(code).map_err(|_| StatusCode::BAD_REQUEST)?;
    Ok((
        status,
        [(header::CONTENT_TYPE, "text/html")],
        "<html><body>upstream exploded</body></html>",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_rows_have_one_inactive() {
        let rows = seed_rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows.iter().filter(|r| r["isActive"] == "N").count(), 1);
    }

    #[test]
    fn get_esg_all_reads_camel_case() {
        let input: GetEsgAll = serde_json::from_str(r#"{"getAll":true}"#).unwrap();
        assert!(input.get_all);
        assert!(serde_json::from_str::<GetEsgAll>(r#"{"get_all":true}"#).is_err());
    }

    #[test]
    fn bearer_token_must_be_present_and_non_empty() {
        let mut headers = HeaderMap::new();
        assert!(!has_bearer_token(&headers));
        headers.insert(header::AUTHORIZATION, "Bearer ".parse().unwrap());
        assert!(!has_bearer_token(&headers));
        headers.insert(header::AUTHORIZATION, "Basic abc".parse().unwrap());
        assert!(!has_bearer_token(&headers));
        headers.insert(header::AUTHORIZATION, "Bearer abc".parse().unwrap());
        assert!(has_bearer_token(&headers));
    }
}
