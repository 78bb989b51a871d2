//! Vendor-management (VMS) ESG assessment endpoint.
//!
//! DTOs mirror the backend's wire names through serde renames. Nullable
//! columns are `Option<String>`; the rest are required.

use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::transport::Transport;

pub const GET_ESG_ALL_PATH: &str = "/VMS/getesgall";

/// One vendor ESG assessment row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EsgData {
    #[serde(rename = "rowID")]
    pub row_id: i64,
    pub year: String,
    #[serde(rename = "business_Unit")]
    pub business_unit: String,
    pub section: String,
    #[serde(rename = "esG_Assessment")]
    pub esg_assessment: String,
    #[serde(rename = "vend_No")]
    pub vend_no: String,
    #[serde(rename = "vend_Name")]
    pub vend_name: String,
    #[serde(rename = "vend_Email")]
    pub vend_email: Option<String>,
    #[serde(rename = "spend_Volumn")]
    pub spend_volume: f64,
    pub category: String,
    #[serde(rename = "sub_Category")]
    pub sub_category: Option<String>,
    #[serde(rename = "isNewSupplier")]
    pub is_new_supplier: String,
    #[serde(rename = "supplier_Location")]
    pub supplier_location: String,
    #[serde(rename = "signOfConduct")]
    pub sign_of_conduct: String,
    #[serde(rename = "high_Volumn")]
    pub high_volume: String,
    #[serde(rename = "critical_Components")]
    pub critical_components: String,
    pub oem: String,
    #[serde(rename = "critical_Supplier")]
    pub critical_supplier: String,
    #[serde(rename = "critical_Suppliers")]
    pub critical_suppliers: String,
    #[serde(rename = "you_Critical_Supplier")]
    pub you_critical_supplier: Option<String>,
    #[serde(rename = "critial_NonTier")]
    pub critical_non_tier: Option<String>,
    #[serde(rename = "audit_Critical")]
    pub audit_critical: Option<String>,
    #[serde(rename = "number_Of_Critical")]
    pub number_of_critical: Option<String>,
    #[serde(rename = "audit_Critical_3Year")]
    pub audit_critical_3year: Option<String>,
    #[serde(rename = "number_Of_Critical_3Year")]
    pub number_of_critical_3year: Option<String>,
    #[serde(rename = "envRisk_Serverity")]
    pub env_risk_severity: String,
    #[serde(rename = "envRisk_Likelihood")]
    pub env_risk_likelihood: String,
    #[serde(rename = "envRisk_Level")]
    pub env_risk_level: String,
    #[serde(rename = "social_Severity")]
    pub social_severity: String,
    #[serde(rename = "social_Likelihood")]
    pub social_likelihood: String,
    #[serde(rename = "social_isRisk")]
    pub social_is_risk: String,
    #[serde(rename = "social_isRisk_Indicator")]
    pub social_is_risk_indicator: Option<String>,
    #[serde(rename = "social_Level")]
    pub social_level: String,
    #[serde(rename = "business_Risk_Severity")]
    pub business_risk_severity: String,
    #[serde(rename = "business_Risk_Likelihood")]
    pub business_risk_likelihood: String,
    #[serde(rename = "business_Risk_Level")]
    pub business_risk_level: String,
    #[serde(rename = "esG_Risk_HighPotential")]
    pub esg_risk_high_potential: String,
    #[serde(rename = "esG_Risk_Priority_Opt1")]
    pub esg_risk_priority_opt1: String,
    #[serde(rename = "esG_Risk_Priority_Opt2")]
    pub esg_risk_priority_opt2: Option<String>,
    #[serde(rename = "audit_Every_Year")]
    pub audit_every_year: Option<String>,
    #[serde(rename = "audit_3Year")]
    pub audit_3year: Option<String>,
    #[serde(rename = "has_Corrective")]
    pub has_corrective: Option<String>,
    #[serde(rename = "has_ESG")]
    pub has_esg: Option<String>,
    #[serde(rename = "isDuplicate")]
    pub is_duplicate: Option<String>,
    #[serde(rename = "imported_Date")]
    pub imported_date: Option<String>,
    #[serde(rename = "imported_By")]
    pub imported_by: Option<String>,
    #[serde(rename = "createAt")]
    pub create_at: String,
    #[serde(rename = "createBy")]
    pub create_by: Option<String>,
    #[serde(rename = "updateAt")]
    pub update_at: String,
    #[serde(rename = "updateBy")]
    pub update_by: Option<String>,
    #[serde(rename = "auditPlanNo")]
    pub audit_plan_no: Option<String>,
    #[serde(rename = "isActive")]
    pub is_active: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GetEsgAllRequest {
    pub get_all: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GetEsgAllResponse {
    pub status_code: String,
    pub message: String,
    pub total_size: u64,
    pub esg_datas: Vec<EsgData>,
}

/// Fetch ESG assessment rows. `get_all = false` asks the backend for its
/// default (active-only) selection.
pub async fn get_esg_all<T: Transport>(
    client: &ApiClient<T>,
    get_all: bool,
) -> Result<GetEsgAllResponse, ApiError> {
    let payload = GetEsgAllRequest { get_all };
    client
        .post_data(GET_ESG_ALL_PATH, &payload, &[])
        .await
        .inspect_err(|err| tracing::error!(error = %err, "fetching ESG data failed"))
}
