use crate::error::MonoError;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Deserialize)]
pub(crate) struct TokenExchange {
    pub(crate) id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InformationResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub meta: InformationMeta,
    #[serde(default, deserialize_with = "null_as_default")]
    pub account: Account,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InformationMeta {
    pub data_status: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Account {
    #[serde(rename = "_id", default, deserialize_with = "null_as_default")]
    pub id: String,
    pub name: Option<String>,
    pub currency: Option<String>,
    #[serde(rename = "type")]
    pub account_type: Option<String>,
    #[serde(rename = "accountNumber")]
    pub account_number: Option<String>,
    pub balance: Option<Decimal>,
    pub bvn: Option<String>,
    pub institution: Option<AccountInstitution>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AccountInstitution {
    pub name: Option<String>,
    #[serde(rename = "bankCode")]
    pub bank_code: Option<String>,
    #[serde(rename = "type")]
    pub institution_type: Option<String>,
}

/// Output format accepted by the statement endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementOutput {
    Json,
    Pdf,
}

impl StatementOutput {
    pub fn as_str(self) -> &'static str {
        match self {
            StatementOutput::Json => "json",
            StatementOutput::Pdf => "pdf",
        }
    }
}

impl fmt::Display for StatementOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatementOutput {
    type Err = MonoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(StatementOutput::Json),
            "pdf" => Ok(StatementOutput::Pdf),
            _ => Err(MonoError::InvalidParameter("only json or pdf output supported")),
        }
    }
}

/// A statement comes back either as rows of JSON or as a PDF build job,
/// depending on the requested [`StatementOutput`].
#[derive(Debug, Clone)]
pub enum StatementResponse {
    Json(StatementData),
    Pdf(StatementJob),
}

impl StatementResponse {
    pub fn as_json(&self) -> Option<&StatementData> {
        match self {
            StatementResponse::Json(data) => Some(data),
            StatementResponse::Pdf(_) => None,
        }
    }

    pub fn as_pdf(&self) -> Option<&StatementJob> {
        match self {
            StatementResponse::Pdf(job) => Some(job),
            StatementResponse::Json(_) => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatementData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub meta: StatementMeta,
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<StatementEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatementMeta {
    #[serde(default, deserialize_with = "null_as_default")]
    pub count: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatementEntry {
    #[serde(rename = "_id", default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub entry_type: String,
    #[serde(default, deserialize_with = "deserialize_timestamp_opt")]
    pub date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub narration: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub amount: Decimal,
    #[serde(default, deserialize_with = "null_as_default")]
    pub balance: Decimal,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatementJob {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: StatementJobStatus,
    pub path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum StatementJobStatus {
    Building,
    Complete,
    Other(String),
}

impl Default for StatementJobStatus {
    fn default() -> Self {
        StatementJobStatus::Other(String::new())
    }
}

impl StatementJobStatus {
    pub fn is_complete(&self) -> bool {
        matches!(self, StatementJobStatus::Complete)
    }
}

impl From<String> for StatementJobStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "BUILDING" => StatementJobStatus::Building,
            "COMPLETE" => StatementJobStatus::Complete,
            _ => StatementJobStatus::Other(raw),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TransactionsResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub paging: Paging,
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<Transaction>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Paging {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub page: u32,
    pub previous: Option<String>,
    pub next: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Transaction {
    #[serde(rename = "_id", default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub amount: Decimal,
    #[serde(default, deserialize_with = "deserialize_timestamp_opt")]
    pub date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub narration: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub transaction_type: String,
    pub category: Option<String>,
}

/// Credit or debit totals, broken down per period.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionsByType {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: Decimal,
    #[serde(default, deserialize_with = "null_as_default")]
    pub history: Vec<PeriodTotal>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PeriodTotal {
    #[serde(default, deserialize_with = "null_as_default")]
    pub amount: Decimal,
    #[serde(default, deserialize_with = "null_as_default")]
    pub period: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IncomeResponse {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub income_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub amount: Decimal,
    pub employer: Option<String>,
    pub confidence: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityResponse {
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<String>,
    pub phone_number1: Option<String>,
    pub phone_number2: Option<String>,
    pub registration_date: Option<String>,
    pub email: Option<String>,
    pub gender: Option<String>,
    pub level_of_account: Option<String>,
    pub lga_of_origin: Option<String>,
    pub lga_of_residence: Option<String>,
    pub marital_status: Option<String>,
    pub nin: Option<String>,
    pub nationality: Option<String>,
    pub residential_address: Option<String>,
    pub state_of_origin: Option<String>,
    pub state_of_residence: Option<String>,
    pub title: Option<String>,
    pub watch_listed: Option<String>,
    pub bvn: Option<String>,
    #[serde(alias = "photo_id")]
    pub photo_id: Option<String>,
}

#[derive(Debug, Clone)]
pub struct InstitutionsResponse {
    pub institutions: Vec<Institution>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Institution {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    pub icon: Option<String>,
    pub website: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub coverage: Coverage,
    #[serde(default, deserialize_with = "null_as_default")]
    pub products: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Coverage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub personal: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub business: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub countries: Vec<String>,
}

// Absent and null fields both decode to the type's zero value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_timestamp_opt<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => parse_timestamp(&s)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid date value: {s}"))),
    }
}

/// Accepts full RFC 3339 timestamps as well as bare `YYYY-MM-DD` dates,
/// which are taken as midnight UTC.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    let day = NaiveDate::parse_from_str(raw.get(0..10)?, "%Y-%m-%d").ok()?;
    Some(day.and_hms_opt(0, 0, 0)?.and_utc())
}
