use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One income or expense record. Entries are append-only; they are never
/// edited after creation and only removed by replacing the whole collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub description: String,
    pub amount: f64,
    pub date: DateTime<Utc>,
}

/// The two disjoint, insertion-ordered ledger collections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ledger {
    pub incomes: Vec<LedgerEntry>,
    pub expenses: Vec<LedgerEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub full_name: String,
    pub phone: String,
    pub location: String,
}

/// In-memory account record. Lives only for the lifetime of the process;
/// a restart loses all accounts.
#[derive(Debug, Clone)]
pub struct UserAccount {
    pub email: String,
    pub password_hash: String,
    pub profile: Option<Profile>,
}

#[derive(Debug, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct EntryRequest {
    pub description: String,
    pub amount: f64,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub struct LedgerResponse {
    pub incomes: Vec<LedgerEntry>,
    pub expenses: Vec<LedgerEntry>,
    pub total_income: f64,
    pub total_expenses: f64,
    pub balance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Range {
    Day,
    Week,
    Month,
    Year,
}

impl Default for Range {
    fn default() -> Self {
        Range::Day
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Balance,
    Income,
    Expenses,
}

impl Default for Metric {
    fn default() -> Self {
        Metric::Balance
    }
}

#[derive(Debug, Deserialize)]
pub struct GraphQuery {
    #[serde(default)]
    pub range: Range,
    #[serde(default)]
    pub metric: Metric,
}

/// Chart-ready series: one label and one value per bucket, in bucket order.
#[derive(Debug, Serialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    // Accepted for wire compatibility; the fixed persona framing is always applied.
    #[serde(default)]
    pub context: Option<String>,
}

/// Legacy `choices[0].message.content` wire shape. Kept as a fixed
/// compatibility contract on both sides of the proxy.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ChatCompletion {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ChatChoice {
    #[serde(default)]
    pub message: ChoiceMessage,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub total_balance: u32,
    pub investments: u32,
    pub savings: u32,
    pub monthly_expenses: u32,
}

#[derive(Debug, Deserialize)]
pub struct AdviceRequest {
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct AdviceResponse {
    pub advice: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct BudgetAddRequest {
    pub category: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: String,
    pub date: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioAddRequest {
    pub stock_symbol: String,
    pub shares: f64,
    pub purchase_price: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalCreateRequest {
    pub name: String,
    pub target_amount: f64,
    pub deadline: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountLinkRequest {
    pub bank_name: String,
    pub account_number: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ThemeBody {
    pub theme: String,
}
