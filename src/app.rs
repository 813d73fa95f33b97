use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::page_home))
        .route("/login", get(handlers::page_login))
        .route("/profile", get(handlers::page_profile))
        .route("/budget", get(handlers::page_budget))
        .route("/api/register", post(handlers::register))
        .route("/api/login", post(handlers::login))
        .route("/api/profile/update", post(handlers::profile_update))
        .route("/api/budget/add", post(handlers::budget_add))
        .route("/api/portfolio/add", post(handlers::portfolio_add))
        .route("/api/goals/create", post(handlers::goals_create))
        .route("/api/accounts/link", post(handlers::accounts_link))
        .route("/api/analytics/summary", get(handlers::analytics_summary))
        .route("/api/ai/advice", post(handlers::ai_advice))
        .route("/api/chat", post(handlers::chat))
        .route("/api/chat/history", get(handlers::chat_history))
        .route("/api/ledger", get(handlers::get_ledger))
        .route("/api/ledger/income", post(handlers::add_income))
        .route("/api/ledger/expense", post(handlers::add_expense))
        .route("/api/graph", get(handlers::graph))
        .route("/api/theme", get(handlers::get_theme).post(handlers::set_theme))
        .with_state(state)
}
