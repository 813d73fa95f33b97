use crate::aggregate::build_series;
use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::{
    AccountLinkRequest, AdviceRequest, AdviceResponse, AnalyticsSummary, BudgetAddRequest,
    ChartSeries, ChatChoice, ChatCompletion, ChatMessage, ChatRequest, ChoiceMessage, Credentials,
    EntryRequest, GoalCreateRequest, GraphQuery, Ledger, LedgerEntry, LedgerResponse,
    MessageResponse, PortfolioAddRequest, Profile, Sender, ThemeBody, TokenResponse, UserAccount,
};
use crate::state::AppState;
use crate::storage::{self, CHAT_HISTORY_KEY, EXPENSES_KEY, INCOMES_KEY, THEME_KEY};
use crate::ui;
use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Html;
use chrono::Utc;

// ---- Pages -----------------------------------------------------------------

pub async fn page_home(State(state): State<AppState>) -> Html<String> {
    Html(ui::render_home(&stored_theme(&state).await))
}

pub async fn page_login() -> Html<&'static str> {
    Html(ui::LOGIN_HTML)
}

pub async fn page_profile() -> Html<&'static str> {
    Html(ui::PROFILE_HTML)
}

pub async fn page_budget() -> Html<&'static str> {
    Html(ui::BUDGET_HTML)
}

// ---- Auth ------------------------------------------------------------------

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<Credentials>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let email = body.email.trim().to_lowercase();
    if email.is_empty() || body.password.is_empty() {
        return Err(AppError::bad_request("email and password are required"));
    }

    let mut users = state.users.lock().await;
    if users.iter().any(|user| user.email == email) {
        return Err(AppError::bad_request("User already exists"));
    }

    let password_hash = state.auth.hash_password(&body.password)?;
    users.push(UserAccount {
        email,
        password_hash,
        profile: None,
    });

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User created successfully",
        }),
    ))
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<Credentials>,
) -> Result<Json<TokenResponse>, AppError> {
    let email = body.email.trim().to_lowercase();
    let users = state.users.lock().await;

    // Unknown email and wrong password produce the same response.
    let valid = users
        .iter()
        .find(|user| user.email == email)
        .is_some_and(|user| state.auth.verify_password(&body.password, &user.password_hash));
    if !valid {
        return Err(AppError::bad_request("Invalid credentials"));
    }

    let token = state.auth.issue_token(&email)?;
    Ok(Json(TokenResponse { token }))
}

pub async fn profile_update(
    State(state): State<AppState>,
    user: AuthUser,
    Json(body): Json<Profile>,
) -> Result<Json<MessageResponse>, AppError> {
    let mut users = state.users.lock().await;
    let account = users
        .iter_mut()
        .find(|candidate| candidate.email == user.email)
        .ok_or_else(|| AppError::not_found("User not found"))?;
    account.profile = Some(body);

    Ok(Json(MessageResponse {
        message: "Profile updated successfully",
    }))
}

// ---- Stubbed feature endpoints ---------------------------------------------
// These accept and validate their payload shape but do not persist anything.

pub async fn budget_add(
    _user: AuthUser,
    Json(_body): Json<BudgetAddRequest>,
) -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Transaction added successfully",
    })
}

pub async fn portfolio_add(
    _user: AuthUser,
    Json(_body): Json<PortfolioAddRequest>,
) -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Investment added successfully",
    })
}

pub async fn goals_create(
    _user: AuthUser,
    Json(_body): Json<GoalCreateRequest>,
) -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Goal created successfully",
    })
}

pub async fn accounts_link(
    _user: AuthUser,
    Json(_body): Json<AccountLinkRequest>,
) -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Account linked successfully",
    })
}

pub async fn analytics_summary(_user: AuthUser) -> Json<AnalyticsSummary> {
    Json(AnalyticsSummary {
        total_balance: 58200,
        investments: 45750,
        savings: 12450,
        monthly_expenses: 3200,
    })
}

pub async fn ai_advice(_user: AuthUser, Json(_body): Json<AdviceRequest>) -> Json<AdviceResponse> {
    Json(AdviceResponse {
        advice: "AI-generated financial advice would go here",
    })
}

// ---- Ledger ----------------------------------------------------------------

pub async fn get_ledger(State(state): State<AppState>) -> Json<LedgerResponse> {
    let ledger = state.ledger.lock().await;
    Json(ledger_response(&ledger))
}

pub async fn add_income(
    State(state): State<AppState>,
    Json(body): Json<EntryRequest>,
) -> Result<Json<LedgerResponse>, AppError> {
    add_entry(&state, body, Side::Income).await
}

pub async fn add_expense(
    State(state): State<AppState>,
    Json(body): Json<EntryRequest>,
) -> Result<Json<LedgerResponse>, AppError> {
    add_entry(&state, body, Side::Expense).await
}

#[derive(Clone, Copy)]
enum Side {
    Income,
    Expense,
}

async fn add_entry(
    state: &AppState,
    body: EntryRequest,
    side: Side,
) -> Result<Json<LedgerResponse>, AppError> {
    let description = body.description.trim().to_string();
    if description.is_empty() || !body.amount.is_finite() || body.amount <= 0.0 {
        return Err(AppError::bad_request(
            "a description and a positive amount are required",
        ));
    }

    let entry = LedgerEntry {
        description,
        amount: body.amount,
        date: body.date.unwrap_or_else(Utc::now),
    };

    let mut ledger = state.ledger.lock().await;
    match side {
        Side::Income => ledger.incomes.push(entry),
        Side::Expense => ledger.expenses.push(entry),
    }
    let (key, collection) = match side {
        Side::Income => (INCOMES_KEY, &ledger.incomes),
        Side::Expense => (EXPENSES_KEY, &ledger.expenses),
    };
    storage::persist_key(&state.data_dir, key, collection).await?;

    Ok(Json(ledger_response(&ledger)))
}

fn ledger_response(ledger: &Ledger) -> LedgerResponse {
    let total_income: f64 = ledger.incomes.iter().map(|entry| entry.amount).sum();
    let total_expenses: f64 = ledger.expenses.iter().map(|entry| entry.amount).sum();
    LedgerResponse {
        balance: total_income - total_expenses,
        total_income,
        total_expenses,
        incomes: ledger.incomes.clone(),
        expenses: ledger.expenses.clone(),
    }
}

pub async fn graph(
    State(state): State<AppState>,
    Query(query): Query<GraphQuery>,
) -> Json<ChartSeries> {
    let ledger = state.ledger.lock().await;
    Json(build_series(
        query.range,
        query.metric,
        &ledger.incomes,
        &ledger.expenses,
    ))
}

// ---- Chat ------------------------------------------------------------------

pub async fn chat(
    State(state): State<AppState>,
    Json(body): Json<ChatRequest>,
) -> Result<Json<ChatCompletion>, AppError> {
    let message = body.message.trim().to_string();
    if message.is_empty() {
        return Err(AppError::bad_request("message is required"));
    }

    // On gateway exhaustion the history stays untouched.
    let reply = state.advisor.get_response(&message).await?;

    let mut history = state.chat_history.lock().await;
    history.push(ChatMessage {
        sender: Sender::User,
        text: message,
    });
    history.push(ChatMessage {
        sender: Sender::Bot,
        text: reply.clone(),
    });
    storage::persist_key(&state.data_dir, CHAT_HISTORY_KEY, &*history).await?;

    Ok(Json(ChatCompletion {
        choices: vec![ChatChoice {
            message: ChoiceMessage {
                content: Some(reply),
            },
        }],
    }))
}

pub async fn chat_history(State(state): State<AppState>) -> Json<Vec<ChatMessage>> {
    Json(state.chat_history.lock().await.clone())
}

// ---- Theme -----------------------------------------------------------------

pub async fn get_theme(State(state): State<AppState>) -> Json<ThemeBody> {
    Json(ThemeBody {
        theme: stored_theme(&state).await,
    })
}

pub async fn set_theme(
    State(state): State<AppState>,
    Json(body): Json<ThemeBody>,
) -> Result<Json<ThemeBody>, AppError> {
    if body.theme != "dark" && body.theme != "light" {
        return Err(AppError::bad_request("theme must be 'dark' or 'light'"));
    }
    storage::persist_key(&state.data_dir, THEME_KEY, &body.theme).await?;
    Ok(Json(body))
}

async fn stored_theme(state: &AppState) -> String {
    let theme: String = storage::load_key(&state.data_dir, THEME_KEY).await;
    if theme == "light" {
        theme
    } else {
        "dark".to_string()
    }
}
