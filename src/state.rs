use crate::auth::AuthService;
use crate::config::AppConfig;
use crate::gateway::AdvisorClient;
use crate::models::{ChatMessage, Ledger, UserAccount};
use crate::storage;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_dir: PathBuf,
    pub ledger: Arc<Mutex<Ledger>>,
    pub chat_history: Arc<Mutex<Vec<ChatMessage>>>,
    // In-memory only; a restart loses all accounts.
    pub users: Arc<Mutex<Vec<UserAccount>>>,
    pub auth: Arc<AuthService>,
    pub advisor: AdvisorClient,
}

impl AppState {
    /// Load the persisted ledger and chat history and wire up the services.
    pub async fn init(config: &AppConfig) -> Self {
        let ledger = Ledger {
            incomes: storage::load_key(&config.data_dir, storage::INCOMES_KEY).await,
            expenses: storage::load_key(&config.data_dir, storage::EXPENSES_KEY).await,
        };
        let chat_history = storage::load_key(&config.data_dir, storage::CHAT_HISTORY_KEY).await;

        Self {
            data_dir: config.data_dir.clone(),
            ledger: Arc::new(Mutex::new(ledger)),
            chat_history: Arc::new(Mutex::new(chat_history)),
            users: Arc::new(Mutex::new(Vec::new())),
            auth: Arc::new(AuthService::new(&config.jwt_secret)),
            advisor: AdvisorClient::new(config.advisor_url.clone()),
        }
    }
}
