// Webhook
pub const DEFAULT_WEBHOOK_URL: &str =
    "https://codewarcollege.app.n8n.cloud/webhook-test/404757f2-ee41-43bd-8692-d7051889f1f8";

/// Number of characters of a non-JSON body quoted back to the user.
pub const RAW_EXCERPT_CHARS: usize = 100;

// Reply messages
pub const EMPTY_BODY_MESSAGE: &str = "⚠️ Setup Error: Webhook sent an empty response body (200 OK). \
Configure the webhook's final response step to return JSON data.";
pub const MISSING_ANSWER_MESSAGE: &str = "❌ Data Error: Response received but key 'answer' is missing. \
Check the webhook's output mapping.";
pub const NOT_JSON_PREFIX: &str =
    "❌ JSON Parse Error: Expected JSON, but received raw data starting with:";
pub const TRANSPORT_ERROR_PREFIX: &str =
    "🛑 NETWORK/HTTP ERROR: Failed to communicate with the webhook. Details:";
pub const TRANSPORT_ERROR_SUFFIX: &str = "Check the webhook URL and service status.";

// UI
pub const APP_TITLE: &str = "webhook-chat";
pub const INITIAL_PROMPT: &str = "Ask anything. Your question is sent to the webhook and the answer shows up here.";
pub const USER_ICON: &str = "U";
pub const AI_ICON: &str = "AI";
pub const CONSOLE_CAPACITY: usize = 200;
pub const TICK_RATE_MS: u64 = 250;
pub const POLL_RATE_MS: u64 = 50;
