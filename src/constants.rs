// API constants
pub const HEALTH_PATH: &str = "/api/health";
pub const CHAT_PATH: &str = "/api/chat";
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const NEUTRAL_EMOTION: &str = "neutral";

// UI constants
pub const USER_AVATAR: &str = "👤";
pub const BOT_AVATAR: &str = "🤖";
pub const FALLBACK_ERROR_TEXT: &str = "Sorry, I encountered an error. Please try again.";
pub const WELCOME_TEXT: &str = "Hi! I'm here to chat. How are you feeling today?";
pub const EMOTION_BANNER_SECS: u64 = 5;
pub const MAX_LOG_ENTRIES: usize = 200;
