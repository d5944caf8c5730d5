// Route path constants - single source of truth for all core API paths.
// `{n}` marks the nth positional placeholder.

// Identity
pub const USER_PROFILE: &str = "/api/v1/users/profile/";
pub const TERMINAL_REGISTER: &str = "/api/v1/terminal/terminal-registrations/";
pub const TERMINAL_CONFIG: &str = "/api/v1/terminal/terminals/config/";
pub const TERMINAL_HEART_BEAT: &str = "/api/v1/terminal/terminals/status/";

// Authentication
pub const TOKEN_ASSET: &str = "/api/v1/authentication/connection-token/{0}/";
pub const USER_TOKEN_AUTH: &str = "/api/v1/authentication/tokens/";
pub const USER_CONFIRM_AUTH: &str = "/api/v1/authentication/login-confirm-ticket/status/";
pub const AUTH_MFA_SELECT: &str = "/api/v1/authentication/mfa/select/";
pub const CONNECT_TOKEN_INFO: &str = "/api/v1/authentication/connection-token/secret/";
pub const SUPER_CONNECT_TOKEN_INFO: &str = "/api/v1/authentication/super-connection-token/";

// Sessions
pub const SESSION_LIST: &str = "/api/v1/terminal/sessions/";
pub const SESSION_DETAIL: &str = "/api/v1/terminal/sessions/{0}/";
pub const SESSION_REPLAY: &str = "/api/v1/terminal/sessions/{0}/replay/";
pub const SESSION_COMMAND: &str = "/api/v1/terminal/commands/";
pub const FINISH_TASK: &str = "/api/v1/terminal/tasks/{0}/";
pub const JOIN_ROOM_VALIDATE: &str = "/api/v1/terminal/sessions/join/validate/";

// Permissions
pub const USER_PERMS_NODES_LIST: &str = "/api/v1/perms/users/{0}/nodes/";
pub const USER_PERMS_NODE_ASSETS_LIST: &str = "/api/v1/perms/users/{0}/nodes/{1}/assets/";
pub const USER_PERMS_NODE_TREE_WITH_ASSET: &str =
    "/api/v1/perms/users/nodes/children-with-assets/tree/";
pub const USER_PERMS_ASSET_ACCOUNTS: &str = "/api/v1/perms/users/{0}/assets/{1}/accounts/";
pub const USER_PERMS_ASSETS: &str = "/api/v1/perms/users/{0}/assets/";

// Resources
pub const USER_LIST: &str = "/api/v1/users/users/";
pub const USER_DETAIL: &str = "/api/v1/users/users/{0}/";
pub const ASSET_DETAIL: &str = "/api/v1/assets/assets/{0}/";
pub const ASSET_PLATFORM: &str = "/api/v1/assets/assets/{0}/platform/";
pub const SYSTEM_USER_CMD_FILTER_RULES_LIST: &str =
    "/api/v1/assets/system-users/{0}/cmd-filter-rules/";
pub const COMMAND_FILTER_RULES_LIST: &str = "/api/v1/assets/cmd-filter-rules/";
pub const DOMAIN_DETAIL_WITH_GATEWAYS: &str = "/api/v1/assets/domains/{0}/?gateway=1";
pub const ACCOUNT_SECRET: &str = "/api/v1/assets/account-secrets/{0}/";

// Auditing
pub const FTP_LOG_LIST: &str = "/api/v1/audits/ftp-logs/";
pub const NOTIFICATION_COMMAND: &str = "/api/v1/terminal/commands/insecure-command/";
pub const COMMAND_CONFIRM: &str = "/api/v1/assets/cmd-filters/command-confirm/";

// Session sharing
pub const SHARE_CREATE: &str = "/api/v1/terminal/session-sharings/";
pub const SHARE_SESSION_JOIN: &str = "/api/v1/terminal/session-join-records/";
pub const SHARE_SESSION_FINISH: &str = "/api/v1/terminal/session-join-records/{0}/finished/";

pub const PUBLIC_SETTING: &str = "/api/v1/settings/public/";

pub const TICKET_SESSION: &str = "/api/v1/tickets/ticket-session-relation/";

pub const ASSET_LOGIN_CONFIRM: &str = "/api/v1/acls/login-asset/check/";
