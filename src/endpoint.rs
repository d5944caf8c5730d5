use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::error::{CatalogError, DefinitionError};
use crate::routes;
use crate::template::PathTemplate;

/// Functional domain an endpoint belongs to. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndpointGroup {
    Identity,
    Auth,
    Session,
    Permission,
    Resource,
    Audit,
    Sharing,
    Settings,
    Ticket,
    Security,
    Misc,
}

impl EndpointGroup {
    pub const ALL: [EndpointGroup; 11] = [
        EndpointGroup::Identity,
        EndpointGroup::Auth,
        EndpointGroup::Session,
        EndpointGroup::Permission,
        EndpointGroup::Resource,
        EndpointGroup::Audit,
        EndpointGroup::Sharing,
        EndpointGroup::Settings,
        EndpointGroup::Ticket,
        EndpointGroup::Security,
        EndpointGroup::Misc,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EndpointGroup::Identity => "identity",
            EndpointGroup::Auth => "auth",
            EndpointGroup::Session => "session",
            EndpointGroup::Permission => "permission",
            EndpointGroup::Resource => "resource",
            EndpointGroup::Audit => "audit",
            EndpointGroup::Sharing => "sharing",
            EndpointGroup::Settings => "settings",
            EndpointGroup::Ticket => "ticket",
            EndpointGroup::Security => "security",
            EndpointGroup::Misc => "misc",
        }
    }
}

impl fmt::Display for EndpointGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for EndpointGroup {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        EndpointGroup::ALL
            .into_iter()
            .find(|group| group.as_str() == input)
            .ok_or_else(|| {
                let known: Vec<&str> = EndpointGroup::ALL.iter().map(|g| g.as_str()).collect();
                format!("unknown group '{}', expected one of: {}", input, known.join(", "))
            })
    }
}

// Declares the built-in endpoints with their group, template and placeholder
// count. The count is checked against the template when a catalog is built.
macro_rules! endpoints {
    ($($variant:ident => ($group:ident, $path:expr, $arity:literal)),+ $(,)?) => {
        /// Identifier of a built-in core API endpoint
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Endpoint {
            $($variant),+
        }

        impl Endpoint {
            /// Every built-in endpoint, in registry order
            pub const ALL: &'static [Endpoint] = &[$(Endpoint::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $(Endpoint::$variant => stringify!($variant)),+
                }
            }

            pub fn group(self) -> EndpointGroup {
                match self {
                    $(Endpoint::$variant => EndpointGroup::$group),+
                }
            }

            /// Raw path template
            pub fn path(self) -> &'static str {
                match self {
                    $(Endpoint::$variant => $path),+
                }
            }

            /// Number of values `format` expects for this endpoint
            pub fn arity(self) -> usize {
                match self {
                    $(Endpoint::$variant => $arity),+
                }
            }
        }
    };
}

endpoints! {
    UserProfile => (Identity, routes::USER_PROFILE, 0),
    TerminalRegister => (Identity, routes::TERMINAL_REGISTER, 0),
    TerminalConfig => (Identity, routes::TERMINAL_CONFIG, 0),
    TerminalHeartBeat => (Identity, routes::TERMINAL_HEART_BEAT, 0),

    TokenAsset => (Auth, routes::TOKEN_ASSET, 1),
    UserTokenAuth => (Auth, routes::USER_TOKEN_AUTH, 0),
    UserConfirmAuth => (Auth, routes::USER_CONFIRM_AUTH, 0),
    AuthMFASelect => (Auth, routes::AUTH_MFA_SELECT, 0),
    ConnectTokenInfo => (Auth, routes::CONNECT_TOKEN_INFO, 0),
    SuperConnectTokenInfo => (Auth, routes::SUPER_CONNECT_TOKEN_INFO, 0),

    SessionList => (Session, routes::SESSION_LIST, 0),
    SessionDetail => (Session, routes::SESSION_DETAIL, 1),
    SessionReplay => (Session, routes::SESSION_REPLAY, 1),
    SessionCommand => (Session, routes::SESSION_COMMAND, 0),
    FinishTask => (Session, routes::FINISH_TASK, 1),
    JoinRoomValidate => (Session, routes::JOIN_ROOM_VALIDATE, 0),

    FTPLogList => (Audit, routes::FTP_LOG_LIST, 0),

    // (user, node)
    UserPermsNodesList => (Permission, routes::USER_PERMS_NODES_LIST, 1),
    UserPermsNodeAssetsList => (Permission, routes::USER_PERMS_NODE_ASSETS_LIST, 2),
    UserPermsNodeTreeWithAsset => (Permission, routes::USER_PERMS_NODE_TREE_WITH_ASSET, 0),
    // (user, asset)
    UserPermsAssetAccounts => (Permission, routes::USER_PERMS_ASSET_ACCOUNTS, 2),
    UserPermsAssets => (Permission, routes::USER_PERMS_ASSETS, 1),

    UserList => (Resource, routes::USER_LIST, 0),
    UserDetail => (Resource, routes::USER_DETAIL, 1),
    AssetDetail => (Resource, routes::ASSET_DETAIL, 1),
    AssetPlatform => (Resource, routes::ASSET_PLATFORM, 1),
    SystemUserCmdFilterRulesList => (Resource, routes::SYSTEM_USER_CMD_FILTER_RULES_LIST, 1),
    CommandFilterRulesList => (Resource, routes::COMMAND_FILTER_RULES_LIST, 0),
    DomainDetailWithGateways => (Resource, routes::DOMAIN_DETAIL_WITH_GATEWAYS, 1),
    AccountSecret => (Resource, routes::ACCOUNT_SECRET, 1),

    NotificationCommand => (Audit, routes::NOTIFICATION_COMMAND, 0),
    CommandConfirm => (Audit, routes::COMMAND_CONFIRM, 0),

    ShareCreate => (Sharing, routes::SHARE_CREATE, 0),
    ShareSessionJoin => (Sharing, routes::SHARE_SESSION_JOIN, 0),
    ShareSessionFinish => (Sharing, routes::SHARE_SESSION_FINISH, 1),

    PublicSetting => (Settings, routes::PUBLIC_SETTING, 0),

    TicketSession => (Ticket, routes::TICKET_SESSION, 0),

    AssetLoginConfirm => (Security, routes::ASSET_LOGIN_CONFIRM, 0),
}

impl Endpoint {
    /// Build the catalog entry for this endpoint, checking the declared arity
    pub fn template(self) -> Result<EndpointTemplate, DefinitionError> {
        let template = EndpointTemplate::new(self.as_str(), self.group(), self.path())?;
        if template.arity() != self.arity() {
            return Err(DefinitionError::ArityDeclaration {
                id: self.as_str().to_string(),
                declared: self.arity(),
                actual: template.arity(),
            });
        }
        Ok(template)
    }
}

impl AsRef<str> for Endpoint {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Endpoint {
    type Err = CatalogError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Endpoint::ALL
            .iter()
            .copied()
            .find(|endpoint| endpoint.as_str() == input)
            .ok_or_else(|| CatalogError::UnknownEndpoint {
                id: input.to_string(),
            })
    }
}

/// A single catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EndpointTemplate {
    id: Cow<'static, str>,
    group: EndpointGroup,
    path: PathTemplate,
    arity: usize,
}

impl EndpointTemplate {
    pub fn new(
        id: impl Into<Cow<'static, str>>,
        group: EndpointGroup,
        path: impl Into<Cow<'static, str>>,
    ) -> Result<Self, DefinitionError> {
        let path = PathTemplate::parse(path)?;
        Ok(EndpointTemplate {
            id: id.into(),
            group,
            arity: path.arity(),
            path,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn group(&self) -> EndpointGroup {
        self.group
    }

    pub fn path(&self) -> &PathTemplate {
        &self.path
    }

    pub fn arity(&self) -> usize {
        self.arity
    }
}
