use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use crate::endpoint::{Endpoint, EndpointGroup, EndpointTemplate};
use crate::error::{CatalogError, DefinitionError};

/// Read-only table mapping endpoint identifiers to path templates
///
/// A catalog is fully built by its constructor and never changes afterwards,
/// so a shared reference can be used from any number of threads without locking.
/// Consumers normally receive one by injection; `shared()` exists for code
/// that has no catalog handed to it.
#[derive(Debug, Clone)]
pub struct EndpointCatalog {
    entries: Vec<EndpointTemplate>,
    index: HashMap<String, usize>,
}

static SHARED: OnceLock<Result<EndpointCatalog, DefinitionError>> = OnceLock::new();

impl EndpointCatalog {
    /// Build the catalog of built-in core API endpoints
    pub fn builtin() -> Result<Self, DefinitionError> {
        let templates = Endpoint::ALL
            .iter()
            .map(|endpoint| endpoint.template())
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_templates(templates)
    }

    /// Process-wide built-in catalog, constructed on first use
    ///
    /// Concurrent first callers block until the single construction finishes.
    pub fn shared() -> Result<&'static Self, DefinitionError> {
        SHARED.get_or_init(Self::builtin).as_ref().map_err(Clone::clone)
    }

    /// Build a catalog from arbitrary templates, keeping their order
    pub fn from_templates(
        templates: impl IntoIterator<Item = EndpointTemplate>,
    ) -> Result<Self, DefinitionError> {
        let mut entries = Vec::new();
        let mut index = HashMap::new();

        for template in templates {
            if index.contains_key(template.id()) {
                return Err(DefinitionError::DuplicateEndpoint {
                    id: template.id().to_string(),
                });
            }
            index.insert(template.id().to_string(), entries.len());
            entries.push(template);
        }

        tracing::debug!("Endpoint catalog built with {} entries", entries.len());

        Ok(EndpointCatalog { entries, index })
    }

    /// Look up the full entry for an identifier
    pub fn get(&self, id: impl AsRef<str>) -> Result<&EndpointTemplate, CatalogError> {
        let id = id.as_ref();
        self.index
            .get(id)
            .map(|&position| &self.entries[position])
            .ok_or_else(|| CatalogError::UnknownEndpoint { id: id.to_string() })
    }

    /// Template text for an identifier
    pub fn resolve(&self, id: impl AsRef<str>) -> Result<&str, CatalogError> {
        Ok(self.get(id)?.path().as_str())
    }

    /// Substitute `values` into the identifier's template, in order
    ///
    /// The value count is checked against the template before anything is
    /// substituted. Values are inserted as their `Display` text with no
    /// escaping; encoding them is the caller's concern.
    pub fn format(
        &self,
        id: impl AsRef<str>,
        values: &[&dyn fmt::Display],
    ) -> Result<String, CatalogError> {
        let template = self.get(id)?;
        template
            .path()
            .render(values)
            .ok_or_else(|| CatalogError::ArityMismatch {
                id: template.id().to_string(),
                expected: template.arity(),
                actual: values.len(),
            })
    }

    pub fn group_of(&self, id: impl AsRef<str>) -> Result<EndpointGroup, CatalogError> {
        Ok(self.get(id)?.group())
    }

    pub fn contains(&self, id: impl AsRef<str>) -> bool {
        self.index.contains_key(id.as_ref())
    }

    /// Entries in definition order
    pub fn iter(&self) -> impl Iterator<Item = &EndpointTemplate> {
        self.entries.iter()
    }

    pub fn by_group(&self, group: EndpointGroup) -> impl Iterator<Item = &EndpointTemplate> {
        self.entries.iter().filter(move |entry| entry.group() == group)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a EndpointCatalog {
    type Item = &'a EndpointTemplate;
    type IntoIter = std::slice::Iter<'a, EndpointTemplate>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use uuid::Uuid;

    // Expected table, written out independently of the route constants.
    const EXPECTED: &[(&str, EndpointGroup, &str)] = &[
        ("UserProfile", EndpointGroup::Identity, "/api/v1/users/profile/"),
        ("TerminalRegister", EndpointGroup::Identity, "/api/v1/terminal/terminal-registrations/"),
        ("TerminalConfig", EndpointGroup::Identity, "/api/v1/terminal/terminals/config/"),
        ("TerminalHeartBeat", EndpointGroup::Identity, "/api/v1/terminal/terminals/status/"),
        ("TokenAsset", EndpointGroup::Auth, "/api/v1/authentication/connection-token/{0}/"),
        ("UserTokenAuth", EndpointGroup::Auth, "/api/v1/authentication/tokens/"),
        ("UserConfirmAuth", EndpointGroup::Auth, "/api/v1/authentication/login-confirm-ticket/status/"),
        ("AuthMFASelect", EndpointGroup::Auth, "/api/v1/authentication/mfa/select/"),
        ("ConnectTokenInfo", EndpointGroup::Auth, "/api/v1/authentication/connection-token/secret/"),
        ("SuperConnectTokenInfo", EndpointGroup::Auth, "/api/v1/authentication/super-connection-token/"),
        ("SessionList", EndpointGroup::Session, "/api/v1/terminal/sessions/"),
        ("SessionDetail", EndpointGroup::Session, "/api/v1/terminal/sessions/{0}/"),
        ("SessionReplay", EndpointGroup::Session, "/api/v1/terminal/sessions/{0}/replay/"),
        ("SessionCommand", EndpointGroup::Session, "/api/v1/terminal/commands/"),
        ("FinishTask", EndpointGroup::Session, "/api/v1/terminal/tasks/{0}/"),
        ("JoinRoomValidate", EndpointGroup::Session, "/api/v1/terminal/sessions/join/validate/"),
        ("FTPLogList", EndpointGroup::Audit, "/api/v1/audits/ftp-logs/"),
        ("UserPermsNodesList", EndpointGroup::Permission, "/api/v1/perms/users/{0}/nodes/"),
        ("UserPermsNodeAssetsList", EndpointGroup::Permission, "/api/v1/perms/users/{0}/nodes/{1}/assets/"),
        ("UserPermsNodeTreeWithAsset", EndpointGroup::Permission, "/api/v1/perms/users/nodes/children-with-assets/tree/"),
        ("UserPermsAssetAccounts", EndpointGroup::Permission, "/api/v1/perms/users/{0}/assets/{1}/accounts/"),
        ("UserPermsAssets", EndpointGroup::Permission, "/api/v1/perms/users/{0}/assets/"),
        ("UserList", EndpointGroup::Resource, "/api/v1/users/users/"),
        ("UserDetail", EndpointGroup::Resource, "/api/v1/users/users/{0}/"),
        ("AssetDetail", EndpointGroup::Resource, "/api/v1/assets/assets/{0}/"),
        ("AssetPlatform", EndpointGroup::Resource, "/api/v1/assets/assets/{0}/platform/"),
        ("SystemUserCmdFilterRulesList", EndpointGroup::Resource, "/api/v1/assets/system-users/{0}/cmd-filter-rules/"),
        ("CommandFilterRulesList", EndpointGroup::Resource, "/api/v1/assets/cmd-filter-rules/"),
        ("DomainDetailWithGateways", EndpointGroup::Resource, "/api/v1/assets/domains/{0}/?gateway=1"),
        ("AccountSecret", EndpointGroup::Resource, "/api/v1/assets/account-secrets/{0}/"),
        ("NotificationCommand", EndpointGroup::Audit, "/api/v1/terminal/commands/insecure-command/"),
        ("CommandConfirm", EndpointGroup::Audit, "/api/v1/assets/cmd-filters/command-confirm/"),
        ("ShareCreate", EndpointGroup::Sharing, "/api/v1/terminal/session-sharings/"),
        ("ShareSessionJoin", EndpointGroup::Sharing, "/api/v1/terminal/session-join-records/"),
        ("ShareSessionFinish", EndpointGroup::Sharing, "/api/v1/terminal/session-join-records/{0}/finished/"),
        ("PublicSetting", EndpointGroup::Settings, "/api/v1/settings/public/"),
        ("TicketSession", EndpointGroup::Ticket, "/api/v1/tickets/ticket-session-relation/"),
        ("AssetLoginConfirm", EndpointGroup::Security, "/api/v1/acls/login-asset/check/"),
    ];

    fn catalog() -> EndpointCatalog {
        EndpointCatalog::builtin().unwrap()
    }

    #[test]
    fn test_builtin_matches_expected_table() {
        let catalog = catalog();
        assert_eq!(catalog.len(), EXPECTED.len());

        for (id, group, path) in EXPECTED {
            assert_eq!(catalog.resolve(id).unwrap(), *path, "template for {}", id);
            assert_eq!(catalog.group_of(id).unwrap(), *group, "group for {}", id);
        }
    }

    #[test]
    fn test_iteration_keeps_table_order() {
        let catalog = catalog();
        let ids: Vec<&str> = catalog.iter().map(|e| e.id()).collect();
        let expected: Vec<&str> = EXPECTED.iter().map(|(id, _, _)| *id).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_templates_are_rooted() {
        for entry in &catalog() {
            assert!(entry.path().as_str().starts_with('/'), "{}", entry.id());
        }
    }

    #[test]
    fn test_resolve_by_enum_and_str_agree() {
        let catalog = catalog();
        for endpoint in Endpoint::ALL {
            assert_eq!(
                catalog.resolve(endpoint).unwrap(),
                catalog.resolve(endpoint.as_str()).unwrap()
            );
        }
    }

    #[test]
    fn test_format_positional_order() {
        let path = catalog()
            .format(Endpoint::UserPermsNodeAssetsList, &[&"u1", &"n1"])
            .unwrap();
        assert_eq!(path, "/api/v1/perms/users/u1/nodes/n1/assets/");

        let path = catalog()
            .format("UserPermsAssetAccounts", &[&"alice", &"web-01"])
            .unwrap();
        assert_eq!(path, "/api/v1/perms/users/alice/assets/web-01/accounts/");
    }

    #[test]
    fn test_format_display_values() {
        let session_id = Uuid::new_v4();
        let path = catalog()
            .format(Endpoint::SessionReplay, &[&session_id])
            .unwrap();
        assert_eq!(path, format!("/api/v1/terminal/sessions/{}/replay/", session_id));

        let path = catalog()
            .format(Endpoint::DomainDetailWithGateways, &[&7])
            .unwrap();
        assert_eq!(path, "/api/v1/assets/domains/7/?gateway=1");
    }

    #[test]
    fn test_format_zero_placeholder_template() {
        let path = catalog().format(Endpoint::UserPermsNodeTreeWithAsset, &[]).unwrap();
        assert_eq!(path, "/api/v1/perms/users/nodes/children-with-assets/tree/");
    }

    #[test]
    fn test_format_too_few_values() {
        let err = catalog().format(Endpoint::SessionDetail, &[]).unwrap_err();
        assert_eq!(
            err,
            CatalogError::ArityMismatch {
                id: "SessionDetail".to_string(),
                expected: 1,
                actual: 0,
            }
        );
    }

    #[test]
    fn test_format_too_many_values() {
        let err = catalog()
            .format(Endpoint::UserPermsNodeAssetsList, &[&"u1", &"n1", &"extra"])
            .unwrap_err();
        assert_eq!(
            err,
            CatalogError::ArityMismatch {
                id: "UserPermsNodeAssetsList".to_string(),
                expected: 2,
                actual: 3,
            }
        );

        let err = catalog().format(Endpoint::PublicSetting, &[&"x"]).unwrap_err();
        assert!(matches!(err, CatalogError::ArityMismatch { expected: 0, actual: 1, .. }));
    }

    #[test]
    fn test_unknown_endpoint() {
        let catalog = catalog();
        let unknown = CatalogError::UnknownEndpoint {
            id: "DoesNotExist".to_string(),
        };
        assert_eq!(catalog.resolve("DoesNotExist").unwrap_err(), unknown);
        assert_eq!(catalog.format("DoesNotExist", &[]).unwrap_err(), unknown);
        assert_eq!(catalog.group_of("DoesNotExist").unwrap_err(), unknown);
        assert!(!catalog.contains("DoesNotExist"));
    }

    #[test]
    fn test_unknown_endpoint_wins_over_arity() {
        let err = catalog().format("DoesNotExist", &[&1, &2]).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownEndpoint { .. }));
    }

    #[test]
    fn test_lookups_are_idempotent() {
        let catalog = catalog();
        let first = catalog.format(Endpoint::FinishTask, &[&"task-1"]).unwrap();
        let _ = catalog.format(Endpoint::SessionDetail, &[]);
        let _ = catalog.resolve("DoesNotExist");
        let second = catalog.format(Endpoint::FinishTask, &[&"task-1"]).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            catalog.resolve(Endpoint::FinishTask).unwrap(),
            catalog.resolve(Endpoint::FinishTask).unwrap()
        );
    }

    #[test]
    fn test_by_group() {
        let catalog = catalog();
        let sharing: Vec<&str> = catalog
            .by_group(EndpointGroup::Sharing)
            .map(|e| e.id())
            .collect();
        assert_eq!(sharing, vec!["ShareCreate", "ShareSessionJoin", "ShareSessionFinish"]);
        assert_eq!(catalog.by_group(EndpointGroup::Misc).count(), 0);

        let audit: Vec<&str> = catalog.by_group(EndpointGroup::Audit).map(|e| e.id()).collect();
        assert_eq!(audit, vec!["FTPLogList", "NotificationCommand", "CommandConfirm"]);
    }

    #[test]
    fn test_alternate_catalog() {
        let catalog = EndpointCatalog::from_templates(vec![
            EndpointTemplate::new("Ping", EndpointGroup::Misc, "/ping/").unwrap(),
            EndpointTemplate::new("Echo", EndpointGroup::Misc, "/echo/{0}/{1}".to_string()).unwrap(),
        ])
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.format("Echo", &[&"a", &"b"]).unwrap(), "/echo/a/b");
        assert!(catalog.resolve(Endpoint::UserProfile).is_err());
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = EndpointCatalog::from_templates(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.resolve("UserProfile").is_err());
    }

    #[test]
    fn test_duplicate_identifier_rejected() {
        let err = EndpointCatalog::from_templates(vec![
            EndpointTemplate::new("Ping", EndpointGroup::Misc, "/ping/").unwrap(),
            EndpointTemplate::new("Ping", EndpointGroup::Misc, "/pong/").unwrap(),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            DefinitionError::DuplicateEndpoint {
                id: "Ping".to_string()
            }
        );
    }

    #[test]
    fn test_shared_returns_same_instance() {
        let first = EndpointCatalog::shared().unwrap();
        let second = EndpointCatalog::shared().unwrap();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.len(), Endpoint::ALL.len());
    }

    #[test]
    fn test_shared_first_use_from_many_threads() {
        let handles: Vec<_> = (0..16)
            .map(|_| std::thread::spawn(|| {
                    EndpointCatalog::shared().unwrap() as *const EndpointCatalog as usize
                }))
            .collect();
        let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(addresses.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[test]
    fn test_concurrent_format_from_threads() {
        let catalog = Arc::new(catalog());
        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let catalog = Arc::clone(&catalog);
                std::thread::spawn(move || {
                    for round in 0..500 {
                        let user = format!("user-{}", worker);
                        let node = format!("node-{}", round);
                        let path = catalog
                            .format(Endpoint::UserPermsNodeAssetsList, &[&user, &node])
                            .unwrap();
                        assert_eq!(
                            path,
                            format!("/api/v1/perms/users/{}/nodes/{}/assets/", user, node)
                        );
                        assert_eq!(
                            catalog.resolve(Endpoint::SessionList).unwrap(),
                            "/api/v1/terminal/sessions/"
                        );
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_lookups_from_tasks() {
        let catalog = Arc::new(catalog());
        let mut tasks = Vec::new();

        for (id, _, path) in EXPECTED.iter().copied() {
            let catalog = Arc::clone(&catalog);
            tasks.push(tokio::spawn(async move {
                for _ in 0..100 {
                    assert_eq!(catalog.resolve(id).unwrap(), path);
                    tokio::task::yield_now().await;
                }
            }));
        }

        for task in tasks {
            task.await.unwrap();
        }
    }
}
