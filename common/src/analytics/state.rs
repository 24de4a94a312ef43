use crate::analytics::repository::SourceRepository;
use crate::analytics::source::{AnalyticsSource, SourceOption, source_options};
use crate::error::StorageError;
use crate::model::role::{Role, RoleScope};
use crate::storage::KeyValueStore;

/// Template id meaning "no particular template".
pub const ALL_TEMPLATES: &str = "all";

/// The tab-wide analytics scope.
///
/// Every mutation updates memory first and then persists; a failed write is
/// returned to the caller but never rolls the in-memory value back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsSourceState {
    source: AnalyticsSource,
    template_id: String,
    role: Role,
}

impl AnalyticsSourceState {
    /// Reads the persisted scope for a session of `role`.
    ///
    /// The role invariant is not applied here; callers run `reconcile` once
    /// after restoring, the same way they do after every role change.
    pub fn restore<S: KeyValueStore>(repo: &SourceRepository<S>, role: Role) -> Self {
        Self {
            source: repo.load_source(),
            template_id: repo.load_template_id(),
            role,
        }
    }

    pub fn source(&self) -> AnalyticsSource {
        self.source
    }

    pub fn template_id(&self) -> &str {
        &self.template_id
    }

    pub fn options(&self) -> &'static [SourceOption] {
        source_options(self.role.scope())
    }

    pub fn set_source<S: KeyValueStore>(
        &mut self,
        repo: &SourceRepository<S>,
        source: AnalyticsSource,
    ) -> Result<(), StorageError> {
        self.source = source;
        repo.save_source(source)
    }

    /// Stores the new template id and, if it differs, re-runs the role invariant.
    ///
    /// A blank id means "no particular template" and is stored as `ALL_TEMPLATES`,
    /// the value it would load back as.
    pub fn set_template_id<S: KeyValueStore>(
        &mut self,
        repo: &SourceRepository<S>,
        template_id: String,
    ) -> Result<(), StorageError> {
        let template_id = if template_id.trim().is_empty() {
            ALL_TEMPLATES.to_string()
        } else {
            template_id
        };
        let changed = self.template_id != template_id;
        self.template_id = template_id;
        let saved = repo.save_template_id(&self.template_id);
        if changed {
            self.reconcile(repo)?;
        }
        saved
    }

    pub fn set_role<S: KeyValueStore>(
        &mut self,
        repo: &SourceRepository<S>,
        role: Role,
    ) -> Result<(), StorageError> {
        if self.role == role {
            return Ok(());
        }
        self.role = role;
        self.reconcile(repo)
    }

    /// Applies the role invariant: vendor sessions are pinned to the template
    /// scope, whatever was persisted or chosen before.
    pub fn reconcile<S: KeyValueStore>(
        &mut self,
        repo: &SourceRepository<S>,
    ) -> Result<(), StorageError> {
        match self.role.scope() {
            RoleScope::Vendor => {
                self.source = AnalyticsSource::Template;
                repo.save_source(self.source)?;
                // TODO: drop this re-write of an unchanged template id once
                // nothing downstream relies on the storage event it produces.
                repo.save_template_id(&self.template_id)
            }
            RoleScope::Other => Ok(()),
        }
    }

    pub fn query(&self) -> AnalyticsQuery {
        AnalyticsQuery {
            source: self.source,
            template_id: (self.source == AnalyticsSource::Template)
                .then(|| self.template_id.clone()),
        }
    }
}

/// Query parameters dashboards send for the current scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsQuery {
    pub source: AnalyticsSource,
    /// Only present for the template scope.
    pub template_id: Option<String>,
}

impl AnalyticsQuery {
    pub fn to_query_string(&self) -> String {
        let mut query = url::form_urlencoded::Serializer::new(String::new());
        query.append_pair("source", self.source.as_str());
        if let Some(template_id) = &self.template_id {
            query.append_pair("templateId", template_id);
        }
        query.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{ANALYTICS_SOURCE_KEY, ANALYTICS_TEMPLATE_ID_KEY, MemoryStore};

    fn restored(
        entries: &[(&str, &str)],
        role: Role,
    ) -> (AnalyticsSourceState, SourceRepository<MemoryStore>) {
        let repo = SourceRepository::new(MemoryStore::with_entries(entries.iter().copied()));
        let mut state = AnalyticsSourceState::restore(&repo, role);
        state.reconcile(&repo).unwrap();
        (state, repo)
    }

    #[test]
    fn setters_persist_immediately() {
        let (mut state, repo) = restored(&[], Role::Admin);
        state.set_source(&repo, AnalyticsSource::Ophmart).unwrap();
        state.set_template_id(&repo, "tpl-1".into()).unwrap();

        assert_eq!(repo.store().get_or_absent(ANALYTICS_SOURCE_KEY).as_deref(), Some("ophmart"));
        assert_eq!(repo.store().get_or_absent(ANALYTICS_TEMPLATE_ID_KEY).as_deref(), Some("tpl-1"));
    }

    #[test]
    fn non_vendor_roles_keep_their_choice() {
        let (mut state, repo) = restored(&[(ANALYTICS_SOURCE_KEY, "ophmart")], Role::Manager);
        assert_eq!(state.source(), AnalyticsSource::Ophmart);
        state.set_template_id(&repo, "tpl-2".into()).unwrap();
        assert_eq!(state.source(), AnalyticsSource::Ophmart);
    }

    #[test]
    fn vendor_template_id_is_reasserted() {
        let (_, repo) = restored(&[(ANALYTICS_TEMPLATE_ID_KEY, "tpl-3")], Role::Vendor);
        assert!(repo
            .store()
            .writes()
            .contains(&(ANALYTICS_TEMPLATE_ID_KEY.to_string(), "tpl-3".to_string())));
    }

    #[test]
    fn changing_template_id_re_pins_vendor_scope() {
        let (mut state, repo) = restored(&[], Role::Vendor);
        state.set_source(&repo, AnalyticsSource::All).unwrap();
        state.set_template_id(&repo, "tpl-4".into()).unwrap();
        assert_eq!(state.source(), AnalyticsSource::Template);
    }

    #[test]
    fn same_role_does_not_reconcile_again() {
        let (mut state, repo) = restored(&[], Role::Vendor);
        let writes = repo.store().writes().len();
        state.set_role(&repo, Role::Vendor).unwrap();
        assert_eq!(repo.store().writes().len(), writes);
    }

    #[test]
    fn cleared_template_id_issues_the_same_query_after_reload() {
        let (mut state, repo) = restored(&[], Role::Admin);
        state.set_source(&repo, AnalyticsSource::Template).unwrap();
        state.set_template_id(&repo, "tpl-5".into()).unwrap();
        state.set_template_id(&repo, "  ".into()).unwrap();

        assert_eq!(state.template_id(), ALL_TEMPLATES);
        let reloaded = AnalyticsSourceState::restore(&repo, Role::Admin);
        assert_eq!(reloaded.query(), state.query());
        assert_eq!(
            state.query().to_query_string(),
            "source=template&templateId=all"
        );
    }

    #[test]
    fn template_id_only_sent_for_template_scope() {
        let (mut state, repo) = restored(&[(ANALYTICS_TEMPLATE_ID_KEY, "a b&c")], Role::Admin);
        assert_eq!(state.query().to_query_string(), "source=all");

        state.set_source(&repo, AnalyticsSource::Template).unwrap();
        assert_eq!(
            state.query().to_query_string(),
            "source=template&templateId=a+b%26c"
        );
    }
}
