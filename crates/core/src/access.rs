//! Access guard: who may do what to a recipient.
//!
//! | Action        | Allowed for                |
//! |---------------|----------------------------|
//! | `view_one`    | any authenticated actor    |
//! | `mark_paid`   | any authenticated actor    |
//! | `mark_unpaid` | admins                     |
//! | `view_report` | admins                     |
//!
//! Roles are never cached. Each check that needs one asks the
//! [`RoleDirectory`], so a role change applies on the very next request.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::error::CoreError;
use crate::store::RoleDirectory;
use crate::types::DbId;

/// The authenticated identity performing an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Actor {
    pub id: DbId,
}

impl Actor {
    pub fn new(id: DbId) -> Self {
        Self { id }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    ViewOne,
    MarkPaid,
    MarkUnpaid,
    ViewReport,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Action::ViewOne => "view_one",
            Action::MarkPaid => "mark_paid",
            Action::MarkUnpaid => "mark_unpaid",
            Action::ViewReport => "view_report",
        }
    }

    pub fn requires_admin(self) -> bool {
        matches!(self, Action::MarkUnpaid | Action::ViewReport)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone)]
pub struct AccessGuard {
    roles: Arc<dyn RoleDirectory>,
}

impl AccessGuard {
    pub fn new(roles: Arc<dyn RoleDirectory>) -> Self {
        Self { roles }
    }

    /// Allow or deny `action` for `actor`.
    ///
    /// Returns the actor on success so callers can keep using the checked
    /// identity. Fails with [`CoreError::Unauthenticated`] when there is no
    /// actor and [`CoreError::Forbidden`] when an admin-only action is
    /// attempted by anyone else.
    pub async fn authorize<'a>(
        &self,
        actor: Option<&'a Actor>,
        action: Action,
    ) -> Result<&'a Actor, CoreError> {
        let actor = actor
            .ok_or_else(|| CoreError::Unauthenticated("Authentication required".into()))?;

        if action.requires_admin() {
            let role = self.roles.role_of(actor.id).await?;
            if !role.is_admin() {
                return Err(CoreError::Forbidden(format!(
                    "Admin role required for {action}"
                )));
            }
        }

        Ok(actor)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::memory::MemoryStore;
    use crate::roles::Role;

    async fn guard_with(roles: &[(DbId, Role)]) -> AccessGuard {
        let store = Arc::new(MemoryStore::new());
        for (user_id, role) in roles {
            store.set_role(*user_id, Some(*role)).await;
        }
        AccessGuard::new(store)
    }

    #[tokio::test]
    async fn missing_actor_is_unauthenticated_for_every_action() {
        let guard = guard_with(&[]).await;
        for action in [
            Action::ViewOne,
            Action::MarkPaid,
            Action::MarkUnpaid,
            Action::ViewReport,
        ] {
            assert_matches!(
                guard.authorize(None, action).await,
                Err(CoreError::Unauthenticated(_))
            );
        }
    }

    #[tokio::test]
    async fn agents_may_view_and_mark_paid() {
        let guard = guard_with(&[]).await;
        let agent = Actor::new(1);

        assert!(guard.authorize(Some(&agent), Action::ViewOne).await.is_ok());
        assert!(guard.authorize(Some(&agent), Action::MarkPaid).await.is_ok());
    }

    #[tokio::test]
    async fn agents_may_not_revert_or_report() {
        let guard = guard_with(&[(1, Role::Agent)]).await;
        let agent = Actor::new(1);

        assert_matches!(
            guard.authorize(Some(&agent), Action::MarkUnpaid).await,
            Err(CoreError::Forbidden(_))
        );
        assert_matches!(
            guard.authorize(Some(&agent), Action::ViewReport).await,
            Err(CoreError::Forbidden(_))
        );
    }

    #[tokio::test]
    async fn admins_may_do_everything() {
        let guard = guard_with(&[(2, Role::Admin)]).await;
        let admin = Actor::new(2);

        for action in [
            Action::ViewOne,
            Action::MarkPaid,
            Action::MarkUnpaid,
            Action::ViewReport,
        ] {
            let allowed = guard.authorize(Some(&admin), action).await.unwrap();
            assert_eq!(allowed, &admin);
        }
    }

    #[tokio::test]
    async fn role_change_applies_on_next_check() {
        let store = Arc::new(MemoryStore::new());
        let guard = AccessGuard::new(store.clone());
        let user = Actor::new(3);

        assert!(guard.authorize(Some(&user), Action::ViewReport).await.is_err());

        store.set_role(3, Some(Role::Admin)).await;
        assert!(guard.authorize(Some(&user), Action::ViewReport).await.is_ok());

        store.set_role(3, None).await;
        assert!(guard.authorize(Some(&user), Action::ViewReport).await.is_err());
    }
}
