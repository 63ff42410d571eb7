// ============================================================================
// SESSION MANAGER - Identidad actual + sincronización con el backend
// ============================================================================
// Único escritor del estado de sesión:
// - las acciones (sign-in, sign-up, ...) solo ponen loading = true
// - el handler de cambios de identidad actualiza user, pone loading = false
//   y lanza exactamente una llamada al backend (create/clear access key)
// ============================================================================

use std::cell::Cell;
use std::rc::{Rc, Weak};

use futures::future::{FutureExt, LocalBoxFuture};

use crate::models::{AuthUser, OAuthProvider, ProfileUpdate};
use crate::services::{AuthError, AuthSubscription, IdentityProvider, SessionBackend};
use crate::state::reactivity::{ObserverGuard, ReactiveState};

/// Lanza tareas locales (spawn_local en el navegador, LocalPool en tests)
pub type TaskSpawner = Rc<dyn Fn(LocalBoxFuture<'static, ()>)>;

/// Spawner del navegador
pub fn browser_spawner() -> TaskSpawner {
    Rc::new(wasm_bindgen_futures::spawn_local)
}

/// Estado observable de la sesión
#[derive(Clone, Debug, PartialEq)]
pub struct SessionSnapshot {
    pub user: Option<AuthUser>,
    /// true mientras no se ha recibido el primer evento o hay una acción en curso
    pub loading: bool,
}

impl SessionSnapshot {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn email(&self) -> Option<&str> {
        self.user.as_ref().and_then(|user| user.email.as_deref())
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

struct SessionInner {
    provider: Rc<dyn IdentityProvider>,
    backend: Rc<dyn SessionBackend>,
    spawner: TaskSpawner,
    state: ReactiveState<SessionSnapshot>,
    mounted: Cell<bool>,
}

#[derive(Clone)]
pub struct SessionManager {
    inner: Rc<SessionInner>,
}

impl PartialEq for SessionManager {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl SessionManager {
    pub fn new(
        provider: Rc<dyn IdentityProvider>,
        backend: Rc<dyn SessionBackend>,
        spawner: TaskSpawner,
    ) -> Self {
        Self {
            inner: Rc::new(SessionInner {
                provider,
                backend,
                spawner,
                state: ReactiveState::new(SessionSnapshot::default()),
                mounted: Cell::new(false),
            }),
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.inner.state.get()
    }

    pub fn is_loading(&self) -> bool {
        self.inner.state.with(|s| s.loading)
    }

    /// Callback de re-render; se elimina al soltar el guard
    pub fn subscribe<F>(&self, callback: F) -> ObserverGuard
    where
        F: Fn() + 'static,
    {
        self.inner.state.subscribe(callback)
    }

    /// Registra el listener de identidad. Una sola vez por instancia montada.
    pub fn mount(&self) -> Result<SessionMount, AuthError> {
        if self.inner.mounted.replace(true) {
            log::warn!("⚠️ [SESSION] mount() ya fue llamado, ignorando llamada duplicada");
            return Err(AuthError::AlreadyMounted);
        }

        let weak = Rc::downgrade(&self.inner);
        let subscription = self
            .inner
            .provider
            .on_auth_state_changed(Box::new(move |user| match weak.upgrade() {
                Some(inner) => {
                    let manager = SessionManager { inner };
                    let sync = manager.apply_auth_change(user);
                    (manager.inner.spawner)(sync);
                }
                None => log::debug!("🔌 [SESSION] Evento de identidad tras liberar el gestor"),
            }));

        log::info!("👂 [SESSION] Listener de identidad montado");
        Ok(SessionMount {
            subscription: Some(subscription),
            inner: Rc::downgrade(&self.inner),
        })
    }

    /// Handler de cambio de identidad.
    /// Actualiza el estado de inmediato y devuelve la llamada al backend pendiente.
    pub fn apply_auth_change(&self, user: Option<AuthUser>) -> LocalBoxFuture<'static, ()> {
        let signed_in = user.is_some();
        let email = user.as_ref().and_then(|u| u.email.clone());

        match &user {
            Some(u) => log::info!("👤 [SESSION] Identidad activa: {}", u.label()),
            None => log::info!("👋 [SESSION] Sin identidad"),
        }
        self.inner.state.set(SessionSnapshot {
            user,
            loading: false,
        });

        let backend = self.inner.backend.clone();
        async move {
            if signed_in {
                if let Err(e) = backend.create_access_key(email.as_deref()).await {
                    log::error!("❌ [SESSION] Error creando access key: {}", e);
                }
            } else if let Err(e) = backend.clear_access_key().await {
                log::error!("❌ [SESSION] Error limpiando access key: {}", e);
            }
        }
        .boxed_local()
    }

    fn begin_action(&self) {
        self.inner.state.update(|s| s.loading = true);
    }

    pub async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<AuthUser, AuthError> {
        self.begin_action();
        self.inner.provider.sign_in_with_password(email, password).await
    }

    pub async fn sign_up_with_password(&self, email: &str, password: &str) -> Result<AuthUser, AuthError> {
        self.begin_action();
        self.inner.provider.sign_up_with_password(email, password).await
    }

    pub async fn sign_in_with_google(&self) -> Result<AuthUser, AuthError> {
        self.begin_action();
        self.inner.provider.sign_in_with_popup(OAuthProvider::Google).await
    }

    pub async fn sign_in_with_github(&self) -> Result<AuthUser, AuthError> {
        self.begin_action();
        self.inner.provider.sign_in_with_popup(OAuthProvider::Github).await
    }

    pub async fn sign_out(&self) -> Result<(), AuthError> {
        self.begin_action();
        self.inner.provider.sign_out().await
    }

    /// El proveedor no emite evento para cambios de perfil: solo se copian
    /// nombre y foto al usuario ya establecido. Ni `loading` ni el backend
    /// cambian aquí.
    pub async fn update_profile(
        &self,
        display_name: Option<String>,
        photo_url: Option<String>,
    ) -> Result<(), AuthError> {
        self.begin_action();
        let update = ProfileUpdate {
            display_name,
            photo_url,
        };
        self.inner.provider.update_profile(&update).await?;

        if let Some(refreshed) = self.inner.provider.current_user() {
            self.inner.state.update(|s| {
                if let Some(user) = s.user.as_mut().filter(|user| user.uid == refreshed.uid) {
                    user.display_name = refreshed.display_name;
                    user.photo_url = refreshed.photo_url;
                }
            });
        }
        Ok(())
    }
}

/// Listener montado; al hacer drop se desregistra del proveedor
#[must_use = "dropping the mount detaches the identity listener"]
pub struct SessionMount {
    subscription: Option<AuthSubscription>,
    inner: Weak<SessionInner>,
}

impl Drop for SessionMount {
    fn drop(&mut self) {
        drop(self.subscription.take());
        if let Some(inner) = self.inner.upgrade() {
            inner.mounted.set(false);
        }
        log::info!("🔌 [SESSION] Listener de identidad desmontado");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{ApiError, AuthListener};
    use async_trait::async_trait;
    use futures::executor::LocalPool;
    use futures::task::LocalSpawnExt;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeProvider {
        listener: Rc<RefCell<Option<AuthListener>>>,
        subscribe_calls: Cell<usize>,
        unsubscribe_calls: Rc<Cell<usize>>,
        current: RefCell<Option<AuthUser>>,
        failure: RefCell<Option<AuthError>>,
        profile_updates: RefCell<Vec<ProfileUpdate>>,
    }

    impl FakeProvider {
        fn emit(&self, user: Option<AuthUser>) {
            *self.current.borrow_mut() = user.clone();
            if let Some(listener) = self.listener.borrow().as_ref() {
                listener(user);
            }
        }

        fn fail_next(&self, error: AuthError) {
            *self.failure.borrow_mut() = Some(error);
        }

        fn result_for(&self, user: AuthUser) -> Result<AuthUser, AuthError> {
            match self.failure.borrow_mut().take() {
                Some(error) => Err(error),
                None => Ok(user),
            }
        }
    }

    #[async_trait(?Send)]
    impl IdentityProvider for FakeProvider {
        async fn sign_in_with_password(&self, email: &str, _password: &str) -> Result<AuthUser, AuthError> {
            self.result_for(user(email))
        }

        async fn sign_up_with_password(&self, email: &str, _password: &str) -> Result<AuthUser, AuthError> {
            self.result_for(user(email))
        }

        async fn sign_in_with_popup(&self, provider: OAuthProvider) -> Result<AuthUser, AuthError> {
            self.result_for(user(&format!("{}@popup.dev", provider.label().to_lowercase())))
        }

        async fn sign_out(&self) -> Result<(), AuthError> {
            match self.failure.borrow_mut().take() {
                Some(error) => Err(error),
                None => Ok(()),
            }
        }

        async fn update_profile(&self, update: &ProfileUpdate) -> Result<(), AuthError> {
            let mut current = self.current.borrow_mut();
            let current = current.as_mut().ok_or(AuthError::NoCurrentUser)?;
            current.display_name = update.display_name.clone();
            current.photo_url = update.photo_url.clone();
            self.profile_updates.borrow_mut().push(update.clone());
            Ok(())
        }

        fn current_user(&self) -> Option<AuthUser> {
            self.current.borrow().clone()
        }

        fn on_auth_state_changed(&self, listener: AuthListener) -> AuthSubscription {
            self.subscribe_calls.set(self.subscribe_calls.get() + 1);
            *self.listener.borrow_mut() = Some(listener);
            let slot = self.listener.clone();
            let unsubscribed = self.unsubscribe_calls.clone();
            AuthSubscription::new(move || {
                slot.borrow_mut().take();
                unsubscribed.set(unsubscribed.get() + 1);
            })
        }
    }

    #[derive(Default)]
    struct FakeBackend {
        created: RefCell<Vec<Option<String>>>,
        cleared: Cell<usize>,
        failing: Cell<bool>,
    }

    #[async_trait(?Send)]
    impl SessionBackend for FakeBackend {
        async fn create_access_key(&self, email: Option<&str>) -> Result<(), ApiError> {
            self.created.borrow_mut().push(email.map(String::from));
            if self.failing.get() {
                return Err(ApiError::Network("backend down".into()));
            }
            Ok(())
        }

        async fn clear_access_key(&self) -> Result<(), ApiError> {
            self.cleared.set(self.cleared.get() + 1);
            if self.failing.get() {
                return Err(ApiError::Http {
                    status: 500,
                    message: "boom".into(),
                });
            }
            Ok(())
        }
    }

    fn user(email: &str) -> AuthUser {
        AuthUser {
            uid: format!("uid-{}", email),
            email: Some(email.to_string()),
            display_name: None,
            photo_url: None,
        }
    }

    struct Harness {
        pool: LocalPool,
        provider: Rc<FakeProvider>,
        backend: Rc<FakeBackend>,
        manager: SessionManager,
    }

    fn harness() -> Harness {
        let pool = LocalPool::new();
        let spawner = pool.spawner();
        let task_spawner: TaskSpawner = Rc::new(move |task| {
            spawner.spawn_local(task).expect("local pool accepts tasks");
        });
        let provider = Rc::new(FakeProvider::default());
        let backend = Rc::new(FakeBackend::default());
        let manager = SessionManager::new(provider.clone(), backend.clone(), task_spawner);
        Harness {
            pool,
            provider,
            backend,
            manager,
        }
    }

    #[test]
    fn starts_loading_without_identity() {
        let h = harness();
        let snapshot = h.manager.snapshot();
        assert!(snapshot.loading);
        assert!(snapshot.user.is_none());
    }

    #[test]
    fn sign_in_event_establishes_session_exactly_once() {
        let mut h = harness();
        let _mount = h.manager.mount().unwrap();

        h.provider.emit(Some(user("ana@edusync.dev")));
        h.pool.run_until_stalled();

        assert_eq!(*h.backend.created.borrow(), vec![Some("ana@edusync.dev".to_string())]);
        assert_eq!(h.backend.cleared.get(), 0);
        let snapshot = h.manager.snapshot();
        assert!(!snapshot.loading);
        assert_eq!(snapshot.email(), Some("ana@edusync.dev"));
    }

    #[test]
    fn loading_clears_before_backend_call_resolves() {
        let mut h = harness();
        let _mount = h.manager.mount().unwrap();

        h.provider.emit(Some(user("ana@edusync.dev")));
        assert!(!h.manager.is_loading());
        assert!(h.backend.created.borrow().is_empty());

        h.pool.run_until_stalled();
        assert_eq!(h.backend.created.borrow().len(), 1);
    }

    #[test]
    fn sign_out_event_clears_session_without_email() {
        let mut h = harness();
        let _mount = h.manager.mount().unwrap();

        h.provider.emit(None);
        h.pool.run_until_stalled();

        assert_eq!(h.backend.cleared.get(), 1);
        assert!(h.backend.created.borrow().is_empty());
        assert!(!h.manager.is_loading());
        assert!(h.manager.snapshot().user.is_none());
    }

    #[test]
    fn backend_failure_keeps_identity() {
        let mut h = harness();
        h.backend.failing.set(true);
        let _mount = h.manager.mount().unwrap();

        h.provider.emit(Some(user("ana@edusync.dev")));
        h.pool.run_until_stalled();

        assert_eq!(h.backend.created.borrow().len(), 1);
        assert!(h.manager.snapshot().is_authenticated());
        assert!(!h.manager.is_loading());
    }

    #[test]
    fn mount_is_exclusive_and_released_on_drop() {
        let mut h = harness();
        let mount = h.manager.mount().unwrap();
        assert_eq!(h.manager.mount().err(), Some(AuthError::AlreadyMounted));
        assert_eq!(h.provider.subscribe_calls.get(), 1);

        drop(mount);
        assert_eq!(h.provider.unsubscribe_calls.get(), 1);

        // Sin listener: el evento no llega al gestor
        h.provider.emit(Some(user("late@edusync.dev")));
        h.pool.run_until_stalled();
        assert!(h.backend.created.borrow().is_empty());

        // Remontar funciona y vuelve a suscribir una sola vez
        let _again = h.manager.mount().unwrap();
        assert_eq!(h.provider.subscribe_calls.get(), 2);
    }

    #[test]
    fn actions_raise_loading_and_only_the_handler_clears_it() {
        let mut h = harness();
        let _mount = h.manager.mount().unwrap();
        h.provider.emit(None);
        h.pool.run_until_stalled();
        assert!(!h.manager.is_loading());

        let manager = h.manager.clone();
        let signed = h
            .pool
            .run_until(async move { manager.sign_in_with_password("ana@edusync.dev", "Secret1").await })
            .unwrap();
        assert_eq!(signed.email.as_deref(), Some("ana@edusync.dev"));
        assert!(h.manager.is_loading());

        h.provider.emit(Some(signed));
        h.pool.run_until_stalled();
        assert!(!h.manager.is_loading());
    }

    #[test]
    fn provider_errors_propagate_to_the_caller() {
        let mut h = harness();
        h.provider.fail_next(AuthError::provider("auth/popup-closed-by-user", "closed"));

        let manager = h.manager.clone();
        let result = h.pool.run_until(async move { manager.sign_in_with_google().await });

        assert_eq!(result.unwrap_err().code(), "auth/popup-closed-by-user");
        assert!(h.manager.is_loading());
        assert!(h.manager.snapshot().user.is_none());
    }

    #[test]
    fn popup_providers_are_routed() {
        let mut h = harness();
        let manager = h.manager.clone();
        let github = h
            .pool
            .run_until(async move { manager.sign_in_with_github().await })
            .unwrap();
        assert_eq!(github.email.as_deref(), Some("github@popup.dev"));
    }

    #[test]
    fn update_profile_patches_identity_without_a_second_session_call() {
        let mut h = harness();
        let _mount = h.manager.mount().unwrap();

        let manager = h.manager.clone();
        let created = h
            .pool
            .run_until(async move { manager.sign_up_with_password("ana@edusync.dev", "Secret1").await })
            .unwrap();
        h.provider.emit(Some(created));
        h.pool.run_until_stalled();
        assert!(!h.manager.is_loading());

        let manager = h.manager.clone();
        h.pool
            .run_until(async move {
                manager
                    .update_profile(Some("Ana".into()), Some("https://i.ibb.co/ana.png".into()))
                    .await
            })
            .unwrap();
        h.pool.run_until_stalled();

        let snapshot = h.manager.snapshot();
        let user = snapshot.user.clone().unwrap();
        assert_eq!(user.display_name.as_deref(), Some("Ana"));
        assert_eq!(user.photo_url.as_deref(), Some("https://i.ibb.co/ana.png"));
        assert_eq!(h.provider.profile_updates.borrow().len(), 1);
        assert_eq!(h.backend.created.borrow().len(), 1);
        assert_eq!(h.backend.cleared.get(), 0);
        // Es una acción: deja loading en alto hasta el próximo evento
        assert!(snapshot.loading);

        let current = h.provider.current_user();
        h.provider.emit(current);
        h.pool.run_until_stalled();
        assert!(!h.manager.is_loading());
        assert_eq!(h.backend.created.borrow().len(), 2);
    }

    #[test]
    fn update_profile_ignores_a_different_stored_user() {
        let mut h = harness();
        let _mount = h.manager.mount().unwrap();
        h.provider.emit(Some(user("ana@edusync.dev")));
        h.pool.run_until_stalled();

        // El proveedor ya tiene otro usuario y el evento aún no ha llegado
        *h.provider.current.borrow_mut() = Some(user("leo@edusync.dev"));
        let manager = h.manager.clone();
        h.pool
            .run_until(async move { manager.update_profile(Some("Leo".into()), None).await })
            .unwrap();

        let stored = h.manager.snapshot().user.unwrap();
        assert_eq!(stored.email.as_deref(), Some("ana@edusync.dev"));
        assert!(stored.display_name.is_none());
        assert_eq!(h.backend.created.borrow().len(), 1);
    }

    #[test]
    fn update_profile_without_user_fails() {
        let mut h = harness();
        let manager = h.manager.clone();
        let result = h
            .pool
            .run_until(async move { manager.update_profile(Some("Ghost".into()), None).await });
        assert_eq!(result, Err(AuthError::NoCurrentUser));
    }

    #[test]
    fn observers_see_every_transition() {
        let mut h = harness();
        let _mount = h.manager.mount().unwrap();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let _guard = {
            let seen = seen.clone();
            let manager = h.manager.clone();
            h.manager.subscribe(move || seen.borrow_mut().push(manager.snapshot().loading))
        };

        h.provider.emit(Some(user("ana@edusync.dev")));
        let manager = h.manager.clone();
        h.pool
            .run_until(async move { manager.sign_out().await })
            .unwrap();
        h.provider.emit(None);
        h.pool.run_until_stalled();

        assert_eq!(*seen.borrow(), vec![false, true, false]);
        assert_eq!(h.backend.created.borrow().len(), 1);
        assert_eq!(h.backend.cleared.get(), 1);
    }
}
