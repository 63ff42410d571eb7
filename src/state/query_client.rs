// ============================================================================
// QUERY CLIENT - Caché de peticiones por clave con deduplicación
// ============================================================================
// - una clave ya resuelta no vuelve a pedirse hasta invalidarla
// - dos lecturas concurrentes de la misma clave comparten una sola petición
// - los errores no se cachean
// - un resultado que llega después de invalidar su clave no se guarda
// - como mucho `capacity` resultados; se expulsa el usado hace más tiempo
// ============================================================================

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;
use std::rc::Rc;

use futures::future::{self, FutureExt, LocalBoxFuture, Shared};

use crate::services::ApiError;
use crate::state::reactivity::{ObserverGuard, Observers};
use crate::utils::constants::QUERY_CACHE_CAPACITY;

pub type QueryResult<V> = Result<Rc<V>, ApiError>;

type SharedFetch<V> = Shared<LocalBoxFuture<'static, QueryResult<V>>>;

enum Entry<V> {
    Pending(SharedFetch<V>),
    Ready { value: Rc<V>, last_used: Cell<u64> },
}

struct QueryInner<K, V> {
    name: &'static str,
    entries: RefCell<HashMap<K, Entry<V>>>,
    capacity: usize,
    clock: Cell<u64>,
    version: Cell<u64>,
    observers: Observers,
}

pub struct QueryClient<K, V> {
    inner: Rc<QueryInner<K, V>>,
}

impl<K, V> Clone for QueryClient<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<K, V> PartialEq for QueryClient<K, V> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<K, V> QueryClient<K, V>
where
    K: Eq + Hash + Clone + std::fmt::Debug + 'static,
    V: 'static,
{
    pub fn new(name: &'static str) -> Self {
        Self::with_capacity(name, QUERY_CACHE_CAPACITY)
    }

    pub fn with_capacity(name: &'static str, capacity: usize) -> Self {
        Self {
            inner: Rc::new(QueryInner {
                name,
                entries: RefCell::new(HashMap::new()),
                capacity: capacity.max(1),
                clock: Cell::new(0),
                version: Cell::new(0),
                observers: Observers::new(),
            }),
        }
    }

    /// Devuelve el valor cacheado, se une a la petición en curso o lanza `fetcher`
    pub fn fetch<F, Fut>(&self, key: K, fetcher: F) -> LocalBoxFuture<'static, QueryResult<V>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, ApiError>> + 'static,
    {
        let in_flight = match self.inner.entries.borrow().get(&key) {
            Some(Entry::Ready { value, last_used }) => {
                last_used.set(self.tick());
                log::debug!("💾 [QUERY:{}] Cache hit {:?}", self.inner.name, key);
                return future::ready(Ok(value.clone())).boxed_local();
            }
            Some(Entry::Pending(shared)) => Some(shared.clone()),
            None => None,
        };

        let shared = match in_flight {
            Some(shared) => {
                log::debug!("⏳ [QUERY:{}] Uniéndose a petición en curso {:?}", self.inner.name, key);
                shared
            }
            None => {
                log::debug!("🌐 [QUERY:{}] Fetch {:?}", self.inner.name, key);
                let shared = fetcher()
                    .map(|result| result.map(Rc::new))
                    .boxed_local()
                    .shared();
                self.inner
                    .entries
                    .borrow_mut()
                    .insert(key.clone(), Entry::Pending(shared.clone()));
                shared
            }
        };

        let client = self.clone();
        async move {
            let result = shared.clone().await;
            client.settle(&key, &shared, &result);
            result
        }
        .boxed_local()
    }

    /// Guarda el resultado solo si la entrada sigue siendo esta misma petición
    fn settle(&self, key: &K, shared: &SharedFetch<V>, result: &QueryResult<V>) {
        let mut entries = self.inner.entries.borrow_mut();
        let current = matches!(
            entries.get(key),
            Some(Entry::Pending(pending)) if Shared::ptr_eq(pending, shared)
        );
        if !current {
            return;
        }
        match result {
            Ok(value) => {
                entries.insert(
                    key.clone(),
                    Entry::Ready {
                        value: value.clone(),
                        last_used: Cell::new(self.tick()),
                    },
                );
                self.evict_over_capacity(&mut entries);
            }
            Err(e) => {
                log::warn!("⚠️ [QUERY:{}] {:?} falló: {}", self.inner.name, key, e);
                entries.remove(key);
            }
        }
    }

    /// Expulsa los resultados usados hace más tiempo; las peticiones en curso no cuentan
    fn evict_over_capacity(&self, entries: &mut HashMap<K, Entry<V>>) {
        loop {
            let mut ready = 0;
            let mut oldest: Option<(&K, u64)> = None;
            for (key, entry) in entries.iter() {
                if let Entry::Ready { last_used, .. } = entry {
                    ready += 1;
                    if oldest.map_or(true, |(_, used)| last_used.get() < used) {
                        oldest = Some((key, last_used.get()));
                    }
                }
            }
            let victim = match oldest {
                Some((key, _)) if ready > self.inner.capacity => key.clone(),
                _ => return,
            };
            log::debug!("♻️ [QUERY:{}] Expulsado {:?}", self.inner.name, victim);
            entries.remove(&victim);
        }
    }

    fn tick(&self) -> u64 {
        let now = self.inner.clock.get() + 1;
        self.inner.clock.set(now);
        now
    }

    pub fn peek(&self, key: &K) -> Option<Rc<V>> {
        match self.inner.entries.borrow().get(key) {
            Some(Entry::Ready { value, last_used }) => {
                last_used.set(self.tick());
                Some(value.clone())
            }
            _ => None,
        }
    }

    pub fn is_pending(&self, key: &K) -> bool {
        matches!(self.inner.entries.borrow().get(key), Some(Entry::Pending(_)))
    }

    pub fn invalidate(&self, key: &K) {
        let removed = self.inner.entries.borrow_mut().remove(key).is_some();
        if removed {
            log::debug!("🧹 [QUERY:{}] Invalidado {:?}", self.inner.name, key);
        }
        self.bump();
    }

    pub fn clear(&self) {
        self.inner.entries.borrow_mut().clear();
        log::debug!("🧹 [QUERY:{}] Caché vaciada", self.inner.name);
        self.bump();
    }

    /// Se incrementa en cada invalidación; las vistas lo usan para refetch
    pub fn version(&self) -> u64 {
        self.inner.version.get()
    }

    pub fn subscribe<F>(&self, callback: F) -> ObserverGuard
    where
        F: Fn() + 'static,
    {
        self.inner.observers.subscribe(callback)
    }

    fn bump(&self) {
        self.inner.version.set(self.inner.version.get() + 1);
        self.inner.observers.notify();
    }
}

/// Estado de una lectura tal como la ve una vista
pub enum QueryState<V> {
    Loading,
    Success(Rc<V>),
    Error(ApiError),
}

impl<V> QueryState<V> {
    pub fn from_result(result: QueryResult<V>) -> Self {
        match result {
            Ok(value) => QueryState::Success(value),
            Err(e) => QueryState::Error(e),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, QueryState::Loading)
    }

    pub fn data(&self) -> Option<&Rc<V>> {
        match self {
            QueryState::Success(value) => Some(value),
            _ => None,
        }
    }
}

impl<V> Clone for QueryState<V> {
    fn clone(&self) -> Self {
        match self {
            QueryState::Loading => QueryState::Loading,
            QueryState::Success(value) => QueryState::Success(value.clone()),
            QueryState::Error(e) => QueryState::Error(e.clone()),
        }
    }
}

impl<V> PartialEq for QueryState<V> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (QueryState::Loading, QueryState::Loading) => true,
            (QueryState::Success(a), QueryState::Success(b)) => Rc::ptr_eq(a, b),
            (QueryState::Error(a), QueryState::Error(b)) => a == b,
            _ => false,
        }
    }
}
