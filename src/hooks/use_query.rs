// ============================================================================
// USE QUERY - Lecturas cacheadas a través de un QueryClient
// ============================================================================
// - la petición se lanza cuando cambia la clave o se invalida la caché
// - un resultado que llega con una clave que ya no es la actual se descarta
// ============================================================================

use std::fmt::Debug;
use std::future::Future;
use std::hash::Hash;

use yew::prelude::*;

use crate::models::{Assignment, AssignmentPage, AssignmentQuery, Submission, SubmissionFilter};
use crate::services::ApiError;
use crate::state::{QueryClient, QueryResult, QueryState};

/// Cachés de la app, una por tipo de lectura
#[derive(Clone, PartialEq)]
pub struct QueryClients {
    pub assignments: QueryClient<AssignmentQuery, AssignmentPage>,
    pub assignment: QueryClient<String, Assignment>,
    pub submissions: QueryClient<SubmissionFilter, Vec<Submission>>,
    pub submission: QueryClient<String, Submission>,
}

impl QueryClients {
    pub fn new() -> Self {
        Self {
            assignments: QueryClient::new("assignments"),
            assignment: QueryClient::new("assignment"),
            submissions: QueryClient::new("submissions"),
            submission: QueryClient::new("submission"),
        }
    }

    /// Tras crear, editar o borrar una tarea
    pub fn assignment_changed(&self, id: Option<&str>) {
        if let Some(id) = id {
            self.assignment.invalidate(&id.to_string());
        }
        self.assignments.clear();
    }

    /// Tras entregar o corregir
    pub fn submission_changed(&self, id: Option<&str>) {
        if let Some(id) = id {
            self.submission.invalidate(&id.to_string());
        }
        self.submissions.clear();
    }
}

impl Default for QueryClients {
    fn default() -> Self {
        Self::new()
    }
}

#[hook]
pub fn use_query_clients() -> QueryClients {
    use_context::<QueryClients>().expect("use_query_clients() must be used inside the QueryClients provider")
}

/// Estado a guardar cuando llega el resultado de `key`; `None` si la vista
/// ya pide otra clave
fn settle_for_current<K, V>(current: &K, key: K, result: QueryResult<V>) -> Option<(K, QueryState<V>)>
where
    K: PartialEq + Debug,
{
    if *current == key {
        Some((key, QueryState::from_result(result)))
    } else {
        log::debug!("🗑️ [QUERY] Resultado descartado para {:?}", key);
        None
    }
}

#[hook]
pub fn use_query<K, V, F, Fut>(client: QueryClient<K, V>, key: K, fetcher: F) -> QueryState<V>
where
    K: Eq + Hash + Clone + Debug + 'static,
    V: 'static,
    F: FnOnce(K) -> Fut + 'static,
    Fut: Future<Output = Result<V, ApiError>> + 'static,
{
    let slot = use_state(|| (key.clone(), QueryState::<V>::Loading));
    let current_key = use_mut_ref(|| key.clone());
    let version = use_state(|| client.version());

    *current_key.borrow_mut() = key.clone();

    // Invalidaciones → nuevo fetch
    {
        let version = version.clone();
        use_effect_with(client.clone(), move |client| {
            let guard = {
                let observed = client.clone();
                client.subscribe(move || version.set(observed.version()))
            };
            move || drop(guard)
        });
    }

    {
        let slot = slot.clone();
        let client = client.clone();
        use_effect_with((key.clone(), *version), move |(key, _)| {
            match client.peek(key) {
                Some(cached) => slot.set((key.clone(), QueryState::Success(cached))),
                None => {
                    slot.set((key.clone(), QueryState::Loading));
                    let request = {
                        let key = key.clone();
                        client.fetch(key.clone(), move || fetcher(key))
                    };
                    let key = key.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        let result = request.await;
                        let settled = settle_for_current(&*current_key.borrow(), key, result);
                        if let Some(settled) = settled {
                            slot.set(settled);
                        }
                    });
                }
            }
            || ()
        });
    }

    let (slot_key, state) = &*slot;
    if *slot_key == key {
        state.clone()
    } else {
        client
            .peek(&key)
            .map(QueryState::Success)
            .unwrap_or(QueryState::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future;
    use std::rc::Rc;

    #[test]
    fn assignment_change_invalidates_list_and_detail() {
        let clients = QueryClients::new();
        let page = AssignmentPage::default();
        block_on(clients.assignments.fetch(AssignmentQuery::default(), move || {
            future::ready(Ok::<_, ApiError>(page))
        }))
        .unwrap();
        assert!(clients.assignments.peek(&AssignmentQuery::default()).is_some());

        clients.assignment_changed(Some("a1"));
        assert!(clients.assignments.peek(&AssignmentQuery::default()).is_none());
        assert_eq!(clients.assignments.version(), 1);
        assert_eq!(clients.assignment.version(), 1);
    }

    #[test]
    fn result_for_the_current_key_is_kept() {
        let value = Rc::new(AssignmentPage::default());
        let settled = settle_for_current(&1u32, 1u32, Ok(value.clone()));
        assert!(settled == Some((1, QueryState::Success(value))));

        let failed = settle_for_current::<u32, AssignmentPage>(&1, 1, Err(ApiError::Parse("x".into())));
        assert!(matches!(failed, Some((1, QueryState::Error(ApiError::Parse(_))))));
    }

    #[test]
    fn late_result_for_a_previous_key_is_discarded() {
        let page_one = AssignmentQuery::default();
        let page_two = page_one.with_page(2);

        let settled = settle_for_current(&page_two, page_one, Ok(Rc::new(AssignmentPage::default())));
        assert!(settled.is_none());
    }

    #[test]
    fn submission_change_clears_every_listing() {
        let clients = QueryClients::new();
        for filter in [SubmissionFilter::Pending, SubmissionFilter::ByExaminee("leo@edusync.dev".into())] {
            block_on(clients.submissions.fetch(filter, || future::ready(Ok::<_, ApiError>(Vec::new())))).unwrap();
        }

        clients.submission_changed(None);
        assert!(clients.submissions.peek(&SubmissionFilter::Pending).is_none());
        assert_eq!(clients.submission.version(), 0);
    }
}
