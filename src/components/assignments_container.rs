// ============================================================================
// ASSIGNMENTS CONTAINER - Catálogo filtrable y paginado
// ============================================================================

use yew::prelude::*;

use crate::components::{AssignmentCard, AssignmentsSkeleton, FilterPanel, Pagination};
use crate::config::CONFIG;
use crate::hooks::{use_query, use_query_clients};
use crate::models::{AssignmentQuery, SortOrder};
use crate::services::AssignmentService;
use crate::viewmodels::{grid_model, AssignmentGridModel};

#[function_component(AssignmentsContainer)]
pub fn assignments_container() -> Html {
    let clients = use_query_clients();
    let query = use_state(|| AssignmentQuery::new(CONFIG.catalog.page_size));

    let state = use_query(clients.assignments.clone(), (*query).clone(), |query| async move {
        AssignmentService::default().fetch_page(&query).await
    });
    let model = grid_model(&state, &query, CONFIG.catalog.skeleton_count);

    let on_level = {
        let query = query.clone();
        Callback::from(move |level: String| query.set(query.with_level(level)))
    };
    let on_sort = {
        let query = query.clone();
        Callback::from(move |descending: bool| query.set(query.with_sort(SortOrder::from_flag(descending))))
    };
    let on_page = {
        let query = query.clone();
        Callback::from(move |page: u32| query.set(query.with_page(page)))
    };

    let (grid, pagination) = match model {
        AssignmentGridModel::Loading { skeletons } => (html! { <AssignmentsSkeleton count={skeletons} /> }, None),
        AssignmentGridModel::Loaded { cards, pagination } => (
            html! {
                for cards.into_iter().map(|assignment| {
                    let key = assignment.id.clone();
                    html! { <AssignmentCard key={key} assignment={assignment} /> }
                })
            },
            pagination,
        ),
    };

    html! {
        <section class="assignments-layout">
            <FilterPanel
                level={query.level.clone()}
                descending={query.sort.is_descending()}
                on_level={on_level}
                on_sort={on_sort}
            />
            <div class="assignments-main">
                <div class="assignments-grid">{grid}</div>
                if let Some(model) = pagination {
                    <Pagination model={model} on_select={on_page} />
                }
            </div>
        </section>
    }
}
