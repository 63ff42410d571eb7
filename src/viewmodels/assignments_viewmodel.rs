// ============================================================================
// ASSIGNMENTS VIEWMODEL - Qué pinta la rejilla del catálogo
// ============================================================================
// Función pura del estado de la petición: el componente solo renderiza
// ============================================================================

use crate::models::{Assignment, AssignmentPage, AssignmentQuery};
use crate::state::QueryState;

/// Paginación derivada de `count` y del tamaño de página
#[derive(Clone, Debug, PartialEq)]
pub struct PaginationModel {
    pub count: u64,
    pub offset: u32,
    pub current: u32,
}

impl PaginationModel {
    pub fn page_count(&self) -> u32 {
        if self.offset == 0 {
            return 0;
        }
        let pages = (self.count + u64::from(self.offset) - 1) / u64::from(self.offset);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    pub fn pages(&self) -> Vec<u32> {
        (1..=self.page_count()).collect()
    }

    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.page_count()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum AssignmentGridModel {
    Loading { skeletons: usize },
    Loaded {
        cards: Vec<Assignment>,
        pagination: Option<PaginationModel>,
    },
}

impl AssignmentGridModel {
    pub fn cards(&self) -> &[Assignment] {
        match self {
            AssignmentGridModel::Loaded { cards, .. } => cards,
            AssignmentGridModel::Loading { .. } => &[],
        }
    }
}

pub fn grid_model(
    state: &QueryState<AssignmentPage>,
    query: &AssignmentQuery,
    skeletons: usize,
) -> AssignmentGridModel {
    match state {
        QueryState::Loading => AssignmentGridModel::Loading { skeletons },
        QueryState::Success(page) => AssignmentGridModel::Loaded {
            cards: page.result.clone(),
            pagination: (page.count > 0).then(|| PaginationModel {
                count: page.count,
                offset: query.offset,
                current: query.page,
            }),
        },
        // Sin reintento: un fallo se pinta como resultado vacío
        QueryState::Error(e) => {
            log::error!("❌ [ASSIGNMENTS] {} falló: {}", query.to_path(), e);
            AssignmentGridModel::Loaded {
                cards: Vec::new(),
                pagination: None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Creator;
    use crate::services::ApiError;
    use std::rc::Rc;

    fn assignment(n: usize) -> Assignment {
        Assignment {
            id: format!("a{}", n),
            title: format!("Tarea {}", n),
            description: String::new(),
            marks: 10,
            thumbnail: String::new(),
            level: "easy".into(),
            due_date: "2024-03-12".into(),
            creator: Creator::default(),
        }
    }

    #[test]
    fn loading_shows_skeletons() {
        let model = grid_model(&QueryState::Loading, &AssignmentQuery::default(), 6);
        assert_eq!(model, AssignmentGridModel::Loading { skeletons: 6 });
        assert!(model.cards().is_empty());
    }

    #[test]
    fn empty_page_has_no_cards_and_no_pagination() {
        let state = QueryState::Success(Rc::new(AssignmentPage {
            count: 0,
            result: vec![],
        }));
        let model = grid_model(&state, &AssignmentQuery::default(), 6);
        assert_eq!(
            model,
            AssignmentGridModel::Loaded {
                cards: vec![],
                pagination: None
            }
        );
    }

    #[test]
    fn full_page_paginates_by_offset() {
        let state = QueryState::Success(Rc::new(AssignmentPage {
            count: 27,
            result: (0..9).map(assignment).collect(),
        }));
        let model = grid_model(&state, &AssignmentQuery::new(9), 6);

        let AssignmentGridModel::Loaded { cards, pagination } = model else {
            panic!("expected loaded grid");
        };
        assert_eq!(cards.len(), 9);
        let pagination = pagination.unwrap();
        assert_eq!(pagination.count, 27);
        assert_eq!(pagination.offset, 9);
        assert_eq!(pagination.page_count(), 3);
        assert_eq!(pagination.pages(), vec![1, 2, 3]);
    }

    #[test]
    fn failed_fetch_renders_empty() {
        let state = QueryState::Error(ApiError::Network("offline".into()));
        let model = grid_model(&state, &AssignmentQuery::default(), 6);
        assert!(model.cards().is_empty());
        assert!(matches!(model, AssignmentGridModel::Loaded { pagination: None, .. }));
    }

    #[test]
    fn partial_last_page_rounds_up() {
        let pagination = PaginationModel {
            count: 10,
            offset: 9,
            current: 2,
        };
        assert_eq!(pagination.page_count(), 2);
        assert!(pagination.has_previous());
        assert!(!pagination.has_next());
    }
}
