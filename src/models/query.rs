// ============================================================================
// ASSIGNMENT QUERY - Estado de filtro/orden/página del catálogo
// ============================================================================
// Es a la vez la clave de caché y la fuente de los parámetros de la URL
// ============================================================================

/// Tamaño de página por defecto (`offset` en la API)
pub const DEFAULT_PAGE_SIZE: u32 = 9;

/// Convención del servidor: "1" ascendente, "-1" descendente
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// El toggle de la UI: marcado = descendente
    pub fn from_flag(descending: bool) -> Self {
        if descending {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        }
    }

    pub fn is_descending(&self) -> bool {
        matches!(self, SortOrder::Descending)
    }

    pub fn as_param(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "1",
            SortOrder::Descending => "-1",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AssignmentQuery {
    /// Nivel a filtrar; vacío = sin filtro
    pub level: String,
    pub sort: SortOrder,
    /// Página actual, empieza en 1
    pub page: u32,
    /// Tamaño fijo de página
    pub offset: u32,
}

impl AssignmentQuery {
    pub fn new(offset: u32) -> Self {
        Self {
            level: String::new(),
            sort: SortOrder::Ascending,
            page: 1,
            offset: offset.max(1),
        }
    }

    // Cambiar filtro u orden conserva la página actual
    pub fn with_level(&self, level: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            ..self.clone()
        }
    }

    pub fn with_sort(&self, sort: SortOrder) -> Self {
        Self {
            sort,
            ..self.clone()
        }
    }

    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page: page.max(1),
            ..self.clone()
        }
    }

    /// Parámetros en el orden que espera el backend
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("level", self.level.clone()),
            ("sequence", self.sort.as_param().to_string()),
            ("page", self.page.to_string()),
            ("offset", self.offset.to_string()),
        ]
    }

    /// Ruta relativa completa, útil para logs
    pub fn to_path(&self) -> String {
        let params: Vec<String> = self
            .to_query_pairs()
            .into_iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect();
        format!("/assignments?{}", params.join("&"))
    }
}

impl Default for AssignmentQuery {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param<'a>(pairs: &'a [(&'static str, String)], key: &str) -> &'a str {
        pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
            .unwrap_or_default()
    }

    #[test]
    fn default_query_matches_first_catalog_request() {
        assert_eq!(
            AssignmentQuery::default().to_path(),
            "/assignments?level=&sequence=1&page=1&offset=9"
        );
    }

    #[test]
    fn sort_flag_maps_to_server_convention() {
        assert_eq!(SortOrder::from_flag(false).as_param(), "1");
        assert_eq!(SortOrder::from_flag(true).as_param(), "-1");

        let query = AssignmentQuery::default().with_sort(SortOrder::from_flag(true));
        assert_eq!(param(&query.to_query_pairs(), "sequence"), "-1");
    }

    #[test]
    fn changing_page_keeps_filter_and_sort() {
        let base = AssignmentQuery::default()
            .with_level("hard")
            .with_sort(SortOrder::Descending);
        let next = base.with_page(3);

        let before = base.to_query_pairs();
        let after = next.to_query_pairs();
        assert_eq!(param(&before, "level"), param(&after, "level"));
        assert_eq!(param(&before, "sequence"), param(&after, "sequence"));
        assert_eq!(param(&after, "page"), "3");
        assert_ne!(base, next);
    }

    #[test]
    fn changing_filter_or_sort_keeps_page() {
        let on_page_two = AssignmentQuery::default().with_page(2);
        assert_eq!(on_page_two.with_level("easy").page, 2);
        assert_eq!(on_page_two.with_sort(SortOrder::Descending).page, 2);
    }

    #[test]
    fn page_and_offset_never_drop_below_one() {
        assert_eq!(AssignmentQuery::default().with_page(0).page, 1);
        assert_eq!(AssignmentQuery::new(0).offset, 1);
    }
}
