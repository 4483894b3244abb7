use serde::Serialize;

use iconpick_core::{
    IconMeta, IconSource, LoadStatus, PickerState, RenderedCell, SourceFilter, StyleOptions,
};

/// Which top-level view the panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelStatus {
    Loading,
    Ready,
    Empty,
}

/// Snapshot of everything the panel renders.
#[derive(Debug, Clone, Serialize)]
pub struct PanelView {
    pub status: PanelStatus,
    pub total: usize,
    pub filtered: usize,
    pub displayed: usize,
    pub has_more: bool,
    pub source: SourceFilter,
    pub query: String,
    pub style: StyleOptions,
    pub cells: Vec<CellView>,
    pub selection: Option<SelectionView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CellView {
    pub position: usize,
    pub name: String,
    pub display_name: String,
    pub source: IconSource,
    pub preview: Option<String>,
    pub preview_requested: bool,
}

/// Contents of the bottom action bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionView {
    pub position: usize,
    pub name: String,
    pub display_name: String,
    pub badge: &'static str,
}

impl SelectionView {
    pub fn new(position: usize, icon: &IconMeta) -> Self {
        Self {
            position,
            name: icon.name.clone(),
            display_name: icon.display_name(),
            badge: icon.source.badge(),
        }
    }
}

impl CellView {
    fn new(cell: &RenderedCell, icon: &IconMeta) -> Self {
        Self {
            position: cell.position,
            name: icon.name.clone(),
            display_name: icon.display_name(),
            source: icon.source,
            preview: cell.preview().map(str::to_string),
            preview_requested: cell.preview_requested(),
        }
    }
}

impl From<&PickerState> for PanelView {
    fn from(state: &PickerState) -> Self {
        let status = match state.status() {
            LoadStatus::Loading => PanelStatus::Loading,
            LoadStatus::Ready if state.filtered_len() == 0 => PanelStatus::Empty,
            LoadStatus::Ready => PanelStatus::Ready,
        };
        let filter = state.filter();

        PanelView {
            status,
            total: state.catalog().len(),
            filtered: state.filtered_len(),
            displayed: state.displayed_count(),
            has_more: state.has_more(),
            source: filter.source,
            query: filter.query.clone(),
            style: filter.style,
            cells: state
                .displayed()
                .map(|(cell, icon)| CellView::new(cell, icon))
                .collect(),
            selection: state
                .selected_position()
                .zip(state.selection())
                .map(|(position, icon)| SelectionView::new(position, icon)),
        }
    }
}
