use std::ops::Range;
use std::sync::Arc;

use serde::Serialize;

use crate::asset::AssetUrls;
use crate::error::PickerError;
use crate::filter::{FilterState, SourceFilter};
use crate::icon::IconMeta;
use crate::pagination::Paginator;
use crate::style::StyleOptions;
use crate::trigger::OneShot;

/// Icons appended per infinite-scroll page.
pub const DEFAULT_PAGE_SIZE: usize = 60;

/// Whether the catalog has been installed yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadStatus {
    Loading,
    Ready,
}

/// One displayed entry of the filtered view.
#[derive(Debug, Clone)]
pub struct RenderedCell {
    /// Position in the filtered view.
    pub position: usize,
    trigger: OneShot,
    preview: Option<Arc<str>>,
}

impl RenderedCell {
    fn new(position: usize) -> Self {
        Self {
            position,
            trigger: OneShot::armed(),
            preview: None,
        }
    }

    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    /// True once the lazy-load trigger has fired, whatever the fetch outcome.
    pub fn preview_requested(&self) -> bool {
        !self.trigger.is_armed()
    }
}

/// A preview fetch to perform for a cell that became visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewRequest {
    pub position: usize,
    /// Render generation the request belongs to; stale results are dropped.
    pub generation: u64,
    pub url: String,
}

/// All picker UI state, owned explicitly rather than held in globals.
///
/// Every filter change recomputes the filtered view from scratch, resets
/// pagination, rebuilds the rendered cells and clears the selection.
#[derive(Debug, Clone)]
pub struct PickerState {
    catalog: Vec<IconMeta>,
    filter: FilterState,
    filtered: Vec<usize>,
    pager: Paginator,
    cells: Vec<RenderedCell>,
    selection: Option<usize>,
    urls: AssetUrls,
    generation: u64,
    status: LoadStatus,
}

impl PickerState {
    pub fn new(urls: AssetUrls, page_size: usize) -> Self {
        Self {
            catalog: Vec::new(),
            filter: FilterState::default(),
            filtered: Vec::new(),
            pager: Paginator::new(page_size),
            cells: Vec::new(),
            selection: None,
            urls,
            generation: 0,
            status: LoadStatus::Loading,
        }
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn catalog(&self) -> &[IconMeta] {
        &self.catalog
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn page_size(&self) -> usize {
        self.pager.page_size()
    }

    /// Replace the catalog (once per session) and render the first page.
    pub fn install_catalog(&mut self, icons: Vec<IconMeta>) {
        self.catalog = icons;
        self.status = LoadStatus::Ready;
        self.apply_filters();
    }

    /// Set the search query from raw input; it is trimmed and lower-cased.
    pub fn set_query(&mut self, raw: &str) {
        self.filter.query = FilterState::normalize_query(raw);
        self.apply_filters();
    }

    pub fn set_source(&mut self, source: SourceFilter) {
        self.filter.source = source;
        self.apply_filters();
    }

    pub fn set_style(&mut self, style: StyleOptions) {
        self.filter.style = style;
        self.apply_filters();
    }

    /// Recompute the filtered view and start rendering it from the top.
    pub fn apply_filters(&mut self) {
        self.filtered = self.filter.apply(&self.catalog);
        self.generation += 1;
        self.pager.reset(self.filtered.len());
        self.cells.clear();
        self.selection = None;
        self.load_more();
    }

    /// Append the next page of cells. Returns how many were added.
    pub fn load_more(&mut self) -> usize {
        let range = self.pager.next_page();
        self.render(range)
    }

    /// The sentinel became visible. Loads a page only while it is armed.
    pub fn sentinel_visible(&mut self) -> usize {
        let range = self.pager.sentinel_visible();
        self.render(range)
    }

    fn render(&mut self, range: Range<usize>) -> usize {
        let added = range.len();
        self.cells.extend(range.map(RenderedCell::new));
        added
    }

    pub fn has_more(&self) -> bool {
        self.pager.has_more()
    }

    pub fn sentinel_armed(&self) -> bool {
        self.pager.sentinel_armed()
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Icons in the filtered view, in catalog order.
    pub fn filtered(&self) -> impl Iterator<Item = &IconMeta> {
        self.filtered.iter().map(|&i| &self.catalog[i])
    }

    pub fn displayed_count(&self) -> usize {
        self.cells.len()
    }

    /// Rendered cells paired with their icons.
    pub fn displayed(&self) -> impl Iterator<Item = (&RenderedCell, &IconMeta)> {
        self.cells
            .iter()
            .map(|cell| (cell, &self.catalog[self.filtered[cell.position]]))
    }

    /// Icon behind a rendered cell.
    pub fn icon_at(&self, position: usize) -> Result<&IconMeta, PickerError> {
        if position >= self.cells.len() {
            return Err(PickerError::UnknownCell(position));
        }
        Ok(&self.catalog[self.filtered[position]])
    }

    /// Asset URL for an icon under the current style options.
    pub fn asset_url(&self, icon: &IconMeta) -> String {
        self.urls.resolve(icon, &self.filter.style)
    }

    /// A cell came near the viewport. Yields a fetch request the first time
    /// only; the cell's trigger is detached afterwards.
    pub fn cell_visible(&mut self, position: usize) -> Result<Option<PreviewRequest>, PickerError> {
        let cell = self
            .cells
            .get_mut(position)
            .ok_or(PickerError::UnknownCell(position))?;
        if !cell.trigger.fire() {
            return Ok(None);
        }

        let icon = &self.catalog[self.filtered[position]];
        Ok(Some(PreviewRequest {
            position,
            generation: self.generation,
            url: self.urls.resolve(icon, &self.filter.style),
        }))
    }

    /// Store fetched markup in the requesting cell. Returns false if the
    /// view was re-rendered since the request was issued.
    pub fn fill_preview(&mut self, request: &PreviewRequest, svg: Arc<str>) -> bool {
        if request.generation != self.generation {
            return false;
        }
        match self.cells.get_mut(request.position) {
            Some(cell) => {
                cell.preview = Some(svg);
                true
            }
            None => false,
        }
    }

    /// Mark exactly one cell as selected.
    pub fn select(&mut self, position: usize) -> Result<&IconMeta, PickerError> {
        if position >= self.cells.len() {
            return Err(PickerError::UnknownCell(position));
        }
        self.selection = Some(position);
        Ok(&self.catalog[self.filtered[position]])
    }

    pub fn selected_position(&self) -> Option<usize> {
        self.selection
    }

    pub fn selection(&self) -> Option<&IconMeta> {
        self.selection.map(|p| &self.catalog[self.filtered[p]])
    }

    /// Selected icon and its asset URL, for insertion.
    pub fn selected_asset(&self) -> Result<(IconMeta, String), PickerError> {
        let icon = self.selection().ok_or(PickerError::NoSelection)?;
        Ok((icon.clone(), self.asset_url(icon)))
    }
}
