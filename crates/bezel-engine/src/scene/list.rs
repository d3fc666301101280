use crate::coords::Rect;
use crate::geometry::{ClosedPath, Segment};
use crate::paint::{Paint, Stroke};

use super::shapes::fill::{FillCmd, FillShape};
use super::shapes::stroke::{StrokeCmd, StrokeShape};
use super::shapes::text::{TextCmd, TextRun};
use super::{DrawCmd, PenId, SortKey, Surface, SurfaceError, ZIndex};

/// A single draw item: sort key, command and the exclusion regions active
/// when it was recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
    /// Areas the command must leave untouched. Empty = draw everywhere.
    pub excluded: Vec<Rect>,
}

impl DrawItem {
    /// True when `rect` lies fully inside one of the exclusion regions.
    pub fn is_excluded(&self, rect: Rect) -> bool {
        self.excluded.iter().any(|ex| ex.contains_rect(rect))
    }
}

/// Recording [`Surface`]: keeps every command for later tessellation or
/// inspection.
///
/// Performance characteristics:
/// - recording is O(1) per command (plus a clone of the geometry)
/// - paint-order iteration reuses an internal index buffer; no per-frame allocation once warmed
///
/// # Pens
///
/// Pens live in a slot table; released slots are reused. [`live_pens`]
/// reports how many are still held, which must be zero between draw calls.
///
/// [`live_pens`]: Self::live_pens
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,

    pens: Vec<Option<Stroke>>,
    exclusion_stack: Vec<Rect>,
    layer_offset: i32,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items, pens and exclusions. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_dirty = true;
        self.sorted_indices.clear();
        self.pens.clear();
        self.exclusion_stack.clear();
        self.layer_offset = 0;
    }

    /// Returns items in recording order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pens acquired and not yet released.
    pub fn live_pens(&self) -> usize {
        self.pens.iter().filter(|p| p.is_some()).count()
    }

    #[inline]
    pub fn exclusion_depth(&self) -> usize {
        self.exclusion_stack.len()
    }

    /// Shifts the layers of subsequently recorded commands, so a later item
    /// can be stacked above an earlier one.
    #[inline]
    pub fn set_layer_offset(&mut self, offset: i32) {
        self.layer_offset = offset;
    }

    /// Records a command on layer `z` (plus the current layer offset).
    ///
    /// The item inherits the exclusion regions currently pushed.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem {
            key: SortKey::new(z.offset(self.layer_offset), order),
            cmd,
            excluded: self.exclusion_stack.clone(),
        });

        self.sorted_dirty = true;
    }

    /// Returns indices into `items` in paint order (back-to-front).
    ///
    /// This buffer is owned by `DrawList` and reused across frames.
    pub fn indices_in_paint_order(&mut self) -> &[usize] {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }
        &self.sorted_indices
    }

    /// Iterates items in paint order without cloning draw commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    /// Recorded strokes in recording order.
    pub fn strokes(&self) -> impl Iterator<Item = &StrokeCmd> {
        self.items.iter().filter_map(|item| item.cmd.as_stroke())
    }

    /// Recorded fills in recording order.
    pub fn fills(&self) -> impl Iterator<Item = &FillCmd> {
        self.items.iter().filter_map(|item| item.cmd.as_fill())
    }

    /// Recorded text runs in recording order.
    pub fn texts(&self) -> impl Iterator<Item = &TextCmd> {
        self.items.iter().filter_map(|item| item.cmd.as_text())
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        // Stable ordering is ensured by SortKey including recording order.
        self.sorted_indices
            .sort_by(|&a, &b| self.items[a].key.cmp(&self.items[b].key));

        self.sorted_dirty = false;
    }

    fn pen(&self, pen: PenId) -> Result<Stroke, SurfaceError> {
        self.pens
            .get(pen.0 as usize)
            .and_then(Option::as_ref)
            .cloned()
            .ok_or(SurfaceError::PenUnavailable)
    }
}

impl Surface for DrawList {
    fn acquire_pen(&mut self, stroke: &Stroke) -> Result<PenId, SurfaceError> {
        let slot = match self.pens.iter().position(Option::is_none) {
            Some(free) => {
                self.pens[free] = Some(stroke.clone());
                free
            }
            None => {
                self.pens.push(Some(stroke.clone()));
                self.pens.len() - 1
            }
        };
        Ok(PenId(slot as u32))
    }

    fn release_pen(&mut self, pen: PenId) {
        match self.pens.get_mut(pen.0 as usize) {
            Some(slot) if slot.is_some() => *slot = None,
            _ => log::warn!("release of unknown pen {:?}", pen),
        }
    }

    fn stroke_path(&mut self, pen: PenId, path: &ClosedPath) -> Result<(), SurfaceError> {
        let stroke = self.pen(pen)?;
        self.push(ZIndex::BORDER, DrawCmd::Stroke(StrokeCmd::new(StrokeShape::Path(path.clone()), stroke)));
        Ok(())
    }

    fn stroke_segment(&mut self, pen: PenId, segment: &Segment) -> Result<(), SurfaceError> {
        let stroke = self.pen(pen)?;
        self.push(ZIndex::BORDER, DrawCmd::Stroke(StrokeCmd::new(StrokeShape::Segment(*segment), stroke)));
        Ok(())
    }

    fn fill_path(&mut self, paint: &Paint, path: &ClosedPath) -> Result<(), SurfaceError> {
        self.push(ZIndex::FILL, DrawCmd::Fill(FillCmd::new(FillShape::Path(path.clone()), paint.clone())));
        Ok(())
    }

    fn fill_rect(&mut self, paint: &Paint, rect: Rect) -> Result<(), SurfaceError> {
        self.push(ZIndex::FILL, DrawCmd::Fill(FillCmd::new(FillShape::Rect(rect), paint.clone())));
        Ok(())
    }

    fn draw_text(&mut self, run: &TextRun<'_>) -> Result<(), SurfaceError> {
        self.push(ZIndex::TEXT, DrawCmd::Text(TextCmd::from(run)));
        Ok(())
    }

    fn push_exclusion(&mut self, rect: Rect) {
        self.exclusion_stack.push(rect);
    }

    /// # Panics
    /// Panics (debug only) if called without a matching `push_exclusion`.
    fn pop_exclusion(&mut self) {
        debug_assert!(!self.exclusion_stack.is_empty(), "pop_exclusion called without matching push_exclusion");
        self.exclusion_stack.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Argb;

    fn line() -> Segment {
        Segment::line(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0))
    }

    fn black() -> Stroke {
        Stroke::solid(Argb::rgb(0, 0, 0))
    }

    // ── paint order ───────────────────────────────────────────────────────

    #[test]
    fn fills_paint_below_strokes_regardless_of_order() {
        let mut list = DrawList::new();
        let pen = list.acquire_pen(&black()).unwrap();
        list.stroke_segment(pen, &line()).unwrap();
        list.release_pen(pen);
        list.fill_rect(&Paint::Solid(Argb::rgb(1, 1, 1)), Rect::new(0.0, 0.0, 5.0, 5.0)).unwrap();

        let order: Vec<bool> = list.iter_in_paint_order().map(|i| i.cmd.as_fill().is_some()).collect();
        assert_eq!(order, [true, false]);
    }

    #[test]
    fn equal_layers_keep_recording_order() {
        let mut list = DrawList::new();
        for x in 0..3 {
            list.fill_rect(&Paint::Solid(Argb::rgb(x, 0, 0)), Rect::new(0.0, 0.0, 1.0, 1.0)).unwrap();
        }
        let reds: Vec<u8> = list
            .iter_in_paint_order()
            .filter_map(|i| i.cmd.as_fill())
            .map(|f| match f.paint {
                Paint::Solid(c) => c.r,
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(reds, [0, 1, 2]);
    }

    #[test]
    fn layer_offset_stacks_later_items() {
        let mut list = DrawList::new();
        list.set_layer_offset(100);
        list.fill_rect(&Paint::Solid(Argb::rgb(9, 0, 0)), Rect::new(0.0, 0.0, 1.0, 1.0)).unwrap();
        list.set_layer_offset(0);
        list.draw_text(&TextRun {
            text: "x",
            rect: Rect::new(0.0, 0.0, 1.0, 1.0),
            style: &Default::default(),
            color: Argb::rgb(0, 0, 0),
        })
        .unwrap();
        let first = list.indices_in_paint_order()[0];
        assert_eq!(first, 1);
    }

    // ── pens ──────────────────────────────────────────────────────────────

    #[test]
    fn pen_slots_are_reused() {
        let mut list = DrawList::new();
        let a = list.acquire_pen(&black()).unwrap();
        let b = list.acquire_pen(&black()).unwrap();
        assert_ne!(a, b);
        list.release_pen(a);
        assert_eq!(list.live_pens(), 1);
        assert_eq!(list.acquire_pen(&black()).unwrap(), a);
    }

    #[test]
    fn released_pen_cannot_stroke() {
        let mut list = DrawList::new();
        let pen = list.acquire_pen(&black()).unwrap();
        list.release_pen(pen);
        assert_eq!(list.stroke_segment(pen, &line()), Err(SurfaceError::PenUnavailable));
        assert!(list.is_empty());
    }

    #[test]
    fn stroke_records_pen_style() {
        let mut list = DrawList::new();
        let pen = list.acquire_pen(&Stroke::solid(Argb::rgb(7, 8, 9))).unwrap();
        list.stroke_segment(pen, &line()).unwrap();
        let stroke = list.strokes().next().unwrap();
        assert_eq!(stroke.stroke.paint, Paint::Solid(Argb::rgb(7, 8, 9)));
        assert_eq!(stroke.length(), 10.0);
    }

    // ── exclusions ────────────────────────────────────────────────────────

    #[test]
    fn items_capture_active_exclusions() {
        let mut list = DrawList::new();
        let ex = Rect::new(2.0, 2.0, 4.0, 4.0);
        list.push_exclusion(ex);
        list.fill_rect(&Paint::Solid(Argb::rgb(0, 0, 0)), Rect::new(0.0, 0.0, 10.0, 10.0)).unwrap();
        list.pop_exclusion();
        list.fill_rect(&Paint::Solid(Argb::rgb(0, 0, 0)), Rect::new(0.0, 0.0, 10.0, 10.0)).unwrap();

        assert_eq!(list.items()[0].excluded, [ex]);
        assert!(list.items()[0].is_excluded(Rect::new(3.0, 3.0, 1.0, 1.0)));
        assert!(list.items()[1].excluded.is_empty());
    }

    #[test]
    fn clear_resets_everything() {
        let mut list = DrawList::new();
        list.acquire_pen(&black()).unwrap();
        list.push_exclusion(Rect::new(0.0, 0.0, 1.0, 1.0));
        list.fill_rect(&Paint::Solid(Argb::rgb(0, 0, 0)), Rect::new(0.0, 0.0, 1.0, 1.0)).unwrap();
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.live_pens(), 0);
        assert_eq!(list.exclusion_depth(), 0);
    }
}
