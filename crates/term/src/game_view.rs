//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top to bottom inside the frame: the three windows (depth 0), the
//! fall rows, then the net row where the player stands. Each lane is
//! `lane_w` columns wide and each depth row is `row_h` terminal rows tall.

use crate::core::{ActorSnapshot, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{RunPhase, GRID_H, LANES, MAX_MISSES};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Adapter-owned state shown in the side panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HudStatus {
    pub sound_enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Screen position of the board frame for a viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardRect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

/// Shake at or above this intensity nudges the board one column.
const SHAKE_NUDGE: u8 = 50;

const LCD_BG: Rgb = Rgb::new(18, 20, 16);
const BOARD_BG: Rgb = Rgb::new(168, 176, 150);
const INK: Rgb = Rgb::new(25, 25, 25);

/// A lightweight terminal renderer for the lane-catch game.
pub struct GameView {
    lane_w: u16,
    row_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            lane_w: 7,
            row_h: 2,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(lane_w: u16, row_h: u16) -> Self {
        Self {
            lane_w: lane_w.max(5),
            row_h: row_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Where the (unshaken) board frame lands in `viewport`.
    pub fn board_rect(&self, viewport: Viewport) -> BoardRect {
        let w = (LANES as u16) * self.lane_w + 2;
        let h = (GRID_H as u16) * self.row_h + 1 + 2;
        let x = viewport.width.saturating_sub(w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h) / 2,
            AnchorY::Top => 0,
        };
        BoardRect { x, y, w, h }
    }

    /// Column dividing left-half from right-half pointer presses.
    pub fn board_split_x(&self, viewport: Viewport) -> u16 {
        let rect = self.board_rect(viewport);
        rect.x + rect.w / 2
    }

    /// Render into an existing framebuffer (allocation-free hot path).
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        self.render_into_with_status(snap, None, viewport, fb);
    }

    pub fn render_into_with_status(
        &self,
        snap: &GameSnapshot,
        status: Option<&HudStatus>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let mut rect = self.board_rect(viewport);
        if snap.shake >= SHAKE_NUDGE && rect.x + rect.w < viewport.width {
            rect.x += 1;
        }

        let board = CellStyle::colors(INK, BOARD_BG);
        let border = CellStyle::colors(BOARD_BG, LCD_BG);

        fb.fill_rect(rect.x + 1, rect.y + 1, rect.w - 2, rect.h - 2, ' ', board);
        self.draw_border(fb, rect, border);

        self.draw_windows(fb, rect, board);
        self.draw_guides(fb, rect, board.dim());
        for actor in snap.alive_actors() {
            self.draw_jumper(fb, rect, actor, board.bold());
        }
        self.draw_net(fb, rect, snap.player_pos, board.bold());

        self.draw_side_panel(fb, snap, status, viewport, rect);

        match snap.phase {
            RunPhase::NotStarted => self.draw_overlay_text(fb, rect, "PRESS ENTER", None),
            RunPhase::Paused => self.draw_overlay_text(fb, rect, "PAUSED", None),
            RunPhase::GameOver => self.draw_overlay_text(fb, rect, "GAME OVER", Some("R TO RESET")),
            RunPhase::Running => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    pub fn render_with_status(
        &self,
        snap: &GameSnapshot,
        status: Option<&HudStatus>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into_with_status(snap, status, viewport, &mut fb);
        fb
    }

    fn lane_x(&self, rect: BoardRect, lane: u8) -> u16 {
        rect.x + 1 + (lane as u16) * self.lane_w
    }

    fn depth_y(&self, rect: BoardRect, depth: u8) -> u16 {
        rect.y + 1 + (depth as u16) * self.row_h
    }

    /// Put `s` centered in `lane` on row `y`.
    fn put_in_lane(&self, fb: &mut FrameBuffer, rect: BoardRect, lane: u8, y: u16, s: &str, style: CellStyle) {
        let len = s.chars().count() as u16;
        let x = self.lane_x(rect, lane) + self.lane_w.saturating_sub(len) / 2;
        fb.put_str(x, y, s, style);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, rect: BoardRect, style: CellStyle) {
        let BoardRect { x, y, w, h } = rect;
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_windows(&self, fb: &mut FrameBuffer, rect: BoardRect, style: CellStyle) {
        let y = self.depth_y(rect, 0);
        for lane in 0..LANES {
            self.put_in_lane(fb, rect, lane, y, "[   ]", style);
        }
    }

    fn draw_guides(&self, fb: &mut FrameBuffer, rect: BoardRect, style: CellStyle) {
        for depth in 1..GRID_H {
            let y = self.depth_y(rect, depth);
            for lane in 0..LANES {
                self.put_in_lane(fb, rect, lane, y, "·", style);
            }
        }
    }

    fn draw_jumper(&self, fb: &mut FrameBuffer, rect: BoardRect, actor: &ActorSnapshot, style: CellStyle) {
        let glyph = if actor.hanging { "\\o/" } else { "-o-" };
        let y = self.depth_y(rect, actor.depth);
        self.put_in_lane(fb, rect, actor.lane, y, glyph, style);
    }

    fn draw_net(&self, fb: &mut FrameBuffer, rect: BoardRect, lane: u8, style: CellStyle) {
        let y = rect.y + rect.h - 2;
        self.put_in_lane(fb, rect, lane.min(LANES - 1), y, "\\___/", style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        status: Option<&HudStatus>,
        viewport: Viewport,
        rect: BoardRect,
    ) {
        let panel_x = rect.x.saturating_add(rect.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::default();

        let mut y = rect.y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "HIGH", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.high_score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "MISS", label);
        y = y.saturating_add(1);
        for i in 0..MAX_MISSES {
            let ch = if i < snap.misses { 'X' } else { '-' };
            fb.put_char(panel_x + (i as u16) * 2, y, ch, value);
        }
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "GAME", label);
        fb.put_str(panel_x + 5, y, snap.mode.as_str(), value);
        y = y.saturating_add(2);

        if snap.combo >= 2 {
            fb.put_str(panel_x, y, "COMBO x", label);
            fb.put_u32(panel_x + 7, y, snap.combo, value);
        }
        y = y.saturating_add(2);

        if let Some(st) = status {
            fb.put_str(panel_x, y, "SOUND", label);
            fb.put_str(panel_x + 6, y, if st.sound_enabled { "ON" } else { "OFF" }, value);
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, rect: BoardRect, text: &str, sub: Option<&str>) {
        let style = CellStyle::colors(Rgb::new(255, 255, 255), INK).bold();
        let mid_y = rect.y.saturating_add(rect.h / 2);
        let mut put_centered = |y: u16, s: &str| {
            let w = s.chars().count() as u16;
            let x = rect.x.saturating_add(rect.w.saturating_sub(w) / 2);
            fb.put_str(x, y, s, style);
        };
        put_centered(mid_y, text);
        if let Some(sub) = sub {
            put_centered(mid_y.saturating_add(1), sub);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ActorSnapshot;

    #[test]
    fn board_rect_matches_geometry() {
        let view = GameView::default();
        let rect = view.board_rect(Viewport::new(23, 15));
        assert_eq!(rect, BoardRect { x: 0, y: 0, w: 23, h: 15 });
        assert_eq!(view.board_split_x(Viewport::new(23, 15)), 11);
    }

    #[test]
    fn hanging_and_falling_jumpers_differ() {
        let view = GameView::default();
        let mut snap = GameSnapshot::default();
        snap.phase = RunPhase::Running;
        snap.actors[0] = Some(ActorSnapshot {
            id: 1,
            lane: 0,
            depth: 0,
            hanging: true,
        });
        snap.actors[1] = Some(ActorSnapshot {
            id: 2,
            lane: 2,
            depth: 3,
            hanging: false,
        });
        let fb = view.render(&snap, Viewport::new(23, 15));

        assert!(fb.row_text(1).contains("\\o/"));
        assert!(fb.row_text(1 + 3 * 2).contains("-o-"));
    }
}
