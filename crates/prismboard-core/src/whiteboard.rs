//! Whiteboard controller: pointer interaction state machine.
//!
//! The controller owns the committed shapes, the shape currently being
//! drawn and the current selection. Every handler runs synchronously inside
//! the host's event callback and, when it changes anything, presents a fresh
//! [`RenderFrame`] to the supplied [`RenderSink`].

use crate::canvas::CanvasDocument;
use crate::input::PointerEvent;
use crate::render::{RenderFrame, RenderSink};
use crate::shapes::{Shape, ShapeId};
use crate::surface::{CoordinateSpace, SurfaceFrame};
use crate::tools::ToolKind;
use kurbo::{Point, Vec2};

/// Tolerance used when resolving which shape a press landed on.
pub const HIT_TOLERANCE: f64 = 0.0;

/// Coarse interaction state derived from the controller fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionState {
    Idle,
    Drawing,
    Selected,
}

/// What a handler did with an event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    /// An active selection was cleared by a press.
    Deselected(ShapeId),
    /// A provisional shape was created.
    DrawStarted(ShapeId),
    /// The provisional shape's extent changed.
    DrawUpdated(ShapeId),
    /// The provisional shape was appended to the shape list.
    Committed(ShapeId),
    /// A committed shape was selected for dragging.
    Selected(ShapeId),
    /// The selected shape moved by `delta`.
    Dragged { id: ShapeId, delta: Vec2 },
    /// The drag ended and the selection was cleared.
    Released(ShapeId),
    /// Nothing to do; no frame is presented.
    Ignored,
}

/// Interactive whiteboard state.
#[derive(Debug, Clone, Default)]
pub struct Whiteboard {
    document: CanvasDocument,
    tool: ToolKind,
    drawing: bool,
    provisional: Option<Shape>,
    selected: Option<ShapeId>,
    drag_anchor: Option<Point>,
    surface: SurfaceFrame,
}

impl Whiteboard {
    /// Create an empty whiteboard with the rectangle tool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty whiteboard whose surface sits at `surface` inside the viewport.
    pub fn with_surface(surface: SurfaceFrame) -> Self {
        Self {
            surface,
            ..Self::default()
        }
    }

    pub fn tool(&self) -> ToolKind {
        self.tool
    }

    /// Set the tool used for the next shape. An in-progress draw or drag keeps going.
    pub fn set_tool(&mut self, tool: ToolKind) {
        if self.tool != tool {
            log::debug!("Tool changed: {:?} -> {:?}", self.tool, tool);
        }
        self.tool = tool;
    }

    pub fn surface(&self) -> &SurfaceFrame {
        &self.surface
    }

    pub fn document(&self) -> &CanvasDocument {
        &self.document
    }

    /// Committed shapes in z-order.
    pub fn shapes(&self) -> &[Shape] {
        self.document.shapes()
    }

    /// The shape being drawn, if any.
    pub fn provisional(&self) -> Option<&Shape> {
        self.provisional.as_ref()
    }

    pub fn selected(&self) -> Option<ShapeId> {
        self.selected
    }

    pub fn drag_anchor(&self) -> Option<Point> {
        self.drag_anchor
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    pub fn state(&self) -> InteractionState {
        if self.drawing {
            InteractionState::Drawing
        } else if self.selected.is_some() {
            InteractionState::Selected
        } else {
            InteractionState::Idle
        }
    }

    /// Topmost committed shape under a surface point.
    pub fn target_at(&self, point: Point) -> Option<ShapeId> {
        self.document.topmost_at(point, HIT_TOLERANCE)
    }

    /// Resolve the target of a press by hit testing, for hosts without their own picking.
    /// Other events and presses that already carry a target are returned unchanged.
    pub fn with_hit_target(&self, event: PointerEvent) -> PointerEvent {
        match event {
            PointerEvent::Down {
                position,
                space,
                target: None,
            } => PointerEvent::Down {
                position,
                space,
                target: self.target_at(self.surface.to_surface(position, space)),
            },
            other => other,
        }
    }

    /// Build the frame for the current state.
    pub fn render_frame(&self) -> RenderFrame {
        RenderFrame::build(
            self.document.shapes(),
            self.provisional.as_ref(),
            self.selected,
        )
    }

    /// Dispatch any pointer event to its handler.
    pub fn handle_pointer_event(
        &mut self,
        event: PointerEvent,
        sink: &mut dyn RenderSink,
    ) -> Transition {
        match event {
            PointerEvent::Down {
                position,
                space,
                target,
            } => self.pointer_down(position, space, target, sink),
            PointerEvent::Move { position, space } => self.pointer_move(position, space, sink),
            PointerEvent::Up { position, space } => self.pointer_up(position, space, sink),
        }
    }

    /// Handle a press on the surface or, with `target`, on a committed shape.
    /// Presses outside the drawing surface are ignored.
    pub fn pointer_down(
        &mut self,
        position: Point,
        space: CoordinateSpace,
        target: Option<ShapeId>,
        sink: &mut dyn RenderSink,
    ) -> Transition {
        let point = self.surface.to_surface(position, space);
        if !self.surface.contains(point) {
            log::trace!("Press outside the surface at ({}, {})", point.x, point.y);
            return Transition::Ignored;
        }

        // An active selection swallows the press.
        if let Some(id) = self.selected.take() {
            self.drag_anchor = None;
            log::debug!("Deselected {id}");
            return self.emit(Transition::Deselected(id), sink);
        }

        // A missed release leaves a provisional shape behind.
        if self.drawing {
            if let Some(discarded) = self.provisional.take() {
                log::debug!("Discarding unfinished shape {}", discarded.id());
            }
            self.drawing = false;
        }

        if let Some(id) = target.filter(|id| self.document.contains(*id)) {
            self.selected = Some(id);
            self.drag_anchor = Some(point);
            log::debug!("Selected {id} at ({}, {})", point.x, point.y);
            return self.emit(Transition::Selected(id), sink);
        }

        let shape = self.tool.begin_shape(point);
        let id = shape.id();
        self.provisional = Some(shape);
        self.drawing = true;
        log::debug!("Started {} {id} at ({}, {})", self.tool.label(), point.x, point.y);
        self.emit(Transition::DrawStarted(id), sink)
    }

    /// Handle pointer motion: extend the provisional shape or drag the selection.
    pub fn pointer_move(
        &mut self,
        position: Point,
        space: CoordinateSpace,
        sink: &mut dyn RenderSink,
    ) -> Transition {
        let point = self.surface.to_surface(position, space);
        let transition = self.track(point);
        self.emit(transition, sink)
    }

    /// Handle a release: commit the provisional shape or end the drag.
    ///
    /// The release position counts as one last move, so a release away from
    /// the previous move point still resizes the draft or drags the selection.
    pub fn pointer_up(
        &mut self,
        position: Point,
        space: CoordinateSpace,
        sink: &mut dyn RenderSink,
    ) -> Transition {
        let point = self.surface.to_surface(position, space);
        self.track(point);

        let transition = if let Some(shape) = self.provisional.take() {
            let id = shape.id();
            if self.document.add_shape(shape) {
                log::debug!("Committed {id} ({} shapes)", self.document.len());
                Transition::Committed(id)
            } else {
                Transition::Ignored
            }
        } else if let Some(id) = self.selected {
            log::debug!("Released {id}");
            Transition::Released(id)
        } else {
            Transition::Ignored
        };

        self.drawing = false;
        self.selected = None;
        self.drag_anchor = None;
        self.emit(transition, sink)
    }

    /// Apply a pointer position to the current gesture without presenting.
    fn track(&mut self, point: Point) -> Transition {
        if self.drawing {
            if let Some(shape) = self.provisional.as_mut() {
                shape.resize_to(point);
                log::trace!("Resized {} to ({}, {})", shape.id(), point.x, point.y);
                return Transition::DrawUpdated(shape.id());
            }
        }

        if let (Some(id), Some(anchor)) = (self.selected, self.drag_anchor) {
            let delta = point - anchor;
            if !self.document.translate_shape(id, delta) {
                log::warn!("Selected shape {id} is not on the board");
            }
            self.drag_anchor = Some(point);
            log::trace!("Dragged {id} by ({}, {})", delta.x, delta.y);
            return Transition::Dragged { id, delta };
        }

        Transition::Ignored
    }

    fn emit(&self, transition: Transition, sink: &mut dyn RenderSink) -> Transition {
        if transition != Transition::Ignored {
            sink.present(&self.render_frame());
        }
        transition
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{FrameRecorder, NullSink, Primitive};
    use crate::shapes::{Circle, Rectangle};
    use kurbo::Size;
    use std::collections::HashSet;

    fn draw(board: &mut Whiteboard, from: Point, to: Point) -> Transition {
        let mut sink = NullSink;
        board.handle_pointer_event(PointerEvent::down(from), &mut sink);
        board.handle_pointer_event(PointerEvent::moved(to), &mut sink);
        board.handle_pointer_event(PointerEvent::up(to), &mut sink)
    }

    fn drag(board: &mut Whiteboard, id: ShapeId, from: Point, to: Point) {
        let mut sink = NullSink;
        board.handle_pointer_event(
            PointerEvent::down_on_shape(id, from).in_space(CoordinateSpace::Surface),
            &mut sink,
        );
        board.handle_pointer_event(PointerEvent::moved(to), &mut sink);
        board.handle_pointer_event(PointerEvent::up(to), &mut sink);
    }

    fn last_rect(board: &Whiteboard) -> &Rectangle {
        board.shapes().last().and_then(Shape::as_rectangle).unwrap()
    }

    fn last_circle(board: &Whiteboard) -> &Circle {
        board.shapes().last().and_then(Shape::as_circle).unwrap()
    }

    #[test]
    fn test_draw_rectangle_scenario() {
        let mut board = Whiteboard::new();
        let transition = draw(&mut board, Point::new(10.0, 10.0), Point::new(110.0, 60.0));

        assert!(matches!(transition, Transition::Committed(_)));
        assert_eq!(board.shapes().len(), 1);
        let rect = last_rect(&board);
        assert!((rect.x - 10.0).abs() < f64::EPSILON);
        assert!((rect.y - 10.0).abs() < f64::EPSILON);
        assert!((rect.width - 100.0).abs() < f64::EPSILON);
        assert!((rect.height - 50.0).abs() < f64::EPSILON);
        assert_eq!(board.state(), InteractionState::Idle);
        assert!(board.provisional().is_none());
    }

    #[test]
    fn test_draw_circle_scenario() {
        let mut board = Whiteboard::new();
        board.set_tool(ToolKind::Circle);
        draw(&mut board, Point::new(50.0, 50.0), Point::new(50.0, 80.0));

        let circle = last_circle(&board);
        assert!((circle.cx - 50.0).abs() < f64::EPSILON);
        assert!((circle.cy - 50.0).abs() < f64::EPSILON);
        assert!((circle.r - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rectangle_extent_for_many_gestures() {
        let points = [0.0, 12.5, 90.0, 410.0];
        for &x0 in &points {
            for &y0 in &points {
                for &x1 in &points {
                    for &y1 in &points {
                        let mut board = Whiteboard::new();
                        let mut sink = NullSink;
                        board.pointer_down(Point::new(x0, y0), CoordinateSpace::Surface, None, &mut sink);
                        // intermediate moves don't affect the final extent
                        board.pointer_move(Point::new(x1 * 2.0, y0), CoordinateSpace::Surface, &mut sink);
                        board.pointer_move(Point::new(x1, y1), CoordinateSpace::Surface, &mut sink);
                        board.pointer_up(Point::new(x1, y1), CoordinateSpace::Surface, &mut sink);

                        let rect = last_rect(&board);
                        assert_eq!((rect.x, rect.y), (x0, y0));
                        assert!((rect.width - (x1 - x0)).abs() < 1e-9);
                        assert!((rect.height - (y1 - y0)).abs() < 1e-9);
                    }
                }
            }
        }
    }

    #[test]
    fn test_circle_radius_for_many_gestures() {
        let points = [0.0, 12.5, 90.0, 410.0];
        for &x0 in &points {
            for &y0 in &points {
                for &x1 in &points {
                    for &y1 in &points {
                        let mut board = Whiteboard::new();
                        board.set_tool(ToolKind::Circle);
                        draw(&mut board, Point::new(x0, y0), Point::new(x1, y1));

                        let circle = last_circle(&board);
                        let expected = ((x1 - x0).powi(2) + (y1 - y0).powi(2)).sqrt();
                        assert_eq!((circle.cx, circle.cy), (x0, y0));
                        assert!((circle.r - expected).abs() < 1e-9);
                        assert!(circle.r >= 0.0);
                    }
                }
            }
        }
    }

    #[test]
    fn test_negative_extent_kept_until_render() {
        let mut board = Whiteboard::new();
        draw(&mut board, Point::new(100.0, 100.0), Point::new(40.0, 70.0));

        let rect = last_rect(&board);
        assert!((rect.width + 60.0).abs() < f64::EPSILON);
        assert!((rect.height + 30.0).abs() < f64::EPSILON);

        let frame = board.render_frame();
        match frame.instructions[0].primitive {
            Primitive::Rect(r) => {
                assert!((r.x0 - 40.0).abs() < f64::EPSILON);
                assert!((r.y0 - 70.0).abs() < f64::EPSILON);
                assert!((r.width() - 60.0).abs() < f64::EPSILON);
            }
            other => panic!("expected rect, got {other:?}"),
        }
    }

    #[test]
    fn test_select_drag_release_scenario() {
        let mut board = Whiteboard::new();
        draw(&mut board, Point::new(10.0, 10.0), Point::new(110.0, 60.0));
        board.set_tool(ToolKind::Circle);
        draw(&mut board, Point::new(300.0, 300.0), Point::new(320.0, 300.0));

        let a = board.shapes()[0].id();
        let other_before = board.shapes()[1].clone();

        drag(&mut board, a, Point::new(50.0, 30.0), Point::new(55.0, 25.0));

        assert_eq!(board.shapes().len(), 2);
        let rect = board.shapes()[0].as_rectangle().unwrap();
        assert!((rect.x - 15.0).abs() < f64::EPSILON);
        assert!((rect.y - 5.0).abs() < f64::EPSILON);
        assert!((rect.width - 100.0).abs() < f64::EPSILON);
        assert!((rect.height - 50.0).abs() < f64::EPSILON);
        assert_eq!(board.shapes()[1], other_before);
        assert!(board.selected().is_none());
        assert!(board.drag_anchor().is_none());
    }

    #[test]
    fn test_drag_accumulates_across_moves() {
        let mut board = Whiteboard::new();
        board.set_tool(ToolKind::Circle);
        draw(&mut board, Point::new(50.0, 50.0), Point::new(60.0, 50.0));
        let id = board.shapes()[0].id();

        let mut sink = NullSink;
        board.pointer_down(Point::new(50.0, 50.0), CoordinateSpace::Surface, Some(id), &mut sink);
        assert_eq!(board.state(), InteractionState::Selected);
        let first = board.pointer_move(Point::new(52.0, 53.0), CoordinateSpace::Surface, &mut sink);
        assert_eq!(first, Transition::Dragged { id, delta: Vec2::new(2.0, 3.0) });
        board.pointer_move(Point::new(60.0, 40.0), CoordinateSpace::Surface, &mut sink);
        assert_eq!(board.drag_anchor(), Some(Point::new(60.0, 40.0)));
        board.pointer_up(Point::new(60.0, 40.0), CoordinateSpace::Surface, &mut sink);

        let circle = last_circle(&board);
        assert!((circle.cx - 60.0).abs() < f64::EPSILON);
        assert!((circle.cy - 40.0).abs() < f64::EPSILON);
        assert!((circle.r - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_press_with_selection_only_deselects() {
        let mut board = Whiteboard::new();
        draw(&mut board, Point::new(0.0, 0.0), Point::new(100.0, 100.0));
        let id = board.shapes()[0].id();

        let mut sink = NullSink;
        board.pointer_down(Point::new(10.0, 10.0), CoordinateSpace::Surface, Some(id), &mut sink);
        // a second press arrives without a release in between
        let transition =
            board.pointer_down(Point::new(10.0, 10.0), CoordinateSpace::Surface, Some(id), &mut sink);

        assert_eq!(transition, Transition::Deselected(id));
        assert!(board.selected().is_none());
        assert!(board.provisional().is_none());
        assert!(!board.is_drawing());
        assert_eq!(board.state(), InteractionState::Idle);

        // a press on empty surface with selection active doesn't start a draw either
        board.pointer_down(Point::new(10.0, 10.0), CoordinateSpace::Surface, Some(id), &mut sink);
        let transition =
            board.pointer_down(Point::new(500.0, 500.0), CoordinateSpace::Surface, None, &mut sink);
        assert_eq!(transition, Transition::Deselected(id));
        assert!(board.provisional().is_none());
    }

    #[test]
    fn test_press_on_shape_wins_over_drawing() {
        let mut board = Whiteboard::new();
        draw(&mut board, Point::new(0.0, 0.0), Point::new(100.0, 100.0));
        let id = board.shapes()[0].id();

        let mut sink = NullSink;
        let transition =
            board.pointer_down(Point::new(20.0, 20.0), CoordinateSpace::Surface, Some(id), &mut sink);
        assert_eq!(transition, Transition::Selected(id));
        assert!(board.provisional().is_none());
        assert!(!board.is_drawing());
        assert_eq!(board.drag_anchor(), Some(Point::new(20.0, 20.0)));
    }

    #[test]
    fn test_unknown_target_starts_drawing() {
        let mut board = Whiteboard::new();
        let mut sink = NullSink;
        let transition = board.pointer_down(
            Point::new(5.0, 5.0),
            CoordinateSpace::Surface,
            Some(uuid::Uuid::new_v4()),
            &mut sink,
        );
        assert!(matches!(transition, Transition::DrawStarted(_)));
        assert!(board.selected().is_none());
    }

    #[test]
    fn test_repeated_press_keeps_single_provisional() {
        let mut board = Whiteboard::new();
        let mut sink = NullSink;
        board.pointer_down(Point::new(1.0, 1.0), CoordinateSpace::Surface, None, &mut sink);
        let first = board.provisional().map(Shape::id);
        board.pointer_down(Point::new(2.0, 2.0), CoordinateSpace::Surface, None, &mut sink);
        let second = board.provisional().map(Shape::id);

        assert!(first.is_some() && second.is_some());
        assert_ne!(first, second);
        assert!(board.shapes().is_empty());
        assert_eq!(board.render_frame().len(), 1);

        board.pointer_up(Point::new(2.0, 2.0), CoordinateSpace::Surface, &mut sink);
        assert_eq!(board.shapes().len(), 1);
    }

    #[test]
    fn test_targeted_press_after_missed_release_drops_draft() {
        let mut board = Whiteboard::new();
        draw(&mut board, Point::new(0.0, 0.0), Point::new(50.0, 50.0));
        let id = board.shapes()[0].id();

        let mut recorder = FrameRecorder::new();
        board.pointer_down(Point::new(200.0, 200.0), CoordinateSpace::Surface, None, &mut recorder);
        assert!(board.is_drawing());

        // press on the shape without releasing the draw first
        let transition =
            board.pointer_down(Point::new(10.0, 10.0), CoordinateSpace::Surface, Some(id), &mut recorder);
        assert_eq!(transition, Transition::Selected(id));
        assert_eq!(board.state(), InteractionState::Selected);
        assert!(!board.is_drawing());
        assert!(board.provisional().is_none());

        let frame = recorder.last().unwrap();
        assert_eq!(frame.len(), 1);
        assert!(frame.instructions[0].selected);

        let moved = board.pointer_move(Point::new(15.0, 20.0), CoordinateSpace::Surface, &mut recorder);
        assert_eq!(moved, Transition::Dragged { id, delta: Vec2::new(5.0, 10.0) });
        let rect = last_rect(&board);
        assert!((rect.x - 5.0).abs() < f64::EPSILON);
        assert!((rect.y - 10.0).abs() < f64::EPSILON);
        assert_eq!(board.shapes().len(), 1);
    }

    #[test]
    fn test_press_outside_surface_is_ignored() {
        let surface = SurfaceFrame::new(Vec2::new(0.0, 48.0), Size::new(800.0, 600.0));
        let mut board = Whiteboard::with_surface(surface);
        let mut recorder = FrameRecorder::new();
        let v = CoordinateSpace::Viewport;

        // inside the toolbar strip above the surface
        assert_eq!(board.pointer_down(Point::new(500.0, 20.0), v, None, &mut recorder), Transition::Ignored);
        assert_eq!(board.pointer_up(Point::new(600.0, 30.0), v, &mut recorder), Transition::Ignored);
        // past the right and bottom edges
        assert_eq!(board.pointer_down(Point::new(800.0, 100.0), v, None, &mut recorder), Transition::Ignored);
        assert_eq!(board.pointer_down(Point::new(100.0, 648.0), v, None, &mut recorder), Transition::Ignored);

        assert!(board.shapes().is_empty());
        assert!(board.provisional().is_none());
        assert!(recorder.frames.is_empty());

        // a draw that starts inside may leave the surface
        board.pointer_down(Point::new(700.0, 600.0), v, None, &mut recorder);
        board.pointer_up(Point::new(900.0, 700.0), v, &mut recorder);
        let rect = last_rect(&board);
        assert_eq!((rect.x, rect.y), (700.0, 552.0));
        assert_eq!((rect.width, rect.height), (200.0, 100.0));
    }

    #[test]
    fn test_release_position_is_final_drag_step() {
        let mut board = Whiteboard::new();
        draw(&mut board, Point::new(10.0, 10.0), Point::new(60.0, 60.0));
        let id = board.shapes()[0].id();

        let mut sink = NullSink;
        board.pointer_down(Point::new(20.0, 20.0), CoordinateSpace::Surface, Some(id), &mut sink);
        board.pointer_move(Point::new(25.0, 20.0), CoordinateSpace::Surface, &mut sink);
        let released = board.pointer_up(Point::new(25.0, 30.0), CoordinateSpace::Surface, &mut sink);

        assert_eq!(released, Transition::Released(id));
        let rect = last_rect(&board);
        assert!((rect.x - 15.0).abs() < f64::EPSILON);
        assert!((rect.y - 20.0).abs() < f64::EPSILON);
        assert!(board.selected().is_none());
    }

    #[test]
    fn test_tool_switch_mid_draw() {
        let mut board = Whiteboard::new();
        let mut sink = NullSink;
        board.pointer_down(Point::new(0.0, 0.0), CoordinateSpace::Surface, None, &mut sink);
        board.set_tool(ToolKind::Circle);
        board.pointer_move(Point::new(30.0, 40.0), CoordinateSpace::Surface, &mut sink);
        board.pointer_up(Point::new(30.0, 40.0), CoordinateSpace::Surface, &mut sink);

        assert!(board.shapes()[0].as_rectangle().is_some());
        // the next shape uses the new tool
        draw(&mut board, Point::new(0.0, 0.0), Point::new(3.0, 4.0));
        assert!((last_circle(&board).r - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_stray_events_are_ignored() {
        let mut board = Whiteboard::new();
        let mut recorder = FrameRecorder::new();

        let up = board.pointer_up(Point::new(1.0, 1.0), CoordinateSpace::Surface, &mut recorder);
        let moved = board.pointer_move(Point::new(1.0, 1.0), CoordinateSpace::Surface, &mut recorder);

        assert_eq!(up, Transition::Ignored);
        assert_eq!(moved, Transition::Ignored);
        assert!(recorder.frames.is_empty());
        assert!(board.shapes().is_empty());
    }

    #[test]
    fn test_ids_unique_across_commits() {
        let mut board = Whiteboard::new();
        for i in 0..200 {
            if i % 2 == 0 {
                board.set_tool(ToolKind::Circle);
            } else {
                board.set_tool(ToolKind::Rectangle);
            }
            // all gestures start in the same spot to mimic shapes created in one instant
            draw(&mut board, Point::new(700.0, 500.0), Point::new(701.0, 501.0));
        }
        let ids: HashSet<ShapeId> = board.shapes().iter().map(Shape::id).collect();
        assert_eq!(board.shapes().len(), 200);
        assert_eq!(ids.len(), 200);
    }

    #[test]
    fn test_frames_presented_per_transition() {
        let mut board = Whiteboard::new();
        let mut recorder = FrameRecorder::new();

        board.handle_pointer_event(PointerEvent::down(Point::new(10.0, 10.0)), &mut recorder);
        let draft = recorder.last().unwrap();
        assert_eq!(draft.len(), 1);
        assert!(draft.instructions[0].provisional);

        board.handle_pointer_event(PointerEvent::moved(Point::new(20.0, 20.0)), &mut recorder);
        board.handle_pointer_event(PointerEvent::up(Point::new(20.0, 20.0)), &mut recorder);
        assert_eq!(recorder.frames.len(), 3);
        let committed = recorder.last().unwrap();
        assert_eq!(committed.len(), 1);
        assert!(!committed.instructions[0].provisional);

        let id = board.shapes()[0].id();
        board.handle_pointer_event(
            PointerEvent::down_on_shape(id, Point::new(15.0, 15.0)),
            &mut recorder,
        );
        let selected = recorder.last().unwrap();
        assert!(selected.instructions[0].selected);

        board.handle_pointer_event(PointerEvent::up(Point::new(15.0, 15.0)), &mut recorder);
        assert!(!recorder.last().unwrap().instructions[0].selected);
        assert_eq!(recorder.frames.len(), 5);
    }

    #[test]
    fn test_viewport_and_surface_events_agree() {
        let surface = SurfaceFrame::new(Vec2::new(0.0, 40.0), Size::new(800.0, 600.0));
        let mut board = Whiteboard::with_surface(surface);
        let mut sink = NullSink;

        // draw using viewport coordinates; the surface starts 40px down
        let v = CoordinateSpace::Viewport;
        board.pointer_down(Point::new(10.0, 50.0), v, None, &mut sink);
        board.pointer_move(Point::new(110.0, 100.0), v, &mut sink);
        board.pointer_up(Point::new(110.0, 100.0), v, &mut sink);

        let rect = last_rect(&board).clone();
        assert_eq!((rect.x, rect.y), (10.0, 10.0));
        assert_eq!((rect.width, rect.height), (100.0, 50.0));

        // press in viewport space on the shape, drag in surface space
        board.pointer_down(Point::new(20.0, 60.0), v, Some(rect.id), &mut sink);
        assert_eq!(board.drag_anchor(), Some(Point::new(20.0, 20.0)));
        board.pointer_move(Point::new(25.0, 15.0), CoordinateSpace::Surface, &mut sink);
        board.pointer_up(Point::new(25.0, 15.0), CoordinateSpace::Surface, &mut sink);

        let moved = last_rect(&board);
        assert!((moved.x - 15.0).abs() < f64::EPSILON);
        assert!((moved.y - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_with_hit_target() {
        let surface = SurfaceFrame::new(Vec2::new(0.0, 40.0), Size::new(800.0, 600.0));
        let mut board = Whiteboard::with_surface(surface);
        draw(&mut board, Point::new(0.0, 0.0), Point::new(50.0, 50.0));
        draw(&mut board, Point::new(25.0, 25.0), Point::new(75.0, 75.0));
        let top = board.shapes()[1].id();

        let press = PointerEvent::down(Point::new(30.0, 70.0)).in_space(CoordinateSpace::Viewport);
        let resolved = board.with_hit_target(press);
        assert!(matches!(resolved, PointerEvent::Down { target: Some(t), .. } if t == top));

        let miss = board.with_hit_target(PointerEvent::down(Point::new(500.0, 500.0)));
        assert!(matches!(miss, PointerEvent::Down { target: None, .. }));

        let moved = PointerEvent::moved(Point::new(30.0, 30.0));
        assert_eq!(board.with_hit_target(moved), moved);
    }
}
