//! Layout states and the snap transition table.
//!
//! A [`LayoutState`] is the logical screen region a window occupies:
//! maximized, one of four halves, or one of four quadrants.  It is built
//! from independent [`Edge`] flags, but only the nine non-contradictory
//! combinations are representable, so Top+Bottom or Left+Right can never
//! be stored.
//!
//! [`transition`] maps `(current state, direction pressed)` to the next
//! state by reading a fixed 9 × 4 table.  Every cell is filled; pressing a
//! direction that is already satisfied leaves the state unchanged.

use crate::command::Direction;
use std::fmt;

/// One side of the work area a window can be pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

/// Region of the work area a window is snapped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LayoutState {
    /// No edge constraint: the window fills the work area.
    #[default]
    Maximized,
    Left,
    Right,
    Top,
    Bottom,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl LayoutState {
    /// Every valid state, in transition-table row order.
    pub const ALL: [LayoutState; 9] = [
        LayoutState::Maximized,
        LayoutState::Left,
        LayoutState::Right,
        LayoutState::Top,
        LayoutState::Bottom,
        LayoutState::TopLeft,
        LayoutState::TopRight,
        LayoutState::BottomLeft,
        LayoutState::BottomRight,
    ];

    /// Build a state from a set of edges.
    ///
    /// Duplicates are ignored.  Returns `None` for contradictory sets
    /// (both vertical or both horizontal edges).
    pub fn from_edges(edges: &[Edge]) -> Option<Self> {
        let has = |e: Edge| edges.contains(&e);
        let vertical = match (has(Edge::Top), has(Edge::Bottom)) {
            (true, true) => return None,
            (true, false) => Some(Edge::Top),
            (false, true) => Some(Edge::Bottom),
            (false, false) => None,
        };
        let horizontal = match (has(Edge::Left), has(Edge::Right)) {
            (true, true) => return None,
            (true, false) => Some(Edge::Left),
            (false, true) => Some(Edge::Right),
            (false, false) => None,
        };
        let state = match (vertical, horizontal) {
            (None, None) => LayoutState::Maximized,
            (None, Some(Edge::Left)) => LayoutState::Left,
            (None, Some(_)) => LayoutState::Right,
            (Some(Edge::Top), None) => LayoutState::Top,
            (Some(_), None) => LayoutState::Bottom,
            (Some(Edge::Top), Some(Edge::Left)) => LayoutState::TopLeft,
            (Some(Edge::Top), Some(_)) => LayoutState::TopRight,
            (Some(_), Some(Edge::Left)) => LayoutState::BottomLeft,
            (Some(_), Some(_)) => LayoutState::BottomRight,
        };
        Some(state)
    }

    /// The edges this state is pinned to (vertical edge first).
    pub fn edges(self) -> &'static [Edge] {
        match self {
            LayoutState::Maximized => &[],
            LayoutState::Left => &[Edge::Left],
            LayoutState::Right => &[Edge::Right],
            LayoutState::Top => &[Edge::Top],
            LayoutState::Bottom => &[Edge::Bottom],
            LayoutState::TopLeft => &[Edge::Top, Edge::Left],
            LayoutState::TopRight => &[Edge::Top, Edge::Right],
            LayoutState::BottomLeft => &[Edge::Bottom, Edge::Left],
            LayoutState::BottomRight => &[Edge::Bottom, Edge::Right],
        }
    }

    pub fn contains(self, edge: Edge) -> bool {
        self.edges().contains(&edge)
    }

    pub fn is_half(self) -> bool {
        self.edges().len() == 1
    }

    pub fn is_quadrant(self) -> bool {
        self.edges().len() == 2
    }

    /// Row of this state in [`TRANSITIONS`].
    fn index(self) -> usize {
        match self {
            LayoutState::Maximized => 0,
            LayoutState::Left => 1,
            LayoutState::Right => 2,
            LayoutState::Top => 3,
            LayoutState::Bottom => 4,
            LayoutState::TopLeft => 5,
            LayoutState::TopRight => 6,
            LayoutState::BottomLeft => 7,
            LayoutState::BottomRight => 8,
        }
    }
}

impl fmt::Display for LayoutState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LayoutState::Maximized => "maximized",
            LayoutState::Left => "left",
            LayoutState::Right => "right",
            LayoutState::Top => "top",
            LayoutState::Bottom => "bottom",
            LayoutState::TopLeft => "top-left",
            LayoutState::TopRight => "top-right",
            LayoutState::BottomLeft => "bottom-left",
            LayoutState::BottomRight => "bottom-right",
        };
        f.write_str(name)
    }
}

use LayoutState::{
    Bottom as B, BottomLeft as BL, BottomRight as BR, Left as L, Maximized as M, Right as R,
    Top as T, TopLeft as TL, TopRight as TR,
};

/// Transition table: rows follow [`LayoutState::ALL`], columns follow
/// [`Direction::ALL`] (Left, Up, Right, Down).
const TRANSITIONS: [[LayoutState; 4]; 9] = [
    //  Left  Up   Right Down
    [L, T, R, B],     // Maximized
    [L, TL, M, BL],   // Left
    [M, TR, R, BR],   // Right
    [TL, T, TR, M],   // Top
    [BL, M, BR, B],   // Bottom
    [TL, TL, T, L],   // TopLeft
    [T, TR, TR, R],   // TopRight
    [BL, L, B, BL],   // BottomLeft
    [B, R, BR, BR],   // BottomRight
];

/// Next layout state after pressing `dir` while in `current`.
///
/// Total and pure: every `(state, direction)` pair has an entry, and a
/// press that cannot move the window any further returns `current`.
pub fn transition(current: LayoutState, dir: Direction) -> LayoutState {
    TRANSITIONS[current.index()][dir.index()]
}
