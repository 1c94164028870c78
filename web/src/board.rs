use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use sweeper_core::{Cell, Coord, Coord2, GameStatus, Grid, is_adjacent};
use yew::prelude::*;

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub(crate) struct MouseButtons: u16 {
        const LEFT    = 1;
        const RIGHT   = 1 << 1;
        const MIDDLE  = 1 << 2;
        const BACK    = 1 << 3;
        const FORWARD = 1 << 4;
    }
}

impl MouseButtons {
    const fn is_chord(self) -> bool {
        self.contains(Self::MIDDLE) || self.contains(Self::LEFT.union(Self::RIGHT))
    }
}

/// What a completed click on a cell asks for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Action {
    Reveal,
    Flag,
    Chord,
}

impl Action {
    /// Action for the set of buttons that was held before everything got released.
    pub(crate) fn dispatch(buttons: MouseButtons) -> Option<Self> {
        if buttons.is_chord() {
            Some(Self::Chord)
        } else if buttons == MouseButtons::LEFT {
            Some(Self::Reveal)
        } else if buttons == MouseButtons::RIGHT {
            Some(Self::Flag)
        } else {
            None
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) struct CellPointerState {
    pub pos: Coord2,
    pub buttons: MouseButtons,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) enum CellMsg {
    Update(CellPointerState),
    DoubleClick(Coord2),
    Leave,
}

/// Buttons held over a cell, accumulated until all of them are released.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub(crate) struct PointerTracker {
    current: Option<CellPointerState>,
}

impl PointerTracker {
    pub(crate) fn current(&self) -> Option<CellPointerState> {
        self.current
    }

    /// Feeds the live button state, returns the action to run once every button is up.
    pub(crate) fn update(&mut self, state: CellPointerState) -> Option<(Coord2, Action)> {
        if state.buttons.is_empty() {
            let CellPointerState { pos, buttons } = self.current.take()?;
            return Action::dispatch(buttons).map(|action| (pos, action));
        }

        self.current = Some(match self.current {
            Some(held) if held.pos == state.pos => CellPointerState {
                pos: state.pos,
                buttons: held.buttons | state.buttons,
            },
            _ => state,
        });
        None
    }

    /// Forgets the held buttons, returns whether there were any.
    pub(crate) fn leave(&mut self) -> bool {
        self.current.take().is_some()
    }

    /// Pressing any button but right shows the face as "holding".
    pub(crate) fn is_pressing(&self) -> bool {
        self.current
            .is_some_and(|held| held.buttons.intersects(MouseButtons::LEFT | MouseButtons::MIDDLE))
    }

    /// Whether the cell should be drawn sunken under the held buttons.
    pub(crate) fn is_pressed(&self, coords: Coord2, cell: Cell, status: GameStatus) -> bool {
        let Some(held) = self.current else {
            return false;
        };
        if status.is_finished() || !cell.is_revealable() {
            return false;
        }

        if held.buttons.is_chord() {
            is_adjacent(held.pos, coords)
        } else {
            held.buttons == MouseButtons::LEFT && held.pos == coords
        }
    }
}

/// How a cell is drawn.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum CellLook {
    Hidden,
    Open(u8),
    Flag,
    Mine,
    WrongFlag,
}

impl CellLook {
    pub(crate) const fn of(cell: Cell, status: GameStatus) -> Self {
        use GameStatus::*;
        match status {
            Won if cell.mine => Self::Flag,
            Lost if cell.flagged && !cell.mine => Self::WrongFlag,
            _ if cell.flagged => Self::Flag,
            _ if cell.revealed && cell.mine => Self::Mine,
            _ if cell.revealed => Self::Open(cell.adjacent_mines),
            _ => Self::Hidden,
        }
    }

    fn classes(self) -> Classes {
        use CellLook::*;
        match self {
            Hidden => classes!(),
            Open(count) => classes!("open", format!("num-{}", count)),
            Flag => classes!("flag"),
            Mine => classes!("open", "mine"),
            WrongFlag => classes!("flag", "wrong"),
        }
    }

    fn glyph(self) -> Html {
        use CellLook::*;
        match self {
            Hidden | Open(0) => html! {},
            Open(count) => html! { {count.to_string()} },
            Flag => html! { {"🚩"} },
            Mine => html! { {"💣"} },
            WrongFlag => html! { {"❌"} },
        }
    }
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    row: Coord,
    col: Coord,
    look: CellLook,
    #[prop_or_default]
    pressed: bool,
    callback: Callback<CellMsg>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps {
        row,
        col,
        look,
        pressed,
        callback,
    } = props.clone();
    let pos = (row, col);

    let mut class = classes!("cell", look.classes());
    if pressed {
        class.push("open");
    }

    let pointer = |name: &'static str| {
        let callback = callback.clone();
        Callback::from(move |e: MouseEvent| {
            let buttons = MouseButtons::from_bits_truncate(e.buttons());
            callback.emit(CellMsg::Update(CellPointerState { pos, buttons }));
            log::trace!("{:?} mouse {} ({:?})", pos, name, buttons);
        })
    };
    let onmousedown = pointer("down");
    let onmouseup = pointer("up");
    let onmouseenter = pointer("enter");

    let onmouseleave = callback.reform(|_: MouseEvent| CellMsg::Leave);
    let ondblclick = callback.reform(move |_: MouseEvent| CellMsg::DoubleClick(pos));

    html! {
        <td {class} {onmousedown} {onmouseup} {onmouseenter} {onmouseleave} {ondblclick}>
            {look.glyph()}
        </td>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct BoardProps {
    pub grid: Grid,
    pub status: GameStatus,
    pub pointer: PointerTracker,
    pub callback: Callback<CellMsg>,
}

#[function_component]
pub(crate) fn BoardView(props: &BoardProps) -> Html {
    let BoardProps {
        grid,
        status,
        pointer,
        callback,
    } = props;
    let (rows, cols) = grid.size();
    let playable = !status.is_finished();

    html! {
        <table class={playable.then_some("playable")}>
            {
                for (0..rows).map(|row| html! {
                    <tr>
                        {
                            for (0..cols).map(|col| {
                                let cell = grid.cell_at((row, col));
                                let look = CellLook::of(cell, *status);
                                let pressed = pointer.is_pressed((row, col), cell, *status);
                                html! {
                                    <CellView {row} {col} {look} {pressed} callback={callback.clone()}/>
                                }
                            })
                        }
                    </tr>
                })
            }
        </table>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(pos: Coord2, buttons: MouseButtons) -> CellPointerState {
        CellPointerState { pos, buttons }
    }

    fn release(pos: Coord2) -> CellPointerState {
        press(pos, MouseButtons::empty())
    }

    #[test]
    fn single_buttons_map_to_reveal_and_flag() {
        assert_eq!(Action::dispatch(MouseButtons::LEFT), Some(Action::Reveal));
        assert_eq!(Action::dispatch(MouseButtons::RIGHT), Some(Action::Flag));
        assert_eq!(Action::dispatch(MouseButtons::MIDDLE), Some(Action::Chord));
        assert_eq!(
            Action::dispatch(MouseButtons::LEFT | MouseButtons::RIGHT),
            Some(Action::Chord)
        );
        assert_eq!(Action::dispatch(MouseButtons::BACK), None);
        assert_eq!(Action::dispatch(MouseButtons::empty()), None);
    }

    #[test]
    fn click_fires_on_release() {
        let mut tracker = PointerTracker::default();

        assert_eq!(tracker.update(press((1, 2), MouseButtons::LEFT)), None);
        assert!(tracker.is_pressing());
        assert_eq!(tracker.update(release((1, 2))), Some(((1, 2), Action::Reveal)));
        assert_eq!(tracker.current(), None);
    }

    #[test]
    fn both_buttons_on_one_cell_chord() {
        let mut tracker = PointerTracker::default();

        tracker.update(press((0, 0), MouseButtons::LEFT));
        tracker.update(press((0, 0), MouseButtons::LEFT | MouseButtons::RIGHT));
        // releasing left first still leaves right held
        assert_eq!(tracker.update(press((0, 0), MouseButtons::RIGHT)), None);

        assert_eq!(tracker.update(release((0, 0))), Some(((0, 0), Action::Chord)));
    }

    #[test]
    fn dragging_to_another_cell_moves_the_target() {
        let mut tracker = PointerTracker::default();

        tracker.update(press((0, 0), MouseButtons::LEFT));
        tracker.update(press((0, 1), MouseButtons::LEFT));

        assert_eq!(tracker.update(release((0, 1))), Some(((0, 1), Action::Reveal)));
    }

    #[test]
    fn leaving_the_board_cancels_click() {
        let mut tracker = PointerTracker::default();

        tracker.update(press((3, 3), MouseButtons::RIGHT));
        assert!(!tracker.is_pressing());
        assert!(tracker.leave());
        assert!(!tracker.leave());

        assert_eq!(tracker.update(release((3, 3))), None);
    }

    #[test]
    fn pressed_cells_follow_held_buttons() {
        let hidden = Cell::default();
        let open = Cell {
            revealed: true,
            adjacent_mines: 1,
            ..Cell::default()
        };
        let mut tracker = PointerTracker::default();
        tracker.update(press((1, 1), MouseButtons::LEFT));

        assert!(tracker.is_pressed((1, 1), hidden, GameStatus::Playing));
        assert!(!tracker.is_pressed((1, 2), hidden, GameStatus::Playing));
        assert!(!tracker.is_pressed((1, 1), hidden, GameStatus::Lost));

        tracker.update(press((1, 1), MouseButtons::MIDDLE));
        assert!(tracker.is_pressed((2, 2), hidden, GameStatus::Playing));
        assert!(!tracker.is_pressed((2, 2), open, GameStatus::Playing));
        assert!(!tracker.is_pressed((3, 3), hidden, GameStatus::Playing));
    }

    #[test]
    fn finished_boards_show_the_layout() {
        let hidden_mine = Cell {
            mine: true,
            ..Cell::default()
        };
        let wrong_flag = Cell {
            flagged: true,
            ..Cell::default()
        };
        let blown = Cell {
            mine: true,
            revealed: true,
            ..Cell::default()
        };

        assert_eq!(CellLook::of(hidden_mine, GameStatus::Playing), CellLook::Hidden);
        assert_eq!(CellLook::of(hidden_mine, GameStatus::Won), CellLook::Flag);
        assert_eq!(CellLook::of(blown, GameStatus::Lost), CellLook::Mine);
        assert_eq!(CellLook::of(wrong_flag, GameStatus::Playing), CellLook::Flag);
        assert_eq!(CellLook::of(wrong_flag, GameStatus::Lost), CellLook::WrongFlag);
    }
}
