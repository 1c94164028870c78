use crate::board::*;
use crate::controls::ControlsView;
use crate::header::HeaderView;
use crate::theme::Theme;
use crate::utils::*;
use chrono::{DateTime, Utc};
use gloo::timers::callback::Interval;
use sweeper_core as game;
use yew::prelude::*;

impl StorageKey for game::BestTimes {
    const KEY: &'static str = "sweeper:best-times";
}

pub(crate) trait HasUpdate {
    fn has_update(self) -> bool;
}

impl HasUpdate for game::Result<game::MarkOutcome> {
    fn has_update(self) -> bool {
        self.inspect_err(|err| log::error!("mark failed: {}", err))
            .is_ok_and(|outcome| outcome.has_update())
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Dialog {
    Won { secs: u32, new_record: bool },
    Lost,
}

/// Everything the page shows besides the theme, free of browser calls.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct GameState {
    pub session: game::Session,
    pub best_times: game::BestTimes,
    pub pointer: PointerTracker,
    pub dialog: Option<Dialog>,
}

impl GameState {
    pub(crate) fn new(session: game::Session, best_times: game::BestTimes) -> Self {
        Self {
            session,
            best_times,
            pointer: PointerTracker::default(),
            dialog: None,
        }
    }

    pub(crate) fn restart(
        &mut self,
        difficulty: Option<game::Difficulty>,
        custom: Option<game::GameConfig>,
        seed: u64,
    ) {
        self.session = self.session.reset(difficulty, custom, seed);
        self.pointer = PointerTracker::default();
        self.dialog = None;
    }

    /// Hides the dialog and leaves the finished board on screen.
    pub(crate) fn close_dialog(&mut self) -> bool {
        self.dialog.take().is_some()
    }

    /// Applies one action, opening the win or loss dialog when the game ends.
    pub(crate) fn run(&mut self, coords: game::Coord2, action: Action, now: DateTime<Utc>) -> bool {
        use game::RevealOutcome::*;

        let outcome = match action {
            Action::Flag => return self.session.toggle_flag(coords).has_update(),
            Action::Reveal => self.session.reveal(coords, now),
            Action::Chord => self.session.chord_reveal(coords, now),
        };

        match outcome {
            Ok(Won) => {
                let secs = self.session.elapsed_secs(now);
                let date = now.date_naive().to_string();
                let new_record = self
                    .best_times
                    .record(self.session.difficulty(), secs, date);
                log::info!("Won in {}s (record: {})", secs, new_record);
                self.dialog = Some(Dialog::Won { secs, new_record });
                true
            }
            Ok(HitMine) => {
                log::info!("Lost at {:?}", coords);
                self.dialog = Some(Dialog::Lost);
                true
            }
            Ok(outcome) => outcome.has_update(),
            Err(err) => {
                log::error!("{:?} at {:?} failed: {}", action, coords, err);
                false
            }
        }
    }

    fn new_record(&self) -> bool {
        matches!(
            self.dialog,
            Some(Dialog::Won {
                new_record: true,
                ..
            })
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    CellEvent(CellMsg),
    UpdateTime,
    NewGame,
    ChangeDifficulty(game::Difficulty, Option<game::GameConfig>),
    CloseDialog,
    ToggleTheme,
}

#[derive(Properties, Debug, Clone, Default, PartialEq)]
pub(crate) struct GameProps {
    /// Fixed seed for every board instead of a random one
    #[prop_or_default]
    pub seed: Option<u64>,
}

#[derive(Debug)]
pub(crate) struct GameView {
    state: GameState,
    theme: Theme,
    prev_time: u32,
    _timer_interval: Interval,
}

impl GameView {
    fn next_seed(ctx: &Context<Self>) -> u64 {
        ctx.props().seed.unwrap_or_else(js_random_seed)
    }

    fn create_timer(ctx: &Context<Self>) -> Interval {
        let link = ctx.link().clone();
        Interval::new(1000, move || link.send_message(Msg::UpdateTime))
    }

    fn restart(
        &mut self,
        ctx: &Context<Self>,
        difficulty: Option<game::Difficulty>,
        custom: Option<game::GameConfig>,
    ) {
        self.state.restart(difficulty, custom, Self::next_seed(ctx));
        self.prev_time = 0;
    }

    fn run(&mut self, coords: game::Coord2, action: Action) -> bool {
        let updated = self.state.run(coords, action, utc_now());
        if self.state.new_record() {
            self.state.best_times.local_save();
        }
        updated
    }

    fn best_time_view(&self) -> Html {
        let difficulty = self.state.session.difficulty();
        match self.state.best_times.best(difficulty) {
            Some(best) => html! {
                <p class="best">{format!("Best {}: {}s ({})", difficulty.label(), best.secs, best.date)}</p>
            },
            None => html! {},
        }
    }

    fn dialog_view(&self, ctx: &Context<Self>) -> Html {
        let on_close = ctx.link().callback(|()| Msg::CloseDialog);
        let play_again = Some((
            AttrValue::from("Play again"),
            ctx.link().callback(|()| Msg::NewGame),
        ));

        match self.state.dialog {
            None => html! {},
            Some(Dialog::Won { secs, new_record }) => html! {
                <Modal title="You won!" action={play_again} {on_close}>
                    <p>{format!("Cleared in {} seconds.", secs)}</p>
                    if new_record {
                        <p class="record">{"New best time!"}</p>
                    }
                </Modal>
            },
            Some(Dialog::Lost) => html! {
                <Modal title="Boom!" action={play_again} {on_close}>
                    <p>{"You hit a mine."}</p>
                </Modal>
            },
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let session = game::Session::new(game::Difficulty::default(), None, Self::next_seed(ctx));
        Self {
            state: GameState::new(session, LocalOrDefault::local_or_default()),
            theme: Theme::init(),
            prev_time: 0,
            _timer_interval: Self::create_timer(ctx),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use CellMsg::*;
        use Msg::*;

        match msg {
            CellEvent(Leave) => {
                log::trace!("cell leave");
                self.state.pointer.leave()
            }
            CellEvent(Update(pointer_state)) => {
                log::trace!("cell update: {:?}", pointer_state);
                if let Some((pos, action)) = self.state.pointer.update(pointer_state) {
                    log::debug!("{:?} cell: {:?}", action, pos);
                    self.run(pos, action);
                }
                true
            }
            CellEvent(DoubleClick(pos)) => {
                log::debug!("double click chord: {:?}", pos);
                self.run(pos, Action::Chord)
            }
            UpdateTime => {
                let time = self.state.session.elapsed_display(utc_now());
                if self.prev_time != time {
                    self.prev_time = time;
                    true
                } else {
                    false
                }
            }
            NewGame => {
                self.restart(ctx, None, None);
                true
            }
            ChangeDifficulty(difficulty, custom) => {
                log::debug!("difficulty: {:?} {:?}", difficulty, custom);
                self.restart(ctx, Some(difficulty), custom);
                true
            }
            CloseDialog => self.state.close_dialog(),
            ToggleTheme => {
                self.theme = self.theme.toggled();
                self.theme.apply();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let session = &self.state.session;
        let elapsed = session.elapsed_display(utc_now());

        let on_reset = ctx.link().callback(|()| NewGame);
        let on_select = ctx.link().callback(
            |(difficulty, custom): (game::Difficulty, Option<game::GameConfig>)| {
                ChangeDifficulty(difficulty, custom)
            },
        );
        let on_theme = ctx.link().callback(|_: MouseEvent| ToggleTheme);
        let on_cell = ctx.link().callback(CellEvent);

        html! {
            <div class="sweeper" oncontextmenu={Callback::from(|e: MouseEvent| e.prevent_default())}>
                <header>
                    <h1>{"Minesweeper"}</h1>
                    <button class="theme" onclick={on_theme}>{self.theme.switch_icon()}</button>
                </header>
                <ControlsView difficulty={session.difficulty()} config={session.config()} {on_select}/>
                <HeaderView
                    mines_left={session.mines_left_display()}
                    {elapsed}
                    status={session.status()}
                    pressing={self.state.pointer.is_pressing()}
                    {on_reset}
                />
                <BoardView
                    grid={session.grid().clone()}
                    status={session.status()}
                    pointer={self.state.pointer}
                    callback={on_cell}
                />
                {self.best_time_view()}
                {self.dialog_view(ctx)}
            </div>
        }
    }
}
