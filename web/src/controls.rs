use sweeper_core::{CellCount, Coord, Difficulty, GameConfig};
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Reads the custom board form, keeping `fallback` values for fields that are not numbers.
pub(crate) fn parse_custom(rows: &str, cols: &str, mines: &str, fallback: GameConfig) -> GameConfig {
    fn field<T: TryFrom<u64> + Copy>(value: &str, fallback: T, max: T) -> T {
        match value.trim().parse::<u64>() {
            Ok(parsed) => T::try_from(parsed).unwrap_or(max),
            Err(_) => fallback,
        }
    }

    GameConfig::custom(
        field(rows, fallback.rows(), Coord::MAX),
        field(cols, fallback.cols(), Coord::MAX),
        field(mines, fallback.mines(), CellCount::MAX),
    )
}

#[derive(Properties, PartialEq)]
pub(crate) struct ControlsProps {
    pub difficulty: Difficulty,
    pub config: GameConfig,
    pub on_select: Callback<(Difficulty, Option<GameConfig>)>,
}

#[function_component]
pub(crate) fn ControlsView(props: &ControlsProps) -> Html {
    let rows = use_state(|| props.config.rows().to_string());
    let cols = use_state(|| props.config.cols().to_string());
    let mines = use_state(|| props.config.mines().to_string());

    let presets = Difficulty::ALL
        .into_iter()
        .filter(|difficulty| difficulty.preset().is_some())
        .map(|difficulty| {
            let class = (difficulty == props.difficulty).then_some("active");
            let onclick = props
                .on_select
                .reform(move |_: MouseEvent| (difficulty, None));
            html! {
                <button {class} {onclick}>{difficulty.label()}</button>
            }
        });

    let input = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            state.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let onsubmit = {
        let (rows, cols, mines) = (rows.clone(), cols.clone(), mines.clone());
        let fallback = props.config;
        props.on_select.reform(move |e: SubmitEvent| {
            e.prevent_default();
            let config = parse_custom(&rows, &cols, &mines, fallback);
            rows.set(config.rows().to_string());
            cols.set(config.cols().to_string());
            mines.set(config.mines().to_string());
            (Difficulty::Custom, Some(config))
        })
    };

    let custom_class = (props.difficulty == Difficulty::Custom).then_some("active");

    html! {
        <section class="controls">
            {for presets}
            <form class={custom_class} {onsubmit}>
                <label>{"Rows"}
                    <input type="number" min={GameConfig::MIN_ROWS.to_string()} max={GameConfig::MAX_ROWS.to_string()}
                        value={(*rows).clone()} oninput={input(&rows)}/>
                </label>
                <label>{"Cols"}
                    <input type="number" min={GameConfig::MIN_COLS.to_string()} max={GameConfig::MAX_COLS.to_string()}
                        value={(*cols).clone()} oninput={input(&cols)}/>
                </label>
                <label>{"Mines"}
                    <input type="number" min="1" value={(*mines).clone()} oninput={input(&mines)}/>
                </label>
                <button type="submit">{Difficulty::Custom.label()}</button>
            </form>
        </section>
    }
}
