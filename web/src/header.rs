use sweeper_core::GameStatus;
use yew::prelude::*;

/// LED style counter value, zero-padded to at least three digits.
pub(crate) fn format_for_counter(value: u32) -> String {
    format!("{:03}", value)
}

/// Class and glyph of the reset button.
pub(crate) const fn face(status: GameStatus, pressing: bool) -> (&'static str, &'static str) {
    use GameStatus::*;
    match status {
        Won => ("win", "😎"),
        Lost => ("lose", "😵"),
        Idle | Playing if pressing => ("mid-open", "😮"),
        Idle => ("not-started", "🙂"),
        Playing => ("in-progress", "🙂"),
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct HeaderProps {
    pub mines_left: u32,
    pub elapsed: u32,
    pub status: GameStatus,
    #[prop_or_default]
    pub pressing: bool,
    pub on_reset: Callback<()>,
}

#[function_component]
pub(crate) fn HeaderView(props: &HeaderProps) -> Html {
    let (class, glyph) = face(props.status, props.pressing);
    let onclick = props.on_reset.reform(|e: MouseEvent| {
        e.stop_propagation();
    });

    html! {
        <nav>
            <aside class="counter mines">{format_for_counter(props.mines_left)}</aside>
            <span><button {class} {onclick}>{glyph}</button></span>
            <aside class="counter timer">{format_for_counter(props.elapsed)}</aside>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use sweeper_core::{Difficulty, GameConfig, Session};

    #[test]
    fn counters_are_zero_padded() {
        assert_eq!(format_for_counter(0), "000");
        assert_eq!(format_for_counter(7), "007");
        assert_eq!(format_for_counter(42), "042");
        assert_eq!(format_for_counter(999), "999");
    }

    #[test]
    fn large_mine_counts_are_not_truncated() {
        let session = Session::new(
            Difficulty::Custom,
            Some(GameConfig::custom(30, 50, 1491)),
            1,
        );

        assert_eq!(session.mines_left_display(), 1491);
        assert_eq!(format_for_counter(session.mines_left_display()), "1491");
    }

    #[test]
    fn timer_is_clamped_before_formatting() {
        let mut session = Session::new(Difficulty::Expert, None, 1);
        session
            .reveal((8, 15), DateTime::from_timestamp(0, 0).unwrap())
            .unwrap();
        let late = DateTime::from_timestamp(5000, 0).unwrap();

        assert!(session.status().is_playing());
        assert_eq!(format_for_counter(session.elapsed_display(late)), "999");
    }

    #[test]
    fn face_follows_status() {
        assert_eq!(face(GameStatus::Idle, false).0, "not-started");
        assert_eq!(face(GameStatus::Playing, true).0, "mid-open");
        assert_eq!(face(GameStatus::Won, true).0, "win");
        assert_eq!(face(GameStatus::Lost, false).0, "lose");
    }
}
