use clap::Args;
use tictac_core as game;
use yew::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq)]
enum ViewSquareState {
    Empty,
    Marked(game::Mark),
    Winning(game::Mark),
}

impl ViewSquareState {
    fn at(state: &game::GameState, index: game::SquareIndex) -> Self {
        let winning = state.winner().is_some_and(|win| win.contains(index));
        match state.board()[index].mark() {
            None => Self::Empty,
            Some(mark) if winning => Self::Winning(mark),
            Some(mark) => Self::Marked(mark),
        }
    }

    fn all(state: &game::GameState) -> Vec<Self> {
        game::iter_indices()
            .map(|index| Self::at(state, index))
            .collect()
    }

    fn text(self) -> &'static str {
        match self {
            Self::Empty => "",
            Self::Marked(mark) | Self::Winning(mark) => mark.symbol(),
        }
    }
}

fn status_text(status: game::GameStatus) -> String {
    use game::GameStatus::*;
    match status {
        Won(win) => format!("Winner: {}", win.mark),
        Tie => "It's a tie!".to_string(),
        InProgress { next } => format!("Next player: {}", next),
    }
}

/// Label of the history button for `step`, the location is printed column first.
fn move_label(step: usize, record: &game::MoveRecord) -> String {
    match record.last_move {
        Some(played) if step > 0 => {
            format!("Go to move #{} ({},{})", step, played.col(), played.row())
        }
        _ => "Go to game start".to_string(),
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Play(game::SquareIndex),
    JumpTo(usize),
}

/// Computes the state that follows `msg`, or `None` when nothing changes.
fn next_state(state: &game::GameState, msg: Msg) -> Option<game::GameState> {
    match msg {
        Msg::Play(index) => match state.apply_move(index) {
            Ok((next, outcome)) if outcome.has_update() => {
                log::debug!("play {}: {:?}", index, outcome);
                Some(next)
            }
            Ok(_) => None,
            Err(err) => {
                log::warn!("play {} rejected: {}", index, err);
                None
            }
        },
        Msg::JumpTo(step) if step == state.step() => None,
        Msg::JumpTo(step) => match state.jump_to(step) {
            Ok(next) => Some(next),
            Err(err) => {
                log::warn!("jump to {} rejected: {}", step, err);
                None
            }
        },
    }
}

#[derive(Properties, Clone, PartialEq)]
struct SquareProps {
    index: game::SquareIndex,
    square_state: ViewSquareState,
    callback: Callback<game::SquareIndex>,
}

#[function_component(SquareView)]
fn square_component(props: &SquareProps) -> Html {
    let SquareProps {
        index,
        square_state,
        callback,
    } = props.clone();

    let class = match square_state {
        ViewSquareState::Winning(_) => classes!("winning-square"),
        _ => classes!("square"),
    };

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("square {} clicked", index);
        callback.emit(index);
    });

    html! {
        <button {class} {onclick}>{square_state.text()}</button>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct BoardProps {
    squares: Vec<ViewSquareState>,
    callback: Callback<game::SquareIndex>,
}

#[function_component(BoardView)]
fn board_component(props: &BoardProps) -> Html {
    let side = game::BOARD_SIDE;

    html! {
        <div>
            {
                for (0..side).map(|row| html! {
                    <div key={row} class="board-row">
                        {
                            for (0..side).map(|col| {
                                let index = row * side + col;
                                let square_state = props.squares[index as usize];
                                let callback = props.callback.clone();
                                html! {
                                    <SquareView key={index} {index} {square_state} {callback}/>
                                }
                            })
                        }
                    </div>
                })
            }
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct MoveListProps {
    labels: Vec<String>,
    current: usize,
    callback: Callback<usize>,
}

#[function_component(MoveListView)]
fn move_list_component(props: &MoveListProps) -> Html {
    html! {
        <ol>
            {
                for props.labels.iter().enumerate().map(|(step, label)| {
                    let onclick = props.callback.reform(move |_: MouseEvent| step);
                    let label = if step == props.current {
                        html! { <b>{label.clone()}</b> }
                    } else {
                        html! { {label.clone()} }
                    };
                    html! {
                        <li key={step}><button {onclick}>{label}</button></li>
                    }
                })
            }
        </ol>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Square indices replayed from an empty board on startup, e.g. 4,0,8
    #[arg(long, value_delimiter = ',')]
    pub(crate) moves: Vec<game::SquareIndex>,
}

#[derive(Debug)]
pub(crate) struct GameView {
    game: game::GameState,
}

impl GameView {
    /// Replays `moves` on a new game, skipping any that would be ignored.
    fn replay(moves: &[game::SquareIndex]) -> game::GameState {
        moves
            .iter()
            .fold(game::GameState::new(), |state, &index| {
                next_state(&state, Msg::Play(index)).unwrap_or_else(|| {
                    log::warn!("replay skipped move at {}", index);
                    state
                })
            })
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            game: Self::replay(&ctx.props().moves),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        log::debug!("msg: {:?}", msg);
        match next_state(&self.game, msg) {
            Some(next) => {
                self.game = next;
                true
            }
            None => false,
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let squares = ViewSquareState::all(&self.game);
        let status = status_text(self.game.status());
        let labels: Vec<String> = self
            .game
            .history()
            .iter()
            .enumerate()
            .map(|(step, record)| move_label(step, record))
            .collect();

        let cb_play = ctx.link().callback(Msg::Play);
        let cb_jump = ctx.link().callback(Msg::JumpTo);

        html! {
            <div class="game">
                <div class="game-board">
                    <BoardView {squares} callback={cb_play}/>
                </div>
                <div class="game-info">
                    <div>{status}</div>
                    <MoveListView {labels} current={self.game.step()} callback={cb_jump}/>
                </div>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game::Mark::*;

    fn replay(moves: &[game::SquareIndex]) -> game::GameState {
        GameView::replay(moves)
    }

    #[test]
    fn winning_line_is_highlighted() {
        let state = replay(&[0, 1, 4, 5, 8]);

        let squares = ViewSquareState::all(&state);

        assert_eq!(squares[0], ViewSquareState::Winning(X));
        assert_eq!(squares[4], ViewSquareState::Winning(X));
        assert_eq!(squares[8], ViewSquareState::Winning(X));
        assert_eq!(squares[1], ViewSquareState::Marked(O));
        assert_eq!(squares[2], ViewSquareState::Empty);
        assert_eq!(squares[2].text(), "");
        assert_eq!(squares[5].text(), "O");
    }

    #[test]
    fn status_text_covers_every_status() {
        assert_eq!(status_text(replay(&[]).status()), "Next player: X");
        assert_eq!(status_text(replay(&[4]).status()), "Next player: O");
        assert_eq!(status_text(replay(&[0, 1, 4, 5, 8]).status()), "Winner: X");
        assert_eq!(
            status_text(replay(&[0, 1, 2, 4, 3, 5, 7, 6, 8]).status()),
            "It's a tie!"
        );
    }

    #[test]
    fn move_labels_print_column_then_row() {
        let state = replay(&[4, 2, 6]);
        let labels: Vec<String> = state
            .history()
            .iter()
            .enumerate()
            .map(|(step, record)| move_label(step, record))
            .collect();

        assert_eq!(
            labels,
            [
                "Go to game start",
                "Go to move #1 (1,1)",
                "Go to move #2 (2,0)",
                "Go to move #3 (0,2)",
            ]
        );
    }

    #[test]
    fn ignored_moves_do_not_produce_a_new_state() {
        let state = replay(&[4]);

        assert_eq!(next_state(&state, Msg::Play(4)), None);
        assert_eq!(next_state(&state, Msg::Play(9)), None);
        assert_eq!(next_state(&state, Msg::JumpTo(1)), None);
        assert_eq!(next_state(&state, Msg::JumpTo(5)), None);
    }

    #[test]
    fn jump_then_play_rewrites_history() {
        let state = replay(&[0, 1, 2, 3]);

        let back = next_state(&state, Msg::JumpTo(0)).unwrap();
        assert_eq!(status_text(back.status()), "Next player: X");

        let next = next_state(&back, Msg::Play(7)).unwrap();
        assert_eq!(next.history().len(), 2);
        assert_eq!(next.step(), 1);
    }

    #[test]
    fn replay_skips_ignored_moves() {
        let state = replay(&[4, 4, 12, 0]);

        assert_eq!(state.move_count(), 2);
        assert_eq!(state.board()[4], game::Square::Marked(X));
        assert_eq!(state.board()[0], game::Square::Marked(O));
    }
}
