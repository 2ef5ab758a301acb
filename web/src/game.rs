use gloo::timers::callback::Interval;
use obake_core as game;
use yew::prelude::*;

const COUNTDOWN_INTERVAL_MS: u32 = 1000;

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Start,
    Restart,
    CountdownTick,
    SampleTick,
    CellClicked(game::CellIndex),
}

fn urgency_class(urgency: game::TimerUrgency) -> &'static str {
    use game::TimerUrgency::*;
    match urgency {
        Normal => "normal",
        Warning => "warning",
        Critical => "critical",
    }
}

fn cell_class_names(cell_state: game::CellState) -> &'static [&'static str] {
    use game::CellState::*;
    use game::ItemKind::*;
    match cell_state {
        Empty => &["empty"],
        Unrevealed(Ghost) => &["ghost", "clickable"],
        Unrevealed(Decoy) => &["decoy", "clickable"],
        Resolved(Ghost) => &["ghost", "exorcised"],
        Resolved(Decoy) => &["decoy", "crying"],
    }
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    index: game::CellIndex,
    cell_state: game::CellState,
    callback: Callback<game::CellIndex>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps {
        index,
        cell_state,
        callback,
    } = props.clone();

    let class = classes!("cell", cell_class_names(cell_state).to_vec());

    // resolved and empty cells stop forwarding clicks
    let onclick = cell_state.is_clickable().then(|| {
        Callback::from(move |_: MouseEvent| {
            log::trace!("cell {} clicked", index);
            callback.emit(index);
        })
    });

    html! {
        <td {class} {onclick}/>
    }
}

/// Both repeating callbacks of a running round. Dropping this cancels them.
#[derive(Debug)]
struct RoundTimers {
    _countdown: Interval,
    _sampler: Interval,
}

impl RoundTimers {
    fn new(ctx: &Context<GameView>, sample_interval_ms: u32) -> Self {
        let countdown = {
            let link = ctx.link().clone();
            Interval::new(COUNTDOWN_INTERVAL_MS, move || {
                link.send_message(Msg::CountdownTick)
            })
        };
        let sampler = {
            let link = ctx.link().clone();
            Interval::new(sample_interval_ms, move || link.send_message(Msg::SampleTick))
        };
        Self {
            _countdown: countdown,
            _sampler: sampler,
        }
    }
}

#[derive(Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    pub config: game::RoundConfig,
    pub seed: u64,
}

#[derive(Debug)]
pub(crate) struct GameView {
    round: game::Round,
    timers: Option<RoundTimers>,
}

impl GameView {
    fn new_round(props: &GameProps) -> game::Round {
        game::Round::with_seed(props.config, props.seed).unwrap_or_else(|err| {
            log::error!("invalid round config ({}), using default", err);
            game::Round::progressive(props.seed)
        })
    }

    fn arm_timers(&mut self, ctx: &Context<Self>) {
        let sample_interval_ms = self.round.config().sample_interval_ms;
        self.timers = Some(RoundTimers::new(ctx, sample_interval_ms));
    }

    fn view_board(&self, ctx: &Context<Self>) -> Html {
        let (cols, rows) = self.round.config().size();
        let board = self.round.board();
        let callback = ctx.link().callback(Msg::CellClicked);

        html! {
            <table class="board">
                {
                    for (0..rows).map(|y| html! {
                        <tr>
                            {
                                for (0..cols).map(|x| {
                                    let index = game::coords_to_index((x, y), cols);
                                    let cell_state = board.cell_at((x, y));
                                    let callback = callback.clone();
                                    html! {
                                        <CellView {index} {cell_state} {callback}/>
                                    }
                                })
                            }
                        </tr>
                    })
                }
            </table>
        }
    }

    fn view_result(&self, ctx: &Context<Self>) -> Html {
        let state = self.round.state();
        let cb_restart = ctx.link().callback(|_: MouseEvent| Msg::Restart);

        html! {
            <section class="result">
                <p>{"Score"}</p>
                <p class="points">{self.round.score().to_string()}</p>
                <p>{format!("Exorcised: {}", state.success_count())}</p>
                <p>{format!("Missed: {}", state.miss_count())}</p>
                <button onclick={cb_restart}>{"Play again"}</button>
            </section>
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            round: Self::new_round(ctx.props()),
            timers: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Start => {
                let outcome = self.round.start();
                if outcome.has_update() {
                    self.arm_timers(ctx);
                }
                outcome.has_update()
            }
            Restart => {
                let outcome = self.round.restart();
                self.arm_timers(ctx);
                outcome.has_update()
            }
            CountdownTick => {
                let outcome = self.round.tick_countdown();
                if matches!(outcome, game::RoundOutcome::Finished) {
                    self.timers = None;
                }
                outcome.has_update()
            }
            SampleTick => self.round.tick_sampler().has_update(),
            CellClicked(index) => {
                let outcome = self.round.click(index);
                log::debug!("click {}: {:?}", index, outcome);
                outcome.has_update()
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let phase = self.round.phase();
        let remaining = self.round.state().seconds_remaining();
        let timer_class = classes!("timer", urgency_class(self.round.urgency()));
        let cb_start = ctx.link().callback(|_: MouseEvent| Msg::Start);

        html! {
            <div class="obake">
                <h1>{"aza-obake exorcism"}</h1>
                <p class={timer_class}>{format!("Time left: {}", remaining)}</p>
                if phase.is_idle() {
                    <div class="start">
                        <button onclick={cb_start}>{"Start"}</button>
                    </div>
                }
                if phase.is_finished() {
                    { self.view_result(ctx) }
                } else {
                    { self.view_board(ctx) }
                }
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if self.timers.take().is_some() {
            log::debug!("round timers cancelled on teardown");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urgency_maps_to_timer_colors() {
        assert_eq!(urgency_class(game::TimerUrgency::Normal), "normal");
        assert_eq!(urgency_class(game::TimerUrgency::Warning), "warning");
        assert_eq!(urgency_class(game::TimerUrgency::Critical), "critical");
    }

    #[test]
    fn only_unrevealed_cells_are_clickable() {
        use game::CellState::*;
        use game::ItemKind::*;

        for cell_state in [Empty, Resolved(Ghost), Resolved(Decoy)] {
            assert!(!cell_class_names(cell_state).contains(&"clickable"));
        }
        for cell_state in [Unrevealed(Ghost), Unrevealed(Decoy)] {
            assert!(cell_class_names(cell_state).contains(&"clickable"));
        }
    }

    #[test]
    fn resolved_cells_keep_their_kind_distinct() {
        use game::CellState::*;
        use game::ItemKind::*;

        assert_eq!(cell_class_names(Resolved(Ghost)), ["ghost", "exorcised"]);
        assert_eq!(cell_class_names(Resolved(Decoy)), ["decoy", "crying"]);
        assert_eq!(cell_class_names(Empty), ["empty"]);
    }
}
