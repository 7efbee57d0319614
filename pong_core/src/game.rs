use std::fmt;

use glam::Vec2;
use hecs::{Entity, World};

use crate::fsm::{MatchAction, MatchFsm, MatchState};
use crate::scheduler::FixedStep;
use crate::systems::{apply_intent, InputMapper, IntentChange, Key};
use crate::{
    create_ball, create_paddle, serve_velocity, step, Ball, Config, Difficulty, Events, GameRng,
    Mode, Paddle, PaddleIntent, Score, Side,
};

/// Who won a finished match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    Player1,
    Player2,
    Computer,
}

impl Winner {
    /// The right side is reported as the computer in single player
    pub fn for_side(side: Side, mode: Mode) -> Self {
        match (side, mode) {
            (Side::Left, _) => Winner::Player1,
            (Side::Right, Mode::SinglePlayer) => Winner::Computer,
            (Side::Right, Mode::TwoPlayer) => Winner::Player2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Winner::Player1 => "Player 1",
            Winner::Player2 => "Player 2",
            Winner::Computer => "Computer",
        }
    }

    /// Text shown on the game-over screen
    pub fn announcement(self) -> String {
        format!("{} Wins!", self.label())
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub tick: u32,
    pub state: MatchState,
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
    pub score: Score,
    pub winner: Option<Winner>,
}

/// One match: owns the court, the scores and the tick source
pub struct Match {
    world: World,
    config: Config,
    score: Score,
    events: Events,
    rng: GameRng,
    fsm: MatchFsm,
    scheduler: FixedStep,
    mode: Mode,
    difficulty: Difficulty,
    winner: Option<Winner>,
    tick: u32,
    left: Entity,
    right: Entity,
    ball: Entity,
}

impl Match {
    /// Seeded match, for deterministic hosts and tests
    pub fn new(seed: u64) -> Self {
        Self::with_rng(Config::new(), GameRng::new(seed))
    }

    pub fn with_rng(config: Config, mut rng: GameRng) -> Self {
        let mut world = World::new();

        // Create paddles
        let left = create_paddle(&mut world, &config, Side::Left);
        let right = create_paddle(&mut world, &config, Side::Right);

        // Create ball
        let vel = serve_velocity(config.ball_speed_initial, &mut rng);
        let ball = create_ball(&mut world, config.court_center(), vel, config.ball_radius);

        Self {
            world,
            config,
            score: Score::new(),
            events: Events::new(),
            rng,
            fsm: MatchFsm::new(),
            scheduler: FixedStep::default(),
            mode: Mode::default(),
            difficulty: Difficulty::default(),
            winner: None,
            tick: 0,
            left,
            right,
            ball,
        }
    }

    /// Begin a match from the menu. Ignored unless idle.
    pub fn start(&mut self, mode: Mode, difficulty: Difficulty) -> bool {
        if !self.fsm.transition(MatchAction::Start).success {
            log::debug!("start ignored in {:?}", self.fsm.state());
            return false;
        }

        self.mode = mode;
        self.difficulty = difficulty;
        self.score.reset();
        self.winner = None;
        self.tick = 0;
        self.reset_paddles();
        self.serve();
        self.scheduler.start();
        log::info!("started {:?} match on {}", mode, difficulty);
        true
    }

    /// Play again after a finished match, keeping mode and difficulty
    pub fn restart(&mut self) -> bool {
        if !self.fsm.transition(MatchAction::Restart).success {
            log::debug!("restart ignored in {:?}", self.fsm.state());
            return false;
        }

        self.score.reset();
        self.winner = None;
        self.serve();
        self.scheduler.start();
        true
    }

    /// Abandon everything and go back to the menu
    pub fn return_to_menu(&mut self) {
        self.fsm.transition(MatchAction::ReturnToMenu);
        self.scheduler.stop();
        self.mode = Mode::default();
        self.difficulty = Difficulty::default();
        self.score.reset();
        self.events.clear();
        self.winner = None;
        self.tick = 0;
        self.reset_paddles();
        self.serve();
    }

    /// Forward a key press. Unmapped keys are ignored.
    pub fn key_down(&mut self, key: &str) -> bool {
        let change = key.parse::<Key>().ok().and_then(|key| self.mapper().key_down(key));
        self.apply_change(change)
    }

    /// Forward a key release. Unmapped keys are ignored.
    pub fn key_up(&mut self, key: &str) -> bool {
        let change = key.parse::<Key>().ok().and_then(|key| self.mapper().key_up(key));
        self.apply_change(change)
    }

    /// Run a single tick. Does nothing unless the match is running.
    pub fn tick(&mut self) -> bool {
        if !self.fsm.is_running() {
            return false;
        }

        let ai = self.mode.is_single_player().then_some(self.difficulty);
        let scorer = step(
            &mut self.world,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
            ai,
        );
        self.tick = self.tick.wrapping_add(1);

        if scorer.is_some() {
            self.on_score_update();
        }
        true
    }

    /// Feed elapsed wall time to the scheduler and run the ticks now due
    ///
    /// Stops as soon as the match ends, so no tick runs past game over.
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        let due = self.scheduler.advance(elapsed);
        let mut ran = 0;
        for _ in 0..due {
            if !self.tick() {
                break;
            }
            ran += 1;
        }
        ran
    }

    fn on_score_update(&mut self) {
        let Some(side) = self.score.has_winner(self.config.win_score) else {
            return;
        };

        if let Ok(mut ball) = self.world.get::<&mut Ball>(self.ball) {
            ball.vel = Vec2::ZERO;
        }
        self.fsm.transition(MatchAction::WinningScore);
        self.scheduler.stop();

        let winner = Winner::for_side(side, self.mode);
        self.winner = Some(winner);
        log::info!(
            "{} ({}-{})",
            winner.announcement(),
            self.score.left,
            self.score.right
        );
    }

    fn mapper(&self) -> InputMapper {
        InputMapper::new(self.config.player_speed, self.mode)
    }

    fn apply_change(&mut self, change: Option<IntentChange>) -> bool {
        match change {
            Some(change) => {
                apply_intent(&mut self.world, change);
                true
            }
            None => false,
        }
    }

    fn reset_paddles(&mut self) {
        let spawn_y = self.config.paddle_spawn_y();
        for (_entity, (paddle, intent)) in self
            .world
            .query_mut::<(&mut Paddle, &mut PaddleIntent)>()
        {
            paddle.y = spawn_y;
            intent.velocity_y = 0.0;
        }
    }

    fn serve(&mut self) {
        let center = self.config.court_center();
        if let Ok(mut ball) = self.world.get::<&mut Ball>(self.ball) {
            ball.reset(center, self.config.ball_speed_initial, &mut self.rng);
        }
    }

    /// Put the ball somewhere specific (scripted hosts and tests)
    pub fn place_ball(&mut self, pos: Vec2, vel: Vec2) {
        if let Ok(mut ball) = self.world.get::<&mut Ball>(self.ball) {
            ball.pos = pos;
            ball.vel = vel;
        }
    }

    /// Move a paddle's top edge, clamped to the court
    pub fn place_paddle(&mut self, side: Side, y: f32) {
        let y = self.config.clamp_paddle_y(y);
        if let Ok(mut paddle) = self.world.get::<&mut Paddle>(self.paddle_entity(side)) {
            paddle.y = y;
        }
    }

    fn paddle_entity(&self, side: Side) -> Entity {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn ball(&self) -> Ball {
        self.world
            .get::<&Ball>(self.ball)
            .map(|ball| *ball)
            .unwrap_or_else(|_| {
                Ball::new(
                    self.config.court_center(),
                    Vec2::ZERO,
                    self.config.ball_radius,
                )
            })
    }

    pub fn paddle(&self, side: Side) -> Paddle {
        self.world
            .get::<&Paddle>(self.paddle_entity(side))
            .map(|paddle| *paddle)
            .unwrap_or_else(|_| {
                Paddle::new(
                    side,
                    self.config.paddle_x(side),
                    self.config.paddle_spawn_y(),
                    self.config.paddle_width,
                    self.config.paddle_height,
                )
            })
    }

    /// Current intent of a paddle, in units per tick
    pub fn intent(&self, side: Side) -> f32 {
        self.world
            .get::<&PaddleIntent>(self.paddle_entity(side))
            .map(|intent| intent.velocity_y)
            .unwrap_or(0.0)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick: self.tick,
            state: self.fsm.state(),
            left: self.paddle(Side::Left),
            right: self.paddle(Side::Right),
            ball: self.ball(),
            score: self.score,
            winner: self.winner,
        }
    }

    pub fn state(&self) -> MatchState {
        self.fsm.state()
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Events from the most recent tick
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn winner(&self) -> Option<Winner> {
        self.winner
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn tick_count(&self) -> u32 {
        self.tick
    }

    pub fn is_ticking(&self) -> bool {
        self.scheduler.is_running()
    }
}

impl Default for Match {
    fn default() -> Self {
        Self::with_rng(Config::new(), GameRng::from_entropy())
    }
}
