use glam::Vec2;
use pong_core::*;

/// Put the ball just short of the left goal line, away from player 1's paddle
fn serve_into_left_goal(game: &mut Match) {
    game.place_ball(Vec2::new(12.0, 100.0), Vec2::new(-5.0, 0.0));
}

/// Put the ball just short of the right goal line, away from player 2's paddle
fn serve_into_right_goal(game: &mut Match) {
    game.place_ball(Vec2::new(793.0, 100.0), Vec2::new(5.0, 0.0));
}

#[test]
fn test_right_player_scores_and_ball_is_reserved() {
    let mut game = Match::new(7);
    game.start(Mode::TwoPlayer, Difficulty::Medium);
    serve_into_left_goal(&mut game);

    assert!(game.tick());

    assert_eq!(game.score(), Score { left: 0, right: 1 });
    assert!(game.events().right_scored);
    let ball = game.ball();
    assert_eq!(ball.pos, Vec2::new(400.0, 300.0));
    assert_eq!(ball.vel.x.abs(), Params::BALL_SPEED_INITIAL);
    assert_eq!(ball.vel.y.abs(), Params::BALL_SPEED_INITIAL);
    assert_eq!(game.state(), MatchState::Running);
}

#[test]
fn test_left_player_scores_through_right_goal() {
    let mut game = Match::new(7);
    game.start(Mode::TwoPlayer, Difficulty::Medium);
    serve_into_right_goal(&mut game);

    game.tick();

    assert_eq!(game.score(), Score { left: 1, right: 0 });
    assert!(game.events().left_scored);
}

#[test]
fn test_hard_ai_moves_up_toward_high_ball() {
    let mut game = Match::new(3);
    game.start(Mode::SinglePlayer, Difficulty::Hard);
    game.place_paddle(Side::Right, 250.0);
    game.place_ball(Vec2::new(400.0, 100.0), Vec2::new(5.0, 0.0));

    game.tick();

    assert_eq!(game.intent(Side::Right), -7.0);

    // The intent is applied on the following tick
    game.tick();
    assert_eq!(game.paddle(Side::Right).y, 243.0);
}

#[test]
fn test_computer_wins_single_player_at_eleven() {
    let mut game = Match::new(11);
    game.start(Mode::SinglePlayer, Difficulty::Easy);

    for expected in 1..=10u8 {
        serve_into_left_goal(&mut game);
        game.tick();
        assert_eq!(game.score().right, expected);
        assert_eq!(game.state(), MatchState::Running);
    }

    serve_into_left_goal(&mut game);
    game.tick();

    assert_eq!(game.score(), Score { left: 0, right: 11 });
    assert_eq!(game.state(), MatchState::GameOver);
    assert_eq!(game.winner(), Some(Winner::Computer));
    assert_eq!(game.snapshot().winner.map(Winner::label), Some("Computer"));
    assert_eq!(game.ball().vel, Vec2::ZERO, "Ball is frozen");
    assert_eq!(game.ball().pos, Vec2::new(400.0, 300.0));
    assert!(!game.is_ticking());

    // Nothing moves once the match is over
    serve_into_left_goal(&mut game);
    assert!(!game.tick());
    assert_eq!(game.advance(1.0), 0);
    assert_eq!(game.score().right, 11);
}

#[test]
fn test_player_one_wins_two_player() {
    let mut game = Match::new(5);
    game.start(Mode::TwoPlayer, Difficulty::Medium);

    for _ in 0..11 {
        serve_into_right_goal(&mut game);
        game.tick();
    }

    assert_eq!(game.state(), MatchState::GameOver);
    assert_eq!(game.winner(), Some(Winner::Player1));
    assert_eq!(game.winner().map(Winner::announcement).as_deref(), Some("Player 1 Wins!"));
}

#[test]
fn test_player_two_label_in_two_player() {
    let mut game = Match::new(5);
    game.start(Mode::TwoPlayer, Difficulty::Medium);

    for _ in 0..11 {
        serve_into_left_goal(&mut game);
        game.tick();
    }

    assert_eq!(game.winner(), Some(Winner::Player2));
}

#[test]
fn test_close_game_ends_at_exactly_eleven() {
    let mut game = Match::new(21);
    game.start(Mode::TwoPlayer, Difficulty::Medium);

    for _ in 0..10 {
        serve_into_left_goal(&mut game);
        game.tick();
        serve_into_right_goal(&mut game);
        game.tick();
    }
    assert_eq!(game.score(), Score { left: 10, right: 10 });
    assert_eq!(game.state(), MatchState::Running);

    serve_into_right_goal(&mut game);
    game.tick();
    assert_eq!(game.state(), MatchState::GameOver, "No win-by-two");
    assert_eq!(game.winner(), Some(Winner::Player1));
}

#[test]
fn test_advance_stops_on_the_winning_tick() {
    let mut game = Match::new(9);
    game.start(Mode::TwoPlayer, Difficulty::Medium);
    for _ in 0..10 {
        serve_into_left_goal(&mut game);
        game.tick();
    }

    serve_into_left_goal(&mut game);
    let ran = game.advance(0.1);

    assert_eq!(ran, 1, "Ticking stops at game over");
    assert_eq!(game.score().right, 11);
    assert_eq!(game.state(), MatchState::GameOver);
}

#[test]
fn test_advance_runs_due_ticks() {
    let mut game = Match::new(9);
    game.start(Mode::TwoPlayer, Difficulty::Medium);

    assert_eq!(game.advance(0.035), 2);
    assert_eq!(game.tick_count(), 2);
    assert_eq!(game.advance(0.001), 0);
}

#[test]
fn test_restart_keeps_mode_and_resets_scores() {
    let mut game = Match::new(4);
    game.start(Mode::SinglePlayer, Difficulty::Hard);
    assert!(!game.restart(), "Restart is only valid after game over");

    for _ in 0..11 {
        serve_into_left_goal(&mut game);
        game.tick();
    }
    assert_eq!(game.state(), MatchState::GameOver);

    assert!(game.restart());
    assert_eq!(game.state(), MatchState::Running);
    assert_eq!(game.score(), Score::new());
    assert_eq!(game.winner(), None);
    assert_eq!(game.mode(), Mode::SinglePlayer);
    assert_eq!(game.difficulty(), Difficulty::Hard);
    assert!(game.is_ticking());
    let ball = game.ball();
    assert_eq!(ball.pos, Vec2::new(400.0, 300.0));
    assert_eq!(ball.vel.x.abs(), 5.0);
    assert_eq!(ball.vel.y.abs(), 5.0);
    assert!(game.tick());
}

#[test]
fn test_return_to_menu_abandons_match() {
    let mut game = Match::new(4);
    game.start(Mode::SinglePlayer, Difficulty::Easy);
    serve_into_left_goal(&mut game);
    game.tick();
    game.key_down("w");
    game.tick();

    game.return_to_menu();

    assert_eq!(game.state(), MatchState::Idle);
    assert_eq!(game.score(), Score::new());
    assert_eq!(game.paddle(Side::Left).y, 250.0);
    assert_eq!(game.intent(Side::Left), 0.0);
    assert!(!game.is_ticking());
    assert!(!game.tick());

    // A new match can be chosen from the menu
    assert!(game.start(Mode::TwoPlayer, Difficulty::Medium));
    assert_eq!(game.mode(), Mode::TwoPlayer);
}

#[test]
fn test_two_player_keys_drive_both_paddles() {
    let mut game = Match::new(2);
    game.start(Mode::TwoPlayer, Difficulty::Medium);
    game.place_ball(Vec2::new(400.0, 300.0), Vec2::new(0.0, 0.0));

    assert!(game.key_down("s"));
    assert!(game.key_down("ArrowUp"));
    game.tick();

    assert_eq!(game.paddle(Side::Left).y, 257.0);
    assert_eq!(game.paddle(Side::Right).y, 243.0);

    assert!(game.key_up("ArrowUp"));
    game.tick();
    assert_eq!(game.paddle(Side::Right).y, 243.0);
}

#[test]
fn test_releasing_either_key_stops_paddle() {
    let mut game = Match::new(2);
    game.start(Mode::TwoPlayer, Difficulty::Medium);

    game.key_down("w");
    game.key_down("s");
    assert_eq!(game.intent(Side::Left), 7.0, "Last key pressed wins");

    game.key_up("w");
    assert_eq!(game.intent(Side::Left), 0.0, "Any release stops");
}

#[test]
fn test_single_player_ignores_arrow_keys() {
    let mut game = Match::new(2);
    game.start(Mode::SinglePlayer, Difficulty::Medium);
    game.place_ball(Vec2::new(400.0, 300.0), Vec2::ZERO);

    assert!(!game.key_down("ArrowDown"));
    assert_eq!(game.intent(Side::Right), 0.0);
    assert!(game.key_down("w"));
}

#[test]
fn test_paddle_reflection_and_goal_line_in_one_tick() {
    // Ball reaches the paddle zone and the goal line on the same tick: the
    // paddle flips X, and the goal still counts because scoring reads position
    let mut game = Match::new(8);
    game.start(Mode::TwoPlayer, Difficulty::Medium);
    game.place_ball(Vec2::new(12.0, 300.0), Vec2::new(-5.0, 0.0));

    game.tick();

    assert!(game.events().ball_hit_paddle);
    assert!(game.events().right_scored);
    assert_eq!(game.score().right, 1);
}

#[test]
fn test_rally_off_left_paddle() {
    let mut game = Match::new(8);
    game.start(Mode::TwoPlayer, Difficulty::Medium);
    game.place_ball(Vec2::new(22.0, 300.0), Vec2::new(-5.0, 5.0));

    game.tick();

    let ball = game.ball();
    assert_eq!(ball.pos, Vec2::new(17.0, 305.0));
    assert_eq!(ball.vel, Vec2::new(5.0, 5.0));
    assert_eq!(game.score(), Score::new());
}

#[test]
fn test_snapshot_reports_court() {
    let mut game = Match::new(8);
    game.start(Mode::SinglePlayer, Difficulty::Medium);
    game.tick();

    let snap = game.snapshot();
    assert_eq!(snap.tick, 1);
    assert_eq!(snap.state, MatchState::Running);
    assert_eq!(snap.left.side, Side::Left);
    assert_eq!(snap.right.side, Side::Right);
    assert_eq!(snap.winner, None);
}
