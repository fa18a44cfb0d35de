use super::*;
use chess_rules::{Move, PieceKind, Position};
use random_engine::RandomAgent;

/// Plays a fixed list of moves given as (from, to) coordinates.
struct ScriptedAgent {
    name: &'static str,
    line: Vec<((i8, i8), (i8, i8))>,
    next: usize,
}

impl ScriptedAgent {
    fn new(name: &'static str, line: Vec<((i8, i8), (i8, i8))>) -> Self {
        Self { name, line, next: 0 }
    }
}

impl Agent for ScriptedAgent {
    fn select_move(&mut self, game: &Game) -> Option<Move> {
        let &((ff, fr), (tf, tr)) = self.line.get(self.next)?;
        self.next += 1;
        game.legal_moves(Position::new(ff, fr))
            .into_iter()
            .find(|mv| mv.to == Position::new(tf, tr))
    }

    fn name(&self) -> &str {
        self.name
    }

    fn new_game(&mut self) {
        self.next = 0;
    }
}

/// Never has a move.
struct IdleAgent;

impl Agent for IdleAgent {
    fn select_move(&mut self, _game: &Game) -> Option<Move> {
        None
    }

    fn name(&self) -> &str {
        "idle"
    }
}

fn quick_config(num_games: u32, max_plies: u32) -> SelfPlayConfig {
    SelfPlayConfig {
        num_games,
        max_plies,
        ..Default::default()
    }
}

#[test]
fn test_self_play() {
    let mut agent1 = RandomAgent::seeded(11);
    let mut agent2 = RandomAgent::seeded(12);

    let runner = MatchRunner::new(quick_config(4, 60));
    assert_eq!(runner.config().num_games, 4);
    assert_eq!(runner.config().max_plies, 60);
    let (result, records) = runner.run_match(&mut agent1, &mut agent2).unwrap();

    // Self-play should complete without panic
    assert_eq!(result.total_games(), 4);
    assert_eq!(records.len(), 4);
    let total_plies: usize = records.iter().map(|r| r.plies()).sum();
    assert_eq!(
        (agent1.moves_played() + agent2.moves_played()) as usize,
        total_plies
    );

    for record in &records {
        assert!(record.plies() <= 60);
        if record.termination == Termination::PlyLimit {
            assert_eq!(record.plies(), 60);
            assert_eq!(record.winner, Player::None);
        }

        // replaying the record reproduces the outcome
        let mut game = Game::new();
        let mut promotions = record.promotions.iter();
        for mv in &record.moves {
            assert!(game.all_legal_moves().contains(mv), "{mv:?} not legal");
            game.apply_move(*mv).unwrap();
            if game.phase() == GamePhase::AwaitingPromotion {
                let promo = promotions.next().expect("promotion recorded");
                assert_eq!(promo.ply, game.ply() - 1);
                game.promote(promo.kind).unwrap();
            }
        }
        if record.termination != Termination::PlyLimit {
            assert_eq!(game.phase(), GamePhase::Ended);
            assert_eq!(game.winner(), record.winner);
        }
    }
}

#[test]
fn test_fools_mate_is_recorded() {
    let mut white = ScriptedAgent::new("white", vec![((5, 1), (5, 2)), ((6, 1), (6, 3))]);
    let mut black = ScriptedAgent::new("black", vec![((4, 6), (4, 4)), ((3, 7), (7, 3))]);

    let runner = MatchRunner::new(SelfPlayConfig {
        alternate_colors: false,
        ..quick_config(1, 100)
    });
    let (result, records) = runner.run_match(&mut white, &mut black).unwrap();

    assert_eq!(result.losses, 1);
    let record = &records[0];
    assert_eq!(record.termination, Termination::Checkmate);
    assert_eq!(record.winner, Player::Black);
    assert_eq!(record.plies(), 4);
    assert_eq!(record.white, "white");
    assert_eq!(record.score_text(), "0-1");
}

#[test]
fn test_colors_alternate() {
    let mut agent1 = ScriptedAgent::new("one", Vec::new());
    let mut agent2 = ScriptedAgent::new("two", Vec::new());

    let runner = MatchRunner::new(quick_config(2, 0));
    let (result, records) = runner.run_match(&mut agent1, &mut agent2).unwrap();

    assert_eq!(records[0].white, "one");
    assert_eq!(records[1].white, "two");
    assert_eq!(result.draws, 2);
    assert!(records
        .iter()
        .all(|r| r.termination == Termination::PlyLimit && r.moves.is_empty()));
}

#[test]
fn test_agent_without_move_is_an_error() {
    let mut idle = IdleAgent;
    let mut other = RandomAgent::seeded(0);

    let runner = MatchRunner::new(quick_config(1, 10));
    let err = runner.run_match(&mut idle, &mut other).unwrap_err();
    match err {
        SelfPlayError::NoMove { agent, game, ply } => {
            assert_eq!(agent, "idle");
            assert_eq!(game, 1);
            assert_eq!(ply, 0);
        }
        unexpected => panic!("unexpected error {unexpected}"),
    }
}

#[test]
fn test_promotion_choice_is_applied() {
    struct Underpromoter(ScriptedAgent);

    impl Agent for Underpromoter {
        fn select_move(&mut self, game: &Game) -> Option<Move> {
            self.0.select_move(game)
        }
        fn select_promotion(&mut self, _game: &Game) -> PieceKind {
            PieceKind::Knight
        }
        fn name(&self) -> &str {
            self.0.name()
        }
    }

    // a-pawn marches through: a4, a5, axb6, bxa7, axb8
    let mut white = Underpromoter(ScriptedAgent::new(
        "white",
        vec![
            ((0, 1), (0, 3)),
            ((0, 3), (0, 4)),
            ((0, 4), (1, 5)),
            ((1, 5), (0, 6)),
            ((0, 6), (1, 7)),
        ],
    ));
    let mut black = ScriptedAgent::new(
        "black",
        vec![
            ((7, 6), (7, 5)),
            ((1, 6), (1, 4)),
            ((7, 5), (7, 4)),
            ((7, 4), (7, 3)),
            ((7, 3), (7, 2)),
        ],
    );

    let runner = MatchRunner::new(quick_config(1, 9));
    let record = runner.play_game(1, &mut white, &mut black).unwrap();

    assert_eq!(
        record.promotions,
        vec![PromotionRecord {
            ply: 8,
            kind: PieceKind::Knight
        }]
    );
    assert_eq!(record.termination, Termination::PlyLimit);
}
