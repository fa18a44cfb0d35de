use super::*;
use chess_rules::Position;

fn record(winner: Player, termination: Termination) -> GameRecord {
    GameRecord {
        game_number: 1,
        white: "a".to_string(),
        black: "b".to_string(),
        moves: vec![Move::new(Position::new(4, 1), Position::new(4, 3))],
        promotions: Vec::new(),
        winner,
        termination,
    }
}

#[test]
fn test_white_result_follows_winner() {
    assert_eq!(
        record(Player::White, Termination::Checkmate).white_result(),
        GameResult::Win
    );
    assert_eq!(
        record(Player::Black, Termination::Checkmate).score_text(),
        "0-1"
    );
    assert_eq!(
        record(Player::None, Termination::PlyLimit).white_result(),
        GameResult::Draw
    );
}

#[test]
fn test_match_score() {
    let mut result = MatchResult::new();
    assert_eq!(result.score(), 0.5);
    result.record(GameResult::Win);
    result.record(GameResult::Draw);
    result.record(GameResult::Loss);
    result.record(GameResult::Win);
    assert_eq!(result.total_games(), 4);
    assert_eq!(result.score(), 0.625);
}

#[test]
fn test_report_lists_every_game() {
    let report = MatchReport {
        agent1: "first".to_string(),
        agent2: "second".to_string(),
        config: SelfPlayConfig::default(),
        result: MatchResult {
            wins: 1,
            losses: 0,
            draws: 1,
        },
        games: vec![
            record(Player::White, Termination::Checkmate),
            record(Player::None, Termination::Stalemate),
        ],
    };
    let text = report.generate_report();
    assert!(text.contains("first vs second"));
    assert!(text.contains("Checkmate"));
    assert!(text.contains("Stalemate"));
    assert!(text.contains("1 wins, 0 losses, 1 draws"));
}

#[test]
fn test_report_json_keeps_moves() {
    let report = MatchReport {
        agent1: "first".to_string(),
        agent2: "second".to_string(),
        config: SelfPlayConfig::default(),
        result: MatchResult::new(),
        games: vec![record(Player::Black, Termination::Checkmate)],
    };
    let json = serde_json::to_string(&report).unwrap();
    let back: MatchReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report);
    assert_eq!(back.games[0].moves[0].to, Position::new(4, 3));
}
