use crate::{Config, Score, Side};

/// Win-by-margin rule: the leader needs at least `win_score` points and a lead
/// of at least `win_margin`. There is no cap, so a match at deuce continues
/// until the margin is reached.
pub fn check_terminal(score: &Score, config: &Config) -> Option<Side> {
    let leader = score.leader()?;
    if score.get(leader) >= config.win_score && score.margin() >= config.win_margin {
        Some(leader)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(human: u32, opponent: u32) -> Score {
        Score { human, opponent }
    }

    #[test]
    fn test_human_wins_by_two_at_threshold() {
        let config = Config::new();
        assert_eq!(check_terminal(&score(5, 3), &config), Some(Side::Human));
    }

    #[test]
    fn test_one_point_lead_is_not_enough() {
        let config = Config::new();
        assert_eq!(check_terminal(&score(5, 4), &config), None);
        assert_eq!(check_terminal(&score(4, 5), &config), None);
    }

    #[test]
    fn test_below_threshold_is_not_terminal() {
        let config = Config::new();
        assert_eq!(check_terminal(&score(4, 0), &config), None);
        assert_eq!(check_terminal(&score(0, 0), &config), None);
    }

    #[test]
    fn test_opponent_wins() {
        let config = Config::new();
        assert_eq!(check_terminal(&score(0, 5), &config), Some(Side::Opponent));
    }

    #[test]
    fn test_extended_match_past_threshold() {
        let config = Config::new();
        assert_eq!(check_terminal(&score(9, 8), &config), None);
        assert_eq!(check_terminal(&score(9, 9), &config), None);
        assert_eq!(check_terminal(&score(9, 11), &config), Some(Side::Opponent));
    }

    #[test]
    fn test_custom_threshold_and_margin() {
        let config = Config {
            win_score: 11,
            win_margin: 3,
            ..Config::default()
        };
        assert_eq!(check_terminal(&score(11, 9), &config), None);
        assert_eq!(check_terminal(&score(11, 8), &config), Some(Side::Human));
    }
}
