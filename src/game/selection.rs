//! Selection strings used to pick games out of a numbered list.
//!
//! ```text
//! selection := 'all' | N | N '-' M | name
//! ```
//!
//! Positions are 1-based and ranges are inclusive.

use crate::game::{GameError, GameRecord, GameResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    All,
    Index(usize),
    Range(usize, usize),
    Name(String),
}

impl Selection {
    pub fn parse(input: &str) -> GameResult<Selection> {
        let input = input.trim();
        if input.is_empty() {
            return Err(GameError::InvalidSelection(input.to_string()));
        }
        if input.eq_ignore_ascii_case("all") {
            return Ok(Selection::All);
        }
        if is_number(input) {
            return parse_position(input).map(Selection::Index);
        }
        if let Some((start, end)) = input.split_once('-') {
            let (start, end) = (start.trim(), end.trim());
            if is_number(start) && is_number(end) {
                return Ok(Selection::Range(parse_position(start)?, parse_position(end)?));
            }
        }
        Ok(Selection::Name(input.to_string()))
    }

    /// Resolve the selection against a numbered list of games
    pub fn pick<'a>(&self, games: &'a [GameRecord]) -> GameResult<Vec<&'a GameRecord>> {
        match self {
            Selection::All => Ok(games.iter().collect()),
            Selection::Index(index) => {
                if *index == 0 || *index > games.len() {
                    return Err(GameError::InvalidIndex {
                        index: *index,
                        len: games.len(),
                    });
                }
                Ok(vec![&games[index - 1]])
            }
            Selection::Range(start, end) => {
                if *start == 0 || start > end || *end > games.len() {
                    return Err(GameError::InvalidRange {
                        start: *start,
                        end: *end,
                        len: games.len(),
                    });
                }
                Ok(games[start - 1..*end].iter().collect())
            }
            Selection::Name(name) => {
                let key = name.to_lowercase();
                games
                    .iter()
                    .find(|game| game.key() == key)
                    .map(|game| vec![game])
                    .ok_or_else(|| GameError::GameNotFound(name.clone()))
            }
        }
    }
}

fn is_number(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

fn parse_position(s: &str) -> GameResult<usize> {
    s.parse()
        .map_err(|_| GameError::InvalidSelection(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn games() -> GameResult<Vec<GameRecord>> {
        ["Azul", "Catan", "Chess", "Go"]
            .into_iter()
            .map(|name| GameRecord::builder(name).build())
            .collect()
    }

    fn names(picked: &[&GameRecord]) -> Vec<String> {
        picked.iter().map(|g| g.name().to_string()).collect()
    }

    #[test]
    fn test_parse() -> GameResult<()> {
        assert_eq!(Selection::parse("all")?, Selection::All);
        assert_eq!(Selection::parse(" ALL ")?, Selection::All);
        assert_eq!(Selection::parse("3")?, Selection::Index(3));
        assert_eq!(Selection::parse("2-4")?, Selection::Range(2, 4));
        assert_eq!(Selection::parse("2 - 4")?, Selection::Range(2, 4));
        assert_eq!(
            Selection::parse("Go Fish")?,
            Selection::Name("Go Fish".to_string())
        );
        assert_eq!(
            Selection::parse("7 Wonders")?,
            Selection::Name("7 Wonders".to_string())
        );
        assert_eq!(
            Selection::parse("1-A")?,
            Selection::Name("1-A".to_string())
        );
        assert!(matches!(
            Selection::parse("  "),
            Err(GameError::InvalidSelection(_))
        ));
        Ok(())
    }

    #[test]
    fn test_parse_overflowing_index() {
        assert!(matches!(
            Selection::parse("99999999999999999999999"),
            Err(GameError::InvalidSelection(_))
        ));
    }

    #[test]
    fn test_pick_index_and_range() -> GameResult<()> {
        let games = games()?;
        assert_eq!(names(&Selection::Index(1).pick(&games)?), vec!["Azul"]);
        assert_eq!(
            names(&Selection::Range(2, 3).pick(&games)?),
            vec!["Catan", "Chess"]
        );
        assert_eq!(names(&Selection::All.pick(&games)?).len(), 4);
        Ok(())
    }

    #[test]
    fn test_pick_out_of_bounds() -> GameResult<()> {
        let games = games()?;
        assert!(matches!(
            Selection::Index(0).pick(&games),
            Err(GameError::InvalidIndex { index: 0, len: 4 })
        ));
        assert!(matches!(
            Selection::Index(5).pick(&games),
            Err(GameError::InvalidIndex { .. })
        ));
        assert!(matches!(
            Selection::Range(3, 2).pick(&games),
            Err(GameError::InvalidRange { .. })
        ));
        assert!(matches!(
            Selection::Range(2, 5).pick(&games),
            Err(GameError::InvalidRange { .. })
        ));
        Ok(())
    }

    #[test]
    fn test_pick_by_name() -> GameResult<()> {
        let games = games()?;
        assert_eq!(
            names(&Selection::Name("chess".to_string()).pick(&games)?),
            vec!["Chess"]
        );
        assert!(matches!(
            Selection::Name("Monopoly".to_string()).pick(&games),
            Err(GameError::GameNotFound(_))
        ));
        Ok(())
    }
}
