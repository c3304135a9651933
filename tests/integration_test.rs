use gameplan::config::Config;
use gameplan::game::{load_catalog, GameCollection, GameRecord, GameResult};
use gameplan::query::{query, Column, Condition, Literal, Operator, QueryError, SortSpec};
use gameplan::shell::Shell;
use std::collections::BTreeSet;
use std::io::{Cursor, Write};
use tempfile::{tempdir, NamedTempFile};

/// (name, minPlayers, maxPlayers, rating)
fn scenario() -> GameResult<GameCollection> {
    let rows = [
        ("Go", 2, 5, 7.5),
        ("Go Fish", 2, 10, 6.5),
        ("golang", 2, 7, 9.5),
        ("GoRami", 6, 6, 8.5),
        ("Chess", 2, 2, 10.0),
    ];
    let mut games = GameCollection::new();
    for (name, min, max, rating) in rows {
        games.add(
            GameRecord::builder(name)
                .players(min, max)
                .rating(rating)
                .build()?,
        );
    }
    Ok(games)
}

fn names(records: &[GameRecord]) -> Vec<String> {
    records.iter().map(|g| g.name().to_string()).collect()
}

fn name_set(records: &[GameRecord]) -> BTreeSet<String> {
    records.iter().map(|g| g.name().to_string()).collect()
}

fn set(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_null_filter_returns_everything_by_name() -> anyhow::Result<()> {
    let games = scenario()?;
    let expected = vec!["Chess", "Go", "Go Fish", "golang", "GoRami"];

    assert_eq!(names(&query(games.all(), None, &SortSpec::default())?), expected);
    assert_eq!(names(&query(games.all(), Some("  "), &SortSpec::default())?), expected);
    Ok(())
}

#[test]
fn test_queries_are_reproducible() -> anyhow::Result<()> {
    let games = scenario()?;
    let sort = SortSpec::descending(Column::MinPlayers);
    let first = query(games.all(), Some("rating>=7"), &sort)?;
    let second = query(games.all(), Some("rating>=7"), &sort)?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_numeric_filter_is_sound_and_complete() -> anyhow::Result<()> {
    let games = scenario()?;
    for threshold in [0.0, 6.5, 7.5, 8.0, 9.5, 10.0] {
        let clause = format!("rating>{}", threshold);
        let result = query(games.all(), Some(clause.as_str()), &SortSpec::default())?;
        assert!(result.iter().all(|g| g.rating() > threshold));

        let returned = name_set(&result);
        for game in games.all() {
            if !returned.contains(game.name()) {
                assert!(game.rating() <= threshold, "{} was dropped", game.name());
            }
        }
    }
    Ok(())
}

#[test]
fn test_conjunction_is_intersection() -> anyhow::Result<()> {
    let games = scenario()?;
    let sort = SortSpec::default();
    let both = name_set(&query(games.all(), Some("minPlayers>2,rating>=7"), &sort)?);
    let players = name_set(&query(games.all(), Some("minPlayers>2"), &sort)?);
    let rating = name_set(&query(games.all(), Some("rating>=7"), &sort)?);

    assert_eq!(both, players.intersection(&rating).cloned().collect());
    assert_eq!(both, set(&["GoRami"]));
    Ok(())
}

#[test]
fn test_two_character_operators_win() -> anyhow::Result<()> {
    let condition: Condition = "name>=Go".parse()?;
    assert_eq!(condition.operator, Operator::GreaterEqual);
    assert_eq!(condition.literal, Literal::Text("Go".to_string()));

    let condition = Condition::parse("rating<=7.5")?;
    assert_eq!(condition.operator, Operator::LessEqual);
    assert_eq!(condition.literal, Literal::Number(7.5));
    Ok(())
}

#[test]
fn test_name_equality_ignores_case() -> anyhow::Result<()> {
    let games = scenario()?;
    let result = query(games.all(), Some("name==go"), &SortSpec::default())?;
    assert_eq!(names(&result), vec!["Go"]);
    Ok(())
}

#[test]
fn test_unknown_column() {
    assert_eq!(
        Condition::parse("foo==1"),
        Err(QueryError::UnknownColumn("foo".to_string()))
    );
}

#[test]
fn test_one_bad_clause_fails_whole_query() -> GameResult<()> {
    let games = scenario()?;
    let result = query(games.all(), Some("rating>7,rating~=8"), &SortSpec::default());
    assert!(matches!(result, Err(QueryError::InvalidOperator { .. })));
    let result = query(games.all(), Some("rating>seven"), &SortSpec::default());
    assert!(matches!(result, Err(QueryError::InvalidValue { .. })));
    Ok(())
}

#[test]
fn test_scenario() -> anyhow::Result<()> {
    let games = scenario()?;
    let sort = SortSpec::default();

    let contains = query(games.all(), Some("name~=Go"), &sort)?;
    assert_eq!(name_set(&contains), set(&["Go", "Go Fish", "golang", "GoRami"]));

    let after_go = query(games.all(), Some("name>Go"), &sort)?;
    assert_eq!(names(&after_go), vec!["Go Fish", "golang", "GoRami"]);
    let mut byte_order = names(&after_go);
    byte_order.sort();
    assert_eq!(byte_order, vec!["Go Fish", "GoRami", "golang"]);
    Ok(())
}

#[test]
fn test_results_are_snapshots() -> anyhow::Result<()> {
    let mut games = scenario()?;
    let before = games.query(Some("rating>9"), &SortSpec::default())?;
    games.clear();
    assert_eq!(names(&before), vec!["Chess", "golang"]);
    Ok(())
}

#[test]
fn test_descending_keeps_ties_in_input_order() -> anyhow::Result<()> {
    let games = scenario()?;
    let result = query(games.all(), Some("minPlayers==2"), &SortSpec::descending(Column::MinPlayers))?;
    assert_eq!(names(&result), vec!["Go", "Go Fish", "golang", "Chess"]);
    Ok(())
}

#[test]
fn test_catalog_to_saved_list() -> anyhow::Result<()> {
    let mut csv = NamedTempFile::new()?;
    write!(
        csv,
        "objectname,minplayers,maxplayers,minplaytime,maxplaytime,average\n\
         Go,2,2,30,180,7.6\n\
         Catan,3,4,60,120,7.1\n\
         Azul,2,4,30,45,7.8\n\
         catan,3,4,60,120,7.1\n"
    )?;
    let catalog = GameCollection::from_records(load_catalog(csv.path())?);
    assert_eq!(catalog.len(), 3);

    let dir = tempdir()?;
    let list_file = dir.path().join("games_list.txt");
    let mut config = Config::default();
    config.output.list_file = list_file.clone();

    let mut shell = Shell::new(catalog, &config)?;
    let mut out = Vec::new();
    shell.run(
        Cursor::new("filter maxPlayers>=4,rating>7\nadd all\nremove azul\nsave\n"),
        &mut out,
    )?;

    assert_eq!(std::fs::read_to_string(&list_file)?, "Catan\n");
    Ok(())
}

#[test]
fn test_text_ordering_agrees_with_equality() -> anyhow::Result<()> {
    let games = GameCollection::from_records([GameRecord::builder("ΟΔΟΣ").build()?]);
    let count = |filter: &str| -> anyhow::Result<usize> {
        Ok(games.query(Some(filter), &SortSpec::default())?.len())
    };
    assert_eq!(count("name==ΟΔΟΣ")?, 1);
    assert_eq!(count("name>=ΟΔΟΣ")?, 1);
    assert_eq!(count("name<=ΟΔΟΣ")?, 1);
    assert_eq!(count("name>ΟΔΟΣ")?, 0);
    assert_eq!(count("name<ΟΔΟΣ")?, 0);
    Ok(())
}
