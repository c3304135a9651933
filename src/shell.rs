//! Interactive line-based shell over a game catalog.

use crate::config::Config;
use crate::game::{GameCollection, GameError, GameRecord};
use crate::query::SortSpec;
use anyhow::{bail, Context, Result};
use log::debug;
use std::io::{BufRead, Write};
use std::path::PathBuf;

const PROMPT: &str = "gameplan> ";

const HELP: &str = "\
Commands:
  filter [expr]             filter the catalog, e.g. filter minPlayers>=2,rating>7
  sort <column>[:asc|:desc] set the sort order for filter and list
  add <selection>           add games from the last filter result
  remove <selection>        remove games from your list
  list                      show your list
  info <name>               show a catalog game
  save [file]               save your list names to a file
  help                      show this message
  exit | quit               leave the shell

A selection is 'all', a position N, a range N-M or a game name.";

/// What the shell should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Shell {
    catalog: GameCollection,
    list: GameCollection,
    /// Result of the last `filter`, the candidates for `add`
    results: Option<Vec<GameRecord>>,
    sort: SortSpec,
    list_file: PathBuf,
}

impl Shell {
    pub fn new(catalog: GameCollection, config: &Config) -> Result<Self> {
        let sort = config
            .query
            .default_sort
            .parse::<SortSpec>()
            .with_context(|| format!("Invalid default sort '{}'", config.query.default_sort))?;
        Ok(Self {
            catalog,
            list: GameCollection::new(),
            results: None,
            sort,
            list_file: config.output.list_file.clone(),
        })
    }

    /// The user's list
    pub fn list(&self) -> &GameCollection {
        &self.list
    }

    pub fn sort(&self) -> &SortSpec {
        &self.sort
    }

    /// Read commands until `exit` or end of input. Command errors are
    /// reported and do not stop the loop.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        writeln!(out, "{} games in catalog. Type 'help' for commands.", self.catalog.len())?;
        let mut lines = input.lines();
        loop {
            write!(out, "{}", PROMPT)?;
            out.flush()?;
            let line = match lines.next() {
                Some(line) => line.context("Failed to read command")?,
                None => break,
            };
            match self.execute(&line, out) {
                Ok(Flow::Exit) => break,
                Ok(Flow::Continue) => {}
                Err(e) => writeln!(out, "Error: {:#}", e)?,
            }
        }
        writeln!(out, "Goodbye!")?;
        Ok(())
    }

    /// Execute a single command line
    pub fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Flow::Continue);
        }
        let (command, arg) = match line.split_once(char::is_whitespace) {
            Some((command, arg)) => (command, arg.trim()),
            None => (line, ""),
        };
        debug!("Shell command '{}' with argument '{}'", command, arg);

        match command.to_lowercase().as_str() {
            "help" => writeln!(out, "{}", HELP)?,
            "filter" => self.filter(arg, out)?,
            "sort" => {
                if arg.is_empty() {
                    writeln!(out, "Sorting by {}", self.sort)?;
                } else {
                    self.sort = arg.parse()?;
                    writeln!(out, "Sorting by {}", self.sort)?;
                }
            }
            "add" => {
                let selection = required(arg, "add <selection>")?;
                let candidates = match &self.results {
                    Some(results) => results.as_slice(),
                    None => self.catalog.all(),
                };
                let added = self.list.add_selection(selection, candidates)?;
                writeln!(out, "Added {} game(s); your list has {}", added, self.list.len())?;
            }
            "remove" => {
                let selection = required(arg, "remove <selection>")?;
                let removed = self.list.remove_selection(selection)?;
                writeln!(out, "Removed {} game(s); your list has {}", removed, self.list.len())?;
            }
            "list" => {
                if self.list.is_empty() {
                    writeln!(out, "Your list is empty")?;
                } else {
                    let games = self.list.query(None, &self.sort)?;
                    print_numbered(&games, out)?;
                }
            }
            "info" => {
                let name = required(arg, "info <name>")?;
                let game = self
                    .catalog
                    .find_by_name(name)
                    .ok_or_else(|| GameError::GameNotFound(name.to_string()))?;
                writeln!(out, "{}", game)?;
                writeln!(
                    out,
                    "  rating {:.2}, difficulty {:.2}, rank {}, published {}",
                    game.rating(),
                    game.difficulty(),
                    game.rank(),
                    game.year_published()
                )?;
            }
            "save" => {
                let path = if arg.is_empty() {
                    self.list_file.clone()
                } else {
                    PathBuf::from(arg)
                };
                self.list
                    .save_names(&path)
                    .with_context(|| format!("Failed to save list to {}", path.display()))?;
                writeln!(out, "Saved {} game(s) to {}", self.list.len(), path.display())?;
            }
            "exit" | "quit" => return Ok(Flow::Exit),
            other => bail!("Unknown command '{}'. Type 'help' for commands", other),
        }
        Ok(Flow::Continue)
    }

    fn filter<W: Write>(&mut self, expr: &str, out: &mut W) -> Result<()> {
        let filter = if expr.is_empty() { None } else { Some(expr) };
        let results = self.catalog.query(filter, &self.sort)?;
        if results.is_empty() {
            writeln!(out, "No games match")?;
        } else {
            print_numbered(&results, out)?;
            writeln!(out, "{} game(s) found", results.len())?;
        }
        self.results = Some(results);
        Ok(())
    }
}

fn required<'a>(arg: &'a str, usage: &str) -> Result<&'a str> {
    if arg.is_empty() {
        bail!("Usage: {}", usage);
    }
    Ok(arg)
}

fn print_numbered<W: Write>(games: &[GameRecord], out: &mut W) -> Result<()> {
    for (i, game) in games.iter().enumerate() {
        writeln!(out, "{:>4}. {}", i + 1, game)?;
    }
    Ok(())
}
