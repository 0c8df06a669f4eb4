//! The line-based interactive menu.
//!
//! Each numbered command prompts for its inputs, calls one
//! [`ReviewService`] operation, and prints the result. A failed command is
//! reported and the menu is shown again; only I/O errors on the console
//! itself end the loop.

use std::io::{self, BufRead, Write};

use reel_core::{
  ReviewService,
  movie::{Movie, MovieId},
  opinion::Opinion,
  store::{OpinionRepository, Repository},
};
use thiserror::Error;
use tracing::error;

/// Why a single menu command was aborted.
#[derive(Debug, Error)]
enum CommandError {
  #[error(transparent)]
  Review(#[from] reel_core::Error),

  /// Input that could not be parsed; the message is shown as-is.
  #[error("{0}")]
  Input(&'static str),

  /// Input ended in the middle of a prompt.
  #[error("input closed")]
  Eof,

  #[error(transparent)]
  Io(#[from] io::Error),
}

/// Drives a [`ReviewService`] from a line reader, writing to `output`.
pub struct Console<'a, M, O, R, W> {
  service: &'a ReviewService<M, O>,
  input:   R,
  output:  W,
}

impl<'a, M, O, R, W> Console<'a, M, O, R, W>
where
  M: Repository<Movie>,
  O: OpinionRepository,
  R: BufRead,
  W: Write,
{
  pub fn new(service: &'a ReviewService<M, O>, input: R, output: W) -> Self {
    Self { service, input, output }
  }

  /// Show the menu until the user picks `0` or input ends.
  pub async fn run(&mut self) -> anyhow::Result<()> {
    loop {
      self.print_menu()?;

      let Some(line) = self.read_line()? else {
        writeln!(self.output)?;
        writeln!(self.output, "Closing application...")?;
        return Ok(());
      };

      let outcome = match line.trim().parse::<u32>() {
        Ok(0) => {
          writeln!(self.output, "Closing application...")?;
          return Ok(());
        }
        Ok(1) => self.list_movies().await,
        Ok(2) => self.list_opinions().await,
        Ok(3) => self.register_movie().await,
        Ok(4) => self.opinions_by_reviewer().await,
        Ok(5) => self.add_opinion().await,
        Ok(6) => self.low_score_movies().await,
        _ => Err(CommandError::Input("Invalid option.")),
      };

      match outcome {
        Ok(()) | Err(CommandError::Eof) => {}
        Err(CommandError::Io(e)) => return Err(e.into()),
        Err(CommandError::Input(msg)) => writeln!(self.output, "{msg}")?,
        Err(CommandError::Review(e @ reel_core::Error::Store(_))) => {
          error!(error = %e, "store operation failed");
          writeln!(self.output, "Error: {e}")?;
        }
        Err(CommandError::Review(e)) => writeln!(self.output, "Error: {e}")?,
      }
    }
  }

  fn print_menu(&mut self) -> io::Result<()> {
    writeln!(self.output, "===== ===== ===== Review manager ===== ===== =====")?;
    writeln!(self.output, "1. List all movies")?;
    writeln!(self.output, "2. List all opinions")?;
    writeln!(self.output, "3. Register a new movie")?;
    writeln!(self.output, "4. List opinions by reviewer")?;
    writeln!(self.output, "5. Add an opinion to a movie")?;
    writeln!(self.output, "6. List movies with low score (<= 3)")?;
    writeln!(self.output, "0. Exit")?;
    write!(self.output, "Choose an option: ")?;
    self.output.flush()
  }

  /// Next line without its terminator, or `None` at end of input.
  fn read_line(&mut self) -> io::Result<Option<String>> {
    let mut line = String::new();
    if self.input.read_line(&mut line)? == 0 {
      return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(Some(line))
  }

  fn prompt(&mut self, label: &str) -> Result<String, CommandError> {
    write!(self.output, "{label}")?;
    self.output.flush()?;
    self.read_line()?.ok_or(CommandError::Eof)
  }

  // ── Commands ──────────────────────────────────────────────────────────────

  async fn list_movies(&mut self) -> Result<(), CommandError> {
    let movies = self.service.list_movies().await?;
    writeln!(self.output, "--- MOVIES ---")?;
    for movie in movies {
      writeln!(
        self.output,
        "Movie [id={}, title={}]",
        display_or_none(movie.id),
        movie.title
      )?;
    }
    Ok(())
  }

  async fn list_opinions(&mut self) -> Result<(), CommandError> {
    let opinions = self.service.list_opinions().await?;
    writeln!(self.output, "--- OPINIONS ---")?;
    self.print_opinions(&opinions)
  }

  async fn register_movie(&mut self) -> Result<(), CommandError> {
    let title = self.prompt("Title of the new movie: ")?;
    let movie = self.service.register_movie(title).await?;
    writeln!(
      self.output,
      "Movie created with id={}, title={}",
      display_or_none(movie.id),
      movie.title
    )?;
    Ok(())
  }

  async fn opinions_by_reviewer(&mut self) -> Result<(), CommandError> {
    let reviewer = self.prompt("Reviewer: ")?;
    let opinions = self.service.opinions_by_reviewer(Some(reviewer.as_str())).await?;
    writeln!(self.output, "--- OPINIONS BY {reviewer} ---")?;
    self.print_opinions(&opinions)
  }

  /// Prompts for movie id, description, reviewer and score. An empty
  /// description is stored as no description rather than as `""`.
  async fn add_opinion(&mut self) -> Result<(), CommandError> {
    let movie_id = self
      .prompt("Movie id: ")?
      .trim()
      .parse::<i64>()
      .map(MovieId)
      .map_err(|_| CommandError::Input("Invalid id."))?;
    let description = self.prompt("Description: ")?;
    let reviewer = self.prompt("Reviewer: ")?;
    let score = self
      .prompt("Score (0-10): ")?
      .trim()
      .parse::<i32>()
      .map_err(|_| CommandError::Input("Invalid score."))?;

    let description = (!description.is_empty()).then_some(description);
    let opinion = self
      .service
      .add_opinion_to_movie(movie_id, description, reviewer, Some(score))
      .await?;
    writeln!(self.output, "Opinion created with id={}", display_or_none(opinion.id))?;
    Ok(())
  }

  async fn low_score_movies(&mut self) -> Result<(), CommandError> {
    let titles = self.service.movies_with_low_score().await?;
    writeln!(self.output, "--- MOVIES WITH A SCORE <= 3 ---")?;
    for title in titles {
      writeln!(self.output, "Movie [title={title}]")?;
    }
    Ok(())
  }

  fn print_opinions(&mut self, opinions: &[Opinion]) -> Result<(), CommandError> {
    for o in opinions {
      writeln!(
        self.output,
        "Opinion [id={}, reviewer={}, score={}, movieId={}]",
        display_or_none(o.id),
        o.reviewer,
        display_or_none(o.score),
        display_or_none(o.movie_id)
      )?;
    }
    Ok(())
  }
}

fn display_or_none<T: std::fmt::Display>(value: Option<T>) -> String {
  value.map_or_else(|| "none".to_owned(), |v| v.to_string())
}
