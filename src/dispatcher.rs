use std::io::{BufRead, Write};

use chrono::NaiveDate;
use log::debug;

use crate::command::Command;
use crate::{MovieCollection, MovieError, Result};

const MENU: &str = "\
Welcome to the Movie Collection App.
Type 'help' to view commands
Type 'x' to exit
";

const COMMANDS: &str = "\
Type 'Add' to add a movie.
Type 'Remove' to remove a movie.
Type 'Print-details' to print movie details.
Type 'Print-all' to print all movies.
Type 'Print-Category' to print movies by category.
Type 'Clear' to remove everything from the collection.
Type 'Home' to return to main menu.
";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// The text-menu front end of a movie collection.
///
/// Generic over its input and output so the same loop serves the console
/// and in-memory buffers.
pub struct Dispatcher<R: BufRead, W: Write> {
    collection: MovieCollection,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Dispatcher<R, W> {
    /// Creates a `Dispatcher` driving the given collection.
    pub fn new(collection: MovieCollection, input: R, output: W) -> Self {
        Self {
            collection,
            input,
            output,
        }
    }

    /// Consumes the dispatcher, handing back its collection.
    pub fn into_collection(self) -> MovieCollection {
        self.collection
    }

    /// Runs the menu loop until `x` is entered or input ends.
    ///
    /// # Errors
    ///
    /// An `InvalidArgument` from adding a movie ends the loop and is
    /// returned, as is `InputClosed` if input ends in the middle of a prompt.
    pub fn run(&mut self) -> Result<()> {
        self.show_menu()?;

        while let Some(line) = self.read_line()? {
            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(e) => {
                    debug!("{}", e);
                    writeln!(self.output, "Invalid input, type 'help' to view command list")?;
                    self.show_menu()?;
                    continue;
                }
            };
            debug!("Dispatching {:?}", command);

            match command {
                Command::Help => {
                    self.show_commands()?;
                    continue;
                }
                Command::Exit => {
                    writeln!(self.output, "Exiting the program...")?;
                    self.output.flush()?;
                    return Ok(());
                }
                Command::Add => self.add_movie()?,
                Command::Remove => self.remove_movie()?,
                Command::PrintDetails => self.print_details()?,
                Command::PrintAll => self.print_all()?,
                Command::PrintCategory => self.print_category()?,
                Command::Clear => self.clear_movies()?,
                Command::Home => {}
            }
            self.show_menu()?;
        }

        debug!("Input closed at the menu");
        self.output.flush()?;
        Ok(())
    }

    fn show_menu(&mut self) -> Result<()> {
        writeln!(self.output, "{MENU}")?;
        self.output.flush()?;
        Ok(())
    }

    fn show_commands(&mut self) -> Result<()> {
        writeln!(self.output, "{COMMANDS}")?;
        self.output.flush()?;
        Ok(())
    }

    fn add_movie(&mut self) -> Result<()> {
        let name = self.prompt("Enter movie name: ")?;
        let category = self.prompt("Enter category: ")?;
        let release_date = self.prompt_date()?;
        let runtime = self.prompt("Enter runtime: ")?;

        let outcome = self
            .collection
            .add(name.as_str(), category, release_date, runtime)?;
        if outcome.already_exists() {
            writeln!(self.output, "{name} already exists.")?;
        } else {
            writeln!(self.output, "{name} added successfully!")?;
        }
        Ok(())
    }

    fn remove_movie(&mut self) -> Result<()> {
        let name = self.prompt("Enter movie to remove: ")?;
        if self.collection.remove(&name) {
            writeln!(self.output, "{name} removed successfully!")?;
        } else {
            writeln!(self.output, "{name} does not exists. Please try again")?;
        }
        Ok(())
    }

    fn print_details(&mut self) -> Result<()> {
        let name = self.prompt("Enter movie: ")?;
        let details = self.collection.details(&name);
        writeln!(self.output, "{details}")?;
        Ok(())
    }

    fn print_all(&mut self) -> Result<()> {
        writeln!(self.output, "Current movies in the collection : ")?;
        let mut found = false;
        for name in self.collection.list_all() {
            writeln!(self.output, "{name}")?;
            found = true;
        }
        if !found {
            writeln!(self.output, "There are currently no movies in the collection")?;
        }
        Ok(())
    }

    fn print_category(&mut self) -> Result<()> {
        let category = self.prompt("Enter a category: ")?;
        writeln!(self.output, "Current movies in this category: {category}")?;
        let mut found = false;
        for name in self.collection.list_by_category(&category) {
            writeln!(self.output, "{name}")?;
            found = true;
        }
        if !found {
            writeln!(self.output, "There are currently no movies in this category.")?;
        }
        Ok(())
    }

    fn clear_movies(&mut self) -> Result<()> {
        let answer = self.prompt("Are you sure you want to clear the collection? (y/n): ")?;
        if !answer.trim().eq_ignore_ascii_case("y") {
            writeln!(self.output, "Clear operation canceled.")?;
            return Ok(());
        }

        if self.collection.clear_all() {
            writeln!(self.output, "The movie collection has been cleared.")?;
        } else {
            writeln!(
                self.output,
                "There are currently no movies in the collection to clear."
            )?;
        }
        Ok(())
    }

    /// Asks for a release date until one parses. There is no attempt limit.
    fn prompt_date(&mut self) -> Result<NaiveDate> {
        loop {
            let answer = self.prompt("Enter release date (YYYY-MM-DD): ")?;
            match parse_release_date(&answer) {
                Some(date) => return Ok(date),
                None => {
                    debug!("Rejected release date '{}'", answer);
                    writeln!(
                        self.output,
                        "Invalid date format. Please enter the date in the format YYYY-MM-DD"
                    )?;
                }
            }
        }
    }

    fn prompt(&mut self, message: &str) -> Result<String> {
        write!(self.output, "{message}")?;
        self.output.flush()?;
        self.read_line()?.ok_or(MovieError::InputClosed)
    }

    /// Reads one line without its terminator. `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(len);
        Ok(Some(line))
    }
}

/// Parses a date written exactly as `YYYY-MM-DD`.
///
/// chrono alone also takes one-digit fields, signs and short years.
fn parse_release_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    let well_formed = input.len() == 10
        && input.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return None;
    }
    NaiveDate::parse_from_str(input, DATE_FORMAT).ok()
}
