use std::str::FromStr;

use crate::MovieError;

/// A command typed at the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Show the command list.
    Help,
    /// Leave the program.
    Exit,
    /// Add a movie.
    Add,
    /// Remove a movie by name.
    Remove,
    /// Print the details of one movie.
    PrintDetails,
    /// Print every movie name.
    PrintAll,
    /// Print the names of movies in a category.
    PrintCategory,
    /// Return to the main menu.
    Home,
    /// Remove every movie after confirmation.
    Clear,
}

impl FromStr for Command {
    type Err = MovieError;

    /// Keywords are matched case-insensitively, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let command = match s.trim().to_lowercase().as_str() {
            "help" => Command::Help,
            "x" => Command::Exit,
            "add" => Command::Add,
            "remove" => Command::Remove,
            "print-details" => Command::PrintDetails,
            "print-all" => Command::PrintAll,
            "print-category" => Command::PrintCategory,
            "home" => Command::Home,
            "clear" => Command::Clear,
            _ => return Err(MovieError::UnknownCommand(s.to_owned())),
        };
        Ok(command)
    }
}
