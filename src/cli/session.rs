//! Interactive menu session.
//!
//! Pure I/O plumbing around the library core: reads menu selections
//! through the `Console` boundary, calls into the services, and prints
//! results. Every recoverable failure (bad option, lookup miss, account
//! errors) is displayed and the loop continues; only console I/O errors
//! end the session.

use itertools::Itertools;

use crate::application::{
    recommend_by_author, recommend_by_theme, ApplicationResult, Library, UserDirectory,
};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::Settings;
use crate::domain::{parse_themes, Book};
use crate::infrastructure::{Console, InfraError};

pub struct Session<'a, C: Console> {
    console: &'a mut C,
    settings: &'a Settings,
    library: Library,
    users: UserDirectory,
    logged_in: bool,
}

impl<'a, C: Console> Session<'a, C> {
    pub fn new(console: &'a mut C, settings: &'a Settings) -> Self {
        Self {
            console,
            settings,
            library: Library::new(),
            users: UserDirectory::new(),
            logged_in: false,
        }
    }

    /// Run the session until the user quits or stdin closes.
    pub fn run(&mut self) -> CliResult<()> {
        loop {
            let result = if self.logged_in {
                self.library_menu()
            } else {
                match self.main_menu() {
                    Ok(false) => return Ok(()),
                    other => other.map(|_| ()),
                }
            };
            match result {
                Ok(()) => {}
                // Recoverable: show the message, keep the loop running
                Err(CliError::InvalidOption(choice)) => {
                    self.say(&format!("Invalid option: {}. Please try again.", choice))?;
                }
                Err(CliError::Infra(InfraError::Application(e))) => {
                    self.say(&e.to_string())?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Returns Ok(false) when the user chooses to quit.
    fn main_menu(&mut self) -> CliResult<bool> {
        self.say("")?;
        self.say("Main Menu:")?;
        self.say("1. Login")?;
        self.say("2. Register")?;
        self.say("3. Quit")?;

        let prompt = self.settings.prompt.clone();
        let choice = self.ask(&prompt)?;
        match choice.as_str() {
            "1" => {
                let username = self.ask("Username:")?;
                let password = self.ask("Password:")?;
                self.app(|s| s.users.authenticate(&username, &password))?;
                self.logged_in = true;
                self.say(&format!("Welcome, {}!", username))?;
                Ok(true)
            }
            "2" => {
                let username = self.ask("Choose a username:")?;
                let password = self.ask("Choose a password:")?;
                self.app(|s| s.users.register(&username, &password))?;
                self.say(&format!("User {} registered.", username))?;
                Ok(true)
            }
            "3" => {
                self.say("Goodbye.")?;
                Ok(false)
            }
            other => Err(CliError::InvalidOption(other.to_string())),
        }
    }

    fn library_menu(&mut self) -> CliResult<()> {
        self.say("")?;
        self.say("Library Menu:")?;
        self.say("1. Add book")?;
        self.say("2. List books")?;
        self.say("3. Find book by title")?;
        self.say("4. Recommend by author")?;
        self.say("5. Recommend by theme")?;
        self.say("6. Author relations")?;
        self.say("7. Catalog tree")?;
        self.say("8. Logout")?;

        let prompt = self.settings.prompt.clone();
        let choice = self.ask(&prompt)?;
        match choice.as_str() {
            "1" => self.add_book(),
            "2" => self.list_books(),
            "3" => self.find_book(),
            "4" => self.recommend_author(),
            "5" => self.recommend_theme(),
            "6" => self.author_relations(),
            "7" => self.catalog_tree(),
            "8" => {
                self.logged_in = false;
                self.say("Logged out.")
            }
            other => Err(CliError::InvalidOption(other.to_string())),
        }
    }

    fn add_book(&mut self) -> CliResult<()> {
        let title = self.ask("Title:")?;
        let author = self.ask("Author:")?;
        let year = self.ask("Year:")?;
        let raw_themes = self.ask("Themes (comma-separated):")?;
        let book = Book::new(title, author, year, parse_themes(&raw_themes));
        self.library.add_book(book);
        self.say("Book added.")
    }

    fn list_books(&mut self) -> CliResult<()> {
        let lines: Vec<String> = self.library.books().iter().map(|b| b.to_string()).collect();
        if lines.is_empty() {
            return self.say("The catalog is empty.");
        }
        for line in lines {
            self.say(&line)?;
        }
        Ok(())
    }

    fn find_book(&mut self) -> CliResult<()> {
        let title = self.ask("Title:")?;
        let found = self.app(|s| s.library.find_by_title(&title).map(|b| b.to_string()))?;
        self.say(&format!("Found: {}", found))
    }

    fn recommend_author(&mut self) -> CliResult<()> {
        let author = self.ask("Author:")?;
        let lines: Vec<String> = recommend_by_author(self.library.catalog(), &author)
            .iter()
            .map(|b| b.to_string())
            .collect();
        self.show_recommendations(&lines, "No books found for that author.")
    }

    fn recommend_theme(&mut self) -> CliResult<()> {
        let theme = self.ask("Theme:")?;
        let lines: Vec<String> = recommend_by_theme(self.library.catalog(), &theme)
            .iter()
            .map(|b| b.to_string())
            .collect();
        self.show_recommendations(&lines, "No books found for that theme.")
    }

    fn show_recommendations(&mut self, lines: &[String], empty_msg: &str) -> CliResult<()> {
        if lines.is_empty() {
            return self.say(empty_msg);
        }
        self.say("Recommended books:")?;
        for line in lines {
            self.say(line)?;
        }
        Ok(())
    }

    fn author_relations(&mut self) -> CliResult<()> {
        let author = self.ask("Author:")?;
        let relations = self.library.relations(&author);
        if relations.is_empty() {
            self.say(&format!("No relations found for {}.", author))?;
            let known = self.library.authors().iter().join(", ");
            if !known.is_empty() {
                self.say(&format!("Known authors: {}", known))?;
            }
            return Ok(());
        }
        let related = relations.iter().join(", ");
        self.say(&format!("Authors related to {}: {}", author, related))
    }

    fn catalog_tree(&mut self) -> CliResult<()> {
        match output::catalog_tree(self.library.catalog()) {
            Some(tree) => {
                for line in tree.to_string().lines() {
                    self.say(line)?;
                }
                Ok(())
            }
            None => self.say("The catalog is empty."),
        }
    }

    /// Run an application operation, lifting its error into the CLI layer.
    fn app<T>(&mut self, f: impl FnOnce(&mut Self) -> ApplicationResult<T>) -> CliResult<T> {
        f(self).map_err(|e| CliError::Infra(InfraError::Application(e)))
    }

    fn ask(&mut self, prompt: &str) -> CliResult<String> {
        self.console
            .read_line(prompt)
            .map_err(|e| CliError::Infra(InfraError::io("read console input", e)))
    }

    fn say(&mut self, line: &str) -> CliResult<()> {
        self.console
            .write_line(line)
            .map_err(|e| CliError::Infra(InfraError::io("write console output", e)))
    }
}
