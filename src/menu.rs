use std::fmt::Display;

#[derive(Debug, PartialEq, Eq)]
pub struct MenuOption {
    pub label: &'static str,
    pub key: &'static str,
}

impl Display for MenuOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}. {}", self.key, self.label)
    }
}

pub const EXIT_KEY: &str = "4";

pub static OPTIONS: [MenuOption; 4] = [
    MenuOption {
        label: "Option 1",
        key: "1",
    },
    MenuOption {
        label: "Option 2",
        key: "2",
    },
    MenuOption {
        label: "Option 3",
        key: "3",
    },
    MenuOption {
        label: "Exit",
        key: EXIT_KEY,
    },
];

pub const PROMPT: &str = "Enter an option: ";

#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    Select(&'static MenuOption),
    Exit,
    Invalid,
}

impl Action {
    pub fn is_exit(&self) -> bool {
        matches!(self, Action::Exit)
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Select(option) => write!(f, "{} selected.", option.label),
            Action::Exit => write!(f, "Exiting..."),
            Action::Invalid => write!(f, "Invalid option. Please try again."),
        }
    }
}

/// Maps one line of input to its action. Surrounding whitespace is ignored,
/// anything that is not exactly one of the keys is `Invalid`.
pub fn dispatch(line: &str) -> Action {
    match OPTIONS.iter().find(|option| option.key == line.trim()) {
        Some(option) if option.key == EXIT_KEY => Action::Exit,
        Some(option) => Action::Select(option),
        None => Action::Invalid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_listing() {
        let listing: Vec<String> = OPTIONS.iter().map(|o| o.to_string()).collect();
        assert_eq!(
            listing,
            vec!["1. Option 1", "2. Option 2", "3. Option 3", "4. Exit"]
        );
    }

    #[test]
    fn test_select() {
        for (key, expected) in [
            ("1", "Option 1 selected."),
            ("2", "Option 2 selected."),
            ("3", "Option 3 selected."),
        ] {
            let action = dispatch(key);
            assert!(matches!(action, Action::Select(option) if option.key == key));
            assert_eq!(action.to_string(), expected);
        }
    }

    #[test]
    fn test_exit() {
        assert_eq!(dispatch("4"), Action::Exit);
        assert_eq!(dispatch("4").to_string(), "Exiting...");
        assert!(dispatch("4").is_exit());
        assert!(!dispatch("1").is_exit());
    }

    #[test]
    fn test_invalid() {
        for line in ["", "   ", "abc", "5", "0", "11", "1 2", "Exit", "4."] {
            assert_eq!(dispatch(line), Action::Invalid, "{:?}", line);
        }
        assert_eq!(
            Action::Invalid.to_string(),
            "Invalid option. Please try again."
        );
    }

    #[test]
    fn test_surrounding_whitespace() {
        assert_eq!(dispatch(" 2 "), Action::Select(&OPTIONS[1]));
        assert_eq!(dispatch("3\n"), Action::Select(&OPTIONS[2]));
        assert_eq!(dispatch("\t4\r\n"), Action::Exit);
    }
}
