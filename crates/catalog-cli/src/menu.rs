//! Main menu options.

/// One main-menu choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    List,
    Add,
    Edit,
    Delete,
    Statistics,
    Export,
    Exit,
}

impl MenuCommand {
    pub const ALL: [MenuCommand; 7] = [
        MenuCommand::List,
        MenuCommand::Add,
        MenuCommand::Edit,
        MenuCommand::Delete,
        MenuCommand::Statistics,
        MenuCommand::Export,
        MenuCommand::Exit,
    ];

    /// Option number typed at the prompt.
    pub fn key(&self) -> &'static str {
        match self {
            MenuCommand::List => "1",
            MenuCommand::Add => "2",
            MenuCommand::Edit => "3",
            MenuCommand::Delete => "4",
            MenuCommand::Statistics => "5",
            MenuCommand::Export => "6",
            MenuCommand::Exit => "7",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuCommand::List => "List all programs",
            MenuCommand::Add => "Add program (to an existing CSV)",
            MenuCommand::Edit => "Edit program (by id)",
            MenuCommand::Delete => "Delete program (by id)",
            MenuCommand::Statistics => "Statistics",
            MenuCommand::Export => "Export consolidated CSV",
            MenuCommand::Exit => "Exit",
        }
    }

    /// Exact match on the option number, ignoring surrounding whitespace.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        Self::ALL.into_iter().find(|command| command.key() == input)
    }
}

/// Menu text shown before every prompt.
pub fn render_menu() -> String {
    let mut menu = String::from("\n--- University Program Catalog ---\n");
    for command in MenuCommand::ALL {
        menu.push_str(&format!("{}) {}\n", command.key(), command.label()));
    }
    menu
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_option_numbers() {
        assert_eq!(MenuCommand::parse("1"), Some(MenuCommand::List));
        assert_eq!(MenuCommand::parse(" 7\n"), Some(MenuCommand::Exit));
        assert_eq!(MenuCommand::parse("8"), None);
        assert_eq!(MenuCommand::parse("01"), None);
        assert_eq!(MenuCommand::parse("list"), None);
    }

    #[test]
    fn menu_text() {
        let menu = render_menu();
        insta::assert_snapshot!(menu.trim(), @r"
        --- University Program Catalog ---
        1) List all programs
        2) Add program (to an existing CSV)
        3) Edit program (by id)
        4) Delete program (by id)
        5) Statistics
        6) Export consolidated CSV
        7) Exit
        ");
    }
}
