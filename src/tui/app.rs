//! Application state for the TUI
//!
//! The TUI is a small set of screens. `App` tracks which one is showing,
//! the form on it, and the status line; every ledger change goes through
//! the service layer.

use crate::config::settings::{ChartMetric, Settings};
use crate::display::{format_expense_line, format_goal_line};
use crate::error::BudgetResult;
use crate::services::{CategoryService, ExpenseService, SavingsService};
use crate::storage::Storage;

use super::widgets::TextInput;

/// The screen currently shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    MainMenu,
    Categories,
    Expenses,
    Savings,
    Chart,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Self::MainMenu => "Budget Planner",
            Self::Categories => "Manage Categories",
            Self::Expenses => "Add/View Expenses",
            Self::Savings => "Manage Savings Goals",
            Self::Chart => "Budget Chart",
        }
    }
}

/// What a main menu entry does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Open(Screen),
    Quit,
}

/// Main menu entries, in display order
pub const MENU_ITEMS: [MenuAction; 5] = [
    MenuAction::Open(Screen::Categories),
    MenuAction::Open(Screen::Expenses),
    MenuAction::Open(Screen::Savings),
    MenuAction::Open(Screen::Chart),
    MenuAction::Quit,
];

impl MenuAction {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Open(Screen::Chart) => "View Data Visualization",
            Self::Open(screen) => screen.title(),
            Self::Quit => "Quit",
        }
    }
}

/// Status line message kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// A set of text inputs with one focused field
#[derive(Debug, Clone, Default)]
pub struct Form {
    pub fields: Vec<TextInput>,
    pub focus: usize,
}

impl Form {
    fn new(fields: Vec<TextInput>) -> Self {
        let mut form = Self { fields, focus: 0 };
        form.sync_focus();
        form
    }

    fn sync_focus(&mut self) {
        for (i, field) in self.fields.iter_mut().enumerate() {
            field.focused = i == self.focus;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn focused_mut(&mut self) -> Option<&mut TextInput> {
        self.fields.get_mut(self.focus)
    }

    pub fn next_field(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + 1) % self.fields.len();
            self.sync_focus();
        }
    }

    pub fn prev_field(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
            self.sync_focus();
        }
    }

    pub fn value(&self, index: usize) -> &str {
        self.fields.get(index).map(|f| f.value()).unwrap_or("")
    }

    /// Clear every field and focus the first
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.clear();
        }
        self.focus = 0;
        self.sync_focus();
    }
}

fn form_for(screen: Screen) -> Form {
    let fields = match screen {
        Screen::Categories => vec![
            TextInput::new().label("Name").placeholder("Category Name"),
            TextInput::new().label("Limit").placeholder("Budget Limit"),
        ],
        Screen::Expenses => vec![
            TextInput::new()
                .label("Category")
                .placeholder("Up/Down to pick a category"),
            TextInput::new().label("Amount").placeholder("Amount"),
        ],
        Screen::Savings => vec![
            TextInput::new().label("Goal").placeholder("Goal Name"),
            TextInput::new()
                .label("Amount")
                .placeholder("Target or deposit amount"),
        ],
        Screen::MainMenu | Screen::Chart => Vec::new(),
    };
    Form::new(fields)
}

/// Main application state
pub struct App<'a> {
    /// The storage layer (owns the ledger)
    pub storage: &'a mut Storage,

    /// Application settings
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Screen currently shown
    pub screen: Screen,

    /// Highlighted main menu entry
    pub menu_index: usize,

    /// Form on the current screen
    pub form: Form,

    /// Category picked in the expense form, as an index into the ledger
    pub category_choice: Option<usize>,

    /// Metric shown on the chart screen
    pub chart_metric: ChartMetric,

    /// Status message to display
    pub status: Option<(StatusKind, String)>,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(storage: &'a mut Storage, settings: &'a Settings) -> Self {
        Self {
            storage,
            settings,
            should_quit: false,
            screen: Screen::default(),
            menu_index: 0,
            form: Form::default(),
            category_choice: None,
            chart_metric: settings.default_chart_metric,
            status: None,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_info(&mut self, message: impl Into<String>) {
        self.status = Some((StatusKind::Info, message.into()));
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status = Some((StatusKind::Error, message.into()));
    }

    /// Show a different screen with a fresh form
    pub fn switch_screen(&mut self, screen: Screen) {
        self.screen = screen;
        self.form = form_for(screen);
        self.category_choice = None;
        self.status = None;
    }

    /// Back to the main menu
    pub fn go_back(&mut self) {
        self.switch_screen(Screen::MainMenu);
    }

    pub fn menu_up(&mut self) {
        self.menu_index = self.menu_index.saturating_sub(1);
    }

    pub fn menu_down(&mut self) {
        if self.menu_index + 1 < MENU_ITEMS.len() {
            self.menu_index += 1;
        }
    }

    /// Run the highlighted main menu entry
    pub fn activate_menu(&mut self) {
        match MENU_ITEMS[self.menu_index] {
            MenuAction::Open(screen) => self.switch_screen(screen),
            MenuAction::Quit => self.quit(),
        }
    }

    /// Pick the next (or previous) category for the expense form
    pub fn cycle_category(&mut self, forward: bool) {
        let count = self.storage.ledger().categories().len();
        if count == 0 {
            self.set_error("Add a category first");
            return;
        }

        let next = match (self.category_choice, forward) {
            (None, true) => 0,
            (None, false) => count - 1,
            (Some(i), true) => (i + 1) % count,
            (Some(i), false) => (i + count - 1) % count,
        };
        self.category_choice = Some(next);

        let name = self.storage.ledger().categories()[next].name.clone();
        if let Some(field) = self.form.fields.get_mut(0) {
            field.set_content(name);
        }
    }

    /// Submit the form on the current screen
    pub fn submit(&mut self) {
        let result = match self.screen {
            Screen::Categories => self.add_category(),
            Screen::Expenses => self.add_expense(),
            Screen::Savings => self.set_goal(),
            Screen::MainMenu | Screen::Chart => return,
        };
        self.finish(result);
    }

    /// Deposit the savings form amount into the named goal
    pub fn deposit(&mut self) {
        if self.screen != Screen::Savings {
            return;
        }
        let result = self.deposit_to_goal();
        self.finish(result);
    }

    fn finish(&mut self, result: BudgetResult<String>) {
        match result {
            Ok(message) => {
                self.form.reset();
                self.category_choice = None;
                self.set_info(message);
            }
            Err(e) => self.set_error(e.to_string()),
        }
    }

    fn add_category(&mut self) -> BudgetResult<String> {
        let (name, limit) = (self.form.value(0).to_string(), self.form.value(1).to_string());
        let category = CategoryService::new(self.storage, self.settings).create(&name, &limit)?;
        Ok(format!("Added category {}", category.name))
    }

    fn add_expense(&mut self) -> BudgetResult<String> {
        let (category, amount) = (self.form.value(0).to_string(), self.form.value(1).to_string());
        let expense = ExpenseService::new(self.storage, self.settings).add(&category, &amount)?;
        Ok(format!(
            "Added {}",
            format_expense_line(category.trim(), &expense, self.settings)
        ))
    }

    fn set_goal(&mut self) -> BudgetResult<String> {
        let (name, target) = (self.form.value(0).to_string(), self.form.value(1).to_string());
        let goal = SavingsService::new(self.storage, self.settings).set_goal(&name, &target)?;
        Ok(format!("Added savings goal {}", goal.name))
    }

    fn deposit_to_goal(&mut self) -> BudgetResult<String> {
        let (name, amount) = (self.form.value(0).to_string(), self.form.value(1).to_string());
        let goal = SavingsService::new(self.storage, self.settings).deposit(&name, &amount)?;
        Ok(format_goal_line(&goal, self.settings))
    }

    pub fn toggle_chart_metric(&mut self) {
        self.chart_metric = self.chart_metric.toggled();
    }
}
