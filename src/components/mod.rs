//! UI Components
//!
//! Reusable Leptos components.

mod menu;
mod question_page;
mod roster_panel;
mod top_bar;
mod user_browser;
mod user_row;
mod vote_form;
mod vote_list;

pub use menu::Menu;
pub use question_page::QuestionPage;
pub use roster_panel::RosterPanel;
pub use top_bar::TopBar;
pub use user_browser::UserBrowser;
pub use user_row::UserRow;
pub use vote_form::VoteForm;
pub use vote_list::VoteListPanel;
